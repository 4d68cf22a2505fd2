use thiserror::Error;

/// Error produced when parsing user-entered time text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeInputError {
    #[error("time must be in MM:SS format")]
    Malformed,
    #[error("seconds must be less than 60")]
    SecondsOutOfRange,
    #[error("time is too large")]
    TooLarge,
}

/// Format seconds as "MM:SS" (e.g. 1500 -> "25:00")
pub fn format_mm_ss(total_secs: u32) -> String {
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Parse "MM:SS" time text into seconds.
///
/// Rejects anything that is not two colon-separated numbers, a seconds part
/// of 60 or more, and totals that do not fit the timer's second counter.
/// Rejection never mutates any state; callers simply keep the previous value.
pub fn parse_mm_ss(text: &str) -> Result<u32, TimeInputError> {
    let (mins_part, secs_part) = text
        .trim()
        .split_once(':')
        .ok_or(TimeInputError::Malformed)?;

    let mins: u64 = mins_part.parse().map_err(|_| TimeInputError::Malformed)?;
    let secs: u64 = secs_part.parse().map_err(|_| TimeInputError::Malformed)?;

    if secs >= 60 {
        return Err(TimeInputError::SecondsOutOfRange);
    }

    let total = mins
        .checked_mul(60)
        .and_then(|m| m.checked_add(secs))
        .ok_or(TimeInputError::TooLarge)?;
    u32::try_from(total).map_err(|_| TimeInputError::TooLarge)
}

/// Format a duration in seconds as "Xh Ym" or "Ym" (for the stats pane)
pub fn format_hours_minutes(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_mm_ss() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(59), "00:59");
        assert_eq!(format_mm_ss(300), "05:00");
        assert_eq!(format_mm_ss(1500), "25:00");
        assert_eq!(format_mm_ss(61 * 60 + 5), "61:05");
    }

    #[test]
    fn test_parse_mm_ss() {
        assert_eq!(parse_mm_ss("25:00"), Ok(1500));
        assert_eq!(parse_mm_ss("05:30"), Ok(330));
        assert_eq!(parse_mm_ss("0:59"), Ok(59));
        assert_eq!(parse_mm_ss(" 10:00 "), Ok(600));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_mm_ss(""), Err(TimeInputError::Malformed));
        assert_eq!(parse_mm_ss("25"), Err(TimeInputError::Malformed));
        assert_eq!(parse_mm_ss("ab:cd"), Err(TimeInputError::Malformed));
        assert_eq!(parse_mm_ss("25:"), Err(TimeInputError::Malformed));
        assert_eq!(parse_mm_ss(":30"), Err(TimeInputError::Malformed));
        assert_eq!(parse_mm_ss("-5:00"), Err(TimeInputError::Malformed));
    }

    #[test]
    fn test_parse_rejects_seconds_over_59() {
        assert_eq!(parse_mm_ss("25:60"), Err(TimeInputError::SecondsOutOfRange));
        assert_eq!(parse_mm_ss("0:99"), Err(TimeInputError::SecondsOutOfRange));
    }

    #[test]
    fn test_parse_rejects_totals_beyond_the_counter() {
        // A huge minutes value must be rejected, not wrap or panic
        assert_eq!(parse_mm_ss("100000000:00"), Err(TimeInputError::TooLarge));
        assert_eq!(
            parse_mm_ss("18446744073709551615:00"),
            Err(TimeInputError::TooLarge)
        );
        // Largest total that still fits
        assert_eq!(parse_mm_ss("71582788:15"), Ok(u32::MAX));
    }

    #[test]
    fn test_format_hours_minutes() {
        assert_eq!(format_hours_minutes(0), "0m");
        assert_eq!(format_hours_minutes(90), "1m");
        assert_eq!(format_hours_minutes(3600), "1h 0m");
        assert_eq!(format_hours_minutes(5400), "1h 30m");
        assert_eq!(format_hours_minutes(2 * 3600 + 5 * 60), "2h 5m");
    }
}
