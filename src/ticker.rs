use std::time::Duration;

/// Render/event-poll tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Countdown granularity: the timer decrements once per second
pub const COUNTDOWN_INTERVAL_SECS: u64 = 1;

/// Get the event-poll tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}
