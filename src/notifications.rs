/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when the focus session countdown reaches zero
pub fn notify_session_complete() {
    #[cfg(target_os = "macos")]
    {
        let script =
            r#"display notification "Session complete. Take a break!" with title "Pomo""#;

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(script)
            .output();
    }
}
