use super::stats::SessionStats;

/// Default session length: 25 minutes
pub const DEFAULT_SESSION_SECS: u32 = 25 * 60;

/// Derived presentation state of the session timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Never started, or fully reset (no time elapsed)
    Idle,
    Running,
    Paused,
    /// Countdown reached zero; notification pending dismissal
    Completed,
}

/// Session timer state machine.
///
/// Holds the remaining countdown, the baseline the current session started
/// at, and the duration the user last configured while idle. Fresh-session
/// detection is the equality `remaining == baseline` while not running:
/// starting such a session re-arms the one-shot completion guard and clears
/// the session task log; starting with elapsed time is a resume and leaves
/// the log alone.
///
/// The timer never touches storage. Statistics side effects go through the
/// narrow [`SessionStats`] interface passed into the operations that need it.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    remaining_secs: u32,
    running: bool,
    session_baseline_secs: u32,
    user_configured_secs: u32,
    completion_pending: bool,
    /// One-shot guard: a session is credited to statistics at most once per
    /// countdown-to-zero, even if extra ticks arrive after completion.
    session_counted: bool,
}

impl SessionTimer {
    pub fn new(initial_secs: u32) -> Self {
        Self {
            remaining_secs: initial_secs,
            running: false,
            session_baseline_secs: initial_secs,
            user_configured_secs: initial_secs,
            completion_pending: false,
            session_counted: false,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// The duration the current session started at ("total" for progress)
    pub fn total_secs(&self) -> u32 {
        self.session_baseline_secs
    }

    pub fn user_configured_secs(&self) -> u32 {
        self.user_configured_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completion_pending(&self) -> bool {
        self.completion_pending
    }

    /// Whether no time has elapsed in the current session
    pub fn is_fresh(&self) -> bool {
        self.remaining_secs == self.session_baseline_secs
    }

    pub fn phase(&self) -> TimerPhase {
        if self.completion_pending {
            TimerPhase::Completed
        } else if self.running {
            TimerPhase::Running
        } else if self.is_fresh() {
            TimerPhase::Idle
        } else {
            TimerPhase::Paused
        }
    }

    /// Fraction of the session elapsed, 0.0 to 1.0
    pub fn progress(&self) -> f64 {
        if self.session_baseline_secs == 0 {
            return 1.0;
        }
        let elapsed = self.session_baseline_secs.saturating_sub(self.remaining_secs);
        f64::from(elapsed) / f64::from(self.session_baseline_secs)
    }

    /// Whether `start` would be accepted right now
    pub fn can_start(&self) -> bool {
        self.remaining_secs > 0
    }

    /// Start or resume the countdown.
    ///
    /// A fresh session (not running, no time elapsed) re-anchors the baseline
    /// and clears the previous session's task log. Rejected when the
    /// remaining time is zero: a zero-length countdown would complete
    /// immediately.
    pub fn start(&mut self, stats: &mut dyn SessionStats) {
        if self.remaining_secs == 0 {
            return;
        }
        if !self.running && self.is_fresh() {
            self.session_baseline_secs = self.remaining_secs;
            stats.clear_session_tasks();
        }
        self.session_counted = false;
        self.running = true;
    }

    /// Stop the countdown without altering the remaining time
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Reset: restore the remaining time and baseline to the user-configured
    /// duration and clear any pending completion.
    pub fn stop(&mut self) {
        self.running = false;
        self.remaining_secs = self.user_configured_secs;
        self.session_baseline_secs = self.user_configured_secs;
        self.completion_pending = false;
    }

    /// Shift the remaining time by `delta_secs`, clamped at zero and
    /// saturating at the counter's ceiling.
    ///
    /// While not running this redefines the full session length, so the
    /// baseline and the user-configured duration follow the new value. While
    /// running only the remaining time moves; progress stays relative to the
    /// baseline captured at session start.
    pub fn adjust_time(&mut self, delta_secs: i64) {
        let shifted = i64::from(self.remaining_secs).saturating_add(delta_secs);
        let new_secs = u32::try_from(shifted.max(0)).unwrap_or(u32::MAX);
        self.remaining_secs = new_secs;
        if !self.running {
            self.session_baseline_secs = new_secs;
            self.user_configured_secs = new_secs;
        } else if new_secs == 0 {
            // remaining == 0 always implies not running; an adjustment that
            // empties the countdown mid-run does not count as a completion
            self.running = false;
        }
    }

    /// Set the remaining time to an absolute target (the "set to MM:SS"
    /// affordance), implemented as the equivalent delta.
    pub fn set_remaining(&mut self, target_secs: u32) {
        self.adjust_time(i64::from(target_secs) - i64::from(self.remaining_secs));
    }

    /// Clear the pending-completion notification. No-op when none is pending.
    pub fn dismiss_completion(&mut self) {
        self.completion_pending = false;
    }

    /// Apply one one-second countdown tick.
    ///
    /// A tick that fires while not running (a late tick after `pause`) is a
    /// no-op. When the countdown reaches zero the timer stops, a completion
    /// becomes pending, and the session is credited to statistics exactly
    /// once, guarded by `session_counted`. Returns true when this tick
    /// completed the session, so the caller can fire the alarm.
    pub fn tick(&mut self, stats: &mut dyn SessionStats) -> bool {
        if !self.running || self.remaining_secs == 0 {
            return false;
        }

        self.remaining_secs -= 1;
        if self.remaining_secs > 0 {
            return false;
        }

        self.running = false;
        self.completion_pending = true;

        if self.session_counted {
            return false;
        }
        self.session_counted = true;
        stats.record_completed_session(self.session_baseline_secs);
        true
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stats::{StatsRecord, Statistics, TaskStats};
    use pretty_assertions::assert_eq;

    fn fresh_stats() -> Statistics {
        Statistics::new(StatsRecord::default())
    }

    fn run_to_completion(timer: &mut SessionTimer, stats: &mut Statistics) {
        while timer.is_running() {
            timer.tick(stats);
        }
    }

    #[test]
    fn test_full_session_credits_stats_once() {
        // Scenario A: 25:00 baseline, run 1500 ticks to zero
        let mut timer = SessionTimer::new(1500);
        let mut stats = fresh_stats();

        timer.start(&mut stats);
        for _ in 0..1500 {
            timer.tick(&mut stats);
        }

        assert_eq!(timer.remaining_secs(), 0);
        assert!(!timer.is_running());
        assert!(timer.completion_pending());
        assert_eq!(stats.record().completed_sessions, 1);
        assert_eq!(stats.record().total_time_worked, 1500);
    }

    #[test]
    fn test_extra_ticks_after_completion_are_noops() {
        let mut timer = SessionTimer::new(3);
        let mut stats = fresh_stats();

        timer.start(&mut stats);
        for _ in 0..10 {
            timer.tick(&mut stats);
        }

        assert_eq!(timer.remaining_secs(), 0);
        assert_eq!(stats.record().completed_sessions, 1);
        assert_eq!(stats.record().total_time_worked, 3);
    }

    #[test]
    fn test_stop_restores_user_configured_time() {
        // Scenario B: idle at 25:00, adjust down to 5:00, run a bit, stop
        let mut timer = SessionTimer::new(1500);
        let mut stats = fresh_stats();

        timer.adjust_time(-20 * 60);
        assert_eq!(timer.remaining_secs(), 300);
        assert_eq!(timer.total_secs(), 300);

        timer.start(&mut stats);
        for _ in 0..50 {
            timer.tick(&mut stats);
        }
        timer.pause();
        assert_eq!(timer.remaining_secs(), 250);

        timer.stop();
        assert_eq!(timer.remaining_secs(), 300);
        assert_eq!(timer.total_secs(), 300);
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_start_while_running_is_idempotent() {
        // Scenario D: a second start must not double-count the completion
        let mut timer = SessionTimer::new(5);
        let mut stats = fresh_stats();

        timer.start(&mut stats);
        timer.tick(&mut stats);
        let remaining = timer.remaining_secs();
        timer.start(&mut stats);
        assert_eq!(timer.remaining_secs(), remaining);
        assert!(timer.is_running());

        run_to_completion(&mut timer, &mut stats);
        assert_eq!(stats.record().completed_sessions, 1);
    }

    #[test]
    fn test_start_at_zero_is_rejected() {
        // Scenario E
        let mut timer = SessionTimer::new(10);
        let mut stats = fresh_stats();

        timer.adjust_time(-10);
        assert_eq!(timer.remaining_secs(), 0);
        assert!(!timer.can_start());

        timer.start(&mut stats);
        assert!(!timer.is_running());
        assert_eq!(stats.record().completed_sessions, 0);
    }

    #[test]
    fn test_adjust_time_never_goes_negative() {
        let mut timer = SessionTimer::new(120);
        let mut stats = fresh_stats();

        timer.adjust_time(-1_000_000);
        assert_eq!(timer.remaining_secs(), 0);

        timer.set_remaining(90);
        timer.start(&mut stats);
        timer.adjust_time(i64::MIN / 2);
        assert_eq!(timer.remaining_secs(), 0);
        // remaining == 0 implies not running
        assert!(!timer.is_running());
        // and a clamp-to-zero is not a completed session
        assert_eq!(stats.record().completed_sessions, 0);
        assert!(!timer.completion_pending());
    }

    #[test]
    fn test_adjust_time_saturates_at_the_counter_ceiling() {
        let mut timer = SessionTimer::new(0);

        timer.set_remaining(u32::MAX);
        assert_eq!(timer.remaining_secs(), u32::MAX);

        // Adding another minute must pin at the ceiling, not wrap around
        timer.adjust_time(60);
        assert_eq!(timer.remaining_secs(), u32::MAX);
        assert_eq!(timer.total_secs(), u32::MAX);

        timer.adjust_time(i64::MAX);
        assert_eq!(timer.remaining_secs(), u32::MAX);
    }

    #[test]
    fn test_adjust_while_idle_moves_baseline_and_configured() {
        let mut timer = SessionTimer::new(1500);

        timer.adjust_time(300);
        assert_eq!(timer.remaining_secs(), 1800);
        assert_eq!(timer.total_secs(), 1800);
        assert_eq!(timer.user_configured_secs(), 1800);
    }

    #[test]
    fn test_adjust_while_running_leaves_baseline_alone() {
        let mut timer = SessionTimer::new(1500);
        let mut stats = fresh_stats();

        timer.start(&mut stats);
        timer.tick(&mut stats);
        timer.adjust_time(300);

        assert_eq!(timer.remaining_secs(), 1799);
        assert_eq!(timer.total_secs(), 1500);
        assert_eq!(timer.user_configured_secs(), 1500);
    }

    #[test]
    fn test_fresh_start_clears_session_tasks_resume_does_not() {
        let mut timer = SessionTimer::new(100);
        let mut stats = fresh_stats();
        stats.add_session_task("left over from last session");

        timer.start(&mut stats);
        assert!(stats.session_tasks().is_empty());

        stats.add_session_task("done mid-session");
        timer.tick(&mut stats);
        timer.pause();
        timer.start(&mut stats); // resume: elapsed time, keep the log
        assert_eq!(stats.session_tasks(), ["done mid-session"]);
    }

    #[test]
    fn test_dismiss_completion_is_idempotent() {
        let mut timer = SessionTimer::new(1);
        let mut stats = fresh_stats();

        timer.start(&mut stats);
        timer.tick(&mut stats);
        assert!(timer.completion_pending());

        timer.dismiss_completion();
        let after_first = timer.clone();
        timer.dismiss_completion();

        assert!(!timer.completion_pending());
        assert_eq!(timer.remaining_secs(), after_first.remaining_secs());
        assert_eq!(timer.phase(), after_first.phase());
    }

    #[test]
    fn test_completion_modal_add_time_flow() {
        // Dismiss, add five minutes, restart: the new countdown is a fresh
        // session with a 300s baseline, credited separately.
        let mut timer = SessionTimer::new(2);
        let mut stats = fresh_stats();

        timer.start(&mut stats);
        timer.tick(&mut stats);
        timer.tick(&mut stats);
        assert!(timer.completion_pending());

        timer.dismiss_completion();
        timer.adjust_time(5 * 60);
        timer.start(&mut stats);
        run_to_completion(&mut timer, &mut stats);

        assert_eq!(stats.record().completed_sessions, 2);
        assert_eq!(stats.record().total_time_worked, 2 + 300);
    }

    #[test]
    fn test_tick_after_pause_is_noop() {
        let mut timer = SessionTimer::new(60);
        let mut stats = fresh_stats();

        timer.start(&mut stats);
        timer.tick(&mut stats);
        timer.pause();

        // A tick scheduled before the pause fires late
        timer.tick(&mut stats);
        assert_eq!(timer.remaining_secs(), 59);
    }

    #[test]
    fn test_phase_labels() {
        let mut timer = SessionTimer::new(100);
        let mut stats = fresh_stats();

        assert_eq!(timer.phase(), TimerPhase::Idle);
        timer.start(&mut stats);
        assert_eq!(timer.phase(), TimerPhase::Running);
        timer.tick(&mut stats);
        timer.pause();
        assert_eq!(timer.phase(), TimerPhase::Paused);
        timer.stop();
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_progress_is_relative_to_baseline() {
        let mut timer = SessionTimer::new(100);
        let mut stats = fresh_stats();

        assert_eq!(timer.progress(), 0.0);
        timer.start(&mut stats);
        for _ in 0..25 {
            timer.tick(&mut stats);
        }
        assert!((timer.progress() - 0.25).abs() < 1e-9);

        // Mid-session adjustment does not move the denominator
        timer.adjust_time(100);
        assert_eq!(timer.total_secs(), 100);
    }
}
