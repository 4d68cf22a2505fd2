use crate::domain::{
    parse_mm_ss, SessionTimer, Statistics, StatsRecord, TaskList, DEFAULT_SESSION_SECS,
};
use crate::notifications;
use crate::storage::Storage;
use crate::ticker::COUNTDOWN_INTERVAL_SECS;
use std::time::{Duration, Instant};

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Typing a new task into the input line
    AddingTask,
    /// Typing an absolute "MM:SS" target for the timer
    EditingTime,
    /// Destructive reset of all statistics, awaiting confirmation
    ConfirmResetStats,
}

/// Main application state: the session timer, the task list, the statistics
/// component, and the injected storage backend they persist through.
///
/// Every mutation of persisted state is followed by a save. A failed save
/// becomes a transient status message; the in-memory state stays
/// authoritative and the next successful save resynchronizes.
pub struct AppState {
    pub timer: SessionTimer,
    pub tasks: TaskList,
    pub stats: Statistics,
    storage: Box<dyn Storage>,
    pub ui_mode: UiMode,
    pub selected_index: usize,
    pub input_buffer: String,
    pub status_message: Option<String>,
    last_countdown: Instant,
}

impl AppState {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        let mut status_message = None;

        let record = match storage.load_stats() {
            Ok(record) => record,
            Err(e) => {
                status_message = Some(format!("Could not load stats: {e}"));
                StatsRecord::default()
            }
        };
        let tasks = match storage.load_tasks() {
            Ok(tasks) => tasks,
            Err(e) => {
                status_message = Some(format!("Could not load tasks: {e}"));
                Vec::new()
            }
        };

        Self {
            timer: SessionTimer::new(DEFAULT_SESSION_SECS),
            tasks: TaskList::new(tasks),
            stats: Statistics::new(record),
            storage,
            ui_mode: UiMode::Normal,
            selected_index: 0,
            input_buffer: String::new(),
            status_message,
            last_countdown: Instant::now(),
        }
    }

    // ---- timer controls ----

    pub fn start_timer(&mut self) {
        if !self.timer.can_start() {
            self.status_message = Some("Nothing to count down; add time first".to_string());
            return;
        }
        self.timer.start(&mut self.stats);
        // A new start establishes a fresh countdown cadence
        self.last_countdown = Instant::now();
    }

    pub fn pause_timer(&mut self) {
        self.timer.pause();
    }

    pub fn stop_timer(&mut self) {
        self.timer.stop();
    }

    pub fn adjust_time(&mut self, delta_secs: i64) {
        self.timer.adjust_time(delta_secs);
    }

    pub fn dismiss_completion(&mut self) {
        self.timer.dismiss_completion();
    }

    /// Completion modal: stop the session entirely
    pub fn completion_stop(&mut self) {
        self.timer.dismiss_completion();
        self.timer.stop();
    }

    /// Completion modal: add minutes and keep going
    pub fn completion_extend(&mut self, minutes: u32) {
        self.timer.dismiss_completion();
        self.timer.adjust_time(i64::from(minutes) * 60);
        self.start_timer();
    }

    /// Apply the one-second countdown ticks owed since the last call.
    ///
    /// The event loop polls faster than once per second; this converts
    /// wall-clock time into discrete ticks so each tick fully resolves
    /// before the next. While the timer is not running the cadence anchor
    /// just follows the clock, so a later resume does not owe back-ticks.
    pub fn advance_countdown(&mut self) {
        if !self.timer.is_running() {
            self.last_countdown = Instant::now();
            return;
        }
        let interval = Duration::from_secs(COUNTDOWN_INTERVAL_SECS);
        while self.last_countdown.elapsed() >= interval {
            self.last_countdown += interval;
            self.countdown_tick();
            if !self.timer.is_running() {
                break;
            }
        }
    }

    /// One countdown tick, plus its side effects (alarm, stats persistence)
    pub fn countdown_tick(&mut self) {
        if self.timer.tick(&mut self.stats) {
            notifications::notify_session_complete();
        }
        self.persist_stats();
    }

    /// Submit the "set to MM:SS" input. Malformed text or seconds >= 60 is
    /// rejected without touching timer state.
    pub fn submit_time_entry(&mut self) {
        match parse_mm_ss(&self.input_buffer) {
            Ok(target_secs) => {
                self.timer.set_remaining(target_secs);
                self.input_buffer.clear();
                self.ui_mode = UiMode::Normal;
            }
            Err(e) => {
                self.status_message = Some(e.to_string());
            }
        }
    }

    // ---- task list ----

    pub fn submit_new_task(&mut self) {
        if self.tasks.add(&self.input_buffer).is_some() {
            self.persist_tasks();
        }
        self.input_buffer.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn toggle_selected_task(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if self.tasks.toggle(&id, &mut self.stats) {
            self.persist_stats();
            self.persist_tasks();
        }
    }

    pub fn delete_selected_task(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if self.tasks.delete(&id) {
            self.clamp_selection();
            self.persist_tasks();
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    pub fn move_task_up(&mut self) {
        if self.selected_index > 0
            && self
                .tasks
                .reorder(self.selected_index, self.selected_index - 1)
        {
            self.selected_index -= 1;
            self.persist_tasks();
        }
    }

    pub fn move_task_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len()
            && self
                .tasks
                .reorder(self.selected_index, self.selected_index + 1)
        {
            self.selected_index += 1;
            self.persist_tasks();
        }
    }

    fn selected_task_id(&self) -> Option<String> {
        self.tasks
            .tasks()
            .get(self.selected_index)
            .map(|t| t.id.clone())
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len().saturating_sub(1);
        }
    }

    // ---- statistics ----

    pub fn request_reset_stats(&mut self) {
        self.ui_mode = UiMode::ConfirmResetStats;
    }

    pub fn confirm_reset_stats(&mut self) {
        self.stats.reset_all();
        self.persist_stats();
        self.ui_mode = UiMode::Normal;
    }

    // ---- input form plumbing ----

    pub fn begin_add_task(&mut self) {
        self.input_buffer.clear();
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn begin_time_entry(&mut self) {
        self.input_buffer = crate::domain::format_mm_ss(self.timer.remaining_secs());
        self.ui_mode = UiMode::EditingTime;
    }

    pub fn cancel_input(&mut self) {
        self.input_buffer.clear();
        self.ui_mode = UiMode::Normal;
    }

    // ---- persistence ----

    fn persist_stats(&mut self) {
        if !self.stats.take_dirty() {
            return;
        }
        if let Err(e) = self.storage.save_stats(self.stats.record()) {
            self.status_message = Some(format!("Save failed: {e}"));
        }
    }

    fn persist_tasks(&mut self) {
        if let Err(e) = self.storage.save_tasks(self.tasks.tasks()) {
            self.status_message = Some(format!("Save failed: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Task, TimerPhase};
    use crate::storage::MemoryStorage;
    use anyhow::Result;
    use pretty_assertions::assert_eq;

    fn app_with_memory() -> AppState {
        AppState::new(Box::new(MemoryStorage::new()))
    }

    /// Storage double whose writes always fail
    struct FailingStorage;

    impl Storage for FailingStorage {
        fn load_stats(&self) -> Result<StatsRecord> {
            Ok(StatsRecord::default())
        }
        fn save_stats(&mut self, _record: &StatsRecord) -> Result<()> {
            anyhow::bail!("disk full")
        }
        fn load_tasks(&self) -> Result<Vec<Task>> {
            Ok(Vec::new())
        }
        fn save_tasks(&mut self, _tasks: &[Task]) -> Result<()> {
            anyhow::bail!("disk full")
        }
    }

    fn add_task(app: &mut AppState, text: &str) {
        app.begin_add_task();
        app.input_buffer = text.to_string();
        app.submit_new_task();
    }

    #[test]
    fn test_loads_persisted_state() {
        let mut storage = MemoryStorage::new();
        storage
            .save_stats(&StatsRecord {
                total_time_worked: 1500,
                completed_sessions: 1,
                completed_tasks: 2,
            })
            .unwrap();
        storage
            .save_tasks(&[Task {
                id: "t1".to_string(),
                text: "carried over".to_string(),
                completed: false,
            }])
            .unwrap();

        let app = AppState::new(Box::new(storage));
        assert_eq!(app.stats.record().completed_sessions, 1);
        assert_eq!(app.tasks.tasks()[0].text, "carried over");
        assert_eq!(app.timer.remaining_secs(), DEFAULT_SESSION_SECS);
    }

    #[test]
    fn test_session_completion_persists_stats() {
        let mut app = app_with_memory();
        app.adjust_time(-(i64::from(DEFAULT_SESSION_SECS)) + 3);
        assert_eq!(app.timer.remaining_secs(), 3);

        app.start_timer();
        for _ in 0..3 {
            app.countdown_tick();
        }

        assert_eq!(app.timer.phase(), TimerPhase::Completed);
        assert_eq!(app.stats.record().completed_sessions, 1);
        assert_eq!(app.stats.record().total_time_worked, 3);
    }

    #[test]
    fn test_completion_modal_flows() {
        let mut app = app_with_memory();
        app.adjust_time(-(i64::from(DEFAULT_SESSION_SECS)) + 1);
        app.start_timer();
        app.countdown_tick();
        assert!(app.timer.completion_pending());

        app.completion_extend(5);
        assert!(app.timer.is_running());
        assert_eq!(app.timer.remaining_secs(), 300);
        assert!(!app.timer.completion_pending());

        app.pause_timer();
        app.completion_stop();
        // Stop restores the user-configured duration (1s from the setup)
        assert_eq!(app.timer.remaining_secs(), 1);
        assert_eq!(app.timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_task_toggle_updates_session_log_and_counts() {
        let mut app = app_with_memory();
        add_task(&mut app, "ship the release");
        app.start_timer();

        app.toggle_selected_task();
        assert_eq!(app.stats.record().completed_tasks, 1);
        assert_eq!(app.stats.session_tasks(), ["ship the release"]);

        app.toggle_selected_task();
        assert_eq!(app.stats.record().completed_tasks, 0);
        assert!(app.stats.session_tasks().is_empty());
    }

    #[test]
    fn test_fresh_start_clears_session_log() {
        let mut app = app_with_memory();
        add_task(&mut app, "first session task");
        app.start_timer();
        app.toggle_selected_task();
        app.countdown_tick();
        app.stop_timer();
        assert_eq!(app.stats.session_tasks().len(), 1);

        // Stop restored remaining == baseline, so this start is fresh
        app.start_timer();
        assert!(app.stats.session_tasks().is_empty());
        // The persisted counter is untouched by the log reset
        assert_eq!(app.stats.record().completed_tasks, 1);
    }

    #[test]
    fn test_time_entry_rejects_bad_input() {
        let mut app = app_with_memory();
        app.begin_time_entry();
        assert_eq!(app.input_buffer, "25:00");

        app.input_buffer = "10:75".to_string();
        app.submit_time_entry();
        assert_eq!(app.timer.remaining_secs(), DEFAULT_SESSION_SECS);
        assert_eq!(app.ui_mode, UiMode::EditingTime);
        assert!(app.status_message.is_some());

        // A minutes value beyond the counter is rejected the same way
        app.input_buffer = "100000000:00".to_string();
        app.submit_time_entry();
        assert_eq!(app.timer.remaining_secs(), DEFAULT_SESSION_SECS);
        assert_eq!(app.ui_mode, UiMode::EditingTime);

        app.input_buffer = "10:30".to_string();
        app.submit_time_entry();
        assert_eq!(app.timer.remaining_secs(), 630);
        assert_eq!(app.timer.total_secs(), 630);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_blank_task_is_rejected() {
        let mut app = app_with_memory();
        add_task(&mut app, "   ");
        assert!(app.tasks.is_empty());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut app = app_with_memory();
        add_task(&mut app, "a");
        add_task(&mut app, "b");
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        app.delete_selected_task();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_reorder_follows_selection() {
        let mut app = app_with_memory();
        add_task(&mut app, "a");
        add_task(&mut app, "b");
        add_task(&mut app, "c");

        app.move_task_down();
        let texts: Vec<_> = app.tasks.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["b", "a", "c"]);
        assert_eq!(app.selected_index, 1);

        app.move_task_up();
        let texts: Vec<_> = app.tasks.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_reset_stats_requires_confirmation() {
        let mut app = app_with_memory();
        add_task(&mut app, "done thing");
        app.toggle_selected_task();
        assert_eq!(app.stats.record().completed_tasks, 1);

        app.request_reset_stats();
        assert_eq!(app.ui_mode, UiMode::ConfirmResetStats);

        app.confirm_reset_stats();
        assert_eq!(*app.stats.record(), StatsRecord::default());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_storage_failure_is_nonfatal() {
        let mut app = AppState::new(Box::new(FailingStorage));
        add_task(&mut app, "kept in memory");

        // The save failed but the task is still there
        assert!(app.status_message.is_some());
        assert_eq!(app.tasks.tasks()[0].text, "kept in memory");

        app.status_message = None;
        app.toggle_selected_task();
        assert!(app.status_message.is_some());
        assert_eq!(app.stats.record().completed_tasks, 1);
    }
}
