use serde::{Deserialize, Serialize};

/// Persisted usage totals (single instance, camelCase on the wire)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRecord {
    /// Total seconds spent in completed sessions
    #[serde(default)]
    pub total_time_worked: u64,
    #[serde(default)]
    pub completed_sessions: u32,
    #[serde(default)]
    pub completed_tasks: u32,
}

/// The slice of the statistics contract the session timer needs
pub trait SessionStats {
    /// Credit one completed session of the given duration
    fn record_completed_session(&mut self, duration_secs: u32);
    /// Drop the previous session's completed-task log
    fn clear_session_tasks(&mut self);
}

/// The slice of the statistics contract the task list needs
pub trait TaskStats {
    fn increment_completed_tasks(&mut self);
    /// Decrement the completed-task counter, floored at 0
    fn decrement_completed_tasks(&mut self);
    fn add_session_task(&mut self, text: &str);
    /// Remove the first matching entry from the session task log
    fn remove_session_task(&mut self, text: &str);
}

/// In-memory statistics component: the persisted record plus the ephemeral
/// log of task descriptions completed during the current session.
///
/// Persistence is the app layer's job; `take_dirty` reports whether the
/// record changed since it was last saved. The session task log is never
/// persisted.
#[derive(Debug)]
pub struct Statistics {
    record: StatsRecord,
    session_tasks: Vec<String>,
    dirty: bool,
}

impl Statistics {
    pub fn new(record: StatsRecord) -> Self {
        Self {
            record,
            session_tasks: Vec::new(),
            dirty: false,
        }
    }

    pub fn record(&self) -> &StatsRecord {
        &self.record
    }

    /// Task descriptions completed during the current session, in order
    pub fn session_tasks(&self) -> &[String] {
        &self.session_tasks
    }

    /// Zero every counter and clear the session log. Destructive; callers
    /// must confirm with the user first.
    pub fn reset_all(&mut self) {
        self.record = StatsRecord::default();
        self.session_tasks.clear();
        self.dirty = true;
    }

    /// Returns whether the record changed since the last call, clearing the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl SessionStats for Statistics {
    fn record_completed_session(&mut self, duration_secs: u32) {
        self.record.completed_sessions += 1;
        self.record.total_time_worked += u64::from(duration_secs);
        self.dirty = true;
    }

    fn clear_session_tasks(&mut self) {
        self.session_tasks.clear();
    }
}

impl TaskStats for Statistics {
    fn increment_completed_tasks(&mut self) {
        self.record.completed_tasks += 1;
        self.dirty = true;
    }

    fn decrement_completed_tasks(&mut self) {
        self.record.completed_tasks = self.record.completed_tasks.saturating_sub(1);
        self.dirty = true;
    }

    fn add_session_task(&mut self, text: &str) {
        self.session_tasks.push(text.to_string());
    }

    fn remove_session_task(&mut self, text: &str) {
        if let Some(pos) = self.session_tasks.iter().position(|t| t == text) {
            self.session_tasks.remove(pos);
        }
    }
}
