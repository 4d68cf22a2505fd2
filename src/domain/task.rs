use super::stats::TaskStats;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task on the focus list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque stable identifier, assigned at creation
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl Task {
    fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            completed: false,
        }
    }
}

/// Ordered, user-reorderable task collection.
///
/// Toggling a task reports the completion change through the narrow
/// [`TaskStats`] interface so the persisted counter and the session task log
/// stay consistent with checkbox churn during a session. Deleting a task has
/// no statistics side effect.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Append a new task. Blank or whitespace-only text is rejected.
    /// Returns the id of the created task.
    pub fn add(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let task = Task::new(trimmed.to_string());
        let id = task.id.clone();
        self.tasks.push(task);
        Some(id)
    }

    /// Flip a task's completed flag, reporting the change to statistics.
    /// Returns false when the id is unknown.
    pub fn toggle(&mut self, id: &str, stats: &mut dyn TaskStats) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        if task.completed {
            stats.increment_completed_tasks();
            stats.add_session_task(&task.text);
        } else {
            stats.decrement_completed_tasks();
            stats.remove_session_task(&task.text);
        }
        true
    }

    /// Remove a task by id. Returns false when the id is unknown.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tasks.remove(pos);
        true
    }

    /// Move one task from `from` to `to`, preserving every other task's
    /// relative order (a splice-and-reinsert, not a swap).
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tasks.len() || to >= self.tasks.len() {
            return false;
        }
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        true
    }
}
