use super::Storage;
use crate::domain::{StatsRecord, Task};
use anyhow::Result;

/// In-memory storage backend: used by `--ephemeral` mode and as a test
/// double for the injectable storage service.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    stats: StatsRecord,
    tasks: Vec<Task>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load_stats(&self) -> Result<StatsRecord> {
        Ok(self.stats.clone())
    }

    fn save_stats(&mut self, record: &StatsRecord) -> Result<()> {
        self.stats = record.clone();
        Ok(())
    }

    fn load_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn save_tasks(&mut self, tasks: &[Task]) -> Result<()> {
        self.tasks = tasks.to_vec();
        Ok(())
    }
}
