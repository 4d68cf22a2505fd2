use super::files::{atomic_write, ensure_pomo_dir, read_file, STATS_FILE, TASKS_FILE};
use super::Storage;
use crate::domain::{StatsRecord, Task};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// File-backed storage: `stats.json` and `tasks.json` under the pomo
/// directory, written atomically. Missing or empty files load as defaults.
#[derive(Debug)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Open storage in the resolved pomo directory, creating it if needed
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(ensure_pomo_dir()?))
    }

    fn stats_path(&self) -> PathBuf {
        self.dir.join(STATS_FILE)
    }

    fn tasks_path(&self) -> PathBuf {
        self.dir.join(TASKS_FILE)
    }
}

impl Storage for JsonFileStorage {
    fn load_stats(&self) -> Result<StatsRecord> {
        let content = read_file(self.stats_path())?;
        if content.trim().is_empty() {
            return Ok(StatsRecord::default());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.stats_path().display()))
    }

    fn save_stats(&mut self, record: &StatsRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record)?;
        atomic_write(self.stats_path(), &json)
    }

    fn load_tasks(&self) -> Result<Vec<Task>> {
        let content = read_file(self.tasks_path())?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.tasks_path().display()))
    }

    fn save_tasks(&mut self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        atomic_write(self.tasks_path(), &json)
    }
}
