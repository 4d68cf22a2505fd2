use super::files::{atomic_write, read_file};
use super::Storage;
use crate::domain::{StatsRecord, Task};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Downloadable backup of the persisted state.
///
/// A `null` field means that entity was absent at export time; on import it
/// leaves the corresponding entity untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub stats: Option<StatsRecord>,
    pub todos: Option<Vec<Task>>,
    /// ISO-8601 timestamp of when the backup was taken
    pub export_date: String,
}

impl Backup {
    /// Snapshot the current persisted state
    pub fn export(storage: &dyn Storage) -> Result<Self> {
        Ok(Self {
            stats: Some(storage.load_stats()?),
            todos: Some(storage.load_tasks()?),
            export_date: chrono::Local::now().to_rfc3339(),
        })
    }

    /// Replace persisted state with the backup's contents. Fields that are
    /// `null` are skipped; present fields replace state wholesale.
    pub fn import(&self, storage: &mut dyn Storage) -> Result<()> {
        if let Some(stats) = &self.stats {
            storage.save_stats(stats)?;
        }
        if let Some(todos) = &self.todos {
            storage.save_tasks(todos)?;
        }
        Ok(())
    }

    /// Default backup file name, e.g. "pomo-backup-2026-08-23.json"
    pub fn default_file_name() -> String {
        format!(
            "pomo-backup-{}.json",
            chrono::Local::now().format("%Y-%m-%d")
        )
    }
}

/// Write a backup to a JSON file
pub fn write_backup_file<P: AsRef<Path>>(path: P, backup: &Backup) -> Result<()> {
    let json = serde_json::to_string_pretty(backup)?;
    atomic_write(path, &json)
}

/// Read a backup from a JSON file
pub fn read_backup_file<P: AsRef<Path>>(path: P) -> Result<Backup> {
    let path = path.as_ref();
    let content = read_file(path)?;
    if content.trim().is_empty() {
        anyhow::bail!("Backup file not found or empty: {}", path.display());
    }
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse backup file: {}", path.display()))
}
