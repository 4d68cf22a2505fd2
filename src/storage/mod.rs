pub mod backup;
pub mod files;
pub mod json;
pub mod memory;

pub use backup::{read_backup_file, write_backup_file, Backup};
pub use files::{get_pomo_dir, init_local_pomo};
pub use json::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::domain::{StatsRecord, Task};
use anyhow::Result;

/// Storage service consumed by the core.
///
/// Both entities live under fixed well-known keys; a backend may be a local
/// file store or anything else that can make a write eventually durable. The
/// core treats saves as fire-and-forget: a failed write is surfaced to the
/// user but the in-memory state stays authoritative, and the next successful
/// write resynchronizes.
pub trait Storage {
    /// Load the statistics record, defaulting to zeros when absent
    fn load_stats(&self) -> Result<StatsRecord>;
    fn save_stats(&mut self, record: &StatsRecord) -> Result<()>;
    /// Load the task collection in persisted order, empty when absent
    fn load_tasks(&self) -> Result<Vec<Task>>;
    fn save_tasks(&mut self, tasks: &[Task]) -> Result<()>;
}
