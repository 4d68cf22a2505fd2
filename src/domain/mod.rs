pub mod stats;
pub mod task;
pub mod timefmt;
pub mod timer;

pub use stats::{SessionStats, Statistics, StatsRecord, TaskStats};
pub use task::{Task, TaskList};
pub use timefmt::{format_hours_minutes, format_mm_ss, parse_mm_ss, TimeInputError};
pub use timer::{SessionTimer, TimerPhase, DEFAULT_SESSION_SECS};
