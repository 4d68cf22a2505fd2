use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Well-known file names inside the pomo directory
pub const STATS_FILE: &str = "stats.json";
pub const TASKS_FILE: &str = "tasks.json";

/// Get the pomo directory - checks for a local .pomo first, then falls back
/// to the global ~/.pomo
pub fn get_pomo_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_pomo(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".pomo"))
}

/// Find a local .pomo directory by walking up the directory tree
fn find_local_pomo(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let pomo_dir = current.join(".pomo");
        if pomo_dir.exists() && pomo_dir.is_dir() {
            return Some(pomo_dir);
        }
        current = current.parent()?;
    }
}

/// Ensure the pomo directory exists
pub fn ensure_pomo_dir() -> Result<PathBuf> {
    let dir = get_pomo_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .pomo directory in the current directory
pub fn init_local_pomo() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let pomo_dir = current_dir.join(".pomo");

    if pomo_dir.exists() {
        anyhow::bail!("Pomo directory already exists: {}", pomo_dir.display());
    }

    fs::create_dir_all(&pomo_dir)
        .with_context(|| format!("Failed to create directory: {}", pomo_dir.display()))?;

    Ok(pomo_dir)
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path.parent().context("File path has no parent directory")?;

    let mut temp_file =
        NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if the file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
