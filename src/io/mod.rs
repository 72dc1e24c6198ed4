pub mod walker;

pub use walker::CsWalker;

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Paths listed one per line. Blank lines and `#` comments are skipped.
pub fn read_batch_list(path: &Path) -> Result<Vec<PathBuf>> {
    let content = read_file(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect())
}
