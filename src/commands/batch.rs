use anyhow::{Context, Result};
use std::path::Path;

use crate::commands::convert::convert_file_in_place;
use crate::io;

/// Converts every file named in the list, in place. Missing files fail
/// the run rather than being skipped silently.
pub fn run_batch(list: &Path) -> Result<()> {
    let paths = io::read_batch_list(list)
        .with_context(|| format!("failed to read list {}", list.display()))?;

    for path in &paths {
        convert_file_in_place(path)?;
    }
    Ok(())
}
