use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use crate::io;
use crate::rewrite;

pub struct ConvertConfig {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub in_place: bool,
}

pub fn convert_path(config: ConvertConfig) -> Result<()> {
    if config.path.is_dir() {
        if !config.in_place {
            anyhow::bail!("converting a directory requires --in-place");
        }
        let files = io::CsWalker::new(config.path.clone()).walk()?;
        info!("converting {} files under {}", files.len(), config.path.display());
        for file in &files {
            convert_file_in_place(file)?;
        }
        return Ok(());
    }

    let source = io::read_file(&config.path)
        .with_context(|| format!("failed to read {}", config.path.display()))?;
    let converted = rewrite::convert(&source);

    match (&config.output, config.in_place) {
        (Some(output), _) => io::write_file(output, &converted),
        (None, true) => io::write_file(&config.path, &converted),
        (None, false) => {
            // Exact bytes, no trailing newline added: output may be piped
            // straight back into a file.
            print!("{converted}");
            Ok(())
        }
    }
}

pub fn convert_file_in_place(path: &Path) -> Result<()> {
    let source =
        io::read_file(path).with_context(|| format!("failed to read {}", path.display()))?;
    let converted = rewrite::convert(&source);

    if converted != source {
        io::write_file(path, &converted)?;
        info!("converted {}", path.display());
    }
    Ok(())
}
