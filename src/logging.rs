use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};
use tracing::Level;

/// Installs a JSON subscriber that appends to `output_path`. Nothing is
/// installed otherwise, since stdout belongs to the terminal UI.
pub fn init_file_logging(output_path: &Path, level: &str) -> Result<()> {
    let level = parse_level(level)?;
    ensure_parent_dir(output_path)?;
    let file = File::options()
        .create(true)
        .append(true)
        .open(output_path)?;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .json()
        .with_max_level(level)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}

pub fn parse_level(level: &str) -> Result<Level> {
    level.parse::<Level>().map_err(|_| {
        eyre!("unknown log level `{level}` (expected trace, debug, info, warn or error)")
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
