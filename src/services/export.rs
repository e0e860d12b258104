use crate::domain::constants::EXPORT_FILE_NAME;
use crate::error::Result;
use crate::services::vault::write_atomic;
use std::path::{Path, PathBuf};

pub fn default_export_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join("Downloads"))
}

/// Deliver the merged list as a fresh `Custom Dictionary.txt` in `dir`.
/// The file the user picked is never touched.
pub fn export(dir: &Path, content: &str) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    write_atomic(&path, content)?;
    tracing::debug!(path = %path.display(), "merged dictionary exported");
    Ok(path)
}
