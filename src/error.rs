use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    /// Shown to the user as a notice; nothing is written.
    #[error("Failed to read note \"{name}\"")]
    NoteUnavailable { name: String, path: PathBuf },

    #[error("Error reading file: {message}")]
    ExternalRead { path: PathBuf, message: String },

    #[error("another sync is already running (lock: {0})")]
    Busy(PathBuf),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SyncError {
    pub fn is_notice(&self) -> bool {
        matches!(self, SyncError::NoteUnavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
