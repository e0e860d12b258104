use crate::error::{Result, SyncError};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The dictionary note inside a vault (source A).
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    note: PathBuf,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>, note: impl AsRef<Path>) -> Self {
        Self {
            root: root.into(),
            note: note.as_ref().to_path_buf(),
        }
    }

    pub fn note_path(&self) -> PathBuf {
        self.root.join(&self.note)
    }

    /// Display name used in notices, e.g. `Custom Dictionary`.
    pub fn note_name(&self) -> String {
        self.note
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.note.display().to_string())
    }

    fn unavailable(&self) -> SyncError {
        SyncError::NoteUnavailable {
            name: self.note_name(),
            path: self.note_path(),
        }
    }

    pub fn read_note(&self) -> Result<String> {
        let path = self.note_path();
        if !path.is_file() {
            tracing::warn!(path = %path.display(), "dictionary note missing");
            return Err(self.unavailable());
        }
        std::fs::read_to_string(&path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "dictionary note unreadable");
            self.unavailable()
        })
    }

    /// Overwrite the note with `content` via temp file + rename.
    pub fn write_note(&self, content: &str) -> Result<()> {
        let path = self.note_path();
        write_atomic(&path, content)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "dictionary note written");
        Ok(())
    }
}

pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let wrap = |source: std::io::Error| SyncError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let temp_path = path.with_file_name(tmp_name);
    {
        let mut file = File::create(&temp_path).map_err(wrap)?;
        file.write_all(content.as_bytes()).map_err(wrap)?;
        file.sync_all().map_err(wrap)?;
    }
    std::fs::rename(&temp_path, path).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        wrap(e)
    })
}
