use crate::dictionary::{self, Dictionary};
use crate::domain::models::{PreviewReport, Settings, SyncOutcome, SyncReport};
use crate::error::{Result, SyncError};
use crate::services::export::export;
use crate::services::picker::{read_external, FilePicker, Picked};
use crate::services::vault::Vault;
use std::fs::{File, OpenOptions, TryLockError};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Exclusive advisory lock on `sync.lock`, held for the lifetime of one sync.
/// The OS releases it when the process exits, killed or not; a second sync
/// fails with `SyncError::Busy` while it is held.
pub struct SyncGuard {
    _file: File,
}

impl SyncGuard {
    pub fn acquire(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join("sync.lock");
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        match file.try_lock() {
            Ok(()) => {}
            Err(TryLockError::WouldBlock) => return Err(SyncError::Busy(path)),
            Err(TryLockError::Error(e)) => return Err(e.into()),
        }
        if let Err(e) = file
            .set_len(0)
            .and_then(|_| writeln!(file, "pid={}", std::process::id()))
        {
            tracing::debug!(path = %path.display(), error = %e, "failed to write pid to sync lock");
        }
        Ok(Self { _file: file })
    }
}

struct Merged {
    external_path: PathBuf,
    dict: Dictionary,
    report: SyncReport,
}

/// Read both sources and merge them. `None` when the user cancels the pick.
fn read_and_merge(vault: &Vault, picker: &mut dyn FilePicker) -> Result<Option<Merged>> {
    let note_text = vault.read_note()?;

    let external_path = match picker.pick()? {
        Picked::Selected(p) => p,
        Picked::Cancelled => {
            tracing::info!("file selection cancelled");
            return Ok(None);
        }
    };
    let external_text = read_external(&external_path).map_err(|e| {
        tracing::error!(path = %external_path.display(), error = %e, "external dictionary unreadable");
        e
    })?;

    let (dict, stats) = dictionary::merge(&note_text, &external_text);
    tracing::debug!(
        note = stats.note_entries,
        external = stats.external_entries,
        merged = stats.merged_entries,
        "dictionaries merged"
    );
    if dict.is_empty() {
        tracing::warn!("merged dictionary is empty");
    }
    let report = SyncReport {
        note_path: vault.note_path(),
        external_path: external_path.clone(),
        export_path: None,
        stats,
        sha256: dict.sha256_hex(),
    };
    Ok(Some(Merged {
        external_path,
        dict,
        report,
    }))
}

pub fn run_sync(
    vault: &Vault,
    picker: &mut dyn FilePicker,
    export_dir: &Path,
    lock_dir: &Path,
    settings: &Settings,
) -> Result<SyncOutcome> {
    let _guard = SyncGuard::acquire(lock_dir)?;
    tracing::debug!(to_lower_case = settings.to_lower_case, "sync started");

    let Some(merged) = read_and_merge(vault, picker)? else {
        return Ok(SyncOutcome::Cancelled);
    };
    let text = merged.dict.to_text();

    // No rollback: if the export fails the note has already been rewritten.
    vault.write_note(&text)?;
    let export_path = export(export_dir, &text)?;

    let mut report = merged.report;
    report.export_path = Some(export_path);
    tracing::info!(
        note = %report.note_path.display(),
        external = %merged.external_path.display(),
        entries = report.stats.merged_entries,
        "sync complete"
    );
    Ok(SyncOutcome::Completed(report))
}

pub fn preview(vault: &Vault, picker: &mut dyn FilePicker) -> Result<Option<PreviewReport>> {
    Ok(read_and_merge(vault, picker)?.map(|m| PreviewReport {
        report: m.report,
        entries: m.dict.into_entries(),
    }))
}
