use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_to_lower_case() -> bool {
    true
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Persisted plugin configuration.
///
/// Unknown or missing keys fall back to defaults so older settings files keep loading.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_to_lower_case")]
    pub to_lower_case: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            to_lower_case: default_to_lower_case(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub note_entries: usize,
    pub external_entries: usize,
    pub skipped_checksum_lines: usize,
    pub merged_entries: usize,
    /// Entries that came only from the external file.
    pub added_to_note: usize,
}

#[derive(Debug, Serialize, Clone)]
pub struct SyncReport {
    pub note_path: PathBuf,
    pub external_path: PathBuf,
    /// `None` for previews, which never export.
    pub export_path: Option<PathBuf>,
    #[serde(flatten)]
    pub stats: MergeStats,
    pub sha256: String,
}

#[derive(Debug)]
pub enum SyncOutcome {
    Completed(SyncReport),
    Cancelled,
}

#[derive(Debug, Serialize)]
pub struct PreviewReport {
    #[serde(flatten)]
    pub report: SyncReport,
    pub entries: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HistoryEntry {
    pub ts: String,
    pub action: String,
    pub data: serde_json::Value,
}
