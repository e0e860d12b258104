use crate::domain::constants::CONFIG_DIR;
use crate::domain::models::{HistoryEntry, Settings};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

pub fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(CONFIG_DIR))
}

fn settings_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("settings.json"))
}

fn history_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("history.jsonl"))
}

/// Unparseable settings fall back to defaults so `settings reset` can repair them.
pub fn load_settings() -> anyhow::Result<Settings> {
    let p = settings_path()?;
    if !p.exists() {
        tracing::debug!(path = %p.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    let raw = std::fs::read_to_string(&p)?;
    match serde_json::from_str(&raw) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            tracing::warn!(path = %p.display(), error = %e, "invalid settings file, using defaults");
            Ok(Settings::default())
        }
    }
}

pub fn save_settings(s: &Settings) -> anyhow::Result<()> {
    let p = settings_path()?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&p, serde_json::to_string_pretty(s)?)?;
    tracing::info!(path = %p.display(), "settings saved");
    Ok(())
}

/// Append one event to the sync history. Best effort: failures are logged, never raised.
pub fn record(action: &str, data: serde_json::Value) {
    let path = match history_path() {
        Ok(p) => p,
        Err(_) => return,
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = HistoryEntry {
        ts: unix_now(),
        action: action.to_string(),
        data,
    };
    let line = match serde_json::to_string(&event) {
        Ok(l) => format!("{}\n", l),
        Err(_) => return,
    };
    if let Err(e) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()))
    {
        tracing::warn!(error = %e, "failed to append sync history");
    }
}

/// Most recent `limit` history entries, oldest first. Malformed lines are skipped.
pub fn load_history(limit: usize) -> anyhow::Result<Vec<HistoryEntry>> {
    let path = history_path()?;
    if !path.exists() {
        return Ok(vec![]);
    }
    let reader = BufReader::new(std::fs::File::open(path)?);
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<HistoryEntry>(&line) {
            Ok(e) => out.push(e),
            Err(e) => tracing::debug!(error = %e, "skipping malformed history line"),
        }
    }
    let skip = out.len().saturating_sub(limit);
    Ok(out.split_off(skip))
}

fn unix_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}
