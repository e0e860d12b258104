use sha2::{Digest, Sha256};
use std::collections::HashSet;

use crate::domain::constants::CHECKSUM_PREFIX;
use crate::domain::models::MergeStats;

/// Unique dictionary entries in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the entry was not present yet.
    pub fn insert(&mut self, entry: &str) -> bool {
        if self.contains(entry) {
            return false;
        }
        self.seen.insert(entry.to_string());
        self.entries.push(entry.to_string());
        true
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.seen.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    /// Newline-joined entries, no trailing newline.
    pub fn to_text(&self) -> String {
        self.iter().collect::<Vec<_>>().join("\n")
    }

    pub fn sha256_hex(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.to_text().as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Parse the vault note: lines are trimmed, blanks dropped.
pub fn parse_note(text: &str) -> Dictionary {
    let mut dict = Dictionary::new();
    for line in text.split('\n') {
        let word = line.trim();
        if !word.is_empty() {
            dict.insert(word);
        }
    }
    dict
}

/// External lines kept verbatim (untrimmed), plus the number of checksum lines dropped.
/// Lines that are blank after trimming are dropped like empty ones.
pub fn parse_external(text: &str) -> (Vec<&str>, usize) {
    let mut words = Vec::new();
    let mut skipped = 0usize;
    for line in text.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with(CHECKSUM_PREFIX) {
            skipped += 1;
            continue;
        }
        words.push(line);
    }
    (words, skipped)
}

pub fn merge(note_text: &str, external_text: &str) -> (Dictionary, MergeStats) {
    let mut dict = parse_note(note_text);
    let note_entries = dict.len();

    let (external, skipped) = parse_external(external_text);
    let external_entries = external.iter().collect::<HashSet<_>>().len();
    for word in external {
        dict.insert(word);
    }

    let stats = MergeStats {
        note_entries,
        external_entries,
        skipped_checksum_lines: skipped,
        merged_entries: dict.len(),
        added_to_note: dict.len() - note_entries,
    };
    (dict, stats)
}
