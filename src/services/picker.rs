//! Selection and reading of the external word list (source B).

use crate::error::{Result, SyncError};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Picked {
    Selected(PathBuf),
    /// The user chose nothing. Not an error.
    Cancelled,
}

pub trait FilePicker {
    fn pick(&mut self) -> anyhow::Result<Picked>;
}

/// Path supplied up front, e.g. via `--file`.
pub struct ArgPicker(pub PathBuf);

impl FilePicker for ArgPicker {
    fn pick(&mut self) -> anyhow::Result<Picked> {
        Ok(Picked::Selected(self.0.clone()))
    }
}

/// Asks for a path interactively. An empty answer or EOF cancels.
pub struct PromptPicker<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> PromptPicker<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl<R: BufRead, W: Write> FilePicker for PromptPicker<R, W> {
    fn pick(&mut self) -> anyhow::Result<Picked> {
        write!(self.prompt_out, "Dictionary file to merge (empty to cancel): ")?;
        self.prompt_out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Picked::Cancelled);
        }
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(Picked::Cancelled);
        }
        Ok(Picked::Selected(PathBuf::from(answer)))
    }
}

pub fn read_external(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| SyncError::ExternalRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
