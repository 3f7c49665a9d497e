//! Accumulated final-transcript log.
//!
//! Finals feed this log only; alignment works exclusively from partials. The
//! log exists for review and plain-text export.

use crate::error::{ReadalongError, Result};
use std::path::Path;

/// Append-only log of committed final transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptLog {
    finals: Vec<String>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one final transcript. Empty text is ignored.
    pub fn append(&mut self, text: &str) {
        let text = text.trim();
        if !text.is_empty() {
            self.finals.push(text.to_string());
        }
    }

    /// The full transcript as a single space-joined string.
    pub fn as_text(&self) -> String {
        self.finals.join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.finals.is_empty()
    }

    pub fn clear(&mut self) {
        self.finals.clear();
    }

    /// Write the transcript as plain text, one utterance per line.
    pub fn export_to(&self, path: &Path) -> Result<()> {
        let mut contents = self.finals.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        std::fs::write(path, contents).map_err(|e| ReadalongError::TranscriptExport {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
