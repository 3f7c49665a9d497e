//! Partial-transcript deduplication.
//!
//! A streaming recognizer repeatedly revises its unfinished hypothesis, so
//! consecutive partial results share a long common prefix. Only the tokens
//! past that prefix are new; everything before it has already been aligned.

use crate::text::normalize;

/// Split raw transcript text into normalized tokens.
///
/// Whitespace-delimited; tokens that normalize to empty (pure punctuation)
/// are dropped.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split_whitespace()
        .map(normalize)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Return the tokens of `new` past the longest common prefix with `previous`.
///
/// This is a simple element-wise prefix match, not a general diff: a
/// recognizer only ever appends to or replaces a suffix of its hypothesis.
/// If `new` is a strict prefix of `previous` (the recognizer shortened its
/// guess), the result is empty. Runs in O(min(|previous|, |new|)) and
/// allocates nothing; the result borrows from `new`.
pub fn fresh_tokens<'a>(previous: &[String], new: &'a [String]) -> &'a [String] {
    let mut k = 0;
    while k < previous.len() && k < new.len() && previous[k] == new[k] {
        k += 1;
    }
    &new[k..]
}

/// Comparison baseline for the next partial-result diff.
///
/// Holds the normalized token sequence of the most recent partial transcript.
/// Cleared when a final transcript arrives or recognition restarts, since the
/// recognizer's own buffer resets at those points.
#[derive(Debug, Clone, Default)]
pub struct TokenWindow {
    tokens: Vec<String>,
}

impl TokenWindow {
    /// Create an empty window (next diff compares against nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff a new partial transcript against the window and advance it.
    ///
    /// Returns the fresh tokens to align; the full new sequence becomes the
    /// baseline for the next call.
    pub fn advance(&mut self, raw_partial: &str) -> Vec<String> {
        let new_tokens = tokenize(raw_partial);
        let fresh = fresh_tokens(&self.tokens, &new_tokens).to_vec();
        self.tokens = new_tokens;
        fresh
    }

    /// Drop the baseline; the next partial is diffed against empty.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Current baseline tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}
