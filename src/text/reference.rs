//! Reference-text structure: paragraphs of word records with reading status.

use crate::text::normalize;

/// Reading status of a single reference word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordStatus {
    /// Not yet reached or not yet read correctly.
    Pending,
    /// Read correctly; never changes back.
    Correct,
    /// Misread; blocks progress until repeated correctly.
    Incorrect,
}

/// One word of the reference text.
///
/// `text` and `normalized` are fixed at build time; only `status` mutates,
/// and only the alignment engine transitions it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    /// Original surface form, as displayed to the reader.
    pub text: String,
    /// Cached canonical form used for comparison.
    pub normalized: String,
    /// Current reading status.
    pub status: WordStatus,
}

impl WordRecord {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            normalized: normalize(text),
            status: WordStatus::Pending,
        }
    }
}

/// Ordered paragraphs of word records built from one page of raw text.
///
/// Once built, paragraph and word order never change; only word statuses
/// mutate. Replaced wholesale on page change or reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceText {
    paragraphs: Vec<Vec<WordRecord>>,
}

impl ReferenceText {
    /// Build a reference structure from raw page text.
    ///
    /// Paragraphs are separated by blank-line boundaries (a whitespace run
    /// containing at least one line break); empty paragraphs are discarded so
    /// the cursor can never land on a zero-word paragraph. Words are
    /// whitespace-separated tokens, each cached with its normalized form and
    /// `Pending` status.
    pub fn build(raw: &str) -> Self {
        let paragraphs = split_paragraphs(raw)
            .into_iter()
            .map(|par| par.split_whitespace().map(WordRecord::new).collect())
            .filter(|words: &Vec<WordRecord>| !words.is_empty())
            .collect();
        Self { paragraphs }
    }

    /// Read-only view of the paragraphs for presentation.
    pub fn paragraphs(&self) -> &[Vec<WordRecord>] {
        &self.paragraphs
    }

    /// Number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Word record at a cursor position, if in range.
    pub fn word(&self, paragraph: usize, word: usize) -> Option<&WordRecord> {
        self.paragraphs.get(paragraph).and_then(|p| p.get(word))
    }

    pub(crate) fn word_mut(&mut self, paragraph: usize, word: usize) -> Option<&mut WordRecord> {
        self.paragraphs
            .get_mut(paragraph)
            .and_then(|p| p.get_mut(word))
    }

    /// Number of words in one paragraph (0 if out of range).
    pub fn paragraph_len(&self, paragraph: usize) -> usize {
        self.paragraphs.get(paragraph).map_or(0, Vec::len)
    }

    /// Total word count across all paragraphs.
    pub fn word_count(&self) -> usize {
        self.paragraphs.iter().map(Vec::len).sum()
    }

    /// Number of words already read correctly.
    pub fn correct_count(&self) -> usize {
        self.paragraphs
            .iter()
            .flatten()
            .filter(|w| w.status == WordStatus::Correct)
            .count()
    }

    /// True iff every word has been read correctly.
    ///
    /// Vacuously true for an empty reference (a page with no extractable
    /// words counts as instantly complete).
    pub fn is_complete(&self) -> bool {
        self.paragraphs
            .iter()
            .flatten()
            .all(|w| w.status == WordStatus::Correct)
    }
}

/// Split raw text into trimmed, non-empty paragraph strings.
///
/// A paragraph boundary is a whitespace run containing at least one line
/// break on each side of the gap (i.e. a blank line, possibly with trailing
/// spaces or tabs on either line).
fn split_paragraphs(raw: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let bytes = raw.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\n' {
            // Scan the whitespace run starting here; a second line break
            // inside it marks a paragraph boundary.
            let mut j = i + 1;
            let mut breaks = 1;
            while j < bytes.len() && (bytes[j] as char).is_whitespace() {
                if bytes[j] == b'\n' {
                    breaks += 1;
                }
                j += 1;
            }
            if breaks > 1 {
                let par = raw[start..i].trim();
                if !par.is_empty() {
                    out.push(par);
                }
                start = j;
                i = j;
                continue;
            }
        }
        i += 1;
    }

    let tail = raw[start..].trim();
    if !tail.is_empty() {
        out.push(tail);
    }
    out
}
