//! Terminal presentation of the reading session.
//!
//! Read-only: renders snapshots of the reference structure and progress.
//! Correct words are green, the misread word is red, everything not yet
//! reached is dimmed.

use crate::session::ReadingSession;
use crate::text::{ReferenceText, WordStatus};
use owo_colors::OwoColorize;

/// Render one word according to its reading status.
fn format_word(text: &str, status: WordStatus) -> String {
    match status {
        WordStatus::Correct => text.green().to_string(),
        WordStatus::Incorrect => text.red().bold().to_string(),
        WordStatus::Pending => text.dimmed().to_string(),
    }
}

/// Render the reference text with per-word highlighting, paragraphs
/// separated by blank lines.
pub fn format_reference(reference: &ReferenceText) -> String {
    reference
        .paragraphs()
        .iter()
        .map(|paragraph| {
            paragraph
                .iter()
                .map(|w| format_word(&w.text, w.status))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One-line progress summary for the current page.
pub fn progress_line(session: &ReadingSession) -> String {
    let (correct, total) = session.progress();
    format!(
        "Page {}/{} - {}/{} words",
        session.page_index() + 1,
        session.page_count(),
        correct,
        total
    )
}

/// Print the full session view: title, highlighted page text, progress.
pub fn render_session(session: &ReadingSession) {
    println!();
    println!("{}", session.story().title.bold());
    println!("{}", progress_line(session).dimmed());
    println!();
    println!("{}", format_reference(session.reference()));
    println!();
}

/// Print the frozen-word prompt when the reader needs to repeat a word.
pub fn render_frozen_hint(session: &ReadingSession) {
    let cursor = session.cursor();
    if !cursor.frozen {
        return;
    }
    if let Some(word) = session.reference().word(cursor.paragraph, cursor.word) {
        eprintln!(
            "  {} {}",
            "try again:".yellow(),
            word.text.bold()
        );
    }
}
