//! readalong - Guided read-along from streaming speech-to-text
//!
//! Tracks a reader's live progress through a known story, word by word,
//! from a stream of incrementally-revised recognizer transcripts.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod align;
pub mod app;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod recognition;
pub mod session;
pub mod story;
pub mod text;
pub mod view;

// Core alignment types
pub use align::{Cursor, TokenWindow, align, fresh_tokens, tokenize};
pub use text::{ReferenceText, WordRecord, WordStatus, normalize};

// Session orchestration
pub use session::{PageOutcome, ReadingSession, SessionState, TranscriptLog};

// External interfaces (recognizer and story corpus)
pub use recognition::{RecognitionChannel, RecognitionChannelFactory, RecognitionEvent};
pub use story::{BuiltinStories, FileStorySource, Page, Story, StorySource};

// Error handling
pub use error::{ReadalongError, Result};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
