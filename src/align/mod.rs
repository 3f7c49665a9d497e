//! Incremental token alignment: partial-transcript diffing and the
//! word-by-word alignment engine.

pub mod diff;
pub mod engine;

pub use diff::{TokenWindow, fresh_tokens, tokenize};
pub use engine::{Cursor, align};
