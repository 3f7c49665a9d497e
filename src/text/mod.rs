//! Reference-text preparation: normalization and paragraph/word structure.

pub mod normalize;
pub mod reference;

pub use normalize::normalize;
pub use reference::{ReferenceText, WordRecord, WordStatus};
