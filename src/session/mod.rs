//! Reading-session orchestration: controller state machine and transcript log.

pub mod controller;
pub mod transcript;

pub use controller::{PageOutcome, ReadingSession, SessionState};
pub use transcript::TranscriptLog;
