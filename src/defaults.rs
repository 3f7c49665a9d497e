//! Default configuration constants for readalong.
//!
//! Shared constants used across configuration types to keep defaults in one
//! place.

/// Default recognition language code.
///
/// The upstream recognizer is configured for one language per session; the
/// core only compares normalized tokens and does not interpret the code.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Default recognition service region.
pub const DEFAULT_REGION: &str = "westeurope";

/// Default story id loaded when none is given on the command line.
pub const DEFAULT_STORY_ID: u32 = 1;

/// Buffer size for the recognition event channel.
///
/// Partial-result events arrive at utterance cadence (a few per second), and
/// the consumer processes each event to completion before the next, so a
/// small bound is plenty.
pub const EVENT_BUFFER: usize = 32;

/// Filename prefix for stories in a story directory (`story-<id>.json`).
pub const STORY_FILE_PREFIX: &str = "story-";
