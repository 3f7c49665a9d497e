//! Error types for readalong.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadalongError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Story source errors
    #[error("Story not found: {id}")]
    StoryNotFound { id: u32 },

    #[error("Story file is not valid JSON: {0}")]
    StoryParse(#[from] serde_json::Error),

    #[error("Page {page} out of range for story '{title}' ({pages} pages)")]
    PageOutOfRange {
        title: String,
        page: usize,
        pages: usize,
    },

    // Recognition channel errors
    #[error("No audio input available: {message}")]
    AudioInput { message: String },

    #[error("Recognition channel error: {message}")]
    RecognitionChannel { message: String },

    // Transcript export errors
    #[error("Failed to export transcript to {path}: {message}")]
    TranscriptExport { path: String, message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, ReadalongError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_story_not_found_display() {
        let error = ReadalongError::StoryNotFound { id: 42 };
        assert_eq!(error.to_string(), "Story not found: 42");
    }

    #[test]
    fn test_page_out_of_range_display() {
        let error = ReadalongError::PageOutOfRange {
            title: "Mia's Adventure".to_string(),
            page: 7,
            pages: 3,
        };
        assert_eq!(
            error.to_string(),
            "Page 7 out of range for story 'Mia's Adventure' (3 pages)"
        );
    }

    #[test]
    fn test_recognition_channel_display() {
        let error = ReadalongError::RecognitionChannel {
            message: "connection dropped".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Recognition channel error: connection dropped"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing file");
        let error: ReadalongError = io_error.into();
        assert!(matches!(error, ReadalongError::Io(_)));
        assert!(error.to_string().contains("missing file"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: ReadalongError = json_error.into();
        assert!(matches!(error, ReadalongError::StoryParse(_)));
    }
}
