use thiserror::Error;

/// Top-level error type for the Minuteman system.
///
/// Library crates return this directly so the `?` operator works across
/// crate boundaries without wrapper layers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MinutemanError {
    /// Transcript was empty or whitespace-only. The engine recovers from
    /// this locally; it only surfaces when the segmenter is called directly.
    #[error("Empty transcript: no content to analyze")]
    EmptyTranscript,

    /// A roster record is unusable (missing name, or no skill tokens left
    /// after normalization). The engine refuses to run on a broken roster.
    #[error("Invalid roster entry {index}: {reason}")]
    InvalidRoster { index: usize, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for MinutemanError {
    fn from(err: toml::de::Error) -> Self {
        MinutemanError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for MinutemanError {
    fn from(err: toml::ser::Error) -> Self {
        MinutemanError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for MinutemanError {
    fn from(err: serde_json::Error) -> Self {
        MinutemanError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Minuteman operations.
pub type Result<T> = std::result::Result<T, MinutemanError>;
