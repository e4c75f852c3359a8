//! Minuteman transcribe crate - the external speech-to-text collaborator.
//!
//! Audio-to-text transcription is outside the extraction core and consumed
//! as a black box: audio bytes in, transcript string out. This crate defines
//! the trait boundary, a configuration type, and a mock implementation so
//! the rest of the system can be exercised without a real speech service.
//! The call is synchronous; any timeout policy belongs to the caller.

use minuteman_core::error::{MinutemanError, Result};
use tracing::debug;

/// Configuration for a transcription backend.
#[derive(Debug, Clone)]
pub struct TranscribeConfig {
    /// Language code for transcription (e.g., "en").
    pub language: String,
    /// Backend model identifier, interpreted by the implementation.
    pub model: String,
}

impl Default for TranscribeConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            model: "default".to_string(),
        }
    }
}

/// Service for transcribing meeting audio to a transcript string.
pub trait TranscriptionService: Send + Sync {
    /// Transcribe raw audio bytes into plain UTF-8 English text.
    ///
    /// Fails with `MinutemanError::Transcription` when the backend cannot
    /// produce a transcript.
    fn transcribe(&self, audio: &[u8]) -> Result<String>;
}

/// Transcription backend for audio streams that already carry text: the
/// bytes are decoded as UTF-8 and returned as the transcript.
///
/// Stands in for a speech backend when wiring the pipeline end to end;
/// real backends plug in through [`TranscriptionService`].
#[derive(Debug, Clone, Default)]
pub struct PlainTextTranscriptionService;

impl TranscriptionService for PlainTextTranscriptionService {
    fn transcribe(&self, audio: &[u8]) -> Result<String> {
        if audio.is_empty() {
            return Err(MinutemanError::Transcription(
                "no audio data provided".to_string(),
            ));
        }
        let text = String::from_utf8(audio.to_vec())
            .map_err(|e| MinutemanError::Transcription(e.to_string()))?;
        debug!(bytes = audio.len(), "Plain-text transcription");
        Ok(text)
    }
}

/// Mock transcription service returning a canned transcript.
///
/// Used in tests and development without a real speech backend. Empty audio
/// input is treated as a backend failure.
#[derive(Debug, Clone, Default)]
pub struct MockTranscriptionService {
    transcript: String,
}

impl MockTranscriptionService {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

impl TranscriptionService for MockTranscriptionService {
    fn transcribe(&self, audio: &[u8]) -> Result<String> {
        if audio.is_empty() {
            return Err(MinutemanError::Transcription(
                "no audio data provided".to_string(),
            ));
        }
        debug!(bytes = audio.len(), "Mock transcription");
        Ok(self.transcript.clone())
    }
}
