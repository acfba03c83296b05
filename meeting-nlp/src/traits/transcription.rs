//! Transcription provider trait.

use crate::Error;
use async_trait::async_trait;
use std::path::Path;

/// Abstraction for speech-to-text transcription services.
///
/// Implementations convert an audio file on local disk to plain text.
/// Supports local engines (whisper.cpp) as well as hosted speech APIs; the
/// trait enables provider swapping without touching the extraction pipeline.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Transcribe the audio file at `audio_path` and return its plain text.
    ///
    /// Fails with [`Error::Transcription`] when the audio is unreadable or
    /// the engine reports a failure, and [`Error::ProviderUnavailable`] when
    /// the backing engine is not installed.
    async fn transcribe(&self, audio_path: &Path) -> Result<String, Error>;

    /// Return unique identifier for this provider (e.g., "whisper_cli").
    ///
    /// Used for logging and provider selection. Must be lowercase,
    /// alphanumeric with underscores only.
    fn provider_id(&self) -> &str;
}
