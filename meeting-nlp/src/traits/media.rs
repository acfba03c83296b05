//! Media audio-extraction trait.

use crate::types::media::ExtractedAudio;
use crate::Error;
use async_trait::async_trait;
use std::path::Path;

/// Abstraction for pulling the audio track out of a video recording.
///
/// Implementations demux/transcode the video at `video_path` into an audio
/// file suitable for transcription (mono, 16 kHz WAV). The returned
/// [`ExtractedAudio`] owns any temporary storage backing the audio file, so
/// the file stays alive for as long as the caller holds the value.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract the audio track from the video at `video_path`.
    ///
    /// Fails with [`Error::MediaExtraction`] on unsupported codecs or
    /// containers, and [`Error::ProviderUnavailable`] when the backing
    /// tool is not installed.
    async fn extract_audio(&self, video_path: &Path) -> Result<ExtractedAudio, Error>;
}
