//! ffmpeg audio-extraction provider.
//!
//! Shells out to the ffmpeg CLI to pull the audio track out of a video
//! container, downmixed to mono 16 kHz WAV as speech engines expect.

use crate::traits::media;
use crate::types::media::ExtractedAudio;
use crate::Error;
use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::process::Command;

/// ffmpeg-based audio extractor.
///
/// The output WAV lives in a temporary directory owned by the returned
/// [`ExtractedAudio`], so it is cleaned up once transcription is done.
pub struct FfmpegExtractor {
    binary: PathBuf,
}

impl FfmpegExtractor {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn command(&self, video_path: &Path, audio_path: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("-i")
            .arg(video_path)
            .args(["-ac", "1", "-ar", "16000", "-y"])
            .arg(audio_path);
        cmd
    }
}

impl Default for FfmpegExtractor {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

#[async_trait]
impl media::Extractor for FfmpegExtractor {
    async fn extract_audio(&self, video_path: &Path) -> Result<ExtractedAudio, Error> {
        let temp_dir = TempDir::new()?;
        let audio_path = temp_dir.path().join("audio.wav");

        debug!(
            "Extracting audio from {} to {}",
            video_path.display(),
            audio_path.display()
        );

        let output = self.command(video_path, &audio_path).output().await;

        match output {
            Ok(output) => {
                if output.status.success() {
                    Ok(ExtractedAudio::with_temp_dir(audio_path, temp_dir))
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    Err(Error::MediaExtraction(format!(
                        "ffmpeg failed on {}: {}",
                        video_path.display(),
                        stderr.trim()
                    )))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::ProviderUnavailable(
                format!("{} not found (install ffmpeg)", self.binary.display()),
            )),
            Err(e) => Err(Error::Io(e)),
        }
    }
}
