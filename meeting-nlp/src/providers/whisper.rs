//! Whisper CLI transcription provider.
//!
//! Uses a whisper.cpp-compatible command-line binary for speech-to-text.
//! This is the local, no-API-key transcription option.

use crate::traits::transcription;
use crate::Error;
use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Whisper CLI transcription provider.
///
/// Invokes the configured binary with `-f <audio>` and reads the transcript
/// from stdout. Timestamps and progress chatter are suppressed so stdout is
/// plain text only.
pub struct WhisperCli {
    binary: PathBuf,
    model: Option<PathBuf>,
    language: String,
}

impl WhisperCli {
    /// Create a provider invoking `binary`, optionally with a model file.
    pub fn new(binary: impl Into<PathBuf>, model: Option<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            model,
            language: "en".to_string(),
        }
    }

    /// Override the transcription language hint (default "en").
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    fn command(&self, audio_path: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        if let Some(model) = &self.model {
            cmd.arg("-m").arg(model);
        }
        cmd.arg("-f")
            .arg(audio_path)
            .args(["-l", &self.language])
            .args(["--no-timestamps", "--no-prints"]);
        cmd
    }
}

#[async_trait]
impl transcription::Provider for WhisperCli {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, Error> {
        debug!("Transcribing {} with {:?}", audio_path.display(), self.binary);

        let output = self.command(audio_path).output().await;

        match output {
            Ok(output) => {
                if output.status.success() {
                    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    Err(Error::Transcription(format!(
                        "whisper failed on {}: {}",
                        audio_path.display(),
                        stderr.trim()
                    )))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::ProviderUnavailable(
                format!("{} not found (install whisper.cpp)", self.binary.display()),
            )),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn provider_id(&self) -> &str {
        "whisper_cli"
    }
}
