//! Types for media audio extraction.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An audio file produced by a media extractor.
///
/// Holds the temporary directory the audio was written into (when one was
/// used), so the file outlives transcription and is removed when the value
/// is dropped.
#[derive(Debug)]
pub struct ExtractedAudio {
    path: PathBuf,
    _temp_dir: Option<TempDir>,
}

impl ExtractedAudio {
    /// An extracted audio file at a caller-managed path. Nothing is cleaned
    /// up on drop.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _temp_dir: None,
        }
    }

    /// An extracted audio file inside `temp_dir`; the directory (and the
    /// file with it) is removed when this value is dropped.
    pub fn with_temp_dir(path: PathBuf, temp_dir: TempDir) -> Self {
        Self {
            path,
            _temp_dir: Some(temp_dir),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
