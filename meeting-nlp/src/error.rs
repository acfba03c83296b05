//! Error types for meeting NLP operations.

use std::fmt;

/// Universal error type that abstracts provider-specific errors into common variants.
///
/// All provider implementations map their native failures to these variants,
/// preserving context while keeping a provider-agnostic interface. Callers in
/// higher layers translate these into their own error kinds rather than
/// matching on provider details.
#[derive(Debug)]
pub enum Error {
    /// Speech-to-text failed: unreadable or corrupt audio, or the engine
    /// itself reported a failure. The message carries the engine's output.
    Transcription(String),

    /// Audio extraction from a video container failed, typically an
    /// unsupported codec or a truncated file.
    MediaExtraction(String),

    /// Text annotation failed. Rule-based annotators are infallible, so this
    /// is only produced by providers backed by external models or services.
    Annotation(String),

    /// The provider's backing binary or model is not installed or not on PATH.
    ProviderUnavailable(String),

    /// Underlying I/O failure while invoking a provider or handling its output.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transcription(msg) => write!(f, "Transcription failed: {}", msg),
            Error::MediaExtraction(msg) => write!(f, "Media extraction failed: {}", msg),
            Error::Annotation(msg) => write!(f, "Annotation failed: {}", msg),
            Error::ProviderUnavailable(msg) => write!(f, "Provider unavailable: {}", msg),
            Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
