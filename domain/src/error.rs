//! Error types for the `domain` layer.
use meeting_nlp::Error as NlpError;
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the domain layer are modeled as a tree structure with
/// `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur in the domain
/// layer or in the capability layer below it. The `source` field holds the
/// original error that caused the domain error. The intent is to translate
/// errors between layers while maintaining layer boundaries: `domain` depends
/// on `meeting-nlp`, and `web` depends on `domain`, but `web` should not
/// depend directly on `meeting-nlp`. The `error_kind`s are ultimately used by
/// `web` to return appropriate HTTP status codes to the client.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    /// The request named a source kind other than audio/video/text. The
    /// payload is the offending tag, verbatim.
    UnsupportedInputKind(String),
    /// A text input file could not be read.
    InputRead,
    Other(String),
}

/// Enum representing the kinds of errors that can bubble up from the external
/// capability providers (`meeting-nlp`). These are translated into the domain
/// layer and reduced to the subset of kinds relevant here.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    Transcription,
    MediaExtraction,
    Annotation,
    Other(String),
}

impl Error {
    /// Builds an `UnsupportedInputKind` error for the given source tag.
    pub fn unsupported_input_kind(tag: &str) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::UnsupportedInputKind(
                tag.to_string(),
            )),
        }
    }

    /// Human-readable message describing the underlying failure, preferring
    /// the original source error when one is attached.
    pub fn message(&self) -> String {
        match (&self.source, &self.error_kind) {
            (Some(source), _) => source.to_string(),
            (None, DomainErrorKind::Internal(InternalErrorKind::UnsupportedInputKind(tag))) => {
                format!("Unsupported file type: {tag}")
            }
            (None, kind) => format!("{kind:?}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// This is where we translate errors from the capability layer to the `domain` layer.
impl From<NlpError> for Error {
    fn from(err: NlpError) -> Self {
        let error_kind = match &err {
            NlpError::Transcription(_) => DomainErrorKind::External(ExternalErrorKind::Transcription),
            NlpError::MediaExtraction(_) => {
                DomainErrorKind::External(ExternalErrorKind::MediaExtraction)
            }
            NlpError::Annotation(_) => DomainErrorKind::External(ExternalErrorKind::Annotation),
            NlpError::ProviderUnavailable(msg) => {
                DomainErrorKind::Internal(InternalErrorKind::Other(msg.clone()))
            }
            NlpError::Io(_) => {
                DomainErrorKind::Internal(InternalErrorKind::Other("Provider I/O error".to_string()))
            }
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::InputRead),
        }
    }
}
