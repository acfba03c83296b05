//! Domain layer for meeting action-item extraction.
//!
//! Holds the task record model and the heuristic pipeline that turns
//! transcript text into task records. All language processing (speech-to-text,
//! sentence segmentation, entity detection, date resolution) is delegated to
//! the capability traits in the `meeting-nlp` crate; this layer owns only the
//! filter-then-extract logic and the error taxonomy.

// Re-export the capability traits and types so consumers of `domain` do not
// need to depend on the `meeting-nlp` crate directly.
pub use meeting_nlp::{annotation, media, transcription, EntityLabel, EntityMention};

pub mod error;
pub mod extractor;
pub mod task;

pub use error::Error;
pub use task::{SourceKind, TaskRecord};
