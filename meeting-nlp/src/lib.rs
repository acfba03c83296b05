//! Meeting NLP abstraction layer for transcription, media handling, and text annotation.
//!
//! This crate provides trait-based abstractions for the language-processing
//! capabilities the action-item pipeline depends on:
//! - Speech-to-text transcription of meeting audio
//! - Audio track extraction from video recordings
//! - Text annotation: sentence segmentation, entity mentions, date resolution
//!
//! The design is provider-agnostic, enabling applications to swap between
//! different implementations (whisper.cpp, cloud speech APIs, statistical or
//! rule-based annotators) without changing application code.

pub mod error;
pub mod providers;
pub mod traits;
pub mod types;

// Re-export commonly used items
pub use error::Error;
pub use traits::{annotation, media, transcription};
pub use types::entity::{EntityLabel, EntityMention};
pub use types::media::ExtractedAudio;
