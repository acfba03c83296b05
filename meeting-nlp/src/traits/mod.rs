//! Trait abstractions for NLP capability providers.

pub mod annotation;
pub mod media;
pub mod transcription;
