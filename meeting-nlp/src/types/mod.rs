//! Shared types for NLP capability providers.

pub mod entity;
pub mod media;
