//! Concrete capability providers.
//!
//! Default implementations of the provider traits:
//! - [`whisper::WhisperCli`]: speech-to-text via a whisper.cpp-style CLI
//! - [`ffmpeg::FfmpegExtractor`]: audio track extraction via the ffmpeg CLI
//! - [`rule_based::RuleBased`]: deterministic sentence/entity/date annotation

pub mod ffmpeg;
pub mod rule_based;
pub mod whisper;
