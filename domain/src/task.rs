//! Task record model.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Assignee sentinel used when a sentence names nobody.
pub const UNKNOWN_ASSIGNEE: &str = "Unknown";

/// Deadline sentinel used when no date could be resolved for a sentence.
pub const UNSPECIFIED_DEADLINE: &str = "Not Specified";

/// Placeholder confidence attached to every record. Not computed; kept as a
/// constant until real scoring is in scope.
pub const FIXED_CONFIDENCE: f64 = 0.9;

/// Origin type of an extraction input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Audio,
    Video,
    Text,
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(tag: &str) -> Result<SourceKind, Self::Err> {
        match tag {
            "audio" => Ok(SourceKind::Audio),
            "video" => Ok(SourceKind::Video),
            "text" => Ok(SourceKind::Text),
            _ => Err(Error::unsupported_input_kind(tag)),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SourceKind::Audio => write!(f, "audio"),
            SourceKind::Video => write!(f, "video"),
            SourceKind::Text => write!(f, "text"),
        }
    }
}

/// One extracted action item.
///
/// Each record corresponds to exactly one actionable sentence; records are
/// emitted in source sentence order. Built fresh per extraction call and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskRecord {
    /// The full sentence text, unmodified.
    pub description: String,
    /// Person names mentioned in the sentence, in order of appearance, or
    /// `["Unknown"]` when none were found.
    pub assignee: Vec<String>,
    /// Resolved calendar dates as ISO `YYYY-MM-DD` strings, or
    /// `["Not Specified"]` when no date resolved.
    pub deadline: Vec<String>,
    pub source: SourceKind,
    pub confidence: f64,
}
