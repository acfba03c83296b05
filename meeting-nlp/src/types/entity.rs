//! Types for entity annotation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label assigned to an entity mention within a sentence.
///
/// Restricted to the labels the extraction pipeline consumes; annotators
/// that recognize more (organizations, money, ...) drop the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Person,
    Date,
    Time,
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityLabel::Person => write!(f, "person"),
            EntityLabel::Date => write!(f, "date"),
            EntityLabel::Time => write!(f, "time"),
        }
    }
}

/// A labeled span of text found within a single sentence.
///
/// `text` holds the span exactly as it appears in the sentence, so callers
/// can feed it back into date resolution or display it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMention {
    pub text: String,
    pub label: EntityLabel,
}

impl EntityMention {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}
