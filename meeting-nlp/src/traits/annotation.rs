//! Text annotation provider trait.

use crate::types::entity::EntityMention;
use chrono::NaiveDate;

/// Abstraction for linguistic annotation of transcript text.
///
/// Covers the three text-analysis capabilities the extraction pipeline
/// needs: sentence segmentation, entity mention detection, and best-effort
/// date resolution. Implementations may be statistical models or
/// deterministic rules; all methods are pure text analysis and therefore
/// synchronous and infallible by contract (a provider backed by a remote
/// service should pre-fetch or cache rather than fail here).
pub trait Provider: Send + Sync {
    /// Split `text` into an ordered sequence of sentences.
    ///
    /// Each sentence is trimmed of leading/trailing whitespace; empty input
    /// yields an empty sequence. Order follows the source document.
    fn split_sentences(&self, text: &str) -> Vec<String>;

    /// Detect labeled entity mentions within a single sentence.
    ///
    /// Mentions are returned in order of appearance. A span is reported at
    /// most once, under a single label.
    fn annotate_entities(&self, sentence: &str) -> Vec<EntityMention>;

    /// Best-effort resolution of `text` to a calendar date.
    ///
    /// Relative expressions ("tomorrow", "next Friday") resolve against the
    /// current local date. Returns `None` when the text does not describe a
    /// recognizable date; callers treat that as "no deadline", not an error.
    fn parse_date(&self, text: &str) -> Option<NaiveDate>;
}
