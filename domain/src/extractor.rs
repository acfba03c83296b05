//! The action-item extraction pipeline.
//!
//! A linear filter-then-extract pass over transcript text: segment into
//! sentences, keep the ones that look actionable, then pull "who" and "when"
//! out of each. All linguistic judgment is delegated to the annotation
//! provider; this module owns only the heuristic glue.

use crate::error::Error;
use crate::task::{
    SourceKind, TaskRecord, FIXED_CONFIDENCE, UNKNOWN_ASSIGNEE, UNSPECIFIED_DEADLINE,
};
use chrono::NaiveDate;
use log::debug;
use meeting_nlp::{annotation, media, transcription, EntityLabel};
use std::path::Path;

/// Keyword set for the actionability test. Matched as plain lowercase
/// substrings with no word-boundary check, so "completely" matches
/// "complete". Known-imprecise and kept that way on purpose; tightening it
/// changes which sentences become tasks.
const ACTION_KEYWORDS: [&str; 6] = ["will", "must", "should", "to be done", "assign", "complete"];

/// True when the sentence's lowercased form contains any action keyword.
fn is_actionable(sentence: &str) -> bool {
    let lowered = sentence.to_lowercase();
    ACTION_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Resolve a sentence's date/time mentions to calendar dates.
///
/// Mentions that fail to resolve are silently dropped. When no mention
/// resolves (none found, or all unparseable; the two cases fall through
/// identically), one whole-sentence parse is attempted as a fallback.
fn extract_deadlines(
    annotator: &dyn annotation::Provider,
    sentence: &str,
    mentions: &[meeting_nlp::EntityMention],
) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = mentions
        .iter()
        .filter(|mention| matches!(mention.label, EntityLabel::Date | EntityLabel::Time))
        .filter_map(|mention| annotator.parse_date(&mention.text))
        .collect();

    if dates.is_empty() {
        if let Some(date) = annotator.parse_date(sentence) {
            dates.push(date);
        }
    }

    dates
}

/// Extract task records from plain transcript text.
///
/// One record per actionable sentence, in source order; non-actionable
/// sentences are ignored. Empty text yields an empty vec, not an error.
pub fn extract_tasks_from_text(
    annotator: &dyn annotation::Provider,
    text: &str,
    source: SourceKind,
) -> Vec<TaskRecord> {
    let sentences = annotator.split_sentences(text);
    debug!("Extracting tasks from {} sentences", sentences.len());

    let mut tasks = Vec::new();
    for sentence in sentences {
        if !is_actionable(&sentence) {
            continue;
        }

        let mentions = annotator.annotate_entities(&sentence);

        let mut assignees: Vec<String> = mentions
            .iter()
            .filter(|mention| mention.label == EntityLabel::Person)
            .map(|mention| mention.text.clone())
            .collect();
        if assignees.is_empty() {
            assignees.push(UNKNOWN_ASSIGNEE.to_string());
        }

        let dates = extract_deadlines(annotator, &sentence, &mentions);
        let deadline: Vec<String> = if dates.is_empty() {
            vec![UNSPECIFIED_DEADLINE.to_string()]
        } else {
            dates
                .iter()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .collect()
        };

        tasks.push(TaskRecord {
            description: sentence,
            assignee: assignees,
            deadline,
            source,
            confidence: FIXED_CONFIDENCE,
        });
    }

    tasks
}

/// Extract task records from a file reference.
///
/// Audio is transcribed directly; video has its audio track extracted first;
/// text is read as UTF-8. Any provider failure aborts the whole extraction
/// with no partial results.
pub async fn extract_tasks_from_file(
    transcriber: &dyn transcription::Provider,
    media_extractor: &dyn media::Extractor,
    annotator: &dyn annotation::Provider,
    source: SourceKind,
    file_path: &Path,
) -> Result<Vec<TaskRecord>, Error> {
    let text = match source {
        SourceKind::Audio => transcriber.transcribe(file_path).await?,
        SourceKind::Video => {
            let audio = media_extractor.extract_audio(file_path).await?;
            transcriber.transcribe(audio.path()).await?
        }
        SourceKind::Text => tokio::fs::read_to_string(file_path).await?,
    };

    Ok(extract_tasks_from_text(annotator, &text, source))
}
