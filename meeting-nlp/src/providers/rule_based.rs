//! Rule-based text annotation provider.
//!
//! Deterministic segmentation, entity detection, and date resolution, standing
//! in for a statistical NLP model. Person detection is capitalization-based
//! with a stopword list; date/time detection is pattern-based; date resolution
//! delegates to the `interim` natural-language date parser.
//!
//! Deliberately imprecise in the same ways lightweight NER is: it will miss
//! lowercase names and flag unusual capitalized words. Callers wanting model
//! quality can supply their own [`annotation::Provider`].

use crate::traits::annotation;
use crate::types::entity::{EntityLabel, EntityMention};
use chrono::{Local, NaiveDate};
use interim::{parse_date_string, Dialect};
use regex::Regex;
use std::sync::LazyLock;

const WEEKDAYS: &str = "monday|tuesday|wednesday|thursday|friday|saturday|sunday";
const MONTHS: &str =
    "january|february|march|april|may|june|july|august|september|october|november|december";

/// Capitalized words that are never person names. Lowercased for lookup.
/// Covers function words and sentence starters plus calendar vocabulary;
/// weekday/month tokens inside a detected date span are excluded separately.
const NON_NAME_WORDS: &[&str] = &[
    "the", "a", "an", "and", "but", "or", "so", "if", "then", "we", "i", "it", "he", "she", "they",
    "you", "this", "that", "these", "those", "there", "here", "please", "let", "let's", "our",
    "my", "your", "his", "her", "its", "their", "everyone", "everybody", "someone", "somebody",
    "team", "meeting", "project", "report", "task", "action", "deadline", "update", "status",
    "note", "notes", "agenda", "minutes", "by", "on", "in", "at", "to", "for", "from", "with",
    "when", "while", "after", "before", "during", "until", "also", "next", "last", "first",
    "second", "third", "finally", "additionally", "ok", "okay", "yes", "no", "not", "thanks",
    "thank", "hello", "hi", "all", "some", "most", "both", "each", "monday", "tuesday",
    "wednesday", "thursday", "friday", "saturday", "sunday", "january", "february", "march",
    "april", "may", "june", "july", "august", "september", "october", "november", "december",
    "today", "tomorrow", "yesterday", "tonight", "week", "month", "year", "noon", "midnight",
    "am", "pm", "send", "finish", "review", "complete", "schedule", "assign", "remember",
    "ensure", "make", "follow", "check", "share", "prepare", "discuss",
];

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?i)\b(?:(?:next|last|this)\s+(?:{wd}|week|month|year)|(?:{wd})|today|tomorrow|yesterday|tonight|(?:{mo})\s+\d{{1,2}}(?:st|nd|rd|th)?|\d{{1,2}}(?:st|nd|rd|th)?\s+(?:of\s+)?(?:{mo})|\d{{4}}-\d{{2}}-\d{{2}}|\d{{1,2}}/\d{{1,2}}/\d{{2,4}})\b",
        wd = WEEKDAYS,
        mo = MONTHS
    );
    Regex::new(&pattern).expect("valid date pattern")
});

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:\d{1,2}:\d{2}(?:\s*(?:am|pm))?|\d{1,2}\s*(?:am|pm)|noon|midnight)\b")
        .expect("valid time pattern")
});

/// Rule-based annotation provider.
pub struct RuleBased;

impl RuleBased {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RuleBased {
    fn default() -> Self {
        Self::new()
    }
}

impl annotation::Provider for RuleBased {
    fn split_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if matches!(c, '.' | '!' | '?') {
                // Boundary only when terminal punctuation precedes whitespace
                // or end of input, so "3.5" stays intact. "Dr. Smith" still
                // splits; acceptable for transcript prose.
                let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
                if at_boundary {
                    let end = i + c.len_utf8();
                    let sentence = text[start..end].trim();
                    if !sentence.is_empty() {
                        sentences.push(sentence.to_string());
                    }
                    start = end;
                }
            }
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }

        sentences
    }

    fn annotate_entities(&self, sentence: &str) -> Vec<EntityMention> {
        let mut spans: Vec<(usize, usize, EntityLabel)> = Vec::new();

        for m in DATE_RE.find_iter(sentence) {
            spans.push((m.start(), m.end(), EntityLabel::Date));
        }
        for m in TIME_RE.find_iter(sentence) {
            if !overlaps(&spans, m.start(), m.end()) {
                spans.push((m.start(), m.end(), EntityLabel::Time));
            }
        }
        for (start, end) in person_spans(sentence, &spans) {
            spans.push((start, end, EntityLabel::Person));
        }

        spans.sort_by_key(|&(start, _, _)| start);
        spans
            .into_iter()
            .map(|(start, end, label)| EntityMention::new(&sentence[start..end], label))
            .collect()
    }

    fn parse_date(&self, text: &str) -> Option<NaiveDate> {
        parse_date_string(text, Local::now(), Dialect::Us)
            .ok()
            .map(|dt| dt.date_naive())
    }
}

fn overlaps(spans: &[(usize, usize, EntityLabel)], start: usize, end: usize) -> bool {
    spans
        .iter()
        .any(|&(span_start, span_end, _)| start < span_end && span_start < end)
}

/// Byte spans of word tokens (alphabetic runs, apostrophes and hyphens kept).
fn word_tokens(sentence: &str) -> Vec<(usize, usize)> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in sentence.char_indices() {
        if c.is_alphabetic() || c == '\'' || c == '-' {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            tokens.push((s, i));
        }
    }
    if let Some(s) = start {
        tokens.push((s, sentence.len()));
    }

    tokens
}

/// A token looks like a name when it is capitalized, longer than one letter,
/// otherwise lowercase (filters acronyms), and not a known non-name word.
fn is_name_token(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    if word.chars().count() < 2 {
        return false;
    }
    if !chars.all(|c| c.is_lowercase() || c == '\'' || c == '-') {
        return false;
    }
    !NON_NAME_WORDS.contains(&word.to_lowercase().as_str())
}

/// Maximal runs of adjacent name-like tokens ("John Smith"), skipping tokens
/// already claimed by a date or time span.
fn person_spans(sentence: &str, taken: &[(usize, usize, EntityLabel)]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut current: Option<(usize, usize)> = None;

    for (start, end) in word_tokens(sentence) {
        let word = &sentence[start..end];
        let name_like = is_name_token(word) && !overlaps(taken, start, end);

        if name_like {
            current = match current {
                Some((s, e)) if start == e + 1 && &sentence[e..start] == " " => Some((s, end)),
                Some(span) => {
                    spans.push(span);
                    Some((start, end))
                }
                None => Some((start, end)),
            };
        } else if let Some(span) = current.take() {
            spans.push(span);
        }
    }
    if let Some(span) = current {
        spans.push(span);
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::annotation::Provider;
    use chrono::{Datelike, Duration, Weekday};

    fn annotator() -> RuleBased {
        RuleBased::new()
    }

    #[test]
    fn test_split_sentences_basic() {
        let text = "Alice will send the report. Bob should review it! Any questions?";
        assert_eq!(
            annotator().split_sentences(text),
            vec![
                "Alice will send the report.",
                "Bob should review it!",
                "Any questions?"
            ]
        );
    }

    #[test]
    fn test_split_sentences_empty_and_whitespace() {
        assert!(annotator().split_sentences("").is_empty());
        assert!(annotator().split_sentences("   \n  ").is_empty());
    }

    #[test]
    fn test_split_sentences_trims_and_keeps_tail_without_terminator() {
        let text = "  First sentence.   second thing still going";
        assert_eq!(
            annotator().split_sentences(text),
            vec!["First sentence.", "second thing still going"]
        );
    }

    #[test]
    fn test_split_sentences_keeps_decimal_numbers_intact() {
        let text = "The budget is 3.5 million. Approve it.";
        assert_eq!(
            annotator().split_sentences(text),
            vec!["The budget is 3.5 million.", "Approve it."]
        );
    }

    #[test]
    fn test_annotate_person_and_relative_date() {
        let mentions =
            annotator().annotate_entities("Alice will complete the report by next Friday.");
        assert_eq!(
            mentions,
            vec![
                EntityMention::new("Alice", EntityLabel::Person),
                EntityMention::new("next Friday", EntityLabel::Date),
            ]
        );
    }

    #[test]
    fn test_annotate_multiple_persons_in_order() {
        let mentions = annotator().annotate_entities("Bob and Carol must review the budget.");
        assert_eq!(
            mentions,
            vec![
                EntityMention::new("Bob", EntityLabel::Person),
                EntityMention::new("Carol", EntityLabel::Person),
            ]
        );
    }

    #[test]
    fn test_annotate_full_name_date_and_time() {
        let mentions =
            annotator().annotate_entities("John Smith should send the deck tomorrow at 5pm.");
        assert_eq!(
            mentions,
            vec![
                EntityMention::new("John Smith", EntityLabel::Person),
                EntityMention::new("tomorrow", EntityLabel::Date),
                EntityMention::new("5pm", EntityLabel::Time),
            ]
        );
    }

    #[test]
    fn test_annotate_no_entities() {
        assert!(annotator()
            .annotate_entities("the meeting went well.")
            .is_empty());
    }

    #[test]
    fn test_weekday_inside_date_span_is_not_a_person() {
        let mentions = annotator().annotate_entities("We must finish this by Friday.");
        assert_eq!(
            mentions,
            vec![EntityMention::new("Friday", EntityLabel::Date)]
        );
    }

    #[test]
    fn test_parse_date_iso() {
        assert_eq!(
            annotator().parse_date("2025-06-05"),
            NaiveDate::from_ymd_opt(2025, 6, 5)
        );
    }

    #[test]
    fn test_parse_date_tomorrow_is_relative_to_today() {
        let today = Local::now().date_naive();
        assert_eq!(
            annotator().parse_date("tomorrow"),
            Some(today + Duration::days(1))
        );
    }

    #[test]
    fn test_parse_date_next_friday_lands_on_a_friday() {
        let parsed = annotator()
            .parse_date("next Friday")
            .expect("next Friday should resolve");
        assert_eq!(parsed.weekday(), Weekday::Fri);
        assert!(parsed > Local::now().date_naive());
    }

    #[test]
    fn test_parse_date_rejects_prose() {
        assert_eq!(annotator().parse_date("the meeting went well"), None);
    }
}
