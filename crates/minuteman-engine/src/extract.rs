//! Attribute extraction from flagged segments.
//!
//! Turns an [`ActionSignal`] into a [`TaskDraft`]: title, description,
//! explicit assignee, deadline phrase, and dependency hint. Deadline and
//! dependency phrases are matched with pre-compiled pattern sets and
//! returned verbatim, never normalized to calendar dates.

use regex::Regex;

use minuteman_core::config::ExtractionConfig;
use minuteman_core::error::{MinutemanError, Result};
use minuteman_core::types::{ActionSignal, Priority, TaskDraft, TeamMember, TranscriptSegment};

use crate::text;

/// Extracts task attributes out of flagged segments.
///
/// Also recognizes *handoff* segments — utterances like "Alex, please handle
/// it." that carry no action signal themselves but name the owner of the
/// task stated just before.
pub struct AttributeExtractor {
    title_max_words: usize,
    handoff_phrases: Vec<String>,
    /// Ordered: the first pattern with a hit wins, so "next Monday" is
    /// captured whole instead of as a bare weekday.
    deadline_patterns: Vec<Regex>,
    dependency_patterns: Vec<Regex>,
}

impl AttributeExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        let deadline_patterns = compile(&[
            r"(?i)\bend of (?:the |this |next )?(?:day|week|month|quarter|sprint|year)\b",
            r"(?i)\bnext (?:week|month|quarter|sprint|year|monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
            r"(?i)\bin \d+ (?:day|days|week|weeks|month|months|hour|hours)\b",
            r"(?i)\b(?:tomorrow|today|tonight)\b",
            r"(?i)\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
        ])?;
        let dependency_patterns = compile(&[
            r"(?i)\bdepends on\s+([^,.!?]+)",
            r"(?i)\b(?:after|once|following)\s+([^,.!?]+)",
        ])?;
        Ok(Self {
            title_max_words: config.title_max_words,
            handoff_phrases: config.handoff_phrases.clone(),
            deadline_patterns,
            dependency_patterns,
        })
    }

    /// Build a draft from a flagged segment. Priority is filled in by the
    /// classifier afterwards; owner fields by the scorer.
    pub fn extract(&self, signal: &ActionSignal, roster: &[TeamMember]) -> TaskDraft {
        let text = &signal.segment.text;
        TaskDraft {
            title: self.title(signal),
            description: text.trim().to_string(),
            explicit_assignee: self.explicit_assignee(signal, roster),
            priority: Priority::Medium,
            deadline: self.deadline(text),
            dependency_hint: self.dependency_hint(text),
            source_segment_index: signal.segment.index,
            assigned_to: None,
            reasoning: None,
        }
    }

    /// Title: the trigger plus the immediately following words, truncated.
    /// Falls back to the full segment text when that yields nothing.
    fn title(&self, signal: &ActionSignal) -> String {
        let text = &signal.segment.text;
        let title = match text::find_word(text, signal.trigger()) {
            Some((start, end)) => {
                let trigger_text = &text[start..end];
                let following: Vec<&str> = text[end..]
                    .split_whitespace()
                    .take(self.title_max_words)
                    .collect();
                if following.is_empty() {
                    trigger_text.to_string()
                } else {
                    format!("{} {}", trigger_text, following.join(" "))
                }
            }
            None => String::new(),
        };
        let title = title
            .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | ',' | ';' | ':'))
            .trim()
            .to_string();
        if title.is_empty() {
            text.trim().to_string()
        } else {
            capitalize(&title)
        }
    }

    /// Scan for roster names at or before the trigger. Exactly one hit is
    /// accepted; zero or multiple defer to the scorer — never guess.
    fn explicit_assignee(&self, signal: &ActionSignal, roster: &[TeamMember]) -> Option<String> {
        let text = &signal.segment.text;
        let trigger_end = text::find_word(text, signal.trigger())
            .map(|(_, end)| end)
            .unwrap_or(text.len());

        let mut matched: Option<&TeamMember> = None;
        let mut count = 0;
        for member in roster {
            if let Some((start, _)) = text::find_word(text, &member.name) {
                if start < trigger_end {
                    count += 1;
                    matched = Some(member);
                }
            }
        }
        if count == 1 {
            matched.map(|m| m.name.clone())
        } else {
            None
        }
    }

    /// First matching deadline pattern, phrase returned verbatim.
    fn deadline(&self, text: &str) -> Option<String> {
        self.deadline_patterns
            .iter()
            .find_map(|p| p.find(text).map(|m| m.as_str().to_string()))
    }

    /// Linkage phrase ("after X", "once X", "depends on X", "following X");
    /// the trailing phrase is captured as free text for the aggregator.
    fn dependency_hint(&self, text: &str) -> Option<String> {
        self.dependency_patterns.iter().find_map(|p| {
            p.captures(text)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().trim().to_string())
                .filter(|s| !s.is_empty())
        })
    }

    /// For a segment with no action signal: if it contains a handoff phrase
    /// and names exactly one roster member, return that member's name. The
    /// pipeline attributes it to the draft from the preceding segment.
    pub fn handoff_assignee(
        &self,
        segment: &TranscriptSegment,
        roster: &[TeamMember],
    ) -> Option<String> {
        let has_handoff = self
            .handoff_phrases
            .iter()
            .any(|p| text::contains_word(&segment.text, p));
        if !has_handoff {
            return None;
        }

        let mut matched: Option<&TeamMember> = None;
        let mut count = 0;
        for member in roster {
            if text::contains_word(&segment.text, &member.name) {
                count += 1;
                matched = Some(member);
            }
        }
        if count == 1 {
            matched.map(|m| m.name.clone())
        } else {
            None
        }
    }
}

fn compile(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(|e| MinutemanError::Lexicon(e.to_string())))
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
