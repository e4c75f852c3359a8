//! Action-signal detection.
//!
//! Flags segments that contain task-indicating language. Two ordered rules,
//! first match wins: a whole-word action verb, then an obligation phrase.
//! This is a lexical filter, not semantic — precision is bounded by the
//! lexicon size, which comes from configuration.

use regex::Regex;

use minuteman_core::config::DetectionConfig;
use minuteman_core::error::{MinutemanError, Result};
use minuteman_core::types::{ActionSignal, TranscriptSegment};

/// A compiled lexicon entry: the configured term and its whole-word pattern.
struct LexiconPattern {
    term: String,
    regex: Regex,
}

/// Detects actionable segments using pre-compiled lexicon patterns.
pub struct ActionDetector {
    verbs: Vec<LexiconPattern>,
    phrases: Vec<LexiconPattern>,
}

impl ActionDetector {
    /// Compile the configured lexicons. Terms are escaped, so any lexicon
    /// string is valid; an empty term is rejected.
    pub fn new(config: &DetectionConfig) -> Result<Self> {
        Ok(Self {
            verbs: compile_lexicon(&config.action_verbs)?,
            phrases: compile_lexicon(&config.obligation_phrases)?,
        })
    }

    /// Decide whether a segment contains an actionable task.
    ///
    /// Returns `None` for segments matching neither lexicon; those are
    /// discarded by the pipeline and never carried forward.
    pub fn detect(&self, segment: &TranscriptSegment) -> Option<ActionSignal> {
        for pattern in &self.verbs {
            if pattern.regex.is_match(&segment.text) {
                return Some(ActionSignal {
                    segment: segment.clone(),
                    matched_verb: Some(pattern.term.clone()),
                    matched_phrase: None,
                });
            }
        }
        for pattern in &self.phrases {
            if pattern.regex.is_match(&segment.text) {
                return Some(ActionSignal {
                    segment: segment.clone(),
                    matched_verb: None,
                    matched_phrase: Some(pattern.term.clone()),
                });
            }
        }
        None
    }
}

fn compile_lexicon(terms: &[String]) -> Result<Vec<LexiconPattern>> {
    terms
        .iter()
        .map(|term| {
            if term.trim().is_empty() {
                return Err(MinutemanError::Lexicon(
                    "empty lexicon term".to_string(),
                ));
            }
            let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
            let regex = Regex::new(&pattern)
                .map_err(|e| MinutemanError::Lexicon(e.to_string()))?;
            Ok(LexiconPattern {
                term: term.clone(),
                regex,
            })
        })
        .collect()
}
