//! Priority classification from keyword buckets.
//!
//! Ordered buckets, first match wins: Critical, then High, then Low, with
//! Medium as the default. Keywords match on a leading word boundary only,
//! so "urgently" lands in the Critical bucket via "urgent" while "insurgent"
//! does not.

use regex::Regex;

use minuteman_core::config::PriorityConfig;
use minuteman_core::error::{MinutemanError, Result};
use minuteman_core::types::Priority;

/// Maps segment text to exactly one priority level.
pub struct PriorityClassifier {
    buckets: Vec<(Priority, Vec<Regex>)>,
}

impl PriorityClassifier {
    pub fn new(config: &PriorityConfig) -> Result<Self> {
        // Bucket order is fixed: a segment containing both a Critical and a
        // Low term resolves to Critical.
        let buckets = vec![
            (Priority::Critical, compile_bucket(&config.critical)?),
            (Priority::High, compile_bucket(&config.high)?),
            (Priority::Low, compile_bucket(&config.low)?),
        ];
        Ok(Self { buckets })
    }

    /// Classify a segment's text. Medium when no bucket matches.
    pub fn classify(&self, text: &str) -> Priority {
        for (priority, patterns) in &self.buckets {
            if patterns.iter().any(|p| p.is_match(text)) {
                return *priority;
            }
        }
        Priority::Medium
    }
}

fn compile_bucket(keywords: &[String]) -> Result<Vec<Regex>> {
    keywords
        .iter()
        .map(|kw| {
            let pattern = format!(r"(?i)\b{}", regex::escape(kw));
            Regex::new(&pattern).map_err(|e| MinutemanError::Lexicon(e.to_string()))
        })
        .collect()
}
