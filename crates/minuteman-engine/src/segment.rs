//! Transcript segmentation.
//!
//! Splits a transcript into ordered utterance segments on sentence-ending
//! punctuation and hard line breaks. Segment order defines chronological
//! discourse order; the aggregator's earlier-only dependency rule depends
//! on it.

use minuteman_core::error::{MinutemanError, Result};
use minuteman_core::types::TranscriptSegment;

/// Create a lazy, restartable iterator over the transcript's segments.
///
/// Fails with `EmptyTranscript` when the input is empty or whitespace-only.
/// Calling this again on the same string restarts from the beginning.
pub fn segments(transcript: &str) -> Result<Segments<'_>> {
    if transcript.trim().is_empty() {
        return Err(MinutemanError::EmptyTranscript);
    }
    Ok(Segments {
        remaining: transcript,
        next_index: 0,
    })
}

/// Lazy iterator over [`TranscriptSegment`]s in original order.
///
/// Whitespace inside a segment is collapsed to single spaces; empty segments
/// (runs of punctuation or blank lines) are dropped without consuming an
/// index.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    remaining: &'a str,
    next_index: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = TranscriptSegment;

    fn next(&mut self) -> Option<TranscriptSegment> {
        while !self.remaining.is_empty() {
            let (raw, rest) = match self.remaining.find(['.', '!', '?', '\n']) {
                Some(i) => {
                    // The boundary characters are all ASCII, so i + 1 is a
                    // valid char boundary.
                    (&self.remaining[..i + 1], &self.remaining[i + 1..])
                }
                None => (self.remaining, ""),
            };
            self.remaining = rest;

            let text = collapse_whitespace(raw);
            if !text.is_empty() {
                let segment = TranscriptSegment {
                    index: self.next_index,
                    text,
                };
                self.next_index += 1;
                return Some(segment);
            }
        }
        None
    }
}

/// Collapse runs of whitespace to single spaces and trim the ends. A segment
/// that is only punctuation collapses to empty and gets dropped.
fn collapse_whitespace(raw: &str) -> String {
    let joined = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let stripped: &str = joined.trim_matches(|c: char| c == '.' || c == '!' || c == '?');
    if stripped.trim().is_empty() {
        String::new()
    } else {
        joined
    }
}
