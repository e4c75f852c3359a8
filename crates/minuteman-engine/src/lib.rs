//! Minuteman engine crate - the task extraction & assignment pipeline.
//!
//! Converts a raw meeting transcript and a team roster into a structured
//! list of actionable tasks, each with an owner, priority, deadline hint,
//! and rationale:
//!
//! transcript → segmenter → action detector → attribute extractor +
//! priority classifier → assignment scorer → task aggregator → report.
//!
//! The pipeline is purely lexical and fully deterministic: the same
//! (transcript, roster) pair always produces byte-identical output.

pub mod aggregate;
pub mod assign;
pub mod detect;
pub mod extract;
pub mod priority;
pub mod segment;
mod text;

pub use aggregate::TaskAggregator;
pub use assign::AssignmentScorer;
pub use detect::ActionDetector;
pub use extract::AttributeExtractor;
pub use priority::PriorityClassifier;
pub use segment::{segments, Segments};

use minuteman_core::config::EngineConfig;
use minuteman_core::error::{MinutemanError, Result};
use minuteman_core::types::{MeetingReport, TaskDraft, TeamMember};
use tracing::{debug, info};

/// The complete extraction pipeline, built once from a config and reusable
/// across runs. No state is shared between invocations.
pub struct TaskEngine {
    detector: ActionDetector,
    extractor: AttributeExtractor,
    classifier: PriorityClassifier,
    scorer: AssignmentScorer,
    aggregator: TaskAggregator,
}

impl TaskEngine {
    /// Compile all lexicons from the given configuration.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Ok(Self {
            detector: ActionDetector::new(&config.detection)?,
            extractor: AttributeExtractor::new(&config.extraction)?,
            classifier: PriorityClassifier::new(&config.priority)?,
            scorer: AssignmentScorer::new(&config.scoring),
            aggregator: TaskAggregator::new(&config.aggregation),
        })
    }

    /// Run the pipeline over one transcript and roster.
    ///
    /// An empty or whitespace-only transcript is recovered locally into the
    /// fixed empty report. A broken roster record surfaces as
    /// `InvalidRoster` — the engine refuses to run rather than guessing an
    /// owner pool.
    pub fn run(&self, transcript: &str, roster: &[TeamMember]) -> Result<MeetingReport> {
        validate_roster(roster)?;

        let segments = match segment::segments(transcript) {
            Ok(segments) => segments,
            Err(MinutemanError::EmptyTranscript) => {
                info!("Empty transcript; returning empty report");
                return Ok(MeetingReport::empty());
            }
            Err(e) => return Err(e),
        };

        let mut drafts: Vec<TaskDraft> = Vec::new();
        for seg in segments {
            match self.detector.detect(&seg) {
                Some(signal) => {
                    let mut draft = self.extractor.extract(&signal, roster);
                    draft.priority = self.classifier.classify(&seg.text);
                    debug!(
                        index = seg.index,
                        title = %draft.title,
                        priority = %draft.priority,
                        "Draft extracted"
                    );
                    drafts.push(draft);
                }
                None => {
                    // Handoff utterances ("Alex, please handle it.") name the
                    // owner of the task stated in the segment just before.
                    if let Some(name) = self.extractor.handoff_assignee(&seg, roster) {
                        if let Some(last) = drafts.last_mut() {
                            if last.explicit_assignee.is_none()
                                && last.source_segment_index + 1 == seg.index
                            {
                                debug!(index = seg.index, assignee = %name, "Handoff resolved");
                                last.explicit_assignee = Some(name);
                            }
                        }
                    }
                }
            }
        }

        for draft in &mut drafts {
            self.scorer.assign(draft, roster);
        }

        let report = self.aggregator.aggregate(drafts);
        info!(
            tasks = report.tasks.len(),
            "Transcript processed"
        );
        Ok(report)
    }
}

/// Reject rosters the scorer cannot work with: empty roster, missing names,
/// or records whose skill list normalizes to nothing.
fn validate_roster(roster: &[TeamMember]) -> Result<()> {
    if roster.is_empty() {
        return Err(MinutemanError::InvalidRoster {
            index: 0,
            reason: "roster is empty".to_string(),
        });
    }
    for (index, member) in roster.iter().enumerate() {
        if member.name.trim().is_empty() {
            return Err(MinutemanError::InvalidRoster {
                index,
                reason: "missing name".to_string(),
            });
        }
        if member.skills.is_empty() {
            return Err(MinutemanError::InvalidRoster {
                index,
                reason: "no skills after normalization".to_string(),
            });
        }
    }
    Ok(())
}
