//! Core types and value objects for the task extraction engine.
//!
//! Defines roster records, transcript segments, action signals, task drafts,
//! and the final report types serialized for downstream consumers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel owner value when no member scores above zero and no name was
/// mentioned in the transcript.
pub const UNASSIGNED: &str = "Unassigned";

// =============================================================================
// Enums
// =============================================================================

/// Task priority levels, highest first.
///
/// Serialized capitalized ("Critical", "High", ...) to match the fixed
/// output record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Critical => write!(f, "Critical"),
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "critical" => Ok(Priority::Critical),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

// =============================================================================
// Roster
// =============================================================================

/// A raw roster record as provided by the caller.
///
/// `skills` is a free-text comma-separated list; it is normalized into
/// lowercase tokens when converted to a [`TeamMember`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRecord {
    pub name: String,
    pub role: String,
    pub skills: String,
}

impl RosterRecord {
    /// Normalize this record into a [`TeamMember`].
    pub fn into_member(self) -> TeamMember {
        TeamMember::new(&self.name, &self.role, &self.skills)
    }
}

/// A team member with a normalized skill set.
///
/// Immutable for the duration of one engine run; passed read-only into the
/// pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    /// Lowercase skill tokens, deduplicated, in original order.
    pub skills: Vec<String>,
}

impl TeamMember {
    /// Build a member from a free-text comma-separated skill list.
    ///
    /// Tokens are trimmed, lowercased, and deduplicated; empty tokens are
    /// dropped. Original order is preserved so scoring stays deterministic.
    pub fn new(name: &str, role: &str, skills_csv: &str) -> Self {
        let mut skills: Vec<String> = Vec::new();
        for token in skills_csv.split(',') {
            let token = token.trim().to_lowercase();
            if !token.is_empty() && !skills.contains(&token) {
                skills.push(token);
            }
        }
        Self {
            name: name.trim().to_string(),
            role: role.trim().to_string(),
            skills,
        }
    }
}

// =============================================================================
// Pipeline intermediates
// =============================================================================

/// One sentence/utterance-sized unit of transcript text.
///
/// `index` is the 0-based position in discourse order; it is what the
/// aggregator's earlier-only dependency rule is anchored to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub index: usize,
    pub text: String,
}

/// Evidence that a segment describes a task.
///
/// Exactly one of `matched_verb` / `matched_phrase` is set: the detector
/// checks the verb lexicon first and stops at the first hit.
#[derive(Debug, Clone)]
pub struct ActionSignal {
    pub segment: TranscriptSegment,
    pub matched_verb: Option<String>,
    pub matched_phrase: Option<String>,
}

impl ActionSignal {
    /// The trigger text that flagged this segment, whichever lexicon hit.
    pub fn trigger(&self) -> &str {
        self.matched_verb
            .as_deref()
            .or(self.matched_phrase.as_deref())
            .unwrap_or("")
    }
}

/// A partially-built task before ID assignment and dependency resolution.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub explicit_assignee: Option<String>,
    pub priority: Priority,
    pub deadline: Option<String>,
    pub dependency_hint: Option<String>,
    pub source_segment_index: usize,
    /// Filled by the assignment scorer.
    pub assigned_to: Option<String>,
    /// Filled by the assignment scorer.
    pub reasoning: Option<String>,
}

// =============================================================================
// Final output
// =============================================================================

/// A finalized task. Field names and nesting are fixed for downstream
/// consumers; do not rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique, sequential from 1, in extraction order.
    pub task_id: u32,
    pub title: String,
    pub description: String,
    /// A roster member name, or [`UNASSIGNED`].
    pub assigned_to: String,
    pub deadline: Option<String>,
    pub priority: Priority,
    /// IDs of earlier tasks this one depends on. Always strictly less than
    /// `task_id`.
    pub dependencies: Vec<u32>,
    pub reasoning: String,
}

/// The complete output of one engine run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingReport {
    pub meeting_summary: String,
    pub tasks: Vec<Task>,
}

impl MeetingReport {
    /// The fixed report returned for an empty or whitespace-only transcript.
    pub fn empty() -> Self {
        Self {
            meeting_summary: "No content to analyze".to_string(),
            tasks: Vec::new(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Priority ----

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::Critical.to_string(), "Critical");
        assert_eq!(Priority::High.to_string(), "High");
        assert_eq!(Priority::Medium.to_string(), "Medium");
        assert_eq!(Priority::Low.to_string(), "Low");
    }

    #[test]
    fn test_priority_from_str_case_insensitive() {
        assert_eq!("critical".parse::<Priority>().unwrap(), Priority::Critical);
        assert_eq!("Critical".parse::<Priority>().unwrap(), Priority::Critical);
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("Low".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_serde_json_format() {
        assert_eq!(
            serde_json::to_string(&Priority::Critical).unwrap(),
            "\"Critical\""
        );
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"Low\"");
    }

    #[test]
    fn test_priority_serde_round_trip() {
        for variant in [
            Priority::Critical,
            Priority::High,
            Priority::Medium,
            Priority::Low,
        ] {
            let json = serde_json::to_string(&variant).unwrap();
            let rt: Priority = serde_json::from_str(&json).unwrap();
            assert_eq!(variant, rt);
        }
    }

    // ---- TeamMember ----

    #[test]
    fn test_team_member_skill_normalization() {
        let m = TeamMember::new("Alex", "Frontend Dev", "React, JavaScript, CSS");
        assert_eq!(m.skills, vec!["react", "javascript", "css"]);
    }

    #[test]
    fn test_team_member_skills_deduped_and_trimmed() {
        let m = TeamMember::new("Sam", "Backend Dev", " Python ,APIs, python,, ");
        assert_eq!(m.skills, vec!["python", "apis"]);
    }

    #[test]
    fn test_team_member_empty_skills() {
        let m = TeamMember::new("Sam", "Backend Dev", " , ,");
        assert!(m.skills.is_empty());
    }

    #[test]
    fn test_roster_record_into_member() {
        let record = RosterRecord {
            name: "Lata".to_string(),
            role: "QA Engineer".to_string(),
            skills: "Testing, Automation".to_string(),
        };
        let m = record.into_member();
        assert_eq!(m.name, "Lata");
        assert_eq!(m.skills, vec!["testing", "automation"]);
    }

    #[test]
    fn test_roster_record_deserialize() {
        let json = r#"{"name": "Alex", "role": "Frontend Dev", "skills": "React, CSS"}"#;
        let record: RosterRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Alex");
        assert_eq!(record.skills, "React, CSS");
    }

    // ---- ActionSignal ----

    #[test]
    fn test_action_signal_trigger_prefers_verb() {
        let signal = ActionSignal {
            segment: TranscriptSegment {
                index: 0,
                text: "fix the bug".to_string(),
            },
            matched_verb: Some("fix".to_string()),
            matched_phrase: None,
        };
        assert_eq!(signal.trigger(), "fix");
    }

    #[test]
    fn test_action_signal_trigger_falls_back_to_phrase() {
        let signal = ActionSignal {
            segment: TranscriptSegment {
                index: 1,
                text: "we need to ship".to_string(),
            },
            matched_verb: None,
            matched_phrase: Some("need to".to_string()),
        };
        assert_eq!(signal.trigger(), "need to");
    }

    // ---- Task / MeetingReport ----

    #[test]
    fn test_task_serde_field_names() {
        let task = Task {
            task_id: 1,
            title: "Fix the login bug".to_string(),
            description: "We need to fix the login bug urgently.".to_string(),
            assigned_to: "Alex".to_string(),
            deadline: None,
            priority: Priority::Critical,
            dependencies: vec![],
            reasoning: "Explicitly named in transcript".to_string(),
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["task_id"], 1);
        assert_eq!(value["assigned_to"], "Alex");
        assert_eq!(value["priority"], "Critical");
        assert!(value["deadline"].is_null());
        assert_eq!(value["dependencies"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_meeting_report_empty() {
        let report = MeetingReport::empty();
        assert_eq!(report.meeting_summary, "No content to analyze");
        assert!(report.tasks.is_empty());
    }

    #[test]
    fn test_meeting_report_serde_round_trip() {
        let report = MeetingReport {
            meeting_summary: "1 task(s) extracted; owners: Alex".to_string(),
            tasks: vec![Task {
                task_id: 1,
                title: "Write the tests".to_string(),
                description: "After that is done, write the tests.".to_string(),
                assigned_to: UNASSIGNED.to_string(),
                deadline: Some("end of week".to_string()),
                priority: Priority::Medium,
                dependencies: vec![1],
                reasoning: "No matching skills found".to_string(),
            }],
        };
        let json = serde_json::to_string(&report).unwrap();
        let rt: MeetingReport = serde_json::from_str(&json).unwrap();
        assert_eq!(rt.meeting_summary, report.meeting_summary);
        assert_eq!(rt.tasks.len(), 1);
        assert_eq!(rt.tasks[0].deadline.as_deref(), Some("end of week"));
    }
}
