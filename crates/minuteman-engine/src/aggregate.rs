//! Final aggregation: IDs, dependency resolution, and the meeting summary.
//!
//! Runs single-threaded over the ordered draft sequence. Dependency hints
//! only ever resolve against tasks aggregated *before* the current one, so
//! the resulting graph is acyclic by construction — no cycle detection
//! needed, and no forward or self references can exist.

use minuteman_core::config::AggregationConfig;
use minuteman_core::types::{MeetingReport, Task, TaskDraft, UNASSIGNED};
use tracing::debug;

use crate::text;

/// Builds the final task collection and summary from scored drafts.
pub struct TaskAggregator {
    overlap_threshold: f64,
}

impl TaskAggregator {
    pub fn new(config: &AggregationConfig) -> Self {
        Self {
            overlap_threshold: config.dependency_overlap_threshold,
        }
    }

    /// Assign sequential IDs starting at 1 and resolve dependency hints.
    pub fn aggregate(&self, drafts: Vec<TaskDraft>) -> MeetingReport {
        let mut tasks: Vec<Task> = Vec::with_capacity(drafts.len());

        for draft in drafts {
            let task_id = tasks.len() as u32 + 1;
            let dependencies = match &draft.dependency_hint {
                Some(hint) => self.resolve_hint(hint, &tasks),
                None => Vec::new(),
            };

            tasks.push(Task {
                task_id,
                title: draft.title,
                description: draft.description,
                assigned_to: draft.assigned_to.unwrap_or_else(|| UNASSIGNED.to_string()),
                deadline: draft.deadline,
                priority: draft.priority,
                dependencies,
                reasoning: draft.reasoning.unwrap_or_default(),
            });
        }

        let meeting_summary = summary(&tasks);
        MeetingReport {
            meeting_summary,
            tasks,
        }
    }

    /// Resolve a free-text hint against earlier tasks only.
    ///
    /// A purely anaphoric hint ("that is done") points at the immediately
    /// preceding task. A hint with content tokens links to the earlier task
    /// with the best token overlap at or above the threshold (substring
    /// containment counts as full overlap). Unresolved hints are dropped —
    /// the engine never fabricates a reference.
    fn resolve_hint(&self, hint: &str, earlier: &[Task]) -> Vec<u32> {
        if earlier.is_empty() {
            return Vec::new();
        }

        let content: Vec<String> = text::tokens(hint)
            .into_iter()
            .filter(|t| !is_filler(t))
            .collect();

        if content.is_empty() {
            // Anaphoric reference: "that", "it", "this is done".
            return vec![earlier.last().map(|t| t.task_id).unwrap_or_default()];
        }

        let hint_lower = hint.to_ascii_lowercase();
        let mut best: Option<(f64, u32)> = None;
        for task in earlier {
            let haystack = format!("{} {}", task.title, task.description);
            let overlap = if haystack.to_ascii_lowercase().contains(&hint_lower) {
                1.0
            } else {
                let hits = content
                    .iter()
                    .filter(|t| text::contains_word(&haystack, t))
                    .count();
                hits as f64 / content.len() as f64
            };
            debug!(task_id = task.task_id, overlap, "Dependency hint overlap");
            // Strictly-greater keeps the earliest task on equal overlap.
            if overlap >= self.overlap_threshold
                && best.map_or(true, |(b, _)| overlap > b)
            {
                best = Some((overlap, task.task_id));
            }
        }

        best.map(|(_, id)| vec![id]).unwrap_or_default()
    }
}

/// Derived summary line: task count plus distinct owners in first-appearance
/// order. Not a semantic summarization.
fn summary(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No actionable tasks identified".to_string();
    }
    let mut owners: Vec<&str> = Vec::new();
    for task in tasks {
        if !owners.contains(&task.assigned_to.as_str()) {
            owners.push(&task.assigned_to);
        }
    }
    format!(
        "{} task(s) identified; owners: {}",
        tasks.len(),
        owners.join(", ")
    )
}

/// Tokens that carry no referential content in a dependency hint.
fn is_filler(token: &str) -> bool {
    matches!(
        token,
        "the"
            | "a"
            | "an"
            | "is"
            | "was"
            | "are"
            | "were"
            | "be"
            | "been"
            | "being"
            | "it"
            | "this"
            | "that"
            | "these"
            | "those"
            | "done"
            | "complete"
            | "completed"
            | "finish"
            | "finished"
            | "first"
            | "then"
            | "we"
            | "has"
            | "have"
            | "gets"
            | "get"
    )
}
