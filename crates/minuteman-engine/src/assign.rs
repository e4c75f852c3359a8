//! Owner assignment for drafts with no explicit assignee.
//!
//! Each roster member is scored against the draft description: whole-word
//! skill-token hits plus a role-affinity bonus when a task-type keyword maps
//! to the member's role. Strictly highest score wins; ties break to roster
//! order, so assignment is deterministic. All-zero scores leave the task
//! Unassigned.

use minuteman_core::config::ScoringConfig;
use minuteman_core::types::{TaskDraft, TeamMember, UNASSIGNED};
use tracing::debug;

use crate::text;

/// Scores team members against drafts and fills `assigned_to` / `reasoning`.
pub struct AssignmentScorer {
    config: ScoringConfig,
}

/// Score breakdown for one member, kept for the reasoning string.
struct MemberScore {
    total: u32,
    skill_hits: Vec<String>,
    role_hits: Vec<String>,
}

impl AssignmentScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Resolve the owner of a draft.
    ///
    /// Drafts with an explicit assignee bypass scoring entirely.
    pub fn assign(&self, draft: &mut TaskDraft, roster: &[TeamMember]) {
        if let Some(name) = &draft.explicit_assignee {
            draft.assigned_to = Some(name.clone());
            draft.reasoning = Some("Explicitly named in transcript".to_string());
            return;
        }

        let mut best: Option<(usize, MemberScore)> = None;
        for (idx, member) in roster.iter().enumerate() {
            let score = self.score(member, &draft.description);
            debug!(
                member = %member.name,
                total = score.total,
                "Scored member against draft"
            );
            // Strictly-greater keeps the earliest roster member on ties.
            if best.as_ref().map_or(true, |(_, b)| score.total > b.total) {
                best = Some((idx, score));
            }
        }

        match best {
            Some((idx, score)) if score.total > 0 => {
                draft.assigned_to = Some(roster[idx].name.clone());
                draft.reasoning = Some(reasoning(&score));
            }
            _ => {
                draft.assigned_to = Some(UNASSIGNED.to_string());
                draft.reasoning = Some("No matching skills found".to_string());
            }
        }
    }

    fn score(&self, member: &TeamMember, description: &str) -> MemberScore {
        let mut total = 0;
        let mut skill_hits = Vec::new();
        for skill in &member.skills {
            if text::contains_word(description, skill) {
                total += self.config.skill_weight;
                skill_hits.push(skill.clone());
            }
        }

        let role = member.role.to_ascii_lowercase();
        let mut role_hits = Vec::new();
        for affinity in &self.config.role_affinity {
            if !role.contains(&affinity.role_keyword.to_ascii_lowercase()) {
                continue;
            }
            if affinity
                .keywords
                .iter()
                .any(|kw| text::contains_word(description, kw))
            {
                total += self.config.role_bonus;
                role_hits.push(affinity.role_keyword.clone());
            }
        }

        MemberScore {
            total,
            skill_hits,
            role_hits,
        }
    }
}

/// Short human-readable justification citing what produced the winning score.
fn reasoning(score: &MemberScore) -> String {
    let mut parts = Vec::new();
    if !score.skill_hits.is_empty() {
        parts.push(format!("Matched skills: {}", score.skill_hits.join(", ")));
    }
    if !score.role_hits.is_empty() {
        parts.push(format!("Role affinity: {}", score.role_hits.join(", ")));
    }
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use minuteman_core::types::Priority;

    fn scorer() -> AssignmentScorer {
        AssignmentScorer::new(&ScoringConfig::default())
    }

    fn roster() -> Vec<TeamMember> {
        vec![
            TeamMember::new("Alex", "Frontend Dev", "React, JavaScript, CSS"),
            TeamMember::new("Sam", "Backend Dev", "Python, APIs"),
        ]
    }

    fn draft(description: &str) -> TaskDraft {
        TaskDraft {
            title: "t".to_string(),
            description: description.to_string(),
            explicit_assignee: None,
            priority: Priority::Medium,
            deadline: None,
            dependency_hint: None,
            source_segment_index: 0,
            assigned_to: None,
            reasoning: None,
        }
    }

    #[test]
    fn test_explicit_assignee_bypasses_scoring() {
        let mut d = draft("update the database schema");
        d.explicit_assignee = Some("Alex".to_string());
        scorer().assign(&mut d, &roster());
        assert_eq!(d.assigned_to.as_deref(), Some("Alex"));
        assert_eq!(
            d.reasoning.as_deref(),
            Some("Explicitly named in transcript")
        );
    }

    #[test]
    fn test_role_affinity_picks_backend_for_database_work() {
        let mut d = draft("Someone should update the database schema by end of week.");
        scorer().assign(&mut d, &roster());
        assert_eq!(d.assigned_to.as_deref(), Some("Sam"));
        assert!(d.reasoning.as_deref().unwrap().contains("backend"));
    }

    #[test]
    fn test_skill_match_scores_and_cites_tokens() {
        let mut d = draft("Rewrite the React dashboard with cleaner CSS.");
        scorer().assign(&mut d, &roster());
        assert_eq!(d.assigned_to.as_deref(), Some("Alex"));
        let reason = d.reasoning.unwrap();
        assert!(reason.contains("react"));
        assert!(reason.contains("css"));
    }

    #[test]
    fn test_skill_tokens_require_whole_words() {
        // The description says "API" singular, which is not the "apis"
        // skill token, so no skill points are awarded.
        let mut d = draft("create the API gateway module");
        scorer().assign(&mut d, &roster());
        // Sam still wins, via the backend role-affinity keyword "api".
        assert_eq!(d.assigned_to.as_deref(), Some("Sam"));
        let reason = d.reasoning.unwrap();
        assert!(reason.contains("Role affinity: backend"));
        assert!(!reason.contains("Matched skills"));
    }

    #[test]
    fn test_all_zero_scores_leave_unassigned() {
        let mut d = draft("Order more coffee for the kitchen.");
        scorer().assign(&mut d, &roster());
        assert_eq!(d.assigned_to.as_deref(), Some(UNASSIGNED));
        assert_eq!(d.reasoning.as_deref(), Some("No matching skills found"));
    }

    #[test]
    fn test_tie_breaks_to_roster_order() {
        let members = vec![
            TeamMember::new("First", "Generalist", "docs"),
            TeamMember::new("Second", "Generalist", "docs"),
        ];
        let mut d = draft("Polish the docs before release.");
        scorer().assign(&mut d, &members);
        assert_eq!(d.assigned_to.as_deref(), Some("First"));
    }

    #[test]
    fn test_skills_and_role_bonus_combine() {
        // Sam: skill "python" (+2) and backend role via "api" keyword (+3)
        // beats any Alex score.
        let mut d = draft("Port the Python API client to the new backend.");
        scorer().assign(&mut d, &roster());
        assert_eq!(d.assigned_to.as_deref(), Some("Sam"));
        let reason = d.reasoning.unwrap();
        assert!(reason.contains("python"));
        assert!(reason.contains("backend"));
    }

    #[test]
    fn test_empty_roster_leaves_unassigned() {
        let mut d = draft("update the database schema");
        scorer().assign(&mut d, &[]);
        assert_eq!(d.assigned_to.as_deref(), Some(UNASSIGNED));
    }
}
