//! Plain-text rendering of a meeting report as an assignment table.

use minuteman_core::types::{MeetingReport, Task};

const RULE_WIDTH: usize = 100;

/// Render the report as a readable fixed-width table.
pub fn render(report: &MeetingReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\nMEETING TASK ASSIGNMENTS\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    if !report.meeting_summary.is_empty() {
        out.push_str(&format!("Summary: {}\n\n", report.meeting_summary));
    }

    out.push_str(&format!(
        "{:<4} {:<30} {:<15} {:<15} {:<10} {:<15}\n",
        "#", "Task", "Assigned To", "Deadline", "Priority", "Dependencies"
    ));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for task in &report.tasks {
        out.push_str(&render_row(task));
    }

    out
}

fn render_row(task: &Task) -> String {
    let deadline = task.deadline.as_deref().unwrap_or("Not set");
    let deps = if task.dependencies.is_empty() {
        "-".to_string()
    } else {
        task.dependencies
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut row = format!(
        "{:<4} {:<30} {:<15} {:<15} {:<10} {:<15}\n",
        task.task_id,
        truncate(&task.title, 28),
        truncate(&task.assigned_to, 13),
        truncate(deadline, 13),
        task.priority.to_string(),
        deps
    );

    if !task.description.is_empty() {
        row.push_str(&format!("     Description: {}\n", task.description));
    }
    if !task.reasoning.is_empty() {
        row.push_str(&format!("     Reasoning: {}\n", task.reasoning));
    }
    row.push('\n');
    row
}

/// Truncate to at most `max` characters, staying on char boundaries.
fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use minuteman_core::types::Priority;

    fn task(id: u32, title: &str, owner: &str) -> Task {
        Task {
            task_id: id,
            title: title.to_string(),
            description: format!("{}.", title),
            assigned_to: owner.to_string(),
            deadline: None,
            priority: Priority::Medium,
            dependencies: Vec::new(),
            reasoning: "Matched skills: react".to_string(),
        }
    }

    #[test]
    fn test_render_contains_header_and_rows() {
        let report = MeetingReport {
            meeting_summary: "2 task(s) identified; owners: Alex, Sam".to_string(),
            tasks: vec![task(1, "Fix the login bug", "Alex"), task(2, "Update docs", "Sam")],
        };
        let text = render(&report);
        assert!(text.contains("MEETING TASK ASSIGNMENTS"));
        assert!(text.contains("Summary: 2 task(s) identified"));
        assert!(text.contains("Fix the login bug"));
        assert!(text.contains("Alex"));
        assert!(text.contains("Reasoning: Matched skills: react"));
    }

    #[test]
    fn test_missing_deadline_renders_not_set() {
        let report = MeetingReport {
            meeting_summary: String::new(),
            tasks: vec![task(1, "Fix the login bug", "Alex")],
        };
        let text = render(&report);
        assert!(text.contains("Not set"));
    }

    #[test]
    fn test_long_title_truncated() {
        let long = "Refactor the entire authentication and session layer";
        let mut t = task(1, long, "Alex");
        t.description = "Discussed during planning".to_string();
        let report = MeetingReport {
            meeting_summary: String::new(),
            tasks: vec![t],
        };
        let text = render(&report);
        assert!(!text.contains(long));
        assert!(text.contains(&long.chars().take(28).collect::<String>()));
    }

    #[test]
    fn test_dependencies_joined() {
        let mut t = task(3, "Ship it", "Sam");
        t.dependencies = vec![1, 2];
        let report = MeetingReport {
            meeting_summary: String::new(),
            tasks: vec![t],
        };
        assert!(render(&report).contains("1, 2"));
    }
}
