//! Daily summary grouping.

use crate::model::task::{Task, TaskStatus};
use crate::view::listing::classify;
use chrono::NaiveDateTime;

/// Longest task name rendered verbatim; longer names are truncated for
/// display.
pub const MAX_DISPLAY_NAME_CHARS: usize = 60;
const TRUNCATED_NAME_CHARS: usize = 57;

/// Task names partitioned by status for the daily summary screen.
///
/// `pending` and `overdue` are disjoint here: an overdue task appears only
/// in `overdue`, mirroring [`classify`]. Note that
/// [`crate::view::stats::productivity_stats`] folds overdue into its
/// pending count instead; the two screens deliberately account differently.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DailySummary {
    pub completed: Vec<String>,
    pub pending: Vec<String>,
    pub overdue: Vec<String>,
}

/// Partitions task names by status relative to `now`.
///
/// Each list preserves the tasks' insertion order. Names are passed through
/// [`display_name`], so over-long labels arrive already truncated.
pub fn daily_summary(tasks: &[Task], now: NaiveDateTime) -> DailySummary {
    let mut summary = DailySummary::default();
    for task in tasks {
        let name = display_name(&task.name);
        match classify(task, now) {
            TaskStatus::Completed => summary.completed.push(name),
            TaskStatus::Overdue => summary.overdue.push(name),
            TaskStatus::Pending => summary.pending.push(name),
        }
    }
    summary
}

/// Truncates a name for display to at most [`MAX_DISPLAY_NAME_CHARS`]
/// characters, marking the cut with `...`.
///
/// Presentation only; stored names are never modified.
pub fn display_name(name: &str) -> String {
    if name.chars().count() <= MAX_DISPLAY_NAME_CHARS {
        name.to_string()
    } else {
        let mut truncated: String = name.chars().take(TRUNCATED_NAME_CHARS).collect();
        truncated.push_str("...");
        truncated
    }
}
