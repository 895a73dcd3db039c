//! Deadline-ordered listing and status classification.

use crate::model::task::{Task, TaskStatus};
use chrono::NaiveDateTime;

/// Returns the tasks ordered by ascending deadline.
///
/// The sort is stable: tasks sharing a deadline keep their relative
/// insertion order, so a rendered row number resolves to the same task
/// between a listing and the completion prompt that follows it. Each
/// returned reference carries the task's stable `id`, which is what a
/// display layer should hand back to the store for completion.
pub fn sorted_by_deadline(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by_key(|task| task.deadline);
    ordered
}

/// Classifies one task relative to `now`.
///
/// Completion wins over lateness: a completed task is `Completed` even when
/// its deadline has passed. A deadline exactly equal to `now` is still
/// `Pending`; only a strictly earlier deadline is `Overdue`.
pub fn classify(task: &Task, now: NaiveDateTime) -> TaskStatus {
    if task.completed {
        TaskStatus::Completed
    } else if task.deadline < now {
        TaskStatus::Overdue
    } else {
        TaskStatus::Pending
    }
}
