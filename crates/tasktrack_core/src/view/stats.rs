//! Productivity statistics.

use crate::model::task::Task;

/// Aggregate completion counters and rates.
///
/// `pending_count` is every not-completed task, overdue included. This is
/// looser than [`crate::view::summary::daily_summary`], which splits
/// overdue into its own bucket; both accountings are intentional and pinned
/// by tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductivityStats {
    pub completed_count: usize,
    pub pending_count: usize,
    /// `completed_count / total * 100`.
    pub completion_rate_pct: f64,
    /// `pending_count / total * 100`.
    pub pending_rate_pct: f64,
}

impl ProductivityStats {
    pub fn total(&self) -> usize {
        self.completed_count + self.pending_count
    }
}

/// Computes completion statistics over the whole store.
///
/// Returns `None` when there are no tasks to analyze; callers report
/// "no data" rather than dividing by zero.
pub fn productivity_stats(tasks: &[Task]) -> Option<ProductivityStats> {
    if tasks.is_empty() {
        return None;
    }

    let completed_count = tasks.iter().filter(|task| task.completed).count();
    let pending_count = tasks.len() - completed_count;
    let total = tasks.len() as f64;

    Some(ProductivityStats {
        completed_count,
        pending_count,
        completion_rate_pct: completed_count as f64 / total * 100.0,
        pending_rate_pct: pending_count as f64 / total * 100.0,
    })
}
