//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record owned by the store.
//! - Provide the one-way completion transition.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `deadline` is fixed at creation; nothing mutates it afterwards.
//! - `completed` only ever transitions false -> true.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Derived classification of a task relative to current wall-clock time.
///
/// Never stored; always recomputed from `completed` and `deadline` so two
/// renders of the same store at different times stay honest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Marked done, regardless of deadline.
    Completed,
    /// Not done and the deadline has passed.
    Overdue,
    /// Not done, deadline still ahead.
    Pending,
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable ID used to address this task unambiguously, even when another
    /// task carries the same name and deadline.
    pub id: TaskId,
    /// Display label. The store rejects blank names before construction.
    pub name: String,
    /// Local wall-clock due date and time. No time zone attached.
    pub deadline: NaiveDateTime,
    /// Completion flag. Starts false, flips true exactly once.
    pub completed: bool,
}

impl Task {
    /// Creates a task with a generated stable ID and `completed = false`.
    pub fn new(name: impl Into<String>, deadline: NaiveDateTime) -> Self {
        Self::with_id(Uuid::new_v4(), name, deadline)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used where identity already exists externally, e.g. fixtures built
    /// against a known ID.
    pub fn with_id(id: TaskId, name: impl Into<String>, deadline: NaiveDateTime) -> Self {
        Self {
            id,
            name: name.into(),
            deadline,
            completed: false,
        }
    }

    /// Marks this task completed. No-op when already completed; there is no
    /// reverse transition.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}
