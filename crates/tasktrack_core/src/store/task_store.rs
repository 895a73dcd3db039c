//! Insertion-ordered task store and its validation rules.
//!
//! # Responsibility
//! - Own the task sequence for the lifetime of the process.
//! - Validate every add against format rules and the wall clock before
//!   anything is stored.
//!
//! # Invariants
//! - A failed `add` leaves the store byte-for-byte unchanged.
//! - Stored deadlines are strictly in the future at their moment of add.
//! - Completion is idempotent; re-completing a task is a success, not an
//!   error.

use crate::model::task::{Task, TaskId};
use chrono::{Local, NaiveDateTime};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Combined input format: `DD-MM-YYYY HH:MM`.
const DEADLINE_INPUT_FORMAT: &str = "%d-%m-%Y %H:%M";

pub type StoreResult<T> = Result<T, StoreError>;

/// Validation and lookup errors for store mutations.
///
/// All variants are recoverable; the caller reports them and the user
/// re-enters input. Nothing here aborts the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The task name was empty or whitespace-only.
    EmptyName,
    /// Date or time did not parse as `DD-MM-YYYY` / `HH:MM`.
    InvalidDateTime { input: String },
    /// The parsed deadline was not strictly after the current wall clock.
    PastDeadline { deadline: NaiveDateTime },
    /// Insertion-order index outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
    /// No task in the store carries this ID.
    UnknownTask(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "task name cannot be empty"),
            Self::InvalidDateTime { input } => write!(
                f,
                "invalid date or time `{input}`; expected DD-MM-YYYY for date and HH:MM for time"
            ),
            Self::PastDeadline { deadline } => write!(
                f,
                "deadline {} is not in the future",
                deadline.format(DEADLINE_INPUT_FORMAT)
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "task index {index} is out of range for {len} task(s)")
            }
            Self::UnknownTask(id) => write!(f, "no task with id {id}"),
        }
    }
}

impl Error for StoreError {}

/// Exclusive owner of the insertion-ordered task sequence.
///
/// Passed explicitly to views and the shell; there is no ambient singleton.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole store with a loaded task sequence.
    ///
    /// This is the only bulk mutation; individual tasks are never deleted.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Adds a task validated against the current wall clock.
    ///
    /// See [`TaskStore::add_at`] for the validation rules.
    pub fn add(&mut self, name: &str, date_text: &str, time_text: &str) -> StoreResult<usize> {
        self.add_at(name, date_text, time_text, Local::now().naive_local())
    }

    /// Adds a task validated against an explicit `now`.
    ///
    /// Checks run in a fixed order: blank name first (before any parsing),
    /// then format, then the future-deadline rule. On success the task is
    /// appended with `completed = false` and its insertion index returned.
    ///
    /// # Errors
    /// - `EmptyName` when the trimmed name is empty.
    /// - `InvalidDateTime` when `date_text`/`time_text` do not parse as
    ///   `DD-MM-YYYY` / `HH:MM` (out-of-range calendar dates included).
    /// - `PastDeadline` when the parsed deadline is `<= now`.
    pub fn add_at(
        &mut self,
        name: &str,
        date_text: &str,
        time_text: &str,
        now: NaiveDateTime,
    ) -> StoreResult<usize> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        let deadline = parse_deadline(date_text, time_text)?;
        if deadline <= now {
            return Err(StoreError::PastDeadline { deadline });
        }

        let task = Task::new(name, deadline);
        info!(
            "event=task_added module=store status=ok id={} deadline={}",
            task.id,
            deadline.format(DEADLINE_INPUT_FORMAT)
        );
        self.tasks.push(task);
        Ok(self.tasks.len() - 1)
    }

    /// Completes the task at `index` in insertion order.
    ///
    /// Idempotent: completing an already-completed task succeeds without
    /// changing state. Returns the task for caller-side reporting.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `index >= len`; no task is touched.
    pub fn complete(&mut self, index: usize) -> StoreResult<&Task> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        task.mark_completed();
        info!("event=task_completed module=store status=ok id={}", task.id);
        Ok(task)
    }

    /// Completes the task carrying `id`.
    ///
    /// This is how display layers address tasks: a sorted listing hands out
    /// IDs, so completion stays unambiguous even when two tasks share the
    /// same name and deadline. Idempotent, like [`TaskStore::complete`].
    ///
    /// # Errors
    /// - `UnknownTask` when no stored task carries `id`.
    pub fn complete_by_id(&mut self, id: TaskId) -> StoreResult<&Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::UnknownTask(id))?;
        task.mark_completed();
        info!("event=task_completed module=store status=ok id={}", task.id);
        Ok(task)
    }

    /// Read-only view of the tasks in insertion order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn parse_deadline(date_text: &str, time_text: &str) -> StoreResult<NaiveDateTime> {
    let combined = format!("{} {}", date_text.trim(), time_text.trim());
    NaiveDateTime::parse_from_str(&combined, DEADLINE_INPUT_FORMAT)
        .map_err(|_| StoreError::InvalidDateTime { input: combined })
}
