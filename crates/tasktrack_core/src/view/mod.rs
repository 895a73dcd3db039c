//! View engine: pure derived computations over the task sequence.
//!
//! # Responsibility
//! - Compute sorted listings, status classification, summaries and
//!   statistics as plain structured data.
//! - Leave all rendering (tables, boxes, charts) to the caller.
//!
//! # Invariants
//! - Nothing in this module mutates a task or the store.
//! - Results are deterministic for a given task slice and `now`.

pub mod listing;
pub mod stats;
pub mod summary;
