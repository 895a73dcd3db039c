//! Domain model for tracked tasks.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep derived status classification separate from stored state.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`, never by its field
//!   values (duplicate names and deadlines are permitted).
//! - Stored state never changes except for the one-way completion flag.

pub mod task;
