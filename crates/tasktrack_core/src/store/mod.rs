//! Store layer: exclusive ownership of the task sequence.
//!
//! # Responsibility
//! - Hold tasks in insertion order and expose validated mutations.
//! - Return semantic errors (`EmptyName`, `PastDeadline`, ...) instead of
//!   panicking on bad input.
//!
//! # Invariants
//! - Mutation happens only through `add` and the completion operations.
//! - Read access hands out shared slices; callers never mutate directly.

pub mod task_store;
