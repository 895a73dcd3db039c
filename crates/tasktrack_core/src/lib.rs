//! Core domain logic for tasktrack.
//! This crate is the single source of truth for task invariants.

pub mod logging;
pub mod model;
pub mod snapshot;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskStatus};
pub use snapshot::export::{export_lines, write_export, DEADLINE_DISPLAY_FORMAT};
pub use snapshot::{JsonSnapshotFile, SnapshotError, SnapshotGateway, SnapshotResult};
pub use store::task_store::{StoreError, StoreResult, TaskStore};
pub use view::listing::{classify, sorted_by_deadline};
pub use view::stats::{productivity_stats, ProductivityStats};
pub use view::summary::{daily_summary, display_name, DailySummary, MAX_DISPLAY_NAME_CHARS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
