//! Snapshot persistence boundary.
//!
//! # Responsibility
//! - Define the gateway contract for whole-store save/load.
//! - Keep codec and filesystem details out of the store and views.
//!
//! # Invariants
//! - `load(save(tasks))` round-trips every field, order preserved.
//! - A missing snapshot is `NotFound`, never `Corrupt`; callers report
//!   "no saved tasks" instead of an error.
//! - Snapshots are same-version only; no cross-version compatibility.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod export;
mod json_file;

pub use json_file::JsonSnapshotFile;

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Failure modes at the persistence boundary.
#[derive(Debug)]
pub enum SnapshotError {
    /// No snapshot exists yet. Informational, not a failure.
    NotFound,
    /// The snapshot codec failed; on load this means the stream exists but
    /// cannot be decoded.
    Corrupt(String),
    /// Filesystem failure other than a missing file.
    Io(std::io::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "no saved tasks found"),
            Self::Corrupt(message) => write!(f, "snapshot cannot be decoded: {message}"),
            Self::Io(err) => write!(f, "snapshot i/o failed: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::NotFound | Self::Corrupt(_) => None,
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(value: std::io::Error) -> Self {
        if value.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound
        } else {
            Self::Io(value)
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Corrupt(value.to_string())
    }
}

/// Gateway contract for whole-store persistence.
///
/// Implementations serialize the full task sequence in one call; there is
/// no partial update. The store never touches this on the interactive path,
/// only at process start and end.
pub trait SnapshotGateway {
    fn save(&self, tasks: &[Task]) -> SnapshotResult<()>;
    fn load(&self) -> SnapshotResult<Vec<Task>>;
}
