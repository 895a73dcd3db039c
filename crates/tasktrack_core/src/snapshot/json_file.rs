//! JSON-file snapshot gateway.

use crate::model::task::Task;
use crate::snapshot::{SnapshotGateway, SnapshotResult};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Snapshot gateway backed by a single JSON file.
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotGateway for JsonSnapshotFile {
    fn save(&self, tasks: &[Task]) -> SnapshotResult<()> {
        let encoded = serde_json::to_vec_pretty(tasks)?;
        fs::write(&self.path, encoded)?;
        info!(
            "event=snapshot_saved module=snapshot status=ok count={} path={}",
            tasks.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> SnapshotResult<Vec<Task>> {
        let bytes = fs::read(&self.path)?;
        let tasks: Vec<Task> = serde_json::from_slice(&bytes)?;
        info!(
            "event=snapshot_loaded module=snapshot status=ok count={} path={}",
            tasks.len(),
            self.path.display()
        );
        Ok(tasks)
    }
}
