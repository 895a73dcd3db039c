//! Plain-text task export.
//!
//! Write-only by design; there is no corresponding import.

use crate::model::task::Task;
use std::io::{self, Write};

/// Deadline rendering shared by the export file and interactive screens.
pub const DEADLINE_DISPLAY_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Renders the export text, one line per task:
/// `<name> | Due: <DD-MM-YYYY HH:MM> | <Completed|Pending>`.
pub fn export_lines(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        let state = if task.completed { "Completed" } else { "Pending" };
        out.push_str(&format!(
            "{} | Due: {} | {}\n",
            task.name,
            task.deadline.format(DEADLINE_DISPLAY_FORMAT),
            state
        ));
    }
    out
}

/// Writes the export text to `writer`.
pub fn write_export<W: Write>(tasks: &[Task], writer: &mut W) -> io::Result<()> {
    writer.write_all(export_lines(tasks).as_bytes())
}
