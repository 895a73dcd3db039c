//! Console rendering for the shell.
//!
//! # Responsibility
//! - Turn the core's structured view data into boxed tables and charts.
//! - Keep every layout decision (widths, glyphs, truncation) out of core
//!   data.

use chrono::Local;
use tasktrack_core::{
    classify, display_name, productivity_stats, sorted_by_deadline, TaskStatus, TaskStore,
    DEADLINE_DISPLAY_FORMAT,
};

const WIDTH: usize = 70;
const BOX_INNER: usize = 68;

pub fn menu() {
    let bar = format!("+{}+", "=".repeat(WIDTH));
    println!("\n{bar}");
    println!("|{:^width$}|", "TASK MANAGER", width = WIDTH);
    println!("{bar}");
    for item in [
        "1. Add Task",
        "2. Complete Task",
        "3. View Tasks",
        "4. Daily Summary",
        "5. Productivity Analysis",
        "6. Save and Exit",
        "7. Export Tasks",
    ] {
        println!("| {:<width$}|", item, width = WIDTH - 1);
    }
    println!("{bar}");
}

pub fn header(title: &str) {
    println!("\n{}", "=".repeat(WIDTH));
    println!("{:^width$}", title, width = WIDTH);
    println!("{}", "=".repeat(WIDTH));
}

/// Renders all tasks as a table sorted by deadline.
///
/// Row numbers are 1-based positions in the sorted order; the completion
/// prompt resolves them back to store IDs via the same stable sort.
pub fn task_table(store: &TaskStore) {
    header("TASK LIST");
    if store.is_empty() {
        println!("No tasks available.");
        return;
    }

    let ordered = sorted_by_deadline(store.all());
    let name_width = ordered
        .iter()
        .map(|task| display_name(&task.name).chars().count())
        .max()
        .unwrap_or(0)
        .max(10)
        + 2;
    let now = Local::now().naive_local();

    let border = format!(
        "+-----+-{}-+------------------+-------------------+",
        "-".repeat(name_width)
    );
    println!("{border}");
    println!(
        "| ID  | {:<name_width$} | {:<16} | {:<17} |",
        "Task", "Due Date", "Status"
    );
    println!("{border}");
    for (row, task) in ordered.iter().enumerate() {
        let due = task.deadline.format(DEADLINE_DISPLAY_FORMAT).to_string();
        println!(
            "| {:<3} | {:<name_width$} | {due:<16} | {:<17} |",
            row + 1,
            display_name(&task.name),
            status_glyph(classify(task, now))
        );
    }
    println!("{border}");
}

pub fn daily_summary(store: &TaskStore) {
    header("DAILY SUMMARY");
    let now = Local::now().naive_local();
    let summary = tasktrack_core::daily_summary(store.all(), now);

    let border = format!("+{}+", "-".repeat(BOX_INNER));
    println!("{border}");
    let sections = [
        (format!("✓ Completed Tasks: {}", summary.completed.len()), &summary.completed),
        (format!("» Pending Tasks: {}", summary.pending.len()), &summary.pending),
        (format!("! Overdue Tasks: {}", summary.overdue.len()), &summary.overdue),
    ];
    for (title, names) in sections {
        box_line(&title);
        if names.is_empty() {
            box_line("  None");
        } else {
            for name in names {
                box_line(&format!("  {name}"));
            }
        }
        println!("{border}");
    }
}

pub fn productivity(store: &TaskStore) {
    header("PRODUCTIVITY ANALYSIS");
    let Some(stats) = productivity_stats(store.all()) else {
        println!("No tasks to analyze.");
        return;
    };

    let border = format!("+{}+", "-".repeat(BOX_INNER));
    println!("{border}");
    box_line(&format!("Total Tasks: {}", stats.total()));
    box_line(&format!(
        "Completed Tasks: {} ({:.2}%)",
        stats.completed_count, stats.completion_rate_pct
    ));
    box_line(&format!(
        "Pending Tasks: {} ({:.2}%)",
        stats.pending_count, stats.pending_rate_pct
    ));
    println!("{border}");

    // Text stand-in for a pie chart; the core only hands back counts.
    println!();
    bar("Completed", stats.completed_count, stats.total(), stats.completion_rate_pct);
    bar("Pending  ", stats.pending_count, stats.total(), stats.pending_rate_pct);
}

fn bar(label: &str, count: usize, total: usize, pct: f64) {
    const SCALE: usize = 40;
    let filled = if total == 0 {
        0
    } else {
        (count * SCALE + total / 2) / total
    };
    println!(
        "{label} |{:<width$}| {count} ({pct:.2}%)",
        "█".repeat(filled),
        width = SCALE
    );
}

fn box_line(text: &str) {
    println!("| {:<width$}|", text, width = BOX_INNER - 1);
}

fn status_glyph(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "✓ Completed",
        TaskStatus::Overdue => "! Overdue",
        TaskStatus::Pending => "» Pending",
    }
}
