use chrono::{NaiveDate, NaiveDateTime};
use tasktrack_core::{
    classify, daily_summary, display_name, productivity_stats, sorted_by_deadline, Task,
    TaskStatus, TaskStore, MAX_DISPLAY_NAME_CHARS,
};

fn dt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn sorted_by_deadline_is_ascending_and_stable_on_ties() {
    let shared = dt(2099, 1, 1, 10, 0);
    let tasks = vec![
        Task::new("Second tie", shared),
        Task::new("Early", dt(2099, 1, 1, 9, 0)),
        Task::new("Third tie", shared),
    ];

    let ordered = sorted_by_deadline(&tasks);
    let names: Vec<&str> = ordered.iter().map(|task| task.name.as_str()).collect();
    // Equal deadlines keep their relative insertion order.
    assert_eq!(names, ["Early", "Second tie", "Third tie"]);
}

#[test]
fn classify_prefers_completion_over_lateness() {
    let now = dt(2025, 6, 15, 12, 0);

    let mut done_but_late = Task::new("Done late", dt(2025, 6, 1, 9, 0));
    done_but_late.mark_completed();
    assert_eq!(classify(&done_but_late, now), TaskStatus::Completed);

    let late = Task::new("Late", dt(2025, 6, 1, 9, 0));
    assert_eq!(classify(&late, now), TaskStatus::Overdue);

    let ahead = Task::new("Ahead", dt(2025, 7, 1, 9, 0));
    assert_eq!(classify(&ahead, now), TaskStatus::Pending);

    // Deadline exactly at `now` is still pending, not overdue.
    let at_now = Task::new("At now", now);
    assert_eq!(classify(&at_now, now), TaskStatus::Pending);
}

#[test]
fn daily_summary_keeps_pending_and_overdue_disjoint() {
    let now = dt(2025, 6, 15, 12, 0);
    let mut done = Task::new("Done", dt(2025, 6, 1, 9, 0));
    done.mark_completed();
    let tasks = vec![
        done,
        Task::new("Missed", dt(2025, 6, 1, 9, 0)),
        Task::new("Upcoming", dt(2025, 7, 1, 9, 0)),
        Task::new("Also missed", dt(2025, 6, 14, 9, 0)),
    ];

    let summary = daily_summary(&tasks, now);
    assert_eq!(summary.completed, ["Done"]);
    assert_eq!(summary.pending, ["Upcoming"]);
    // Overdue names stay in insertion order and never appear under pending.
    assert_eq!(summary.overdue, ["Missed", "Also missed"]);
}

#[test]
fn daily_summary_truncates_over_long_names_for_display() {
    let now = dt(2025, 6, 15, 12, 0);
    let exact = "n".repeat(MAX_DISPLAY_NAME_CHARS);
    let long = "n".repeat(MAX_DISPLAY_NAME_CHARS + 1);
    let tasks = vec![
        Task::new(exact.clone(), dt(2025, 7, 1, 9, 0)),
        Task::new(long.clone(), dt(2025, 7, 1, 9, 0)),
    ];

    let summary = daily_summary(&tasks, now);
    assert_eq!(summary.pending[0], exact);
    assert_eq!(summary.pending[1], format!("{}...", "n".repeat(57)));
    assert_eq!(summary.pending[1].chars().count(), MAX_DISPLAY_NAME_CHARS);

    // Truncation is presentation only; the stored name is untouched.
    assert_eq!(tasks[1].name, long);
    assert_eq!(display_name(&long), summary.pending[1]);
}

#[test]
fn productivity_stats_on_empty_store_reports_no_data() {
    assert!(productivity_stats(&[]).is_none());
}

#[test]
fn productivity_stats_folds_overdue_into_pending() {
    let mut done = Task::new("Done", dt(2025, 6, 1, 9, 0));
    done.mark_completed();
    let tasks = vec![
        done,
        // Overdue relative to any 2026+ clock, still counted as pending here.
        Task::new("Missed", dt(2025, 6, 1, 9, 0)),
        Task::new("Upcoming", dt(2099, 7, 1, 9, 0)),
    ];

    let stats = productivity_stats(&tasks).unwrap();
    assert_eq!(stats.completed_count, 1);
    assert_eq!(stats.pending_count, 2);
    assert_eq!(stats.total(), 3);
}

// End-to-end walk of the listing/completion/statistics flow.
#[test]
fn report_email_scenario() {
    let mut store = TaskStore::new();
    let now = dt(2025, 6, 15, 12, 0);

    let report_index = store.add_at("Report", "01-01-2099", "10:00", now).unwrap();
    let email_index = store.add_at("Email", "01-01-2099", "09:00", now).unwrap();
    assert_eq!(report_index, 0);
    assert_eq!(email_index, 1);

    let ordered = sorted_by_deadline(store.all());
    let names: Vec<&str> = ordered.iter().map(|task| task.name.as_str()).collect();
    assert_eq!(names, ["Email", "Report"]);

    // The user picks the second displayed row ("Report"); its stable ID
    // resolves back to insertion index 0 without any value matching.
    let report_id = ordered[1].id;
    store.complete_by_id(report_id).unwrap();
    assert!(store.all()[0].completed);
    assert!(!store.all()[1].completed);

    let stats = productivity_stats(store.all()).unwrap();
    assert_eq!(stats.completed_count, 1);
    assert_eq!(stats.pending_count, 1);
    assert_eq!(stats.completion_rate_pct, 50.0);
    assert_eq!(stats.pending_rate_pct, 50.0);
}
