use chrono::{NaiveDate, NaiveDateTime};
use tasktrack_core::{
    export_lines, write_export, JsonSnapshotFile, SnapshotError, SnapshotGateway, Task,
};
use tempfile::tempdir;

fn dt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn sample_tasks() -> Vec<Task> {
    let mut done = Task::new("Email", dt(2099, 1, 1, 9, 0));
    done.mark_completed();
    vec![Task::new("Report", dt(2099, 1, 1, 10, 0)), done]
}

#[test]
fn save_then_load_round_trips_every_field() {
    let dir = tempdir().unwrap();
    let gateway = JsonSnapshotFile::new(dir.path().join("tasks.json"));
    let tasks = sample_tasks();

    gateway.save(&tasks).unwrap();
    let loaded = gateway.load().unwrap();

    assert_eq!(loaded, tasks);
}

#[test]
fn missing_snapshot_is_not_found() {
    let dir = tempdir().unwrap();
    let gateway = JsonSnapshotFile::new(dir.path().join("absent.json"));

    let err = gateway.load().unwrap_err();
    assert!(matches!(err, SnapshotError::NotFound));
}

#[test]
fn undecodable_snapshot_is_corrupt_not_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let gateway = JsonSnapshotFile::new(path);
    let err = gateway.load().unwrap_err();
    assert!(matches!(err, SnapshotError::Corrupt(_)));
}

#[test]
fn export_renders_one_line_per_task() {
    let tasks = sample_tasks();

    let text = export_lines(&tasks);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "Report | Due: 01-01-2099 10:00 | Pending",
            "Email | Due: 01-01-2099 09:00 | Completed",
        ]
    );

    let mut sink = Vec::new();
    write_export(&tasks, &mut sink).unwrap();
    assert_eq!(sink, text.as_bytes());
}
