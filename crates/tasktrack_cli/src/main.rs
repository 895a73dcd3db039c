//! Interactive task manager shell.
//!
//! # Responsibility
//! - Drive the menu loop and map selections onto core operations.
//! - Own every prompt and all rendering; the core returns structured data
//!   only.
//!
//! # Invariants
//! - No user input kills the process; every failure is reported and the
//!   loop continues.
//! - Exit happens only through the explicit save-and-exit action.

mod render;

use std::fs::File;
use std::io::{self, Write};
use tasktrack_core::{
    sorted_by_deadline, write_export, JsonSnapshotFile, SnapshotError, SnapshotGateway, TaskStore,
};

const SNAPSHOT_FILE: &str = "tasks.json";
const EXPORT_FILE: &str = "tasks_export.txt";

fn main() {
    setup_logging();
    log::info!(
        "event=shell_start module=cli status=ok core_version={}",
        tasktrack_core::core_version()
    );

    let gateway = JsonSnapshotFile::new(SNAPSHOT_FILE);
    let mut store = TaskStore::new();

    if prompt_yes_no("Do you want to load old tasks?") {
        match gateway.load() {
            Ok(tasks) => {
                store = TaskStore::from_tasks(tasks);
                println!("[SUCCESS] Old tasks loaded.");
            }
            Err(SnapshotError::NotFound) => println!("[INFO] No saved tasks found."),
            Err(err) => println!("[ERROR] Could not load tasks: {err}"),
        }
    }

    loop {
        render::menu();
        let Some(choice) = read_line("Enter your choice: ") else {
            break;
        };
        match choice.trim() {
            "1" => add_task(&mut store),
            "2" => complete_task(&mut store),
            "3" => render::task_table(&store),
            "4" => render::daily_summary(&store),
            "5" => render::productivity(&store),
            "6" => {
                if prompt_yes_no("Do you want to save tasks before exiting?") {
                    save_tasks(&gateway, &store);
                }
                println!("Thank you for using the Task Manager. Goodbye!");
                break;
            }
            "7" => export_tasks(&store),
            _ => println!("[ERROR] Invalid choice, please try again."),
        }
    }
}

fn add_task(store: &mut TaskStore) {
    let Some(name) = read_line("Enter task name: ") else {
        return;
    };
    let Some(date) = read_line("Enter task date (DD-MM-YYYY): ") else {
        return;
    };
    let Some(time) = read_line("Enter task time (HH:MM): ") else {
        return;
    };

    match store.add(name.trim(), date.trim(), time.trim()) {
        Ok(index) => {
            let task = &store.all()[index];
            println!(
                "[SUCCESS] Task Added: {} | Due: {} | Time: {}",
                task.name,
                task.deadline.format("%d-%m-%Y"),
                task.deadline.format("%H:%M")
            );
        }
        Err(err) => println!("[ERROR] {err}"),
    }
}

fn complete_task(store: &mut TaskStore) {
    render::task_table(store);
    if store.is_empty() {
        return;
    }

    let Some(raw) = read_line("Enter task number to mark as completed: ") else {
        return;
    };
    let Ok(display_number) = raw.trim().parse::<usize>() else {
        println!("[ERROR] Please enter a valid number for the task index.");
        return;
    };

    // Displayed numbers are 1-based positions in the sorted listing; the
    // entry's stable ID addresses the store unambiguously even when two
    // tasks share a name and deadline.
    let id = {
        let ordered = sorted_by_deadline(store.all());
        match display_number.checked_sub(1).and_then(|i| ordered.get(i)) {
            Some(task) => task.id,
            None => {
                println!("[ERROR] Please enter a valid number for the task index.");
                return;
            }
        }
    };

    match store.complete_by_id(id) {
        Ok(task) => println!("[SUCCESS] Task completed: {}", task.name),
        Err(err) => println!("[ERROR] {err}"),
    }
}

fn save_tasks(gateway: &JsonSnapshotFile, store: &TaskStore) {
    match gateway.save(store.all()) {
        Ok(()) => println!("[SUCCESS] Tasks saved."),
        Err(err) => println!("[ERROR] Could not save tasks: {err}"),
    }
}

fn export_tasks(store: &TaskStore) {
    if !prompt_yes_no("Do you want to export your tasks?") {
        return;
    }
    let result = File::create(EXPORT_FILE).and_then(|mut file| write_export(store.all(), &mut file));
    match result {
        Ok(()) => println!("[SUCCESS] Tasks exported."),
        Err(err) => println!("[ERROR] Could not export tasks: {err}"),
    }
}

fn prompt_yes_no(question: &str) -> bool {
    loop {
        let Some(response) = read_line(&format!("{question} (Yes/No): ")) else {
            return false;
        };
        match response.trim().to_ascii_lowercase().as_str() {
            "yes" => return true,
            "no" => return false,
            _ => println!("[ERROR] Please answer with 'Yes' or 'No'."),
        }
    }
}

/// Reads one line from stdin. Returns `None` on EOF or a read failure, so
/// callers can wind down instead of spinning on a closed input.
fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
    }
}

fn setup_logging() {
    let log_dir = std::env::temp_dir().join("tasktrack").join("logs");
    let Some(dir) = log_dir.to_str() else {
        return;
    };
    if let Err(err) = tasktrack_core::init_logging(tasktrack_core::default_log_level(), dir) {
        eprintln!("[WARN] Logging disabled: {err}");
    }
}
