//! Filtering, sorting, counts, and the overdue flag, observed through the
//! snapshots the UI consumes.

use chrono::Duration;

use duly::{Filter, Priority, TaskStatus};

use crate::fixtures::{date, draft, TestEnv};

#[test]
fn display_order_is_priority_then_due_date() {
    let env = TestEnv::new();
    let mut model = env.model();
    model
        .manager
        .create(draft("A", Priority::High, Some(date(2025, 1, 10))))
        .unwrap();
    model
        .manager
        .create(draft("B", Priority::High, Some(date(2025, 1, 5))))
        .unwrap();
    model
        .manager
        .create(draft("C", Priority::Medium, None))
        .unwrap();

    let state = model.snapshot_at(date(2026, 1, 1));
    let titles: Vec<&str> = state.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["B", "A", "C"]);
}

#[test]
fn mixed_due_date_presence_sorts_by_creation_time() {
    // The dated task is created first (older) with an early due date. If
    // due dates were consulted against undated tasks it would sort first;
    // instead the pair falls through to newest-first.
    let env = TestEnv::new();
    let mut model = env.model();
    model
        .manager
        .create(draft("dated", Priority::Low, Some(date(2020, 1, 1))))
        .unwrap();
    std::thread::sleep(Duration::milliseconds(2).to_std().unwrap());
    model
        .manager
        .create(draft("undated", Priority::Low, None))
        .unwrap();

    let state = model.snapshot_at(date(2026, 1, 1));
    let titles: Vec<&str> = state.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["undated", "dated"]);
}

#[test]
fn filtered_views_and_counts_agree() {
    let env = TestEnv::new();
    let mut model = env.model();
    model
        .manager
        .create(draft("p1", Priority::Medium, None))
        .unwrap();
    model
        .manager
        .create(draft("p2", Priority::Medium, None))
        .unwrap();
    let ip = model
        .manager
        .create(draft("ip", Priority::Medium, None))
        .unwrap();
    let done = model
        .manager
        .create(draft("done", Priority::Medium, None))
        .unwrap();
    model.manager.set_status(ip, TaskStatus::InProgress);
    model.manager.set_status(done, TaskStatus::Completed);

    model.filter = Filter::InProgress;
    let state = model.snapshot_at(date(2026, 1, 1));
    assert_eq!(state.tasks.len(), 1);
    assert_eq!(state.tasks[0].title, "ip");

    // Counts ignore the active filter
    assert_eq!(state.counts.total, 4);
    assert_eq!(state.counts.pending, 2);
    assert_eq!(state.counts.in_progress, 1);
    assert_eq!(state.counts.completed, 1);
}

#[test]
fn filtering_is_read_only() {
    let env = TestEnv::new();
    let mut model = env.model();
    model
        .manager
        .create(draft("z", Priority::Low, None))
        .unwrap();
    model
        .manager
        .create(draft("a", Priority::High, None))
        .unwrap();

    let first = model.snapshot_at(date(2026, 1, 1));
    let second = model.snapshot_at(date(2026, 1, 1));
    let titles = |s: &duly::render::RenderState| -> Vec<String> {
        s.tasks.iter().map(|t| t.title.clone()).collect()
    };
    assert_eq!(titles(&first), titles(&second));

    // Storage order untouched by display sorting
    assert_eq!(model.manager.tasks()[0].title, "z");
    assert_eq!(model.manager.tasks()[1].title, "a");
}

#[test]
fn overdue_flag_tracks_date_and_status() {
    let env = TestEnv::new();
    let mut model = env.model();
    let id = model
        .manager
        .create(draft("late", Priority::Medium, Some(date(2025, 6, 1))))
        .unwrap();

    // Due strictly before today: overdue
    assert!(model.snapshot_at(date(2025, 6, 2)).tasks[0].overdue);
    // Due today: not overdue
    assert!(!model.snapshot_at(date(2025, 6, 1)).tasks[0].overdue);
    // Completed: never overdue
    model.manager.set_status(id, TaskStatus::Completed);
    assert!(!model.snapshot_at(date(2025, 6, 2)).tasks[0].overdue);
}
