//! Drawing smoke tests against an off-screen terminal buffer.
//!
//! These assert on the text content of the rendered frame, not on styling,
//! so they stay stable across palette tweaks.

use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use duly::render::RenderState;
use duly::ui;
use duly::{Filter, Priority, TaskStatus};

use crate::fixtures::{date, draft, press, type_str, TestEnv};

fn render(state: &RenderState) -> String {
    let backend = TestBackend::new(100, 20);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|frame| ui::draw(frame, state)).expect("draw");
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.cell((x, y)).expect("cell in area").symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn empty_list_shows_getting_started_hint() {
    let env = TestEnv::new();
    let model = env.model();

    let screen = render(&model.snapshot_at(date(2026, 1, 1)));
    assert!(screen.contains("No tasks yet. Press 'n' to create your first task."));
}

#[test]
fn empty_filtered_list_names_the_filter() {
    let env = TestEnv::new();
    let mut model = env.model();
    model.filter = Filter::Completed;

    let screen = render(&model.snapshot_at(date(2026, 1, 1)));
    assert!(screen.contains("No completed tasks."));
}

#[test]
fn task_rows_show_status_priority_and_dates() {
    let env = TestEnv::new();
    let mut model = env.model();
    let id = model
        .manager
        .create(draft("ship the release", Priority::High, Some(date(2025, 12, 24))))
        .unwrap();
    model.manager.set_status(id, TaskStatus::InProgress);

    let screen = render(&model.snapshot_at(date(2025, 12, 1)));
    assert!(screen.contains("STATUS"));
    assert!(screen.contains("TITLE"));
    assert!(screen.contains("ship the release"));
    assert!(screen.contains("in-progress"));
    assert!(screen.contains("high"));
    assert!(screen.contains("2025-12-24"));
}

#[test]
fn overdue_tasks_carry_a_marker() {
    let env = TestEnv::new();
    let mut model = env.model();
    model
        .manager
        .create(draft("late", Priority::Medium, Some(date(2025, 6, 1))))
        .unwrap();

    let screen = render(&model.snapshot_at(date(2025, 6, 2)));
    assert!(screen.contains("2025-06-01 !"));
}

#[test]
fn stats_bar_shows_counts_and_filter() {
    let env = TestEnv::new();
    let mut model = env.model();
    let done = model
        .manager
        .create(draft("done", Priority::Medium, None))
        .unwrap();
    model
        .manager
        .create(draft("open", Priority::Medium, None))
        .unwrap();
    model.manager.set_status(done, TaskStatus::Completed);
    model.filter = Filter::Pending;

    let screen = render(&model.snapshot_at(date(2026, 1, 1)));
    assert!(screen.contains("Total 2"));
    assert!(screen.contains("Pending 1"));
    assert!(screen.contains("Completed 1"));
    assert!(screen.contains("Filter: pending"));
}

#[test]
fn open_form_renders_fields_and_hints() {
    let env = TestEnv::new();
    let mut model = env.model();
    press(&mut model, KeyCode::Char('n'));
    type_str(&mut model, "buy milk");

    let screen = render(&model.snapshot_at(date(2026, 1, 1)));
    assert!(screen.contains("New Task"));
    assert!(screen.contains("buy milk"));
    assert!(screen.contains("low / medium / high (default medium)"));
    assert!(screen.contains("YYYY-MM-DD"));
}

#[test]
fn delete_confirmation_names_the_task() {
    let env = TestEnv::new();
    let mut model = env.model();
    model
        .manager
        .create(draft("old note", Priority::Medium, None))
        .unwrap();
    press(&mut model, KeyCode::Char('d'));

    let screen = render(&model.snapshot_at(date(2026, 1, 1)));
    assert!(screen.contains("Delete 'old note'?"));
}

#[test]
fn error_notification_overlays_the_bottom_line() {
    let env = TestEnv::new();
    let mut model = env.model();
    press(&mut model, KeyCode::Char('n'));
    // Submitting an empty title produces an error notification
    press(&mut model, KeyCode::Enter);

    let screen = render(&model.snapshot_at(date(2026, 1, 1)));
    assert!(screen.contains("Error: Title is required"));
}
