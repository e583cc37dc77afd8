//! Create / status-change / delete flows driven end-to-end by key events.

use crossterm::event::KeyCode;

use duly::tea::{Command, InputKind, Mode};
use duly::{Priority, TaskStatus};

use crate::fixtures::{draft, press, run_commands, type_str, TestEnv};

#[test]
fn create_task_via_form_persists_across_reload() {
    let env = TestEnv::new();
    let mut model = env.model();

    press(&mut model, KeyCode::Char('n'));
    type_str(&mut model, "water the plants");
    press(&mut model, KeyCode::Tab);
    type_str(&mut model, "the ones in the kitchen");
    press(&mut model, KeyCode::Tab);
    type_str(&mut model, "high");
    press(&mut model, KeyCode::Tab);
    type_str(&mut model, "2025-09-01");
    let cmds = press(&mut model, KeyCode::Enter);
    run_commands(&mut model, cmds);

    // A brand new manager over the same file sees the task
    let reloaded = env.manager();
    assert_eq!(reloaded.tasks().len(), 1);
    let task = &reloaded.tasks()[0];
    assert_eq!(task.title, "water the plants");
    assert_eq!(task.description, "the ones in the kitchen");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.due_date, Some(crate::fixtures::date(2025, 9, 1)));
}

#[test]
fn empty_title_submit_keeps_form_open_and_writes_nothing() {
    let env = TestEnv::new();
    let mut model = env.model();

    press(&mut model, KeyCode::Char('n'));
    type_str(&mut model, "   ");
    let cmds = press(&mut model, KeyCode::Enter);

    assert!(cmds.is_empty());
    assert_eq!(model.mode, Mode::Input(InputKind::Title));
    assert!(!env.state_path.exists(), "Nothing was persisted");
}

#[test]
fn status_change_via_keys_persists() {
    let env = TestEnv::new();
    let mut model = env.model();
    model
        .manager
        .create(draft("task", Priority::Medium, None))
        .unwrap();
    model.manager.persist().unwrap();

    let cmds = press(&mut model, KeyCode::Char('2'));
    assert_eq!(cmds, vec![Command::SaveState]);
    run_commands(&mut model, cmds);

    let reloaded = env.manager();
    assert_eq!(reloaded.tasks()[0].status, TaskStatus::InProgress);
}

#[test]
fn status_cycle_walks_the_lifecycle() {
    let env = TestEnv::new();
    let mut model = env.model();
    model
        .manager
        .create(draft("task", Priority::Medium, None))
        .unwrap();

    for expected in [
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Pending,
    ] {
        let cmds = press(&mut model, KeyCode::Char('s'));
        run_commands(&mut model, cmds);
        assert_eq!(model.manager.tasks()[0].status, expected);
    }
}

#[test]
fn delete_with_confirmation_removes_only_target() {
    let env = TestEnv::new();
    let mut model = env.model();
    model
        .manager
        .create(draft("keep me", Priority::Medium, None))
        .unwrap();
    model
        .manager
        .create(draft("delete me", Priority::Medium, None))
        .unwrap();
    model.manager.persist().unwrap();

    // Newest first in the display order; select "delete me" at the top
    model.selected = 0;
    press(&mut model, KeyCode::Char('d'));
    assert_eq!(model.mode, Mode::Input(InputKind::Confirm));
    let cmds = press(&mut model, KeyCode::Enter);
    run_commands(&mut model, cmds);

    let reloaded = env.manager();
    assert_eq!(reloaded.tasks().len(), 1);
    assert_eq!(reloaded.tasks()[0].title, "keep me");
}

#[test]
fn cancelled_delete_changes_nothing() {
    let env = TestEnv::new();
    let mut model = env.model();
    model
        .manager
        .create(draft("task", Priority::Medium, None))
        .unwrap();
    model.manager.persist().unwrap();
    let before = std::fs::read_to_string(&env.state_path).unwrap();

    press(&mut model, KeyCode::Char('d'));
    press(&mut model, KeyCode::Esc);

    assert_eq!(model.manager.tasks().len(), 1);
    let after = std::fs::read_to_string(&env.state_path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn quit_is_reported_to_the_runtime() {
    let env = TestEnv::new();
    let mut model = env.model();

    let cmds = press(&mut model, KeyCode::Char('q'));
    assert!(run_commands(&mut model, cmds));
}
