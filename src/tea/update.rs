//! Update function for the TEA (The Elm Architecture) pattern.
//!
//! Takes a model and a message, mutates the model, and returns a list of
//! commands to execute. All mutation of the task collection goes through
//! the model's `TaskManager`; persistence happens only via the returned
//! `Command::SaveState`.

use crossterm::event::{KeyCode, KeyEvent};

use crate::task::{TaskDraft, TaskStatus};
use crate::{dlog_debug, dlog_warn};

use super::command::Command;
use super::message::Message;
use super::model::{InputKind, Mode, Model, Notification, NotificationLevel};

/// Helper to set an error notification and mark model as dirty.
fn set_error(model: &mut Model, message: String) {
    dlog_warn!("UI Error: {}", message);
    model.notification = Some(Notification {
        level: NotificationLevel::Error,
        message,
    });
    model.dirty = true;
}

/// Update function: Model + Message → Commands
///
/// 1. Takes the current model and an input message
/// 2. Mutates the model state (and sets dirty flag)
/// 3. Returns a list of commands (side effects) to execute
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            model.notification = None; // Clear notification on any key press
            model.dirty = true; // Keyboard input always triggers render
            match model.mode {
                Mode::List => update_list_mode(model, key, &mut cmds),
                Mode::Input(kind) => update_input_mode(model, key, kind, &mut cmds),
            }
        }

        Message::Resize(_, _) => {
            model.dirty = true; // Resize triggers re-render
        }
    }

    cmds
}

fn update_list_mode(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let len = model.visible().len();
            if len > 0 {
                model.selected = (model.selected + 1) % len;
            }
        }

        KeyCode::Char('k') | KeyCode::Up => {
            let len = model.visible().len();
            if len > 0 {
                model.selected = model.selected.checked_sub(1).unwrap_or(len - 1);
            }
        }

        KeyCode::Char('n') => {
            // Open the creation form on its first field
            model.clear_form();
            model.mode = Mode::Input(InputKind::Title);
        }

        KeyCode::Char('f') => {
            model.filter = model.filter.next();
            model.selected = 0;
            dlog_debug!("Filter changed: {}", model.filter.label());
        }

        KeyCode::Char('s') => {
            // Cycle the selected task's status
            if let Some(id) = model.selected_task_id() {
                let current = model.manager.get(id).map(|t| t.status);
                if let Some(status) = current {
                    set_status(model, cmds, status.next());
                }
            }
        }

        KeyCode::Char('1') => set_status(model, cmds, TaskStatus::Pending),
        KeyCode::Char('2') => set_status(model, cmds, TaskStatus::InProgress),
        KeyCode::Char('3') => set_status(model, cmds, TaskStatus::Completed),

        KeyCode::Char('d') => {
            if let Some(id) = model.selected_task_id() {
                if model.config.confirm_delete {
                    model.pending_delete = Some(id);
                    model.mode = Mode::Input(InputKind::Confirm);
                    model.input_buffer.clear();
                } else {
                    model.pending_delete = Some(id);
                    delete_task(model, cmds);
                }
            }
        }

        KeyCode::Char('q') | KeyCode::Esc => {
            cmds.push(Command::Quit);
        }

        KeyCode::Char('?') => {
            model.show_keymap = !model.show_keymap;
        }

        _ => {}
    }
}

fn update_input_mode(model: &mut Model, key: KeyEvent, kind: InputKind, cmds: &mut Vec<Command>) {
    match key.code {
        KeyCode::Enter => {
            store_current_field(model, kind);
            model.input_buffer.clear();

            match kind {
                InputKind::Confirm => {
                    model.mode = Mode::List;
                    delete_task(model, cmds);
                }
                _ => submit_form(model, cmds),
            }
        }

        KeyCode::Tab => {
            // Cycle to next input field (store current, load next)
            if let Some(next_kind) = kind.next() {
                store_current_field(model, kind);
                model.mode = Mode::Input(next_kind);
                load_field_buffer(model, next_kind);
            }
        }

        KeyCode::Esc => {
            // Close the form / cancel the confirmation
            model.input_buffer.clear();
            model.pending_delete = None;
            model.clear_form();
            model.mode = Mode::List;
        }

        KeyCode::Backspace => {
            model.input_buffer.pop();
        }

        KeyCode::Char(c) => {
            model.input_buffer.push(c);
        }

        _ => {}
    }
}

/// Submit the creation form with whatever field values it holds.
///
/// An empty (or whitespace-only) title rejects the submission: the form
/// stays open on the title field and nothing is created or persisted.
fn submit_form(model: &mut Model, cmds: &mut Vec<Command>) {
    let draft = TaskDraft {
        title: model.form_title.clone(),
        description: model.form_description.clone(),
        priority: model.form_priority_value(),
        due_date: model.form_due_date_value(),
    };

    match model.manager.create(draft) {
        Some(id) => {
            model.clear_form();
            model.mode = Mode::List;

            // Select the new task in its display position
            if let Some(pos) = model.visible().iter().position(|t| t.id == id) {
                model.selected = pos;
            }
            cmds.push(Command::SaveState);
        }
        None => {
            // No-op by design: keep the form open for correction
            model.mode = Mode::Input(InputKind::Title);
            load_field_buffer(model, InputKind::Title);
            set_error(model, "Title is required".to_string());
        }
    }
}

fn set_status(model: &mut Model, cmds: &mut Vec<Command>, status: TaskStatus) {
    if let Some(id) = model.selected_task_id() {
        if model.manager.set_status(id, status) {
            // Status changes can move the task out of the filtered view
            model.clamp_selection();
            cmds.push(Command::SaveState);
        }
    }
}

fn delete_task(model: &mut Model, cmds: &mut Vec<Command>) {
    if let Some(id) = model.pending_delete.take() {
        if model.manager.delete(id) {
            model.clamp_selection();
            cmds.push(Command::SaveState);
        }
    }
}

/// Store current input buffer into the appropriate form field.
fn store_current_field(model: &mut Model, kind: InputKind) {
    let value = std::mem::take(&mut model.input_buffer);
    match kind {
        InputKind::Title => model.form_title = value,
        InputKind::Description => model.form_description = value,
        InputKind::Priority => model.form_priority = value,
        InputKind::DueDate => model.form_due_date = value,
        InputKind::Confirm => {}
    }
}

/// Load the appropriate form field into the input buffer.
fn load_field_buffer(model: &mut Model, kind: InputKind) {
    model.input_buffer = match kind {
        InputKind::Title => model.form_title.clone(),
        InputKind::Description => model.form_description.clone(),
        InputKind::Priority => model.form_priority.clone(),
        InputKind::DueDate => model.form_due_date.clone(),
        InputKind::Confirm => String::new(),
    };
}
