//! Immutable view snapshots consumed by the UI.
//!
//! `ui::draw` renders from a `RenderState` and never touches the model,
//! keeping presentation strictly read-only over the task collection.

use chrono::{DateTime, NaiveDate, Utc};

use crate::manager::{Filter, TaskCounts};
use crate::task::{Priority, TaskId, TaskStatus};
use crate::tea::{Mode, Notification};

/// View of one task row, with the presentational overdue flag baked in.
#[derive(Debug, Clone)]
pub struct TaskView {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    /// Non-completed and due strictly before today. Display only.
    pub overdue: bool,
}

/// Current contents of the creation form fields, for redraw.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: String,
}

#[derive(Debug, Clone)]
pub struct RenderState {
    /// Filtered + sorted tasks, in display order.
    pub tasks: Vec<TaskView>,
    /// Counts over the full collection (not the filtered view).
    pub counts: TaskCounts,
    pub filter: Filter,
    pub selected: usize,
    pub mode: Mode,
    pub input_buffer: String,
    pub form: FormView,
    pub notification: Option<Notification>,
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            counts: TaskCounts::default(),
            filter: Filter::All,
            selected: 0,
            mode: Mode::List,
            input_buffer: String::new(),
            form: FormView::default(),
            notification: None,
            show_keymap: false,
        }
    }
}
