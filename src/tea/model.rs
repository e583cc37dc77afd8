//! Model for the TEA (The Elm Architecture) pattern.
//!
//! The Model holds the task collection manager (the single writer over
//! the task list) plus all UI state. No channels, no handles, no runtime
//! infrastructure.

use chrono::{Local, NaiveDate};

use crate::config::Config;
use crate::manager::{Filter, TaskManager};
use crate::render::{FormView, RenderState, TaskView};
use crate::task::{Priority, Task, TaskId};

/// Level of a notification message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Error notification - displayed in red with "Error:" prefix
    Error,
    /// Informational notification - displayed in green
    Info,
}

/// A notification message to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The severity level of the notification
    pub level: NotificationLevel,
    /// The notification message text
    pub message: String,
}

/// Application UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    List,
    Input(InputKind),
}

/// Fields of the creation form, plus the delete confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Title,
    Description,
    Priority,
    DueDate,
    Confirm,
}

impl InputKind {
    pub fn label(&self) -> &'static str {
        match self {
            InputKind::Title => "Title",
            InputKind::Description => "Description",
            InputKind::Priority => "Priority",
            InputKind::DueDate => "Due date",
            InputKind::Confirm => "Delete?",
        }
    }

    /// Cycle to next input field (Tab behavior).
    /// Returns None for Confirm since it doesn't cycle.
    pub fn next(&self) -> Option<InputKind> {
        match self {
            InputKind::Title => Some(InputKind::Description),
            InputKind::Description => Some(InputKind::Priority),
            InputKind::Priority => Some(InputKind::DueDate),
            InputKind::DueDate => Some(InputKind::Title),
            InputKind::Confirm => None,
        }
    }
}

/// Application state - the single source of truth.
pub struct Model {
    // Core state
    pub manager: TaskManager,
    pub filter: Filter,
    pub selected: usize,
    pub mode: Mode,

    // Creation form state (free text; priority and due date are parsed
    // leniently on submit)
    pub input_buffer: String,
    pub form_title: String,
    pub form_description: String,
    pub form_priority: String,
    pub form_due_date: String,

    pub pending_delete: Option<TaskId>,
    pub notification: Option<Notification>,

    // UI toggle state
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,

    // Config (immutable after init)
    pub config: Config,
}

impl Model {
    /// Create a new Model over a loaded task manager.
    pub fn new(manager: TaskManager, config: Config) -> Self {
        Self {
            manager,
            filter: Filter::default(),
            selected: 0,
            mode: Mode::default(),
            input_buffer: String::new(),
            form_title: String::new(),
            form_description: String::new(),
            form_priority: String::new(),
            form_due_date: String::new(),
            pending_delete: None,
            notification: None,
            show_keymap: false,
            dirty: true,
            config,
        }
    }

    /// Tasks visible under the active filter, in display order.
    pub fn visible(&self) -> Vec<&Task> {
        self.manager.filtered_sorted(self.filter)
    }

    /// Id of the currently selected task, if any.
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.visible().get(self.selected).map(|t| t.id)
    }

    /// Keep the selection within the visible list after mutations or
    /// filter changes.
    pub fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Reset the creation form to its defaults (priority select defaults
    /// to medium, represented by the empty string).
    pub fn clear_form(&mut self) {
        self.input_buffer.clear();
        self.form_title.clear();
        self.form_description.clear();
        self.form_priority.clear();
        self.form_due_date.clear();
    }

    /// Priority the form currently resolves to (lenient parse, default medium).
    pub fn form_priority_value(&self) -> Priority {
        self.form_priority.parse().unwrap_or_default()
    }

    /// Due date the form currently resolves to, if the text parses.
    pub fn form_due_date_value(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.form_due_date.trim(), "%Y-%m-%d").ok()
    }

    /// Create an immutable snapshot for rendering.
    ///
    /// The snapshot carries the filtered+sorted view, the per-status
    /// counts over the full collection, and the presentational overdue
    /// flag computed against today's date.
    pub fn snapshot(&self) -> RenderState {
        self.snapshot_at(Local::now().date_naive())
    }

    /// Snapshot with an explicit "today" (separated out for tests).
    pub fn snapshot_at(&self, today: NaiveDate) -> RenderState {
        let tasks: Vec<TaskView> = self
            .visible()
            .iter()
            .map(|t| TaskView {
                id: t.id,
                title: t.title.clone(),
                description: t.description.clone(),
                priority: t.priority,
                status: t.status,
                due_date: t.due_date,
                created_at: t.created_at,
                overdue: t.is_overdue(today),
            })
            .collect();

        RenderState {
            tasks,
            counts: self.manager.counts(),
            filter: self.filter,
            selected: self.selected,
            mode: self.mode,
            input_buffer: self.input_buffer.clone(),
            form: FormView {
                title: self.form_title.clone(),
                description: self.form_description.clone(),
                priority: self.form_priority.clone(),
                due_date: self.form_due_date.clone(),
            },
            notification: self.notification.clone(),
            show_keymap: self.show_keymap,
        }
    }
}
