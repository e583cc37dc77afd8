//! Task collection manager - the single source of truth for the task list.
//!
//! Owns the authoritative in-memory collection and is the only component
//! permitted to mutate tasks. Derived views (filtering, sorting, counts)
//! are computed on read and never change storage order.
//!
//! Persistence is an explicit step: mutations report whether they changed
//! anything, and the caller invokes `persist()` afterwards. This keeps the
//! contract testable without a UI.

use std::cmp::Ordering;

use crate::store::TaskStore;
use crate::task::{Task, TaskDraft, TaskId, TaskStatus};
use crate::{dlog, dlog_debug, Result};

/// Display-only predicate narrowing which tasks are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Pending,
    InProgress,
    Completed,
}

impl Filter {
    /// Cycle through filter values (the TUI's filter selector).
    pub fn next(&self) -> Self {
        match self {
            Filter::All => Filter::Pending,
            Filter::Pending => Filter::InProgress,
            Filter::InProgress => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Pending => "pending",
            Filter::InProgress => "in progress",
            Filter::Completed => "completed",
        }
    }

    fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => task.status == TaskStatus::Pending,
            Filter::InProgress => task.status == TaskStatus::InProgress,
            Filter::Completed => task.status == TaskStatus::Completed,
        }
    }
}

/// Summary counts over the full collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Owner of the in-memory task collection.
pub struct TaskManager {
    tasks: Vec<Task>,
    store: TaskStore,
}

impl TaskManager {
    /// Create a manager over a store, loading any previously persisted tasks.
    pub fn load(store: TaskStore) -> Self {
        let tasks = store.load();
        dlog!("TaskManager loaded {} tasks", tasks.len());
        Self { tasks, store }
    }

    /// The full collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Create a task from form data and append it to the collection.
    ///
    /// Rejects drafts whose title is empty after trimming: returns `None`
    /// and leaves the collection unchanged. On success the new task's id
    /// is returned and the caller should persist.
    pub fn create(&mut self, mut draft: TaskDraft) -> Option<TaskId> {
        let title = draft.title.trim();
        if title.is_empty() {
            dlog_debug!("create rejected: empty title");
            return None;
        }
        draft.title = title.to_string();

        let task = Task::new(draft);
        let id = task.id;
        dlog!("Task created: id={} title={}", id.short(), task.title);
        self.tasks.push(task);
        Some(id)
    }

    /// Replace the status of the task with the given id.
    ///
    /// Unknown ids are silently ignored. Returns whether anything changed
    /// (the caller persists only on `true`).
    pub fn set_status(&mut self, id: TaskId, status: TaskStatus) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                dlog_debug!("set_status id={} {} -> {}", id.short(), task.status, status);
                task.status = status;
                true
            }
            None => {
                dlog_debug!("set_status id={} not found, ignoring", id.short());
                false
            }
        }
    }

    /// Remove the task with the given id from the collection.
    ///
    /// Unknown ids are a no-op. Returns whether a task was removed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(pos) => {
                let task = self.tasks.remove(pos);
                dlog!("Task deleted: id={} title={}", id.short(), task.title);
                true
            }
            None => {
                dlog_debug!("delete id={} not found, ignoring", id.short());
                false
            }
        }
    }

    /// Tasks matching the filter, in storage order.
    pub fn filtered(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Tasks matching the filter in display order (see [`compare_display`]).
    pub fn filtered_sorted(&self, filter: Filter) -> Vec<&Task> {
        let mut tasks = self.filtered(filter);
        tasks.sort_by(|a, b| compare_display(a, b));
        tasks
    }

    /// Total and per-status counts, computed over the full collection
    /// regardless of the active filter.
    pub fn counts(&self) -> TaskCounts {
        let mut counts = TaskCounts {
            total: self.tasks.len(),
            ..Default::default()
        };
        for task in &self.tasks {
            match task.status {
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed => counts.completed += 1,
            }
        }
        counts
    }

    /// Write the full collection to the store (full-replace semantics).
    pub fn persist(&self) -> Result<()> {
        self.store.save(&self.tasks)
    }
}

/// Display-time ordering for the task list.
///
/// Three-level comparison, in this exact precedence:
/// 1. priority descending (high > medium > low)
/// 2. priorities equal and both tasks have a due date: ascending due date
/// 3. otherwise: descending creation time (newest first)
///
/// Rule 3 fires whenever at least one task lacks a due date - a dated task
/// compared against an undated one falls through to the creation-time
/// tie-break instead of being favored for having a date. Intentional,
/// do not "fix" to sort by due-date presence.
pub fn compare_display(a: &Task, b: &Task) -> Ordering {
    let by_priority = b.priority.rank().cmp(&a.priority.rank());
    if by_priority != Ordering::Equal {
        return by_priority;
    }

    if let (Some(a_due), Some(b_due)) = (a.due_date, b.due_date) {
        return a_due.cmp(&b_due);
    }

    b.created_at.cmp(&a.created_at)
}
