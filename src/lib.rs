pub mod app;
pub mod config;
pub mod error;
pub mod log;
pub mod manager;
pub mod render;
pub mod store;
pub mod task;
pub mod tea;
pub mod ui;

pub use error::{Error, Result};
pub use manager::{Filter, TaskCounts, TaskManager};
pub use store::TaskStore;
pub use task::{Priority, Task, TaskDraft, TaskId, TaskStatus};
