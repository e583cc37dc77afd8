//! The Elm Architecture (TEA) implementation for the duly TUI.
//!
//! This module provides a clean separation of concerns:
//! - `Model`: Application state (task manager + UI state)
//! - `Message`: Inputs to the update function
//! - `Command`: Outputs (side effects) from the update function
//! - `update`: Function that transforms state

pub mod command;
pub mod message;
pub mod model;
pub mod update;

pub use command::Command;
pub use message::Message;
pub use model::{InputKind, Mode, Model, Notification, NotificationLevel};
pub use update::update;
