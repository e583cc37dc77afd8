//! Application runtime: the synchronous event loop.
//!
//! One thread, one actor. Each keyboard event runs to completion
//! (update → commands → persistence) before the next event is read, so
//! no interleaving over the in-memory collection is possible.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::config::Config;
use crate::manager::TaskManager;
use crate::store::TaskStore;
use crate::tea::{update, Command, Message, Model, Notification, NotificationLevel};
use crate::ui;
use crate::{dlog, dlog_debug, dlog_error, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct App;

impl App {
    /// Load persisted state and run the event loop until quit.
    pub fn run<B: Backend>(terminal: &mut Terminal<B>, config: Config) -> Result<()> {
        let store = TaskStore::open_default(&config)?;
        let manager = TaskManager::load(store);
        dlog!("App starting with {} tasks", manager.tasks().len());

        let mut model = Model::new(manager, config);
        Self::event_loop(terminal, &mut model)
    }

    fn event_loop<B: Backend>(terminal: &mut Terminal<B>, model: &mut Model) -> Result<()> {
        loop {
            if model.dirty {
                let snapshot = model.snapshot();
                terminal.draw(|frame| ui::draw(frame, &snapshot))?;
                model.dirty = false;
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            let msg = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => Message::Key(key),
                Event::Resize(w, h) => Message::Resize(w, h),
                _ => continue,
            };

            for cmd in update(model, msg) {
                if execute_command(model, cmd) {
                    // Final save so a quit never loses state
                    persist(model);
                    return Ok(());
                }
            }
        }
    }
}

/// Execute a side effect emitted by the update function.
/// Returns true when the app should quit.
fn execute_command(model: &mut Model, cmd: Command) -> bool {
    match cmd {
        Command::SaveState => {
            dlog_debug!("Command::SaveState tasks={}", model.manager.tasks().len());
            persist(model);
            false
        }
        Command::Quit => {
            dlog_debug!("Command::Quit");
            true
        }
    }
}

/// Persist the collection; failures surface as a notification instead of
/// aborting (the in-memory state stays usable).
fn persist(model: &mut Model) {
    if let Err(e) = model.manager.persist() {
        dlog_error!("State save failed: {}", e);
        model.notification = Some(Notification {
            level: NotificationLevel::Error,
            message: format!("Failed to save tasks: {}", e),
        });
        model.dirty = true;
    }
}
