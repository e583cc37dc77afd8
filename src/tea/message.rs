//! Messages for the TEA (The Elm Architecture) pattern.
//!
//! Messages are inputs to the update function. With a single-threaded,
//! keyboard-driven app these are terminal events only.

use crossterm::event::KeyEvent;

/// Input messages to the update function.
#[derive(Debug)]
pub enum Message {
    Key(KeyEvent),
    Resize(u16, u16),
}
