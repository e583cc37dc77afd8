//! Commands for the TEA (The Elm Architecture) pattern.
//!
//! Commands are outputs from the update function - side effects for the
//! runtime to execute. Persistence is deliberately a command rather than
//! an implicit side effect of mutation, so the contract stays observable
//! and testable without a UI.

/// Output commands from the update function.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Persist the full task collection to the store.
    SaveState,

    /// App lifecycle
    Quit,
}
