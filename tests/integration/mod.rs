//! Integration test suite for duly.
//!
//! These tests exercise the app from the outside: key events driving the
//! update loop, persistence through real (temporary) state files, and
//! rendering into an off-screen terminal buffer.
//!
//! # Test Categories
//!
//! - `lifecycle`: create / status-change / delete flows driven by key events
//! - `persistence`: state file round-trips and corruption fallback
//! - `views`: filtering, sorting, counts, and the overdue flag
//! - `rendering`: drawing snapshots into a ratatui TestBackend

mod fixtures;

mod lifecycle;
mod rendering;
mod views;
