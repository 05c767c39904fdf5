//! Terminal host glue (crossterm + ratatui).
//!
//! Kept apart from `ui` so the widget tree builds without terminal crates.

pub mod crossterm;
pub mod terminal_guard;
