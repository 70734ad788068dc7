//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] values plus the
//! menu's board-size selection. The engine itself never sees key events,
//! only resolved cells and actions.

pub mod map;

pub use tui_pairlock_types as types;

pub use map::{handle_key_event, menu_size_key, should_quit};
