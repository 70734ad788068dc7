//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. The view
//! renders into a plain framebuffer which a terminal backend then flushes,
//! so the drawing logic stays pure and unit-testable.
//!
//! Goals:
//! - Keep `core` deterministic and free of any display knowledge
//! - Draw the diamond board the way the puzzle is meant to be seen
//! - Redraw cheaply (diff-based flushing) since the timer repaints often

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pairlock_core as core;
pub use tui_pairlock_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HudState, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
