//! Snapshot module - owned render-side view of a session
//!
//! The renderer polls a fresh snapshot after every engine call and draws
//! from it; it never reaches into the live board or lock state.

use crate::moves::HeldTile;
use crate::types::{Phase, Tile};

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Board size N (0 before the first start).
    pub size: u8,
    /// Row-major cell contents, `size * size` entries.
    pub tiles: Vec<Tile>,
    /// Row-major lock flags, parallel to `tiles`.
    pub locked: Vec<bool>,
    /// The tile currently picked up, if any.
    pub held: Option<HeldTile>,
    pub phase: Phase,
    pub locked_count: u16,
    pub total_tiles: u16,
}

impl GameSnapshot {
    pub fn tile(&self, x: u8, y: u8) -> Tile {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.tiles[(y as usize) * (self.size as usize) + (x as usize)]
    }

    pub fn is_locked(&self, x: u8, y: u8) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        self.locked[(y as usize) * (self.size as usize) + (x as usize)]
    }
}
