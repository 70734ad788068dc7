//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (engine logic, terminal rendering, input).
//!
//! # Board Model
//!
//! The board is an N x N grid, N chosen at session start:
//!
//! - **Minimum size**: 2 (the smallest board with one tile pair)
//! - **Maximum size**: 9 (values stay two digits; fits a terminal)
//!
//! Each cell either holds a tile value (a positive integer) or is empty.
//! Cells are addressed by [`Coord`] with `(0, 0)` at the top-left corner of
//! the logical grid.
//!
//! # Regions
//!
//! The grid is statically partitioned by `x + y` against `N - 1`:
//!
//! | Region | Predicate | Initial contents |
//! |----------|-------------------|-----------------------------------|
//! | Upper | `x + y < N - 1` | permutation of `1..=N*(N-1)/2` |
//! | Lower | `x + y > N - 1` | permutation of `1..=N*(N-1)/2` |
//! | Diagonal | `x + y == N - 1` | empty |
//!
//! Both tile regions have `N*(N-1)/2` cells, so every value appears exactly
//! twice on a fresh board: once above the diagonal, once below it. The game
//! is about sliding those pairs next to each other.
//!
//! # Examples
//!
//! ```
//! use tui_pairlock_types::{Coord, GameAction, Phase, MIN_BOARD_SIZE};
//!
//! let a = Coord::new(2, 2);
//! let b = Coord::new(2, 3);
//! assert!(a.is_orthogonal_neighbor(b));
//! assert!(!a.is_orthogonal_neighbor(Coord::new(3, 3)));
//!
//! assert_eq!(Phase::NotStarted, Phase::default());
//! assert_eq!(GameAction::from_str("select"), Some(GameAction::Select));
//! assert_eq!(MIN_BOARD_SIZE, 2);
//! ```

/// Smallest playable board size (a single tile pair).
pub const MIN_BOARD_SIZE: u8 = 2;

/// Largest supported board size.
///
/// Bounded so tile values stay at most two digits (`9 * 8 / 2 = 36`) and the
/// diamond layout fits a common 80-column terminal.
pub const MAX_BOARD_SIZE: u8 = 9;

/// Contents of one board cell: `Some(value)` for a tile, `None` for empty.
pub type Tile = Option<u8>;

/// Number of tiles on a fresh board of the given size (`n * n - n`).
pub const fn total_tiles(n: u8) -> u16 {
    (n as u16) * (n as u16) - (n as u16)
}

/// A cell position on the board.
///
/// Coordinates are unsigned; bounds checking against the current board size
/// happens in the engine, which treats out-of-range neighbors as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// True when `other` is exactly one step away along a single axis.
    ///
    /// This is the move-target rule: same column and `|dy| == 1`, or same
    /// row and `|dx| == 1`. Diagonal neighbors do not qualify.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pairlock_types::Coord;
    ///
    /// let c = Coord::new(2, 2);
    /// assert!(c.is_orthogonal_neighbor(Coord::new(2, 3)));
    /// assert!(c.is_orthogonal_neighbor(Coord::new(1, 2)));
    /// assert!(!c.is_orthogonal_neighbor(Coord::new(3, 3)));
    /// assert!(!c.is_orthogonal_neighbor(Coord::new(2, 4)));
    /// assert!(!c.is_orthogonal_neighbor(c));
    /// ```
    pub fn is_orthogonal_neighbor(self, other: Coord) -> bool {
        let dx = (self.x as i16 - other.x as i16).abs();
        let dy = (self.y as i16 - other.y as i16).abs();
        (dx == 0 && dy == 1) || (dx == 1 && dy == 0)
    }

    /// The four orthogonal neighbor positions as signed pairs.
    ///
    /// Signed so that neighbors of edge cells can be produced and then
    /// rejected by a bounds check instead of wrapping.
    pub fn orthogonal_neighbors(self) -> [(i16, i16); 4] {
        let (x, y) = (self.x as i16, self.y as i16);
        [(x, y - 1), (x + 1, y), (x, y + 1), (x - 1, y)]
    }
}

/// The static generation-time region a cell belongs to.
///
/// Regions only scope the random value assignment; they have no meaning
/// after generation (tiles move freely across the diagonal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Upper,
    Lower,
    Diagonal,
}

impl Region {
    /// Classify a cell on a board of size `n`.
    pub fn of(x: u8, y: u8, n: u8) -> Self {
        let s = x as u16 + y as u16;
        let d = (n as u16).saturating_sub(1);
        if s < d {
            Region::Upper
        } else if s > d {
            Region::Lower
        } else {
            Region::Diagonal
        }
    }
}

/// Coarse lifecycle state of one puzzle session.
///
/// `Solved` is terminal for the instance; a new puzzle requires a fresh
/// `start`, which fully replaces the board and lock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    InProgress,
    Solved,
}

/// Why a pick-up was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickUpError {
    /// The cell is empty (or the session is not in progress).
    NotATile,
    /// The tile has already locked in place and can never move again.
    AlreadyLocked,
}

/// Why a drop was rejected.
///
/// A rejected drop is not an error: it cancels the pickup and leaves the
/// board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropRejection {
    /// The target cell already holds a tile (this includes dropping a tile
    /// back onto its own source cell).
    TargetOccupied,
    /// The target is not an orthogonal neighbor of the tile's source cell.
    NotAdjacent,
    /// No tile was held when the drop was attempted.
    NothingHeld,
}

/// Player actions produced by the input layer.
///
/// Cursor movement is in grid axes, not screen axes: the diamond rendering
/// rotates the board 45 degrees, so `CursorUp` moves toward smaller `y`
/// (visually up-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cell cursor toward smaller `y`.
    CursorUp,
    /// Move the cell cursor toward larger `y`.
    CursorDown,
    /// Move the cell cursor toward smaller `x`.
    CursorLeft,
    /// Move the cell cursor toward larger `x`.
    CursorRight,
    /// Pick up the tile under the cursor, or drop the held tile there.
    Select,
    /// Release the held tile without moving it.
    Cancel,
    /// Abandon the current puzzle and return to the menu.
    Menu,
}

impl GameAction {
    /// Parse an action from its name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "select" => Some(GameAction::Select),
            "cancel" => Some(GameAction::Cancel),
            "menu" => Some(GameAction::Menu),
            _ => None,
        }
    }

    /// Convert to camelCase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::Select => "select",
            GameAction::Cancel => "cancel",
            GameAction::Menu => "menu",
        }
    }
}
