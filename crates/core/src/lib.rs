//! Core puzzle engine - pure, deterministic, and testable
//!
//! This module contains all the puzzle rules and state management. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same seed produces an identical board
//! - **Testable**: the whole game is playable from unit tests
//! - **Portable**: runs in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`board`]: the N x N grid and its region-partitioned generation
//! - [`locks`]: permanent equal-value adjacency locks and win counting
//! - [`moves`]: pick-up validation and atomic drop execution
//! - [`session`]: one puzzle's `NotStarted -> InProgress -> Solved` lifetime
//! - [`rng`]: seedable LCG with a uniform Fisher-Yates shuffle
//! - [`snapshot`]: owned render-side view of the session
//!
//! # Rules
//!
//! Tiles slide into orthogonally adjacent empty cells. The board starts
//! with every value present exactly twice (once above the empty diagonal,
//! once below). As soon as two equal-value tiles touch orthogonally they
//! lock in place forever; the puzzle is solved when every tile has locked.
//!
//! # Example
//!
//! ```
//! use tui_pairlock_core::Session;
//! use tui_pairlock_types::{Coord, Phase};
//!
//! // The 2x2 board is the same for every seed: value 1 at (0,0) and (1,1).
//! let mut session = Session::new(1);
//! session.start(2);
//! assert_eq!(session.phase(), Phase::InProgress);
//!
//! session.pick_up(Coord::new(0, 0)).unwrap();
//! let outcome = session.drop_held(Coord::new(1, 0));
//! assert!(outcome.is_applied());
//! assert_eq!(session.phase(), Phase::Solved);
//! ```

pub mod board;
pub mod locks;
pub mod moves;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_pairlock_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use locks::{LockState, NewlyLocked, MAX_LOCKS_PER_MOVE};
pub use moves::{drop_tile, pick_up, DropOutcome, HeldTile};
pub use rng::SimpleRng;
pub use session::Session;
pub use snapshot::GameSnapshot;
