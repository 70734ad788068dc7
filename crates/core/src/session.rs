//! Session module - one puzzle instance's lifetime
//!
//! The session owns the board, the lock state, and the held tile, and runs
//! the `NotStarted -> InProgress -> Solved` state machine. All mutation
//! goes through its operations; the UI layer only reads snapshots and
//! accessor queries. Everything is single-threaded and synchronous: each
//! operation runs to completion before the next input is accepted.

use crate::board::Board;
use crate::locks::LockState;
use crate::moves::{drop_tile, pick_up, DropOutcome, HeldTile};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Coord, DropRejection, Phase, PickUpError, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// One puzzle instance.
///
/// `start` fully replaces the board, lock state, and held tile; nothing
/// carries over between puzzles. `Solved` is terminal until the next
/// `start` or `reset`.
#[derive(Debug, Clone)]
pub struct Session {
    rng: SimpleRng,
    phase: Phase,
    board: Board,
    locks: LockState,
    held: Option<HeldTile>,
}

impl Session {
    /// A session in the menu phase, with no board yet.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            phase: Phase::NotStarted,
            board: Board::empty(),
            locks: LockState::new(0),
            held: None,
        }
    }

    /// Start a fresh puzzle of the given size.
    ///
    /// Rejects sizes outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE` without
    /// touching any state; this is the boundary check the generator
    /// relies on. Callable from any phase (a mid-game restart replaces
    /// the current puzzle).
    pub fn start(&mut self, n: u8) -> bool {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&n) {
            return false;
        }
        self.board = Board::generate(n, &mut self.rng);
        self.locks = LockState::new(n);
        self.held = None;
        self.phase = Phase::InProgress;
        true
    }

    /// Abandon the current puzzle and return to the menu phase.
    pub fn reset(&mut self) {
        self.board = Board::empty();
        self.locks = LockState::new(0);
        self.held = None;
        self.phase = Phase::NotStarted;
    }

    /// Pick up the tile at `cell`, making it the held tile.
    ///
    /// Fails without side effects when the session is not in progress,
    /// the cell is empty, or the tile has locked.
    pub fn pick_up(&mut self, cell: Coord) -> Result<HeldTile, PickUpError> {
        if self.phase != Phase::InProgress {
            return Err(PickUpError::NotATile);
        }
        let held = pick_up(&self.board, &self.locks, cell)?;
        self.held = Some(held);
        Ok(held)
    }

    /// Drop the held tile onto `target`.
    ///
    /// The held-tile reference is cleared whatever the outcome: a
    /// rejected drop cancels the pickup, a successful one completes the
    /// move. Re-selecting the held tile's own cell lands here as a
    /// `TargetOccupied` rejection, which is exactly the cancel behavior.
    /// A successful drop that locks the last tiles transitions the
    /// session to `Solved`.
    pub fn drop_held(&mut self, target: Coord) -> DropOutcome {
        let held = match self.held.take() {
            Some(held) => held,
            None => return DropOutcome::Rejected(DropRejection::NothingHeld),
        };

        let outcome = drop_tile(&mut self.board, &mut self.locks, held, target);

        if outcome.is_applied() && self.locks.locked_count() == self.board.total_tiles() {
            self.phase = Phase::Solved;
        }
        outcome
    }

    /// Release the held tile without attempting a move.
    pub fn cancel_hold(&mut self) {
        self.held = None;
    }

    // Queries for the rendering layer. The borrow rules make these
    // read-only: mutation needs `&mut self` and lives above.

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn locks(&self) -> &LockState {
        &self.locks
    }

    pub fn held(&self) -> Option<HeldTile> {
        self.held
    }

    pub fn locked_count(&self) -> u16 {
        self.locks.locked_count()
    }

    pub fn total_tiles(&self) -> u16 {
        self.board.total_tiles()
    }

    /// Owned copy of everything the renderer needs for one frame.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.board.size(),
            tiles: self.board.cells().to_vec(),
            locked: self.locks.flags().to_vec(),
            held: self.held,
            phase: self.phase,
            locked_count: self.locks.locked_count(),
            total_tiles: self.board.total_tiles(),
        }
    }
}
