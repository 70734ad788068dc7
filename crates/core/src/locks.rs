//! Lock module - permanent adjacency locks and win counting
//!
//! Whenever two tiles of equal value sit orthogonally adjacent, both lock
//! in place forever. Locks are strictly monotone: there is no operation
//! that clears a lock flag or decrements the counter, and the move layer
//! refuses to pick up a locked tile, so the invariant is never challenged.
//!
//! A move changes exactly two cells, so any new equal-value adjacency must
//! involve one of them. [`LockState::recheck_around`] therefore only scans
//! the four neighbors of a touched cell, keeping lock detection O(1) per
//! move instead of a full-board rescan.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::Coord;

/// Upper bound on cells a single move can newly lock.
///
/// One recheck can lock the touched cell plus up to four neighbors; the
/// vacated cell is empty and locks nothing. Eight leaves slack for the
/// combined result of both rechecks.
pub const MAX_LOCKS_PER_MOVE: usize = 8;

/// Cells that transitioned to locked during one operation.
pub type NewlyLocked = ArrayVec<Coord, MAX_LOCKS_PER_MOVE>;

/// Per-cell lock flags plus the running locked-cell count.
///
/// The counter mirrors the number of `true` flags and is the sole
/// authority for win detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockState {
    size: u8,
    locked: Vec<bool>,
    locked_count: u16,
}

impl LockState {
    /// All-unlocked state for a board of size `n`.
    pub fn new(n: u8) -> Self {
        Self {
            size: n,
            locked: vec![false; (n as usize) * (n as usize)],
            locked_count: 0,
        }
    }

    /// Whether the cell has locked. Out-of-bounds cells read as unlocked.
    pub fn is_locked(&self, cell: Coord) -> bool {
        if cell.x >= self.size || cell.y >= self.size {
            return false;
        }
        self.locked[(cell.y as usize) * (self.size as usize) + (cell.x as usize)]
    }

    /// Number of locked cells so far. Non-decreasing for the session.
    pub fn locked_count(&self) -> u16 {
        self.locked_count
    }

    /// Flat row-major view of the lock flags (for snapshots).
    pub fn flags(&self) -> &[bool] {
        &self.locked
    }

    /// Detect and record new equal-value adjacencies around one cell.
    ///
    /// Called for each of the two cells a move touched. An empty cell
    /// locks nothing (the vacated source always takes this path). For a
    /// tile cell, every orthogonal neighbor holding the same value locks
    /// both endpoints; each endpoint counts independently, so a cell and
    /// its match can lock in the same call. Returns the cells that
    /// transitioned on this call.
    pub fn recheck_around(&mut self, board: &Board, cell: Coord) -> NewlyLocked {
        let mut newly = NewlyLocked::new();

        let value = match board.tile(cell) {
            Some(v) => v,
            None => return newly,
        };

        for (nx, ny) in cell.orthogonal_neighbors() {
            match board.get(nx, ny) {
                Some(Some(v)) if v == value => {
                    let neighbor = Coord::new(nx as u8, ny as u8);
                    if self.mark(cell) {
                        newly.push(cell);
                    }
                    if self.mark(neighbor) {
                        newly.push(neighbor);
                    }
                }
                _ => {}
            }
        }

        newly
    }

    /// Set the flag for a cell, counting only the false-to-true transition.
    fn mark(&mut self, cell: Coord) -> bool {
        let idx = (cell.y as usize) * (self.size as usize) + (cell.x as usize);
        if self.locked[idx] {
            return false;
        }
        self.locked[idx] = true;
        self.locked_count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    /// A 3x3 board cleared and re-filled with hand-placed values.
    fn doctored_board(tiles: &[(u8, u8, u8)]) -> Board {
        let mut board = Board::generate(3, &mut SimpleRng::new(1));
        for y in 0..3i16 {
            for x in 0..3i16 {
                board.set(x, y, None);
            }
        }
        for &(x, y, v) in tiles {
            board.set(x as i16, y as i16, Some(v));
        }
        board
    }

    #[test]
    fn recheck_on_empty_cell_locks_nothing() {
        let board = doctored_board(&[(0, 0, 1)]);
        let mut locks = LockState::new(3);
        let newly = locks.recheck_around(&board, Coord::new(1, 1));
        assert!(newly.is_empty());
        assert_eq!(locks.locked_count(), 0);
    }

    #[test]
    fn recheck_locks_both_endpoints_of_a_match() {
        let board = doctored_board(&[(1, 1, 4), (1, 0, 4)]);
        let mut locks = LockState::new(3);

        let newly = locks.recheck_around(&board, Coord::new(1, 1));
        assert_eq!(newly.len(), 2);
        assert!(newly.contains(&Coord::new(1, 1)));
        assert!(newly.contains(&Coord::new(1, 0)));
        assert_eq!(locks.locked_count(), 2);
        assert!(locks.is_locked(Coord::new(1, 1)));
        assert!(locks.is_locked(Coord::new(1, 0)));
    }

    #[test]
    fn recheck_ignores_unequal_neighbors() {
        let board = doctored_board(&[(1, 1, 4), (1, 0, 5), (0, 1, 6)]);
        let mut locks = LockState::new(3);
        let newly = locks.recheck_around(&board, Coord::new(1, 1));
        assert!(newly.is_empty());
        assert_eq!(locks.locked_count(), 0);
    }

    #[test]
    fn recheck_counts_already_locked_side_once() {
        // (1,0) and (1,1) lock first; a later match against (1,1) from
        // (2,1) adds only the new endpoint.
        let board = doctored_board(&[(1, 1, 4), (1, 0, 4), (2, 1, 4)]);
        let mut locks = LockState::new(3);

        let first = locks.recheck_around(&board, Coord::new(1, 0));
        assert_eq!(first.len(), 2);
        assert_eq!(locks.locked_count(), 2);

        let second = locks.recheck_around(&board, Coord::new(2, 1));
        assert_eq!(second.len(), 1);
        assert!(second.contains(&Coord::new(2, 1)));
        assert_eq!(locks.locked_count(), 3);
    }

    #[test]
    fn recheck_handles_edge_cells_without_wrapping() {
        let board = doctored_board(&[(0, 0, 7)]);
        let mut locks = LockState::new(3);
        let newly = locks.recheck_around(&board, Coord::new(0, 0));
        assert!(newly.is_empty());
    }

    #[test]
    fn repeat_recheck_is_idempotent() {
        let board = doctored_board(&[(1, 1, 4), (1, 0, 4)]);
        let mut locks = LockState::new(3);

        locks.recheck_around(&board, Coord::new(1, 1));
        let again = locks.recheck_around(&board, Coord::new(1, 1));
        assert!(again.is_empty());
        assert_eq!(locks.locked_count(), 2);
    }

    #[test]
    fn recheck_can_lock_multiple_neighbors_at_once() {
        // Dropping a 4 between two 4s locks all three cells in one call.
        let board = doctored_board(&[(1, 1, 4), (1, 0, 4), (1, 2, 4)]);
        let mut locks = LockState::new(3);

        let newly = locks.recheck_around(&board, Coord::new(1, 1));
        assert_eq!(newly.len(), 3);
        assert_eq!(locks.locked_count(), 3);
    }
}
