//! Move module - pick-up validation and drop execution
//!
//! A move is a two-step interaction: pick up a movable tile, then drop it
//! on an orthogonally adjacent empty cell. Pick-up never mutates anything;
//! drop either applies the full move (swap the cells, recheck both for new
//! locks) or rejects it as a no-op. A rejected drop is not an error: it is
//! the designed way to cancel a pickup, and either outcome ends the
//! holding interaction.

use crate::board::Board;
use crate::locks::{LockState, NewlyLocked};
use crate::types::{Coord, DropRejection, PickUpError};

/// A tile the player has picked up, pending a drop decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeldTile {
    /// The cell the tile was picked up from (still occupied until the drop).
    pub source: Coord,
    /// The tile's value.
    pub value: u8,
}

/// Result of a drop attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The move was performed; carries the cells that locked because of it.
    Applied { newly_locked: NewlyLocked },
    /// The move was refused and nothing changed; the pickup is cancelled.
    Rejected(DropRejection),
}

impl DropOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, DropOutcome::Applied { .. })
    }
}

/// Validate a pick-up without touching the board.
///
/// Succeeds only for a cell that holds a tile which has not locked.
pub fn pick_up(board: &Board, locks: &LockState, cell: Coord) -> Result<HeldTile, PickUpError> {
    let value = board.tile(cell).ok_or(PickUpError::NotATile)?;
    if locks.is_locked(cell) {
        return Err(PickUpError::AlreadyLocked);
    }
    Ok(HeldTile {
        source: cell,
        value,
    })
}

/// Attempt to drop a held tile onto `target`.
///
/// Preconditions, checked in order: the target must be empty, then it must
/// be an orthogonal neighbor of the tile's source cell. When both hold,
/// the value moves, the source empties, and both touched cells are
/// rechecked for new locks before the call returns; there is no partially
/// applied state. Dropping a tile back onto its own cell fails the
/// emptiness check, which doubles as the "re-select the held tile" cancel
/// path.
pub fn drop_tile(
    board: &mut Board,
    locks: &mut LockState,
    held: HeldTile,
    target: Coord,
) -> DropOutcome {
    if !board.is_empty_cell(target) {
        return DropOutcome::Rejected(DropRejection::TargetOccupied);
    }
    if !held.source.is_orthogonal_neighbor(target) {
        return DropOutcome::Rejected(DropRejection::NotAdjacent);
    }

    board.set(target.x as i16, target.y as i16, Some(held.value));
    board.set(held.source.x as i16, held.source.y as i16, None);

    let mut newly_locked = locks.recheck_around(board, target);
    // The vacated source is empty and contributes nothing, but both touched
    // cells are rechecked as one atomic step of the move.
    for cell in locks.recheck_around(board, held.source) {
        newly_locked.push(cell);
    }

    DropOutcome::Applied { newly_locked }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    fn blank_board(n: u8) -> Board {
        let mut board = Board::generate(n, &mut SimpleRng::new(1));
        for y in 0..n as i16 {
            for x in 0..n as i16 {
                board.set(x, y, None);
            }
        }
        board
    }

    #[test]
    fn pick_up_empty_cell_is_not_a_tile() {
        let board = blank_board(3);
        let locks = LockState::new(3);
        assert_eq!(
            pick_up(&board, &locks, Coord::new(1, 1)),
            Err(PickUpError::NotATile)
        );
    }

    #[test]
    fn pick_up_locked_tile_is_refused() {
        let mut board = blank_board(3);
        board.set(1, 1, Some(2));
        board.set(1, 0, Some(2));
        let mut locks = LockState::new(3);
        locks.recheck_around(&board, Coord::new(1, 1));

        assert_eq!(
            pick_up(&board, &locks, Coord::new(1, 1)),
            Err(PickUpError::AlreadyLocked)
        );
    }

    #[test]
    fn pick_up_returns_source_and_value_without_mutation() {
        let mut board = blank_board(3);
        board.set(2, 0, Some(5));
        let locks = LockState::new(3);

        let held = pick_up(&board, &locks, Coord::new(2, 0)).unwrap();
        assert_eq!(held.source, Coord::new(2, 0));
        assert_eq!(held.value, 5);
        // Still on the board until the drop.
        assert_eq!(board.tile(Coord::new(2, 0)), Some(5));
    }

    #[test]
    fn drop_on_occupied_target_is_rejected() {
        let mut board = blank_board(3);
        board.set(0, 0, Some(1));
        board.set(0, 1, Some(3));
        let mut locks = LockState::new(3);
        let held = pick_up(&board, &locks, Coord::new(0, 0)).unwrap();

        let outcome = drop_tile(&mut board, &mut locks, held, Coord::new(0, 1));
        assert_eq!(
            outcome,
            DropOutcome::Rejected(DropRejection::TargetOccupied)
        );
        assert_eq!(board.tile(Coord::new(0, 0)), Some(1));
        assert_eq!(board.tile(Coord::new(0, 1)), Some(3));
    }

    #[test]
    fn drop_on_own_cell_is_rejected_as_occupied() {
        let mut board = blank_board(3);
        board.set(0, 0, Some(1));
        let mut locks = LockState::new(3);
        let held = pick_up(&board, &locks, Coord::new(0, 0)).unwrap();

        let outcome = drop_tile(&mut board, &mut locks, held, Coord::new(0, 0));
        assert_eq!(
            outcome,
            DropOutcome::Rejected(DropRejection::TargetOccupied)
        );
    }

    #[test]
    fn drop_on_diagonal_or_distant_cell_is_rejected() {
        let mut board = blank_board(4);
        board.set(2, 2, Some(1));
        let mut locks = LockState::new(4);
        let held = pick_up(&board, &locks, Coord::new(2, 2)).unwrap();

        for target in [Coord::new(3, 3), Coord::new(1, 1), Coord::new(2, 0)] {
            let outcome = drop_tile(&mut board, &mut locks, held, target);
            assert_eq!(outcome, DropOutcome::Rejected(DropRejection::NotAdjacent));
        }
        assert_eq!(board.tile(Coord::new(2, 2)), Some(1));
    }

    #[test]
    fn drop_moves_value_and_empties_source() {
        let mut board = blank_board(3);
        board.set(1, 1, Some(2));
        let mut locks = LockState::new(3);
        let held = pick_up(&board, &locks, Coord::new(1, 1)).unwrap();

        let outcome = drop_tile(&mut board, &mut locks, held, Coord::new(1, 2));
        assert!(outcome.is_applied());
        assert_eq!(board.tile(Coord::new(1, 2)), Some(2));
        assert_eq!(board.tile(Coord::new(1, 1)), None);
    }

    #[test]
    fn drop_next_to_matching_tile_locks_both() {
        let mut board = blank_board(3);
        board.set(0, 0, Some(3));
        board.set(2, 1, Some(3));
        let mut locks = LockState::new(3);

        // Walk the first 3 toward the second: (0,0) -> (1,0) -> (1,1).
        let held = pick_up(&board, &locks, Coord::new(0, 0)).unwrap();
        assert!(drop_tile(&mut board, &mut locks, held, Coord::new(1, 0)).is_applied());
        let held = pick_up(&board, &locks, Coord::new(1, 0)).unwrap();

        match drop_tile(&mut board, &mut locks, held, Coord::new(1, 1)) {
            DropOutcome::Applied { newly_locked } => {
                assert_eq!(newly_locked.len(), 2);
                assert!(newly_locked.contains(&Coord::new(1, 1)));
                assert!(newly_locked.contains(&Coord::new(2, 1)));
            }
            outcome => panic!("expected applied move, got {:?}", outcome),
        }
        assert_eq!(locks.locked_count(), 2);
    }

    #[test]
    fn drop_without_match_locks_nothing() {
        let mut board = blank_board(3);
        board.set(0, 0, Some(3));
        board.set(2, 2, Some(4));
        let mut locks = LockState::new(3);
        let held = pick_up(&board, &locks, Coord::new(0, 0)).unwrap();

        match drop_tile(&mut board, &mut locks, held, Coord::new(0, 1)) {
            DropOutcome::Applied { newly_locked } => assert!(newly_locked.is_empty()),
            outcome => panic!("expected applied move, got {:?}", outcome),
        }
        assert_eq!(locks.locked_count(), 0);
    }
}
