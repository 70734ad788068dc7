//! Board module - the tile grid and its generation
//!
//! The board is an N x N grid of cells, each holding either a tile value or
//! nothing. Generation partitions the cells into the upper, lower, and
//! diagonal regions and deals an independent shuffled run of `1..=region`
//! values into each tile region, leaving the diagonal empty. Every value
//! therefore starts on the board exactly twice, once per region.
//!
//! The board never changes size after generation; moves only relocate
//! values between cells.

use crate::rng::SimpleRng;
use crate::types::{total_tiles, Coord, Region, Tile};

/// The N x N tile grid.
///
/// Stored as a flat row-major vector since the size is chosen at runtime.
/// Access is bounds-checked: `get` takes signed coordinates and returns
/// `None` for positions off the board, which lets neighbor scans probe
/// edge cells without special-casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Tile>,
}

impl Board {
    /// An empty board with no cells (the pre-start placeholder).
    pub fn empty() -> Self {
        Self {
            size: 0,
            cells: Vec::new(),
        }
    }

    /// Generate a fresh board of the given size.
    ///
    /// Assumes `n >= 2`; smaller sizes are rejected at the session
    /// boundary before the generator runs. Both tile regions have
    /// `n * (n - 1) / 2` cells and receive a uniform permutation of the
    /// same value range, so the pairing invariant holds by construction.
    pub fn generate(n: u8, rng: &mut SimpleRng) -> Self {
        debug_assert!(n >= 2, "board size below minimum");

        let region_len = (n as u16) * (n as u16 - 1) / 2;
        let mut upper_values = rng.permutation(region_len as u8).into_iter();
        let mut lower_values = rng.permutation(region_len as u8).into_iter();

        let mut cells = vec![None; (n as usize) * (n as usize)];
        for y in 0..n {
            for x in 0..n {
                let tile = match Region::of(x, y, n) {
                    Region::Upper => upper_values.next(),
                    Region::Lower => lower_values.next(),
                    Region::Diagonal => None,
                };
                cells[(y as usize) * (n as usize) + (x as usize)] = tile;
            }
        }

        Self { size: n, cells }
    }

    /// Board size N.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of tiles a full board of this size carries (`n*n - n`).
    ///
    /// This count is fixed for the life of the board: moves relocate
    /// values, they never create or destroy them.
    pub fn total_tiles(&self) -> u16 {
        total_tiles(self.size)
    }

    /// Cell contents at signed coordinates, `None` when off the board.
    pub fn get(&self, x: i16, y: i16) -> Option<Tile> {
        if x < 0 || y < 0 || x >= self.size as i16 || y >= self.size as i16 {
            return None;
        }
        Some(self.cells[(y as usize) * (self.size as usize) + (x as usize)])
    }

    /// Cell contents at a known-good coordinate.
    pub fn tile(&self, cell: Coord) -> Tile {
        self.get(cell.x as i16, cell.y as i16).flatten()
    }

    /// Overwrite a cell. Returns false (without writing) when out of bounds.
    pub fn set(&mut self, x: i16, y: i16, tile: Tile) -> bool {
        if x < 0 || y < 0 || x >= self.size as i16 || y >= self.size as i16 {
            return false;
        }
        self.cells[(y as usize) * (self.size as usize) + (x as usize)] = tile;
        true
    }

    /// True when the cell is on the board and holds no tile.
    pub fn is_empty_cell(&self, cell: Coord) -> bool {
        matches!(self.get(cell.x as i16, cell.y as i16), Some(None))
    }

    /// Flat row-major view of the cells (for snapshots).
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_BOARD_SIZE;

    #[test]
    fn generate_leaves_diagonal_empty() {
        let mut rng = SimpleRng::new(1);
        for n in 2..=MAX_BOARD_SIZE {
            let board = Board::generate(n, &mut rng);
            for d in 0..n {
                let x = d;
                let y = n - 1 - d;
                assert_eq!(board.tile(Coord::new(x, y)), None, "n={} d={}", n, d);
            }
        }
    }

    #[test]
    fn generate_fills_every_off_diagonal_cell() {
        let mut rng = SimpleRng::new(2);
        let board = Board::generate(5, &mut rng);
        let mut filled = 0u16;
        for y in 0..5i16 {
            for x in 0..5i16 {
                if board.get(x, y).unwrap().is_some() {
                    filled += 1;
                }
            }
        }
        assert_eq!(filled, board.total_tiles());
        assert_eq!(board.total_tiles(), 20);
    }

    #[test]
    fn generate_pairs_every_value_across_regions() {
        let mut rng = SimpleRng::new(3);
        for n in 2..=MAX_BOARD_SIZE {
            let board = Board::generate(n, &mut rng);
            let region_len = (n as u16) * (n as u16 - 1) / 2;
            for v in 1..=region_len as u8 {
                let mut upper = 0;
                let mut lower = 0;
                for y in 0..n {
                    for x in 0..n {
                        if board.tile(Coord::new(x, y)) == Some(v) {
                            match Region::of(x, y, n) {
                                Region::Upper => upper += 1,
                                Region::Lower => lower += 1,
                                Region::Diagonal => panic!("tile on the diagonal"),
                            }
                        }
                    }
                }
                assert_eq!((upper, lower), (1, 1), "n={} value={}", n, v);
            }
        }
    }

    #[test]
    fn generate_is_deterministic_per_seed() {
        let a = Board::generate(6, &mut SimpleRng::new(42));
        let b = Board::generate(6, &mut SimpleRng::new(42));
        let c = Board::generate(6, &mut SimpleRng::new(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn get_rejects_out_of_bounds() {
        let board = Board::generate(3, &mut SimpleRng::new(1));
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, -1), None);
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    fn set_rejects_out_of_bounds() {
        let mut board = Board::generate(3, &mut SimpleRng::new(1));
        assert!(!board.set(-1, 0, Some(1)));
        assert!(!board.set(3, 3, Some(1)));
        assert!(board.set(1, 1, Some(9)));
        assert_eq!(board.tile(Coord::new(1, 1)), Some(9));
    }

    #[test]
    fn empty_board_has_no_cells() {
        let board = Board::empty();
        assert_eq!(board.size(), 0);
        assert_eq!(board.get(0, 0), None);
        assert_eq!(board.total_tiles(), 0);
    }
}
