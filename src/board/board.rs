//! Grid storage and disc counting

use serde::{Deserialize, Serialize};

use super::{Disc, Pos, BOARD_SIZE};

/// 8x8 grid of disc values.
///
/// The grid is a plain fixed-size array, so cloning a board is a cheap
/// memcpy. The search relies on this: every simulated ply operates on its
/// own copy and never aliases the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Disc; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [[Disc::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Create a board with the canonical 4-disc center setup.
    ///
    /// White at (3,3)/(4,4), Black at (3,4)/(4,3); Black moves first.
    pub fn starting() -> Self {
        let mut board = Self::new();
        board.set(Pos::new(3, 3), Disc::White);
        board.set(Pos::new(3, 4), Disc::Black);
        board.set(Pos::new(4, 3), Disc::Black);
        board.set(Pos::new(4, 4), Disc::White);
        board
    }

    /// Get disc at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Disc {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Set disc at position
    #[inline]
    pub fn set(&mut self, pos: Pos, disc: Disc) {
        self.cells[pos.row as usize][pos.col as usize] = disc;
    }

    /// Check if position is unoccupied
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Disc::Empty
    }

    /// Number of cells holding the given value
    pub fn count(&self, disc: Disc) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == disc)
            .count()
    }

    /// Number of unoccupied cells
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.count(Disc::Empty)
    }

    /// Iterate all positions in row-major order
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..super::TOTAL_CELLS).map(Pos::from_index)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
