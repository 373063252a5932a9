//! Flip resolution for Reversi moves
//!
//! A move is legal iff it flips at least one opponent disc. Flips are
//! resolved per compass direction: a contiguous run of opponent discs
//! terminated by a same-color disc is captured whole; a run terminated by
//! an empty cell or the board edge captures nothing in that direction.

use crate::board::{Board, Disc, Pos};

/// Direction vectors (8 compass directions)
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Find the opponent discs that would be flipped if `disc` were placed
/// at `pos`.
///
/// Returns an empty vector when the cell is occupied or `disc` is
/// `Empty`; an empty result means the move is illegal.
pub fn flips_for_move(board: &Board, pos: Pos, disc: Disc) -> Vec<Pos> {
    if disc == Disc::Empty || !board.is_empty(pos) {
        return Vec::new();
    }

    let opponent = disc.opponent();
    let mut all_flips = Vec::new();

    for &(dr, dc) in &DIRECTIONS {
        let mut r = i32::from(pos.row) + dr;
        let mut c = i32::from(pos.col) + dc;

        let mut line = Vec::new();
        let mut saw_opponent = false;

        while Pos::is_valid(r, c) {
            let cell_pos = Pos::new(r as u8, c as u8);
            let cell = board.get(cell_pos);

            if cell == opponent {
                saw_opponent = true;
                line.push(cell_pos);
            } else if cell == disc {
                if saw_opponent {
                    all_flips.extend_from_slice(&line);
                }
                break;
            } else {
                // Empty cell breaks the run
                break;
            }

            r += dr;
            c += dc;
        }
    }

    all_flips
}

/// Check whether placing `disc` at `pos` is a legal move.
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos, disc: Disc) -> bool {
    !flips_for_move(board, pos, disc).is_empty()
}

/// Enumerate every legal move for `disc` in row-major order.
///
/// Always empty for `Disc::Empty`.
pub fn valid_moves(board: &Board, disc: Disc) -> Vec<Pos> {
    if disc == Disc::Empty {
        return Vec::new();
    }
    Board::positions()
        .filter(|&pos| is_valid_move(board, pos, disc))
        .collect()
}

/// Check whether `disc` has at least one legal move.
///
/// Early-exit variant of [`valid_moves`] for turn-advancement checks.
pub fn has_any_move(board: &Board, disc: Disc) -> bool {
    if disc == Disc::Empty {
        return false;
    }
    Board::positions().any(|pos| is_valid_move(board, pos, disc))
}
