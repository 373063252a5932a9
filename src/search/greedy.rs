//! Greedy one-ply move selection (Easy tier)
//!
//! Scores every legal move by its immediate flip count plus a large
//! corner bonus and takes the first maximum. No lookahead.

use crate::board::{Disc, Pos};
use crate::eval::features::is_corner;
use crate::game::GameState;
use crate::rules::{flips_for_move, valid_moves};

const CORNER_BONUS: i32 = 500;

/// Best greedy move with its score, or `None` when `me` cannot move.
///
/// Ties keep the first candidate in enumeration order.
pub fn best_greedy(state: &GameState, me: Disc) -> Option<(Pos, i32)> {
    let mut best: Option<(Pos, i32)> = None;

    for mov in valid_moves(state.board(), me) {
        let flips = flips_for_move(state.board(), mov, me).len() as i32;
        let score = flips + if is_corner(mov) { CORNER_BONUS } else { 0 };
        if best.map_or(true, |(_, b)| score > b) {
            best = Some((mov, score));
        }
    }

    best
}

/// Greedy one-ply chooser: flip count plus corner bonus.
#[inline]
pub fn choose_greedy(state: &GameState, me: Disc) -> Option<Pos> {
    best_greedy(state, me).map(|(mov, _)| mov)
}
