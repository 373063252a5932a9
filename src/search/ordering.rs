//! Move-ordering heuristic for alpha-beta
//!
//! A cheap per-candidate score used to sort children before recursion.
//! Better ordering does not change the search value, only how early the
//! pruning cutoffs fire.

use std::cmp::Reverse;

use crate::board::{Disc, Pos};
use crate::eval::features::{corner_moves, is_c_square, is_corner, is_edge, is_x_square};
use crate::game::GameState;
use crate::rules::flips_for_move;

const CORNER_SCORE: i32 = 10_000;
const X_SQUARE_SCORE: i32 = -3_000;
const C_SQUARE_SCORE: i32 = -800;
const EDGE_BONUS: i32 = 600;
const FLIP_WEIGHT: i32 = 10;
const OPP_CORNER_PENALTY: i32 = 200;

/// Fast ordering score for a candidate move of `me`.
///
/// Corners rank highest, X-squares lowest, C-squares low; everything
/// else gets an edge bonus plus a flip-count nudge. In advanced mode the
/// move is additionally simulated and penalized for every corner it
/// opens to the opponent.
pub fn move_order_score(state: &GameState, mov: Pos, me: Disc, advanced: bool) -> i32 {
    if is_corner(mov) {
        return CORNER_SCORE;
    }
    if is_x_square(mov) {
        return X_SQUARE_SCORE;
    }
    if is_c_square(mov) {
        return C_SQUARE_SCORE;
    }

    let edge = if is_edge(mov) { EDGE_BONUS } else { 0 };
    let flips = flips_for_move(state.board(), mov, me).len() as i32 * FLIP_WEIGHT;

    if advanced {
        let mut next = state.clone();
        let _ = next.apply_move(mov);
        let opp_corners = corner_moves(next.board(), me.opponent());
        return edge + flips - opp_corners * OPP_CORNER_PENALTY;
    }

    edge + flips
}

/// Sort candidates descending by ordering score (stable, so equal-scoring
/// moves keep enumeration order).
pub fn order_moves(state: &GameState, moves: &mut [Pos], me: Disc, advanced: bool) {
    moves.sort_by_cached_key(|&mov| Reverse(move_order_score(state, mov, me, advanced)));
}
