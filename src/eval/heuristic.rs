//! Weighted evaluation of a position from one side's perspective
//!
//! The evaluator always scores in the frame of the side the search was
//! launched for; the negamax layer handles perspective flips. Terminal
//! positions dominate every heuristic value so a proven win or loss always
//! outranks positional judgement.

use crate::board::Disc;
use crate::game::GameState;
use crate::rules::valid_moves;

use super::features::{
    corner_count, corner_moves, delayed_corner_threat, edge_moves, frontier_score,
    positional_score, stable_edge_score,
};

/// Base magnitude of a terminal score; the disc difference is added on
/// top so bigger wins still compare higher.
const TERMINAL_BASE: i32 = 50_000;

/// Score a finished game for `me`: `±(50000 + disc difference)`, or 0 on
/// an exact tie.
pub fn terminal_score(state: &GameState, me: Disc) -> i32 {
    let diff = state.count(me) as i32 - state.count(me.opponent()) as i32;
    if diff > 0 {
        TERMINAL_BASE + diff
    } else if diff < 0 {
        -TERMINAL_BASE + diff
    } else {
        0
    }
}

/// Evaluate the position for `me`; higher is better.
///
/// `advanced` selects the Hard-tier profile, which adds edge stability,
/// opponent edge mobility, and the delayed corner threat on top of the
/// compact Medium profile, with heavier weights throughout.
pub fn evaluate(state: &GameState, me: Disc, advanced: bool) -> i32 {
    if state.is_game_over() {
        return terminal_score(state, me);
    }

    let opp = me.opponent();
    let board = state.board();

    let material = state.count(me) as i32 - state.count(opp) as i32;
    let mobility =
        valid_moves(board, me).len() as i32 - valid_moves(board, opp).len() as i32;
    let corners = corner_count(board, me) - corner_count(board, opp);
    let positional = positional_score(board, me);
    let frontier = frontier_score(board, me);
    let opp_corner_moves = corner_moves(board, opp);

    if !advanced {
        8 * mobility + 500 * corners + 2 * material + 3 * positional - 3 * frontier
            - 250 * opp_corner_moves
    } else {
        let stability = stable_edge_score(board, me);
        let opp_edge_moves = edge_moves(board, opp);
        let delayed_threat = delayed_corner_threat(state, me);

        10 * mobility + 900 * corners + 2 * material + 6 * positional - 6 * frontier
            + 30 * stability
            - 600 * opp_corner_moves
            - 60 * opp_edge_moves
            - 120 * delayed_threat
    }
}
