//! Negamax alpha-beta search (Medium/Hard tiers)
//!
//! Depth-bounded negamax with fail-hard alpha-beta pruning and move
//! ordering at every node. Evaluation and terminal scores are always
//! expressed in the frame of the side the search was launched for; the
//! per-ply negation handles perspective flips. A side with no legal move
//! passes: the node recurses one ply deeper on a copy with the turn
//! handed over, still negating the returned value.
//!
//! The search never mutates the caller's state. Every simulated move
//! operates on an independent clone discarded when the subtree returns.

use crate::board::{Disc, Pos};
use crate::eval::{evaluate, terminal_score};
use crate::game::GameState;
use crate::rules::valid_moves;

use super::ordering::order_moves;

/// Infinity bound for the alpha-beta window; terminal scores stay well
/// inside it.
const INF: i32 = i32::MAX / 4;

/// Search result with the best move found and node statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Negamax value of the best move, in the root side's frame
    pub score: i32,
    /// Requested search depth
    pub depth: u8,
    /// Interior/leaf nodes visited
    pub nodes: u64,
}

/// Negamax alpha-beta searcher for one side.
///
/// Holds only the root perspective, the evaluator profile, and a node
/// counter; it carries no state between searches and is cheap to build
/// per move.
pub struct Searcher {
    me: Disc,
    advanced: bool,
    nodes: u64,
}

impl Searcher {
    pub fn new(me: Disc, advanced: bool) -> Self {
        Self {
            me,
            advanced,
            nodes: 0,
        }
    }

    /// Search for the best move for `me`, assumed to be the side to move.
    ///
    /// Returns `best_move: None` when `me` has no legal move; the caller
    /// is expected to run the pass/terminal check on its own state.
    #[must_use]
    pub fn search(&mut self, state: &GameState, depth: u8) -> SearchResult {
        self.nodes = 0;

        let mut candidates = valid_moves(state.board(), self.me);
        if candidates.is_empty() {
            return SearchResult {
                best_move: None,
                score: 0,
                depth,
                nodes: 0,
            };
        }
        order_moves(state, &mut candidates, self.me, self.advanced);

        let mut best_move = None;
        let mut best_value = i32::MIN;
        let mut alpha = -INF;
        let beta = INF;

        for mov in candidates {
            let mut next = state.clone();
            if next.apply_move(mov).is_err() {
                // Candidates come from valid_moves; a failure here means
                // the position disagreed with the generator. Skip it.
                continue;
            }

            let value = -self.negamax(&next, depth.saturating_sub(1), -beta, -alpha);

            if value > best_value {
                best_value = value;
                best_move = Some(mov);
            }
            if value > alpha {
                alpha = value;
            }
        }

        SearchResult {
            best_move,
            score: best_value,
            depth,
            nodes: self.nodes,
        }
    }

    /// Recursive negamax with a fail-hard beta cutoff.
    ///
    /// The value of a node is the negation of its best child's value from
    /// the opposite perspective; leaves are scored by the evaluator in
    /// `self.me`'s frame.
    fn negamax(&mut self, state: &GameState, depth: u8, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if state.is_game_over() {
            return terminal_score(state, self.me);
        }
        if depth == 0 {
            return evaluate(state, self.me, self.advanced);
        }

        let side = state.current_turn();
        let mut moves = valid_moves(state.board(), side);

        if moves.is_empty() {
            // Forced pass: not terminal by itself. Hand the turn over (or
            // detect the true end) and recurse one ply deeper.
            let mut next = state.clone();
            next.ensure_turn_playable_or_game_over();
            return -self.negamax(&next, depth - 1, -beta, -alpha);
        }

        order_moves(state, &mut moves, side, self.advanced);

        let mut best = -INF;
        for mov in moves {
            let mut next = state.clone();
            if next.apply_move(mov).is_err() {
                continue;
            }

            let value = -self.negamax(&next, depth - 1, -beta, -alpha);

            if value > best {
                best = value;
            }
            if value > alpha {
                alpha = value;
            }
            if alpha >= beta {
                break; // cutoff
            }
        }

        best
    }
}
