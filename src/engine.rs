//! Difficulty dispatch for the computer opponent
//!
//! Integrates the greedy chooser and the alpha-beta searcher behind a
//! single entry point. The tier decides the algorithm, the evaluator
//! profile, and the search depth:
//!
//! | Tier   | Algorithm   | Depth          | Evaluator |
//! |--------|-------------|----------------|-----------|
//! | Easy   | greedy      | 1 ply          | flips     |
//! | Medium | alpha-beta  | 3              | compact   |
//! | Hard   | alpha-beta  | 4 (endgame: 6) | extended  |
//!
//! Selection is deterministic for a fixed input: no randomness and no
//! clock dependence. The elapsed-time field in [`MoveResult`] is
//! informational only and never feeds back into the choice.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::debug;

use crate::board::{Disc, Pos};
use crate::game::GameState;
use crate::search::greedy::best_greedy;
use crate::search::Searcher;

/// Empty-cell threshold below which Hard switches to the deeper
/// endgame search.
const ENDGAME_EMPTIES: usize = 10;

/// AI difficulty tier. Carries no state beyond its identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Result of a move search with statistics for the presentation layer.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the chosen move (greedy or negamax scale per tier)
    pub score: i32,
    /// Search depth used (1 for the greedy tier)
    pub depth: u8,
    /// Nodes visited (candidate count for the greedy tier)
    pub nodes: u64,
    /// Wall-clock time spent, informational only
    pub time_ms: u64,
}

/// Pick a move for `me` at the given difficulty.
///
/// Returns `None` when `me` has no legal move; the caller should then
/// run [`GameState::ensure_turn_playable_or_game_over`] on its state.
pub fn choose_move(state: &GameState, me: Disc, difficulty: Difficulty) -> Option<Pos> {
    choose_move_with_stats(state, me, difficulty).best_move
}

/// [`choose_move`] variant exposing search statistics.
pub fn choose_move_with_stats(
    state: &GameState,
    me: Disc,
    difficulty: Difficulty,
) -> MoveResult {
    let start = Instant::now();

    let result = match difficulty {
        Difficulty::Easy => {
            let candidates = state.valid_moves(me).len() as u64;
            let best = best_greedy(state, me);
            MoveResult {
                best_move: best.map(|(mov, _)| mov),
                score: best.map_or(0, |(_, score)| score),
                depth: 1,
                nodes: candidates,
                time_ms: 0,
            }
        }
        Difficulty::Medium => from_search(Searcher::new(me, false).search(state, 3)),
        Difficulty::Hard => {
            let depth = if state.board().empty_count() <= ENDGAME_EMPTIES {
                6
            } else {
                4
            };
            from_search(Searcher::new(me, true).search(state, depth))
        }
    };

    let time_ms = start.elapsed().as_millis() as u64;
    let result = MoveResult { time_ms, ..result };

    debug!(
        %difficulty,
        best_move = ?result.best_move,
        score = result.score,
        depth = result.depth,
        nodes = result.nodes,
        time_ms = result.time_ms,
        "move selected"
    );

    result
}

fn from_search(result: crate::search::SearchResult) -> MoveResult {
    MoveResult {
        best_move: result.best_move,
        score: result.score,
        depth: result.depth,
        nodes: result.nodes,
        time_ms: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_tiers_answer_the_opening() {
        let state = GameState::new();
        for difficulty in Difficulty::iter() {
            let mov = choose_move(&state, Disc::Black, difficulty);
            assert!(mov.is_some(), "{difficulty} found no opening move");
            assert!(state.valid_moves(Disc::Black).contains(&mov.unwrap()));
        }
    }

    #[test]
    fn test_no_legal_move_yields_none() {
        let mut board = Board::new();
        board.set(Pos::new(4, 4), Disc::Black);
        let state = GameState::from_position(board, Disc::White);

        for difficulty in Difficulty::iter() {
            assert_eq!(choose_move(&state, Disc::White, difficulty), None);
        }
    }

    #[test]
    fn test_choice_is_deterministic() {
        let mut state = GameState::new();
        state.apply_move(Pos::new(2, 3)).unwrap();

        for difficulty in Difficulty::iter() {
            let a = choose_move(&state, Disc::White, difficulty);
            let b = choose_move(&state, Disc::White, difficulty);
            assert_eq!(a, b, "{difficulty} must be deterministic");
        }
    }

    #[test]
    fn test_easy_takes_the_corner() {
        // Corner flips two discs; the alternative at (5,6) flips five.
        // The 500-point corner bonus must dominate.
        let mut board = Board::new();
        board.set(Pos::new(0, 1), Disc::White);
        board.set(Pos::new(0, 2), Disc::White);
        board.set(Pos::new(0, 3), Disc::Black);
        board.set(Pos::new(5, 0), Disc::Black);
        for col in 1..6 {
            board.set(Pos::new(5, col), Disc::White);
        }
        let state = GameState::from_position(board, Disc::Black);

        let result = choose_move_with_stats(&state, Disc::Black, Difficulty::Easy);
        assert_eq!(result.best_move, Some(Pos::new(0, 0)));
        assert_eq!(result.score, 502);
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn test_hard_deepens_in_the_endgame() {
        // Fewer than ten empties triggers the deep search
        let mut board = Board::new();
        for pos in Board::positions() {
            board.set(pos, Disc::Black);
        }
        for col in 1..7 {
            board.set(Pos::new(7, col), Disc::White);
        }
        board.set(Pos::new(7, 7), Disc::Empty);
        let state = GameState::from_position(board, Disc::Black);

        let result = choose_move_with_stats(&state, Disc::Black, Difficulty::Hard);
        assert_eq!(result.depth, 6);

        // A spacious midgame position stays at depth 4
        let mut mid = GameState::new();
        mid.apply_move(Pos::new(2, 3)).unwrap();
        let result = choose_move_with_stats(&mid, Disc::White, Difficulty::Hard);
        assert_eq!(result.depth, 4);
    }

    #[test]
    fn test_difficulty_labels() {
        let names: Vec<String> = Difficulty::iter().map(|d| d.to_string()).collect();
        assert_eq!(names, vec!["Easy", "Medium", "Hard"]);
    }
}
