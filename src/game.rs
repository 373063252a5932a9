//! Game state machine: move application, turn advancement, termination
//!
//! [`GameState`] owns the board plus turn/terminal metadata and enforces
//! the core invariant: while the game is not over, the side to move always
//! has at least one legal move. Turn advancement after a move hands the
//! turn to the opponent when possible, keeps it with the mover on a forced
//! pass, and otherwise marks the game over.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Disc, Pos};
use crate::rules::{flips_for_move, has_any_move, valid_moves};

/// Rejected move. Never fatal: speculative taps on occupied or
/// non-flipping cells are expected, and the state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
    /// The game has already ended
    #[display("the game is already over")]
    GameOver,
    /// The target cell is occupied
    #[display("cell is already occupied")]
    Occupied,
    /// The move would not flip any opponent disc
    #[display("move flips no opponent disc")]
    NoFlips,
}

/// Complete game position: board, side to move, terminal flag, and the
/// last move played (informational only; never read by the search).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_turn: Disc,
    game_over: bool,
    last_move: Option<Pos>,
}

impl GameState {
    /// Create the canonical start position, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::starting(),
            current_turn: Disc::Black,
            game_over: false,
            last_move: None,
        }
    }

    /// Build a state from an arbitrary position.
    ///
    /// The caller is responsible for `turn` being a playable side;
    /// call [`GameState::ensure_turn_playable_or_game_over`] afterwards
    /// when that is not known.
    pub fn from_position(board: Board, turn: Disc) -> Self {
        Self {
            board,
            current_turn: turn,
            game_over: false,
            last_move: None,
        }
    }

    /// Return to the canonical start position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_turn(&self) -> Disc {
        self.current_turn
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Number of cells holding the given value
    #[inline]
    pub fn count(&self, disc: Disc) -> usize {
        self.board.count(disc)
    }

    /// Legal moves for `disc` in the current position
    pub fn valid_moves(&self, disc: Disc) -> Vec<Pos> {
        valid_moves(&self.board, disc)
    }

    /// Apply a move for the side to move.
    ///
    /// On success returns the changed cells (the placement followed by
    /// every flipped disc) for the caller's presentation layer, and
    /// advances the turn. On failure the state is unchanged.
    pub fn apply_move(&mut self, pos: Pos) -> Result<Vec<Pos>, IllegalMove> {
        if self.game_over {
            return Err(IllegalMove::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(IllegalMove::Occupied);
        }

        let disc = self.current_turn;
        let flips = flips_for_move(&self.board, pos, disc);
        if flips.is_empty() {
            return Err(IllegalMove::NoFlips);
        }

        self.board.set(pos, disc);
        for &flip in &flips {
            self.board.set(flip, disc);
        }
        self.last_move = Some(pos);
        self.advance_turn_after_move();

        let mut changed = vec![pos];
        changed.extend(flips);
        Ok(changed)
    }

    /// Turn advancement policy: opponent if it can move, else the mover
    /// again (forced pass), else game over.
    fn advance_turn_after_move(&mut self) {
        let next = self.current_turn.opponent();
        if has_any_move(&self.board, next) {
            self.current_turn = next;
            return;
        }
        if has_any_move(&self.board, self.current_turn) {
            return;
        }
        self.game_over = true;
    }

    /// Re-check the turn invariant without an intervening move.
    ///
    /// If the side to move has no legal move, the turn passes to the
    /// opponent when the opponent has one, otherwise the game is marked
    /// over. Safe to call redundantly.
    pub fn ensure_turn_playable_or_game_over(&mut self) {
        if self.game_over {
            return;
        }
        if has_any_move(&self.board, self.current_turn) {
            return;
        }
        let next = self.current_turn.opponent();
        if has_any_move(&self.board, next) {
            self.current_turn = next;
        } else {
            self.game_over = true;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two edge-pinned black/white pairs: White has no legal move in this
    /// position, Black can capture either pair.
    fn forced_pass_position() -> GameState {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Disc::Black);
        board.set(Pos::new(0, 1), Disc::White);
        board.set(Pos::new(7, 0), Disc::Black);
        board.set(Pos::new(7, 1), Disc::White);
        GameState::from_position(board, Disc::Black)
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.count(Disc::Black), 2);
        assert_eq!(state.count(Disc::White), 2);
        assert_eq!(state.current_turn(), Disc::Black);
        assert!(!state.is_game_over());
        assert_eq!(state.last_move(), None);
        assert_eq!(state.valid_moves(Disc::Black).len(), 4);
    }

    #[test]
    fn test_opening_move_flips_one_disc() {
        let mut state = GameState::new();
        let changed = state.apply_move(Pos::new(2, 3)).unwrap();

        assert_eq!(changed, vec![Pos::new(2, 3), Pos::new(3, 3)]);
        assert_eq!(state.count(Disc::Black), 4);
        assert_eq!(state.count(Disc::White), 1);
        assert_eq!(state.current_turn(), Disc::White);
        assert_eq!(state.last_move(), Some(Pos::new(2, 3)));
    }

    #[test]
    fn test_disc_count_grows_by_one_plus_flips() {
        let mut state = GameState::new();
        let before = state.count(Disc::Black) + state.count(Disc::White);
        let changed = state.apply_move(Pos::new(2, 3)).unwrap();
        let after = state.count(Disc::Black) + state.count(Disc::White);
        assert_eq!(after, before + 1);
        assert_eq!(changed.len(), 2); // placement + one flip
    }

    #[test]
    fn test_illegal_move_occupied() {
        let mut state = GameState::new();
        let snapshot = state.clone();
        assert_eq!(
            state.apply_move(Pos::new(3, 3)),
            Err(IllegalMove::Occupied)
        );
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_illegal_move_no_flips() {
        let mut state = GameState::new();
        let snapshot = state.clone();
        assert_eq!(state.apply_move(Pos::new(0, 0)), Err(IllegalMove::NoFlips));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_forced_pass_keeps_mover_on_turn() {
        let mut state = forced_pass_position();
        assert!(state.valid_moves(Disc::White).is_empty());

        state.apply_move(Pos::new(0, 2)).unwrap();

        // White still has no move, Black captures again
        assert!(!state.is_game_over());
        assert_eq!(state.current_turn(), Disc::Black);
    }

    #[test]
    fn test_game_over_when_neither_side_can_move() {
        let mut state = forced_pass_position();
        state.apply_move(Pos::new(0, 2)).unwrap();
        state.apply_move(Pos::new(7, 2)).unwrap();

        // No white discs remain, so neither side has a legal move
        assert_eq!(state.count(Disc::White), 0);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_apply_move_after_game_over_fails() {
        let mut state = forced_pass_position();
        state.apply_move(Pos::new(0, 2)).unwrap();
        state.apply_move(Pos::new(7, 2)).unwrap();
        assert!(state.is_game_over());

        let snapshot = state.clone();
        assert_eq!(state.apply_move(Pos::new(5, 5)), Err(IllegalMove::GameOver));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_ensure_turn_hands_over_when_stuck() {
        // White to move but only Black can play
        let mut state = forced_pass_position();
        state.current_turn = Disc::White;

        state.ensure_turn_playable_or_game_over();
        assert_eq!(state.current_turn(), Disc::Black);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_ensure_turn_is_idempotent() {
        let mut state = GameState::new();
        let snapshot = state.clone();
        state.ensure_turn_playable_or_game_over();
        state.ensure_turn_playable_or_game_over();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_ensure_turn_marks_game_over() {
        // Single black disc: nobody can ever move
        let mut board = Board::new();
        board.set(Pos::new(4, 4), Disc::Black);
        let mut state = GameState::from_position(board, Disc::White);

        state.ensure_turn_playable_or_game_over();
        assert!(state.is_game_over());
    }

    #[test]
    fn test_turn_invariant_after_every_move() {
        // Play a full game with first-legal-move policy; after every
        // apply the side to move must have a move or the game is over
        let mut state = GameState::new();
        for _ in 0..128 {
            if state.is_game_over() {
                break;
            }
            let moves = state.valid_moves(state.current_turn());
            assert!(!moves.is_empty(), "turn invariant violated");
            state.apply_move(moves[0]).unwrap();
        }
        assert!(state.is_game_over());
    }

    #[test]
    fn test_full_board_tie_counts() {
        // Full board, 32 discs each: terminal draw by counts
        let mut board = Board::new();
        for pos in Board::positions() {
            let disc = if pos.row < 4 { Disc::Black } else { Disc::White };
            board.set(pos, disc);
        }
        let mut state = GameState::from_position(board, Disc::Black);
        state.ensure_turn_playable_or_game_over();

        assert!(state.is_game_over());
        assert_eq!(state.count(Disc::Black), state.count(Disc::White));
    }

    #[test]
    fn test_reset_restores_start() {
        let mut state = GameState::new();
        state.apply_move(Pos::new(2, 3)).unwrap();
        state.reset();
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut state = GameState::new();
        state.apply_move(Pos::new(2, 3)).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
