//! Reversi game engine with a tiered AI opponent
//!
//! A complete Othello/Reversi rules engine (8x8 board, chained flips, forced
//! passes, terminal detection) together with a computer opponent dispatched
//! over three difficulty tiers:
//! - `Easy`: greedy one-ply selection with a corner bonus
//! - `Medium`: negamax alpha-beta at depth 3 with a compact evaluator
//! - `Hard`: negamax alpha-beta at depth 4 (depth 6 in the endgame) with an
//!   extended evaluator covering edge stability and corner threats
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation (disc grid, positions)
//! - [`rules`]: Flip resolution and legal-move enumeration
//! - [`game`]: Game state machine (move application, turns, termination)
//! - [`eval`]: Positional evaluation heuristics
//! - [`search`]: Move selection (alpha-beta, greedy)
//! - [`engine`]: Difficulty dispatch integrating all components
//!
//! # Quick Start
//!
//! ```
//! use reversi::{choose_move, Difficulty, Disc, GameState};
//!
//! let mut game = GameState::new();
//!
//! // Black opens; the engine picks the move
//! let opening = choose_move(&game, Disc::Black, Difficulty::Medium).unwrap();
//! let changed = game.apply_move(opening).unwrap();
//!
//! assert_eq!(game.count(Disc::Black), 4);
//! assert_eq!(changed.len(), 2); // placement plus one flipped disc
//! assert_eq!(game.current_turn(), Disc::White);
//! ```
//!
//! # Threading
//!
//! Every operation is a synchronous pure function over value-typed state.
//! The search clones the position at each simulated ply and never touches
//! the caller's state, so independent invocations are safe to run
//! concurrently. Callers wanting a responsive UI should run [`choose_move`]
//! on a worker thread and hand only the resulting move back.

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Disc, Pos, BOARD_SIZE};
pub use engine::{choose_move, choose_move_with_stats, Difficulty, MoveResult};
pub use game::{GameState, IllegalMove};
