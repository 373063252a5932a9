//! Move selection: greedy one-ply chooser and negamax alpha-beta search

pub mod alphabeta;
pub mod greedy;
pub mod ordering;

// Re-exports
pub use alphabeta::{SearchResult, Searcher};
pub use greedy::choose_greedy;
pub use ordering::move_order_score;
