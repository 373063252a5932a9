//! Position evaluation heuristics
//!
//! Board features (corners, edges, frontier, stability, threats) and the
//! weighted evaluator combining them. Two weight profiles exist: the
//! compact profile used by the Medium tier and the extended profile used
//! by Hard.

pub mod features;
pub mod heuristic;

// Re-exports
pub use features::{is_c_square, is_corner, is_edge, is_x_square};
pub use heuristic::{evaluate, terminal_score};
