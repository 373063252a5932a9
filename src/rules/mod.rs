//! Game rules: flip resolution and legal-move enumeration

pub mod capture;

// Re-exports
pub use capture::{flips_for_move, has_any_move, is_valid_move, valid_moves};
