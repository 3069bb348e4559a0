//! Search support for the decision engine
//!
//! Contains the move prioritizer that orders empty cells before evaluation.

pub mod candidates;

pub use candidates::{move_priority, prioritized_moves, Candidate};
