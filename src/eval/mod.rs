//! Position evaluation
//!
//! - [`heuristic`]: per-stone directional scanning and board totals
//! - [`patterns`]: score table for a single directional scan

pub mod heuristic;
pub mod patterns;

pub use heuristic::{Evaluator, DIRECTIONS};
pub use patterns::{calculate_potential, LineScan, PatternScore};
