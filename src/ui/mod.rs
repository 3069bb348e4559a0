//! GUI module for the Gomoku agent
//!
//! A native egui/eframe front end: play against the agent or ask it for hints.

mod app;
mod board_view;
mod match_state;
mod theme;

pub use app::GomokuApp;
pub use match_state::{GameMode, MatchState};
