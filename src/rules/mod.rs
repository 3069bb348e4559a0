//! Game rules for N-in-a-row
//!
//! Only the win condition lives here; legality is "empty and on the board",
//! handled by [`crate::board::Board::try_place`].

pub mod win;

// Re-exports for convenient access
pub use win::find_win_line_at_pos;
