//! Move ordering for the decision engine
//!
//! Every empty cell is a candidate. Cells near the center and cells touching
//! existing stones are tried first.

use crate::board::{Board, Pos};

/// Bonus for a cell inside the central square
pub const CENTER_BONUS: i32 = 10;

/// Bonus per occupied neighbour
pub const NEIGHBOR_BONUS: i32 = 1;

/// An empty cell with its ordering priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub pos: Pos,
    pub priority: i32,
}

/// Check whether `pos` lies in the central square of half-width `size / 4`.
#[inline]
pub fn is_central(pos: Pos, size: usize) -> bool {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let (center, range) = ((size / 2) as i32, (size / 4) as i32);
    (i32::from(pos.row) - center).abs() <= range && (i32::from(pos.col) - center).abs() <= range
}

/// Priority of a single empty cell.
#[must_use]
pub fn move_priority(board: &Board, pos: Pos, central_focus: bool) -> i32 {
    let mut priority = 0;
    if central_focus && is_central(pos, board.size()) {
        priority += CENTER_BONUS;
    }

    // 3x3 window, clipped at the edges. The cell itself is empty so it adds nothing.
    for dr in -1..=1 {
        for dc in -1..=1 {
            if let Some(n) = pos.offset(dr, dc, 1, board.size()) {
                if !board.is_empty(n) {
                    priority += NEIGHBOR_BONUS;
                }
            }
        }
    }
    priority
}

/// All empty cells, highest priority first.
///
/// The sort is stable, so equal priorities keep row-major order.
#[must_use]
pub fn prioritized_moves(board: &Board, central_focus: bool) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = board
        .positions()
        .filter(|&pos| board.is_empty(pos))
        .map(|pos| Candidate {
            pos,
            priority: move_priority(board, pos, central_focus),
        })
        .collect();

    candidates.sort_by(|a, b| b.priority.cmp(&a.priority));
    candidates
}
