//! Heuristic evaluation of board positions
//!
//! The score for a color is the sum, over every stone of that color, of a
//! directional line score in each of the four line directions. Stones that
//! share a line are each scored from their own position, so longer and denser
//! formations are counted several times over.

use crate::board::{Board, Pos, Stone};

use super::patterns::{calculate_potential, LineScan};

/// Direction vectors for line checking (4 directions)
/// Each direction only needs to be checked once (we scan both ways from each stone)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Position evaluator for a fixed win length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    win_size: usize,
}

impl Evaluator {
    pub fn new(win_size: usize) -> Self {
        Self { win_size }
    }

    #[inline]
    pub fn win_size(&self) -> usize {
        self.win_size
    }

    /// Evaluate how favourable the board is for `color`.
    ///
    /// Never negative. `Stone::Empty` scores 0.
    #[must_use]
    pub fn evaluate_board(&self, board: &Board, color: Stone) -> i64 {
        board
            .stones_of(color)
            .map(|pos| self.evaluate_position(board, color, pos))
            .sum()
    }

    /// Score a single stone across all four directions.
    #[must_use]
    pub fn evaluate_position(&self, board: &Board, color: Stone, pos: Pos) -> i64 {
        DIRECTIONS
            .iter()
            .map(|&dir| {
                let scan = self.evaluate_direction(board, color, pos, dir);
                calculate_potential(scan, self.win_size)
            })
            .sum()
    }

    /// Scan outward from `pos` along `dir` and its reverse.
    ///
    /// Each sense takes at most `win_size - 1` steps. Friendly stones extend
    /// the line; the first empty cell counts as an open end and ends that
    /// sense; an opponent stone or the board edge ends it with nothing added.
    #[must_use]
    pub fn evaluate_direction(
        &self,
        board: &Board,
        color: Stone,
        pos: Pos,
        (dr, dc): (i32, i32),
    ) -> LineScan {
        let mut scan = LineScan::default();
        self.scan_sense(board, color, pos, dr, dc, &mut scan);
        self.scan_sense(board, color, pos, -dr, -dc, &mut scan);
        scan
    }

    fn scan_sense(&self, board: &Board, color: Stone, pos: Pos, dr: i32, dc: i32, scan: &mut LineScan) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let reach = self.win_size as i32;
        for i in 1..reach {
            let Some(p) = pos.offset(dr, dc, i, board.size()) else {
                break;
            };
            match board.get(p) {
                s if s == color => scan.line_score += 1,
                Stone::Empty => {
                    scan.open_ends += 1;
                    break;
                }
                _ => break, // Opponent stone blocks
            }
        }
    }
}
