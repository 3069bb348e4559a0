//! Win condition checking
//!
//! A player wins with `win_size` or more stones in an unbroken line.

use crate::board::{Board, Pos, Stone};
use crate::eval::DIRECTIONS;

/// Find the full line of `color` through `pos` if it is long enough to win.
///
/// The returned positions run from one end of the line to the other.
pub fn find_win_line_at_pos(board: &Board, pos: Pos, color: Stone, win_size: usize) -> Option<Vec<Pos>> {
    if color == Stone::Empty || board.get(pos) != color {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, color, -dr, -dc);
        let forward = run_length(board, pos, color, dr, dc);
        if back + forward + 1 >= win_size {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let start = -(back as i32);
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let end = forward as i32;
            return Some(
                (start..=end)
                    .filter_map(|i| pos.offset(dr, dc, i, board.size()))
                    .collect(),
            );
        }
    }
    None
}

/// Count consecutive `color` stones from `pos` (exclusive) along `(dr, dc)`.
fn run_length(board: &Board, pos: Pos, color: Stone, dr: i32, dc: i32) -> usize {
    let mut count = 0;
    let mut step = 1;
    while let Some(p) = pos.offset(dr, dc, step, board.size()) {
        if board.get(p) != color {
            break;
        }
        count += 1;
        step += 1;
    }
    count
}
