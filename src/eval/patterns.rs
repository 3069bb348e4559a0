//! Pattern scores for line evaluation
//!
//! These constants define the per-direction, per-stone scoring weights.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Line long enough to win
    pub const WIN: i64 = 200_000;
    /// One short of winning, open on both ends
    pub const OPEN_NEAR_WIN: i64 = 20_000;
    /// One short of winning, open on one end
    pub const CLOSED_NEAR_WIN: i64 = 10_000;
    /// Per stone of line score once a line has two or more friendly neighbours
    pub const LINE_UNIT: i64 = 1_000;
    /// Per open end (plus one) for a lone stone or single neighbour
    pub const BASE_UNIT: i64 = 10;
}

/// Result of scanning one direction (both senses) from a stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineScan {
    /// Friendly stones found before hitting anything else, both senses summed
    pub line_score: i32,
    /// Empty cells bounding the run, 0..=2
    pub open_ends: i32,
}

/// Map a directional scan to a score.
///
/// The winning-length check comes first and is exclusive: a line that long
/// never falls through to the near-win or general cases.
#[must_use]
pub fn calculate_potential(scan: LineScan, win_size: usize) -> i64 {
    let LineScan { line_score, open_ends } = scan;
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let win = win_size as i32;

    if line_score >= win - 1 {
        return PatternScore::WIN;
    }

    if line_score == win - 2 {
        match open_ends {
            2 => return PatternScore::OPEN_NEAR_WIN,
            1 => return PatternScore::CLOSED_NEAR_WIN,
            _ => {}
        }
    }

    let central_bonus: i64 = if line_score >= 2 { 2 } else { 1 };

    if line_score >= 2 {
        let score = PatternScore::LINE_UNIT * i64::from(line_score) * central_bonus;
        return if open_ends > 0 { score * 2 } else { score };
    }

    PatternScore::BASE_UNIT * i64::from(open_ends + 1) * central_bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(line_score: i32, open_ends: i32) -> LineScan {
        LineScan { line_score, open_ends }
    }

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::WIN > PatternScore::OPEN_NEAR_WIN);
        assert!(PatternScore::OPEN_NEAR_WIN > PatternScore::CLOSED_NEAR_WIN);
    }

    #[test]
    fn test_winning_length_saturates() {
        // win_size 5: four friendly neighbours completes five
        assert_eq!(calculate_potential(scan(4, 0), 5), 200_000);
        assert_eq!(calculate_potential(scan(4, 2), 5), 200_000);
        assert_eq!(calculate_potential(scan(8, 0), 5), 200_000);
    }

    #[test]
    fn test_near_win() {
        assert_eq!(calculate_potential(scan(3, 2), 5), 20_000);
        assert_eq!(calculate_potential(scan(3, 1), 5), 10_000);
    }

    #[test]
    fn test_blocked_near_win_falls_through() {
        // 3 * 1000 * central bonus 2
        assert_eq!(calculate_potential(scan(3, 0), 5), 6_000);
    }

    #[test]
    fn test_general_lines() {
        assert_eq!(calculate_potential(scan(2, 1), 5), 8_000);
        assert_eq!(calculate_potential(scan(2, 2), 5), 8_000);
        assert_eq!(calculate_potential(scan(2, 0), 5), 4_000);
    }

    #[test]
    fn test_short_lines() {
        assert_eq!(calculate_potential(scan(0, 0), 5), 10);
        assert_eq!(calculate_potential(scan(0, 2), 5), 30);
        assert_eq!(calculate_potential(scan(1, 1), 5), 20);
    }

    #[test]
    fn test_small_win_sizes_do_not_underflow() {
        // win_size 3: two neighbours wins, one neighbour is the near-win row
        assert_eq!(calculate_potential(scan(2, 0), 3), 200_000);
        assert_eq!(calculate_potential(scan(1, 2), 3), 20_000);
        assert_eq!(calculate_potential(scan(1, 1), 3), 10_000);
        assert_eq!(calculate_potential(scan(1, 0), 3), 10);
        // win_size 2 and 1: every stone already counts as winning
        assert_eq!(calculate_potential(scan(1, 0), 2), 200_000);
        assert_eq!(calculate_potential(scan(0, 0), 1), 200_000);
    }
}
