//! Decision engine
//!
//! One decision is a single-ply greedy search:
//!
//! 1. Order every empty cell with the move prioritizer (center focus on).
//! 2. For each candidate, place the mover's stone provisionally and score the
//!    board as `evaluate(mover) - evaluate(opponent)`.
//! 3. Keep the first candidate that reaches the highest score.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Game, Pos};
//!
//! let engine = AIEngine::new(5, 3).unwrap();
//! let mut game = Game::new(engine.config());
//!
//! game.play(Pos::new(2, 1)).unwrap(); // Black
//! game.play(Pos::new(0, 0)).unwrap(); // White
//! game.play(Pos::new(2, 2)).unwrap(); // Black
//! game.play(Pos::new(4, 4)).unwrap(); // White
//!
//! let best = engine.get_move(&mut game).unwrap();
//! assert!(best == Pos::new(2, 0) || best == Pos::new(2, 3));
//! ```

use std::time::Instant;

use crate::board::Pos;
use crate::config::AgentConfig;
use crate::error::ConfigError;
use crate::eval::Evaluator;
use crate::game::GameState;
use crate::search::prioritized_moves;

/// Result of a decision with diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Net evaluation (mover minus opponent) after the move; 0 without a move
    pub score: i64,
    /// Number of candidates produced by the prioritizer
    pub candidates: usize,
    /// Number of candidates actually placed and scored
    pub evaluated: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    /// Create a result indicating no move found
    #[inline]
    fn no_move(candidates: usize, time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            candidates,
            evaluated: 0,
            time_ms,
        }
    }
}

/// Greedy one-ply move selector.
///
/// Immutable after construction, so one engine can serve any number of games
/// as long as each call gets its own [`GameState`].
#[derive(Debug, Clone)]
pub struct AIEngine {
    config: AgentConfig,
    evaluator: Evaluator,
}

impl AIEngine {
    /// Create an engine for `board_size × board_size` boards where `win_size`
    /// in a row wins.
    pub fn new(board_size: usize, win_size: usize) -> Result<Self, ConfigError> {
        Ok(Self::from_config(AgentConfig::new(board_size, win_size)?))
    }

    /// Create an engine from a configuration. [`AgentConfig`] values are
    /// validated when built, so this cannot fail.
    pub fn from_config(config: AgentConfig) -> Self {
        Self {
            config,
            evaluator: Evaluator::new(config.win_size()),
        }
    }

    #[inline]
    pub fn config(&self) -> AgentConfig {
        self.config
    }

    #[inline]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Get the best move for the player to move.
    ///
    /// Returns `None` only when no empty cell exists.
    #[must_use]
    pub fn get_move<S: GameState + ?Sized>(&self, state: &mut S) -> Option<Pos> {
        self.get_move_with_stats(state).best_move
    }

    /// Get the best move together with its score and search counts.
    ///
    /// The board is borrowed mutably for provisional placements; every
    /// placement is removed before the next candidate is tried, so the board
    /// is unchanged when this returns.
    #[must_use]
    pub fn get_move_with_stats<S: GameState + ?Sized>(&self, state: &mut S) -> MoveResult {
        let start = Instant::now();

        let player = state.current_player();
        let opponent = player.opponent();
        if opponent == player {
            tracing::warn!("decision requested with no player to move");
            return MoveResult::no_move(0, start.elapsed().as_millis() as u64);
        }

        debug_assert_eq!(
            state.board().size(),
            self.config.board_size(),
            "board does not match engine configuration"
        );

        let candidates = prioritized_moves(state.board(), true);
        let board = state.board_mut();

        let mut best: Option<(Pos, i64)> = None;
        let mut evaluated = 0;

        for candidate in &candidates {
            // Re-checked by `provisional`: a stale candidate is skipped
            let Some(placed) = board.provisional(candidate.pos, player) else {
                continue;
            };
            let score = self.evaluator.evaluate_board(&placed, player)
                - self.evaluator.evaluate_board(&placed, opponent);
            drop(placed);
            evaluated += 1;

            // Strict: the earlier candidate keeps a tie
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((candidate.pos, score));
            }
        }

        let time_ms = start.elapsed().as_millis() as u64;
        let Some((best_move, score)) = best else {
            tracing::debug!(candidates = candidates.len(), "no legal move");
            return MoveResult::no_move(candidates.len(), time_ms);
        };

        tracing::debug!(
            player = player.player_id(),
            row = best_move.row,
            col = best_move.col,
            score,
            evaluated,
            time_ms,
            "selected move"
        );

        MoveResult {
            best_move: Some(best_move),
            score,
            candidates: candidates.len(),
            evaluated,
            time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Stone};
    use crate::game::{Game, Outcome};

    /// Minimal state: a bare board plus the color to move
    struct RawState {
        board: Board,
        to_move: Stone,
    }

    impl GameState for RawState {
        fn board(&self) -> &Board {
            &self.board
        }

        fn board_mut(&mut self) -> &mut Board {
            &mut self.board
        }

        fn current_player(&self) -> Stone {
            self.to_move
        }
    }

    fn state(size: usize, black: &[(u8, u8)], white: &[(u8, u8)], to_move: Stone) -> RawState {
        let mut board = Board::new(size);
        for &(r, c) in black {
            board.place_stone(Pos::new(r, c), Stone::Black);
        }
        for &(r, c) in white {
            board.place_stone(Pos::new(r, c), Stone::White);
        }
        RawState { board, to_move }
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new(5, 3).unwrap();
        assert_eq!(engine.config(), AgentConfig::new(5, 3).unwrap());
        assert_eq!(engine.evaluator().win_size(), 3);
        assert!(AIEngine::new(0, 3).is_err());
    }

    #[test]
    fn test_engine_completes_three() {
        let engine = AIEngine::new(5, 3).unwrap();
        let mut st = state(5, &[(2, 1), (2, 2)], &[], Stone::Black);

        let best = engine.get_move(&mut st).unwrap();
        assert!(
            best == Pos::new(2, 0) || best == Pos::new(2, 3),
            "expected a completing move, got {:?}",
            best
        );
    }

    #[test]
    fn test_engine_winning_move_dominates() {
        let engine = AIEngine::new(5, 3).unwrap();
        let mut st = state(5, &[(2, 1), (2, 2)], &[], Stone::Black);

        let result = engine.get_move_with_stats(&mut st);
        // Three stones each saturate the horizontal direction
        assert!(result.score >= 3 * 200_000, "score {}", result.score);
        assert_eq!(result.candidates, 23);
        assert_eq!(result.evaluated, 23);
    }

    #[test]
    fn test_engine_blocks_opponent_line() {
        // White to move; Black threatens (2,0) or (2,3). Any white stone on
        // row 2 next to the pair cuts Black's open ends.
        let engine = AIEngine::new(5, 3).unwrap();
        let mut st = state(5, &[(2, 1), (2, 2)], &[(0, 0)], Stone::White);

        let best = engine.get_move(&mut st).unwrap();
        assert!(
            best == Pos::new(2, 0) || best == Pos::new(2, 3),
            "expected a blocking move, got {:?}",
            best
        );
    }

    #[test]
    fn test_board_restored_after_decision() {
        let engine = AIEngine::new(7, 4).unwrap();
        let mut st = state(7, &[(3, 3), (3, 4), (2, 2)], &[(4, 4), (1, 1)], Stone::White);
        let before = st.board.clone();
        let layers_before = st.board.to_layers();

        let _ = engine.get_move(&mut st);

        assert_eq!(st.board, before);
        assert_eq!(st.board.to_layers(), layers_before);
    }

    #[test]
    fn test_returned_move_is_legal() {
        let engine = AIEngine::new(6, 4).unwrap();
        let mut st = state(6, &[(0, 0), (2, 3), (5, 5)], &[(1, 1), (3, 3)], Stone::Black);

        let best = engine.get_move(&mut st).unwrap();
        assert!(st.board.contains(best));
        assert!(st.board.is_empty(best));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let engine = AIEngine::new(2, 2).unwrap();
        let mut st = state(2, &[(0, 0), (1, 1)], &[(0, 1), (1, 0)], Stone::Black);

        let result = engine.get_move_with_stats(&mut st);
        assert_eq!(result.best_move, None);
        assert_eq!(result.candidates, 0);
        assert_eq!(result.evaluated, 0);
    }

    #[test]
    fn test_no_player_to_move_has_no_move() {
        let engine = AIEngine::new(3, 3).unwrap();
        let mut st = state(3, &[], &[], Stone::Empty);
        assert_eq!(engine.get_move(&mut st), None);
    }

    #[test]
    fn test_tie_prefers_earlier_candidate() {
        // Empty 5x5: every central cell scores the same for a lone stone, so
        // the first candidate in prioritizer order wins.
        let engine = AIEngine::new(5, 3).unwrap();
        let mut st = state(5, &[], &[], Stone::Black);

        let first = prioritized_moves(&st.board, true)[0].pos;
        assert_eq!(engine.get_move(&mut st), Some(first));
        assert_eq!(first, Pos::new(1, 1));
    }

    #[test]
    fn test_decision_is_repeatable() {
        let engine = AIEngine::new(9, 5).unwrap();
        let mut st = state(9, &[(4, 4), (4, 5)], &[(3, 4)], Stone::White);

        let first = engine.get_move_with_stats(&mut st);
        let second = engine.get_move_with_stats(&mut st);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
    }

    #[test]
    fn test_self_play_reaches_an_outcome() {
        let engine = AIEngine::new(5, 3).unwrap();
        let mut game = Game::new(engine.config());

        while !game.is_over() {
            let pos = engine.get_move(&mut game).expect("board not full");
            game.play(pos).unwrap();
        }

        match game.outcome() {
            Some(Outcome::Win { winner, line }) => {
                assert!(line.len() >= 3);
                assert!(line.iter().all(|&p| game.board().get(p) == *winner));
            }
            Some(Outcome::Draw) => assert!(game.board().is_full()),
            None => unreachable!(),
        }
    }
}
