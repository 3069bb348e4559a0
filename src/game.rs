//! Game state seen by the agent, plus a reference game loop
//!
//! [`GameState`] is everything a decision call needs: a board it may borrow
//! mutably and the color to move. [`Game`] implements it with turn
//! alternation, legality checks and win/draw detection, and is what the GUI
//! drives.

use crate::board::{Board, Pos, Stone};
use crate::config::AgentConfig;
use crate::error::GameError;
use crate::rules::find_win_line_at_pos;

/// Board access and turn reporting for a decision call.
pub trait GameState {
    fn board(&self) -> &Board;

    /// Mutable access for scoped provisional placement. The agent restores
    /// every cell before returning.
    fn board_mut(&mut self) -> &mut Board;

    /// Color to move: `Stone::Black` for player 1, `Stone::White` for player 2
    fn current_player(&self) -> Stone;
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win { winner: Stone, line: Vec<Pos> },
    Draw,
}

/// Reference game: Black moves first, players alternate, first to `win_size`
/// in a row wins, a full board without a winner is a draw.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    win_size: usize,
    current_turn: Stone,
    outcome: Option<Outcome>,
    history: Vec<(Pos, Stone)>,
}

impl Game {
    /// Empty board with Black to move. Infallible: `config` was validated
    /// when it was built.
    pub fn new(config: AgentConfig) -> Self {
        Self {
            board: Board::new(config.board_size()),
            win_size: config.win_size(),
            current_turn: Stone::Black,
            outcome: None,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn win_size(&self) -> usize {
        self.win_size
    }

    #[inline]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    /// Place the current player's stone at `pos` and advance the turn.
    pub fn play(&mut self, pos: Pos) -> Result<Option<&Outcome>, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }

        let color = self.current_turn;
        self.board.try_place(pos, color)?;
        self.history.push((pos, color));

        if let Some(line) = find_win_line_at_pos(&self.board, pos, color, self.win_size) {
            self.outcome = Some(Outcome::Win { winner: color, line });
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
        } else {
            self.current_turn = color.opponent();
        }
        Ok(self.outcome.as_ref())
    }

    /// Take back the last move. The mover of that stone is on turn again.
    pub fn undo(&mut self) -> Option<(Pos, Stone)> {
        let (pos, color) = self.history.pop()?;
        self.board.remove_stone(pos);
        self.current_turn = color;
        self.outcome = None;
        Some((pos, color))
    }
}

impl GameState for Game {
    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn current_player(&self) -> Stone {
        self.current_turn
    }
}
