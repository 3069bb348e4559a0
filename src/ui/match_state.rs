//! Match state for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::{AppConfig, StartMode};
use crate::{AIEngine, Game, GameState, MoveResult, Outcome, Pos, Stone};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_color: Stone::Black }
    }
}

impl GameMode {
    /// Mode of the first game as configured
    pub fn from_config(config: &AppConfig) -> Self {
        match config.gui.mode {
            StartMode::Pvp => GameMode::PvP,
            StartMode::Pve => GameMode::PvE {
                human_color: Stone::from_player_id(config.gui.human_player).unwrap_or(Stone::Black),
            },
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// One game in the GUI: the board, who plays which color, and the agent.
pub struct MatchState {
    pub game: Game,
    pub mode: GameMode,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    engine: AIEngine,
}

impl MatchState {
    pub fn new(engine: AIEngine, mode: GameMode) -> Self {
        tracing::info!(?mode, "new game");
        Self {
            game: Game::new(engine.config()),
            mode,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            engine,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.engine.clone(), self.mode);
    }

    /// Start over in a different mode with the same agent
    pub fn restart(&mut self, mode: GameMode) {
        *self = Self::new(self.engine.clone(), mode);
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.game.current_player()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game.is_over()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() != human_color,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|e| e.to_string())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), crate::GameError> {
        let color = self.current_turn();
        let outcome = self.game.play(pos)?.cloned();

        self.suggested_move = None;
        self.move_timer.stop();
        self.message = None;

        match outcome {
            Some(Outcome::Win { winner, .. }) => {
                tracing::info!(winner = winner.player_id(), moves = self.game.history().len(), "game won");
            }
            Some(Outcome::Draw) => tracing::info!("game drawn"),
            None => {
                tracing::debug!(player = color.player_id(), row = pos.row, col = pos.col, "move played");
                self.move_timer.start();
            }
        }
        Ok(())
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        let mut game = self.game.clone();
        let engine = self.engine.clone();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&mut game);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    tracing::error!("agent thread ended without a result");
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result.clone());
            self.move_timer.set_ai_time(elapsed);

            match move_result.best_move {
                Some(pos) => {
                    if let Err(e) = self.execute_move(pos) {
                        tracing::error!("agent move rejected: {e}");
                        self.message = Some(format!("AI move rejected: {e}"));
                    }
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.is_game_over() || self.is_ai_thinking() {
            return;
        }

        let result = self.engine.get_move_with_stats(&mut self.game);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.game.history().is_empty() || self.is_ai_thinking() {
            return;
        }

        // For PvE, undo two moves (human + AI) unless that leaves the AI on turn
        let undo_count = match self.mode {
            GameMode::PvE { human_color } if self.game.history().len() >= 2 => {
                let last_mover = self.game.history().last().map(|&(_, c)| c);
                if last_mover == Some(human_color) { 1 } else { 2 }
            }
            _ => 1,
        };

        for _ in 0..undo_count {
            self.game.undo();
        }
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> AIEngine {
        AIEngine::new(5, 3).unwrap()
    }

    fn wait_for_ai(state: &mut MatchState) {
        while state.is_ai_thinking() {
            thread::sleep(Duration::from_millis(1));
            state.check_ai_result();
        }
    }

    #[test]
    fn test_human_then_ai_move() {
        let mut state = MatchState::new(engine(), GameMode::PvE { human_color: Stone::Black });
        assert!(state.is_human_turn());

        state.try_place_stone(Pos::new(2, 2)).unwrap();
        assert!(state.is_ai_turn());
        assert_eq!(state.try_place_stone(Pos::new(0, 0)), Err("Not your turn".to_string()));

        state.start_ai_thinking();
        wait_for_ai(&mut state);

        assert_eq!(state.game.history().len(), 2);
        assert!(state.is_human_turn());
        assert!(state.last_ai_result.as_ref().and_then(|r| r.best_move).is_some());
    }

    #[test]
    fn test_occupied_cell_message() {
        let mut state = MatchState::new(engine(), GameMode::PvP);
        state.try_place_stone(Pos::new(1, 1)).unwrap();
        let err = state.try_place_stone(Pos::new(1, 1)).unwrap_err();
        assert_eq!(err, "illegal move: cell (1, 1) is already occupied");
    }

    #[test]
    fn test_pvp_suggestion_leaves_board_untouched() {
        let mut state = MatchState::new(engine(), GameMode::PvP);
        state.try_place_stone(Pos::new(2, 1)).unwrap();
        state.try_place_stone(Pos::new(0, 0)).unwrap();
        state.try_place_stone(Pos::new(2, 2)).unwrap();
        let before = state.game.board().clone();

        state.request_suggestion();

        assert_eq!(state.game.board(), &before);
        let hint = state.suggested_move.unwrap();
        assert!(hint == Pos::new(2, 0) || hint == Pos::new(2, 3));
    }

    #[test]
    fn test_undo_in_pve_returns_to_human() {
        let mut state = MatchState::new(engine(), GameMode::PvE { human_color: Stone::Black });
        state.try_place_stone(Pos::new(2, 2)).unwrap();
        state.start_ai_thinking();
        wait_for_ai(&mut state);

        state.undo();
        assert!(state.game.history().is_empty());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_mode_from_config() {
        let mut config = AppConfig::default();
        config.gui.human_player = 2;
        assert_eq!(GameMode::from_config(&config), GameMode::PvE { human_color: Stone::White });
        config.gui.mode = StartMode::Pvp;
        assert_eq!(GameMode::from_config(&config), GameMode::PvP);
    }
}
