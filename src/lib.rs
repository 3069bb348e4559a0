//! Greedy move-selection agent for N-in-a-row games (Gomoku family)
//!
//! Given a square board and the player to move, the agent returns one empty
//! cell:
//! - Any board side up to 64, any winning line length
//! - Player 1 is Black and moves first, player 2 is White
//! - One ply deep: every empty cell is tried once and the board is scored
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with bitboards and scoped placement
//! - [`eval`]: Directional line scanning and the position score
//! - [`search`]: Candidate ordering (center and neighbourhood priority)
//! - [`engine`]: Decision engine combining ordering and evaluation
//! - [`game`]: The state a decision reads, and a reference game loop
//! - [`rules`]: Win detection
//! - [`config`]: TOML configuration
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Game, GameState, Pos, Stone};
//!
//! let engine = AIEngine::new(9, 5).unwrap();
//! let mut game = Game::new(engine.config());
//!
//! game.play(Pos::new(4, 4)).unwrap();
//!
//! // Agent answers as White
//! if let Some(pos) = engine.get_move(&mut game) {
//!     game.play(pos).unwrap();
//!     assert_eq!(game.board().get(pos), Stone::White);
//! }
//! ```
//!
//! # Evaluation
//!
//! For each candidate cell the mover's stone is placed provisionally and the
//! board is scored as the mover's total minus the opponent's total. Each
//! stone contributes one line score per direction:
//! 1. Winning length reached: 200 000
//! 2. One short, open both ends: 20 000
//! 3. One short, open one end: 10 000
//! 4. Longer lines scale with their length, doubled when open
//! 5. Lone stones score by open ends only

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone};
pub use config::{AgentConfig, AppConfig};
pub use engine::{AIEngine, MoveResult};
pub use error::{BoardError, ConfigError, GameError};
pub use game::{Game, GameState, Outcome};
