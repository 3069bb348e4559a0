//! Error types for board import, the game loop and configuration

use std::path::PathBuf;

/// Errors from importing or mutating a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 3 occupancy layers, got {0}")]
    LayerCount(usize),

    #[error("layer {layer} is not a {size}x{size} grid")]
    LayerShape { layer: usize, size: usize },

    #[error("cell ({row}, {col}) must be set in exactly one layer, got flags {flags:?}")]
    CellInvariant { row: usize, col: usize, flags: [u8; 3] },

    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
}

/// Errors from the reference game loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,

    #[error("illegal move: {0}")]
    Board(#[from] BoardError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
