//! TOML configuration
//!
//! `[agent]` sets the board side and winning length, `[gui]` the starting
//! mode. Every key is optional and falls back to its default.

use std::path::Path;

use crate::board::MAX_BOARD_SIZE;
use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub agent: AgentConfig,
    pub gui: GuiConfig,
}

/// Game geometry shared by the agent and the game it plays.
///
/// Only obtainable through [`AgentConfig::new`], [`Default`] or
/// deserialization, each of which yields a validated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "AgentToml")]
pub struct AgentConfig {
    /// Side length of the square board
    board_size: usize,
    /// Stones in a row needed to win
    win_size: usize,
}

/// `[agent]` table as written, checked before it becomes an [`AgentConfig`]
#[derive(serde::Deserialize)]
#[serde(default)]
struct AgentToml {
    board_size: usize,
    win_size: usize,
}

impl Default for AgentToml {
    fn default() -> Self {
        let AgentConfig { board_size, win_size } = AgentConfig::default();
        AgentToml { board_size, win_size }
    }
}

impl TryFrom<AgentToml> for AgentConfig {
    type Error = ConfigError;

    fn try_from(raw: AgentToml) -> Result<Self, Self::Error> {
        AgentConfig::new(raw.board_size, raw.win_size)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            board_size: 15,
            win_size: 5,
        }
    }
}

impl AgentConfig {
    /// Build and validate a configuration.
    pub fn new(board_size: usize, win_size: usize) -> Result<Self, ConfigError> {
        let config = AgentConfig { board_size, win_size };
        config.validate()?;
        Ok(config)
    }

    #[inline]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    #[inline]
    pub fn win_size(&self) -> usize {
        self.win_size
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "agent.board_size must be in 1..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.win_size == 0 {
            return Err(ConfigError::Validation(
                "agent.win_size must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

/// How the GUI pairs players with the agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartMode {
    /// Human against the agent
    #[default]
    Pve,
    /// Two humans at one screen, hints on request
    Pvp,
}

/// GUI settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Mode of the first game
    pub mode: StartMode,
    /// Player id (1 or 2) the human plays in PvE
    pub human_player: u8,
}

impl Default for GuiConfig {
    fn default() -> Self {
        GuiConfig {
            mode: StartMode::Pve,
            human_player: 1,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.agent.validate()?;
        if !(1..=2).contains(&self.gui.human_player) {
            return Err(ConfigError::Validation(
                "gui.human_player must be 1 or 2".into(),
            ));
        }
        Ok(())
    }
}
