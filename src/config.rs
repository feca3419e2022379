use std::path::Path;

use crate::error::ConfigError;
use crate::game::WIN_LENGTH;

/// Board geometry and opponent selection.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,
    /// Opponent strategy: "minimax" or "random".
    pub opponent: String,
    /// Seed for the random opponent; fresh entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: 7,
            opponent: "minimax".to_string(),
            seed: None,
        }
    }
}

/// Search engine tuning.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies the minimax agent looks ahead.
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { depth: 4 }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.board_size < WIN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "game.board_size must be >= {WIN_LENGTH}"
            )));
        }
        if self.search.depth == 0 {
            return Err(ConfigError::Validation(
                "search.depth must be > 0".into(),
            ));
        }
        match self.game.opponent.as_str() {
            "minimax" | "random" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "game.opponent must be 'minimax' or 'random', got '{other}'"
                )));
            }
        }
        Ok(())
    }
}
