use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::BoardConfig;
use crate::simulation::SimulationConfig;
use crate::ui::TuiConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub simulation: SimulationConfig,
    pub tui: TuiConfig,
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.m == 0 {
            return Err(ConfigError::Validation("board.m must be >= 1".into()));
        }
        if self.board.rows < self.board.m {
            return Err(ConfigError::Validation(
                "board.rows must be >= board.m".into(),
            ));
        }
        if self.board.cols < self.board.m {
            return Err(ConfigError::Validation(
                "board.cols must be >= board.m".into(),
            ));
        }
        if self.simulation.num_games == 0 {
            return Err(ConfigError::Validation(
                "simulation.num_games must be > 0".into(),
            ));
        }
        if self.simulation.threads == 0 {
            return Err(ConfigError::Validation(
                "simulation.threads must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
