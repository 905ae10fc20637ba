use std::path::PathBuf;

use crate::game::PieceColor;

/// Errors raised by a Connect-M board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {rows}x{cols} for m = {m} (rows and cols must be >= m >= 1)")]
    InvalidDimensions { rows: usize, cols: usize, m: usize },

    #[error("cannot drop a piece in column {col}")]
    IllegalMove { col: usize },
}

/// Errors that can occur while a game is being driven by bots.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("{color:?} policy found no droppable column on an unfinished board")]
    NoMove { color: PieceColor },

    #[error("game did not finish within {limit} moves")]
    MoveLimit { limit: usize },

    #[error("board error: {0}")]
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
