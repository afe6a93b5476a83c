use std::path::PathBuf;

use crate::board::Pos;

/// Errors an agent can report instead of a move.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("failed to read move input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before {name} chose a move")]
    InputClosed { name: String },

    #[error("{name} is waiting for a move from the board")]
    AwaitingInput { name: String },

    #[error("no empty cell left on the board")]
    BoardFull,
}

/// Errors when applying a move to a running game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is not running")]
    NotRunning,

    #[error("position {0} is outside the board")]
    OutOfBounds(Pos),

    #[error("the position {0} is not empty")]
    Occupied(Pos),

    #[error("it is not a manual player's turn")]
    NotManualTurn,
}

/// Errors while running one turn of a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("the {0:?} seat is busy choosing a move")]
    SeatBusy(crate::board::Stone),
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
