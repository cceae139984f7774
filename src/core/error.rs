//! Error type shared by the whole engine.

use thiserror::Error;

use super::config::{FINISH_SQUARE, MAX_PLAYERS, MIN_PLAYERS};
use super::player::PlayerId;

/// Everything the engine can refuse to do.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("player count {0} is outside {min}..={max}", min = MIN_PLAYERS, max = MAX_PLAYERS)]
    InvalidPlayerCount(usize),

    #[error("fuel consumption amount must be positive")]
    InvalidFuelAmount,

    #[error("square {0} is off the board (0..={finish})", finish = FINISH_SQUARE)]
    SquareOutOfRange(usize),

    #[error("a player needs a non-empty name")]
    MissingName,

    #[error("no player at {0}")]
    NoSuchPlayer(PlayerId),

    #[error("the game is already over")]
    GameOver,

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;
