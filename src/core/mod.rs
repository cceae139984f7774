//! Core engine types: seats, dice, RNG, configuration, turn records, errors.
//!
//! Nothing in here knows about the board layout; the board and the race
//! rules build on these types.

pub mod action;
pub mod config;
pub mod dice;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{LandingEffect, Move, SkipReason, TurnRecord};
pub use config::{
    validate_player_count, GameConfig, FINISH_SQUARE, INITIAL_FUEL_AMOUNT, MAX_PLAYERS, MIN_PLAYERS,
    NUMBER_OF_SQUARES, SEAT_NAMES, START_SQUARE,
};
pub use dice::{Die, LoadedDie, Roll};
pub use error::{GameError, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
