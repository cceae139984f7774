//! # space-race
//!
//! A board race for 2 to 6 players. Each turn a player rolls two dice and
//! moves along a 56-square track. Wormholes throw players forward and
//! blackholes throw them back; both burn rocket fuel. The first player to
//! reach the finish wins, and a player with an empty tank is out.
//!
//! ## Design Principles
//!
//! 1. **One session value**: board, players, dice, turn cursor and flags
//!    live in a single `SpaceRaceGame`. No global state.
//!
//! 2. **Squares are data**: ordinary, wormhole and blackhole squares are one
//!    enum, built from a static table.
//!
//! 3. **Injectable dice**: everything rolls through the `Roll` trait, so
//!    tests and replays can use loaded dice.
//!
//! ## Modules
//!
//! - `core`: Seats, dice, RNG, configuration, turn records, errors
//! - `board`: Squares, special-square tables, the board
//! - `race`: Players and the game session
//! - `rules`: Session phases and the game outcome

pub mod board;
pub mod core;
pub mod race;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Die, GameConfig, GameError, GameRng, LandingEffect, LoadedDie, Move, PlayerId, PlayerMap,
    Result, Roll, SkipReason, TurnRecord,
};

pub use crate::board::{Board, Square, SquareKind};

pub use crate::race::{GameSnapshot, Player, SpaceRaceGame, TokenColour};

pub use crate::rules::{GameOutcome, Phase};
