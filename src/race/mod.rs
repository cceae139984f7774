//! The race itself: players and the game session that moves them.
//!
//! ## Key Types
//!
//! - `Player`: Name, square, fuel, power and finish state
//! - `SpaceRaceGame`: One session, owning board, players, dice and turn order
//! - `GameSnapshot`: Serialisable read-only view for front ends

pub mod game;
pub mod player;
pub mod snapshot;

pub use game::SpaceRaceGame;
pub use player::{Player, TokenColour};
pub use snapshot::GameSnapshot;
