//! Read-only, serialisable view of a session for presentation layers.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::core::PlayerMap;
use crate::rules::Phase;

/// Everything a front end needs to draw the current state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: PlayerMap<Player>,
    pub turn_counter: usize,
    pub round: u32,
    pub phase: Phase,
    pub game_complete: bool,
    pub all_players_depleted: bool,
}

impl GameSnapshot {
    /// Names of the players on the finish square.
    pub fn finishers(&self) -> impl Iterator<Item = &str> {
        self.players.values().filter(|p| p.at_finish()).map(Player::name)
    }
}
