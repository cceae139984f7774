//! Game constants and session configuration.
//!
//! The board and the fuel rules are fixed. The only things a session
//! chooses are how many players take part and, optionally, the dice seed.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Number of squares on the board.
pub const NUMBER_OF_SQUARES: usize = 56;

/// Square every player starts on.
pub const START_SQUARE: usize = 0;

/// Last square; reaching it wins.
pub const FINISH_SQUARE: usize = NUMBER_OF_SQUARES - 1;

/// Fuel each player starts a session with.
pub const INITIAL_FUEL_AMOUNT: u32 = 60;

/// Fewest players in a session.
pub const MIN_PLAYERS: usize = 2;

/// Most players in a session.
pub const MAX_PLAYERS: usize = 6;

/// Player names, assigned by seat.
pub const SEAT_NAMES: [&str; MAX_PLAYERS] = ["One", "Two", "Three", "Four", "Five", "Six"];

/// Check that `count` is a playable number of players.
pub fn validate_player_count(count: usize) -> Result<usize> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(count)
    } else {
        Err(GameError::InvalidPlayerCount(count))
    }
}

/// Session configuration.
///
/// ```
/// use space_race::core::GameConfig;
///
/// let config = GameConfig::new(4).unwrap().with_seed(7);
/// assert_eq!(config.player_count, 4);
/// assert_eq!(config.seed, Some(7));
///
/// assert!(GameConfig::new(1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-6).
    pub player_count: usize,

    /// Dice seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration for `player_count` players.
    pub fn new(player_count: usize) -> Result<Self> {
        Ok(Self {
            player_count: validate_player_count(player_count)?,
            seed: None,
        })
    }

    /// Fix the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_constants() {
        assert_eq!(START_SQUARE, 0);
        assert_eq!(FINISH_SQUARE, 55);
    }

    #[test]
    fn test_validate_player_count() {
        for count in MIN_PLAYERS..=MAX_PLAYERS {
            assert_eq!(validate_player_count(count), Ok(count));
        }
        assert_eq!(validate_player_count(0), Err(GameError::InvalidPlayerCount(0)));
        assert_eq!(validate_player_count(1), Err(GameError::InvalidPlayerCount(1)));
        assert_eq!(validate_player_count(7), Err(GameError::InvalidPlayerCount(7)));
    }

    #[test]
    fn test_game_config() {
        let config = GameConfig::new(3).unwrap();
        assert_eq!(config.player_count, 3);
        assert_eq!(config.seed, None);

        let seeded = config.with_seed(99);
        assert_eq!(seeded.seed, Some(99));
        assert_eq!(seeded.player_count, 3);
    }

    #[test]
    fn test_game_config_rejects_bad_count() {
        assert_eq!(GameConfig::new(8), Err(GameError::InvalidPlayerCount(8)));
    }
}
