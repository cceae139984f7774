//! Session phases.

use serde::{Deserialize, Serialize};

/// Where a session stands.
///
/// ```text
/// Setup --turn--> Rotating --last seat--> RoundComplete --turn--> Rotating
///   any state --finish reached / everyone out of fuel--> GameOver
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players are seated, nobody has moved yet.
    #[default]
    Setup,
    /// A round is in progress.
    Rotating,
    /// Every seat of the current round has been visited.
    RoundComplete,
    /// Somebody finished or everybody ran out of fuel.
    GameOver,
}

impl Phase {
    /// Phase after a turn, given the session flags.
    #[must_use]
    pub fn after_turn(game_complete: bool, round_finished: bool) -> Self {
        if game_complete {
            Phase::GameOver
        } else if round_finished {
            Phase::RoundComplete
        } else {
            Phase::Rotating
        }
    }

    /// Whether turns may still be taken.
    #[must_use]
    pub fn is_playable(self) -> bool {
        self != Phase::GameOver
    }
}
