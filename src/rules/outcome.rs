//! End-of-game result.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Result of a completed game.
///
/// Several players can finish in the same round; all of them win. When
/// everyone runs dry before anyone finishes, `winners` is empty and
/// `all_depleted` is set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Seats on the finish square, in seat order.
    pub winners: SmallVec<[PlayerId; 6]>,
    /// Every player ran out of fuel.
    pub all_depleted: bool,
}

impl GameOutcome {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }

    /// Nobody reached the finish.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_is_winner() {
        let outcome = GameOutcome {
            winners: smallvec![PlayerId::new(0), PlayerId::new(2)],
            all_depleted: false,
        };
        assert!(outcome.is_winner(PlayerId::new(0)));
        assert!(!outcome.is_winner(PlayerId::new(1)));
        assert!(outcome.is_winner(PlayerId::new(2)));
        assert!(!outcome.is_draw());
    }

    #[test]
    fn test_depleted_draw() {
        let outcome = GameOutcome { winners: SmallVec::new(), all_depleted: true };
        assert!(outcome.is_draw());
        assert!(!outcome.is_winner(PlayerId::new(0)));
    }
}
