//! Turn records: what happened when a seat took its turn.
//!
//! A turn either moves the player (dice, landing square, landing effect)
//! or is skipped because the player cannot move any more. The engine keeps
//! every record in the session history.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Effect of the square a player landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandingEffect {
    /// Ordinary square, nothing happened.
    None,
    /// Jumped forward through a wormhole.
    Wormhole {
        destination: usize,
        /// Fuel actually burned; less than the cost if the tank ran dry.
        fuel_burned: u32,
    },
    /// Fell back through a blackhole.
    Blackhole { destination: usize, fuel_burned: u32 },
}

impl LandingEffect {
    /// Fuel burned by this effect.
    #[must_use]
    pub fn fuel_burned(&self) -> u32 {
        match self {
            LandingEffect::None => 0,
            LandingEffect::Wormhole { fuel_burned, .. }
            | LandingEffect::Blackhole { fuel_burned, .. } => *fuel_burned,
        }
    }
}

/// Why a player did not move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipReason {
    /// No fuel left.
    OutOfFuel,
    /// Already on the finish square.
    AtFinish,
}

/// Result of one `play` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// The player could not move; nothing changed.
    Skipped(SkipReason),
    /// The player rolled and moved.
    Advanced {
        /// Faces of the two dice.
        dice: (u8, u8),
        /// Square before the roll.
        from: usize,
        /// Square reached by the roll, clamped to the finish.
        landed: usize,
        /// Square after the landing effect.
        to: usize,
        effect: LandingEffect,
    },
}

impl Move {
    /// Squares the dice asked for (0 for a skipped turn).
    #[must_use]
    pub fn distance(&self) -> u32 {
        match self {
            Move::Skipped(_) => 0,
            Move::Advanced { dice: (a, b), .. } => u32::from(*a) + u32::from(*b),
        }
    }

    /// Whether the player actually rolled.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Move::Skipped(_))
    }
}

/// A move attributed to a seat and a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Round number (starts at 1).
    pub round: u32,
    /// Seat that acted.
    pub player: PlayerId,
    pub movement: Move,
}
