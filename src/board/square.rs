//! Board squares and their landing effects.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::num::NonZeroU32;

use crate::core::{LandingEffect, FINISH_SQUARE, START_SQUARE};
use crate::race::Player;

/// What a square does to whoever lands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareKind {
    /// Nothing happens.
    Ordinary,
    /// Jump forward to `destination`, burning `fuel_cost`.
    Wormhole { destination: usize, fuel_cost: NonZeroU32 },
    /// Fall back to `destination`, burning `fuel_cost`.
    Blackhole { destination: usize, fuel_cost: NonZeroU32 },
}

/// A single square of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    number: usize,
    kind: SquareKind,
}

impl Square {
    /// An ordinary square.
    #[must_use]
    pub const fn ordinary(number: usize) -> Self {
        Self { number, kind: SquareKind::Ordinary }
    }

    /// A square with the given behaviour.
    #[must_use]
    pub const fn new(number: usize, kind: SquareKind) -> Self {
        Self { number, kind }
    }

    /// Position on the board.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    #[must_use]
    pub fn kind(&self) -> SquareKind {
        self.kind
    }

    /// Display label: "Start", "Finish" or the square number.
    #[must_use]
    pub fn label(&self) -> Cow<'static, str> {
        match self.number {
            START_SQUARE => Cow::Borrowed("Start"),
            FINISH_SQUARE => Cow::Borrowed("Finish"),
            n => Cow::Owned(n.to_string()),
        }
    }

    /// Whether landing here moves the player.
    #[must_use]
    pub fn is_special(&self) -> bool {
        !matches!(self.kind, SquareKind::Ordinary)
    }

    /// Where a player landing here ends up.
    #[must_use]
    pub fn destination(&self) -> usize {
        match self.kind {
            SquareKind::Ordinary => self.number,
            SquareKind::Wormhole { destination, .. }
            | SquareKind::Blackhole { destination, .. } => destination,
        }
    }

    /// Apply this square's effect to a player who just landed on it.
    ///
    /// The jump always happens, even when the tank cannot cover the cost.
    pub fn on_land(&self, player: &mut Player) -> LandingEffect {
        match self.kind {
            SquareKind::Ordinary => LandingEffect::None,
            SquareKind::Wormhole { destination, fuel_cost } => {
                player.jump_to(destination);
                let fuel_burned = player.burn_fuel(fuel_cost);
                LandingEffect::Wormhole { destination, fuel_burned }
            }
            SquareKind::Blackhole { destination, fuel_cost } => {
                player.jump_to(destination);
                let fuel_burned = player.burn_fuel(fuel_cost);
                LandingEffect::Blackhole { destination, fuel_burned }
            }
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            SquareKind::Ordinary => write!(f, "{}", self.label()),
            SquareKind::Wormhole { destination, fuel_cost } => {
                write!(f, "{} (wormhole to {}, {} fuel)", self.label(), destination, fuel_cost)
            }
            SquareKind::Blackhole { destination, fuel_cost } => {
                write!(f, "{} (blackhole to {}, {} fuel)", self.label(), destination, fuel_cost)
            }
        }
    }
}
