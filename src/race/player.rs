//! A racer: name, square, rocket fuel.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::board::{Board, Square};
use crate::core::{
    GameError, LandingEffect, Move, PlayerId, Result, Roll, SkipReason, FINISH_SQUARE,
    INITIAL_FUEL_AMOUNT, START_SQUARE,
};

/// Colour of a player's token.
///
/// Presentation metadata only; the engine never looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenColour {
    Yellow,
    Red,
    Orange,
    White,
    Green,
    DarkViolet,
}

impl TokenColour {
    /// Default palette, in seat order.
    pub const PALETTE: [TokenColour; 6] = [
        TokenColour::Yellow,
        TokenColour::Red,
        TokenColour::Orange,
        TokenColour::White,
        TokenColour::Green,
        TokenColour::DarkViolet,
    ];

    /// Default colour for a seat.
    #[must_use]
    pub fn for_seat(seat: PlayerId) -> Self {
        Self::PALETTE[seat.index() % Self::PALETTE.len()]
    }
}

/// A player on the board.
///
/// Invariants: `has_power() == (fuel() > 0)` and
/// `at_finish() == (position() == FINISH_SQUARE)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    position: usize,
    fuel: u32,
    has_power: bool,
    at_finish: bool,
    token_colour: Option<TokenColour>,
}

impl Player {
    /// Create a player on the start square with a full tank.
    ///
    /// A blank name is rejected.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::MissingName);
        }

        Ok(Self {
            name,
            position: START_SQUARE,
            fuel: INITIAL_FUEL_AMOUNT,
            has_power: true,
            at_finish: false,
            token_colour: None,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current square number.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Fuel remaining.
    #[must_use]
    pub fn fuel(&self) -> u32 {
        self.fuel
    }

    /// Whether the player still has fuel and can move.
    #[must_use]
    pub fn has_power(&self) -> bool {
        self.has_power
    }

    /// Whether the player reached the finish square.
    #[must_use]
    pub fn at_finish(&self) -> bool {
        self.at_finish
    }

    #[must_use]
    pub fn token_colour(&self) -> Option<TokenColour> {
        self.token_colour
    }

    pub fn set_token_colour(&mut self, colour: Option<TokenColour>) {
        self.token_colour = colour;
    }

    /// The square the player stands on.
    pub fn location<'b>(&self, board: &'b Board) -> Result<&'b Square> {
        board.square_at(self.position)
    }

    /// Take a turn: roll both dice, move, then apply the landing square.
    ///
    /// A player without power, or already at the finish, does not roll and
    /// the turn is reported as skipped. Rolls that overshoot the finish stop
    /// on it.
    pub fn play(
        &mut self,
        board: &Board,
        mut die1: impl Roll,
        mut die2: impl Roll,
    ) -> Result<Move> {
        if self.at_finish {
            return Ok(Move::Skipped(SkipReason::AtFinish));
        }
        if !self.has_power {
            return Ok(Move::Skipped(SkipReason::OutOfFuel));
        }

        let dice = (die1.roll(), die2.roll());
        let from = self.position;
        let target = from + usize::from(dice.0) + usize::from(dice.1);

        if target >= FINISH_SQUARE {
            self.position = FINISH_SQUARE;
            self.at_finish = true;
        } else {
            self.position = target;
        }

        let landed = self.position;
        let square = *board.square_at(landed)?;
        let effect = square.on_land(self);

        match effect {
            LandingEffect::None => {
                log::debug!("{} rolled {}+{}: {} -> {}", self.name, dice.0, dice.1, from, landed);
            }
            LandingEffect::Wormhole { destination, fuel_burned }
            | LandingEffect::Blackhole { destination, fuel_burned } => {
                log::debug!(
                    "{} rolled {}+{}: {} -> {}, jumped to {} burning {} fuel ({} left)",
                    self.name, dice.0, dice.1, from, landed, destination, fuel_burned, self.fuel
                );
            }
        }

        Ok(Move::Advanced {
            dice,
            from,
            landed,
            to: self.position,
            effect,
        })
    }

    /// Burn `amount` fuel.
    ///
    /// If the tank holds no more than `amount`, it is emptied and the player
    /// loses power. Returns the fuel actually burned.
    pub fn consume_fuel(&mut self, amount: u32) -> Result<u32> {
        let amount = NonZeroU32::new(amount).ok_or(GameError::InvalidFuelAmount)?;
        Ok(self.burn_fuel(amount))
    }

    pub(crate) fn burn_fuel(&mut self, amount: NonZeroU32) -> u32 {
        let amount = amount.get();
        if self.fuel > amount {
            self.fuel -= amount;
            amount
        } else {
            let burned = self.fuel;
            self.fuel = 0;
            self.has_power = false;
            burned
        }
    }

    /// Set the tank to `fuel`, updating power to match.
    pub fn refuel(&mut self, fuel: u32) {
        self.fuel = fuel;
        self.has_power = fuel > 0;
    }

    pub(crate) fn jump_to(&mut self, square: usize) {
        self.position = square;
        self.at_finish = square == FINISH_SQUARE;
    }
}
