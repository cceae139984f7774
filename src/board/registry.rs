//! The race track: 56 squares with fixed wormholes and blackholes.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use super::layout::{validate_layout, HoleKind, HoleSpec, SPECIAL_SQUARES};
use super::square::{Square, SquareKind};
use crate::core::{GameError, Result, FINISH_SQUARE, NUMBER_OF_SQUARES, START_SQUARE};

/// The game board.
///
/// ## Example
///
/// ```
/// use space_race::board::Board;
///
/// let board = Board::set_up();
/// assert_eq!(board.len(), 56);
/// assert_eq!(board.square_at(2).unwrap().destination(), 22);
/// assert!(board.square_at(56).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// Build the board: every square ordinary, then the special squares
    /// from the fixed tables.
    #[must_use]
    pub fn set_up() -> Self {
        debug_assert!(validate_layout(&SPECIAL_SQUARES).is_ok());

        let mut squares: Vec<Square> = (0..NUMBER_OF_SQUARES).map(Square::ordinary).collect();
        for hole in &SPECIAL_SQUARES {
            squares[hole.origin] = special_square(hole);
        }

        Self { squares }
    }

    /// Look up a square by number.
    pub fn square_at(&self, index: usize) -> Result<&Square> {
        self.squares.get(index).ok_or(GameError::SquareOutOfRange(index))
    }

    /// The square everyone starts on.
    #[must_use]
    pub fn start(&self) -> &Square {
        &self.squares[START_SQUARE]
    }

    /// The winning square.
    #[must_use]
    pub fn finish(&self) -> &Square {
        &self.squares[FINISH_SQUARE]
    }

    /// All squares in board order.
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Wormholes and blackholes, in board order.
    pub fn special_squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().filter(|s| s.is_special())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::set_up()
    }
}

fn special_square(hole: &HoleSpec) -> Square {
    // validate_layout rejects zero costs
    let fuel_cost = NonZeroU32::new(hole.fuel_cost).unwrap_or(NonZeroU32::MIN);
    let kind = match hole.kind {
        HoleKind::Wormhole => SquareKind::Wormhole { destination: hole.destination, fuel_cost },
        HoleKind::Blackhole => SquareKind::Blackhole { destination: hole.destination, fuel_cost },
    };
    Square::new(hole.origin, kind)
}
