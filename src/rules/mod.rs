//! Race rules that sit above the board: session phases and the game outcome.

pub mod outcome;
pub mod phase;

pub use outcome::GameOutcome;
pub use phase::Phase;
