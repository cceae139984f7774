//! The board: squares, the fixed special-square tables and lookup.
//!
//! ## Key Types
//!
//! - `Square`: A numbered square with its landing behaviour
//! - `SquareKind`: Ordinary, wormhole or blackhole
//! - `Board`: The 56-square track
//! - `HoleSpec`: One row of the special-square tables

pub mod layout;
pub mod registry;
pub mod square;

pub use layout::{validate_layout, HoleKind, HoleSpec, SPECIAL_SQUARES};
pub use registry::Board;
pub use square::{Square, SquareKind};
