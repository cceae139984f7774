//! Fixed special-square tables.
//!
//! Each entry is `(origin, destination, fuel cost)`. For example
//! `(2, 22, 10)` is a wormhole on square 2 jumping to square 22 and burning
//! 10 units of fuel.

use crate::core::{GameError, Result, FINISH_SQUARE, START_SQUARE};

/// Which way a special square throws the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoleKind {
    Wormhole,
    Blackhole,
}

/// One row of a special-square table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleSpec {
    pub kind: HoleKind,
    pub origin: usize,
    pub destination: usize,
    pub fuel_cost: u32,
}

impl HoleSpec {
    const fn wormhole(origin: usize, destination: usize, fuel_cost: u32) -> Self {
        Self {
            kind: HoleKind::Wormhole,
            origin,
            destination,
            fuel_cost,
        }
    }

    const fn blackhole(origin: usize, destination: usize, fuel_cost: u32) -> Self {
        Self {
            kind: HoleKind::Blackhole,
            origin,
            destination,
            fuel_cost,
        }
    }
}

/// Eight wormholes and eight blackholes.
pub const SPECIAL_SQUARES: [HoleSpec; 16] = [
    HoleSpec::wormhole(2, 22, 10),
    HoleSpec::wormhole(3, 9, 3),
    HoleSpec::wormhole(5, 17, 6),
    HoleSpec::wormhole(12, 24, 6),
    HoleSpec::wormhole(16, 47, 15),
    HoleSpec::wormhole(29, 38, 4),
    HoleSpec::wormhole(40, 51, 5),
    HoleSpec::wormhole(45, 54, 4),
    HoleSpec::blackhole(10, 4, 6),
    HoleSpec::blackhole(26, 8, 18),
    HoleSpec::blackhole(30, 19, 11),
    HoleSpec::blackhole(35, 11, 24),
    HoleSpec::blackhole(36, 34, 2),
    HoleSpec::blackhole(49, 13, 36),
    HoleSpec::blackhole(52, 41, 11),
    HoleSpec::blackhole(53, 42, 11),
];

/// Check a special-square table against the board rules.
///
/// Origins and destinations must be interior squares (the finish is only
/// reached by rolling), origins must be unique, wormholes must jump forward
/// and blackholes backward, costs must be positive, and no destination may
/// itself be special (landing effects never chain).
pub fn validate_layout(holes: &[HoleSpec]) -> Result<()> {
    let invalid = |msg: String| Err(GameError::InvalidLayout(msg));

    for (i, hole) in holes.iter().enumerate() {
        if hole.origin <= START_SQUARE || hole.origin >= FINISH_SQUARE {
            return invalid(format!("special square {} is not an interior square", hole.origin));
        }
        if hole.destination >= FINISH_SQUARE {
            return invalid(format!(
                "square {} jumps past the last interior square to {}",
                hole.origin, hole.destination
            ));
        }
        if hole.fuel_cost == 0 {
            return invalid(format!("square {} has no fuel cost", hole.origin));
        }
        let forward = hole.destination > hole.origin;
        match hole.kind {
            HoleKind::Wormhole if !forward => {
                return invalid(format!("wormhole {} does not jump forward", hole.origin));
            }
            HoleKind::Blackhole if hole.destination >= hole.origin => {
                return invalid(format!("blackhole {} does not jump backward", hole.origin));
            }
            _ => {}
        }
        if holes[..i].iter().any(|other| other.origin == hole.origin) {
            return invalid(format!("square {} is listed twice", hole.origin));
        }
        if holes.iter().any(|other| other.origin == hole.destination) {
            return invalid(format!(
                "square {} leads to special square {}",
                hole.origin, hole.destination
            ));
        }
    }

    Ok(())
}
