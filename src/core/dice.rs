//! Six-sided dice.
//!
//! Everything that moves a player goes through the [`Roll`] trait, so a
//! session can run on random [`Die`]s or on a [`LoadedDie`] with scripted
//! faces for tests and replays.

use smallvec::SmallVec;

use super::rng::GameRng;

/// Lowest face of a die.
pub const MIN_FACE: u8 = 1;
/// Highest face of a die.
pub const MAX_FACE: u8 = 6;

/// Something that produces die faces in `1..=6`.
pub trait Roll {
    /// Roll once.
    fn roll(&mut self) -> u8;
}

/// A fair die backed by its own RNG stream.
#[derive(Clone, Debug)]
pub struct Die {
    rng: GameRng,
}

impl Die {
    /// Create a die drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Derive the two independent dice of a session from one generator.
    #[must_use]
    pub fn pair(session: &GameRng) -> (Die, Die) {
        (
            Die::new(session.for_context("die-1")),
            Die::new(session.for_context("die-2")),
        )
    }
}

impl Roll for Die {
    fn roll(&mut self) -> u8 {
        self.rng.roll_d6()
    }
}

/// A die that cycles through a fixed list of faces.
///
/// ```
/// use space_race::core::{LoadedDie, Roll};
///
/// let mut die = LoadedDie::new([1, 6]);
/// assert_eq!(die.roll(), 1);
/// assert_eq!(die.roll(), 6);
/// assert_eq!(die.roll(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedDie {
    faces: SmallVec<[u8; 6]>,
    next: usize,
}

impl LoadedDie {
    /// Create a loaded die from a non-empty list of faces.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: SmallVec<[u8; 6]> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "A loaded die needs at least one face");
        assert!(
            faces.iter().all(|f| (MIN_FACE..=MAX_FACE).contains(f)),
            "Die faces must be between 1 and 6"
        );

        Self { faces, next: 0 }
    }

    /// A die that always shows `face`.
    pub fn constant(face: u8) -> Self {
        Self::new([face])
    }
}

impl Roll for LoadedDie {
    fn roll(&mut self) -> u8 {
        let face = self.faces[self.next];
        self.next = (self.next + 1) % self.faces.len();
        face
    }
}

impl<R: Roll + ?Sized> Roll for &mut R {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_rolls_in_range() {
        let mut die = Die::new(GameRng::new(3));
        for _ in 0..200 {
            let face = die.roll();
            assert!((MIN_FACE..=MAX_FACE).contains(&face));
        }
    }

    #[test]
    fn test_pair_is_independent_and_deterministic() {
        let (mut a1, mut b1) = Die::pair(&GameRng::new(11));
        let (mut a2, mut b2) = Die::pair(&GameRng::new(11));

        let first: Vec<_> = (0..32).map(|_| a1.roll()).collect();
        let second: Vec<_> = (0..32).map(|_| b1.roll()).collect();
        assert_ne!(first, second);

        assert_eq!(first, (0..32).map(|_| a2.roll()).collect::<Vec<_>>());
        assert_eq!(second, (0..32).map(|_| b2.roll()).collect::<Vec<_>>());
    }

    #[test]
    fn test_loaded_die_cycles() {
        let mut die = LoadedDie::new([2, 4, 6]);
        let rolls: Vec<_> = (0..7).map(|_| die.roll()).collect();
        assert_eq!(rolls, vec![2, 4, 6, 2, 4, 6, 2]);
    }

    #[test]
    fn test_constant_die() {
        let mut die = LoadedDie::constant(5);
        assert!((0..10).all(|_| die.roll() == 5));
    }

    #[test]
    fn test_roll_through_mut_ref() {
        fn roll_twice(mut die: impl Roll) -> u8 {
            die.roll() + die.roll()
        }

        let mut die = LoadedDie::new([1, 2]);
        assert_eq!(roll_twice(&mut die), 3);
        assert_eq!(die.roll(), 1);
    }

    #[test]
    #[should_panic(expected = "Die faces must be between 1 and 6")]
    fn test_loaded_die_rejects_bad_face() {
        LoadedDie::new([0]);
    }

    #[test]
    #[should_panic(expected = "A loaded die needs at least one face")]
    fn test_loaded_die_rejects_empty() {
        LoadedDie::new(Vec::new());
    }
}
