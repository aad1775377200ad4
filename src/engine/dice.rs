//! Dice sources.
//!
//! The engine asks for one roll per turn and trusts the source to return a
//! value in `1..=6`. A source that returns `None` has run dry, which ends the
//! game with an error.

use std::collections::VecDeque;

use crate::core::GameRng;

/// Faces on the standard die.
pub const DIE_SIDES: u32 = 6;

/// Anything that can produce dice rolls on demand.
///
/// Closures returning `Option<u32>` implement this directly:
///
/// ```
/// use snakes_ladders::engine::DiceSource;
///
/// let mut always_three = || Some(3u32);
/// assert_eq!(always_three.roll(), Some(3));
/// ```
pub trait DiceSource {
    /// Produce the next roll, or `None` if no more rolls are available.
    fn roll(&mut self) -> Option<u32>;
}

impl<F> DiceSource for F
where
    F: FnMut() -> Option<u32>,
{
    fn roll(&mut self) -> Option<u32> {
        self()
    }
}

/// A fair six-sided die over a seeded [`GameRng`]. Never runs dry.
#[derive(Clone, Debug)]
pub struct RandomDice {
    rng: GameRng,
}

impl RandomDice {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// A die whose rolls are fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}

impl DiceSource for RandomDice {
    fn roll(&mut self) -> Option<u32> {
        Some(self.rng.roll_die(DIE_SIDES))
    }
}

/// A fixed sequence of rolls, for tests and replays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Rolls not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> Option<u32> {
        self.rolls.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_dice() {
        let mut dice = ScriptedDice::new([2, 5]);
        assert_eq!(dice.remaining(), 2);
        assert_eq!(dice.roll(), Some(2));
        assert_eq!(dice.roll(), Some(5));
        assert_eq!(dice.roll(), None);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_random_dice_range() {
        let mut dice = RandomDice::seeded(42);
        for _ in 0..500 {
            let roll = dice.roll().unwrap();
            assert!((1..=DIE_SIDES).contains(&roll));
        }
    }

    #[test]
    fn test_random_dice_deterministic() {
        let mut a = RandomDice::seeded(9);
        let mut b = RandomDice::seeded(9);
        for _ in 0..20 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_closure_source() {
        let mut rolls = vec![4u32, 1].into_iter();
        let mut dice = move || rolls.next();
        assert_eq!(dice.roll(), Some(4));
        assert_eq!(dice.roll(), Some(1));
        assert_eq!(dice.roll(), None);
    }
}
