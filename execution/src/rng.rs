//! Dice sources.
//!
//! The driver never touches randomness directly: it asks a [DiceSource] for
//! two faces per round. [GameRng] is the deterministic default, [ReplayDice]
//! plays back a recorded sequence, and any `FnMut() -> u8` closure works too.

use commonware_cryptography::sha256::Sha256;
use commonware_cryptography::Hasher;
use crapsim_types::DiceRoll;
use std::collections::VecDeque;

/// Anything that can throw a die.
pub trait DiceSource {
    /// Next die face. Values outside 1-6 are rejected by the shooter.
    fn roll_die(&mut self) -> u8;

    /// Two faces for one round.
    fn roll(&mut self) -> [u8; 2] {
        [self.roll_die(), self.roll_die()]
    }
}

impl<F: FnMut() -> u8> DiceSource for F {
    fn roll_die(&mut self) -> u8 {
        self()
    }
}

/// Deterministic random number generator.
///
/// Uses SHA256 hash chains seeded from a session seed and the hand number,
/// so every hand of a session can be reproduced on its own.
#[derive(Clone)]
pub struct GameRng {
    state: [u8; 32],
    index: usize,
}

impl GameRng {
    /// Create a new RNG from a session seed and hand number.
    pub fn new(seed: u64, hand: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(&seed.to_be_bytes());
        hasher.update(&hand.to_be_bytes());
        Self {
            state: hasher.finalize().0,
            index: 0,
        }
    }

    /// Get the next random byte.
    fn next_byte(&mut self) -> u8 {
        if self.index >= 32 {
            // Rehash to get more bytes
            let mut hasher = Sha256::new();
            hasher.update(&self.state);
            self.state = hasher.finalize().0;
            self.index = 0;
        }
        let result = self.state[self.index];
        self.index += 1;
        result
    }

    /// Get a random value in range [0, max).
    pub fn next_bounded(&mut self, max: u8) -> u8 {
        if max == 0 {
            return 0;
        }
        // Simple rejection sampling for unbiased distribution
        let limit = u8::MAX - (u8::MAX % max);
        loop {
            let value = self.next_byte();
            if value < limit {
                return value % max;
            }
        }
    }
}

impl DiceSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.next_bounded(6) + 1
    }
}

/// Plays back recorded rolls, then hands over to `fallback`.
pub struct ReplayDice<D> {
    faces: VecDeque<u8>,
    fallback: D,
}

impl<D: DiceSource> ReplayDice<D> {
    pub fn new(rolls: impl IntoIterator<Item = DiceRoll>, fallback: D) -> Self {
        let faces = rolls.into_iter().flat_map(DiceRoll::as_array).collect();
        Self { faces, fallback }
    }

    /// Recorded faces not yet consumed.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }

    /// Swaps the source used once the recording runs out.
    pub fn set_fallback(&mut self, fallback: D) {
        self.fallback = fallback;
    }
}

impl<D: DiceSource> DiceSource for ReplayDice<D> {
    fn roll_die(&mut self) -> u8 {
        match self.faces.pop_front() {
            Some(face) => face,
            None => self.fallback.roll_die(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_rng_deterministic() {
        let mut rng1 = GameRng::new(7, 1);
        let mut rng2 = GameRng::new(7, 1);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_game_rng_different_hands() {
        let mut rng1 = GameRng::new(7, 1);
        let mut rng2 = GameRng::new(7, 2);

        let seq1: Vec<u8> = (0..16).map(|_| rng1.roll_die()).collect();
        let seq2: Vec<u8> = (0..16).map(|_| rng2.roll_die()).collect();
        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_game_rng_dice() {
        let mut rng = GameRng::new(42, 0);

        // Test die rolls are in range, and every face shows up
        let mut seen = [false; 6];
        for _ in 0..1000 {
            let roll = rng.roll_die();
            assert!((1..=6).contains(&roll));
            seen[(roll - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_replay_then_fallback() {
        let rolls = [DiceRoll::new(3, 4), DiceRoll::new(1, 1)];
        let mut dice = ReplayDice::new(rolls, || 6u8);

        assert_eq!(dice.remaining(), 4);
        assert_eq!(dice.roll(), [3, 4]);
        assert_eq!(dice.roll(), [1, 1]);
        assert_eq!(dice.remaining(), 0);
        assert_eq!(dice.roll(), [6, 6]);
    }

    #[test]
    fn test_fallback_swapped_per_hand() {
        let mut dice = ReplayDice::new([DiceRoll::new(2, 2)], GameRng::new(5, 0));
        assert_eq!(dice.roll(), [2, 2]);

        dice.set_fallback(GameRng::new(5, 1));
        let mut expected = GameRng::new(5, 1);
        assert_eq!(dice.roll(), expected.roll());
    }

    #[test]
    fn test_closure_source() {
        let mut faces = [2u8, 5].into_iter().cycle();
        let mut source = move || faces.next().unwrap_or(1);
        assert_eq!(source.roll(), [2, 5]);
    }
}
