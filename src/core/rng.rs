//! Random sources for shuffling and the starting-player coin flip.
//!
//! ## Key Types
//!
//! - `Randomizer`: The injectable seam. The engine and decks only ever talk
//!   to this trait, never to a global RNG.
//! - `GameRng`: Seeded ChaCha8 implementation. Same seed, same game.
//! - `ScriptedRandomizer`: Never reorders anything and replays a fixed list
//!   of coin flips. For scripted scenarios and tests.
//!
//! ```
//! use automation_game::core::{GameRng, Randomizer};
//! use automation_game::cards::{Card, CardType};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut left = vec![Card::new(CardType::Bitcoin), Card::new(CardType::Method)];
//! let mut right = left.clone();
//! a.shuffle_cards(&mut left);
//! b.shuffle_cards(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Source of the only two kinds of randomness the game needs.
pub trait Randomizer {
    /// Put `cards` into a uniformly random order.
    fn shuffle_cards(&mut self, cards: &mut [Card]);

    /// Unbiased coin flip.
    fn coin_flip(&mut self) -> bool;
}

impl<R: Randomizer + ?Sized> Randomizer for &mut R {
    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        (**self).shuffle_cards(cards);
    }

    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Randomizer for GameRng {
    fn shuffle_cards(&mut self, cards: &mut [Card]) {
        self.shuffle(cards);
    }

    fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position so capture and restore cost the same no matter
/// how far the game has progressed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// A randomizer that leaves card order untouched.
///
/// Coin flips are replayed from `flips` in order, cycling when exhausted;
/// an empty script always answers `true`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandomizer {
    flips: Vec<bool>,
    next_flip: usize,
    shuffles: usize,
}

impl ScriptedRandomizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay these coin flips.
    #[must_use]
    pub fn with_flips(flips: impl Into<Vec<bool>>) -> Self {
        Self {
            flips: flips.into(),
            ..Self::default()
        }
    }

    /// How many shuffles were requested so far.
    #[must_use]
    pub fn shuffle_count(&self) -> usize {
        self.shuffles
    }
}

impl Randomizer for ScriptedRandomizer {
    fn shuffle_cards(&mut self, _cards: &mut [Card]) {
        self.shuffles += 1;
    }

    fn coin_flip(&mut self) -> bool {
        if self.flips.is_empty() {
            return true;
        }
        let flip = self.flips[self.next_flip % self.flips.len()];
        self.next_flip += 1;
        flip
    }
}
