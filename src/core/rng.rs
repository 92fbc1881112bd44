//! Randomness for draws and reshuffles.
//!
//! The deck never reaches for a global generator. It is handed a
//! `RandomSource`, which lets tests script exact draw orders and lets the
//! CLI replay a session from a seed.
//!
//! ```
//! use card_selector::core::{DeckRng, RandomSource};
//!
//! let mut rng1 = DeckRng::new(42);
//! let mut rng2 = DeckRng::new(42);
//!
//! // Same seed, same sequence
//! assert_eq!(rng1.pick_index(10), rng2.pick_index(10));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::card::Card;

/// A uniform randomness provider for the deck.
///
/// Implementations must pick every index with equal probability and apply
/// a uniform permutation on `shuffle`.
pub trait RandomSource {
    /// Pick an index in `0..len`. Only called with `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Permute `cards` in place.
    fn shuffle(&mut self, cards: &mut [Card]);
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn shuffle(&mut self, cards: &mut [Card]) {
        (**self).shuffle(cards);
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn shuffle(&mut self, cards: &mut [Card]) {
        (**self).shuffle(cards);
    }
}

/// Seeded RNG backed by ChaCha8.
///
/// Same seed produces the identical sequence of draws and reshuffles.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a freshly generated seed.
    ///
    /// The seed is kept so a surprising session can be reproduced.
    #[must_use]
    pub fn from_random_seed() -> Self {
        let seed: u64 = rand::random();
        log::debug!("Seeding deck RNG with {seed}.");
        Self::new(seed)
    }

    /// Use `seed` if given, otherwise a random one.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_random_seed(),
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for DeckRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<Card> {
        (0..n).map(|i| Card::new(format!("card-{i}")).unwrap()).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = DeckRng::new(42);
        let mut rng2 = DeckRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.pick_index(1000), rng2.pick_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DeckRng::new(1);
        let mut rng2 = DeckRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.pick_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.pick_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_pick_index_in_range() {
        let mut rng = DeckRng::new(7);
        for len in 1..50 {
            assert!(rng.pick_index(len) < len);
        }
        assert_eq!(rng.pick_index(1), 0);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = DeckRng::new(42);
        let mut data = cards(10);
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        let mut sorted = original;
        sorted.sort();
        assert_eq!(data, sorted);
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(DeckRng::new(9).seed(), 9);
        assert_eq!(DeckRng::from_optional_seed(Some(3)).seed(), 3);
    }

    #[test]
    fn test_works_through_mut_ref() {
        fn pick<R: RandomSource>(mut rng: R) -> usize {
            rng.pick_index(5)
        }

        let mut rng = DeckRng::new(42);
        let mut same = DeckRng::new(42);
        assert_eq!(pick(&mut rng), same.pick_index(5));
    }
}
