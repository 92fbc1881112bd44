//! The deck session state machine.
//!
//! A `DeckSession` partitions the loaded multiset of cards into three pools
//! and only ever relocates cards between them:
//!
//! - **active**: not yet drawn
//! - **current**: the one card drawn and not yet discarded
//! - **discarded**: draw history, oldest first
//!
//! No operation creates or destroys a card. `load` replaces the multiset,
//! everything else moves cards around inside it.
//!
//! ## Usage
//!
//! ```
//! use card_selector::core::{cards_from_names, DeckRng};
//! use card_selector::deck::DeckSession;
//!
//! let mut session = DeckSession::new(DeckRng::new(42));
//! session.load(cards_from_names(["A", "B", "C"]).unwrap());
//!
//! let drawn = session.draw().unwrap().unwrap();
//! assert_eq!(session.remaining(), 2);
//! assert_eq!(session.current(), Some(&drawn));
//!
//! assert!(session.discard());
//! assert_eq!(session.discarded(), &[drawn]);
//!
//! assert!(session.reset());
//! assert_eq!(session.remaining(), 3);
//! ```

use rustc_hash::FxHashMap;

use crate::core::{Card, DeckError, DeckRng, Fallible, RandomSource};

use super::state::DeckState;
use super::view::DeckView;

/// In-memory deck with active, current and discarded pools.
///
/// Randomness comes from the injected `RandomSource`; the session holds no
/// global state and is not internally synchronized (see `SharedDeck`).
#[derive(Clone, Debug)]
pub struct DeckSession<R = DeckRng> {
    /// Cards not yet drawn. Order carries no meaning for draws.
    active: Vec<Card>,

    /// Most recently drawn card, until discarded.
    current: Option<Card>,

    /// Discard history, oldest first.
    discarded: Vec<Card>,

    /// Deck size at the most recent load.
    total: usize,

    /// Whether `load` has been called at least once.
    loaded: bool,

    rng: R,
}

impl<R: RandomSource> DeckSession<R> {
    /// Create an unloaded session.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            active: Vec::new(),
            current: None,
            discarded: Vec::new(),
            total: 0,
            loaded: false,
            rng,
        }
    }

    /// Create a session and load `cards` into it.
    #[must_use]
    pub fn with_cards(cards: impl IntoIterator<Item = Card>, rng: R) -> Self {
        let mut session = Self::new(rng);
        session.load(cards);
        session
    }

    // === Operations ===

    /// Replace the deck with `cards`.
    ///
    /// Any drawn or discarded cards from the previous deck are dropped.
    /// An empty sequence is valid and leaves the session `Empty`.
    pub fn load(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.active = cards.into_iter().collect();
        self.current = None;
        self.discarded.clear();
        self.total = self.active.len();
        self.loaded = true;
        log::debug!("Loaded deck with {} cards.", self.total);
    }

    /// Draw a uniformly random card from the active pool.
    ///
    /// Returns `Ok(None)` when no card is available. Drawing while a card
    /// is still current is a misuse and fails with `DeckError::InvalidState`
    /// without touching any pool; use `draw_replacing` to discard the held
    /// card implicitly.
    pub fn draw(&mut self) -> Fallible<Option<Card>> {
        if self.active.is_empty() {
            return Ok(None);
        }
        if let Some(held) = &self.current {
            log::warn!("Rejected draw while holding {held}.");
            return Err(DeckError::InvalidState);
        }
        Ok(self.take_random())
    }

    /// Draw a card, first moving any held card to the discard pile.
    ///
    /// Returns `None` when the active pool is empty, in which case the held
    /// card (if any) stays current.
    pub fn draw_replacing(&mut self) -> Option<Card> {
        if self.active.is_empty() {
            return None;
        }
        if let Some(held) = self.current.take() {
            log::debug!("Discarding {held} before drawing.");
            self.discarded.push(held);
        }
        self.take_random()
    }

    /// Move the current card to the end of the discard pile.
    ///
    /// Returns `false` if there was no current card.
    pub fn discard(&mut self) -> bool {
        match self.current.take() {
            Some(card) => {
                log::debug!("Discarded {card}.");
                self.discarded.push(card);
                true
            }
            None => false,
        }
    }

    /// Return the discard pile and current card to the active pool and
    /// shuffle it.
    ///
    /// Returns `false` (and changes nothing) when there is nothing to return.
    pub fn reset(&mut self) -> bool {
        if self.discarded.is_empty() && self.current.is_none() {
            return false;
        }
        let returned = self.discarded.len() + usize::from(self.current.is_some());
        self.active.append(&mut self.discarded);
        self.active.extend(self.current.take());
        self.rng.shuffle(&mut self.active);
        log::debug!(
            "Reshuffled {returned} cards back into the deck ({} active).",
            self.active.len()
        );
        true
    }

    fn take_random(&mut self) -> Option<Card> {
        if self.active.is_empty() {
            return None;
        }
        let index = self.rng.pick_index(self.active.len());
        let card = self.active.remove(index);
        log::debug!("Drew {card} ({} left).", self.active.len());
        self.current = Some(card.clone());
        Some(card)
    }

    // === Accessors ===

    /// Number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.active.len()
    }

    /// Deck size at the most recent load.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// The card awaiting discard, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Card> {
        self.current.as_ref()
    }

    /// Discard history, oldest first.
    #[must_use]
    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    /// Cards still in the active pool.
    #[must_use]
    pub fn active(&self) -> &[Card] {
        &self.active
    }

    /// The last `n` discards, most recent first.
    pub fn recent_discards(&self, n: usize) -> impl Iterator<Item = &Card> + '_ {
        self.discarded.iter().rev().take(n)
    }

    /// Whether `load` has been called.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// A draw would succeed.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        !self.active.is_empty() && self.current.is_none()
    }

    /// A discard would move a card.
    #[must_use]
    pub fn can_discard(&self) -> bool {
        self.current.is_some()
    }

    /// A reset would move a card.
    #[must_use]
    pub fn can_reset(&self) -> bool {
        !self.discarded.is_empty() || self.current.is_some()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> DeckState {
        DeckState::classify(
            self.active.len(),
            self.current.is_some(),
            self.discarded.len(),
        )
    }

    /// Every card in every pool: active, then current, then discarded.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.active
            .iter()
            .chain(self.current.iter())
            .chain(self.discarded.iter())
    }

    /// Multiplicity of each card name across all pools.
    #[must_use]
    pub fn card_counts(&self) -> FxHashMap<&Card, usize> {
        let mut counts = FxHashMap::default();
        for card in self.all_cards() {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    /// Snapshot for a presenter, listing at most `history_limit` discards.
    #[must_use]
    pub fn view(&self, history_limit: usize) -> DeckView {
        DeckView::of(self, history_limit)
    }
}
