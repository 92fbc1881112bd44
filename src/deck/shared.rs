//! A deck session that can be used from several threads.
//!
//! Every operation takes the session's single lock, so two draws can
//! never interleave their pool mutations. Separate `SharedDeck`s are
//! fully independent.

use std::sync::{Arc, Mutex};

use crate::core::{Card, DeckError, DeckRng, Fallible, RandomSource};

use super::session::DeckSession;
use super::view::DeckView;

/// Cloneable handle to one lock-protected `DeckSession`.
#[derive(Debug)]
pub struct SharedDeck<R = DeckRng> {
    inner: Arc<Mutex<DeckSession<R>>>,
}

impl<R> Clone for SharedDeck<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RandomSource> SharedDeck<R> {
    /// Wrap a session.
    #[must_use]
    pub fn new(session: DeckSession<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<T>(&self, f: impl FnOnce(&mut DeckSession<R>) -> T) -> Fallible<T> {
        let mut session = self.inner.lock().map_err(|_| DeckError::Poisoned)?;
        Ok(f(&mut session))
    }

    /// Replace the deck with `cards`.
    pub fn load(&self, cards: Vec<Card>) -> Fallible<()> {
        self.with(|session| session.load(cards))
    }

    /// Strict draw; see `DeckSession::draw`.
    pub fn draw(&self) -> Fallible<Option<Card>> {
        self.with(|session| session.draw())?
    }

    /// Draw, discarding any held card first.
    pub fn draw_replacing(&self) -> Fallible<Option<Card>> {
        self.with(|session| session.draw_replacing())
    }

    /// Discard the current card.
    pub fn discard(&self) -> Fallible<bool> {
        self.with(|session| session.discard())
    }

    /// Reshuffle discards and the current card into the deck.
    pub fn reset(&self) -> Fallible<bool> {
        self.with(|session| session.reset())
    }

    /// Snapshot for a presenter.
    pub fn view(&self, history_limit: usize) -> Fallible<DeckView> {
        self.with(|session| session.view(history_limit))
    }
}
