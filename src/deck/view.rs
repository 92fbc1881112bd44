//! Read-only snapshot of a session for presenters.
//!
//! A presenter never touches the pools directly. It renders a `DeckView`,
//! which carries everything needed to draw the counter, the card, the
//! discard list and the enabled/disabled state of each action.

use serde::{Deserialize, Serialize};

use crate::core::{Card, RandomSource};

use super::session::DeckSession;
use super::state::DeckState;

/// Presenter-facing state of a deck session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckView {
    pub state: DeckState,
    pub remaining: usize,
    pub total: usize,
    pub current: Option<Card>,
    /// Most recent discards, newest first.
    pub recent_discards: Vec<Card>,
    /// Discards not included in `recent_discards`.
    pub older_discards: usize,
    pub can_draw: bool,
    pub can_discard: bool,
    pub can_reset: bool,
}

impl DeckView {
    /// Capture `session`, listing at most `history_limit` discards.
    #[must_use]
    pub fn of<R: RandomSource>(session: &DeckSession<R>, history_limit: usize) -> Self {
        let recent_discards: Vec<Card> = session.recent_discards(history_limit).cloned().collect();
        Self {
            state: session.state(),
            remaining: session.remaining(),
            total: session.total(),
            current: session.current().cloned(),
            older_discards: session.discarded().len() - recent_discards.len(),
            recent_discards,
            can_draw: session.can_draw(),
            can_discard: session.can_discard(),
            can_reset: session.can_reset(),
        }
    }

    /// Label for the draw action, mirroring why it may be disabled.
    #[must_use]
    pub fn draw_label(&self) -> &'static str {
        if self.remaining == 0 {
            "Deck empty!"
        } else if self.current.is_some() {
            "Discard first!"
        } else {
            "Draw card"
        }
    }
}
