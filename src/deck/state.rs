//! Lifecycle states of a deck session.

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
///
/// Always derived from the pools, never stored:
///
/// | State       | active    | current  | discarded |
/// |-------------|-----------|----------|-----------|
/// | `Empty`     | empty     | none     | empty     |
/// | `Ready`     | non-empty | none     | any       |
/// | `Holding`   | any       | occupied | any       |
/// | `Exhausted` | empty     | none     | non-empty |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckState {
    /// Nothing loaded, or an empty deck was loaded.
    Empty,
    /// Cards remain and nothing is held.
    Ready,
    /// A drawn card awaits discard.
    Holding,
    /// Every card has been drawn and discarded.
    Exhausted,
}

impl DeckState {
    /// Classify a set of pool sizes.
    #[must_use]
    pub fn classify(active: usize, holding: bool, discarded: usize) -> Self {
        if holding {
            DeckState::Holding
        } else if active > 0 {
            DeckState::Ready
        } else if discarded > 0 {
            DeckState::Exhausted
        } else {
            DeckState::Empty
        }
    }
}

impl std::fmt::Display for DeckState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DeckState::Empty => "empty",
            DeckState::Ready => "ready",
            DeckState::Holding => "holding",
            DeckState::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(DeckState::classify(0, false, 0), DeckState::Empty);
        assert_eq!(DeckState::classify(3, false, 0), DeckState::Ready);
        assert_eq!(DeckState::classify(3, false, 2), DeckState::Ready);
        assert_eq!(DeckState::classify(0, true, 0), DeckState::Holding);
        assert_eq!(DeckState::classify(2, true, 5), DeckState::Holding);
        assert_eq!(DeckState::classify(0, false, 4), DeckState::Exhausted);
    }
}
