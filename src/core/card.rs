//! Card identity.
//!
//! A card is nothing more than its name. Two cards with the same name are
//! still two cards: a deck is a multiset, so `["Goblin", "Goblin"]` loads
//! two independent entries that are drawn and discarded separately.
//!
//! ```
//! use card_selector::core::Card;
//!
//! let card = Card::new("Goblin Scout").unwrap();
//! assert_eq!(card.name(), "Goblin Scout");
//!
//! assert!(Card::new("").is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{DeckError, Fallible};

/// An opaque, non-empty card name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(String);

impl Card {
    /// Create a card from a name.
    ///
    /// The name is stored verbatim, whitespace included. Returns
    /// `DeckError::EmptyCardName` if it is empty.
    pub fn new(name: impl Into<String>) -> Fallible<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DeckError::EmptyCardName);
        }
        Ok(Self(name))
    }

    /// Create a card from a name the caller already checked is non-empty.
    pub(crate) fn from_checked(name: &str) -> Self {
        debug_assert!(!name.is_empty());
        Self(name.to_string())
    }

    /// The card's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl TryFrom<&str> for Card {
    type Error = DeckError;

    fn try_from(value: &str) -> Fallible<Self> {
        Card::new(value)
    }
}

impl TryFrom<String> for Card {
    type Error = DeckError;

    fn try_from(value: String) -> Fallible<Self> {
        Card::new(value)
    }
}

/// Build a list of cards from names, rejecting any empty name.
pub fn cards_from_names<I, S>(names: I) -> Fallible<Vec<Card>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Card::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_verbatim() {
        let card = Card::new("Dragon | rare").unwrap();
        assert_eq!(card.name(), "Dragon | rare");
        assert_eq!(card.to_string(), "Dragon | rare");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(Card::new(""), Err(DeckError::EmptyCardName)));
    }

    #[test]
    fn test_whitespace_name_kept() {
        let card = Card::new("  ").unwrap();
        assert_eq!(card.name(), "  ");
    }

    #[test]
    fn test_duplicates_are_equal_values() {
        let a = Card::new("Goblin").unwrap();
        let b = Card::try_from("Goblin").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cards_from_names() {
        let cards = cards_from_names(["A", "B", "A"]).unwrap();
        assert_eq!(cards.len(), 3);
        assert!(cards_from_names(["A", ""]).is_err());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let card = Card::new("Ice Mage").unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Ice Mage\"");
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);

        assert!(serde_json::from_str::<Card>("\"\"").is_err());
    }
}
