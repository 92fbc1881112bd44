//! Built-in demo deck.

use crate::core::Card;

use super::text::parse_deck_text;

/// The sample deck in deck-list form, comments included.
pub const SAMPLE_DECK: &str = "\
# Fantasy Card Deck
# Enter one card name per line

Goblin Scout
Forest Sprite
Stone Golem
River Serpent
Shadow Assassin
Fire Elemental
Ice Mage
Thunder Knight
Dragon Rider
Phoenix Lord
Crystal Guardian
Void Walker
Ancient Dragon
God of Thunder
";

/// The sample deck, parsed.
#[must_use]
pub fn sample_deck() -> Vec<Card> {
    parse_deck_text(SAMPLE_DECK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_deck() {
        let cards = sample_deck();
        assert_eq!(cards.len(), 14);
        assert_eq!(cards[0].name(), "Goblin Scout");
        assert_eq!(cards[12].name(), "Ancient Dragon");
        assert!(cards.iter().all(|card| !card.name().starts_with('#')));
    }
}
