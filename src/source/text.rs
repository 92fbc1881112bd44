//! Plain-text deck lists: one card per line.

use crate::core::Card;

/// Parse a single line of a deck list.
///
/// Returns `None` for blank lines and `#` comments. Anything else is the
/// card name verbatim after trimming, `|` included.
#[must_use]
pub fn parse_card_line(line: &str) -> Option<Card> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(Card::from_checked(line))
}

/// Parse a multi-line deck list.
#[must_use]
pub fn parse_deck_text(text: &str) -> Vec<Card> {
    text.split('\n').filter_map(parse_card_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(Card::name).collect()
    }

    #[test]
    fn test_parse_lines() {
        let cards = parse_deck_text("Goblin Scout\nForest Sprite\n");
        assert_eq!(names(&cards), vec!["Goblin Scout", "Forest Sprite"]);
    }

    #[test]
    fn test_skips_blank_and_comments() {
        let cards = parse_deck_text("# header\n\n   \nStone Golem\n  # indented comment\n");
        assert_eq!(names(&cards), vec!["Stone Golem"]);
    }

    #[test]
    fn test_pipe_is_part_of_name() {
        let cards = parse_deck_text("Dragon | 5\n");
        assert_eq!(names(&cards), vec!["Dragon | 5"]);
    }

    #[test]
    fn test_hash_inside_name_kept() {
        assert_eq!(parse_card_line("Card #3").unwrap().name(), "Card #3");
    }

    #[test]
    fn test_trims_whitespace_and_carriage_returns() {
        let cards = parse_deck_text("  Ice Mage  \r\nVoid Walker\r\n");
        assert_eq!(names(&cards), vec!["Ice Mage", "Void Walker"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let cards = parse_deck_text("Goblin\nGoblin\n");
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_deck_text("").is_empty());
        assert!(parse_deck_text("\n   \n# only comments\n").is_empty());
    }
}
