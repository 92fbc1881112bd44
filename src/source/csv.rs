//! CSV deck lists. Only the first column is read; it holds the card name.

use crate::core::Card;

/// Parse CSV content into cards.
///
/// Blank lines and `#` comments are skipped. The first field is trimmed
/// and stripped of surrounding double then single quotes. There is no
/// support for quoted commas: a field ends at the first `,`.
#[must_use]
pub fn parse_deck_csv(content: &str) -> Vec<Card> {
    normalize_line_endings(content)
        .split('\n')
        .filter_map(parse_csv_line)
        .collect()
}

fn parse_csv_line(line: &str) -> Option<Card> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let first = line.split(',').next().unwrap_or_default();
    let name = first.trim().trim_matches('"').trim_matches('\'');
    if name.is_empty() {
        return None;
    }
    Some(Card::from_checked(name))
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
#[must_use]
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(Card::name).collect()
    }

    #[test]
    fn test_first_column() {
        let cards = parse_deck_csv("Dragon, rare\n#comment\n\nGoblin");
        assert_eq!(names(&cards), vec!["Dragon", "Goblin"]);
    }

    #[test]
    fn test_strips_quotes() {
        let cards = parse_deck_csv("\"Phoenix Lord\",legendary\n'Ice Mage',common\n\"'Odd'\"\n");
        assert_eq!(names(&cards), vec!["Phoenix Lord", "Ice Mage", "Odd"]);
    }

    #[test]
    fn test_skips_empty_first_field() {
        let cards = parse_deck_csv(",orphan\n\"\",empty\n  ,x\nReal,1\n");
        assert_eq!(names(&cards), vec!["Real"]);
    }

    #[test]
    fn test_quoted_whitespace_name_kept() {
        let cards = parse_deck_csv("\"  \",rare\nGoblin\n");
        assert_eq!(names(&cards), vec!["  ", "Goblin"]);
    }

    #[test]
    fn test_line_endings() {
        let cards = parse_deck_csv("A,1\r\nB,2\rC,3\n");
        assert_eq!(names(&cards), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
    }
}
