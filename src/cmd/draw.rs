use std::io::Write;

use crate::cli::initial_cards;
use crate::core::{Card, DeckRng, Fallible, RandomSource, SessionConfig};
use crate::deck::DeckSession;

/// Draw up to `count` cards, discarding each before the next.
///
/// Stops early when the deck runs out.
pub fn draw_from<R: RandomSource>(
    session: &mut DeckSession<R>,
    count: usize,
) -> Fallible<Vec<Card>> {
    let mut drawn = Vec::with_capacity(count.min(session.remaining()));
    for _ in 0..count {
        match session.draw()? {
            Some(card) => {
                drawn.push(card);
                session.discard();
            }
            None => break,
        }
    }
    Ok(drawn)
}

pub fn draw_cards(config: &SessionConfig, count: usize) -> Fallible<()> {
    let cards = initial_cards(config)?;
    let mut session = DeckSession::with_cards(cards, DeckRng::from_optional_seed(config.seed));
    let drawn = draw_from(&mut session, count)?;
    let mut stdout = std::io::stdout();
    for card in &drawn {
        writeln!(stdout, "{card}")?;
    }
    if drawn.len() < count {
        log::warn!("Deck ran out after {} of {count} cards.", drawn.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cards_from_names;

    #[test]
    fn test_draw_from_without_replacement() {
        let cards = cards_from_names(["A", "B", "C", "D"]).unwrap();
        let mut session = DeckSession::with_cards(cards, DeckRng::new(3));
        let mut drawn = draw_from(&mut session, 4).unwrap();
        drawn.sort();
        assert_eq!(drawn, cards_from_names(["A", "B", "C", "D"]).unwrap());
        assert_eq!(session.discarded().len(), 4);
    }

    #[test]
    fn test_draw_from_stops_when_exhausted() {
        let mut session =
            DeckSession::with_cards(cards_from_names(["A", "B"]).unwrap(), DeckRng::new(3));
        let drawn = draw_from(&mut session, 5).unwrap();
        assert_eq!(drawn.len(), 2);
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let deck = cards_from_names(["A", "B", "C", "D", "E", "F"]).unwrap();
        let mut first = DeckSession::with_cards(deck.clone(), DeckRng::new(11));
        let mut second = DeckSession::with_cards(deck, DeckRng::new(11));
        assert_eq!(draw_from(&mut first, 6).unwrap(), draw_from(&mut second, 6).unwrap());
    }
}
