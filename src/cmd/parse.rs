use std::io::Write;
use std::path::Path;

use crate::core::{Card, Fallible};
use crate::source::{ensure_cards, read_deck_file};

/// Write parsed card names, one per line or as a JSON array.
pub fn write_cards(cards: &[Card], json: bool, out: &mut impl Write) -> Fallible<()> {
    if json {
        let text = serde_json::to_string_pretty(cards).map_err(std::io::Error::from)?;
        writeln!(out, "{text}")?;
    } else {
        for card in cards {
            writeln!(out, "{card}")?;
        }
    }
    Ok(())
}

pub fn print_parsed(path: &Path, json: bool) -> Fallible<()> {
    let cards = ensure_cards(read_deck_file(path)?)?;
    log::info!("{} cards in {}.", cards.len(), path.display());
    write_cards(&cards, json, &mut std::io::stdout())
}
