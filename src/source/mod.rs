//! Deck ingestion: turning text, CSV, and uploaded files into cards.
//!
//! Parsers never fail on content. Lines that don't name a card are
//! skipped, so a file can parse to zero cards; callers that need at least
//! one card use `ensure_cards`.

pub mod csv;
pub mod file;
pub mod sample;
pub mod text;

pub use csv::parse_deck_csv;
pub use file::{
    decode_upload, ensure_cards, parse_deck_file, parse_upload, read_deck_file, DeckFormat,
};
pub use sample::{sample_deck, SAMPLE_DECK};
pub use text::{parse_card_line, parse_deck_text};
