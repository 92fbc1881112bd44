//! Deck files and uploads.
//!
//! The format is picked from the file name: `.csv` (any case) is CSV,
//! everything else is a plain list. Bytes are decoded as UTF-8 with an
//! optional byte order mark.

use std::path::Path;

use crate::core::{Card, DeckError, Fallible};

use super::csv::{normalize_line_endings, parse_deck_csv};
use super::text::parse_deck_text;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// How a deck file is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckFormat {
    /// One card per line.
    Text,
    /// Card name in the first column.
    Csv,
}

impl DeckFormat {
    /// Detect the format from a file name.
    #[must_use]
    pub fn from_filename(filename: &str) -> Self {
        if filename.to_lowercase().ends_with(".csv") {
            DeckFormat::Csv
        } else {
            DeckFormat::Text
        }
    }
}

/// Decode uploaded bytes, dropping a leading UTF-8 BOM.
pub fn decode_upload(bytes: &[u8]) -> Fallible<String> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Parse decoded file content, choosing the format from `filename`.
#[must_use]
pub fn parse_deck_file(content: &str, filename: &str) -> Vec<Card> {
    match DeckFormat::from_filename(filename) {
        DeckFormat::Csv => parse_deck_csv(content),
        DeckFormat::Text => parse_deck_text(&normalize_line_endings(content)),
    }
}

/// Decode and parse an uploaded file.
pub fn parse_upload(bytes: &[u8], filename: &str) -> Fallible<Vec<Card>> {
    let content = decode_upload(bytes)?;
    Ok(parse_deck_file(&content, filename))
}

/// Read and parse a deck file from disk.
///
/// An empty result is not an error here; see `ensure_cards`.
pub fn read_deck_file(path: &Path) -> Fallible<Vec<Card>> {
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let cards = parse_upload(&bytes, &filename)?;
    log::debug!("Parsed {} cards from {}.", cards.len(), path.display());
    Ok(cards)
}

/// Reject an ingestion result with no cards.
pub fn ensure_cards(cards: Vec<Card>) -> Fallible<Vec<Card>> {
    if cards.is_empty() {
        return Err(DeckError::EmptyInput);
    }
    Ok(cards)
}
