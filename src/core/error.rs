//! Error type shared by the deck, its sources, and the CLI.
//!
//! The state machine itself has almost no failure modes. Most variants
//! come from ingestion (bad files, empty decks) or from hosting a session
//! behind a lock.

use std::fmt;

/// Everything that can go wrong while loading or operating a deck.
#[derive(Debug)]
pub enum DeckError {
    /// Ingestion produced zero cards.
    EmptyInput,
    /// `draw` was called while a card is still current.
    InvalidState,
    /// A card name was empty.
    EmptyCardName,
    /// Uploaded bytes were not valid UTF-8.
    Decode(String),
    /// Reading a deck or config file failed.
    Io(std::io::Error),
    /// A config file could not be parsed.
    Config(String),
    /// A shared session lock was poisoned by a panicking holder.
    Poisoned,
}

/// Result alias used throughout the crate.
pub type Fallible<T> = Result<T, DeckError>;

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::EmptyInput => write!(f, "no valid cards found"),
            DeckError::InvalidState => write!(f, "discard the current card before drawing again"),
            DeckError::EmptyCardName => write!(f, "card name must not be empty"),
            DeckError::Decode(msg) => write!(f, "could not decode deck file: {msg}"),
            DeckError::Io(err) => write!(f, "{err}"),
            DeckError::Config(msg) => write!(f, "invalid config: {msg}"),
            DeckError::Poisoned => write!(f, "deck session lock poisoned"),
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DeckError {
    fn from(err: std::io::Error) -> Self {
        DeckError::Io(err)
    }
}

impl From<std::string::FromUtf8Error> for DeckError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        DeckError::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for DeckError {
    fn from(err: toml::de::Error) -> Self {
        DeckError::Config(err.to_string())
    }
}
