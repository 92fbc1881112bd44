//! Core types: cards, errors, randomness, configuration.
//!
//! Everything here is independent of how a deck is operated. The deck
//! state machine lives in `deck`, ingestion in `source`.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use card::{cards_from_names, Card};
pub use config::{SessionConfig, DEFAULT_HISTORY_LIMIT};
pub use error::{DeckError, Fallible};
pub use rng::{DeckRng, RandomSource};
