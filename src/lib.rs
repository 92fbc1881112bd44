//! # card-selector
//!
//! Draw cards from a named deck one at a time, without replacement.
//!
//! ## Design Principles
//!
//! 1. **Closed pools**: after a load, cards only move between the active
//!    pool, the current card, and the discard pile. None are created or lost.
//!
//! 2. **Injected randomness**: draws and reshuffles go through a
//!    `RandomSource`, so any sequence can be replayed from a seed or
//!    scripted in a test.
//!
//! 3. **Derived state**: lifecycle state and action enablement are computed
//!    from the pools, never tracked separately.
//!
//! ## Modules
//!
//! - `core`: cards, errors, RNG, configuration
//! - `deck`: session state machine, presenter view, shared session
//! - `source`: text/CSV/file ingestion and the sample deck
//! - `cli`, `cmd`: the `card-selector` command-line front-end

pub mod cli;
pub mod cmd;
pub mod core;
pub mod deck;
pub mod source;

// Re-export commonly used types
pub use crate::core::{Card, DeckError, DeckRng, Fallible, RandomSource, SessionConfig};

pub use crate::deck::{DeckSession, DeckState, DeckView, SharedDeck};

pub use crate::source::{
    decode_upload, ensure_cards, parse_deck_csv, parse_deck_file, parse_deck_text, read_deck_file,
    sample_deck, DeckFormat,
};
