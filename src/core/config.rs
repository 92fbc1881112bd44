//! Session configuration.
//!
//! A session is configured at startup, either in code via the `with_*`
//! builders or from a TOML file:
//!
//! ```toml
//! seed = 42
//! history_limit = 5
//! deck = "decks/fantasy.txt"
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::Fallible;

/// Number of discards shown to the player, most recent first.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Configuration for one deck session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// RNG seed. `None` picks a random seed per session.
    pub seed: Option<u64>,

    /// How many discarded cards a presenter lists.
    pub history_limit: usize,

    /// Deck file to load at startup. `None` loads the sample deck.
    pub deck: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            deck: None,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Fallible<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a configuration file.
    pub fn from_file(path: &Path) -> Fallible<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}.", path.display());
        Self::from_toml(&text)
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set how many discards a presenter shows.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the deck file loaded at startup.
    #[must_use]
    pub fn with_deck(mut self, path: impl Into<PathBuf>) -> Self {
        self.deck = Some(path.into());
        self
    }
}
