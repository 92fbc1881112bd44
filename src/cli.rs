//! Command-line interface.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cmd::draw::draw_cards;
use crate::cmd::parse::print_parsed;
use crate::cmd::play::play;
use crate::core::{Card, Fallible, SessionConfig};
use crate::source::{ensure_cards, read_deck_file, sample_deck, SAMPLE_DECK};

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Draw, discard and reshuffle interactively.
    Play {
        /// Deck file (.txt or .csv). Defaults to the sample deck.
        #[arg(long)]
        deck: Option<PathBuf>,
        /// RNG seed, for a reproducible session.
        #[arg(long)]
        seed: Option<u64>,
        /// TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Draw cards in one go, discarding each before the next.
    Draw {
        /// Deck file (.txt or .csv). Defaults to the sample deck.
        #[arg(long)]
        deck: Option<PathBuf>,
        /// How many cards to draw.
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// RNG seed, for a reproducible draw.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the built-in sample deck.
    Sample,
    /// Print the cards a deck file parses to.
    Parse {
        /// Deck file (.txt or .csv).
        file: PathBuf,
        /// Print a JSON array instead of one name per line.
        #[arg(long)]
        json: bool,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Play { deck, seed, config } => {
            let config = build_config(config.as_deref(), deck, seed)?;
            play(&config)
        }
        Command::Draw { deck, count, seed } => {
            let mut config = SessionConfig::new();
            config.deck = deck;
            config.seed = seed;
            draw_cards(&config, count)
        }
        Command::Sample => {
            print!("{SAMPLE_DECK}");
            Ok(())
        }
        Command::Parse { file, json } => print_parsed(&file, json),
    }
}

/// Merge a config file (if any) with command-line overrides.
pub fn build_config(
    path: Option<&Path>,
    deck: Option<PathBuf>,
    seed: Option<u64>,
) -> Fallible<SessionConfig> {
    let mut config = match path {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::new(),
    };
    if deck.is_some() {
        config.deck = deck;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

/// Cards to start with: the configured deck file, or the sample deck.
pub fn initial_cards(config: &SessionConfig) -> Fallible<Vec<Card>> {
    match &config.deck {
        Some(path) => ensure_cards(read_deck_file(path)?),
        None => Ok(sample_deck()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeckError;

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "seed = 1\nhistory_limit = 3\ndeck = \"a.txt\"\n").unwrap();

        let config = build_config(Some(&path), Some(PathBuf::from("b.csv")), None).unwrap();
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.history_limit, 3);
        assert_eq!(config.deck, Some(PathBuf::from("b.csv")));

        let config = build_config(Some(&path), None, Some(9)).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.deck, Some(PathBuf::from("a.txt")));
    }

    #[test]
    fn test_initial_cards_defaults_to_sample() {
        let cards = initial_cards(&SessionConfig::new()).unwrap();
        assert_eq!(cards.len(), 14);
    }

    #[test]
    fn test_initial_cards_rejects_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "# nothing here\n\n").unwrap();

        let result = initial_cards(&SessionConfig::new().with_deck(&path));
        assert!(matches!(result, Err(DeckError::EmptyInput)));
    }

    #[test]
    fn test_command_parses() {
        let args = ["card-selector", "draw", "--count", "3", "--seed", "5"];
        let cli = Command::try_parse_from(args).unwrap();
        match cli {
            Command::Draw { deck, count, seed } => {
                assert_eq!(deck, None);
                assert_eq!(count, 3);
                assert_eq!(seed, Some(5));
            }
            _ => panic!("Expected Draw"),
        }
    }
}
