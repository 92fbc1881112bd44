//! Interactive play loop.
//!
//! Reads one command per line and renders the deck after each. This is a
//! presenter: it only reaches the session through its operations and
//! `DeckView`.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::initial_cards;
use crate::core::{Card, DeckError, DeckRng, Fallible, RandomSource, SessionConfig};
use crate::deck::{DeckSession, DeckView};
use crate::source::{ensure_cards, read_deck_file, sample_deck};

const HELP: &str = "\
Commands:
  draw           draw a card
  discard        discard the current card
  reset          shuffle every drawn card back into the deck
  status         show the deck
  load <file>    load a .txt or .csv deck
  sample         load the sample deck
  help           show this message
  quit           leave";

/// Whether the loop keeps going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A deck session plus the presentation settings for it.
pub struct Table<R = DeckRng> {
    session: DeckSession<R>,
    history_limit: usize,
}

impl<R: RandomSource> Table<R> {
    /// Seat a session, showing at most `history_limit` discards.
    pub fn new(session: DeckSession<R>, history_limit: usize) -> Self {
        Self {
            session,
            history_limit,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &DeckSession<R> {
        &self.session
    }

    /// Run one command line, writing its output to `out`.
    ///
    /// Deck errors are reported to the player and do not end the loop; only
    /// output failures are returned.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> Fallible<Flow> {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };
        match command {
            "" => {}
            "draw" | "d" => match self.session.draw() {
                Ok(Some(card)) => writeln!(out, "You drew: {card}")?,
                Ok(None) => writeln!(out, "Deck empty! Reset to reshuffle.")?,
                Err(DeckError::InvalidState) => writeln!(out, "Discard first!")?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "discard" | "x" => {
                if self.session.discard() {
                    writeln!(out, "Discarded.")?;
                } else {
                    writeln!(out, "No card to discard.")?;
                }
            }
            "reset" | "r" => {
                if self.session.reset() {
                    writeln!(out, "Deck reshuffled.")?;
                } else {
                    writeln!(out, "Nothing to reshuffle.")?;
                }
            }
            "status" | "s" => {}
            "load" => {
                if argument.is_empty() {
                    writeln!(out, "Usage: load <file>")?;
                    return Ok(Flow::Continue);
                }
                match ensure_cards_from(Path::new(argument)) {
                    Ok(cards) => {
                        let count = cards.len();
                        self.session.load(cards);
                        writeln!(out, "Loaded {count} cards!")?;
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            "sample" => {
                let cards = sample_deck();
                let count = cards.len();
                self.session.load(cards);
                writeln!(out, "Loaded sample deck with {count} cards!")?;
            }
            "help" | "?" => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            "quit" | "q" | "exit" => return Ok(Flow::Quit),
            other => {
                writeln!(out, "Unknown command: {other}. Type 'help' for commands.")?;
                return Ok(Flow::Continue);
            }
        }
        render(&self.session.view(self.history_limit), out)?;
        Ok(Flow::Continue)
    }

    /// Run commands from `input` until it ends or the player quits.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Fallible<()> {
        render(&self.session.view(self.history_limit), out)?;
        for line in input.lines() {
            let line = line?;
            if self.execute(&line, out)? == Flow::Quit {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }
}

fn ensure_cards_from(path: &Path) -> Fallible<Vec<Card>> {
    ensure_cards(read_deck_file(path)?)
}

/// Write a text rendering of `view`.
pub fn render(view: &DeckView, out: &mut impl Write) -> Fallible<()> {
    writeln!(out, "Deck: {}/{} remaining", view.remaining, view.total)?;
    match &view.current {
        Some(card) => writeln!(out, "Current: {card}")?,
        None => writeln!(out, "Current: (none)")?,
    }
    if view.recent_discards.is_empty() {
        writeln!(out, "Discard pile: no cards discarded yet")?;
    } else {
        let names: Vec<&str> = view.recent_discards.iter().map(|card| card.name()).collect();
        write!(out, "Discard pile: {}", names.join(", "))?;
        if view.older_discards > 0 {
            write!(out, " ... and {} more", view.older_discards)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "[{}]", action_line(view))?;
    Ok(())
}

fn action_line(view: &DeckView) -> String {
    let mut actions = Vec::new();
    actions.push(if view.can_draw {
        "draw".to_string()
    } else {
        format!("draw: {}", view.draw_label())
    });
    if view.can_discard {
        actions.push("discard".to_string());
    }
    if view.can_reset {
        actions.push("reset".to_string());
    }
    actions.join(" | ")
}

/// Play on stdin/stdout.
pub fn play(config: &SessionConfig) -> Fallible<()> {
    let cards = initial_cards(config)?;
    let rng = DeckRng::from_optional_seed(config.seed);
    let session = DeckSession::with_cards(cards, rng);
    let mut table = Table::new(session, config.history_limit);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    writeln!(stdout, "Type 'help' for commands.")?;
    table.run(stdin.lock(), &mut stdout)
}
