//! Subcommand implementations for the `card-selector` binary.

pub mod draw;
pub mod parse;
pub mod play;
