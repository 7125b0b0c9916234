//! CLI command handlers

pub mod commands;

pub use commands::{convert, factions, roll, RollOptions};
