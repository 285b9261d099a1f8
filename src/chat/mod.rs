//! Interactive chat mode against the completion endpoint.
//!
//! Provides a REPL-style interface with slash commands for language
//! switching, transcript review, reset and export.

/// Slash command parsing and autocomplete.
pub mod command;
mod shell;
mod ui;

pub use shell::{ChatShell, ShellConfig};
