//! Handlers for the `reqline` subcommands.

mod complete;
mod help_for;
mod list;
mod run;

pub use complete::complete;
pub use help_for::help_for;
pub use list::list;
pub use run::{RunOptions, run};

use anyhow::anyhow;
use reqline_core::Namespace;

use crate::error::CliError;

/// Report an unknown command word, suggesting the closest command.
pub(crate) fn unknown_command(namespace: &Namespace, word: &str) -> CliError {
    let message = match namespace.suggest(word).first() {
        Some(closest) => format!(
            "Unrecognized command: {word} (did you mean '{}'?)",
            closest.command_line()
        ),
        None => format!("Unrecognized command: {word}"),
    };
    CliError::not_found(anyhow!(message))
}
