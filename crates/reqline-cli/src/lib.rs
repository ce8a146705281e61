//! reqline CLI - command console for composing HTTP requests
//!
//! Parses the command line, loads configuration, sets up logging and color,
//! and hands off to the subcommand handlers.

use anyhow::Result;
use clap::Parser;
use reqline_core::{ColorChoice, Config, Registry, commands as builtin, style};
use tracing::debug;

mod cli;
mod commands;
pub mod error;
mod utils;

use cli::{Cli, Commands};
use commands::RunOptions;
use error::CliError;
use utils::initialize_logging;

/// Execute the reqline CLI with the current process arguments and
/// environment.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or a subcommand fails.
/// The error carries its exit code (see [`error::exit_code_from_error`]).
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(&cli)?;

    let config = Config::load().map_err(CliError::from)?;
    debug!(?config, "configuration loaded");

    let color = utils::color::apply(cli.color.map(ColorChoice::from), config.display.color);
    let style = style::for_color(color);

    let registry = Registry::builtin().map_err(CliError::from)?;
    let namespace = registry
        .namespace(builtin::NAMESPACE)
        .map_err(CliError::from)?;

    match cli.command {
        Commands::Run {
            address,
            lines,
            show_address,
        } => commands::run(
            namespace,
            &config,
            RunOptions {
                address,
                lines,
                show_address,
            },
            style,
        ),
        Commands::List { json } => commands::list(namespace, json, style.as_ref()),
        Commands::Complete { prefix } => {
            commands::complete(namespace, &prefix);
            Ok(())
        },
        Commands::HelpFor { command } => commands::help_for(namespace, &command, style.as_ref()),
    }
}
