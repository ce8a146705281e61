//! reqline CLI - command console for composing HTTP requests
//!
//! This is the main entry point for the reqline command-line interface.
//! Command implementations live in the library half of this crate.

use std::process::ExitCode;

use colored::Colorize;

fn main() -> ExitCode {
    match reqline_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(reqline_cli::error::exit_code_from_error(&err))
        },
    }
}
