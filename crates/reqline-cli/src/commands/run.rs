use std::io;
use std::rc::Rc;

use anyhow::{Context, Result};
use reqline_core::{Attributes, Config, Console, Namespace, Session, Style};
use tracing::{debug, info};

use super::unknown_command;
use crate::error::CliError;

/// Options of `reqline run`.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Address of the first request; the configured default when absent
    pub address: Option<String>,
    /// Lines to perform; stdin is read when empty
    pub lines: Vec<String>,
    /// Print the final address
    pub show_address: bool,
}

/// Open a session and perform every line against it, stopping at the first
/// failure.
pub fn run(
    namespace: &Namespace,
    config: &Config,
    options: RunOptions,
    style: Box<dyn Style>,
) -> Result<()> {
    let address = options
        .address
        .unwrap_or_else(|| config.session.address.clone());
    let session = Session::open(&address)
        .map_err(CliError::from)
        .with_context(|| format!("cannot open a session at '{address}'"))?;
    info!(address = %address, "session opened");

    let attributes = Attributes::new(Rc::clone(&session));
    let mut console = Console::stdout(style);

    let lines: Box<dyn Iterator<Item = io::Result<String>>> = if options.lines.is_empty() {
        debug!("reading lines from stdin");
        Box::new(io::stdin().lines())
    } else {
        Box::new(options.lines.into_iter().map(Ok))
    };

    for (index, line) in lines.enumerate() {
        let number = index + 1;
        let line = line
            .map_err(CliError::internal)
            .context("failed to read a line")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let at = || format!("line {number}: {line}");

        let command = namespace
            .dispatch(line, &attributes, &mut console)
            .map_err(CliError::from)
            .with_context(at)?
            .ok_or_else(|| unknown_command(namespace, first_word(line)))
            .with_context(at)?;
        debug!(line = number, command = %command.variant().raw_name(), "performing");
        command
            .perform(&mut console)
            .map_err(CliError::from)
            .with_context(at)?;
    }

    if options.show_address {
        let last = session.borrow().last_request().cloned();
        if let Some(request) = last {
            console.say(request.address());
        }
    }
    Ok(())
}

fn first_word(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or(line)
}
