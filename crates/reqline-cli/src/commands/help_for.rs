use anyhow::Result;
use reqline_core::{Namespace, Style, commands};
use tracing::debug;

use super::unknown_command;

/// Print the full help of the command `word` selects.
pub fn help_for(namespace: &Namespace, word: &str, style: &dyn Style) -> Result<()> {
    let word = word.trim();
    let variant = namespace
        .find(word)
        .ok_or_else(|| unknown_command(namespace, word))?;
    debug!(command = %variant.raw_name(), "showing help");
    for line in commands::help_details(variant, style) {
        println!("{line}");
    }
    Ok(())
}
