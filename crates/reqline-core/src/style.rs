//! Text styling for help and warning output.
//!
//! Commands never format text themselves; they ask the [`Style`] carried by
//! the [`Console`](crate::Console) to do it, so tests can run with
//! [`PlainStyle`] and get stable strings.

use colored::Colorize;

/// Formatting capability used by help text and console notices.
pub trait Style {
    /// Emphasize `text` (command names in help output).
    fn strong(&self, text: &str) -> String;

    /// Format `text` as a notice line.
    fn notice(&self, text: &str) -> String;
}

/// Unstyled output: `notice` prefixes `*** `, `strong` is the identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl Style for PlainStyle {
    fn strong(&self, text: &str) -> String {
        text.to_string()
    }

    fn notice(&self, text: &str) -> String {
        format!("*** {text}")
    }
}

/// Terminal output with ANSI colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyle;

impl Style for AnsiStyle {
    fn strong(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn notice(&self, text: &str) -> String {
        format!("*** {text}").yellow().to_string()
    }
}

/// Pick a style for the given color decision.
pub fn for_color(enabled: bool) -> Box<dyn Style> {
    if enabled {
        Box::new(AnsiStyle)
    } else {
        Box::new(PlainStyle)
    }
}
