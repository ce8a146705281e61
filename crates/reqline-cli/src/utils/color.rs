//! Color decision for console output.

use colored::control as color_control;
use is_terminal::IsTerminal;
use reqline_core::ColorChoice;

/// Decide whether to color output.
///
/// An explicit flag wins, then a non-`auto` config value. Under `auto`,
/// `NO_COLOR` disables color and otherwise stdout must be a terminal.
pub const fn color_enabled(
    flag: Option<ColorChoice>,
    config: ColorChoice,
    no_color_env: bool,
    stdout_is_terminal: bool,
) -> bool {
    let choice = match flag {
        Some(choice) => choice,
        None => config,
    };
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => !no_color_env && stdout_is_terminal,
    }
}

/// Resolve the decision against the real environment and apply it to
/// `colored`.
pub fn apply(flag: Option<ColorChoice>, config: ColorChoice) -> bool {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let enabled = color_enabled(flag, config, no_color_env, std::io::stdout().is_terminal());
    color_control::set_override(enabled);
    enabled
}
