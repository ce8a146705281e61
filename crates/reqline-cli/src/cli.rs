//! # CLI Structure and Argument Parsing
//!
//! The command-line interface for `reqline`, built with `clap` derive macros.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Perform console lines against a session
//! reqline run http://example.com/api -e 'cd users' -e 'fragment-s top' --show-address
//!
//! # Lines can also come from stdin, one per line
//! printf 'path /v2\naddress\n' | reqline run example.com
//!
//! # Inspect the command set
//! reqline commands
//! reqline commands --json
//! reqline complete fr
//! reqline help-for pa
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use reqline_core::ColorChoice;

/// Main CLI structure for the `reqline` command
#[derive(Parser, Clone, Debug)]
#[command(name = "reqline")]
#[command(version)]
#[command(about = "reqline - command console for composing HTTP requests", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logs on stderr
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress warnings (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// When to use ANSI colors (defaults to the config file, then `NO_COLOR` and
    /// terminal detection)
    #[arg(long, global = true, value_enum, value_name = "WHEN")]
    pub color: Option<ColorArg>,
}

/// Available subcommands for the `reqline` CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Perform console lines against a new session
    Run {
        /// Address of the first request (defaults to `session.address` in the config)
        #[arg(value_name = "ADDRESS")]
        address: Option<String>,

        /// A console line to perform; repeatable. Without any, lines are read
        /// from stdin
        #[arg(short = 'e', long = "exec", value_name = "LINE")]
        lines: Vec<String>,

        /// Print the address of the last request when done
        #[arg(long)]
        show_address: bool,
    },

    /// List the available console commands
    #[command(name = "commands")]
    List {
        /// Emit JSON instead of the help table
        #[arg(long)]
        json: bool,
    },

    /// Print full command names starting with PREFIX
    Complete {
        /// Prefix to complete (may be empty)
        #[arg(value_name = "PREFIX", default_value = "")]
        prefix: String,
    },

    /// Show the full help of one console command
    HelpFor {
        /// The command, abbreviations accepted
        #[arg(value_name = "COMMAND")]
        command: String,
    },
}

/// Color flag values.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorArg {
    /// Color when writing to a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
