//! Error types and handling for reqline-core operations.
//!
//! This module provides the error type shared by every layer of the command
//! engine: pattern compilation, namespace registration, dispatch, command
//! execution and configuration loading.
//!
//! ## Error Categories
//!
//! - **Input Errors**: bad quoting, unknown commands, missing arguments,
//!   unparsable addresses. These come from what a user typed and the console
//!   is expected to report them and carry on.
//! - **Programming Errors**: commands that were never given an implementation,
//!   namespaces whose abbreviations would collide, malformed display patterns.
//! - **Configuration Errors**: unreadable or malformed configuration files.
//!
//! Note that "this line is not for this command" is *not* an error: dispatch
//! returns `Ok(None)` for it so the caller can try the next command.
//!
//! ## Recovery Hints
//!
//! ```rust
//! use reqline_core::Error;
//!
//! let error = Error::UnclosedQuote { input: "\"oops".to_string() };
//! if error.is_recoverable() {
//!     println!("{error}");
//! }
//! assert_eq!(error.category(), "input");
//! ```

use thiserror::Error;

/// The main error type for reqline-core operations.
///
/// `Display` provides the message shown on the console, `Debug` includes the
/// full structure.
#[derive(Error, Debug)]
pub enum Error {
    /// The argument text of a command line has an unterminated quote.
    ///
    /// Signalled separately from "no match" so that the console can report bad
    /// quoting instead of an unknown command. No command instance is built.
    #[error("Unclosed quoted argument in '{input}'")]
    UnclosedQuote {
        /// The argument text that failed to split.
        input: String,
    },

    /// No command in the namespace matches the line.
    #[error("Unrecognized command: {name}")]
    UnknownCommand {
        /// The first word of the offending line.
        name: String,
    },

    /// A command required an argument that was not supplied.
    #[error("{command} requires {argument}")]
    MissingArgument {
        /// Full name of the command.
        command: String,
        /// Usage name of the missing argument.
        argument: String,
    },

    /// A primary command was performed without an implementation.
    ///
    /// This is a programming error: every primary variant must override
    /// `perform`.
    #[error("{command}: not implemented yet")]
    NotImplemented {
        /// Full name of the command.
        command: String,
    },

    /// A namespace failed validation when it was registered.
    ///
    /// ## Common Causes
    ///
    /// - Two variants with the same name
    /// - Two variants whose abbreviations would accept the same input
    /// - An alias pointing outside its namespace, or at another alias
    /// - A see-also reference to an unknown command
    #[error("Registration error: {0}")]
    Registration(String),

    /// A display pattern could not be compiled into a matcher.
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// A request address or host could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check whether the console can report the error and keep going.
    ///
    /// Errors caused by what the user typed are recoverable; errors that
    /// indicate a broken command set or a broken environment are not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reqline_core::Error;
    ///
    /// assert!(Error::UnknownCommand { name: "x".into() }.is_recoverable());
    /// assert!(!Error::NotImplemented { command: "get".into() }.is_recoverable());
    /// ```
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnclosedQuote { .. }
                | Self::UnknownCommand { .. }
                | Self::MissingArgument { .. }
                | Self::InvalidUrl(_)
        )
    }

    /// Get the error category as a string identifier.
    ///
    /// - `"input"` - bad quoting, unknown commands, missing arguments
    /// - `"invalid_url"` - address parsing
    /// - `"not_implemented"` - a command without an implementation
    /// - `"registration"` - namespace validation
    /// - `"pattern"` - display pattern compilation
    /// - `"config"` - configuration and settings
    /// - `"io"` - file system operations
    /// - `"serialization"` - data format conversion
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::UnclosedQuote { .. } | Self::UnknownCommand { .. } | Self::MissingArgument { .. } => {
                "input"
            },
            Self::InvalidUrl(_) => "invalid_url",
            Self::NotImplemented { .. } => "not_implemented",
            Self::Registration(_) => "registration",
            Self::Pattern(_) => "pattern",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
