//! CLI error handling with semantic exit codes.
//!
//! Errors are categorized so that scripts driving `reqline run` can tell a
//! mistyped command from a broken configuration.
//!
//! # Exit Code Categories
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Every line was performed |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Bad quoting, missing argument, invalid address or configuration |
//! | 3 | `NotFound` | A line names no known command |
//!
//! # Usage
//!
//! ```bash
//! reqline run -e 'pth /users'
//! case $? in
//!     0) echo "ok" ;;
//!     3) echo "unknown command" ;;
//!     *) echo "other error" ;;
//! esac
//! ```

use std::fmt;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    ///
    /// Commands without an implementation, inconsistent command sets and I/O
    /// failures land here.
    Internal = 1,

    /// Invalid input or configuration (exit code 2).
    Usage = 2,

    /// A command line names no known command (exit code 3).
    NotFound = 3,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
        }
    }

    /// Categorize an error of the command engine.
    #[must_use]
    pub const fn from_core(error: &reqline_core::Error) -> Self {
        use reqline_core::Error;

        match error {
            Error::UnknownCommand { .. } => Self::NotFound,
            Error::UnclosedQuote { .. }
            | Error::MissingArgument { .. }
            | Error::InvalidUrl(_)
            | Error::Config(_) => Self::Usage,
            _ => Self::Internal,
        }
    }

    /// Infer the error category from an error message.
    ///
    /// Fallback for errors that were never categorized explicitly.
    #[must_use]
    pub fn infer_from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("unrecognized command") || msg_lower.contains("not found") {
            return Self::NotFound;
        }

        if msg_lower.contains("invalid")
            || msg_lower.contains("unclosed")
            || msg_lower.contains("requires")
            || msg_lower.contains("config")
        {
            return Self::Usage;
        }

        Self::Internal
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
///
/// Wraps an `anyhow::Error` with an `ErrorCategory` so the exit code survives
/// `?` propagation while the error chain is preserved.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Internal, source)
    }

    /// Create a not-found error.
    pub fn not_found(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::NotFound, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

// `Display` already shows the wrapped error, so the chain continues below it.
impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.chain().nth(1)
    }
}

impl From<reqline_core::Error> for CliError {
    fn from(error: reqline_core::Error) -> Self {
        Self::new(ErrorCategory::from_core(&error), error)
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// A `CliError` or core error anywhere in the chain decides the category;
/// otherwise it is inferred from the message.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return cli_err.exit_code();
        }
        if let Some(core_err) = cause.downcast_ref::<reqline_core::Error>() {
            return ErrorCategory::from_core(core_err).exit_code();
        }
    }

    ErrorCategory::infer_from_message(&err.to_string()).exit_code()
}
