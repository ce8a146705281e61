//! # reqline-core
//!
//! Command recognition and dispatch for the reqline HTTP console.
//!
//! A console line such as `fragment-s top` or `cd 'my docs'/b%2Fz` is turned
//! into a command instance bound to the user's session. The crate decides
//! which command a line names, splits the rest into arguments, cleans them up,
//! and runs the command against the session's request history.
//!
//! ## Architecture
//!
//! - **Abbreviations** ([`abbrev`]): every command may be typed by its shortest
//!   unique prefix among its siblings, shown as a display pattern like
//!   `fragment-s[et]`.
//! - **Matching** ([`matcher`]): a display pattern compiles to a matcher that
//!   accepts every legal spelling of the command word, case-insensitively.
//! - **Arguments** ([`tokenizer`]): the text after the command word is split
//!   the way a POSIX shell splits words.
//! - **Commands** ([`command`], [`namespace`], [`registry`]): commands are
//!   `'static` values implementing [`CommandVariant`], grouped into validated
//!   [`Namespace`]s. Aliases forward to their target.
//! - **Sessions** ([`session`]): an ordered history of immutable requests.
//! - **Configuration** ([`config`]): color and default address, from TOML and
//!   the environment.
//!
//! ## Quick Start
//!
//! ```rust
//! use reqline_core::{Attributes, Console, Registry, Result, Session, commands};
//!
//! let registry = Registry::builtin()?;
//! let namespace = registry.namespace(commands::NAMESPACE)?;
//! let session = Session::open("http://example.com/api")?;
//! let attributes = Attributes::new(session.clone());
//! let mut console = Console::plain();
//!
//! let command = namespace
//!     .dispatch("fragment-s top", &attributes, &mut console)?
//!     .expect("fragment-set matches");
//! assert_eq!(command.arguments(), ["top"]);
//!
//! command.perform(&mut console)?;
//! assert_eq!(
//!     session.borrow().last_request().map(|r| r.address().to_string()),
//!     Some("http://example.com/api#top".to_string())
//! );
//! # Ok::<(), reqline_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`]. A line that simply does not
//! name a command is `Ok(None)`, not an error:
//!
//! ```rust
//! use reqline_core::{Attributes, Console, Error, Session, commands};
//!
//! let namespace = commands::namespace()?;
//! let attributes = Attributes::new(Session::open("localhost")?);
//! let mut console = Console::plain();
//!
//! assert!(namespace.dispatch("x baz", &attributes, &mut console)?.is_none());
//! match namespace.dispatch("path \"oops", &attributes, &mut console) {
//!     Err(Error::UnclosedQuote { .. }) => {},
//!     other => panic!("unexpected {other:?}"),
//! }
//! # Ok::<(), reqline_core::Error>(())
//! ```

/// Unique abbreviations and display patterns
pub mod abbrev;
/// Command variants and command instances
pub mod command;
/// The built-in command set
pub mod commands;
/// Configuration loading and environment overrides
pub mod config;
/// Console output sink
pub mod console;
/// Error types and result aliases
pub mod error;
/// Command-line matchers
pub mod matcher;
/// Namespaces of sibling commands and dispatch
pub mod namespace;
/// Registry of namespaces
pub mod registry;
/// Sessions and requests
pub mod session;
/// Output styling
pub mod style;
/// Shell-style argument splitting
pub mod tokenizer;

// Re-export commonly used types
pub use abbrev::DisplayPattern;
pub use command::{Attributes, CommandInstance, CommandVariant, Metadata, VariantKind};
pub use config::{ColorChoice, Config, DisplayConfig, SessionConfig};
pub use console::Console;
pub use error::{Error, Result};
pub use matcher::{LineMatch, Matcher};
pub use namespace::{Namespace, VariantRef};
pub use registry::Registry;
pub use session::{Request, Session, SessionRef};
pub use style::{AnsiStyle, PlainStyle, Style};
