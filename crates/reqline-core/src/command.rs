//! Command variants and the command instances built from them.
//!
//! A *variant* is one kind of command (`PathSet`, `FragmentSet`, ...). It is a
//! `'static` value implementing [`CommandVariant`]: the trait supplies its
//! declared type name, whether it is a primary command or an alias, its help
//! [`Metadata`], and the two hooks concrete commands override
//! (`sanitize_arguments` and `perform`).
//!
//! Everything that depends on the *other* commands of a namespace (the
//! abbreviated command line, the list of aliases, the resolved see-also list)
//! is answered by [`VariantRef`](crate::VariantRef), which pairs a variant with
//! its namespace.
//!
//! A [`CommandInstance`] is what dispatch produces: a variant bound to its
//! arguments and to the session it operates on.

use std::fmt;
use std::rc::Rc;

use heck::ToKebabCase;
use tracing::debug;

use crate::console::Console;
use crate::namespace::VariantRef;
use crate::session::{Request, SessionRef};
use crate::{Error, Result};

/// Whether a variant has its own behavior or forwards to another variant.
#[derive(Clone, Copy)]
pub enum VariantKind {
    /// A command with its own `perform`.
    Primary,
    /// A pure forwarding reference to another variant of the same namespace.
    Alias(&'static dyn CommandVariant),
}

impl VariantKind {
    /// The alias target, if this is an alias.
    pub fn target(self) -> Option<&'static dyn CommandVariant> {
        match self {
            Self::Primary => None,
            Self::Alias(target) => Some(target),
        }
    }
}

impl fmt::Debug for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("Primary"),
            Self::Alias(target) => f.debug_tuple("Alias").field(&target.type_name()).finish(),
        }
    }
}

/// Static help metadata of a variant.
///
/// Aliases normally leave everything empty: their category, argument usage
/// and help are derived from the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    /// Heading the command is listed under in help output.
    pub category: Option<&'static str>,
    /// Argument usage, e.g. `PATH` or `[COMMAND]`.
    pub arguments: Option<&'static str>,
    /// One-line help.
    pub help: Option<&'static str>,
    /// Full help, shown for `help <command>`.
    pub help_extended: Option<&'static str>,
    /// Related commands, by declared type name.
    pub see_also: &'static [&'static str],
}

impl Metadata {
    /// No metadata at all.
    pub const EMPTY: Self = Self {
        category: None,
        arguments: None,
        help: None,
        help_extended: None,
        see_also: &[],
    };
}

impl Default for Metadata {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// A kind of command.
///
/// Implementors are unit structs registered as `&'static dyn CommandVariant`.
///
/// ```rust
/// use reqline_core::{CommandInstance, CommandVariant, Console, Metadata, Result};
///
/// struct Ping;
///
/// impl CommandVariant for Ping {
///     fn type_name(&self) -> &'static str {
///         "Ping"
///     }
///
///     fn metadata(&self) -> Metadata {
///         Metadata {
///             help: Some("Says pong"),
///             ..Metadata::EMPTY
///         }
///     }
///
///     fn perform(&self, _command: &CommandInstance<'_>, console: &mut Console) -> Result<()> {
///         console.say("pong");
///         Ok(())
///     }
/// }
///
/// assert_eq!(Ping.raw_name(), "ping");
/// ```
pub trait CommandVariant: Sync {
    /// The declared type name, in `UpperCamelCase` (`FragmentSet`).
    fn type_name(&self) -> &'static str;

    /// Primary or alias. Primary unless overridden.
    fn kind(&self) -> VariantKind {
        VariantKind::Primary
    }

    /// Help metadata.
    fn metadata(&self) -> Metadata {
        Metadata::EMPTY
    }

    /// The full command name as typed on the command line: the type name in
    /// kebab case (`FragmentSet` is `fragment-set`).
    fn raw_name(&self) -> String {
        self.type_name().to_kebab_case()
    }

    /// Transform the split arguments before the command is built.
    ///
    /// The default returns them untouched. Implementations may write warnings
    /// to `console`; a warning never prevents the command from being built.
    ///
    /// Only primary variants are asked: a line selecting an alias is cleaned
    /// by the alias target's hook, so an override on an alias is never called.
    fn sanitize_arguments(&self, arguments: Vec<String>, console: &mut Console) -> Vec<String> {
        let _ = console;
        arguments
    }

    /// Run the command.
    ///
    /// Primary variants must override this; the default reports
    /// [`Error::NotImplemented`]. It is never called for aliases, whose
    /// instances forward to the target instead.
    fn perform(&self, command: &CommandInstance<'_>, console: &mut Console) -> Result<()> {
        let _ = console;
        Err(Error::NotImplemented {
            command: command.variant().raw_name(),
        })
    }
}

/// Values a command instance is built from.
#[derive(Debug, Clone)]
pub struct Attributes {
    /// The session the command will operate on.
    pub session: SessionRef,
    /// Arguments used when the command line carries none.
    pub arguments: Vec<String>,
}

impl Attributes {
    /// Attributes for `session` with no arguments.
    pub fn new(session: SessionRef) -> Self {
        Self {
            session,
            arguments: Vec::new(),
        }
    }

    /// Pre-seed the arguments.
    #[must_use]
    pub fn with_arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments = arguments.into_iter().map(Into::into).collect();
        self
    }
}

/// A command bound to its arguments and session, ready to perform.
#[derive(Debug, Clone)]
pub struct CommandInstance<'ns> {
    variant: VariantRef<'ns>,
    arguments: Vec<String>,
    session: SessionRef,
}

impl<'ns> CommandInstance<'ns> {
    /// Bind `variant` to `arguments` and `session`.
    pub const fn new(variant: VariantRef<'ns>, arguments: Vec<String>, session: SessionRef) -> Self {
        Self {
            variant,
            arguments,
            session,
        }
    }

    /// The variant this instance was built for.
    pub const fn variant(&self) -> VariantRef<'ns> {
        self.variant
    }

    /// The arguments, in the order they were typed.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The session handle.
    pub const fn session(&self) -> &SessionRef {
        &self.session
    }

    /// Argument `index`, or [`Error::MissingArgument`] naming `usage`.
    pub fn argument(&self, index: usize, usage: &str) -> Result<&str> {
        self.arguments
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingArgument {
                command: self.variant.raw_name(),
                argument: usage.to_string(),
            })
    }

    /// Perform the command.
    ///
    /// An alias builds an instance of its target with the same arguments and
    /// session and performs that instead.
    pub fn perform(&self, console: &mut Console) -> Result<()> {
        if let Some(target) = self.variant.alias_for() {
            debug!(alias = %self.variant.raw_name(), target = %target.raw_name(), "forwarding alias");
            let forwarded =
                CommandInstance::new(target, self.arguments.clone(), Rc::clone(&self.session));
            return forwarded.perform(console);
        }
        self.variant.variant().perform(self, console)
    }

    /// Offer the last request of the session to `transform` and record what
    /// it returns.
    ///
    /// The result is appended to the history only when it is present and is
    /// not the very same request object (value-equal copies are appended).
    /// Returns `self` for chaining.
    pub fn add_request_if_new<F>(&self, transform: F) -> Result<&Self>
    where
        F: FnOnce(Option<&Rc<Request>>) -> Result<Option<Rc<Request>>>,
    {
        let last = self.session.borrow().last_request().cloned();
        if let Some(next) = transform(last.as_ref())? {
            let pushed = match &last {
                Some(last) if Rc::ptr_eq(last, &next) => false,
                _ => self.session.borrow_mut().push_if_distinct(next),
            };
            debug!(command = %self.variant.raw_name(), pushed, "request transform applied");
        }
        Ok(self)
    }

    /// Run `change` on `request` and print a notice if it dropped the
    /// request's cookies.
    pub fn notify_if_cookies_cleared<F>(
        &self,
        console: &mut Console,
        request: &Rc<Request>,
        change: F,
    ) -> Result<Rc<Request>>
    where
        F: FnOnce(&Rc<Request>) -> Result<Rc<Request>>,
    {
        let changed = change(request)?;
        if request.has_cookies() && !changed.has_cookies() {
            debug!(command = %self.variant.raw_name(), "cookies cleared");
            console.notice("Cookies cleared");
        }
        Ok(changed)
    }
}
