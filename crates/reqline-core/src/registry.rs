//! Registry of command namespaces.
//!
//! A console may carry several independent command sets; each is a
//! [`Namespace`] registered here under its identifier. [`Registry::builtin`]
//! holds the single built-in set.

use tracing::debug;

use crate::command::{Attributes, CommandInstance};
use crate::commands;
use crate::console::Console;
use crate::namespace::Namespace;
use crate::{Error, Result};

/// Namespaces by identifier, in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    namespaces: Vec<Namespace>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in [`commands::NAMESPACE`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Registration`] if the built-in command set is
    /// inconsistent.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(commands::namespace()?)?;
        Ok(registry)
    }

    /// Add a namespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Registration`] when a namespace with the same
    /// identifier is already registered.
    pub fn register(&mut self, namespace: Namespace) -> Result<()> {
        if self.get(namespace.name()).is_some() {
            return Err(Error::Registration(format!(
                "namespace '{}' is registered twice",
                namespace.name()
            )));
        }
        debug!(namespace = namespace.name(), "registering namespace");
        self.namespaces.push(namespace);
        Ok(())
    }

    /// The namespace registered as `name`.
    pub fn get(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.iter().find(|ns| ns.name() == name)
    }

    /// The namespace registered as `name`, or an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Registration`] for an unknown namespace.
    pub fn namespace(&self, name: &str) -> Result<&Namespace> {
        self.get(name)
            .ok_or_else(|| Error::Registration(format!("no namespace named '{name}'")))
    }

    /// Identifiers of every registered namespace.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.namespaces.iter().map(Namespace::name)
    }

    /// Dispatch `line` in the namespace `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Registration`] for an unknown namespace and
    /// [`Error::UnknownCommand`] when no command matches the line.
    pub fn parse_line(
        &self,
        name: &str,
        line: &str,
        attributes: &Attributes,
        console: &mut Console,
    ) -> Result<CommandInstance<'_>> {
        self.namespace(name)?.parse_line(line, attributes, console)
    }
}
