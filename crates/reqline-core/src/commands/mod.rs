//! The built-in command set of the console.
//!
//! Each command is a unit struct implementing
//! [`CommandVariant`](crate::CommandVariant). [`ALL`] lists them in the order
//! they are registered, which is also the order dispatch tries them in.

mod address;
mod cd;
mod fragment_set;
mod fragment_unset;
mod help;
mod host_set;
mod path_set;
mod port_set;

pub use address::Address;
pub use cd::Cd;
pub use fragment_set::FragmentSet;
pub use fragment_unset::FragmentUnset;
pub use help::{Help, details as help_details, table as help_table, usage};
pub use host_set::HostSet;
pub use path_set::PathSet;
pub use port_set::PortSet;

use crate::command::CommandVariant;
use crate::namespace::Namespace;
use crate::Result;

/// Identifier of the built-in namespace.
pub const NAMESPACE: &str = "commands";

/// Category of commands that change the request address.
pub const NAVIGATION: &str = "Navigation";

/// Category of commands that explain other commands.
pub const HELP: &str = "Help";

/// Every built-in command, in registration order.
pub static ALL: &[&dyn CommandVariant] = &[
    &Address,
    &Cd,
    &FragmentSet,
    &FragmentUnset,
    &Help,
    &HostSet,
    &PathSet,
    &PortSet,
];

/// Build the built-in namespace.
///
/// # Errors
///
/// Returns [`crate::Error::Registration`] if the built-in set is inconsistent.
pub fn namespace() -> Result<Namespace> {
    Namespace::new(NAMESPACE, ALL.iter().copied())
}
