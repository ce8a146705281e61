use crate::command::{CommandInstance, CommandVariant, Metadata};
use crate::console::Console;
use crate::Result;

use super::NAVIGATION;

/// Prints the address of the current request.
#[derive(Debug, Clone, Copy, Default)]
pub struct Address;

impl CommandVariant for Address {
    fn type_name(&self) -> &'static str {
        "Address"
    }

    fn metadata(&self) -> Metadata {
        Metadata {
            category: Some(NAVIGATION),
            help: Some("Displays the address of the request"),
            help_extended: Some(
                "Displays the full address used for the request, including any \
                 port, path, query string and fragment. Does not communicate with \
                 the host.",
            ),
            ..Metadata::EMPTY
        }
    }

    fn perform(&self, command: &CommandInstance<'_>, console: &mut Console) -> Result<()> {
        let request = command
            .session()
            .borrow()
            .require_last(&command.variant().raw_name())?;
        console.say(request.address());
        Ok(())
    }
}
