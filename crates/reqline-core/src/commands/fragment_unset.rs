use crate::command::{CommandInstance, CommandVariant, Metadata};
use crate::console::Console;
use crate::session::Request;
use crate::Result;

use super::NAVIGATION;

/// Removes the fragment of the current request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentUnset;

impl CommandVariant for FragmentUnset {
    fn type_name(&self) -> &'static str {
        "FragmentUnset"
    }

    fn metadata(&self) -> Metadata {
        Metadata {
            category: Some(NAVIGATION),
            help: Some("Removes the fragment from the request's address"),
            help_extended: Some(
                "Removes the page fragment used for the request. Does not \
                 communicate with the host.\n\n\
                 The console prompt shows the address for the current request.",
            ),
            see_also: &["FragmentSet", "Address"],
            ..Metadata::EMPTY
        }
    }

    fn perform(&self, command: &CommandInstance<'_>, _console: &mut Console) -> Result<()> {
        command.add_request_if_new(|last| Ok(last.map(Request::without_fragment)))?;
        Ok(())
    }
}
