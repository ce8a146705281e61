use crate::command::{CommandInstance, CommandVariant, Metadata};
use crate::console::Console;
use crate::Result;

use super::NAVIGATION;

/// Sets the fragment of the current request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentSet;

impl CommandVariant for FragmentSet {
    fn type_name(&self) -> &'static str {
        "FragmentSet"
    }

    fn metadata(&self) -> Metadata {
        Metadata {
            category: Some(NAVIGATION),
            arguments: Some("FRAGMENT"),
            help: Some("Sets the fragment of the request's address"),
            help_extended: Some(
                "Sets the page fragment used for the request. Does not communicate \
                 with the host.\n\n\
                 The page fragment will be URL-encoded if necessary.\n\n\
                 The console prompt shows the address for the current request.",
            ),
            see_also: &["FragmentUnset", "Address"],
        }
    }

    fn perform(&self, command: &CommandInstance<'_>, _console: &mut Console) -> Result<()> {
        let fragment = command.argument(0, "FRAGMENT")?;
        command.add_request_if_new(|last| Ok(last.map(|request| request.with_fragment(fragment))))?;
        Ok(())
    }
}
