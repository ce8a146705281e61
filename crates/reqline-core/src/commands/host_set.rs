use crate::command::{CommandInstance, CommandVariant, Metadata};
use crate::console::Console;
use crate::Result;

use super::NAVIGATION;

/// Changes the host of the current request.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSet;

impl CommandVariant for HostSet {
    fn type_name(&self) -> &'static str {
        "HostSet"
    }

    fn metadata(&self) -> Metadata {
        Metadata {
            category: Some(NAVIGATION),
            arguments: Some("HOST"),
            help: Some("Changes the host of the request's address"),
            help_extended: Some(
                "Changes the host used for the request. Does not communicate with \
                 the host.\n\n\
                 Cookies belong to a host, so changing the host clears them.\n\n\
                 The console prompt shows the address for the current request.",
            ),
            see_also: &["PortSet", "Address"],
        }
    }

    fn perform(&self, command: &CommandInstance<'_>, console: &mut Console) -> Result<()> {
        let host = command.argument(0, "HOST")?;
        command.add_request_if_new(|last| {
            last.map(|request| {
                command.notify_if_cookies_cleared(console, request, |r| r.with_host(host))
            })
            .transpose()
        })?;
        Ok(())
    }
}
