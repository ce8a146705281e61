use crate::command::{CommandInstance, CommandVariant, Metadata};
use crate::console::Console;
use crate::{Error, Result};

use super::NAVIGATION;

/// Changes the port of the current request.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortSet;

impl CommandVariant for PortSet {
    fn type_name(&self) -> &'static str {
        "PortSet"
    }

    fn metadata(&self) -> Metadata {
        Metadata {
            category: Some(NAVIGATION),
            arguments: Some("PORT"),
            help: Some("Changes the TCP port of the request's address"),
            help_extended: Some(
                "Changes the TCP port used for the request. Does not communicate \
                 with the host.\n\n\
                 The console prompt shows the address for the current request.",
            ),
            see_also: &["HostSet", "Address"],
        }
    }

    fn perform(&self, command: &CommandInstance<'_>, _console: &mut Console) -> Result<()> {
        let raw = command.argument(0, "PORT")?;
        let port: u16 = raw
            .parse()
            .map_err(|_| Error::InvalidUrl(format!("'{raw}' is not a TCP port")))?;
        command.add_request_if_new(|last| last.map(|request| request.with_port(port)).transpose())?;
        Ok(())
    }
}
