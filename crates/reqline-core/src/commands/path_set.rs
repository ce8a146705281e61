use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::command::{CommandInstance, CommandVariant, Metadata};
use crate::console::Console;
use crate::Result;

use super::NAVIGATION;

/// A percent sign followed by two hex digits.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static ESCAPE_SEQUENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[0-9A-Fa-f]{2}").unwrap());

/// Changes the path of the current request.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSet;

impl CommandVariant for PathSet {
    fn type_name(&self) -> &'static str {
        "PathSet"
    }

    fn metadata(&self) -> Metadata {
        Metadata {
            category: Some(NAVIGATION),
            arguments: Some("PATH"),
            help: Some("Changes the path of the request's address"),
            help_extended: Some(
                "Changes the path used for the request. Does not communicate with \
                 the host.\n\n\
                 The path will be URL-encoded if necessary.\n\n\
                 The console prompt shows the address for the current request.",
            ),
            see_also: &["Address"],
        }
    }

    /// Percent-encode every `/`-separated segment of the path, except segments
    /// that already contain an escape sequence. Those are kept as typed and
    /// reported on the console.
    fn sanitize_arguments(&self, mut arguments: Vec<String>, console: &mut Console) -> Vec<String> {
        if let Some(path) = arguments.first_mut() {
            *path = escape_path(path, console);
        }
        arguments
    }

    fn perform(&self, command: &CommandInstance<'_>, _console: &mut Console) -> Result<()> {
        let path = command.argument(0, "PATH")?;
        command.add_request_if_new(|last| last.map(|request| request.with_path(path)).transpose())?;
        Ok(())
    }
}

fn escape_path(path: &str, console: &mut Console) -> String {
    let escaped = path
        .split('/')
        .map(|segment| {
            if ESCAPE_SEQUENCE_RE.is_match(segment) {
                console.notice(&format!(
                    "Argument '{segment}' was not URL-escaped because it contains escape sequences"
                ));
                segment.to_string()
            } else {
                urlencoding::encode(segment).into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("/");
    debug!(path, escaped = %escaped, "sanitized path");
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(path: &str) -> (String, Vec<String>) {
        let mut console = Console::plain();
        let escaped = escape_path(path, &mut console);
        (escaped, console.lines().to_vec())
    }

    #[test]
    fn test_plain_segments_are_encoded() {
        assert_eq!(sanitize("b@r").0, "b%40r");
        assert_eq!(sanitize("bar/baz").0, "bar/baz");
        assert_eq!(sanitize("b@r/ba{").0, "b%40r/ba%7B");
        assert_eq!(sanitize("/api/v1/").0, "/api/v1/");
        assert_eq!(sanitize("a b").0, "a%20b");
    }

    #[test]
    fn test_escaped_segments_are_kept_with_a_notice() {
        let (escaped, lines) = sanitize("b@r/b%2Fz");
        assert_eq!(escaped, "b%40r/b%2Fz");
        assert_eq!(
            lines,
            ["*** Argument 'b%2Fz' was not URL-escaped because it contains escape sequences"]
        );
    }

    #[test]
    fn test_lone_percent_is_encoded() {
        let (escaped, lines) = sanitize("100%");
        assert_eq!(escaped, "100%25");
        assert!(lines.is_empty());
    }

    #[test]
    fn test_only_first_argument_is_sanitized() {
        let mut console = Console::plain();
        let args = PathSet.sanitize_arguments(vec!["a@b".into(), "c@d".into()], &mut console);
        assert_eq!(args, ["a%40b", "c@d"]);
        assert!(PathSet.sanitize_arguments(Vec::new(), &mut console).is_empty());
    }
}
