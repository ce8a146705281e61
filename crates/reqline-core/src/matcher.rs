//! Command-line matchers compiled from display patterns.
//!
//! A [`Matcher`] accepts a line when it consists of:
//!
//! 1. the mandatory part of the pattern,
//! 2. any prefix (possibly empty) of the optional part, in order,
//! 3. either the end of the line, or one whitespace character followed by an
//!    arbitrary argument tail.
//!
//! Letters are compared case-insensitively. The matcher walks the line
//! directly instead of going through a regular expression, so pattern text
//! never needs escaping.
//!
//! ```rust
//! use reqline_core::Matcher;
//!
//! let matcher = Matcher::compile("fragment-s[et]").unwrap();
//! assert!(matcher.is_match("fragment-s"));
//! assert!(matcher.is_match("Fragment-SE"));
//! assert_eq!(matcher.matches("fragment-set top").unwrap().tail(), Some("top"));
//! assert!(!matcher.is_match("fragment-t"));
//! assert!(!matcher.is_match("fragment-se1"));
//! ```

use crate::abbrev::DisplayPattern;
use crate::Result;

/// A compiled command-line matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    pattern: DisplayPattern,
    mandatory: Vec<char>,
    optional: Vec<char>,
}

/// A successful match of a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch<'a> {
    command: &'a str,
    tail: Option<&'a str>,
}

impl<'a> LineMatch<'a> {
    /// The command word exactly as it was typed.
    pub const fn command(&self) -> &'a str {
        self.command
    }

    /// Everything after the whitespace separating the command word, if the
    /// line continued past it. The text is not trimmed.
    pub const fn tail(&self) -> Option<&'a str> {
        self.tail
    }
}

impl Matcher {
    /// Compile a rendered display pattern such as `path[-set]`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Pattern`] for malformed patterns.
    pub fn compile(pattern: &str) -> Result<Self> {
        DisplayPattern::parse(pattern).map(Self::from_pattern)
    }

    /// Build a matcher from an already split pattern.
    pub fn from_pattern(pattern: DisplayPattern) -> Self {
        let mandatory = pattern.mandatory().chars().collect();
        let optional = pattern.optional().chars().collect();
        Self {
            pattern,
            mandatory,
            optional,
        }
    }

    /// The pattern this matcher was built from.
    pub const fn pattern(&self) -> &DisplayPattern {
        &self.pattern
    }

    /// Match a whole line.
    pub fn matches<'a>(&self, line: &'a str) -> Option<LineMatch<'a>> {
        let mut chars = line.char_indices().peekable();

        for &expected in &self.mandatory {
            match chars.next() {
                Some((_, ch)) if same_letter(ch, expected) => {},
                _ => return None,
            }
        }

        // Every stopping point inside the optional part is a candidate end of
        // the command word; record them all, longest wins.
        let mut stops = vec![chars.peek().map_or(line.len(), |&(i, _)| i)];
        for &expected in &self.optional {
            match chars.next() {
                Some((_, ch)) if same_letter(ch, expected) => {
                    stops.push(chars.peek().map_or(line.len(), |&(i, _)| i));
                },
                _ => break,
            }
        }

        stops.into_iter().rev().find_map(|end| split_rest(line, end))
    }

    /// Whether the line matches at all.
    pub fn is_match(&self, line: &str) -> bool {
        self.matches(line).is_some()
    }
}

/// Accept the remainder of `line` after a command word ending at `end`.
fn split_rest(line: &str, end: usize) -> Option<LineMatch<'_>> {
    let (command, rest) = line.split_at(end);
    let mut rest_chars = rest.chars();
    match rest_chars.next() {
        None => Some(LineMatch {
            command,
            tail: None,
        }),
        Some(sep) if sep.is_whitespace() => Some(LineMatch {
            command,
            tail: Some(rest_chars.as_str()),
        }),
        Some(_) => None,
    }
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
