//! Unique abbreviations for sibling command names.
//!
//! Every command in a namespace can be typed by any prefix of its name that is
//! at least as long as its *abbreviation*: the shortest prefix no sibling
//! shares. The abbreviation and the rest of the name are rendered together as
//! a display pattern, with the optional part in brackets:
//!
//! ```rust
//! use reqline_core::abbrev::{display_pattern, resolve};
//!
//! let names = ["fragment-set", "fragment-unset", "path-set", "port-set"];
//! assert_eq!(resolve(&names, "fragment-set"), "fragment-s");
//! assert_eq!(display_pattern(&names, "fragment-set").to_string(), "fragment-s[et]");
//! assert_eq!(display_pattern(&names, "path-set").to_string(), "pa[th-set]");
//! ```
//!
//! Nothing here is cached: callers recompute against the sibling set they
//! currently have.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::{Error, Result};

/// Build a unique-abbreviation table for `names`.
///
/// Maps every prefix shared by exactly one name to that name. Each full name
/// always maps to itself, even when it is also a prefix of a longer name.
///
/// ```rust
/// use reqline_core::abbrev::unique_prefix_table;
///
/// let table = unique_prefix_table(&["car", "cone"]);
/// assert_eq!(table.get("ca").map(String::as_str), Some("car"));
/// assert_eq!(table.get("co").map(String::as_str), Some("cone"));
/// assert!(!table.contains_key("c"));
/// ```
pub fn unique_prefix_table<S: AsRef<str>>(names: &[S]) -> BTreeMap<String, String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut owner: HashMap<&str, &str> = HashMap::new();

    for name in names.iter().map(AsRef::as_ref).filter(|n| !n.is_empty()) {
        for prefix in prefixes(name) {
            *seen.entry(prefix).or_insert(0) += 1;
            owner.insert(prefix, name);
        }
    }

    let mut table: BTreeMap<String, String> = seen
        .into_iter()
        .filter(|&(_, count)| count == 1)
        .filter_map(|(prefix, _)| owner.get(prefix).map(|n| (prefix.to_string(), (*n).to_string())))
        .collect();

    for name in names.iter().map(AsRef::as_ref).filter(|n| !n.is_empty()) {
        table.insert(name.to_string(), name.to_string());
    }
    table
}

/// Compute the abbreviation of `target` among `names`.
///
/// `names` is the whole sibling set; whether or not it already contains
/// `target` does not matter, but a *second* occurrence of `target` counts as a
/// distinct sibling. The result is the shortest prefix of `target` shared by no
/// other name, or `target` itself when every proper prefix is shared (one
/// character names, names that prefix another name, duplicates).
///
/// Ties can only arise between identical names; the table keeps a single
/// entry per prefix, so the lexicographically-first candidate is taken and
/// every duplicate falls back to its full name.
pub fn resolve<S: AsRef<str>>(names: &[S], target: &str) -> String {
    let mut all: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    if !all.contains(&target) {
        all.push(target);
    }

    let table = unique_prefix_table(&all);
    let abbrev = table
        .iter()
        .filter(|(_, name)| name.as_str() == target)
        .map(|(prefix, _)| prefix.as_str())
        .min()
        .unwrap_or(target)
        .to_string();

    tracing::trace!(target_name = %target, abbrev = %abbrev, siblings = all.len(), "resolved abbreviation");
    abbrev
}

/// Compute the display pattern of `target` among `names`.
pub fn display_pattern<S: AsRef<str>>(names: &[S], target: &str) -> DisplayPattern {
    let abbrev = resolve(names, target);
    DisplayPattern::split(target, abbrev.len())
}

/// Render `abbrev` and the full `name` as a display pattern string.
///
/// ```rust
/// use reqline_core::abbrev::render;
///
/// assert_eq!(render("path", "path-set"), "path[-set]");
/// assert_eq!(render("cd", "cd"), "cd");
/// ```
pub fn render(abbrev: &str, name: &str) -> String {
    let len = if name.starts_with(abbrev) {
        abbrev.len()
    } else {
        name.len()
    };
    DisplayPattern::split(name, len).to_string()
}

/// A command name split into its mandatory abbreviation and the optional rest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayPattern {
    mandatory: String,
    optional: String,
}

impl DisplayPattern {
    /// Create a pattern from its two parts.
    pub fn new(mandatory: impl Into<String>, optional: impl Into<String>) -> Self {
        Self {
            mandatory: mandatory.into(),
            optional: optional.into(),
        }
    }

    fn split(name: &str, at: usize) -> Self {
        let (mandatory, optional) = name.split_at(at);
        Self::new(mandatory, optional)
    }

    /// Parse a rendered pattern such as `fragment-s[et]`.
    ///
    /// A backslash escapes the following character, so names containing
    /// brackets survive a render/parse cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] when the brackets are unbalanced, text follows
    /// the closing bracket, the mandatory part is empty, or the pattern ends
    /// in a lone backslash.
    pub fn parse(pattern: &str) -> Result<Self> {
        let mut mandatory = String::new();
        let mut optional = String::new();
        let mut in_optional = false;
        let mut closed = false;
        let mut chars = pattern.chars();

        while let Some(ch) = chars.next() {
            if closed {
                return Err(Error::Pattern(format!(
                    "unexpected text after ']' in '{pattern}'"
                )));
            }
            let literal = match ch {
                '\\' => chars
                    .next()
                    .ok_or_else(|| Error::Pattern(format!("dangling escape in '{pattern}'")))?,
                '[' if !in_optional => {
                    in_optional = true;
                    continue;
                },
                ']' if in_optional => {
                    closed = true;
                    continue;
                },
                '[' | ']' => {
                    return Err(Error::Pattern(format!("unbalanced '{ch}' in '{pattern}'")));
                },
                c => c,
            };
            if in_optional {
                optional.push(literal);
            } else {
                mandatory.push(literal);
            }
        }

        if in_optional && !closed {
            return Err(Error::Pattern(format!("unclosed '[' in '{pattern}'")));
        }
        if mandatory.is_empty() {
            return Err(Error::Pattern(format!(
                "no mandatory text in '{pattern}'"
            )));
        }
        Ok(Self { mandatory, optional })
    }

    /// The text that must always be typed.
    pub fn mandatory(&self) -> &str {
        &self.mandatory
    }

    /// The text that may be typed, in order, after the mandatory part.
    pub fn optional(&self) -> &str {
        &self.optional
    }

    /// The full name (mandatory and optional parts joined).
    pub fn full(&self) -> String {
        format!("{}{}", self.mandatory, self.optional)
    }
}

impl fmt::Display for DisplayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped(f, &self.mandatory)?;
        if !self.optional.is_empty() {
            f.write_str("[")?;
            write_escaped(f, &self.optional)?;
            f.write_str("]")?;
        }
        Ok(())
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for ch in text.chars() {
        if matches!(ch, '[' | ']' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{ch}")?;
    }
    Ok(())
}

/// Non-empty prefixes of `name` on char boundaries, shortest first.
fn prefixes(name: &str) -> impl Iterator<Item = &str> {
    name.char_indices()
        .skip(1)
        .map(|(i, _)| i)
        .chain(std::iter::once(name.len()))
        .map(move |end| &name[..end])
}
