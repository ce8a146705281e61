//! Sibling sets of command variants and line dispatch.
//!
//! A [`Namespace`] owns an ordered list of variants. Abbreviations are unique
//! within a namespace, so every query that looks at siblings (command line
//! patterns, alias lists, see-also resolution) goes through a
//! [`VariantRef`]: a variant viewed from inside its namespace.
//!
//! Nothing derived is cached. Patterns and matchers are recomputed from the
//! current sibling set on each call.

use std::collections::HashSet;
use std::fmt;
use std::ptr;
use std::rc::Rc;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use tracing::{debug, instrument, trace};

use crate::abbrev::{self, DisplayPattern};
use crate::command::{Attributes, CommandInstance, CommandVariant, VariantKind};
use crate::console::Console;
use crate::matcher::Matcher;
use crate::style::Style;
use crate::tokenizer;
use crate::{Error, Result};

/// An ordered, validated set of sibling command variants.
pub struct Namespace {
    name: String,
    variants: Vec<&'static dyn CommandVariant>,
}

impl Namespace {
    /// Build a namespace, checking that its variants can live together.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Registration`] when two variants share a name or an
    /// abbreviation, or when an alias points outside the namespace or at
    /// another alias. See-also entries naming commands outside the namespace
    /// are allowed; they are skipped when resolved.
    pub fn new<I>(name: impl Into<String>, variants: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'static dyn CommandVariant>,
    {
        let namespace = Self {
            name: name.into(),
            variants: variants.into_iter().collect(),
        };
        namespace.validate()?;
        debug!(namespace = %namespace.name, variants = namespace.variants.len(), "namespace registered");
        Ok(namespace)
    }

    fn validate(&self) -> Result<()> {
        let mut type_names = HashSet::new();
        let mut raw_names = HashSet::new();
        for variant in &self.variants {
            if !type_names.insert(variant.type_name()) || !raw_names.insert(variant.raw_name()) {
                return Err(self.registration(format!(
                    "'{}' is registered twice",
                    variant.type_name()
                )));
            }
        }

        for variant in &self.variants {
            if let VariantKind::Alias(target) = variant.kind() {
                if !type_names.contains(target.type_name()) {
                    return Err(self.registration(format!(
                        "'{}' is an alias for '{}', which is not registered",
                        variant.type_name(),
                        target.type_name()
                    )));
                }
                if target.kind().target().is_some() {
                    return Err(self.registration(format!(
                        "'{}' is an alias for '{}', which is itself an alias",
                        variant.type_name(),
                        target.type_name()
                    )));
                }
            }
        }

        let mut mandatory = HashSet::new();
        for variant in self.iter() {
            let pattern = variant.command_line();
            if !mandatory.insert(pattern.mandatory().to_lowercase()) {
                return Err(self.registration(format!(
                    "abbreviation '{}' of '{}' is not unique",
                    pattern.mandatory(),
                    variant.type_name()
                )));
            }
        }
        Ok(())
    }

    fn registration(&self, message: String) -> Error {
        Error::Registration(format!("namespace '{}': {message}", self.name))
    }

    /// The namespace identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the namespace has no variants.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Variants in registration order.
    pub fn iter(&self) -> impl Iterator<Item = VariantRef<'_>> {
        self.variants.iter().map(|&variant| VariantRef {
            namespace: self,
            variant,
        })
    }

    /// Full command names of every variant, in registration order.
    pub fn raw_names(&self) -> Vec<String> {
        self.variants.iter().map(|v| v.raw_name()).collect()
    }

    /// Look a variant up by type name (`PathSet`) or full command name
    /// (`path-set`).
    pub fn get(&self, name: &str) -> Option<VariantRef<'_>> {
        self.iter()
            .find(|v| v.type_name() == name || v.raw_name() == name)
    }

    /// The variant a command word selects, abbreviations included.
    pub fn find(&self, word: &str) -> Option<VariantRef<'_>> {
        self.iter().find(|v| {
            v.matcher()
                .matches(word)
                .is_some_and(|found| found.tail().is_none())
        })
    }

    /// Build a command for `line`: the first variant whose matcher accepts
    /// the line wins. `Ok(None)` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnclosedQuote`] when the matching variant cannot split
    /// the argument tail.
    #[instrument(level = "debug", skip(self, attributes, console), fields(namespace = %self.name))]
    pub fn dispatch(
        &self,
        line: &str,
        attributes: &Attributes,
        console: &mut Console,
    ) -> Result<Option<CommandInstance<'_>>> {
        for variant in self.iter() {
            if let Some(command) = variant.build_for(line, attributes, console)? {
                return Ok(Some(command));
            }
        }
        debug!("no variant matched");
        Ok(None)
    }

    /// Like [`dispatch`](Self::dispatch), but an unmatched line is an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] naming the first word of the line, or
    /// any error of [`dispatch`](Self::dispatch).
    pub fn parse_line(
        &self,
        line: &str,
        attributes: &Attributes,
        console: &mut Console,
    ) -> Result<CommandInstance<'_>> {
        self.dispatch(line, attributes, console)?
            .ok_or_else(|| Error::UnknownCommand {
                name: line.split_whitespace().next().unwrap_or_default().to_string(),
            })
    }

    /// Variants whose full name starts with `prefix`.
    pub fn completions(&self, prefix: &str) -> Vec<VariantRef<'_>> {
        self.iter().filter(|v| v.complete_for(prefix)).collect()
    }

    /// Variants whose name resembles `word`, best first.
    pub fn suggest(&self, word: &str) -> Vec<VariantRef<'_>> {
        if word.is_empty() {
            return Vec::new();
        }
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, VariantRef<'_>)> = self
            .iter()
            .filter_map(|v| matcher.fuzzy_match(&v.raw_name(), word).map(|score| (score, v)))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        trace!(word, candidates = scored.len(), "fuzzy suggestions");
        scored.into_iter().map(|(_, v)| v).collect()
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("name", &self.name)
            .field(
                "variants",
                &self.variants.iter().map(|v| v.type_name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// A variant seen from inside its namespace.
#[derive(Clone, Copy)]
pub struct VariantRef<'ns> {
    namespace: &'ns Namespace,
    variant: &'static dyn CommandVariant,
}

impl<'ns> VariantRef<'ns> {
    /// The namespace the variant belongs to.
    pub const fn namespace(&self) -> &'ns Namespace {
        self.namespace
    }

    /// The underlying variant.
    pub fn variant(&self) -> &'static dyn CommandVariant {
        self.variant
    }

    /// Declared type name (`PathSet`).
    pub fn type_name(&self) -> &'static str {
        self.variant.type_name()
    }

    /// Full command name (`path-set`).
    pub fn raw_name(&self) -> String {
        self.variant.raw_name()
    }

    /// The alias target, viewed from the same namespace.
    pub fn alias_for(&self) -> Option<Self> {
        self.variant.kind().target().map(|variant| Self {
            namespace: self.namespace,
            variant,
        })
    }

    /// Aliases of this variant, in registration order.
    pub fn aliases(&self) -> Vec<Self> {
        self.namespace
            .iter()
            .filter(|other| {
                other
                    .alias_for()
                    .is_some_and(|target| target.type_name() == self.type_name())
            })
            .collect()
    }

    /// Help category. Aliases report the category of their target.
    pub fn category(&self) -> Option<&'static str> {
        match self.alias_for() {
            Some(target) => target.category(),
            None => self.variant.metadata().category,
        }
    }

    /// The display pattern for this variant among its siblings, e.g.
    /// `fragment-s[et]`.
    pub fn command_line(&self) -> DisplayPattern {
        abbrev::display_pattern(&self.namespace.raw_names(), &self.raw_name())
    }

    /// Argument usage. Aliases report the usage of their target.
    pub fn command_line_arguments(&self) -> Option<&'static str> {
        match self.alias_for() {
            Some(target) => target.command_line_arguments(),
            None => self.variant.metadata().arguments,
        }
    }

    /// One-line help.
    ///
    /// Declared help wins. Otherwise an alias points at its target and any
    /// other variant says that no help is available.
    pub fn help(&self, style: &dyn Style) -> String {
        if let Some(help) = self.variant.metadata().help {
            return help.to_string();
        }
        match self.alias_for() {
            Some(target) => format!("Alias for {}", style.strong(&target.command_line().to_string())),
            None => format!(
                "(Help for {} is not available)",
                style.strong(&self.command_line().to_string())
            ),
        }
    }

    /// Full help: the declared extended help, or the one-line help as a
    /// sentence.
    pub fn help_extended(&self, style: &dyn Style) -> String {
        self.variant
            .metadata()
            .help_extended
            .map_or_else(|| format!("{}.", self.help(style)), str::to_string)
    }

    /// Related commands: the alias target first, then the declared ones that
    /// are registered in this namespace.
    pub fn see_also_commands(&self) -> Vec<Self> {
        let declared = self
            .variant
            .metadata()
            .see_also
            .iter()
            .filter_map(|name| self.namespace.get(name));
        self.alias_for().into_iter().chain(declared).collect()
    }

    /// Whether `prefix` could complete to this command's full name.
    pub fn complete_for(&self, prefix: &str) -> bool {
        self.raw_name().starts_with(prefix)
    }

    /// A matcher for this variant's command line.
    pub fn matcher(&self) -> Matcher {
        Matcher::from_pattern(self.command_line())
    }

    /// Build an instance if `line` selects this variant.
    ///
    /// When the line has an argument tail it is trimmed, split shell-style
    /// and passed through the variant's sanitizer (an alias uses its
    /// target's); the result replaces the pre-seeded arguments. Without a
    /// tail the pre-seeded arguments are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnclosedQuote`] when the tail has an unterminated
    /// quote.
    pub fn build_for(
        &self,
        line: &str,
        attributes: &Attributes,
        console: &mut Console,
    ) -> Result<Option<CommandInstance<'ns>>> {
        let matcher = self.matcher();
        let Some(found) = matcher.matches(line) else {
            return Ok(None);
        };

        let arguments = match found.tail() {
            Some(tail) => {
                let split = tokenizer::split(tail.trim())?;
                let sanitizer = self.alias_for().map_or(self.variant, |target| target.variant);
                sanitizer.sanitize_arguments(split, console)
            },
            None => attributes.arguments.clone(),
        };
        debug!(
            command = %self.raw_name(),
            typed = found.command(),
            arguments = arguments.len(),
            "built command"
        );
        Ok(Some(CommandInstance::new(
            *self,
            arguments,
            Rc::clone(&attributes.session),
        )))
    }
}

impl PartialEq for VariantRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.namespace, other.namespace) && self.type_name() == other.type_name()
    }
}

impl Eq for VariantRef<'_> {}

impl fmt::Debug for VariantRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantRef")
            .field("namespace", &self.namespace.name)
            .field("variant", &self.type_name())
            .finish()
    }
}

impl fmt::Display for VariantRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_line())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::command::Metadata;
    use crate::session::Session;
    use crate::style::PlainStyle;

    struct Get;
    struct Go;
    struct Goto;
    struct Post;
    struct Stray;
    struct AliasOfAlias;
    struct LowerPath;
    struct UpperPath;
    struct Shout;

    impl CommandVariant for Get {
        fn type_name(&self) -> &'static str {
            "Get"
        }

        fn metadata(&self) -> Metadata {
            Metadata {
                category: Some("Requests"),
                arguments: Some("[PATH]"),
                help: Some("Sends a GET request"),
                see_also: &["Goto"],
                ..Metadata::EMPTY
            }
        }
    }

    impl CommandVariant for Go {
        fn type_name(&self) -> &'static str {
            "Go"
        }

        fn kind(&self) -> VariantKind {
            VariantKind::Alias(&Get)
        }
    }

    impl CommandVariant for Goto {
        fn type_name(&self) -> &'static str {
            "Goto"
        }
    }

    impl CommandVariant for Post {
        fn type_name(&self) -> &'static str {
            "Post"
        }

        fn metadata(&self) -> Metadata {
            Metadata {
                see_also: &["Nothing"],
                ..Metadata::EMPTY
            }
        }
    }

    impl CommandVariant for Stray {
        fn type_name(&self) -> &'static str {
            "Stray"
        }

        fn kind(&self) -> VariantKind {
            VariantKind::Alias(&Goto)
        }
    }

    impl CommandVariant for AliasOfAlias {
        fn type_name(&self) -> &'static str {
            "AliasOfAlias"
        }

        fn kind(&self) -> VariantKind {
            VariantKind::Alias(&Go)
        }
    }

    impl CommandVariant for LowerPath {
        fn type_name(&self) -> &'static str {
            "LowerPath"
        }

        fn raw_name(&self) -> String {
            "path".to_string()
        }
    }

    impl CommandVariant for UpperPath {
        fn type_name(&self) -> &'static str {
            "UpperPath"
        }

        fn raw_name(&self) -> String {
            "Path".to_string()
        }
    }

    impl CommandVariant for Shout {
        fn type_name(&self) -> &'static str {
            "Shout"
        }

        fn kind(&self) -> VariantKind {
            VariantKind::Alias(&Goto)
        }

        fn sanitize_arguments(&self, arguments: Vec<String>, _console: &mut Console) -> Vec<String> {
            arguments.iter().map(|a| a.to_uppercase()).collect()
        }
    }

    fn namespace() -> Namespace {
        Namespace::new("test", [&Get as &dyn CommandVariant, &Go, &Goto]).unwrap()
    }

    fn attributes() -> Attributes {
        Attributes::new(Session::open("localhost").unwrap())
    }

    #[test]
    fn test_command_lines_use_sibling_abbreviations() {
        let ns = namespace();
        let lines: Vec<String> = ns.iter().map(|v| v.command_line().to_string()).collect();
        assert_eq!(lines, ["ge[t]", "go", "got[o]"]);
    }

    #[test]
    fn test_alias_queries() {
        let ns = namespace();
        let get = ns.get("Get").unwrap();
        let go = ns.get("go").unwrap();

        assert_eq!(go.alias_for(), Some(get));
        assert_eq!(get.alias_for(), None);
        assert_eq!(get.aliases(), vec![go]);
        assert!(go.aliases().is_empty());
        assert_eq!(go.category(), Some("Requests"));
        assert_eq!(go.command_line_arguments(), Some("[PATH]"));
        assert_eq!(go.help(&PlainStyle), "Alias for ge[t]");
        assert_eq!(go.help_extended(&PlainStyle), "Alias for ge[t].");
    }

    #[test]
    fn test_help_fallback_for_undocumented_variant() {
        let ns = namespace();
        let goto = ns.get("Goto").unwrap();
        assert_eq!(goto.help(&PlainStyle), "(Help for got[o] is not available)");
        assert_eq!(
            goto.help_extended(&PlainStyle),
            "(Help for got[o] is not available)."
        );
        assert_eq!(goto.category(), None);
    }

    #[test]
    fn test_see_also_puts_alias_target_first() {
        let ns = namespace();
        let get = ns.get("Get").unwrap();
        let goto = ns.get("Goto").unwrap();
        assert_eq!(get.see_also_commands(), vec![goto]);
        assert_eq!(ns.get("Go").unwrap().see_also_commands(), vec![get]);
        assert!(goto.see_also_commands().is_empty());
    }

    #[test]
    fn test_unknown_see_also_is_skipped() {
        let ns = Namespace::new("test", [&Post as &dyn CommandVariant]).unwrap();
        let post = ns.get("Post").unwrap();
        assert_eq!(post.variant().metadata().see_also.len(), 1);
        assert!(post.see_also_commands().is_empty());
    }

    #[test]
    fn test_registration_rejects_colliding_abbreviations() {
        let ns = Namespace::new("test", [&LowerPath as &dyn CommandVariant, &UpperPath]);
        assert!(matches!(ns, Err(Error::Registration(msg)) if msg.contains("not unique")));
    }

    #[test]
    fn test_registration_rejects_bad_aliases() {
        let missing = Namespace::new("test", [&Stray as &dyn CommandVariant]);
        assert!(matches!(missing, Err(Error::Registration(msg)) if msg.contains("not registered")));

        let chained = Namespace::new(
            "test",
            [&Get as &dyn CommandVariant, &Goto, &Go, &AliasOfAlias],
        );
        assert!(matches!(chained, Err(Error::Registration(msg)) if msg.contains("itself an alias")));
    }

    #[test]
    fn test_registration_rejects_duplicates() {
        let duplicated = Namespace::new("test", [&Goto as &dyn CommandVariant, &Goto]);
        assert!(matches!(duplicated, Err(Error::Registration(msg)) if msg.contains("twice")));
    }

    #[test]
    fn test_dispatch_first_match_and_arguments() {
        let ns = namespace();
        let mut console = Console::plain();
        let attrs = attributes().with_arguments(["seeded"]);

        let command = ns.dispatch("ge 'a b' c", &attrs, &mut console).unwrap().unwrap();
        assert_eq!(command.variant().type_name(), "Get");
        assert_eq!(command.arguments(), ["a b", "c"]);

        let bare = ns.dispatch("GOTO", &attrs, &mut console).unwrap().unwrap();
        assert_eq!(bare.variant().type_name(), "Goto");
        assert_eq!(bare.arguments(), ["seeded"]);

        let emptied = ns.dispatch("go ", &attrs, &mut console).unwrap().unwrap();
        assert!(emptied.arguments().is_empty());

        assert!(ns.dispatch("g", &attrs, &mut console).unwrap().is_none());
        assert!(ns.dispatch("gox", &attrs, &mut console).unwrap().is_none());
    }

    #[test]
    fn test_alias_arguments_use_target_sanitizer() {
        let ns = Namespace::new("test", [&Goto as &dyn CommandVariant, &Shout]).unwrap();
        let mut console = Console::plain();
        let command = ns.dispatch("shout abc", &attributes(), &mut console).unwrap().unwrap();
        assert_eq!(command.variant().type_name(), "Shout");
        assert_eq!(command.arguments(), ["abc"]);
    }

    #[test]
    fn test_dispatch_reports_unclosed_quote() {
        let ns = namespace();
        let mut console = Console::plain();
        let result = ns.dispatch("get 'oops", &attributes(), &mut console);
        assert!(matches!(result, Err(Error::UnclosedQuote { .. })));
    }

    #[test]
    fn test_parse_line_names_unknown_word() {
        let ns = namespace();
        let mut console = Console::plain();
        let result = ns.parse_line("delete /x", &attributes(), &mut console);
        assert!(matches!(result, Err(Error::UnknownCommand { name }) if name == "delete"));
    }

    #[test]
    fn test_find_completions_and_suggestions() {
        let ns = namespace();
        assert_eq!(ns.find("got").unwrap().type_name(), "Goto");
        assert!(ns.find("got x").is_none());
        assert!(ns.find("g").is_none());

        let names: Vec<&str> = ns.completions("go").iter().map(VariantRef::type_name).collect();
        assert_eq!(names, ["Go", "Goto"]);
        assert_eq!(ns.completions("").len(), 3);
        assert!(ns.completions("x").is_empty());

        assert_eq!(ns.suggest("gto").first().map(VariantRef::type_name), Some("Goto"));
        assert!(ns.suggest("").is_empty());
    }
}
