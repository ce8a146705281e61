use anyhow::Result;
use reqline_core::{Namespace, Style, VariantRef, commands};
use serde::Serialize;

/// One command as reported by `reqline commands --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandRow {
    /// Full command name
    pub name: String,
    /// Display pattern with the optional part in brackets
    pub pattern: String,
    /// Argument usage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
    /// Help category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// One-line help
    pub help: String,
    /// Full name of the alias target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_for: Option<String>,
    /// Full names of aliases
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl CommandRow {
    /// Describe `variant` with unstyled text.
    pub fn from_variant(variant: VariantRef<'_>) -> Self {
        Self {
            name: variant.raw_name(),
            pattern: variant.command_line().to_string(),
            arguments: variant.command_line_arguments().map(str::to_string),
            category: variant.category().map(str::to_string),
            help: variant.help(&reqline_core::PlainStyle),
            alias_for: variant.alias_for().map(|target| target.raw_name()),
            aliases: variant.aliases().iter().map(VariantRef::raw_name).collect(),
        }
    }
}

/// Print the command table, or JSON rows with `json`.
pub fn list(namespace: &Namespace, json: bool, style: &dyn Style) -> Result<()> {
    if json {
        let rows: Vec<CommandRow> = namespace.iter().map(CommandRow::from_variant).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for line in commands::help_table(namespace, style) {
            println!("{line}");
        }
    }
    Ok(())
}
