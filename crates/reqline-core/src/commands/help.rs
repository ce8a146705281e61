use crate::command::{CommandInstance, CommandVariant, Metadata};
use crate::console::Console;
use crate::namespace::{Namespace, VariantRef};
use crate::style::Style;
use crate::{Error, Result};

use super::HELP;

/// Explains the available commands, or one command in detail.
#[derive(Debug, Clone, Copy, Default)]
pub struct Help;

impl CommandVariant for Help {
    fn type_name(&self) -> &'static str {
        "Help"
    }

    fn metadata(&self) -> Metadata {
        Metadata {
            category: Some(HELP),
            arguments: Some("[COMMAND]"),
            help: Some("Displays this help table, or help on COMMAND"),
            help_extended: Some(
                "Displays a table of all commands grouped by category, or the full \
                 help for COMMAND when it is given. COMMAND may be abbreviated.",
            ),
            ..Metadata::EMPTY
        }
    }

    fn perform(&self, command: &CommandInstance<'_>, console: &mut Console) -> Result<()> {
        let namespace = command.variant().namespace();
        match command.arguments().first() {
            None => {
                for line in table(namespace, console.style()) {
                    console.say(line);
                }
            },
            Some(word) => {
                let variant = namespace.find(word).ok_or_else(|| Error::UnknownCommand {
                    name: word.clone(),
                })?;
                for line in details(variant, console.style()) {
                    console.say(line);
                }
            },
        }
        Ok(())
    }
}

/// `pattern ARGS` without styling.
pub fn usage(variant: VariantRef<'_>) -> String {
    match variant.command_line_arguments() {
        Some(arguments) => format!("{} {arguments}", variant.command_line()),
        None => variant.command_line().to_string(),
    }
}

fn styled_usage(variant: VariantRef<'_>, style: &dyn Style) -> String {
    let pattern = style.strong(&variant.command_line().to_string());
    match variant.command_line_arguments() {
        Some(arguments) => format!("{pattern} {arguments}"),
        None => pattern,
    }
}

/// Commands grouped by category, categories in order of first appearance.
pub fn table(namespace: &Namespace, style: &dyn Style) -> Vec<String> {
    let mut categories: Vec<&str> = Vec::new();
    for variant in namespace.iter() {
        let category = variant.category().unwrap_or("Other");
        if !categories.contains(&category) {
            categories.push(category);
        }
    }

    let width = namespace
        .iter()
        .map(|v| usage(v).chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for category in categories {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{category}:"));
        for variant in namespace
            .iter()
            .filter(|v| v.category().unwrap_or("Other") == category)
        {
            let padding = " ".repeat(width - usage(variant).chars().count());
            lines.push(format!(
                "  {}{padding}  {}",
                styled_usage(variant, style),
                variant.help(style)
            ));
        }
    }
    lines
}

/// Usage, extended help, aliases and related commands of one variant.
pub fn details(variant: VariantRef<'_>, style: &dyn Style) -> Vec<String> {
    let mut lines = vec![
        styled_usage(variant, style),
        String::new(),
        variant.help_extended(style),
    ];

    let aliases = variant.aliases();
    if !aliases.is_empty() {
        lines.push(String::new());
        lines.push(format!("Aliases: {}", joined(&aliases, style)));
    }

    let see_also = variant.see_also_commands();
    if !see_also.is_empty() {
        lines.push(String::new());
        lines.push(format!("See also: {}", joined(&see_also, style)));
    }
    lines
}

fn joined(variants: &[VariantRef<'_>], style: &dyn Style) -> String {
    variants
        .iter()
        .map(|v| style.strong(&v.command_line().to_string()))
        .collect::<Vec<_>>()
        .join(", ")
}
