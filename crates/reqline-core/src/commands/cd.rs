use crate::command::{CommandVariant, VariantKind};

use super::PathSet;

/// Shorthand for [`PathSet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Cd;

impl CommandVariant for Cd {
    fn type_name(&self) -> &'static str {
        "Cd"
    }

    fn kind(&self) -> VariantKind {
        VariantKind::Alias(&PathSet)
    }
}
