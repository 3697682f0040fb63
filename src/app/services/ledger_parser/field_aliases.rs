//! Header label to canonical field resolution
//!
//! Ledger headers overlap heavily ("carro" vs "ano carro", "modelo" vs
//! "ano modelo", "valor" vs "valor financiado"). Aliases are therefore tried
//! longest first, whole-cell matches before substring matches.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::app::models::SaleField;
use crate::config::ImporterConfig;
use crate::constants::DEFAULT_FIELD_ALIASES;

static BUILTIN_ALIASES: LazyLock<Arc<FieldAliasTable>> =
    LazyLock::new(|| Arc::new(FieldAliasTable::with_extra(std::iter::empty())));

/// Immutable list of `(field, alias)` pairs sorted by alias length, longest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAliasTable {
    entries: Vec<(SaleField, String)>,
}

impl FieldAliasTable {
    /// The built-in table, built once per process
    pub fn builtin() -> Arc<FieldAliasTable> {
        Arc::clone(&BUILTIN_ALIASES)
    }

    /// Built-in table plus the aliases configured in `config`
    pub fn from_config(config: &ImporterConfig) -> Arc<FieldAliasTable> {
        if config.extra_aliases.is_empty() {
            return Self::builtin();
        }

        let extra = config.extra_aliases.iter().flat_map(|(field, aliases)| {
            aliases.iter().map(move |alias| (*field, alias.as_str()))
        });
        Arc::new(Self::with_extra(extra))
    }

    fn with_extra<'a>(extra: impl Iterator<Item = (SaleField, &'a str)>) -> Self {
        let builtin = DEFAULT_FIELD_ALIASES
            .iter()
            .flat_map(|(field, aliases)| aliases.iter().map(move |alias| (*field, *alias)));

        let mut entries: Vec<(SaleField, String)> = builtin
            .chain(extra)
            .map(|(field, alias)| (field, alias.trim().to_lowercase()))
            .filter(|(_, alias)| !alias.is_empty())
            .collect();

        let mut seen = HashSet::new();
        entries.retain(|entry| seen.insert(entry.clone()));

        // Stable: equal lengths keep declaration order, built-ins before extras.
        entries.sort_by(|(_, a), (_, b)| b.chars().count().cmp(&a.chars().count()));

        Self { entries }
    }

    /// Resolve one header cell to a canonical field
    pub fn resolve(&self, cell: &str) -> Option<SaleField> {
        let label = cell.trim().to_lowercase();
        if label.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|(_, alias)| *alias == label)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(_, alias)| label.contains(alias.as_str()))
            })
            .map(|(field, _)| *field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aliases in resolution order
    pub fn iter(&self) -> impl Iterator<Item = (SaleField, &str)> {
        self.entries
            .iter()
            .map(|(field, alias)| (*field, alias.as_str()))
    }
}
