//! Alias tables mapping alternate names to canonical names.

use std::{collections::HashMap, ops::Index};

use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

use crate::names::{loose_name, MatchMode};

/// The four independent alias namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumCount)]
pub enum AliasNamespace {
    /// Binary and enumerated property names
    #[strum(to_string = "property")]
    Property,
    /// General category values
    #[strum(to_string = "general category")]
    GeneralCategory,
    /// Script values
    #[strum(to_string = "script")]
    Script,
    /// Block values
    #[strum(to_string = "block")]
    Block,
}

/// A single alias namespace: alias to canonical name.
///
/// Every entry is indexed twice, under its exact spelling and under its UAX44-LM3 loose key,
/// so a lookup in either [`MatchMode`] is a single hash lookup. When two aliases collapse onto
/// the same loose key, the entry inserted last wins.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    exact: HashMap<String, String>,
    loose: HashMap<String, String>,
}

impl AliasTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an alias.
    pub fn insert(&mut self, alias: impl Into<String>, canonical: impl Into<String>) {
        let alias = alias.into();
        let canonical = canonical.into();

        self.loose.insert(loose_name(&alias), canonical.clone());
        self.exact.insert(alias, canonical);
    }

    /// Resolves `alias` to its canonical name.
    #[must_use]
    pub fn lookup(&self, alias: &str, mode: MatchMode) -> Option<&str> {
        let table = match mode {
            MatchMode::Exact => &self.exact,
            MatchMode::Loose => &self.loose,
        };

        table.get(mode.key(alias).as_ref()).map(String::as_str)
    }

    /// Number of aliases in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    /// Returns `true` if the table holds no aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    /// Iterates `(alias, canonical)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.exact
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()))
    }
}

impl<A, C> FromIterator<(A, C)> for AliasTable
where
    A: Into<String>,
    C: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (A, C)>>(iter: T) -> Self {
        let mut table = AliasTable::new();
        for (alias, canonical) in iter {
            table.insert(alias, canonical);
        }
        table
    }
}

/// One [`AliasTable`] per [`AliasNamespace`].
#[derive(Debug, Clone, Default)]
pub struct AliasTables {
    tables: [AliasTable; AliasNamespace::COUNT],
}

impl AliasTables {
    /// Creates empty tables for every namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The table of `namespace`.
    #[must_use]
    pub fn table(&self, namespace: AliasNamespace) -> &AliasTable {
        &self.tables[namespace as usize]
    }

    /// Mutable access to the table of `namespace`.
    pub fn table_mut(&mut self, namespace: AliasNamespace) -> &mut AliasTable {
        &mut self.tables[namespace as usize]
    }

    /// Adds or replaces an alias in `namespace`.
    pub fn insert(
        &mut self,
        namespace: AliasNamespace,
        alias: impl Into<String>,
        canonical: impl Into<String>,
    ) {
        self.table_mut(namespace).insert(alias, canonical);
    }

    /// Resolves `alias` in `namespace`.
    #[must_use]
    pub fn lookup(&self, namespace: AliasNamespace, alias: &str, mode: MatchMode) -> Option<&str> {
        self.table(namespace).lookup(alias, mode)
    }

    /// Total number of aliases across all namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.iter().map(AliasTable::len).sum()
    }

    /// Returns `true` if no namespace holds an alias.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(AliasTable::is_empty)
    }

    /// Iterates the namespaces together with their tables.
    pub fn iter(&self) -> impl Iterator<Item = (AliasNamespace, &AliasTable)> {
        AliasNamespace::iter().map(|namespace| (namespace, self.table(namespace)))
    }
}

impl Index<AliasNamespace> for AliasTables {
    type Output = AliasTable;

    fn index(&self, namespace: AliasNamespace) -> &Self::Output {
        self.table(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_loose_lookup() {
        let table: AliasTable = [
            ("Lu", "Uppercase_Letter"),
            ("Uppercase_Letter", "Uppercase_Letter"),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.lookup("Lu", MatchMode::Exact), Some("Uppercase_Letter"));
        assert_eq!(table.lookup("lu", MatchMode::Exact), None);
        assert_eq!(table.lookup("lu", MatchMode::Loose), Some("Uppercase_Letter"));
        assert_eq!(
            table.lookup("uppercase letter", MatchMode::Loose),
            Some("Uppercase_Letter")
        );
        assert_eq!(table.lookup("Ll", MatchMode::Loose), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = AliasTable::new();
        table.insert("Qaac", "Coptic");
        table.insert("Qaac", "Coptic_Old");
        assert_eq!(table.lookup("Qaac", MatchMode::Exact), Some("Coptic_Old"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_namespaces_are_independent() {
        let mut tables = AliasTables::new();
        tables.insert(AliasNamespace::Script, "Latn", "Latin");
        tables.insert(AliasNamespace::Block, "ASCII", "Basic_Latin");

        assert_eq!(
            tables.lookup(AliasNamespace::Script, "Latn", MatchMode::Exact),
            Some("Latin")
        );
        assert_eq!(tables.lookup(AliasNamespace::Block, "Latn", MatchMode::Exact), None);
        assert_eq!(tables[AliasNamespace::Block].len(), 1);
        assert!(tables[AliasNamespace::Property].is_empty());
        assert_eq!(tables.len(), 2);
        assert_eq!(tables.iter().count(), AliasNamespace::COUNT);
    }

    #[test]
    fn test_namespace_display() {
        assert_eq!(AliasNamespace::GeneralCategory.to_string(), "general category");
        assert_eq!(AliasNamespace::iter().count(), 4);
    }
}
