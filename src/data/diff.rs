//! Per-version diff tables.
//!
//! A [`PropertyDiff`] is the data input of one [`crate::data::PropertyDataOverlay`]: for every
//! changed property an add-set and a sub-set, the emoji properties of strings that gained
//! members, and the aliases that are new or changed in this version. Diffs are plain data; they
//! are only checked against their parent when an overlay is built from them.
//!
//! # Usage Examples
//!
//! ```rust
//! use unidelta::{AliasNamespace, CodePointSet, PropertyDiff, UnicodeVersion};
//!
//! let diff = PropertyDiff::builder(UnicodeVersion::new(15, 1, 0))
//!     .added("Alpha", CodePointSet::from_chars(['D']))
//!     .removed("Alpha", CodePointSet::from_chars(['B']))
//!     .alias(AliasNamespace::Script, "Kawi", "Kawi")
//!     .build();
//!
//! let entry = diff.entry("Alpha").unwrap();
//! assert!(entry.add().contains_char('D'));
//! assert!(entry.sub().contains_char('B'));
//! ```

use std::collections::{hash_map::Entry, HashMap};

use crate::{
    names::{AliasNamespace, AliasTables},
    sets::{ClassSetContents, CodePointSet},
    versions::UnicodeVersion,
};

/// How one property's code point set changed relative to the parent version.
///
/// Applied as `(parent ∪ add) \ sub`, so a code point present in both sets ends up removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffEntry {
    add: CodePointSet,
    sub: CodePointSet,
}

impl DiffEntry {
    /// Creates a diff entry.
    #[must_use]
    pub fn new(add: CodePointSet, sub: CodePointSet) -> Self {
        Self { add, sub }
    }

    /// Code points gained at this version.
    #[must_use]
    pub fn add(&self) -> &CodePointSet {
        &self.add
    }

    /// Code points lost at this version.
    #[must_use]
    pub fn sub(&self) -> &CodePointSet {
        &self.sub
    }

    /// Returns `true` if the entry neither adds nor removes anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.add.is_empty() && self.sub.is_empty()
    }

    fn merge(&mut self, other: DiffEntry) {
        self.add = self.add.union(&other.add);
        self.sub = self.sub.union(&other.sub);
    }
}

/// Counts describing a diff, computed against the diff's parent layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Properties whose existing set was changed
    pub changed: usize,
    /// Properties that first appear at this version
    pub introduced: usize,
    /// Emoji properties of strings that gained members
    pub emoji: usize,
    /// New or changed aliases across all namespaces
    pub aliases: usize,
}

/// The diff tables of one Unicode version.
#[derive(Debug, Clone)]
pub struct PropertyDiff {
    pub(crate) version: UnicodeVersion,
    pub(crate) properties: HashMap<String, DiffEntry>,
    pub(crate) emoji: HashMap<String, ClassSetContents>,
    pub(crate) aliases: AliasTables,
}

impl PropertyDiff {
    /// Starts building the diff for `version`.
    #[must_use]
    pub fn builder(version: UnicodeVersion) -> PropertyDiffBuilder {
        PropertyDiffBuilder {
            diff: PropertyDiff {
                version,
                properties: HashMap::new(),
                emoji: HashMap::new(),
                aliases: AliasTables::new(),
            },
        }
    }

    /// The version this diff leads to.
    #[must_use]
    pub fn version(&self) -> UnicodeVersion {
        self.version
    }

    /// The code point diff of `spec`, if it changed at this version.
    #[must_use]
    pub fn entry(&self, spec: &str) -> Option<&DiffEntry> {
        self.properties.get(spec)
    }

    /// The emoji additions of `spec`, if any.
    #[must_use]
    pub fn emoji_entry(&self, spec: &str) -> Option<&ClassSetContents> {
        self.emoji.get(spec)
    }

    /// Iterates all code point diffs in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &DiffEntry)> {
        self.properties
            .iter()
            .map(|(spec, entry)| (spec.as_str(), entry))
    }

    /// Iterates all emoji additions in unspecified order.
    pub fn emoji_entries(&self) -> impl Iterator<Item = (&str, &ClassSetContents)> {
        self.emoji
            .iter()
            .map(|(spec, contents)| (spec.as_str(), contents))
    }

    /// New or changed aliases of this version.
    #[must_use]
    pub fn aliases(&self) -> &AliasTables {
        &self.aliases
    }

    /// Returns `true` if the diff changes nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.emoji.is_empty() && self.aliases.is_empty()
    }

    /// Computes [`DiffStats`], classifying each entry by whether `has_parent_entry` reports the
    /// property as already present in the parent version.
    pub fn stats<F>(&self, has_parent_entry: F) -> DiffStats
    where
        F: Fn(&str) -> bool,
    {
        let introduced = self
            .properties
            .keys()
            .filter(|spec| !has_parent_entry(spec))
            .count();

        DiffStats {
            changed: self.properties.len() - introduced,
            introduced,
            emoji: self.emoji.len(),
            aliases: self.aliases.len(),
        }
    }
}

/// Fluent builder for [`PropertyDiff`].
///
/// Repeated entries for the same property accumulate: add-sets and sub-sets are unioned,
/// emoji additions are merged.
#[derive(Debug, Clone)]
pub struct PropertyDiffBuilder {
    diff: PropertyDiff,
}

impl PropertyDiffBuilder {
    /// Records `add` and `sub` for `spec`.
    #[must_use]
    pub fn property(
        mut self,
        spec: impl Into<String>,
        add: CodePointSet,
        sub: CodePointSet,
    ) -> Self {
        let entry = DiffEntry::new(add, sub);
        match self.diff.properties.entry(spec.into()) {
            Entry::Occupied(mut existing) => existing.get_mut().merge(entry),
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
        }
        self
    }

    /// Records code points gained by `spec`.
    #[must_use]
    pub fn added(self, spec: impl Into<String>, add: CodePointSet) -> Self {
        self.property(spec, add, CodePointSet::empty())
    }

    /// Records code points lost by `spec`.
    #[must_use]
    pub fn removed(self, spec: impl Into<String>, sub: CodePointSet) -> Self {
        self.property(spec, CodePointSet::empty(), sub)
    }

    /// Records members gained by the string-valued property `spec`.
    #[must_use]
    pub fn emoji(mut self, spec: impl Into<String>, contents: ClassSetContents) -> Self {
        self.diff
            .emoji
            .entry(spec.into())
            .and_modify(|existing| {
                *existing = existing.union_unicode_property_of_strings(&contents);
            })
            .or_insert(contents);
        self
    }

    /// Records a new or changed alias.
    #[must_use]
    pub fn alias(
        mut self,
        namespace: AliasNamespace,
        alias: impl Into<String>,
        canonical: impl Into<String>,
    ) -> Self {
        self.diff.aliases.insert(namespace, alias, canonical);
        self
    }

    /// Finishes the diff.
    #[must_use]
    pub fn build(self) -> PropertyDiff {
        self.diff
    }
}
