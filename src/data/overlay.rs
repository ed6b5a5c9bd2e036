//! Diff layers on top of a parent layer.
//!
//! A [`PropertyDataOverlay`] stores only what changed between its parent's version and its own:
//! per property an add-set and a sub-set, the emoji properties of strings that gained members,
//! and new or changed aliases. Everything else is answered by delegating to the parent, which
//! may itself be an overlay.
//!
//! # Usage Examples
//!
//! ```rust
//! use unidelta::{CodePointSet, PropertyData, PropertyDataBase, PropertyDataOverlay,
//!     PropertyDiff, UnicodeVersion, ValidationConfig};
//! use std::sync::Arc;
//!
//! let base = PropertyDataBase::builder(UnicodeVersion::new(15, 0, 0))
//!     .property("Alpha", CodePointSet::from_chars(['A', 'B', 'C']))
//!     .build()?;
//!
//! let diff = PropertyDiff::builder(UnicodeVersion::new(15, 1, 0))
//!     .property("Alpha", CodePointSet::from_chars(['D']), CodePointSet::from_chars(['B']))
//!     .build();
//!
//! let overlay = PropertyDataOverlay::new(Arc::new(base), diff, ValidationConfig::default())?;
//! assert_eq!(
//!     overlay.retrieve_property("Alpha"),
//!     Some(CodePointSet::from_chars(['A', 'C', 'D']))
//! );
//! # Ok::<(), unidelta::Error>(())
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::{
    data::{DiffEntry, PropertyData, PropertyDataRc, PropertyDiff},
    names::{AliasNamespace, AliasTables, MatchMode},
    sets::{ClassSetContents, CodePointSet},
    validation::{LayerValidator, ValidationConfig},
    versions::UnicodeVersion,
    Error, Result,
};

/// One version's diff, layered over its predecessor.
///
/// Holds a shared handle to exactly one parent. The parent is never copied; any number of
/// lookups through any number of overlays read the same base tables.
#[derive(Debug)]
pub struct PropertyDataOverlay {
    parent: PropertyDataRc,
    version: UnicodeVersion,
    depth: usize,
    properties: HashMap<String, DiffEntry>,
    emoji: HashMap<String, ClassSetContents>,
    aliases: AliasTables,
}

impl PropertyDataOverlay {
    /// Layers `diff` over `parent`.
    ///
    /// The diff is validated against the parent according to `config` before the overlay is
    /// created; an overlay that exists is one whose data passed every enabled check.
    ///
    /// # Errors
    ///
    /// - [`Error::VersionOrder`] if `diff` is not strictly newer than `parent`
    /// - [`Error::ChainTooDeep`] if the overlay would exceed `config.max_chain_depth`
    /// - [`Error::ValidationFailed`] if the diff violates an enabled integrity rule
    pub fn new(
        parent: PropertyDataRc,
        diff: PropertyDiff,
        config: ValidationConfig,
    ) -> Result<Self> {
        let previous = parent.version();
        if diff.version <= previous {
            return Err(Error::VersionOrder {
                previous,
                next: diff.version,
            });
        }

        let depth = parent.depth() + 1;
        if !config.allows_depth(depth) {
            return Err(Error::ChainTooDeep {
                depth,
                max: config.max_chain_depth,
            });
        }

        LayerValidator::validate_diff(parent.as_ref(), &diff, config)?;

        let stats = diff.stats(|spec| parent.retrieve_property(spec).is_some());
        debug!(
            version = %diff.version,
            parent = %previous,
            depth,
            changed = stats.changed,
            introduced = stats.introduced,
            emoji = stats.emoji,
            aliases = stats.aliases,
            "built property overlay"
        );

        Ok(Self {
            parent,
            version: diff.version,
            depth,
            properties: diff.properties,
            emoji: diff.emoji,
            aliases: diff.aliases,
        })
    }

    /// The layer this overlay delegates to.
    #[must_use]
    pub fn parent(&self) -> &PropertyDataRc {
        &self.parent
    }

    /// The local code point diff of `spec`, if it changed at this version.
    #[must_use]
    pub fn local_entry(&self, spec: &str) -> Option<&DiffEntry> {
        self.properties.get(spec)
    }

    /// The local emoji additions of `spec`, if any.
    #[must_use]
    pub fn local_emoji(&self, spec: &str) -> Option<&ClassSetContents> {
        self.emoji.get(spec)
    }

    /// The aliases that are new or changed at this version.
    #[must_use]
    pub fn local_aliases(&self) -> &AliasTables {
        &self.aliases
    }
}

impl PropertyData for PropertyDataOverlay {
    fn version(&self) -> UnicodeVersion {
        self.version
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn retrieve_property(&self, spec: &str) -> Option<CodePointSet> {
        let parent_entry = self.parent.retrieve_property(spec);
        let Some(diff) = self.properties.get(spec) else {
            return parent_entry;
        };

        match parent_entry {
            None => {
                debug_assert!(
                    diff.sub().is_empty(),
                    "{}: diff for '{spec}' subtracts from a property absent in the parent",
                    self.version
                );
                Some(diff.add().clone())
            }
            // additions first, then removals: sub wins over add
            Some(parent_set) => Some(parent_set.union(diff.add()).subtract(diff.sub())),
        }
    }

    fn stored_property_of_strings(&self, spec: &str) -> Option<ClassSetContents> {
        if let Some(set) = self.retrieve_property(spec) {
            debug_assert!(
                !self.emoji.contains_key(spec),
                "{}: '{spec}' is both a code point property and a property of strings",
                self.version
            );
            return Some(ClassSetContents::character_class(set));
        }

        let parent_entry = self.parent.stored_property_of_strings(spec);
        let diff = self.emoji.get(spec);

        match (parent_entry, diff) {
            (None, None) => None,
            (None, Some(diff)) => Some(diff.clone()),
            (Some(parent_entry), None) => Some(parent_entry),
            // string properties only ever grow
            (Some(parent_entry), Some(diff)) => {
                Some(parent_entry.union_unicode_property_of_strings(diff))
            }
        }
    }

    fn lookup_alias(
        &self,
        namespace: AliasNamespace,
        alias: &str,
        mode: MatchMode,
    ) -> Option<&str> {
        match self.aliases.lookup(namespace, alias, mode) {
            Some(canonical) => Some(canonical),
            None => self.parent.lookup_alias(namespace, alias, mode),
        }
    }
}
