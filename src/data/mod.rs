//! Layered property data: one full base table plus a chain of per-version diffs.
//!
//! # Architecture
//!
//! ```text
//! PropertyDataOverlay (16.0) ──parent──▶ PropertyDataOverlay (15.1) ──parent──▶ PropertyDataBase (15.0)
//!   diff + emoji + aliases                 diff + emoji + aliases                 full tables
//! ```
//!
//! Every layer implements [`PropertyData`]. A lookup is issued against the outermost layer and
//! recurses parent-ward; each overlay composes its local diff with whatever its parent answered.
//! Parents are shared through [`PropertyDataRc`], so a long chain never duplicates the base
//! tables.
//!
//! # Composition Rules
//!
//! | parent entry | local diff     | result                          |
//! |--------------|----------------|---------------------------------|
//! | any          | none           | parent entry                    |
//! | none         | `(add, ∅)`     | `add`                           |
//! | `P`          | `(add, sub)`   | `(P ∪ add) \ sub`               |
//!
//! Properties of strings have no subtraction channel: a local emoji entry is unioned into the
//! inherited value, so those properties only grow from version to version.
//!
//! # Thread Safety
//!
//! All layers are immutable after construction and are [`Send`] and [`Sync`]; concurrent
//! lookups need no synchronization.

mod base;
mod diff;
mod emoji;
mod overlay;

use std::{fmt, sync::Arc};

pub use base::{PropertyDataBase, PropertyDataBaseBuilder};
pub use diff::{DiffEntry, DiffStats, PropertyDiff, PropertyDiffBuilder};
pub use emoji::{EmojiProperty, RGI_EMOJI};
pub use overlay::PropertyDataOverlay;

use crate::{
    names::{AliasNamespace, MatchMode},
    sets::{ClassSetContents, CodePointSet},
    versions::UnicodeVersion,
};

/// A reference counted handle to any layer of the chain.
pub type PropertyDataRc = Arc<dyn PropertyData>;

/// Lookup operations shared by the base layer and every overlay.
///
/// Implementors provide the stored (composed) answers; the provided methods derive the
/// `RGI_Emoji` aggregate and the four per-namespace alias lookups from them.
pub trait PropertyData: Send + Sync + fmt::Debug {
    /// The Unicode version this layer describes.
    fn version(&self) -> UnicodeVersion;

    /// Number of overlays between this layer and the base (`0` for the base itself).
    fn depth(&self) -> usize;

    /// Resolves `spec` to its code point set at this layer's version.
    fn retrieve_property(&self, spec: &str) -> Option<CodePointSet>;

    /// Resolves `spec` to its string-valued answer, without synthesizing `RGI_Emoji`.
    ///
    /// Code point properties are returned wrapped as [`ClassSetContents::CharacterClass`].
    /// Overlays consult their parent through this method, so an aggregate computed for an older
    /// version can never shadow emoji added by a newer one.
    fn stored_property_of_strings(&self, spec: &str) -> Option<ClassSetContents>;

    /// Resolves `alias` in `namespace` under `mode`.
    fn lookup_alias(&self, namespace: AliasNamespace, alias: &str, mode: MatchMode)
        -> Option<&str>;

    /// Resolves `spec` to its string-valued answer at this layer's version.
    ///
    /// Identical to [`Self::stored_property_of_strings`], except that `RGI_Emoji` without an
    /// explicit entry anywhere in the chain resolves to [`Self::rgi_emoji`].
    fn retrieve_property_of_strings(&self, spec: &str) -> Option<ClassSetContents> {
        match self.stored_property_of_strings(spec) {
            Some(contents) => Some(contents),
            None if spec == RGI_EMOJI => self.rgi_emoji(),
            None => None,
        }
    }

    /// Supplies the `RGI_Emoji` aggregate: the union of every [`EmojiProperty`] known at this
    /// layer's version, or `None` if none of them is.
    fn rgi_emoji(&self) -> Option<ClassSetContents> {
        emoji::aggregate(self)
    }

    /// Resolves a property name alias.
    fn lookup_property_alias(&self, alias: &str, mode: MatchMode) -> Option<&str> {
        self.lookup_alias(AliasNamespace::Property, alias, mode)
    }

    /// Resolves a general category alias.
    fn lookup_general_category_alias(&self, alias: &str, mode: MatchMode) -> Option<&str> {
        self.lookup_alias(AliasNamespace::GeneralCategory, alias, mode)
    }

    /// Resolves a script alias.
    fn lookup_script_alias(&self, alias: &str, mode: MatchMode) -> Option<&str> {
        self.lookup_alias(AliasNamespace::Script, alias, mode)
    }

    /// Resolves a block alias.
    fn lookup_block_alias(&self, alias: &str, mode: MatchMode) -> Option<&str> {
        self.lookup_alias(AliasNamespace::Block, alias, mode)
    }
}
