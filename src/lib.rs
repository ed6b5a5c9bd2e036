// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # unidelta
//!
//! Version-layered Unicode property data for regular-expression engines.
//!
//! A pattern compiler resolving `\p{...}` escapes needs, for a given Unicode version, the code
//! point set of every binary property, the string-valued emoji properties, and the alias tables
//! that map names such as `Alphabetic` or `Latn` to their canonical spelling. Shipping a complete
//! copy of those tables for every supported version is wasteful, since each version changes only
//! a small fraction of them.
//!
//! `unidelta` stores **one** complete base layer and, for every later version, an overlay that
//! records only what changed. Overlays delegate to their parent, so a lookup against the newest
//! version transparently composes every diff down to the base.
//!
//! ## Features
//!
//! - **Delta storage** - One full table plus small per-version diffs
//! - **Properties of strings** - Emoji sequence properties, including the synthesized
//!   `RGI_Emoji` aggregate
//! - **Alias resolution** - Four alias namespaces with exact or loose (UAX44-LM3) matching
//! - **Construction-time validation** - Integrity violations in generated data fail loudly
//!   while the chain is built, never during lookups
//! - **Thread safe** - All layers are immutable and shareable across threads
//!
//! ## Quick Start
//!
//! ```rust
//! use unidelta::prelude::*;
//!
//! let v15 = UnicodeVersion::new(15, 0, 0);
//! let v15_1 = UnicodeVersion::new(15, 1, 0);
//!
//! let base = PropertyDataBase::builder(v15)
//!     .property("Alpha", CodePointSet::from_chars(['A', 'B', 'C']))
//!     .alias(AliasNamespace::Script, "Latn", "Latin")
//!     .build()?;
//!
//! let diff = PropertyDiff::builder(v15_1)
//!     .property(
//!         "Alpha",
//!         CodePointSet::from_chars(['D']),
//!         CodePointSet::from_chars(['B']),
//!     )
//!     .build();
//!
//! let properties = UnicodeProperties::builder(base).diff(diff).build()?;
//!
//! assert_eq!(
//!     properties.resolve_property_set("Alpha"),
//!     Some(CodePointSet::from_chars(['A', 'C', 'D']))
//! );
//! assert_eq!(
//!     properties.resolve_alias(AliasNamespace::Script, "latn", MatchMode::Loose),
//!     Some("Latin")
//! );
//! # Ok::<(), unidelta::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`sets`] - [`CodePointSet`] and [`ClassSetContents`], the values lookups return
//! - [`names`] - Alias namespaces, alias tables and [`MatchMode`]
//! - [`data`] - The [`PropertyData`] trait, the base layer and version overlays
//! - [`validation`] - Integrity rules applied while layers are constructed
//! - [`versions`] - [`UnicodeVersion`] and the [`UnicodeProperties`] registry
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Lookups never fail; something that does not exist is `None`. Building layers returns
//! [`Result`], and corrupted data is reported with every issue at once:
//!
//! ```rust
//! use unidelta::{CodePointSet, Error, PropertyDataBase, PropertyDiff, UnicodeProperties,
//!     UnicodeVersion};
//!
//! let base = PropertyDataBase::builder(UnicodeVersion::new(15, 0, 0)).build()?;
//! let diff = PropertyDiff::builder(UnicodeVersion::new(15, 1, 0))
//!     .removed("Missing", CodePointSet::from_chars(['x']))
//!     .build();
//!
//! match UnicodeProperties::builder(base).diff(diff).build() {
//!     Err(Error::ValidationFailed { count, issues }) => {
//!         assert_eq!(count, 1);
//!         assert!(issues[0].contains("Missing"));
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! # Ok::<(), unidelta::Error>(())
//! ```

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use unidelta::prelude::*;
///
/// let version: UnicodeVersion = "15.1".parse()?;
/// assert_eq!(version, UnicodeVersion::new(15, 1, 0));
/// # Ok::<(), unidelta::Error>(())
/// ```
pub mod prelude;

/// Code point sets and string-valued property contents.
pub mod sets;

/// Alias tables and name matching.
pub mod names;

/// The layered property data model.
///
/// See the module documentation for the composition rules every overlay applies.
pub mod data;

/// Construction-time integrity validation.
pub mod validation;

/// Unicode versions and the per-version registry.
pub mod versions;

/// `unidelta` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `unidelta` Error type
///
/// Only produced while tables, layers or the registry are being constructed.
pub use error::Error;

pub use data::{
    EmojiProperty, PropertyData, PropertyDataBase, PropertyDataOverlay, PropertyDataRc,
    PropertyDiff, RGI_EMOJI,
};
pub use names::{AliasNamespace, AliasTables, MatchMode};
pub use sets::{ClassSetContents, CodePointSet};
pub use validation::ValidationConfig;
pub use versions::{UnicodeProperties, UnicodePropertiesBuilder, UnicodeVersion};
