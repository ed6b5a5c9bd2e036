//! # unidelta Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the unidelta library. Import this module to get quick access to everything needed to
//! build a version chain and resolve properties against it.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all unidelta operations
pub use crate::Error;

/// The result type used throughout unidelta
pub use crate::Result;

/// Configuration for integrity validation during layer construction
pub use crate::ValidationConfig;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Registry of every supported version
pub use crate::versions::{UnicodeProperties, UnicodePropertiesBuilder, UnicodeVersion};

// ================================================================================================
// Layers
// ================================================================================================

/// The lookup trait and its implementations
pub use crate::data::{PropertyData, PropertyDataBase, PropertyDataOverlay, PropertyDataRc};

/// Per-version diffs
pub use crate::data::{DiffEntry, DiffStats, PropertyDiff};

/// Emoji sequence properties and the aggregate name
pub use crate::data::{EmojiProperty, RGI_EMOJI};

// ================================================================================================
// Values and Names
// ================================================================================================

/// Lookup results
pub use crate::sets::{ClassSetContents, CodePointSet};

/// Alias namespaces and matching
pub use crate::names::{AliasNamespace, AliasTable, AliasTables, MatchMode};
