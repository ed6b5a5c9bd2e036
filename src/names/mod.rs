//! Alias namespaces, alias tables and name-matching policies.
//!
//! Every layer of the chain carries one [`AliasTables`] value: four independent
//! [`AliasTable`]s, one per [`AliasNamespace`]. The base layer holds the complete tables, an
//! overlay only the aliases that are new or changed in its version.

mod aliases;
mod matching;

pub use aliases::{AliasNamespace, AliasTable, AliasTables};
pub use matching::{loose_name, MatchMode};
