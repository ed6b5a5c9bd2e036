//! Construction-time validation of base tables and diffs.
//!
//! - [`ValidationConfig`] - Which integrity rules run
//! - [`LayerValidator`] - The rules themselves
//!
//! Integrity violations are data-generation bugs. They are reported as
//! [`crate::Error::ValidationFailed`] while the chain is being built; at lookup time the same
//! rules are only guarded by debug assertions.

mod config;
mod layers;

pub use config::ValidationConfig;
pub use layers::LayerValidator;
