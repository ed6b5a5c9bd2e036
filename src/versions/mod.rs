//! Version numbers and the published per-version chain.
//!
//! - [`UnicodeVersion`] - A `major.minor.update` Unicode version
//! - [`UnicodeProperties`] - Every registered version behind one lookup surface
//! - [`UnicodePropertiesBuilder`] - Builds the chain root-first

mod chain;
mod version;

pub use chain::{UnicodeProperties, UnicodePropertiesBuilder};
pub use version::UnicodeVersion;
