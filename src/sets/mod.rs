//! Value types returned by property lookups.
//!
//! - [`CodePointSet`] - Immutable set of code points over an ICU4X inversion list, the answer
//!   for ordinary properties
//! - [`ClassSetContents`] - Character class or property of strings, the answer for
//!   string-valued (emoji sequence) properties
//!
//! Both types are cheap to clone; their payloads are shared through [`std::sync::Arc`].

mod codepoints;
mod contents;

pub use codepoints::{CodePointSet, MAX_CODE_POINT};
pub use contents::ClassSetContents;
