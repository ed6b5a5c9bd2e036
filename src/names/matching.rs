//! Name-matching policies for alias resolution.

use std::borrow::Cow;

use strum::{Display, EnumIter};

/// How strictly an alias string must match a table key.
///
/// The mode is chosen by the caller and passed unchanged through every layer of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum MatchMode {
    /// Byte-for-byte comparison.
    #[default]
    #[strum(to_string = "exact")]
    Exact,
    /// UAX44-LM3 loose matching: case, whitespace, `_`, `-` and a leading `is` are ignored.
    #[strum(to_string = "loose")]
    Loose,
}

impl MatchMode {
    /// Returns the key `name` is looked up under in this mode.
    #[must_use]
    pub fn key<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            MatchMode::Exact => Cow::Borrowed(name),
            MatchMode::Loose => Cow::Owned(loose_name(name)),
        }
    }
}

/// Normalizes a symbolic name according to UAX44-LM3.
///
/// Property names and property value aliases are ASCII, so anything that isn't is dropped.
///
/// See: <http://unicode.org/reports/tr44/#UAX44-LM3>
#[must_use]
pub fn loose_name(name: &str) -> String {
    let bytes = name.as_bytes();
    let starts_with_is = bytes.len() >= 2 && bytes[..2].eq_ignore_ascii_case(b"is");
    let start = if starts_with_is { 2 } else { 0 };

    let mut normalized = String::with_capacity(bytes.len());
    for &b in &bytes[start..] {
        match b {
            b' ' | b'_' | b'-' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C => {}
            b'A'..=b'Z' => normalized.push(char::from(b.to_ascii_lowercase())),
            0..=0x7F => normalized.push(char::from(b)),
            _ => {}
        }
    }

    // 'isc' abbreviates the Other general category, not 'c'
    if starts_with_is && normalized == "c" {
        return "isc".to_string();
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loose_name() {
        assert_eq!(loose_name("Greek"), "greek");
        assert_eq!(loose_name("Lowercase_Letter"), "lowercaseletter");
        assert_eq!(loose_name("lowercase letter"), "lowercaseletter");
        assert_eq!(loose_name("Lowercase-Letter"), "lowercaseletter");
        assert_eq!(loose_name("IsGreek"), "greek");
        assert_eq!(loose_name("isc"), "isc");
        assert_eq!(loose_name("is_c"), "isc");
        assert_eq!(loose_name("Grëek"), "grek");
        assert_eq!(loose_name(""), "");
    }

    #[test]
    fn test_mode_keys() {
        assert!(matches!(MatchMode::Exact.key("Lu"), Cow::Borrowed("Lu")));
        assert_eq!(MatchMode::Loose.key("L_u"), "lu");
        assert_eq!(MatchMode::default(), MatchMode::Exact);
        assert_eq!(MatchMode::Loose.to_string(), "loose");
    }
}
