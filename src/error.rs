use thiserror::Error;

use crate::{names::AliasNamespace, versions::UnicodeVersion};

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Errors are only ever produced while tables and layers are being *constructed*. Lookups never
/// fail: a property, alias or string-valued property that does not exist anywhere in the chain
/// is reported as `None`, and it is up to the caller to turn that into an "unknown property"
/// diagnostic.
///
/// # Error Categories
///
/// ## Data-integrity Errors
/// - [`Error::SubtractFromAbsent`] - A diff removes code points from a property its parent lacks
/// - [`Error::KindConflict`] - A property resolves both as a code point set and as strings
/// - [`Error::NotPropertyOfStrings`] - An emoji diff entry is a plain character class
/// - [`Error::EmptyAlias`] - An alias table contains an empty key or canonical name
///
/// ## Parse Errors
/// - [`Error::Malformed`] - Input text, such as a version string, that cannot be parsed
///
/// ## Set Construction Errors
/// - [`Error::InvalidCodePoint`] - Value above `U+10FFFF`
/// - [`Error::InvalidRange`] - Range with `start > end`
///
/// ## Chain Errors
/// - [`Error::ChainTooDeep`] - More overlays than the configured limit
/// - [`Error::VersionOrder`] - Versions registered out of order
/// - [`Error::UnknownVersion`] - Lookup against a version that is not registered
/// - [`Error::ValidationFailed`] - Aggregated validation report
///
/// # Examples
///
/// ```rust
/// use unidelta::{CodePointSet, Error, PropertyDataBase, PropertyDataOverlay, PropertyDiff,
///     UnicodeVersion, ValidationConfig};
/// use std::sync::Arc;
///
/// let base = Arc::new(PropertyDataBase::builder(UnicodeVersion::new(15, 0, 0)).build()?);
/// let diff = PropertyDiff::builder(UnicodeVersion::new(15, 1, 0))
///     .property(
///         "NewProp",
///         CodePointSet::from_chars(['E']),
///         CodePointSet::from_chars(['F']),
///     )
///     .build();
///
/// match PropertyDataOverlay::new(base, diff, ValidationConfig::default()) {
///     Err(Error::ValidationFailed { count, .. }) => assert_eq!(count, 1),
///     other => panic!("unexpected: {other:?}"),
/// }
/// # Ok::<(), unidelta::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A diff subtracts code points from a property the parent layer does not have.
    ///
    /// A diff can only remove what already exists; a property introduced at a version is
    /// described by its add-set alone.
    #[error("{version}: diff for '{spec}' subtracts from a property absent in the parent")]
    SubtractFromAbsent {
        /// Version of the offending diff
        version: UnicodeVersion,
        /// The property spec
        spec: String,
    },

    /// A property spec resolves both as a code point set and as a string-valued property.
    #[error("{version}: '{spec}' is both a code point property and a property of strings")]
    KindConflict {
        /// Version at which the conflict was detected
        version: UnicodeVersion,
        /// The property spec
        spec: String,
    },

    /// An emoji diff entry is a character class instead of a property of strings.
    #[error("{version}: emoji diff for '{spec}' is not a property of strings")]
    NotPropertyOfStrings {
        /// Version of the offending diff
        version: UnicodeVersion,
        /// The property spec
        spec: String,
    },

    /// An alias table contains an empty alias or an empty canonical name.
    #[error("Empty alias or canonical name in the {namespace} alias table")]
    EmptyAlias {
        /// Namespace of the offending table
        namespace: AliasNamespace,
    },

    /// A code point outside of `0..=0x10FFFF`.
    #[error("Invalid code point - {0:#X}")]
    InvalidCodePoint(u32),

    /// A range whose start lies after its end.
    #[error("Invalid code point range - {start:#X}..={end:#X}")]
    InvalidRange {
        /// First code point of the range
        start: u32,
        /// Last code point of the range
        end: u32,
    },

    /// The overlay chain is deeper than the configured maximum.
    #[error("Overlay chain depth {depth} exceeds the maximum of {max}")]
    ChainTooDeep {
        /// Depth the new overlay would have
        depth: usize,
        /// Configured maximum
        max: usize,
    },

    /// Versions were registered out of order.
    ///
    /// Every overlay must describe a strictly newer version than its parent.
    #[error("Version {next} does not follow {previous}")]
    VersionOrder {
        /// Version of the parent layer
        previous: UnicodeVersion,
        /// Version of the layer being added
        next: UnicodeVersion,
    },

    /// The requested version is not part of the chain.
    #[error("Unicode version {0} is not registered")]
    UnknownVersion(UnicodeVersion),

    /// Validation of a layer found one or more integrity issues.
    ///
    /// All issues are collected before failing so that a broken data set can be fixed in one go.
    #[error("Validation found {count} issue(s): {}", .issues.join("; "))]
    ValidationFailed {
        /// Number of issues found
        count: usize,
        /// Human readable description of every issue
        issues: Vec<String>,
    },

    /// Textual input could not be parsed.
    ///
    /// Carries the source location where it was detected for debugging purposes.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },
}

impl From<Vec<Error>> for Error {
    fn from(errors: Vec<Error>) -> Self {
        let issues: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Error::ValidationFailed {
            count: issues.len(),
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_macro_records_location() {
        let err = malformed_error!("broken {}", 42);
        match err {
            Error::Malformed {
                message,
                file,
                line,
            } => {
                assert_eq!(message, "broken 42");
                assert!(file.ends_with("error.rs"));
                assert!(line > 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_aggregate_from_vec() {
        let err: Error = vec![
            Error::InvalidCodePoint(0x110000),
            Error::InvalidRange { start: 2, end: 1 },
        ]
        .into();

        match &err {
            Error::ValidationFailed { count, issues } => {
                assert_eq!(*count, 2);
                assert!(issues[0].contains("0x110000"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("Validation found 2 issue(s)"));
    }
}
