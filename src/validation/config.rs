//! Validation configuration for layer construction
//!
//! Lookups never validate anything beyond debug assertions; every integrity rule is checked
//! once, while a layer is built. This module decides which of those checks run.

/// Configuration for validation during base and overlay construction
///
/// The checks guard against malformed *data*, not user input: a table generator that produced
/// a bad diff is a bug, and a chain built from it would silently answer with wrong sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ValidationConfig {
    /// Reject diffs that subtract from a property the parent layer does not have
    pub enable_diff_validation: bool,

    /// Reject properties that resolve both as a code point set and as a property of strings,
    /// and emoji entries that are not properties of strings
    pub enable_kind_validation: bool,

    /// Reject alias tables with empty aliases or empty canonical names
    pub enable_alias_validation: bool,

    /// Maximum number of overlays above the base layer (default: 64, `0` disables the limit)
    pub max_chain_depth: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enable_diff_validation: true,
            enable_kind_validation: true,
            enable_alias_validation: true,
            max_chain_depth: 64,
        }
    }
}

impl ValidationConfig {
    /// Creates a disabled validation configuration
    ///
    /// **Warning**: Use only with tables that were validated when they were generated.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enable_diff_validation: false,
            enable_kind_validation: false,
            enable_alias_validation: false,
            max_chain_depth: 0,
        }
    }

    /// Creates a minimal validation configuration
    ///
    /// Only keeps the diff rule, which is the one that would otherwise corrupt resolved sets.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            enable_diff_validation: true,
            enable_kind_validation: false,
            enable_alias_validation: false,
            max_chain_depth: 64,
        }
    }

    /// Creates a comprehensive validation configuration
    #[must_use]
    pub fn comprehensive() -> Self {
        Self::default()
    }

    /// Creates a validation configuration with all checks enabled and a tight depth limit
    #[must_use]
    pub fn strict() -> Self {
        Self {
            enable_diff_validation: true,
            enable_kind_validation: true,
            enable_alias_validation: true,
            max_chain_depth: 32,
        }
    }

    /// Returns `true` if `depth` overlays are allowed above the base
    #[must_use]
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_chain_depth == 0 || depth <= self.max_chain_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_config_presets() {
        let disabled = ValidationConfig::disabled();
        assert!(!disabled.enable_diff_validation);
        assert!(!disabled.enable_kind_validation);
        assert!(!disabled.enable_alias_validation);
        assert_eq!(disabled.max_chain_depth, 0);

        let minimal = ValidationConfig::minimal();
        assert!(minimal.enable_diff_validation);
        assert!(!minimal.enable_kind_validation);
        assert!(!minimal.enable_alias_validation);

        let strict = ValidationConfig::strict();
        assert!(strict.enable_diff_validation);
        assert!(strict.enable_kind_validation);
        assert!(strict.enable_alias_validation);
        assert_eq!(strict.max_chain_depth, 32);
    }

    #[test]
    fn test_default_config() {
        assert_eq!(ValidationConfig::default(), ValidationConfig::comprehensive());
    }

    #[test]
    fn test_depth_limit() {
        assert!(ValidationConfig::disabled().allows_depth(10_000));
        assert!(ValidationConfig::default().allows_depth(64));
        assert!(!ValidationConfig::default().allows_depth(65));
    }
}
