//! Integrity checks run while layers are constructed.
//!
//! Every check collects *all* issues of its kind instead of stopping at the first one, so a
//! broken data set can be fixed in one pass. Independent checks over diff entries run in
//! parallel using [`rayon`]; the layers they read are immutable and [`Sync`].
//!
//! # Rules
//!
//! - **Diff rule**: a diff whose parent has no entry for a property must not subtract from it.
//! - **Kind rule**: a property is either a code point set or a property of strings, never both,
//!   locally or through inheritance; emoji entries must be properties of strings.
//! - **Alias rule**: alias tables contain no empty aliases and no empty canonical names.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::warn;

use crate::{
    data::{PropertyData, PropertyDiff},
    names::AliasTables,
    sets::{ClassSetContents, CodePointSet},
    validation::ValidationConfig,
    versions::UnicodeVersion,
    Error, Result,
};

/// Validates base tables and diffs before a layer is created from them.
pub struct LayerValidator;

impl LayerValidator {
    /// Validates the tables of a base layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationFailed`] listing every violated rule that `config` enables.
    pub fn validate_base(
        version: UnicodeVersion,
        properties: &HashMap<String, CodePointSet>,
        strings: &HashMap<String, ClassSetContents>,
        aliases: &AliasTables,
        config: ValidationConfig,
    ) -> Result<()> {
        let mut issues = Vec::new();

        if config.enable_kind_validation {
            issues.extend(
                strings
                    .par_iter()
                    .flat_map_iter(|(spec, contents)| {
                        let mut found = Vec::new();

                        if properties.contains_key(spec) {
                            found.push(Error::KindConflict {
                                version,
                                spec: spec.clone(),
                            });
                        }
                        if !contents.is_property_of_strings() {
                            found.push(Error::NotPropertyOfStrings {
                                version,
                                spec: spec.clone(),
                            });
                        }

                        found
                    })
                    .collect::<Vec<_>>(),
            );
        }

        if config.enable_alias_validation {
            issues.extend(Self::alias_issues(aliases));
        }

        Self::report(version, issues)
    }

    /// Validates `diff` against the layer it will be placed on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationFailed`] listing every violated rule that `config` enables.
    pub fn validate_diff(
        parent: &dyn PropertyData,
        diff: &PropertyDiff,
        config: ValidationConfig,
    ) -> Result<()> {
        let version = diff.version;
        let mut issues = Vec::new();

        if config.enable_diff_validation || config.enable_kind_validation {
            issues.extend(
                diff.properties
                    .par_iter()
                    .flat_map_iter(|(spec, entry)| {
                        let mut found = Vec::new();

                        if config.enable_diff_validation
                            && !entry.sub().is_empty()
                            && parent.retrieve_property(spec).is_none()
                        {
                            found.push(Error::SubtractFromAbsent {
                                version,
                                spec: spec.clone(),
                            });
                        }

                        if config.enable_kind_validation
                            && (diff.emoji.contains_key(spec)
                                || parent
                                    .stored_property_of_strings(spec)
                                    .is_some_and(|contents| contents.is_property_of_strings()))
                        {
                            found.push(Error::KindConflict {
                                version,
                                spec: spec.clone(),
                            });
                        }

                        found
                    })
                    .collect::<Vec<_>>(),
            );
        }

        if config.enable_kind_validation {
            issues.extend(
                diff.emoji
                    .par_iter()
                    .flat_map_iter(|(spec, contents)| {
                        let mut found = Vec::new();

                        if !contents.is_property_of_strings() {
                            found.push(Error::NotPropertyOfStrings {
                                version,
                                spec: spec.clone(),
                            });
                        }

                        // local code point diffs are reported from the property side
                        if !diff.properties.contains_key(spec)
                            && parent.retrieve_property(spec).is_some()
                        {
                            found.push(Error::KindConflict {
                                version,
                                spec: spec.clone(),
                            });
                        }

                        found
                    })
                    .collect::<Vec<_>>(),
            );
        }

        if config.enable_alias_validation {
            issues.extend(Self::alias_issues(&diff.aliases));
        }

        Self::report(version, issues)
    }

    fn alias_issues(aliases: &AliasTables) -> Vec<Error> {
        aliases
            .iter()
            .filter(|(_, table)| {
                table
                    .iter()
                    .any(|(alias, canonical)| alias.is_empty() || canonical.is_empty())
            })
            .map(|(namespace, _)| Error::EmptyAlias { namespace })
            .collect()
    }

    fn report(version: UnicodeVersion, issues: Vec<Error>) -> Result<()> {
        if issues.is_empty() {
            return Ok(());
        }

        for issue in &issues {
            warn!(%version, "{issue}");
        }

        Err(issues.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::PropertyDataBase,
        names::AliasNamespace,
        test::{self, set, V15_1},
    };

    fn issues(result: Result<()>) -> Vec<String> {
        match result {
            Ok(()) => Vec::new(),
            Err(Error::ValidationFailed { issues, .. }) => issues,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_valid_diff_passes() {
        let base = test::alpha_base();
        let diff = PropertyDiff::builder(V15_1)
            .property("Alpha", set("D"), set("B"))
            .added("NewProp", set("EF"))
            .build();

        assert!(LayerValidator::validate_diff(&base, &diff, ValidationConfig::strict()).is_ok());
    }

    #[test]
    fn test_collects_all_issues() {
        let base = test::emoji_base();
        let diff = PropertyDiff::builder(V15_1)
            .removed("Gone", set("A"))
            .removed("Missing", set("B"))
            .added("RGI_Emoji_Flag_Sequence", set("C"))
            .emoji("Alpha", ClassSetContents::property_of_strings(set("Z"), ["zz"]))
            .emoji("Plain", ClassSetContents::character_class(set("P")))
            .alias(AliasNamespace::Script, "", "Latin")
            .build();

        let found = issues(LayerValidator::validate_diff(
            &base,
            &diff,
            ValidationConfig::default(),
        ));

        assert_eq!(found.len(), 6, "{found:?}");
        assert!(found.iter().any(|i| i.contains("'Gone'") && i.contains("subtracts")));
        assert!(found.iter().any(|i| i.contains("'Missing'") && i.contains("subtracts")));
        assert!(found
            .iter()
            .any(|i| i.contains("'RGI_Emoji_Flag_Sequence'") && i.contains("both")));
        assert!(found.iter().any(|i| i.contains("'Alpha'") && i.contains("both")));
        assert!(found
            .iter()
            .any(|i| i.contains("'Plain'") && i.contains("not a property of strings")));
        assert!(found.iter().any(|i| i.contains("script alias table")));
    }

    #[test]
    fn test_disabled_config_accepts_anything() {
        let base = test::alpha_base();
        let diff = PropertyDiff::builder(V15_1)
            .removed("Missing", set("B"))
            .emoji("Alpha", ClassSetContents::character_class(set("Z")))
            .build();

        assert!(LayerValidator::validate_diff(&base, &diff, ValidationConfig::disabled()).is_ok());
        assert_eq!(
            issues(LayerValidator::validate_diff(
                &base,
                &diff,
                ValidationConfig::minimal()
            ))
            .len(),
            1
        );
    }

    #[test]
    fn test_base_rules() {
        let result = PropertyDataBase::builder(test::V15_0)
            .property_of_strings("Plain", ClassSetContents::character_class(set("P")))
            .build();

        let found = issues(result.map(|_| ()));
        assert_eq!(found.len(), 1);
        assert!(found[0].contains("'Plain'"));
    }
}
