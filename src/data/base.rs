//! The root layer of the chain, holding complete tables.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    data::PropertyData,
    names::{AliasNamespace, AliasTables, MatchMode},
    sets::{ClassSetContents, CodePointSet},
    validation::{LayerValidator, ValidationConfig},
    versions::UnicodeVersion,
    Result,
};

/// The base layer: full property, string-valued property and alias tables for one version.
///
/// All lookups are direct table lookups; the base is where every delegation chain ends.
///
/// # Examples
///
/// ```rust
/// use unidelta::{AliasNamespace, CodePointSet, MatchMode, PropertyData, PropertyDataBase,
///     UnicodeVersion};
///
/// let base = PropertyDataBase::builder(UnicodeVersion::new(15, 0, 0))
///     .property("Alpha", CodePointSet::from_chars(['A', 'B', 'C']))
///     .alias(AliasNamespace::Property, "Alphabetic", "Alpha")
///     .build()?;
///
/// assert_eq!(base.retrieve_property("Alpha").unwrap().len(), 3);
/// assert_eq!(base.lookup_property_alias("alphabetic", MatchMode::Loose), Some("Alpha"));
/// # Ok::<(), unidelta::Error>(())
/// ```
#[derive(Debug)]
pub struct PropertyDataBase {
    version: UnicodeVersion,
    properties: HashMap<String, CodePointSet>,
    strings: HashMap<String, ClassSetContents>,
    aliases: AliasTables,
}

impl PropertyDataBase {
    /// Starts building the base tables for `version`.
    #[must_use]
    pub fn builder(version: UnicodeVersion) -> PropertyDataBaseBuilder {
        PropertyDataBaseBuilder {
            version,
            properties: HashMap::new(),
            strings: HashMap::new(),
            aliases: AliasTables::new(),
        }
    }

    /// Number of code point properties.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Number of string-valued properties.
    #[must_use]
    pub fn string_property_count(&self) -> usize {
        self.strings.len()
    }

    /// The complete alias tables.
    #[must_use]
    pub fn aliases(&self) -> &AliasTables {
        &self.aliases
    }
}

impl PropertyData for PropertyDataBase {
    fn version(&self) -> UnicodeVersion {
        self.version
    }

    fn depth(&self) -> usize {
        0
    }

    fn retrieve_property(&self, spec: &str) -> Option<CodePointSet> {
        self.properties.get(spec).cloned()
    }

    fn stored_property_of_strings(&self, spec: &str) -> Option<ClassSetContents> {
        if let Some(set) = self.properties.get(spec) {
            return Some(ClassSetContents::character_class(set.clone()));
        }

        self.strings.get(spec).cloned()
    }

    fn lookup_alias(
        &self,
        namespace: AliasNamespace,
        alias: &str,
        mode: MatchMode,
    ) -> Option<&str> {
        self.aliases.lookup(namespace, alias, mode)
    }
}

/// Fluent builder for [`PropertyDataBase`].
#[derive(Debug, Clone)]
pub struct PropertyDataBaseBuilder {
    version: UnicodeVersion,
    properties: HashMap<String, CodePointSet>,
    strings: HashMap<String, ClassSetContents>,
    aliases: AliasTables,
}

impl PropertyDataBaseBuilder {
    /// Adds or replaces a code point property.
    #[must_use]
    pub fn property(mut self, spec: impl Into<String>, set: CodePointSet) -> Self {
        self.properties.insert(spec.into(), set);
        self
    }

    /// Adds or replaces a string-valued (emoji) property.
    #[must_use]
    pub fn property_of_strings(
        mut self,
        spec: impl Into<String>,
        contents: ClassSetContents,
    ) -> Self {
        self.strings.insert(spec.into(), contents);
        self
    }

    /// Adds or replaces an alias.
    #[must_use]
    pub fn alias(
        mut self,
        namespace: AliasNamespace,
        alias: impl Into<String>,
        canonical: impl Into<String>,
    ) -> Self {
        self.aliases.insert(namespace, alias, canonical);
        self
    }

    /// Replaces the whole alias table set.
    #[must_use]
    pub fn aliases(mut self, aliases: AliasTables) -> Self {
        self.aliases = aliases;
        self
    }

    /// Validates with [`ValidationConfig::default`] and builds the base layer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ValidationFailed`] if the tables violate an integrity rule.
    pub fn build(self) -> Result<PropertyDataBase> {
        self.build_with(ValidationConfig::default())
    }

    /// Validates with `config` and builds the base layer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ValidationFailed`] if the tables violate an enabled rule.
    pub fn build_with(self, config: ValidationConfig) -> Result<PropertyDataBase> {
        let base = PropertyDataBase {
            version: self.version,
            properties: self.properties,
            strings: self.strings,
            aliases: self.aliases,
        };

        LayerValidator::validate_base(
            base.version,
            &base.properties,
            &base.strings,
            &base.aliases,
            config,
        )?;

        debug!(
            version = %base.version,
            properties = base.properties.len(),
            strings = base.strings.len(),
            aliases = base.aliases.len(),
            "built base property layer"
        );

        Ok(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::RGI_EMOJI, test::set, Error};

    #[test]
    fn test_direct_lookups() {
        let base = PropertyDataBase::builder(UnicodeVersion::new(15, 0, 0))
            .property("Alpha", set("ABC"))
            .alias(AliasNamespace::Script, "Latn", "Latin")
            .build()
            .unwrap();

        assert_eq!(base.retrieve_property("Alpha"), Some(set("ABC")));
        assert_eq!(base.retrieve_property("Beta"), None);
        assert_eq!(base.lookup_script_alias("Latn", MatchMode::Exact), Some("Latin"));
        assert_eq!(base.lookup_block_alias("Latn", MatchMode::Exact), None);
        assert_eq!(base.depth(), 0);
        assert_eq!(base.property_count(), 1);
    }

    #[test]
    fn test_code_point_property_as_character_class() {
        let base = PropertyDataBase::builder(UnicodeVersion::new(15, 0, 0))
            .property("Alpha", set("ABC"))
            .build()
            .unwrap();

        let contents = base.retrieve_property_of_strings("Alpha").unwrap();
        assert_eq!(contents, ClassSetContents::character_class(set("ABC")));
    }

    #[test]
    fn test_rgi_emoji_hook_on_base() {
        let base = crate::test::emoji_base();
        let rgi = base.retrieve_property_of_strings(RGI_EMOJI).unwrap();
        assert!(rgi.is_property_of_strings());
        assert!(rgi.contains_str(crate::test::FLAG_DE));
        assert!(rgi.contains_str(crate::test::KEYCAP_HASH));
        assert!(base.stored_property_of_strings(RGI_EMOJI).is_none());
    }

    #[test]
    fn test_kind_conflict_rejected() {
        let result = PropertyDataBase::builder(UnicodeVersion::new(15, 0, 0))
            .property("Basic_Emoji", set("A"))
            .property_of_strings(
                "Basic_Emoji",
                ClassSetContents::property_of_strings(set("B"), ["xy"]),
            )
            .build();

        assert!(matches!(result, Err(Error::ValidationFailed { count: 1, .. })));
    }

    #[test]
    fn test_empty_alias_rejected_unless_disabled() {
        let builder = PropertyDataBase::builder(UnicodeVersion::new(15, 0, 0))
            .alias(AliasNamespace::Block, "", "Basic_Latin");

        assert!(builder.clone().build().is_err());
        assert!(builder.build_with(ValidationConfig::disabled()).is_ok());
    }
}
