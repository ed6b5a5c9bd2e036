//! The published chain of layers, one per supported Unicode version.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::trace;

use crate::{
    data::{PropertyDataBase, PropertyDataOverlay, PropertyDataRc, PropertyDiff},
    names::{AliasNamespace, MatchMode},
    sets::{ClassSetContents, CodePointSet},
    validation::ValidationConfig,
    versions::UnicodeVersion,
    Error, Result,
};

/// Every supported Unicode version, answered through one delegation chain.
///
/// This is the interface a pattern compiler resolving `\p{...}` escapes talks to. It is built
/// once, root-first, by [`UnicodePropertiesBuilder`], and is immutable afterwards; share it
/// behind an [`Arc`] to look up from many threads.
///
/// # Examples
///
/// ```rust
/// use unidelta::{AliasNamespace, CodePointSet, MatchMode, PropertyDataBase, PropertyDiff,
///     UnicodeProperties, UnicodeVersion};
///
/// let v15 = UnicodeVersion::new(15, 0, 0);
/// let v16 = UnicodeVersion::new(16, 0, 0);
///
/// let base = PropertyDataBase::builder(v15)
///     .property("Alpha", CodePointSet::from_chars(['A', 'B', 'C']))
///     .alias(AliasNamespace::Property, "Alphabetic", "Alpha")
///     .build()?;
/// let diff = PropertyDiff::builder(v16)
///     .added("Alpha", CodePointSet::from_chars(['D']))
///     .build();
///
/// let properties = UnicodeProperties::builder(base).diff(diff).build()?;
///
/// assert_eq!(properties.latest(), v16);
/// let canonical = properties
///     .resolve_alias(AliasNamespace::Property, "alphabetic", MatchMode::Loose)
///     .unwrap();
/// assert_eq!(properties.resolve_property_set(canonical).unwrap().len(), 4);
/// assert_eq!(properties.resolve_property_set_at(v15, canonical)?.unwrap().len(), 3);
/// # Ok::<(), unidelta::Error>(())
/// ```
pub struct UnicodeProperties {
    /// Layers in ascending version order; the last one is the outermost overlay
    layers: Vec<PropertyDataRc>,
    /// Resolved code point sets per layer, present when caching is enabled. Only specs that
    /// resolve are stored, so unknown names cannot grow it.
    caches: Option<Vec<DashMap<String, CodePointSet>>>,
}

impl UnicodeProperties {
    /// Starts building a chain on top of `base`.
    #[must_use]
    pub fn builder(base: PropertyDataBase) -> UnicodePropertiesBuilder {
        UnicodePropertiesBuilder {
            base,
            diffs: Vec::new(),
            config: ValidationConfig::default(),
            cache: false,
        }
    }

    /// The newest registered version.
    #[must_use]
    pub fn latest(&self) -> UnicodeVersion {
        self.outermost().version()
    }

    /// The version of the base layer.
    #[must_use]
    pub fn oldest(&self) -> UnicodeVersion {
        self.layers[0].version()
    }

    /// All registered versions in ascending order.
    pub fn versions(&self) -> impl Iterator<Item = UnicodeVersion> + '_ {
        self.layers.iter().map(|layer| layer.version())
    }

    /// The layer answering lookups for `version`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVersion`] if `version` is not registered.
    pub fn layer(&self, version: UnicodeVersion) -> Result<&PropertyDataRc> {
        self.position(version).map(|idx| &self.layers[idx])
    }

    /// Resolves `spec` to its code point set at the latest version.
    #[must_use]
    pub fn resolve_property_set(&self, spec: &str) -> Option<CodePointSet> {
        self.resolve_set(self.layers.len() - 1, spec)
    }

    /// Resolves `spec` to its string-valued answer at the latest version.
    #[must_use]
    pub fn resolve_property_of_strings(&self, spec: &str) -> Option<ClassSetContents> {
        trace!(version = %self.latest(), spec, "resolve property of strings");
        self.outermost().retrieve_property_of_strings(spec)
    }

    /// Resolves `alias` in `namespace` at the latest version.
    #[must_use]
    pub fn resolve_alias(
        &self,
        namespace: AliasNamespace,
        alias: &str,
        mode: MatchMode,
    ) -> Option<&str> {
        trace!(version = %self.latest(), %namespace, alias, %mode, "resolve alias");
        self.outermost().lookup_alias(namespace, alias, mode)
    }

    /// Resolves `spec` to its code point set at `version`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVersion`] if `version` is not registered.
    pub fn resolve_property_set_at(
        &self,
        version: UnicodeVersion,
        spec: &str,
    ) -> Result<Option<CodePointSet>> {
        let idx = self.position(version)?;
        Ok(self.resolve_set(idx, spec))
    }

    /// Resolves `spec` to its string-valued answer at `version`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVersion`] if `version` is not registered.
    pub fn resolve_property_of_strings_at(
        &self,
        version: UnicodeVersion,
        spec: &str,
    ) -> Result<Option<ClassSetContents>> {
        trace!(%version, spec, "resolve property of strings");
        Ok(self.layer(version)?.retrieve_property_of_strings(spec))
    }

    /// Resolves `alias` in `namespace` at `version`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVersion`] if `version` is not registered.
    pub fn resolve_alias_at(
        &self,
        version: UnicodeVersion,
        namespace: AliasNamespace,
        alias: &str,
        mode: MatchMode,
    ) -> Result<Option<&str>> {
        trace!(%version, %namespace, alias, %mode, "resolve alias");
        Ok(self.layer(version)?.lookup_alias(namespace, alias, mode))
    }

    /// Returns `true` if resolved code point sets are memoized.
    #[must_use]
    pub fn is_caching(&self) -> bool {
        self.caches.is_some()
    }

    fn outermost(&self) -> &PropertyDataRc {
        // the builder always registers the base
        &self.layers[self.layers.len() - 1]
    }

    fn position(&self, version: UnicodeVersion) -> Result<usize> {
        self.layers
            .binary_search_by(|layer| layer.version().cmp(&version))
            .map_err(|_| Error::UnknownVersion(version))
    }

    fn resolve_set(&self, idx: usize, spec: &str) -> Option<CodePointSet> {
        let layer = &self.layers[idx];
        trace!(version = %layer.version(), spec, "resolve property set");

        let Some(caches) = &self.caches else {
            return layer.retrieve_property(spec);
        };

        let cache = &caches[idx];
        if let Some(hit) = cache.get(spec) {
            return Some(hit.clone());
        }

        let resolved = layer.retrieve_property(spec)?;
        cache.insert(spec.to_string(), resolved.clone());
        Some(resolved)
    }
}

impl std::fmt::Debug for UnicodeProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnicodeProperties")
            .field("versions", &self.versions().collect::<Vec<_>>())
            .field("caching", &self.is_caching())
            .finish()
    }
}

/// Builds a [`UnicodeProperties`] chain root-first.
#[derive(Debug)]
pub struct UnicodePropertiesBuilder {
    base: PropertyDataBase,
    diffs: Vec<PropertyDiff>,
    config: ValidationConfig,
    cache: bool,
}

impl UnicodePropertiesBuilder {
    /// Appends the diff of the next version. Diffs must be added in ascending version order.
    #[must_use]
    pub fn diff(mut self, diff: PropertyDiff) -> Self {
        self.diffs.push(diff);
        self
    }

    /// Appends several diffs, in order.
    #[must_use]
    pub fn diffs<I>(mut self, diffs: I) -> Self
    where
        I: IntoIterator<Item = PropertyDiff>,
    {
        self.diffs.extend(diffs);
        self
    }

    /// Sets the validation applied to every overlay.
    #[must_use]
    pub fn validation(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    /// Enables memoization of resolved code point sets.
    #[must_use]
    pub fn cache(mut self, enabled: bool) -> Self {
        self.cache = enabled;
        self
    }

    /// Builds every overlay, oldest first, and publishes the chain.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while creating an overlay, see
    /// [`PropertyDataOverlay::new`].
    pub fn build(self) -> Result<UnicodeProperties> {
        let mut layers: Vec<PropertyDataRc> = Vec::with_capacity(self.diffs.len() + 1);
        layers.push(Arc::new(self.base));

        for diff in self.diffs {
            let parent = Arc::clone(&layers[layers.len() - 1]);
            let overlay = PropertyDataOverlay::new(parent, diff, self.config)?;
            layers.push(Arc::new(overlay));
        }

        let caches = self
            .cache
            .then(|| layers.iter().map(|_| DashMap::new()).collect());

        Ok(UnicodeProperties { layers, caches })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{self, set, V15_0, V15_1, V16_0};

    fn chain(cache: bool) -> UnicodeProperties {
        UnicodeProperties::builder(test::alpha_base())
            .diff(
                PropertyDiff::builder(V15_1)
                    .property("Alpha", set("D"), set("B"))
                    .build(),
            )
            .diff(PropertyDiff::builder(V16_0).added("NewProp", set("EF")).build())
            .cache(cache)
            .build()
            .unwrap()
    }

    #[test]
    fn test_versions() {
        let properties = chain(false);
        assert_eq!(properties.versions().collect::<Vec<_>>(), vec![V15_0, V15_1, V16_0]);
        assert_eq!(properties.latest(), V16_0);
        assert_eq!(properties.oldest(), V15_0);
        assert_eq!(properties.layer(V15_1).unwrap().depth(), 1);
        assert!(matches!(
            properties.layer(UnicodeVersion::new(14, 0, 0)),
            Err(Error::UnknownVersion(_))
        ));
    }

    #[test]
    fn test_resolve_per_version() {
        let properties = chain(false);
        assert_eq!(properties.resolve_property_set("Alpha"), Some(set("ACD")));
        assert_eq!(properties.resolve_property_set_at(V15_0, "Alpha").unwrap(), Some(set("ABC")));
        assert_eq!(properties.resolve_property_set_at(V15_1, "NewProp").unwrap(), None);
        assert_eq!(properties.resolve_property_set("NewProp"), Some(set("EF")));
    }

    #[test]
    fn test_cache_is_transparent() {
        let cached = chain(true);
        let plain = chain(false);
        assert!(cached.is_caching());
        assert!(!plain.is_caching());

        for _ in 0..2 {
            for spec in ["Alpha", "NewProp", "Missing"] {
                assert_eq!(cached.resolve_property_set(spec), plain.resolve_property_set(spec));
                assert_eq!(
                    cached.resolve_property_set_at(V15_0, spec).unwrap(),
                    plain.resolve_property_set_at(V15_0, spec).unwrap()
                );
            }
        }
    }

    fn cached_entries(properties: &UnicodeProperties) -> usize {
        properties
            .caches
            .as_ref()
            .unwrap()
            .iter()
            .map(|cache| cache.len())
            .sum()
    }

    #[test]
    fn test_unknown_specs_leave_cache_unchanged() {
        let properties = chain(true);
        for n in 0..1000 {
            let spec = format!("Bogus{n}");
            assert_eq!(properties.resolve_property_set(&spec), None);
            assert_eq!(properties.resolve_property_set_at(V15_0, &spec).unwrap(), None);
        }
        assert_eq!(cached_entries(&properties), 0);

        assert_eq!(properties.resolve_property_set("Alpha"), Some(set("ACD")));
        assert_eq!(properties.resolve_property_set("Alpha"), Some(set("ACD")));
        assert_eq!(cached_entries(&properties), 1);

        assert_eq!(properties.resolve_property_set("Bogus0"), None);
        assert_eq!(cached_entries(&properties), 1);
    }

    #[test]
    fn test_out_of_order_versions_rejected() {
        let result = UnicodeProperties::builder(test::alpha_base())
            .diff(PropertyDiff::builder(V16_0).build())
            .diff(PropertyDiff::builder(V15_1).build())
            .build();

        assert!(matches!(
            result,
            Err(Error::VersionOrder {
                previous: V16_0,
                next: V15_1
            })
        ));
    }

    #[test]
    fn test_alias_at_version() {
        let properties = UnicodeProperties::builder(test::alpha_base())
            .diff(
                PropertyDiff::builder(V15_1)
                    .alias(AliasNamespace::Script, "Kawi", "Kawi")
                    .build(),
            )
            .build()
            .unwrap();

        assert_eq!(
            properties.resolve_alias(AliasNamespace::Script, "kawi", MatchMode::Loose),
            Some("Kawi")
        );
        assert_eq!(
            properties
                .resolve_alias_at(V15_0, AliasNamespace::Script, "Kawi", MatchMode::Exact)
                .unwrap(),
            None
        );
    }
}
