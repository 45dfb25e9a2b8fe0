// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered fallback chain over configuration sources.
//!
//! `ResolverChain` generalizes "asset, then platform value, then nothing" to
//! any number of sources. Sources are consulted in priority order and the
//! first one that yields a value wins.

use crate::domain::{ConfigKey, ConfigValue, ConfigurationService, Platform, Result};
use crate::ports::{AssetLocator, ConfigSource};
use std::collections::{BTreeSet, HashMap};

/// A chain of configuration sources queried in priority order.
///
/// Sources with higher priority values are queried first; sources with equal
/// priority keep the order in which they were added. A source that fails is
/// skipped. Nothing is cached.
///
/// # Examples
///
/// ```rust
/// use bootcfg::adapters::{MemoryAssetLocator, PlatformConfigSource};
/// use bootcfg::domain::{ConfigKey, ConfigurationService, Platform};
/// use bootcfg::service::ResolverChain;
///
/// # fn main() -> bootcfg::domain::Result<()> {
/// let chain = ResolverChain::builder()
///     .with_env_asset(MemoryAssetLocator::new())
///     .with_source(Box::new(
///         PlatformConfigSource::new(Platform::Ios).with_value("YANDEX_MAPKIT_API_KEY", "plist"),
///     ))
///     .build()?;
///
/// let value = chain.resolve(&ConfigKey::from("YANDEX_MAPKIT_API_KEY")).unwrap();
/// assert_eq!(value.as_str(), "plist");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ResolverChain {
    /// Sources, highest priority first
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ResolverChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chain builder.
    pub fn builder() -> ResolverChainBuilder {
        ResolverChainBuilder::new()
    }

    /// Adds a source, keeping the chain in priority order.
    pub fn add_source(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.push(source);
        // Stable sort: equal priorities keep insertion order.
        self.sources.sort_by_key(|s| std::cmp::Reverse(s.priority()));
    }

    /// Names of the sources in query order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Resolves `key` and reports which source provided it.
    pub fn resolve_with_source(&self, key: &ConfigKey) -> Option<(&str, ConfigValue)> {
        for source in &self.sources {
            match source.get(key) {
                Ok(Some(value)) => return Some((source.name(), value)),
                Ok(None) => continue,
                Err(e) => {
                    tracing::debug!(
                        "Error querying source '{}' for key '{}': {}",
                        source.name(),
                        key,
                        e
                    );
                    continue;
                }
            }
        }
        None
    }

    /// Union of the keys every readable source defines, sorted.
    pub fn all_keys(&self) -> Vec<ConfigKey> {
        let mut keys = BTreeSet::new();
        for source in &self.sources {
            match source.all_keys() {
                Ok(found) => keys.extend(found),
                Err(e) => tracing::debug!("Unable to list keys of '{}': {}", source.name(), e),
            }
        }
        keys.into_iter().collect()
    }
}

impl ConfigurationService for ResolverChain {
    fn resolve(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.resolve_with_source(key).map(|(_, value)| value)
    }
}

/// Builder for a [`ResolverChain`].
///
/// # Examples
///
/// ```rust
/// use bootcfg::adapters::DirAssetLocator;
/// use bootcfg::service::ResolverChainBuilder;
///
/// # fn main() -> bootcfg::domain::Result<()> {
/// let chain = ResolverChainBuilder::new()
///     .with_env_asset(DirAssetLocator::new("assets"))
///     .build()?;
/// assert_eq!(chain.source_names(), vec!["env-asset"]);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ResolverChainBuilder {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ResolverChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a configuration source.
    pub fn with_source(mut self, source: Box<dyn ConfigSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds the bundled `.env` asset served by `locator`.
    pub fn with_env_asset<L: AssetLocator + 'static>(self, locator: L) -> Self {
        use crate::adapters::EnvAssetSource;
        self.with_source(Box::new(EnvAssetSource::new(locator)))
    }

    /// Adds a snapshot of the platform's static configuration.
    pub fn with_platform_values(
        self,
        platform: Platform,
        values: HashMap<String, String>,
    ) -> Self {
        use crate::adapters::PlatformConfigSource;
        self.with_source(Box::new(PlatformConfigSource::with_values(platform, values)))
    }

    /// Adds a lookup closure as a source.
    pub fn with_lookup<F>(self, name: impl Into<String>, priority: u8, lookup: F) -> Self
    where
        F: Fn(&ConfigKey) -> Option<ConfigValue> + Send + Sync + 'static,
    {
        use crate::adapters::FnSource;
        self.with_source(Box::new(FnSource::new(name, priority, lookup)))
    }

    /// Adds a YAML resource file as a source.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    #[cfg(feature = "yaml")]
    pub fn with_resource_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        use crate::adapters::ResourceFileSource;
        let source = ResourceFileSource::from_file(path)?;
        Ok(self.with_source(Box::new(source)))
    }

    /// Builds the chain.
    pub fn build(self) -> Result<ResolverChain> {
        let mut chain = ResolverChain::new();
        for source in self.sources {
            chain.add_source(source);
        }
        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryAssetLocator;
    use crate::domain::ConfigError;

    struct MockSource {
        name: String,
        priority: u8,
        values: HashMap<String, String>,
        fail: bool,
    }

    impl MockSource {
        fn new(name: &str, priority: u8) -> Self {
            Self {
                name: name.to_string(),
                priority,
                values: HashMap::new(),
                fail: false,
            }
        }

        fn with_value(mut self, key: &str, value: &str) -> Self {
            self.values.insert(key.to_string(), value.to_string());
            self
        }

        fn failing(mut self) -> Self {
            self.fail = true;
            self
        }
    }

    impl ConfigSource for MockSource {
        fn name(&self) -> &str {
            &self.name
        }

        fn priority(&self) -> u8 {
            self.priority
        }

        fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
            if self.fail {
                return Err(ConfigError::SourceError {
                    source_name: self.name.clone(),
                    message: "unavailable".to_string(),
                    source: None,
                });
            }
            Ok(self.values.get(key.as_str()).map(|v| ConfigValue::from(v.as_str())))
        }

        fn all_keys(&self) -> Result<Vec<ConfigKey>> {
            if self.fail {
                return Err(ConfigError::SourceError {
                    source_name: self.name.clone(),
                    message: "unavailable".to_string(),
                    source: None,
                });
            }
            Ok(self.values.keys().map(|k| ConfigKey::from(k.as_str())).collect())
        }
    }

    #[test]
    fn test_empty_chain_resolves_nothing() {
        let chain = ResolverChain::new();
        assert!(chain.resolve(&ConfigKey::from("any")).is_none());
        assert!(chain.all_keys().is_empty());
    }

    #[test]
    fn test_priority_order() {
        let chain = ResolverChain::builder()
            .with_source(Box::new(MockSource::new("low", 1).with_value("k", "low")))
            .with_source(Box::new(MockSource::new("high", 3).with_value("k", "high")))
            .with_source(Box::new(MockSource::new("mid", 2).with_value("k", "mid")))
            .build()
            .unwrap();

        assert_eq!(chain.source_names(), vec!["high", "mid", "low"]);
        assert_eq!(
            chain.resolve_with_source(&ConfigKey::from("k")),
            Some(("high", ConfigValue::from("high")))
        );
    }

    #[test]
    fn test_equal_priority_keeps_insertion_order() {
        let chain = ResolverChain::builder()
            .with_source(Box::new(MockSource::new("first", 1).with_value("k", "1")))
            .with_source(Box::new(MockSource::new("second", 1).with_value("k", "2")))
            .build()
            .unwrap();

        assert_eq!(chain.resolve(&ConfigKey::from("k")).unwrap().as_str(), "1");
    }

    #[test]
    fn test_falls_through_missing_and_failing_sources() {
        let chain = ResolverChain::builder()
            .with_source(Box::new(MockSource::new("broken", 9).failing()))
            .with_source(Box::new(MockSource::new("empty", 5)))
            .with_source(Box::new(MockSource::new("last", 1).with_value("k", "found")))
            .build()
            .unwrap();

        assert_eq!(
            chain.resolve_with_source(&ConfigKey::from("k")),
            Some(("last", ConfigValue::from("found")))
        );
        assert_eq!(chain.all_keys(), vec![ConfigKey::from("k")]);
    }

    #[test]
    fn test_require_reports_missing_key() {
        let chain = ResolverChain::new();
        let err = chain.require(&ConfigKey::from("API_KEY")).unwrap_err();
        assert!(matches!(err, ConfigError::KeyNotPresent { .. }));
    }

    #[test]
    fn test_with_lookup_source() {
        let chain = ResolverChain::builder()
            .with_lookup("closure", 1, |key: &ConfigKey| {
                (key.as_str() == "k").then(|| ConfigValue::from("v"))
            })
            .build()
            .unwrap();

        assert!(chain.has(&ConfigKey::from("k")));
        assert!(!chain.has(&ConfigKey::from("other")));
    }

    #[test]
    fn test_all_keys_union_sorted() {
        let chain = ResolverChain::builder()
            .with_source(Box::new(
                MockSource::new("a", 1).with_value("b", "1").with_value("a", "1"),
            ))
            .with_source(Box::new(
                MockSource::new("b", 2).with_value("b", "2").with_value("c", "2"),
            ))
            .build()
            .unwrap();

        assert_eq!(
            chain.all_keys(),
            vec![ConfigKey::from("a"), ConfigKey::from("b"), ConfigKey::from("c")]
        );
    }

    #[test]
    fn test_env_asset_shadows_platform_values() {
        let mut values = HashMap::new();
        values.insert("k".to_string(), "platform".to_string());
        values.insert("only_platform".to_string(), "p".to_string());

        let chain = ResolverChain::builder()
            .with_platform_values(Platform::Android, values)
            .with_env_asset(MemoryAssetLocator::new().with_asset(".env", "k=asset"))
            .build()
            .unwrap();

        assert_eq!(chain.source_names(), vec!["env-asset", "android-resources"]);
        assert_eq!(
            chain.resolve_with_source(&ConfigKey::from("k")),
            Some(("env-asset", ConfigValue::from("asset")))
        );
        assert_eq!(
            chain.resolve_with_source(&ConfigKey::from("only_platform")),
            Some(("android-resources", ConfigValue::from("p")))
        );
    }
}
