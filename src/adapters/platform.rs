// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform static configuration sources.
//!
//! `PlatformConfigSource` holds the values the host read from `strings.xml`
//! or `Info.plist`. `FnSource` wraps a closure so any lookup the host can
//! perform becomes a source in a chain.

use crate::domain::{ConfigKey, ConfigValue, Platform, Result};
use crate::ports::ConfigSource;
use std::collections::HashMap;
use std::fmt;

/// In-memory snapshot of a platform's static configuration.
///
/// # Priority
///
/// Platform values have priority 1 and are only consulted when the bundled
/// `.env` asset (priority 2) does not define a key.
///
/// # Examples
///
/// ```rust
/// use bootcfg::adapters::PlatformConfigSource;
/// use bootcfg::domain::{ConfigKey, Platform};
/// use bootcfg::ports::ConfigSource;
///
/// let source = PlatformConfigSource::new(Platform::Android)
///     .with_value("yandex_mapkit_api_key", "from-strings-xml");
///
/// let value = source.get(&ConfigKey::from("yandex_mapkit_api_key")).unwrap();
/// assert_eq!(value.unwrap().as_str(), "from-strings-xml");
/// assert_eq!(source.name(), "android-resources");
/// ```
#[derive(Debug, Clone)]
pub struct PlatformConfigSource {
    platform: Platform,
    values: HashMap<String, String>,
}

impl PlatformConfigSource {
    /// Creates an empty snapshot for `platform`.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            values: HashMap::new(),
        }
    }

    /// Creates a snapshot from existing values.
    pub fn with_values(platform: Platform, values: HashMap<String, String>) -> Self {
        Self { platform, values }
    }

    /// Adds a value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Returns the platform this snapshot belongs to.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Looks up a value without going through the `ConfigSource` interface.
    pub fn value(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.values.get(key.as_str()).map(|v| ConfigValue::from(v.as_str()))
    }
}

impl ConfigSource for PlatformConfigSource {
    fn name(&self) -> &str {
        self.platform.source_name()
    }

    fn priority(&self) -> u8 {
        1
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok(self.value(key))
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        let mut keys: Vec<ConfigKey> = self
            .values
            .keys()
            .map(|k| ConfigKey::from(k.as_str()))
            .collect();
        keys.sort();
        Ok(keys)
    }
}

/// A configuration source backed by a lookup closure.
///
/// The closure is called on every `get`. `all_keys` reports nothing because a
/// closure cannot enumerate its domain.
///
/// # Examples
///
/// ```rust
/// use bootcfg::adapters::FnSource;
/// use bootcfg::domain::{ConfigKey, ConfigValue};
/// use bootcfg::ports::ConfigSource;
///
/// let source = FnSource::new("info-plist", 1, |key: &ConfigKey| {
///     (key.as_str() == "YANDEX_MAPKIT_API_KEY").then(|| ConfigValue::from("plist"))
/// });
/// assert!(source.get(&ConfigKey::from("YANDEX_MAPKIT_API_KEY")).unwrap().is_some());
/// ```
pub struct FnSource<F> {
    name: String,
    priority: u8,
    lookup: F,
}

impl<F> FnSource<F>
where
    F: Fn(&ConfigKey) -> Option<ConfigValue> + Send + Sync,
{
    /// Creates a source named `name` with the given priority.
    pub fn new(name: impl Into<String>, priority: u8, lookup: F) -> Self {
        Self {
            name: name.into(),
            priority,
            lookup,
        }
    }
}

impl<F> fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

impl<F> ConfigSource for FnSource<F>
where
    F: Fn(&ConfigKey) -> Option<ConfigValue> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok((self.lookup)(key))
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_platform_source_names() {
        assert_eq!(
            PlatformConfigSource::new(Platform::Android).name(),
            "android-resources"
        );
        assert_eq!(PlatformConfigSource::new(Platform::Ios).name(), "ios-info-plist");
        assert_eq!(PlatformConfigSource::new(Platform::Ios).priority(), 1);
    }

    #[test]
    fn test_platform_source_get() {
        let source = PlatformConfigSource::new(Platform::Ios)
            .with_value("YANDEX_MAPKIT_API_KEY", "plist-key");

        assert_eq!(
            source.get(&ConfigKey::from("YANDEX_MAPKIT_API_KEY")).unwrap(),
            Some(ConfigValue::from("plist-key"))
        );
        assert_eq!(source.get(&ConfigKey::from("missing")).unwrap(), None);
    }

    #[test]
    fn test_platform_source_with_values() {
        let mut values = HashMap::new();
        values.insert("b".to_string(), "2".to_string());
        values.insert("a".to_string(), "1".to_string());

        let source = PlatformConfigSource::with_values(Platform::Android, values);
        assert_eq!(source.platform(), Platform::Android);
        assert_eq!(
            source.all_keys().unwrap(),
            vec![ConfigKey::from("a"), ConfigKey::from("b")]
        );
    }

    #[test]
    fn test_fn_source_called_per_lookup() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let source = FnSource::new("counting", 5, move |_key: &ConfigKey| {
            counter.fetch_add(1, Ordering::SeqCst);
            None
        });

        assert_eq!(source.name(), "counting");
        assert_eq!(source.priority(), 5);
        assert!(source.get(&ConfigKey::from("x")).unwrap().is_none());
        assert!(source.get(&ConfigKey::from("x")).unwrap().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(source.all_keys().unwrap().is_empty());
    }
}
