// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype.

use std::fmt;

/// The name of a configuration entry, such as `YANDEX_MAPKIT_API_KEY`.
///
/// Keys are compared exactly: `.env` lookups are case-sensitive and no
/// normalization is applied.
///
/// # Examples
///
/// ```
/// use bootcfg::domain::ConfigKey;
///
/// let key = ConfigKey::from("YANDEX_MAPKIT_API_KEY");
/// assert_eq!(key.as_str(), "YANDEX_MAPKIT_API_KEY");
/// assert_ne!(key, ConfigKey::from("yandex_mapkit_api_key"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the key into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns true when `name` (already trimmed) names this key.
    pub fn matches(&self, name: &str) -> bool {
        self.0 == name
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_config_key_roundtrips_inner_string() {
        let key = ConfigKey::new("API_KEY".to_string());
        assert_eq!(key.as_str(), "API_KEY");
        assert_eq!(key.into_string(), "API_KEY");
    }

    #[test]
    fn test_config_key_display() {
        let key = ConfigKey::from("YANDEX_MAPKIT_API_KEY");
        assert_eq!(format!("{}", key), "YANDEX_MAPKIT_API_KEY");
    }

    #[test]
    fn test_config_key_matching_is_case_sensitive() {
        let key = ConfigKey::from("API_KEY");
        assert!(key.matches("API_KEY"));
        assert!(!key.matches("api_key"));
        assert!(!key.matches(" API_KEY"));
    }

    #[test]
    fn test_config_key_hash_set() {
        let mut keys = HashSet::new();
        keys.insert(ConfigKey::from("a"));
        keys.insert(ConfigKey::from("a"));
        keys.insert(ConfigKey::from("b"));
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_string_from_config_key() {
        let s: String = ConfigKey::from("k").into();
        assert_eq!(s, "k");
    }
}
