// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolution service trait.
//!
//! `ConfigurationService` is what startup code depends on: give it a key and it
//! answers with a value or with absence. Implementations decide where the value
//! comes from and in which order sources are tried.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};

/// The interface startup code uses to look up configuration.
///
/// Only [`resolve`](ConfigurationService::resolve) must be implemented. Lookup
/// failures inside an implementation are never returned; they are folded into
/// `None`.
///
/// # Examples
///
/// ```rust
/// use bootcfg::domain::{ConfigKey, ConfigValue, ConfigurationService};
///
/// struct Fixed;
///
/// impl ConfigurationService for Fixed {
///     fn resolve(&self, key: &ConfigKey) -> Option<ConfigValue> {
///         (key.as_str() == "API_KEY").then(|| ConfigValue::from("abc"))
///     }
/// }
///
/// let service = Fixed;
/// assert!(service.has(&ConfigKey::from("API_KEY")));
/// assert!(service.require(&ConfigKey::from("OTHER")).is_err());
/// ```
pub trait ConfigurationService {
    /// Resolves `key`, returning `None` when no source provides it.
    fn resolve(&self, key: &ConfigKey) -> Option<ConfigValue>;

    /// Resolves `key`, treating absence as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotPresent`] when no source provides the key.
    fn require(&self, key: &ConfigKey) -> Result<ConfigValue> {
        self.resolve(key).ok_or_else(|| ConfigError::KeyNotPresent {
            key: key.as_str().to_string(),
        })
    }

    /// Resolves `key` and discards empty values.
    ///
    /// This is the form SDK initialization uses: an empty credential is the
    /// same as a missing one.
    fn resolve_non_empty(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.resolve(key).and_then(ConfigValue::non_empty)
    }

    /// Returns true if some source provides `key`.
    fn has(&self, key: &ConfigKey) -> bool {
        self.resolve(key).is_some()
    }
}
