// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! A `ConfigSource` is one strategy in a fallback chain: the bundled `.env`
//! asset, the platform's static resources, a closure, a YAML resource dump.

use crate::domain::{ConfigKey, ConfigValue, Result};

/// A trait for configuration sources.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. Sources hold no mutable state, so
/// concurrent lookups are independent.
///
/// # Priority
///
/// Higher priority values are queried first. The built-in sources use:
///
/// - **2**: the bundled `.env` asset
/// - **1**: platform static configuration and resource files
///
/// # Examples
///
/// ```rust
/// use bootcfg::ports::ConfigSource;
/// use bootcfg::domain::{ConfigKey, ConfigValue, Result};
///
/// struct BuildTimeSource;
///
/// impl ConfigSource for BuildTimeSource {
///     fn name(&self) -> &str {
///         "build-time"
///     }
///
///     fn priority(&self) -> u8 {
///         0
///     }
///
///     fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
///         Ok((key.as_str() == "BUILD").then(|| ConfigValue::from("release")))
///     }
///
///     fn all_keys(&self) -> Result<Vec<ConfigKey>> {
///         Ok(vec![ConfigKey::from("BUILD")])
///     }
/// }
///
/// let source = BuildTimeSource;
/// assert!(source.get(&ConfigKey::from("BUILD")).unwrap().is_some());
/// ```
pub trait ConfigSource: Send + Sync {
    /// Short identifier used in log lines, e.g. `"env-asset"`.
    fn name(&self) -> &str;

    /// Query order; higher values are consulted first.
    fn priority(&self) -> u8;

    /// Looks up `key`.
    ///
    /// Returns `Ok(None)` when the source is readable but lacks the key, and
    /// `Err` when the source itself could not be consulted. Callers in a chain
    /// treat both as "try the next source".
    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>>;

    /// Lists every key this source currently defines.
    fn all_keys(&self) -> Result<Vec<ConfigKey>>;
}

impl<S: ConfigSource + ?Sized> ConfigSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn priority(&self) -> u8 {
        (**self).priority()
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        (**self).get(key)
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        (**self).all_keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Single;

    impl ConfigSource for Single {
        fn name(&self) -> &str {
            "single"
        }

        fn priority(&self) -> u8 {
            7
        }

        fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
            if key.as_str() == "only" {
                Ok(Some(ConfigValue::from("one")))
            } else {
                Ok(None)
            }
        }

        fn all_keys(&self) -> Result<Vec<ConfigKey>> {
            Ok(vec![ConfigKey::from("only")])
        }
    }

    #[test]
    fn test_boxed_source_delegates() {
        let boxed: Box<dyn ConfigSource> = Box::new(Single);
        assert_eq!(boxed.name(), "single");
        assert_eq!(boxed.priority(), 7);
        assert_eq!(
            boxed.get(&ConfigKey::from("only")).unwrap(),
            Some(ConfigValue::from("one"))
        );
        assert!(boxed.get(&ConfigKey::from("other")).unwrap().is_none());
        assert_eq!(boxed.all_keys().unwrap().len(), 1);
    }
}
