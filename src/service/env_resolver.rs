// SPDX-License-Identifier: MIT OR Apache-2.0

//! `.env`-first key resolution with a deferred fallback.

use crate::adapters::EnvAssetSource;
use crate::domain::{ConfigKey, ConfigValue, Result};
use crate::ports::AssetLocator;

/// Resolves a key from the bundled `.env` asset, falling back to a caller
/// supplied lookup.
///
/// Resolution never fails: a missing or unreadable asset, or an asset without
/// the key, all lead to the fallback. The asset is re-read on every call.
///
/// # Examples
///
/// ```rust
/// use bootcfg::adapters::MemoryAssetLocator;
/// use bootcfg::domain::{ConfigKey, ConfigValue};
/// use bootcfg::service::EnvConfigResolver;
///
/// let assets = MemoryAssetLocator::new().with_asset(".env", "YANDEX_MAPKIT_API_KEY=\"abc123\"");
/// let resolver = EnvConfigResolver::new(assets);
///
/// let key = ConfigKey::from("YANDEX_MAPKIT_API_KEY");
/// let value = resolver.resolve(&key, || unreachable!("asset defines the key"));
/// assert_eq!(value, Some(ConfigValue::from("abc123")));
///
/// let other = ConfigKey::from("OTHER");
/// let value = resolver.resolve(&other, || Some(ConfigValue::from("platform-value")));
/// assert_eq!(value, Some(ConfigValue::from("platform-value")));
/// ```
#[derive(Debug, Clone)]
pub struct EnvConfigResolver<L> {
    asset: EnvAssetSource<L>,
}

impl<L: AssetLocator> EnvConfigResolver<L> {
    /// Creates a resolver reading `.env` through `locator`.
    pub fn new(locator: L) -> Self {
        Self {
            asset: EnvAssetSource::new(locator),
        }
    }

    /// Reads a differently named asset.
    pub fn with_asset_name(self, asset_name: impl Into<String>) -> Self {
        Self {
            asset: self.asset.with_asset_name(asset_name),
        }
    }

    /// Returns the logical asset name.
    pub fn asset_name(&self) -> &str {
        self.asset.asset_name()
    }

    /// Looks `key` up in the asset only, reporting why it could not be read.
    pub fn lookup(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        self.asset.lookup(key)
    }

    /// Resolves `key`, calling `fallback` only if the asset does not provide it.
    ///
    /// A value of `KEY=` is returned as an empty, present value; callers that
    /// need a credential must treat it as missing.
    pub fn resolve<F>(&self, key: &ConfigKey, fallback: F) -> Option<ConfigValue>
    where
        F: FnOnce() -> Option<ConfigValue>,
    {
        match self.lookup(key) {
            Ok(Some(value)) => {
                tracing::debug!("Resolved '{}' from asset '{}'", key, self.asset_name());
                return Some(value);
            }
            Ok(None) => {
                tracing::debug!(
                    "Asset '{}' does not define '{}', using fallback",
                    self.asset_name(),
                    key
                );
            }
            Err(e) if e.is_recoverable() => {
                tracing::debug!("{}; using fallback for '{}'", e, key);
            }
            Err(e) => {
                tracing::warn!(
                    "Unexpected error reading asset '{}': {}; using fallback for '{}'",
                    self.asset_name(),
                    e,
                    key
                );
            }
        }

        fallback()
    }
}
