// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup routine for the map SDK.
//!
//! Runs once on the main initialization path. The API key is read from the
//! bundled `.env` asset, or from the platform's static configuration if the
//! asset does not provide it. An empty key counts as missing: the SDK is then
//! left unconfigured, a warning is logged and the application keeps running.
//!
//! The two platforms differ in ordering. Android applies the locale before
//! looking at the key; iOS applies locale and key together, only when a key
//! exists.

use crate::domain::{BootstrapProfile, ConfigKey, ConfigValue, Platform};
use crate::ports::{AssetLocator, ConfigSource, MapSdk};
use crate::service::EnvConfigResolver;
use std::cell::Cell;
use std::fmt;

/// Where the API key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrigin {
    /// The bundled `.env` asset
    EnvAsset,
    /// The platform's static configuration
    Platform,
}

impl fmt::Display for KeyOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyOrigin::EnvAsset => f.write_str("env asset"),
            KeyOrigin::Platform => f.write_str("platform configuration"),
        }
    }
}

/// Result of a bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The SDK received a non-empty API key.
    Configured {
        /// Where the key came from
        origin: KeyOrigin,
    },
    /// No usable key was found; the SDK was not given a key.
    Skipped {
        /// Key looked up in the asset
        env_key: ConfigKey,
        /// Key looked up in the platform configuration
        platform_key: ConfigKey,
    },
}

impl BootstrapOutcome {
    /// Returns true if the SDK received an API key.
    pub fn is_configured(&self) -> bool {
        matches!(self, BootstrapOutcome::Configured { .. })
    }
}

/// Configures the map SDK at application start.
///
/// # Examples
///
/// ```rust
/// use bootcfg::adapters::{MemoryAssetLocator, PlatformConfigSource};
/// use bootcfg::domain::Platform;
/// use bootcfg::ports::MapSdk;
/// use bootcfg::service::{BootstrapOutcome, KeyOrigin, MapKitBootstrap};
///
/// #[derive(Default)]
/// struct Sdk {
///     locale: Option<String>,
///     key: Option<String>,
/// }
///
/// impl MapSdk for Sdk {
///     fn set_locale(&mut self, locale: &str) {
///         self.locale = Some(locale.to_string());
///     }
///     fn set_api_key(&mut self, api_key: &str) {
///         self.key = Some(api_key.to_string());
///     }
/// }
///
/// let assets = MemoryAssetLocator::new().with_asset(".env", "YANDEX_MAPKIT_API_KEY=abc123");
/// let resources = PlatformConfigSource::new(Platform::Android);
/// let mut sdk = Sdk::default();
///
/// let outcome = MapKitBootstrap::new(assets).run(Platform::Android, &resources, &mut sdk);
///
/// assert_eq!(outcome, BootstrapOutcome::Configured { origin: KeyOrigin::EnvAsset });
/// assert_eq!(sdk.locale.as_deref(), Some("ru_RU"));
/// assert_eq!(sdk.key.as_deref(), Some("abc123"));
/// ```
#[derive(Debug, Clone)]
pub struct MapKitBootstrap<L> {
    resolver: EnvConfigResolver<L>,
    profile: BootstrapProfile,
}

impl<L: AssetLocator> MapKitBootstrap<L> {
    /// Creates a bootstrap with the default profile.
    pub fn new(locator: L) -> Self {
        Self::with_profile(locator, BootstrapProfile::default())
    }

    /// Creates a bootstrap with a custom profile.
    pub fn with_profile(locator: L, profile: BootstrapProfile) -> Self {
        let resolver = EnvConfigResolver::new(locator).with_asset_name(profile.asset_name.as_str());
        Self { resolver, profile }
    }

    /// Returns the profile in use.
    pub fn profile(&self) -> &BootstrapProfile {
        &self.profile
    }

    /// Resolves a non-empty API key and reports its origin.
    ///
    /// `platform_config` is consulted only if the asset does not define the
    /// key. Errors from it are logged and treated as absence.
    pub fn resolve_api_key(
        &self,
        platform: Platform,
        platform_config: &dyn ConfigSource,
    ) -> Option<(KeyOrigin, ConfigValue)> {
        let used_fallback = Cell::new(false);
        let platform_key = self.profile.platform_key(platform);

        let value = self.resolver.resolve(&self.profile.env_key(), || {
            used_fallback.set(true);
            match platform_config.get(&platform_key) {
                Ok(value) => value,
                Err(e) => {
                    tracing::debug!(
                        "Unable to read '{}' from {}: {}",
                        platform_key,
                        platform_config.name(),
                        e
                    );
                    None
                }
            }
        })?;

        let origin = if used_fallback.get() {
            KeyOrigin::Platform
        } else {
            KeyOrigin::EnvAsset
        };
        value.non_empty().map(|value| (origin, value))
    }

    /// Resolves the API key and configures `sdk`.
    ///
    /// Never hands an empty key to the SDK and never fails; a missing key is
    /// reported through a `warn` log line and [`BootstrapOutcome::Skipped`].
    pub fn run<S: MapSdk + ?Sized>(
        &self,
        platform: Platform,
        platform_config: &dyn ConfigSource,
        sdk: &mut S,
    ) -> BootstrapOutcome {
        if platform == Platform::Android {
            sdk.set_locale(&self.profile.locale);
        }

        match self.resolve_api_key(platform, platform_config) {
            Some((origin, api_key)) => {
                if platform == Platform::Ios {
                    sdk.set_locale(&self.profile.locale);
                }
                sdk.set_api_key(api_key.as_str());
                tracing::debug!(
                    "{} configured for {} with key from {}",
                    self.profile.sdk_name,
                    platform,
                    origin
                );
                BootstrapOutcome::Configured { origin }
            }
            None => {
                tracing::warn!(
                    platform = %platform,
                    "{}",
                    self.profile.missing_key_message(platform)
                );
                BootstrapOutcome::Skipped {
                    env_key: self.profile.env_key(),
                    platform_key: self.profile.platform_key(platform),
                }
            }
        }
    }
}
