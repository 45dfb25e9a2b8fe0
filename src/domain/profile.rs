// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bootstrap profile: which keys to read and which locale to apply.
//!
//! The defaults match a Yandex MapKit application. Every field can be
//! overridden, and the whole profile can be loaded from YAML:
//!
//! ```yaml
//! locale: en_US
//! env_key: MAPS_API_KEY
//! ```

use crate::domain::{ConfigError, ConfigKey, Platform, Result};
use serde::{Deserialize, Serialize};

/// Locale applied to the SDK unless a profile overrides it.
pub const DEFAULT_LOCALE: &str = "ru_RU";

/// Name of the API key entry in `.env` and `Info.plist`.
pub const MAPKIT_API_KEY: &str = "YANDEX_MAPKIT_API_KEY";

/// Android string resource holding the API key.
pub const ANDROID_API_KEY_RESOURCE: &str = "yandex_mapkit_api_key";

/// Startup parameters for SDK initialization.
///
/// # Examples
///
/// ```rust
/// use bootcfg::domain::{BootstrapProfile, Platform};
///
/// let profile = BootstrapProfile::default();
/// assert_eq!(profile.locale, "ru_RU");
/// assert_eq!(profile.platform_key(Platform::Android).as_str(), "yandex_mapkit_api_key");
/// assert_eq!(profile.platform_key(Platform::Ios).as_str(), "YANDEX_MAPKIT_API_KEY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapProfile {
    /// Human readable SDK name used in diagnostics
    pub sdk_name: String,
    /// Locale passed to the SDK
    pub locale: String,
    /// Key looked up in the bundled `.env` asset
    pub env_key: String,
    /// Android string resource used as fallback
    pub android_resource: String,
    /// `Info.plist` entry used as fallback on iOS
    pub ios_plist_key: String,
    /// Logical name of the bundled asset
    pub asset_name: String,
}

impl Default for BootstrapProfile {
    fn default() -> Self {
        Self {
            sdk_name: "Yandex MapKit".to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            env_key: MAPKIT_API_KEY.to_string(),
            android_resource: ANDROID_API_KEY_RESOURCE.to_string(),
            ios_plist_key: MAPKIT_API_KEY.to_string(),
            asset_name: ".env".to_string(),
        }
    }
}

impl BootstrapProfile {
    /// Key looked up in the bundled asset.
    pub fn env_key(&self) -> ConfigKey {
        ConfigKey::from(self.env_key.as_str())
    }

    /// Key looked up in the platform's static configuration.
    pub fn platform_key(&self, platform: Platform) -> ConfigKey {
        match platform {
            Platform::Android => ConfigKey::from(self.android_resource.as_str()),
            Platform::Ios => ConfigKey::from(self.ios_plist_key.as_str()),
        }
    }

    /// Warning logged when no usable key was found.
    pub fn missing_key_message(&self, platform: Platform) -> String {
        format!(
            "{} API key is missing. Set {} in {} or {} in the bundled {} asset",
            self.sdk_name,
            self.platform_key(platform),
            platform.static_config_file(),
            self.env_key,
            self.asset_name
        )
    }

    /// Checks that no field is blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("sdk_name", &self.sdk_name),
            ("locale", &self.locale),
            ("env_key", &self.env_key),
            ("android_resource", &self.android_resource),
            ("ios_plist_key", &self.ios_plist_key),
            ("asset_name", &self.asset_name),
        ];

        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::ParseError {
                message: format!("Bootstrap profile field '{}' must not be empty", name),
                source: None,
            }),
            None => Ok(()),
        }
    }

    /// Parses and validates a profile from YAML. Missing fields keep defaults.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let profile: Self = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Invalid bootstrap profile: {}", e),
            source: Some(Box::new(e)),
        })?;
        profile.validate()?;
        Ok(profile)
    }

    /// Reads a profile from a YAML file.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
