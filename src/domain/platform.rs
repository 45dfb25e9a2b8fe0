// SPDX-License-Identifier: MIT OR Apache-2.0

//! Target mobile platforms.

use crate::domain::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The mobile platform the application is starting on.
///
/// The platforms keep their static configuration in different places and
/// differ slightly in startup order; see [`crate::service::bootstrap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Android: static values live in `res/values/strings.xml`.
    Android,
    /// iOS: static values live in the main bundle's `Info.plist`.
    Ios,
}

impl Platform {
    /// File holding the platform's static configuration.
    pub fn static_config_file(&self) -> &'static str {
        match self {
            Platform::Android => "strings.xml",
            Platform::Ios => "Info.plist",
        }
    }

    /// Source name used in log lines for the platform's static configuration.
    pub fn source_name(&self) -> &'static str {
        match self {
            Platform::Android => "android-resources",
            Platform::Ios => "ios-info-plist",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => f.write_str("android"),
            Platform::Ios => f.write_str("ios"),
        }
    }
}

impl FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            other => Err(ConfigError::ParseError {
                message: format!("Unknown platform '{}', expected 'android' or 'ios'", other),
                source: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str() {
        assert_eq!("android".parse::<Platform>().unwrap(), Platform::Android);
        assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Ios);
        assert!("windows".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_display_roundtrip() {
        for platform in [Platform::Android, Platform::Ios] {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn test_platform_static_config_file() {
        assert_eq!(Platform::Android.static_config_file(), "strings.xml");
        assert_eq!(Platform::Ios.static_config_file(), "Info.plist");
    }
}
