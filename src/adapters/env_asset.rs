// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bundled `.env` asset configuration source.
//!
//! The asset is read through an [`AssetLocator`] on every lookup; nothing is
//! cached between calls. Bytes that are not valid UTF-8 are decoded lossily,
//! line by line, so a stray legacy-encoded comment never hides a valid key.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, EnvLine, Result};
use crate::ports::{AssetLocator, ConfigParser, ConfigSource};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

/// Logical name of the bundled environment asset.
pub const DEFAULT_ENV_ASSET: &str = ".env";

/// Parser for `.env` content.
///
/// When a name is defined more than once, the first definition wins, matching
/// single-key lookups.
///
/// # Examples
///
/// ```rust
/// use bootcfg::adapters::DotenvParser;
/// use bootcfg::ports::ConfigParser;
///
/// let parsed = DotenvParser.parse("# keys\nA=1\nA=2\nB='x'").unwrap();
/// assert_eq!(parsed.get("A"), Some(&"1".to_string()));
/// assert_eq!(parsed.get("B"), Some(&"x".to_string()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DotenvParser;

impl ConfigParser for DotenvParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let mut result = HashMap::new();
        for line in content.lines().filter_map(EnvLine::parse) {
            result
                .entry(line.name.to_string())
                .or_insert_with(|| line.value.to_string());
        }
        Ok(result)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["env"]
    }
}

/// Configuration source backed by a bundled `.env` asset.
///
/// # Priority
///
/// The asset has priority 2, so it overrides platform static configuration
/// (priority 1).
///
/// # Examples
///
/// ```rust
/// use bootcfg::adapters::{EnvAssetSource, MemoryAssetLocator};
/// use bootcfg::domain::ConfigKey;
/// use bootcfg::ports::ConfigSource;
///
/// let assets = MemoryAssetLocator::new().with_asset(".env", "YANDEX_MAPKIT_API_KEY=\"abc123\"");
/// let source = EnvAssetSource::new(assets);
///
/// let value = source.get(&ConfigKey::from("YANDEX_MAPKIT_API_KEY")).unwrap();
/// assert_eq!(value.unwrap().as_str(), "abc123");
/// ```
#[derive(Debug, Clone)]
pub struct EnvAssetSource<L> {
    locator: L,
    asset_name: String,
}

impl<L: AssetLocator> EnvAssetSource<L> {
    /// Creates a source reading the `.env` asset from `locator`.
    pub fn new(locator: L) -> Self {
        Self {
            locator,
            asset_name: DEFAULT_ENV_ASSET.to_string(),
        }
    }

    /// Reads a differently named asset, e.g. `config/.env.staging`.
    pub fn with_asset_name(mut self, asset_name: impl Into<String>) -> Self {
        self.asset_name = asset_name.into();
        self
    }

    /// Returns the logical asset name.
    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    /// Returns the underlying locator.
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Scans the asset for the first line defining `key`.
    ///
    /// Stops reading at the first match; the asset handle is released on
    /// return.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::AssetNotFound`] if the asset cannot be opened
    /// * [`ConfigError::AssetReadError`] if the underlying reader fails
    pub fn lookup(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        let mut reader = BufReader::new(self.locator.open(&self.asset_name)?);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| self.read_error(e))?;
            if read == 0 {
                return Ok(None);
            }

            let line = String::from_utf8_lossy(&buf);
            if let Some(entry) = EnvLine::parse(&line) {
                if entry.defines(key) {
                    return Ok(Some(ConfigValue::from(entry.value)));
                }
            }
        }
    }

    /// Reads and parses the whole asset.
    pub fn load_all(&self) -> Result<HashMap<String, String>> {
        let mut bytes = Vec::new();
        self.locator
            .open(&self.asset_name)?
            .read_to_end(&mut bytes)
            .map_err(|e| self.read_error(e))?;
        DotenvParser.parse(&String::from_utf8_lossy(&bytes))
    }

    fn read_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::AssetReadError {
            asset: self.asset_name.clone(),
            source,
        }
    }
}

impl<L: AssetLocator> ConfigSource for EnvAssetSource<L> {
    fn name(&self) -> &str {
        "env-asset"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        self.lookup(key)
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        let mut keys: Vec<ConfigKey> =
            self.load_all()?.into_keys().map(ConfigKey::from).collect();
        keys.sort();
        Ok(keys)
    }
}
