// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use bootcfg::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use bootcfg::ports::{ConfigSource, MapSdk};
use std::collections::HashMap;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Creates an asset directory containing a `.env` file with `content`.
#[allow(dead_code)]
pub fn asset_dir_with_env(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), content).unwrap();
    dir
}

/// Creates an empty asset directory.
#[allow(dead_code)]
pub fn empty_asset_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// A mock configuration source with fixed values and an optional failure mode.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct MockConfigSource {
    name: String,
    priority: u8,
    values: HashMap<String, String>,
    failing: bool,
    lookups: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockConfigSource {
    /// Creates a new mock source with the given name and priority.
    pub fn new(name: impl Into<String>, priority: u8) -> Self {
        Self {
            name: name.into(),
            priority,
            values: HashMap::new(),
            failing: false,
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Adds a value to the mock source.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Makes every lookup fail.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Shared counter of `get` calls, usable after the source is boxed.
    pub fn lookup_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.lookups)
    }
}

impl ConfigSource for MockConfigSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(ConfigError::SourceError {
                source_name: self.name.clone(),
                message: "Mock lookup failure".to_string(),
                source: None,
            });
        }
        Ok(self
            .values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str())))
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        Ok(self
            .values
            .keys()
            .map(|k| ConfigKey::from(k.as_str()))
            .collect())
    }
}

/// SDK double recording every call in order.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct RecordingSdk {
    pub calls: Vec<String>,
}

#[allow(dead_code)]
impl RecordingSdk {
    /// The API key passed to the SDK, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.calls.iter().find_map(|c| c.strip_prefix("key:"))
    }

    /// The locale passed to the SDK, if any.
    pub fn locale(&self) -> Option<&str> {
        self.calls.iter().find_map(|c| c.strip_prefix("locale:"))
    }
}

impl MapSdk for RecordingSdk {
    fn set_locale(&mut self, locale: &str) {
        self.calls.push(format!("locale:{}", locale));
    }

    fn set_api_key(&mut self, api_key: &str) {
        self.calls.push(format!("key:{}", api_key));
    }
}
