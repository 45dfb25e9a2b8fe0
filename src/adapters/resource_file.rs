// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML resource file configuration source.
//!
//! Desktop builds, CI and the `bootcfg` tool have no `strings.xml` or
//! `Info.plist` to read at runtime. A YAML export of those values stands in
//! for the platform's static configuration:
//!
//! ```yaml
//! yandex_mapkit_api_key: "from-strings-xml"
//! YANDEX_MAPKIT_API_KEY: "from-info-plist"
//! ```
//!
//! Nested mappings are flattened with dots (`maps.key`), scalars are stored as
//! their string form and `null` becomes the empty string.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::{ConfigParser, ConfigSource};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum size of a resource file (1 MiB).
const MAX_RESOURCE_FILE_SIZE: u64 = 1024 * 1024;

/// Default file name looked up by [`ResourceFileSource::from_default_location`].
pub const DEFAULT_RESOURCE_FILE: &str = "resources.yaml";

/// Parser flattening YAML documents into dotted keys.
///
/// # Examples
///
/// ```rust
/// use bootcfg::adapters::YamlParser;
/// use bootcfg::ports::ConfigParser;
///
/// let parsed = YamlParser.parse("maps:\n  key: abc\nlocale: ru_RU").unwrap();
/// assert_eq!(parsed.get("maps.key"), Some(&"abc".to_string()));
/// assert_eq!(parsed.get("locale"), Some(&"ru_RU".to_string()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl YamlParser {
    fn flatten(value: &serde_yaml::Value, prefix: &str, out: &mut HashMap<String, String>) {
        use serde_yaml::Value;

        let scalar = match value {
            Value::Mapping(map) => {
                for (key, nested) in map {
                    let Some(key) = Self::key_string(key) else {
                        continue;
                    };
                    Self::flatten(nested, &Self::join(prefix, &key), out);
                }
                return;
            }
            Value::Sequence(items) => {
                for (i, nested) in items.iter().enumerate() {
                    Self::flatten(nested, &Self::join(prefix, &i.to_string()), out);
                }
                return;
            }
            Value::Tagged(tagged) => return Self::flatten(&tagged.value, prefix, out),
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
        };

        out.insert(prefix.to_string(), scalar);
    }

    fn join(prefix: &str, segment: &str) -> String {
        if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", prefix, segment)
        }
    }

        fn key_string(key: &serde_yaml::Value) -> Option<String> {
        match key {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            serde_yaml::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        let mut result = HashMap::new();
        Self::flatten(&value, "", &mut result);
        // A bare scalar document lands under the empty key; it has no name.
        result.remove("");
        Ok(result)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Configuration source backed by a YAML export of platform resources.
///
/// The file is read once when the source is created.
///
/// # Priority
///
/// Resource files have priority 1, the same as in-memory platform values.
///
/// # Examples
///
/// ```rust,no_run
/// use bootcfg::adapters::ResourceFileSource;
///
/// let source = ResourceFileSource::from_file("ios/Runner/resources.yaml").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ResourceFileSource {
    file_path: PathBuf,
    values: HashMap<String, String>,
}

impl ResourceFileSource {
    /// Loads a resource file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SourceError`] if the file cannot be read or is
    /// larger than 1 MiB, and [`ConfigError::ParseError`] if it is not YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let values = Self::read(&file_path)?;

        tracing::debug!(
            "Loaded {} resource values from {}",
            values.len(),
            Self::display_name(&file_path)
        );

        Ok(Self { file_path, values })
    }

    /// Loads [`DEFAULT_RESOURCE_FILE`] from the OS configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "sardoba")
    /// * `qualifier` - The organization/qualifier (e.g., "com.sardoba")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "resource-file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join(DEFAULT_RESOURCE_FILE))
    }

    /// Returns the path the values were loaded from.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read(path: &Path) -> Result<HashMap<String, String>> {
        let source_error = |message: String, e: std::io::Error| ConfigError::SourceError {
            source_name: "resource-file".to_string(),
            message,
            source: Some(Box::new(e)),
        };

        let metadata = fs::metadata(path).map_err(|e| {
            source_error(
                format!("Failed to read file metadata: {}", Self::display_name(path)),
                e,
            )
        })?;

        if metadata.len() > MAX_RESOURCE_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: "resource-file".to_string(),
                message: format!(
                    "Resource file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_RESOURCE_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = fs::read_to_string(path).map_err(|e| {
            source_error(
                format!("Failed to read resource file: {}", Self::display_name(path)),
                e,
            )
        })?;

        YamlParser.parse(&content)
    }

    fn display_name(path: &Path) -> &str {
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unknown>")
    }
}

impl ConfigSource for ResourceFileSource {
    fn name(&self) -> &str {
        "resource-file"
    }

    fn priority(&self) -> u8 {
        1
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok(self
            .values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str())))
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
