// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for startup configuration resolution.
//!
//! Most of these errors never reach application code: the resolver folds asset
//! and lookup failures into an absent value. They are surfaced by the lower
//! level `lookup`/`require` calls and by file-backed constructors.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// Marked `#[non_exhaustive]` so new failure modes can be added without
/// breaking callers that match on it.
///
/// # Examples
///
/// ```
/// use bootcfg::domain::errors::ConfigError;
///
/// let err = ConfigError::AssetNotFound {
///     asset: ".env".to_string(),
/// };
/// assert_eq!(err.to_string(), "Bundled asset not found: .env");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The bundled asset could not be located or opened.
    #[error("Bundled asset not found: {asset}")]
    AssetNotFound {
        /// Logical name of the asset
        asset: String,
    },

    /// The asset was opened but reading it failed (including invalid UTF-8).
    #[error("Failed to read bundled asset '{asset}': {source}")]
    AssetReadError {
        /// Logical name of the asset
        asset: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No source provided a value for the key.
    #[error("Configuration key not present: {key}")]
    KeyNotPresent {
        /// The key that was looked up
        key: String,
    },

    /// An error occurred in a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a resource file or bootstrap profile.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred outside of asset reading.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Returns true for the failures the resolver treats as "not found".
    ///
    /// The resolver falls back on every error, but only logs the
    /// unrecoverable ones as warnings.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConfigError::AssetNotFound { .. }
                | ConfigError::AssetReadError { .. }
                | ConfigError::KeyNotPresent { .. }
        )
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_asset_not_found_display() {
        let error = ConfigError::AssetNotFound {
            asset: ".env".to_string(),
        };
        assert_eq!(error.to_string(), "Bundled asset not found: .env");
        assert!(error.is_recoverable());
    }

    #[test]
    fn test_asset_read_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        let error = ConfigError::AssetReadError {
            asset: ".env".to_string(),
            source: io,
        };
        assert!(error.to_string().contains("'.env'"));
        assert!(error.source().is_some());
        assert!(error.is_recoverable());
    }

    #[test]
    fn test_key_not_present_display() {
        let error = ConfigError::KeyNotPresent {
            key: "YANDEX_MAPKIT_API_KEY".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration key not present: YANDEX_MAPKIT_API_KEY"
        );
    }

    #[test]
    fn test_source_error_not_recoverable() {
        let error = ConfigError::SourceError {
            source_name: "resource-file".to_string(),
            message: "file too large".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'resource-file' error: file too large"
        );
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::from(io_error);
        assert!(matches!(error, ConfigError::IoError(_)));
    }
}
