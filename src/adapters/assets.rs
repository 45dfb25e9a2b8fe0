// SPDX-License-Identifier: MIT OR Apache-2.0

//! Asset locator implementations.
//!
//! On a device the host application supplies a locator backed by the platform
//! asset API. The locators here cover everything else: an unpacked asset
//! directory, in-memory assets, and a closure for ad-hoc bridging.

use crate::domain::{ConfigError, Result};
use crate::ports::AssetLocator;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Component, Path, PathBuf};

/// Serves assets from a directory on the local filesystem.
///
/// Asset names are relative paths below the root. Names that would escape
/// the root (absolute paths, `..`) are reported as not found.
///
/// # Examples
///
/// ```rust,no_run
/// use bootcfg::adapters::DirAssetLocator;
/// use bootcfg::ports::AssetLocator;
///
/// let assets = DirAssetLocator::new("app/src/main/assets");
/// let reader = assets.open(".env");
/// ```
#[derive(Debug, Clone)]
pub struct DirAssetLocator {
    root: PathBuf,
}

impl DirAssetLocator {
    /// Creates a locator rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a locator rooted at the OS data directory for the application.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "sardoba")
    /// * `qualifier` - The organization/qualifier (e.g., "com.sardoba")
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::SourceError`] if no home directory can be
    /// determined for the current user.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "asset-dir".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Ok(Self::new(proj_dirs.data_dir()))
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a logical asset name to a path below the root.
    fn asset_path(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let contained = !name.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        contained.then(|| self.root.join(relative))
    }
}

impl AssetLocator for DirAssetLocator {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>> {
        let not_found = || ConfigError::AssetNotFound {
            asset: name.to_string(),
        };

        let path = match self.asset_path(name) {
            Some(path) => path,
            None => {
                tracing::debug!("Rejected asset name outside of asset root: {:?}", name);
                return Err(not_found());
            }
        };

        match File::open(&path) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) => {
                tracing::debug!("Unable to open asset '{}': {}", name, e);
                Err(not_found())
            }
        }
    }
}

/// Serves assets from memory.
///
/// # Examples
///
/// ```rust
/// use bootcfg::adapters::MemoryAssetLocator;
/// use bootcfg::ports::AssetLocator;
///
/// let assets = MemoryAssetLocator::new().with_asset(".env", "API_KEY=abc");
/// assert!(assets.open(".env").is_ok());
/// assert!(assets.open("missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetLocator {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryAssetLocator {
    /// Creates an empty locator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an asset.
    pub fn with_asset(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(name, content);
        self
    }

    /// Adds or replaces an asset in place.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.assets.insert(name.into(), content.into());
    }

    /// Removes an asset.
    pub fn remove(&mut self, name: &str) {
        self.assets.remove(name);
    }
}

impl AssetLocator for MemoryAssetLocator {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>> {
        self.assets
            .get(name)
            .map(|bytes| Box::new(Cursor::new(bytes.as_slice())) as Box<dyn Read + '_>)
            .ok_or_else(|| ConfigError::AssetNotFound {
                asset: name.to_string(),
            })
    }
}

/// Adapts a closure into an [`AssetLocator`].
///
/// The closure returns `None` when the asset is unavailable.
///
/// # Examples
///
/// ```rust
/// use bootcfg::adapters::FnAssetLocator;
/// use bootcfg::ports::AssetLocator;
/// use std::io::{Cursor, Read};
///
/// let assets = FnAssetLocator::new(|name: &str| {
///     (name == ".env").then(|| Box::new(Cursor::new(b"K=v".to_vec())) as Box<dyn Read>)
/// });
/// assert!(assets.open(".env").is_ok());
/// ```
pub struct FnAssetLocator<F> {
    open: F,
}

impl<F> FnAssetLocator<F>
where
    F: Fn(&str) -> Option<Box<dyn Read>> + Send + Sync,
{
    /// Wraps `open`.
    pub fn new(open: F) -> Self {
        Self { open }
    }
}

impl<F> fmt::Debug for FnAssetLocator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAssetLocator").finish_non_exhaustive()
    }
}

impl<F> AssetLocator for FnAssetLocator<F>
where
    F: Fn(&str) -> Option<Box<dyn Read>> + Send + Sync,
{
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>> {
        (self.open)(name).ok_or_else(|| ConfigError::AssetNotFound {
            asset: name.to_string(),
        })
    }
}
