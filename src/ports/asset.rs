// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bundled asset access.
//!
//! Mobile platforms address packaged files by logical name (Android's
//! `AssetManager`, the iOS main bundle). `AssetLocator` is the capability the
//! resolver is handed so that it never touches a platform API directly.

use crate::domain::Result;
use std::io::Read;

/// Opens bundled, read-only assets by logical name.
///
/// Implementations return [`ConfigError::AssetNotFound`] when the asset does
/// not exist or cannot be opened. The returned reader is dropped (and the
/// underlying handle closed) as soon as the caller is done with it.
///
/// [`ConfigError::AssetNotFound`]: crate::domain::ConfigError::AssetNotFound
///
/// # Examples
///
/// ```rust
/// use bootcfg::domain::{ConfigError, Result};
/// use bootcfg::ports::AssetLocator;
/// use std::io::{Cursor, Read};
///
/// struct Embedded;
///
/// impl AssetLocator for Embedded {
///     fn open(&self, name: &str) -> Result<Box<dyn Read + '_>> {
///         match name {
///             ".env" => Ok(Box::new(Cursor::new(&b"API_KEY=abc"[..]))),
///             _ => Err(ConfigError::AssetNotFound { asset: name.to_string() }),
///         }
///     }
/// }
///
/// let mut content = String::new();
/// Embedded.open(".env").unwrap().read_to_string(&mut content).unwrap();
/// assert_eq!(content, "API_KEY=abc");
/// ```
pub trait AssetLocator: Send + Sync {
    /// Opens the asset called `name` for reading.
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>>;
}

impl<L: AssetLocator + ?Sized> AssetLocator for &L {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>> {
        (**self).open(name)
    }
}

impl<L: AssetLocator + ?Sized> AssetLocator for Box<L> {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>> {
        (**self).open(name)
    }
}

impl<L: AssetLocator + ?Sized> AssetLocator for std::sync::Arc<L> {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>> {
        (**self).open(name)
    }
}
