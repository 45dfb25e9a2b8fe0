// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup configuration for mobile map SDKs.
//!
//! At process start a mobile application hands its map SDK a locale and an
//! API key. This crate resolves that key from a bundled `.env` asset and falls
//! back to the platform's static configuration (`strings.xml` on Android,
//! `Info.plist` on iOS) when the asset is missing or does not define it.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: keys, values, the `.env` line grammar, platforms, the
//!   bootstrap profile and errors
//! - **Ports**: traits for the collaborators the host owns (`AssetLocator`,
//!   `ConfigSource`, `MapSdk`)
//! - **Adapters**: asset locators and configuration sources
//! - **Service**: `EnvConfigResolver`, `ResolverChain` and `MapKitBootstrap`
//!
//! # Feature Flags
//!
//! - `yaml`: YAML resource files and YAML bootstrap profiles (default)
//! - `cli`: the `bootcfg` command-line tool
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use bootcfg::prelude::*;
//!
//! let assets = MemoryAssetLocator::new().with_asset(".env", "# keys\nYANDEX_MAPKIT_API_KEY='abc123'\n");
//! let resolver = EnvConfigResolver::new(assets);
//!
//! let key = ConfigKey::from("YANDEX_MAPKIT_API_KEY");
//! let api_key = resolver.resolve(&key, || None);
//! assert_eq!(api_key.unwrap().as_str(), "abc123");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        BootstrapProfile, ConfigError, ConfigKey, ConfigValue, ConfigurationService, Platform,
        Result,
    };
    pub use crate::ports::{AssetLocator, ConfigParser, ConfigSource, MapSdk};
    pub use crate::service::{
        BootstrapOutcome, EnvConfigResolver, KeyOrigin, MapKitBootstrap, ResolverChain,
    };

    pub use crate::adapters::{
        DirAssetLocator, EnvAssetSource, FnAssetLocator, FnSource, MemoryAssetLocator,
        PlatformConfigSource,
    };
    #[cfg(feature = "yaml")]
    pub use crate::adapters::ResourceFileSource;
}
