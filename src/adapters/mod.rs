// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! Asset locators implement `AssetLocator`; the `.env` asset, platform
//! values, closures and YAML resource files implement `ConfigSource`.

pub mod assets;
pub mod env_asset;
pub mod platform;
#[cfg(feature = "yaml")]
pub mod resource_file;

pub use assets::{DirAssetLocator, FnAssetLocator, MemoryAssetLocator};
pub use env_asset::{DotenvParser, EnvAssetSource, DEFAULT_ENV_ASSET};
pub use platform::{FnSource, PlatformConfigSource};
#[cfg(feature = "yaml")]
pub use resource_file::{ResourceFileSource, YamlParser};
