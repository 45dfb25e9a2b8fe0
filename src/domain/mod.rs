// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module holds the types shared by every layer: keys, values, errors,
//! the `.env` line grammar, the bootstrap profile and the resolution service
//! trait.

pub mod config_key;
pub mod config_value;
pub mod env_line;
pub mod errors;
pub mod platform;
pub mod profile;
pub mod service;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use env_line::EnvLine;
pub use errors::{ConfigError, Result};
pub use platform::Platform;
pub use profile::BootstrapProfile;
pub use service::ConfigurationService;
