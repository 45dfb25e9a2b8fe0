// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions for external collaborators.
//!
//! Adapters implement these traits; the resolver and bootstrap code depend
//! only on them.

pub mod asset;
pub mod parser;
pub mod sdk;
pub mod source;

pub use asset::AssetLocator;
pub use parser::ConfigParser;
pub use sdk::MapSdk;
pub use source::ConfigSource;
