// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the resolvers and the startup routine.
//!
//! `EnvConfigResolver` is the two-step resolver used at startup,
//! `ResolverChain` generalizes it over any number of sources, and
//! `MapKitBootstrap` feeds the resolved key to the SDK.

pub mod bootstrap;
pub mod chain;
pub mod env_resolver;

pub use bootstrap::{BootstrapOutcome, KeyOrigin, MapKitBootstrap};
pub use chain::{ResolverChain, ResolverChainBuilder};
pub use env_resolver::EnvConfigResolver;
