// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup walkthrough for the map SDK bootstrap.
//!
//! This example demonstrates:
//! - Resolving the API key from a `.env` asset
//! - Falling back to platform static configuration
//! - The warning path when no key exists
//!
//! To run this example:
//! ```bash
//! cargo run --example bootstrap
//! ```

use bootcfg::prelude::*;

#[derive(Default)]
struct PrintingSdk;

impl MapSdk for PrintingSdk {
    fn set_locale(&mut self, locale: &str) {
        println!("  sdk.set_locale({})", locale);
    }

    fn set_api_key(&mut self, api_key: &str) {
        println!("  sdk.set_api_key({})", ConfigValue::from(api_key).masked());
    }
}

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let resources = PlatformConfigSource::new(Platform::Android)
        .with_value("yandex_mapkit_api_key", "strings-xml-0000");

    println!("--- 1: key in the bundled .env asset ---");
    let assets = MemoryAssetLocator::new()
        .with_asset(".env", "# local overrides\nYANDEX_MAPKIT_API_KEY=\"env-asset-1234\"\n");
    let outcome = MapKitBootstrap::new(assets).run(Platform::Android, &resources, &mut PrintingSdk);
    println!("  => {:?}\n", outcome);

    println!("--- 2: no asset, strings.xml fallback ---");
    let outcome = MapKitBootstrap::new(MemoryAssetLocator::new()).run(
        Platform::Android,
        &resources,
        &mut PrintingSdk,
    );
    println!("  => {:?}\n", outcome);

    println!("--- 3: iOS with nothing configured ---");
    let outcome = MapKitBootstrap::new(MemoryAssetLocator::new()).run(
        Platform::Ios,
        &PlatformConfigSource::new(Platform::Ios),
        &mut PrintingSdk,
    );
    println!("  => {:?}", outcome);
}
