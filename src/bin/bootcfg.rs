// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dry-run the startup key resolution outside of a device.
//!
//! ```bash
//! bootcfg --assets android/app/src/main/assets --platform android \
//!     --resources android/resources.yaml
//! ```

use bootcfg::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Resolve the map SDK API key the way the app does at startup.
#[derive(Debug, Parser)]
#[command(name = "bootcfg", version, about)]
struct Args {
    /// Directory holding the bundled assets
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// Target platform (android or ios)
    #[arg(long, default_value = "android")]
    platform: Platform,

    /// YAML export of strings.xml / Info.plist values
    #[arg(long)]
    resources: Option<PathBuf>,

    /// YAML bootstrap profile overriding keys and locale
    #[arg(long)]
    profile: Option<PathBuf>,

    /// List every key visible to the chain
    #[arg(long)]
    list_keys: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// SDK stand-in that records what the real SDK would receive.
#[derive(Debug, Default)]
struct DryRunSdk {
    locale: Option<String>,
    api_key: Option<ConfigValue>,
}

impl MapSdk for DryRunSdk {
    fn set_locale(&mut self, locale: &str) {
        self.locale = Some(locale.to_string());
    }

    fn set_api_key(&mut self, api_key: &str) {
        self.api_key = Some(ConfigValue::from(api_key));
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    let profile = match &args.profile {
        Some(path) => BootstrapProfile::from_yaml_file(path)?,
        None => BootstrapProfile::default(),
    };

    let platform_config: Box<dyn ConfigSource> = match &args.resources {
        Some(path) => Box::new(ResourceFileSource::from_file(path)?),
        None => Box::new(PlatformConfigSource::new(args.platform)),
    };

    if args.list_keys {
        let assets = EnvAssetSource::new(DirAssetLocator::new(&args.assets))
            .with_asset_name(profile.asset_name.as_str());
        let mut chain = ResolverChain::new();
        chain.add_source(Box::new(assets));
        chain.add_source(platform_config);
        for key in chain.all_keys() {
            println!("{}", key);
        }
        return Ok(true);
    }

    let bootstrap = MapKitBootstrap::with_profile(DirAssetLocator::new(&args.assets), profile);
    let mut sdk = DryRunSdk::default();
    let outcome = bootstrap.run(args.platform, platform_config.as_ref(), &mut sdk);

    println!("platform: {}", args.platform);
    println!("locale:   {}", sdk.locale.as_deref().unwrap_or("<not set>"));
    match (&outcome, &sdk.api_key) {
        (BootstrapOutcome::Configured { origin }, Some(key)) => {
            println!("api key:  {} (from {})", key.masked(), origin);
        }
        _ => println!("api key:  <missing>"),
    }

    Ok(outcome.is_configured())
}
