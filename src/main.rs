mod cli;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use hookstage::manifest::{generate_manifest_template, ExtensionManifest};

/// Initialize stderr logging.
///
/// Log level can be controlled with the RUST_LOG env var (default: info).
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { path } => {
            let manifest = ExtensionManifest::load_from_path(&path)?;
            if let Err(reason) = manifest.check_host_compatibility() {
                tracing::warn!("{}", reason);
            }
            println!(
                "ok: {} {} ({} declared area{})",
                manifest.name,
                manifest.version,
                manifest.areas.len(),
                if manifest.areas.len() == 1 { "" } else { "s" }
            );
        }
        Commands::Template => {
            print!("{}", generate_manifest_template());
        }
    }

    Ok(())
}
