//! SafePlace - a terminal directory browser for crypto protocol sites
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use safeplace_app::Engine;
use safeplace_core::prelude::*;

/// SafePlace - a terminal directory browser for crypto protocol sites
#[derive(Parser, Debug)]
#[command(name = "safeplace")]
#[command(about = "Browse a searchable, filterable directory of crypto protocol sites", long_about = None)]
struct Args {
    /// Path to a sites dataset (JSON) replacing the bundled list
    #[arg(long, value_name = "PATH")]
    sites: Option<PathBuf>,

    /// Path to a chains dataset (JSON) replacing the bundled list
    #[arg(long, value_name = "PATH")]
    chains: Option<PathBuf>,

    /// Disable the background favicon availability probe
    #[arg(long)]
    no_probe: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    safeplace_core::logging::init()?;
    let args = Args::parse();

    // CLI flags win over config.toml
    let mut settings = safeplace_app::config::load_settings();
    if args.sites.is_some() {
        settings.datasets.sites = args.sites;
    }
    if args.chains.is_some() {
        settings.datasets.chains = args.chains;
    }
    if args.no_probe {
        settings.icons.probe = false;
    }

    // Dataset problems surface here, before the terminal is taken over
    let engine = match Engine::new(settings) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("❌ {e}");
            eprintln!();
            eprintln!("A sites dataset is a JSON list of records with:");
            eprintln!("  • name (unique), url, category (one of the fixed tags)");
            eprintln!("  • chains: a list of chain ids, or [\"all\"]");
            eprintln!("A chains dataset is a JSON list of {{id, name}} records.");
            std::process::exit(1);
        }
    };

    safeplace_tui::run(engine).await
}
