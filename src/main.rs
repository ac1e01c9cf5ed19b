use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use collabspace::core::credentials::CredentialStore;
use collabspace::core::store::JsonFileStore;
use collabspace::gui::{self, AppState};

#[derive(Parser)]
#[command(name = "collabspace")]
#[command(about = "Team workspace with projects, tasks and profiles")]
struct Cli {
    /// Directory for persisted app data (defaults to the platform data dir)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose {
        "collabspace=debug"
    } else {
        "collabspace=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("no platform data directory available"))?
            .join("collabspace"),
    };
    let store = JsonFileStore::open(data_dir.join("storage.json"))?;
    tracing::info!(path = %store.path().display(), "starting CollabSpace");

    let state = AppState::new(CredentialStore::new(store));
    gui::run(state)?;
    Ok(())
}
