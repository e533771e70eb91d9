// HTTP Server: GitHub Re-invite Form
//
// Serves the re-invite page and forwards submissions to the endpoint given
// by --endpoint / REINVITE_ENDPOINT. Run with --help for the other options.

use anyhow::{Context, Result};
use clap::Parser;
use github_reinvite::{AppState, Catalog, Cli, Settings, serve};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let settings = Settings::from(cli);

    let catalog = match &settings.catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::from_file(path)
                .with_context(|| format!("loading catalog {}", path.display()))?
        }
        None => Catalog::builtin().clone(),
    };

    let state = AppState::from_settings(&settings, &catalog)?;
    serve(&settings, state).await
}
