use std::process::ExitCode;

use chirpy::{AppState, Config, Server, app};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), chirpy::Error> {
    let config = Config::from_env()?;
    let state = AppState::from_config(&config);

    info!(
        platform = %config.platform,
        store = ?config.store,
        assets = %config.assets.display(),
        "starting chirpy"
    );

    Server::bind(config.addr).serve(app::router(state)).await
}
