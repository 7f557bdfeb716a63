use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hr_overtime::api::{AppState, create_router};
use hr_overtime::config::ConfigLoader;
use hr_overtime::error::HrError;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hr-overtime", version, about = "Overtime calculator and employee registry")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, env = "HR_CONFIG", default_value = "config/hr.yaml")]
    config: PathBuf,
    /// Interface to bind, overrides `server.host`
    #[arg(long)]
    host: Option<String>,
    /// Port to listen on, overrides `server.port`
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let loader = load_config(&cli)?;
    let server = loader.server().clone();
    let loader = loader.with_bind_address(
        cli.host.unwrap_or(server.host),
        cli.port.unwrap_or(server.port),
    );
    let address = loader.server().bind_address();

    let app = create_router(AppState::new(loader)).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    tracing::info!(address = %address, "hr-overtime listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shutdown complete");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn load_config(cli: &Cli) -> anyhow::Result<ConfigLoader> {
    match ConfigLoader::load(&cli.config) {
        Ok(loader) => {
            tracing::info!(path = %cli.config.display(), "configuration loaded");
            Ok(loader)
        }
        Err(HrError::ConfigNotFound { path }) => {
            tracing::warn!(path = %path, "configuration file not found; using defaults");
            Ok(ConfigLoader::default())
        }
        Err(err) => Err(err).context("failed to load configuration"),
    }
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
