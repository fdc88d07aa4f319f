//! Web control panel for a Radio Thermostat CT50.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use radio_thermostat::server::{AppState, create_router};
use radio_thermostat::{MessageLogMode, ThermostatClient, config};

/// Serve a thermostat control page and JSON API
#[derive(Parser, Debug)]
#[command(name = "thermostat-web")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Thermostat address; THERMOSTAT_IP takes precedence
    #[arg(long)]
    ip: Option<String>,

    /// Path of the JSON config file holding ThermostatIP
    #[arg(short, long, default_value_os_t = config::default_config_path())]
    config: PathBuf,

    /// Append device traffic to this NDJSON file (repeated polls collapsed)
    #[arg(long)]
    log: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let address = config::resolve_address(
        std::env::var(config::ADDRESS_ENV_VAR).ok(),
        args.ip.clone(),
        &args.config,
    )
    .context("thermostat address not configured")?;

    let mut builder = ThermostatClient::builder(&address);
    if let Some(ref path) = args.log {
        builder = builder.message_log(MessageLogMode::Changes, path);
    }
    let client = builder.build().context("failed to create thermostat client")?;

    let app = create_router(AppState::new(client));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!(thermostat = %address, "starting thermostat web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
