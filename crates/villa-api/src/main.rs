//! # Villa API server
//!
//! Loads [`AppConfig`], sets up tracing, starts the [`VillaSystem`] and serves the
//! router until ctrl-c.

use anyhow::{Context, Result};
use clap::Parser;
use resource_store::tracing::setup_tracing;
use std::future::Future;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{error, info};
use villa_api::config::AppConfig;
use villa_api::lifecycle::VillaSystem;

/// Villa API - CRUD service for villas and villa numbers
#[derive(Parser)]
#[command(name = "villa-api")]
#[command(about = "Villa API - CRUD service for villas and villa numbers")]
#[command(version)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address override (e.g. 0.0.0.0:8080)
    #[arg(short, long)]
    bind: Option<String>,

    /// Load the demo villas at start-up
    #[arg(long)]
    seed: bool,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }
    if cli.seed {
        config.seed_demo_data = true;
    }

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    setup_tracing(&config.log_level);

    let system = VillaSystem::start(&config);
    let listener = TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.server.bind_addr))?;
    info!(addr = %config.server.bind_addr, "Listening");

    axum::serve(listener, system.router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    system.shutdown().await.context("stopping stores")?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    wait_for(tokio::signal::ctrl_c()).await;
}

/// Resolves when `signal` fires. A signal that cannot be installed never resolves,
/// so the server keeps running until the process is killed.
async fn wait_for(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
