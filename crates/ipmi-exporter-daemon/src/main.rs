//! IPMI Prometheus Exporter Daemon
//!
//! Polls a remote BMC for sensor readings over IPMI and serves them as
//! Prometheus gauges on /metrics.

mod collector;
mod config;
mod metrics;
mod web;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::info;
use tracing_subscriber::EnvFilter;

use collector::Collector;
use config::Config;
use ipmi_exporter_sdr::IpmitoolSource;
use metrics::SensorMetrics;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/default.toml".to_string());

    let config = Config::load(&config_path).context("Failed to load configuration")?;
    config.validate()?;
    info!("Collecting from IPMI host: {}", config.ipmi.host);

    // Initialize the metric registry
    let metrics = Arc::new(SensorMetrics::new()?);

    // Start the collection loop
    let source = Arc::new(IpmitoolSource::new(
        config.ipmi.host.clone(),
        config.ipmi.username.clone(),
        config.ipmi.password.clone(),
        Some(config.ipmi.port),
    ));
    let collector = Collector::new(
        source,
        metrics.clone(),
        config.ipmi.host.clone(),
        Duration::from_secs(config.interval),
    );
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    tokio::spawn(async move {
        collector.run(shutdown_rx).await;
    });

    // Setup Unix signal handlers
    let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
    let mut sigint = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;

    // Start web server
    let app = web::create_router(metrics);
    let addr: SocketAddr = config.listen.parse().context("Invalid listen address")?;
    let listener = TcpListener::bind(addr).await?;
    info!("Metrics server listening on http://{}/metrics", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
    }

    let _ = shutdown_tx.send(());
    Ok(())
}
