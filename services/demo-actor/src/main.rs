//! Demo application for the Dapr SDK.
//!
//! Serves `DemoActor`, a topic subscription and an `echo` listener on the
//! application port, then waits for Ctrl-C.
//!
//! ## Environment
//!
//! - `DAPR_SERVER_HOST` / `DAPR_SERVER_PORT`: application listener
//! - `DAPR_HOST` / `DAPR_SIDECAR_PORT`: sidecar address
//! - `DAPR_PROTOCOL`: `http` or `grpc`
//! - `DEMO_PUBSUB_NAME` / `DEMO_TOPIC`: subscription target
//! - `DAPR_LOG_LEVEL`: used when `RUST_LOG` is unset

use anyhow::Result;
use dapr_demo_actor::config::Config;
use dapr_sdk::{DaprServer, ServerSettings};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting Dapr demo application");

    let settings = ServerSettings::from_env()?;
    info!(
        protocol = %settings.protocol,
        server_host = %settings.server_host,
        server_port = settings.server_port,
        dapr_host = %settings.dapr_host,
        dapr_port = settings.dapr_port,
        "Configuration loaded"
    );

    let server = DaprServer::new(settings)?;
    dapr_demo_actor::configure(&server, &config).await?;

    let addr = server.start().await?;
    info!(addr = %addr, "Demo application listening");

    tokio::signal::ctrl_c().await?;
    info!("Received shutdown signal");

    server.stop().await;
    info!("Demo application shutdown complete");
    Ok(())
}
