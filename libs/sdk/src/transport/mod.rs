//! Transport servers and clients.
//!
//! A transport owns the wire: the listening endpoint on the application side
//! and the outbound connection to the sidecar. Capability modules sit on top
//! and never touch sockets directly.

pub mod grpc;
pub mod http;

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::CommunicationProtocol;
use crate::error::DaprError;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// The application-side listener the sidecar calls into.
#[async_trait]
pub trait TransportServer: Send + Sync {
    fn protocol(&self) -> CommunicationProtocol;

    /// Bind and start serving. Returns the bound address, which differs from
    /// the requested one when port `0` is used.
    async fn start(&self, host: &str, port: u16) -> Result<SocketAddr, DaprError>;

    /// Stop accepting connections and wait for in-flight requests.
    async fn stop(&self);

    async fn local_addr(&self) -> Option<SocketAddr>;
}

/// A running server task and its shutdown signal.
pub(crate) struct ServerHandle {
    pub(crate) local_addr: SocketAddr,
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    pub(crate) fn new(
        local_addr: SocketAddr,
        shutdown_tx: watch::Sender<bool>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            local_addr,
            shutdown_tx,
            task,
        }
    }

    pub(crate) async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        match tokio::time::timeout(SHUTDOWN_TIMEOUT, self.task).await {
            Ok(Ok(())) => info!(addr = %self.local_addr, "Server stopped"),
            Ok(Err(e)) => warn!(error = %e, "Server task panicked"),
            Err(_) => warn!(addr = %self.local_addr, "Server did not shut down in time"),
        }
    }
}

/// Resolves once the shutdown flag flips to `true` or the sender is dropped.
pub(crate) async fn wait_for_shutdown(mut shutdown_rx: watch::Receiver<bool>) {
    loop {
        if *shutdown_rx.borrow() {
            break;
        }
        if shutdown_rx.changed().await.is_err() {
            break;
        }
    }
}
