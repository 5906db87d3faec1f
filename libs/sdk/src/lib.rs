//! # dapr-sdk
//!
//! Client and server SDK for applications running next to a Dapr-style
//! sidecar.
//!
//! ## Layout
//!
//! - [`DaprServer`] hosts the application's inbound endpoints: pub/sub
//!   subscriptions, input bindings, service invocation and actors
//! - [`DaprClient`] makes outbound calls to the sidecar: publish, output
//!   bindings, invocation, secrets and actor calls
//! - [`capability`] defines one trait per capability with an HTTP and a gRPC
//!   implementation each; the protocol is chosen once, at construction
//! - [`actors`] holds the virtual actor runtime
//!
//! ## Example
//!
//! ```no_run
//! use dapr_sdk::{DaprServer, ServerSettings, TopicHandler};
//!
//! # async fn run() -> Result<(), dapr_sdk::DaprError> {
//! let server = DaprServer::new(ServerSettings::from_env()?)?;
//! server
//!     .pubsub()
//!     .subscribe(
//!         "pubsub",
//!         "orders",
//!         TopicHandler::new(|order| async move {
//!             tracing::info!(%order, "Order received");
//!             Ok(())
//!         }),
//!         None,
//!     )
//!     .await?;
//! server.start().await?;
//! # Ok(())
//! # }
//! ```

pub mod actors;
pub mod capability;
mod client;
pub mod config;
pub mod error;
pub mod handler;
mod server;
pub mod transport;
pub mod types;

pub use client::DaprClient;
pub use config::{ClientSettings, CommunicationProtocol, ServerSettings};
pub use error::{ConfigError, DaprError, RoutingError};
pub use handler::{BindingHandler, HandlerFailure, InvocationRequest, InvokeHandler, TopicHandler};
pub use server::DaprServer;
pub use types::{HttpMethod, TopicStatus};
