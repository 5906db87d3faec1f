//! Capabilities over HTTP: axum routes on the application side and REST calls
//! against the sidecar's `/v1.0` API.

mod actor;
mod binding;
mod invoker;
mod pubsub;
mod secret;

pub use actor::{actor_router, HttpClientActor, HttpServerActor};
pub use binding::{HttpClientBinding, HttpServerBinding};
pub use invoker::{HttpClientInvoker, HttpServerInvoker};
pub use pubsub::{HttpClientPubSub, HttpServerPubSub};
pub use secret::HttpClientSecret;
