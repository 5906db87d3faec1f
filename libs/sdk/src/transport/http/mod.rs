//! HTTP transport: an axum server for sidecar callbacks and a reqwest client
//! for the sidecar's `/v1.0` API.

mod client;
pub mod error;
mod health;
mod server;

pub use client::HttpClient;
pub use error::{ApiError, ErrorBody};
pub use server::{json_response, HttpHandler, HttpInbound, HttpRoutes, HttpServer};
