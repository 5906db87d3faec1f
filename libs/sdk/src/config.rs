//! Construction parameters for the client and server composition roots.
//!
//! Settings are validated once, wrapped in an `Arc` by the composition root
//! and handed to every component that needs a resolved host or port. Nothing
//! is written back into the process environment.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Loopback host used when no host is configured.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Application port used when `DAPR_SERVER_PORT` is not set.
pub const DEFAULT_SERVER_PORT: &str = "50050";

/// Sidecar port used when `DAPR_SIDECAR_PORT` is not set.
pub const DEFAULT_SIDECAR_PORT: &str = "50051";

/// Wire protocol spoken between the application and the sidecar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CommunicationProtocol {
    #[default]
    Http,
    Grpc,
}

impl CommunicationProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationProtocol::Http => "http",
            CommunicationProtocol::Grpc => "grpc",
        }
    }
}

impl fmt::Display for CommunicationProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommunicationProtocol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(CommunicationProtocol::Http),
            "grpc" => Ok(CommunicationProtocol::Grpc),
            _ => Err(ConfigError::InvalidProtocol(s.to_string())),
        }
    }
}

/// Parse a port string. Only ASCII digits are accepted and the value must fit
/// in 16 bits.
pub fn parse_port(value: &str) -> Option<u16> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Settings for [`crate::DaprServer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Host the application server binds to.
    pub server_host: String,

    /// Port the application server binds to (`0` picks an ephemeral port).
    pub server_port: u16,

    /// Sidecar host.
    pub dapr_host: String,

    /// Sidecar port.
    pub dapr_port: u16,

    /// Protocol used for both directions.
    pub protocol: CommunicationProtocol,
}

impl ServerSettings {
    /// Validate raw construction parameters.
    ///
    /// Fails with a distinct error per invalid port before anything touches
    /// the network.
    pub fn new(
        server_host: impl Into<String>,
        server_port: &str,
        dapr_host: impl Into<String>,
        dapr_port: &str,
        protocol: CommunicationProtocol,
    ) -> Result<Self, ConfigError> {
        let server_port = parse_port(server_port)
            .ok_or_else(|| ConfigError::InvalidServerPort(server_port.to_string()))?;
        let dapr_port = parse_port(dapr_port)
            .ok_or_else(|| ConfigError::InvalidSidecarPort(dapr_port.to_string()))?;

        Ok(Self {
            server_host: server_host.into(),
            server_port,
            dapr_host: dapr_host.into(),
            dapr_port,
            protocol,
        })
    }

    /// Load settings from environment variables, falling back to loopback
    /// defaults.
    ///
    /// - `DAPR_SERVER_HOST` (default `127.0.0.1`)
    /// - `DAPR_SERVER_PORT` (default `50050`)
    /// - `DAPR_HOST` (default `127.0.0.1`)
    /// - `DAPR_SIDECAR_PORT` (default `50051`)
    /// - `DAPR_PROTOCOL`: `http` or `grpc` (default `http`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_host =
            std::env::var("DAPR_SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let server_port =
            std::env::var("DAPR_SERVER_PORT").unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string());
        let dapr_host = std::env::var("DAPR_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let dapr_port =
            std::env::var("DAPR_SIDECAR_PORT").unwrap_or_else(|_| DEFAULT_SIDECAR_PORT.to_string());
        let protocol = match std::env::var("DAPR_PROTOCOL") {
            Ok(value) => value.parse()?,
            Err(_) => CommunicationProtocol::default(),
        };

        Self::new(server_host, &server_port, dapr_host, &dapr_port, protocol)
    }

    /// Settings for the client half of the server's capability set.
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            dapr_host: self.dapr_host.clone(),
            dapr_port: self.dapr_port,
            protocol: self.protocol,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_string(),
            server_port: 50050,
            dapr_host: DEFAULT_HOST.to_string(),
            dapr_port: 50051,
            protocol: CommunicationProtocol::Http,
        }
    }
}

/// Settings for [`crate::DaprClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub dapr_host: String,
    pub dapr_port: u16,
    pub protocol: CommunicationProtocol,
}

impl ClientSettings {
    pub fn new(
        dapr_host: impl Into<String>,
        dapr_port: &str,
        protocol: CommunicationProtocol,
    ) -> Result<Self, ConfigError> {
        let dapr_port = parse_port(dapr_port)
            .ok_or_else(|| ConfigError::InvalidSidecarPort(dapr_port.to_string()))?;

        Ok(Self {
            dapr_host: dapr_host.into(),
            dapr_port,
            protocol,
        })
    }

    /// Load settings from `DAPR_HOST`, `DAPR_SIDECAR_PORT` and `DAPR_PROTOCOL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let dapr_host = std::env::var("DAPR_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let dapr_port =
            std::env::var("DAPR_SIDECAR_PORT").unwrap_or_else(|_| DEFAULT_SIDECAR_PORT.to_string());
        let protocol = match std::env::var("DAPR_PROTOCOL") {
            Ok(value) => value.parse()?,
            Err(_) => CommunicationProtocol::default(),
        };

        Self::new(dapr_host, &dapr_port, protocol)
    }

    /// Base URL of the sidecar, e.g. `http://127.0.0.1:3500`.
    pub fn sidecar_url(&self) -> String {
        format!("http://{}:{}", self.dapr_host, self.dapr_port)
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        ServerSettings::default().client_settings()
    }
}
