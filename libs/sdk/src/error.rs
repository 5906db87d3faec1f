//! Error types for the SDK.
//!
//! The taxonomy separates the four ways an operation can fail:
//!
//! - [`ConfigError`]: invalid construction parameters, always fatal
//! - [`DaprError::Transport`]: the sidecar could not be reached (retryable)
//! - [`DaprError::Remote`]: the sidecar or the remote application was reached
//!   and answered with a failure
//! - [`RoutingError`]: a request named an actor type, method or route that is
//!   not registered

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Invalid construction parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The application (server) port is not a numeric port string.
    #[error("DAPR_SERVER_INCORRECT_SERVER_PORT: {0:?} is not a valid port")]
    InvalidServerPort(String),

    /// The sidecar port is not a numeric port string.
    #[error("DAPR_SERVER_INCORRECT_SIDECAR_PORT: {0:?} is not a valid port")]
    InvalidSidecarPort(String),

    /// Unknown communication protocol name.
    #[error("unknown communication protocol: {0:?}")]
    InvalidProtocol(String),

    /// The sidecar host/port do not form a usable endpoint.
    #[error("invalid sidecar address {address}: {reason}")]
    InvalidSidecarAddress { address: String, reason: String },

    /// The actor type was registered twice.
    #[error("actor type {0} is already registered")]
    DuplicateActorType(String),

    /// Actor types are append-only until the server starts.
    #[error("actor type {0} cannot be registered after the server has started")]
    RegistrationClosed(String),

    /// A subscription route already delivers another (pubsub, topic) pair.
    #[error("route {route} is already used by subscription {pubsub}/{topic}")]
    RouteInUse {
        route: String,
        pubsub: String,
        topic: String,
    },
}

/// A request addressed something that is not registered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("actor type {0} is not registered")]
    ActorTypeNotFound(String),

    #[error("actor type {actor_type} has no method {method}")]
    MethodNotFound { actor_type: String, method: String },

    #[error("no route registered for {0}")]
    RouteNotFound(String),

    #[error("the actor runtime has not been initialized")]
    ActorsNotInitialized,
}

impl RoutingError {
    /// Error code reported to the sidecar.
    pub fn error_code(&self) -> &'static str {
        match self {
            RoutingError::ActorTypeNotFound(_) => "ERR_ACTOR_TYPE_NOT_FOUND",
            RoutingError::MethodNotFound { .. } => "ERR_ACTOR_METHOD_NOT_FOUND",
            RoutingError::RouteNotFound(_) => "ERR_ROUTE_NOT_FOUND",
            RoutingError::ActorsNotInitialized => "ERR_ACTOR_RUNTIME_NOT_FOUND",
        }
    }
}

/// Errors returned by capability operations and the composition roots.
#[derive(Debug, Error)]
pub enum DaprError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The sidecar could not be reached: connection refused, timeout, reset.
    #[error("transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The call reached the other side and failed there.
    #[error("remote error [{code}]: {message}")]
    Remote {
        /// HTTP status, when the failure came over HTTP.
        status: Option<u16>,
        /// Sidecar error code or gRPC status code name.
        code: String,
        message: String,
    },

    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server already started")]
    AlreadyStarted,
}

impl DaprError {
    pub fn transport(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        DaprError::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn remote(
        status: Option<u16>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        DaprError::Remote {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Whether the caller may retry the operation unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DaprError::Transport { .. })
    }

    /// Whether the remote side was reached and reported a failure.
    pub fn is_remote(&self) -> bool {
        matches!(self, DaprError::Remote { .. })
    }
}

impl From<reqwest::Error> for DaprError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return DaprError::remote(
                err.status().map(|s| s.as_u16()),
                "ERR_MALFORMED_RESPONSE",
                err.to_string(),
            );
        }
        DaprError::transport(format!("sidecar request failed: {err}"), err)
    }
}

impl From<tonic::Status> for DaprError {
    fn from(status: tonic::Status) -> Self {
        use tonic::Code;

        match status.code() {
            Code::Unavailable | Code::DeadlineExceeded | Code::Cancelled => DaprError::Transport {
                message: format!("sidecar unreachable: {}", status.message()),
                source: Some(Box::new(status)),
            },
            code => DaprError::remote(None, format!("{code:?}"), status.message()),
        }
    }
}
