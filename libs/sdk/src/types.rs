//! Value types shared by both transports.

use std::fmt;
use std::str::FromStr;

use axum::http::Method;
use dapr_proto::common::v1::http_extension::Verb;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP verb attached to an invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    Get,
    Head,
    #[default]
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Connect => "CONNECT",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Patch => "PATCH",
        }
    }

    pub fn to_verb(self) -> Verb {
        match self {
            HttpMethod::Get => Verb::Get,
            HttpMethod::Head => Verb::Head,
            HttpMethod::Post => Verb::Post,
            HttpMethod::Put => Verb::Put,
            HttpMethod::Delete => Verb::Delete,
            HttpMethod::Connect => Verb::Connect,
            HttpMethod::Options => Verb::Options,
            HttpMethod::Trace => Verb::Trace,
            HttpMethod::Patch => Verb::Patch,
        }
    }

    /// `None` for [`Verb::None`], which carries no method.
    pub fn from_verb(verb: Verb) -> Option<Self> {
        match verb {
            Verb::None => None,
            Verb::Get => Some(HttpMethod::Get),
            Verb::Head => Some(HttpMethod::Head),
            Verb::Post => Some(HttpMethod::Post),
            Verb::Put => Some(HttpMethod::Put),
            Verb::Delete => Some(HttpMethod::Delete),
            Verb::Connect => Some(HttpMethod::Connect),
            Verb::Options => Some(HttpMethod::Options),
            Verb::Trace => Some(HttpMethod::Trace),
            Verb::Patch => Some(HttpMethod::Patch),
        }
    }

    pub fn to_method(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Connect => Method::CONNECT,
            HttpMethod::Options => Method::OPTIONS,
            HttpMethod::Trace => Method::TRACE,
            HttpMethod::Patch => Method::PATCH,
        }
    }

    pub fn from_method(method: &Method) -> Option<Self> {
        method.as_str().parse().ok()
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "HEAD" => Ok(HttpMethod::Head),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "CONNECT" => Ok(HttpMethod::Connect),
            "OPTIONS" => Ok(HttpMethod::Options),
            "TRACE" => Ok(HttpMethod::Trace),
            "PATCH" => Ok(HttpMethod::Patch),
            other => Err(format!("unsupported http method: {other}")),
        }
    }
}

/// Acknowledgement returned to the sidecar for one topic delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicStatus {
    /// Message processed; do not redeliver.
    #[default]
    Success,
    /// Redeliver later.
    Retry,
    /// Discard without processing.
    Drop,
}

/// Body of an HTTP topic delivery response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicResponse {
    pub status: TopicStatus,
}

/// Actor configuration handed to the sidecar on discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredActors {
    pub entities: Vec<String>,
    pub actor_idle_timeout: String,
    pub actor_scan_interval: String,
    pub drain_ongoing_call_timeout: String,
    pub drain_rebalanced_actors: bool,
}

/// One entry of `GET /dapr/subscribe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub pubsubname: String,
    pub topic: String,
    pub route: String,
}

/// Decode an inbound body into JSON. Empty bodies are `Null`; bodies that are
/// not JSON are passed through as a string.
pub fn decode_payload(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// Encode an outbound JSON payload. `Null` encodes as an empty body.
pub fn encode_payload(value: &Value) -> Vec<u8> {
    if value.is_null() {
        return Vec::new();
    }
    // Serializing a `Value` cannot fail.
    serde_json::to_vec(value).unwrap_or_default()
}
