//! Protocol-neutral capability interfaces.
//!
//! Each trait has exactly two implementations, one per transport, under
//! [`http`] and [`grpc`]. The composition roots pick the set once from the
//! configured protocol; application code only sees the traits.

pub mod grpc;
pub mod http;

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::actors::{ActorId, ActorRegistration, ActorReminder, ActorTimer};
use crate::error::DaprError;
use crate::handler::{BindingHandler, InvokeHandler, TopicHandler};
use crate::types::{HttpMethod, RegisteredActors};

/// Route used when a subscription does not name one.
pub fn default_route(pubsub: &str, topic: &str) -> String {
    format!("route-{pubsub}-{topic}")
}

pub(crate) fn resolve_route(pubsub: &str, topic: &str, route: Option<&str>) -> String {
    match route.map(|r| r.trim_matches('/')) {
        Some(route) if !route.is_empty() => route.to_string(),
        _ => default_route(pubsub, topic),
    }
}

// =============================================================================
// Server side
// =============================================================================

#[async_trait]
pub trait ServerPubSub: Send + Sync {
    /// Subscribe `handler` to (pubsub, topic). Re-subscribing a pair replaces
    /// the previous handler and route. Returns the route in use.
    async fn subscribe(
        &self,
        pubsub: &str,
        topic: &str,
        handler: TopicHandler,
        route: Option<&str>,
    ) -> Result<String, DaprError>;
}

#[async_trait]
pub trait ServerBinding: Send + Sync {
    /// Receive events from the input binding `binding`.
    async fn receive(&self, binding: &str, handler: BindingHandler) -> Result<(), DaprError>;
}

#[async_trait]
pub trait ServerInvoker: Send + Sync {
    /// Serve invocations of `method` with the given HTTP verb.
    async fn listen(
        &self,
        method: &str,
        handler: InvokeHandler,
        http_method: HttpMethod,
    ) -> Result<(), DaprError>;
}

#[async_trait]
pub trait ServerActor: Send + Sync {
    /// Mount the actor callback endpoints on the transport. Idempotent.
    async fn init(&self) -> Result<(), DaprError>;

    async fn register(&self, registration: ActorRegistration) -> Result<(), DaprError>;

    async fn registered_actors(&self) -> RegisteredActors;
}

// =============================================================================
// Client side
// =============================================================================

#[async_trait]
pub trait ClientPubSub: Send + Sync {
    async fn publish(&self, pubsub: &str, topic: &str, data: &Value) -> Result<(), DaprError>;
}

#[async_trait]
pub trait ClientBinding: Send + Sync {
    /// Invoke `operation` on the output binding `binding`.
    async fn send(
        &self,
        binding: &str,
        operation: &str,
        data: &Value,
        metadata: HashMap<String, String>,
    ) -> Result<Value, DaprError>;
}

#[async_trait]
pub trait ClientInvoker: Send + Sync {
    /// Invoke `method` on the application `app_id` through the sidecar.
    async fn invoke(
        &self,
        app_id: &str,
        method: &str,
        http_method: HttpMethod,
        data: Option<&Value>,
    ) -> Result<Value, DaprError>;
}

#[async_trait]
pub trait ClientSecret: Send + Sync {
    async fn get(
        &self,
        store: &str,
        key: &str,
        metadata: HashMap<String, String>,
    ) -> Result<HashMap<String, String>, DaprError>;

    async fn get_bulk(
        &self,
        store: &str,
    ) -> Result<HashMap<String, HashMap<String, String>>, DaprError>;
}

#[async_trait]
pub trait ClientActor: Send + Sync {
    async fn invoke(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        method: &str,
        data: Option<&Value>,
    ) -> Result<Value, DaprError>;

    async fn register_timer(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        timer: &ActorTimer,
    ) -> Result<(), DaprError>;

    async fn unregister_timer(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        name: &str,
    ) -> Result<(), DaprError>;

    async fn register_reminder(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        reminder: &ActorReminder,
    ) -> Result<(), DaprError>;

    async fn unregister_reminder(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        name: &str,
    ) -> Result<(), DaprError>;
}
