//! The user-facing actor trait.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::id::ActorId;
use super::proxy::ActorProxy;
use super::timer::{ActorReminder, ActorTimer};
use crate::capability::ClientActor;
use crate::error::DaprError;

/// A virtual actor.
///
/// One value exists per (actor type, actor id) while the identity is active.
/// Calls to one identity never overlap, so `&mut self` needs no further
/// locking.
#[async_trait]
pub trait Actor: Send + 'static {
    /// Runs once, before the first call after activation.
    async fn on_activate(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs once, when the sidecar deactivates the identity.
    async fn on_deactivate(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Dispatch a method call by name.
    ///
    /// Unknown names must return [`ActorError::MethodNotFound`].
    async fn invoke(&mut self, method: &str, args: Value) -> Result<Value, ActorError>;

    /// A reminder registered for this identity fired.
    async fn on_reminder(&mut self, name: &str, _data: Value) -> anyhow::Result<()> {
        debug!(reminder = name, "Reminder ignored");
        Ok(())
    }
}

/// Errors returned by actor code.
#[derive(Debug, Error)]
pub enum ActorError {
    #[error("method {0} is not implemented")]
    MethodNotFound(String),

    #[error("invalid arguments for {method}: {source}")]
    InvalidArguments {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Application(#[from] anyhow::Error),
}

/// Deserialize method arguments.
pub fn decode_args<T: DeserializeOwned>(method: &str, args: Value) -> Result<T, ActorError> {
    serde_json::from_value(args).map_err(|source| ActorError::InvalidArguments {
        method: method.to_string(),
        source,
    })
}

/// Serialize a method result.
pub fn encode_result<T: Serialize>(value: T) -> Result<Value, ActorError> {
    serde_json::to_value(value).map_err(|e| ActorError::Application(e.into()))
}

/// Handed to the actor factory on activation.
#[derive(Clone)]
pub struct ActorContext {
    actor_type: String,
    actor_id: ActorId,
    client: Arc<dyn ClientActor>,
}

impl ActorContext {
    pub(crate) fn new(actor_type: String, actor_id: ActorId, client: Arc<dyn ClientActor>) -> Self {
        Self {
            actor_type,
            actor_id,
            client,
        }
    }

    pub fn actor_type(&self) -> &str {
        &self.actor_type
    }

    pub fn actor_id(&self) -> &ActorId {
        &self.actor_id
    }

    pub async fn register_timer(&self, timer: &ActorTimer) -> Result<(), DaprError> {
        self.client
            .register_timer(&self.actor_type, &self.actor_id, timer)
            .await
    }

    pub async fn unregister_timer(&self, name: &str) -> Result<(), DaprError> {
        self.client
            .unregister_timer(&self.actor_type, &self.actor_id, name)
            .await
    }

    pub async fn register_reminder(&self, reminder: &ActorReminder) -> Result<(), DaprError> {
        self.client
            .register_reminder(&self.actor_type, &self.actor_id, reminder)
            .await
    }

    pub async fn unregister_reminder(&self, name: &str) -> Result<(), DaprError> {
        self.client
            .unregister_reminder(&self.actor_type, &self.actor_id, name)
            .await
    }

    /// Proxy for calling another actor through the sidecar.
    pub fn proxy(&self, actor_type: impl Into<String>, actor_id: ActorId) -> ActorProxy {
        ActorProxy::new(self.client.clone(), actor_type.into(), actor_id)
    }
}
