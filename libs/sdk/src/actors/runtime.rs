//! Server-side actor runtime.
//!
//! Holds the registered actor types and an arena of live instances keyed by
//! (actor type, actor id). Each instance sits behind its own mutex, so calls
//! to one identity run one at a time while different identities run
//! concurrently.
//!
//! ## Lifecycle
//!
//! ```text
//! Unactivated --on_activate--> Active --deactivate--> Deactivated
//! ```
//!
//! A Deactivated cell is already gone from the arena. A caller that was queued
//! on it re-resolves the identity and activates a fresh instance.

use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use super::actor::{Actor, ActorContext, ActorError};
use super::id::ActorId;
use super::timer::{format_duration, TimerCallback};
use crate::capability::ClientActor;
use crate::error::{ConfigError, RoutingError};
use crate::handler::panic_message;
use crate::types::RegisteredActors;

// =============================================================================
// Configuration
// =============================================================================

/// Actor settings reported to the sidecar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorRuntimeConfig {
    pub actor_idle_timeout: Duration,
    pub actor_scan_interval: Duration,
    pub drain_ongoing_call_timeout: Duration,
    pub drain_rebalanced_actors: bool,
}

impl Default for ActorRuntimeConfig {
    fn default() -> Self {
        Self {
            actor_idle_timeout: Duration::from_secs(3600),
            actor_scan_interval: Duration::from_secs(30),
            drain_ongoing_call_timeout: Duration::from_secs(60),
            drain_rebalanced_actors: true,
        }
    }
}

// =============================================================================
// Registration
// =============================================================================

type Factory = Arc<dyn Fn(ActorContext) -> Box<dyn Actor> + Send + Sync>;

/// An actor type and the factory that builds its instances.
pub struct ActorRegistration {
    actor_type: String,
    factory: Factory,
}

impl ActorRegistration {
    /// `factory` runs once per activation while the instance table is
    /// locked. Keep it cheap and synchronous; do setup in
    /// [`Actor::on_activate`].
    pub fn new<A, F>(actor_type: impl Into<String>, factory: F) -> Self
    where
        A: Actor,
        F: Fn(ActorContext) -> A + Send + Sync + 'static,
    {
        Self {
            actor_type: actor_type.into(),
            factory: Arc::new(move |ctx| Box::new(factory(ctx)) as Box<dyn Actor>),
        }
    }

    pub fn actor_type(&self) -> &str {
        &self.actor_type
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Failure of one inbound actor call.
#[derive(Debug, Error)]
pub enum ActorCallError {
    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error("actor activation failed: {0:#}")]
    Activation(anyhow::Error),

    #[error("{0}")]
    InvalidArguments(String),

    #[error("{0:#}")]
    Application(anyhow::Error),

    #[error("actor method panicked: {0}")]
    Panicked(String),
}

impl ActorCallError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ActorCallError::Routing(err) => err.error_code(),
            ActorCallError::Activation(_) => "ERR_ACTOR_ACTIVATION",
            ActorCallError::InvalidArguments(_) => "ERR_ACTOR_INVALID_ARGUMENTS",
            ActorCallError::Application(_) | ActorCallError::Panicked(_) => {
                "ERR_ACTOR_INVOKE_METHOD"
            }
        }
    }

    fn from_actor(actor_type: &str, err: ActorError) -> Self {
        match err {
            ActorError::MethodNotFound(method) => {
                ActorCallError::Routing(RoutingError::MethodNotFound {
                    actor_type: actor_type.to_string(),
                    method,
                })
            }
            err @ ActorError::InvalidArguments { .. } => {
                ActorCallError::InvalidArguments(err.to_string())
            }
            ActorError::Application(err) => ActorCallError::Application(err),
        }
    }
}

// =============================================================================
// Instances
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorLifecycle {
    Unactivated,
    Active,
    Deactivated,
}

struct ActorCell {
    lifecycle: ActorLifecycle,
    actor: Box<dyn Actor>,
}

type ActorKey = (String, ActorId);
type SharedCell = Arc<Mutex<ActorCell>>;

enum ActorCall {
    Method { method: String, args: Value },
    Reminder { name: String, data: Value },
}

async fn dispatch(actor: &mut dyn Actor, call: ActorCall) -> Result<Value, ActorError> {
    match call {
        ActorCall::Method { method, args } => actor.invoke(&method, args).await,
        ActorCall::Reminder { name, data } => {
            actor.on_reminder(&name, data).await?;
            Ok(Value::Null)
        }
    }
}

// =============================================================================
// Runtime
// =============================================================================

pub struct ActorRuntime {
    config: ActorRuntimeConfig,
    client: Arc<dyn ClientActor>,
    factories: RwLock<HashMap<String, Factory>>,
    sealed: AtomicBool,
    instances: RwLock<HashMap<ActorKey, SharedCell>>,
}

impl ActorRuntime {
    pub fn new(config: ActorRuntimeConfig, client: Arc<dyn ClientActor>) -> Self {
        Self {
            config,
            client,
            factories: RwLock::new(HashMap::new()),
            sealed: AtomicBool::new(false),
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// Register an actor type. Fails once the runtime is sealed or when the
    /// type is already registered.
    pub async fn register(&self, registration: ActorRegistration) -> Result<(), ConfigError> {
        let ActorRegistration {
            actor_type,
            factory,
        } = registration;

        let mut factories = self.factories.write().await;
        if self.sealed.load(Ordering::SeqCst) {
            return Err(ConfigError::RegistrationClosed(actor_type));
        }
        if factories.contains_key(&actor_type) {
            return Err(ConfigError::DuplicateActorType(actor_type));
        }

        info!(actor_type = %actor_type, "Registered actor type");
        factories.insert(actor_type, factory);
        Ok(())
    }

    /// Close registration. Called when the server starts.
    pub async fn seal(&self) {
        let _factories = self.factories.write().await;
        self.sealed.store(true, Ordering::SeqCst);
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::SeqCst)
    }

    pub async fn registered_actors(&self) -> RegisteredActors {
        let mut entities: Vec<String> = self.factories.read().await.keys().cloned().collect();
        entities.sort();

        RegisteredActors {
            entities,
            actor_idle_timeout: format_duration(self.config.actor_idle_timeout),
            actor_scan_interval: format_duration(self.config.actor_scan_interval),
            drain_ongoing_call_timeout: format_duration(self.config.drain_ongoing_call_timeout),
            drain_rebalanced_actors: self.config.drain_rebalanced_actors,
        }
    }

    /// Number of identities currently in the arena.
    pub async fn active_count(&self) -> usize {
        self.instances.read().await.len()
    }

    pub async fn lifecycle(&self, actor_type: &str, actor_id: &ActorId) -> Option<ActorLifecycle> {
        let cell = self
            .instances
            .read()
            .await
            .get(&(actor_type.to_string(), actor_id.clone()))
            .cloned()?;
        let lifecycle = cell.lock().await.lifecycle;
        Some(lifecycle)
    }

    /// Call `method` on the identity, activating it first if needed.
    pub async fn invoke(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        method: &str,
        args: Value,
    ) -> Result<Value, ActorCallError> {
        self.call(
            actor_type,
            actor_id,
            ActorCall::Method {
                method: method.to_string(),
                args,
            },
        )
        .await
    }

    /// A timer fired: run the method it names.
    pub async fn fire_timer(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        name: &str,
        timer: TimerCallback,
    ) -> Result<(), ActorCallError> {
        debug!(
            actor_type,
            actor_id = %actor_id,
            timer = name,
            callback = %timer.callback,
            "Timer fired"
        );
        if timer.callback.is_empty() {
            return Err(RoutingError::MethodNotFound {
                actor_type: actor_type.to_string(),
                method: format!("timer/{name}"),
            }
            .into());
        }

        self.call(
            actor_type,
            actor_id,
            ActorCall::Method {
                method: timer.callback,
                args: timer.data,
            },
        )
        .await
        .map(|_| ())
    }

    /// A reminder fired: deliver it to [`Actor::on_reminder`].
    pub async fn fire_reminder(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        name: &str,
        data: Value,
    ) -> Result<(), ActorCallError> {
        debug!(actor_type, actor_id = %actor_id, reminder = name, "Reminder fired");
        self.call(
            actor_type,
            actor_id,
            ActorCall::Reminder {
                name: name.to_string(),
                data,
            },
        )
        .await
        .map(|_| ())
    }

    /// Drop the instance for an identity, running `on_deactivate` if it was
    /// active. Returns `false` when the identity was not active.
    pub async fn deactivate(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
    ) -> Result<bool, ActorCallError> {
        if !self.factories.read().await.contains_key(actor_type) {
            return Err(RoutingError::ActorTypeNotFound(actor_type.to_string()).into());
        }

        let key = (actor_type.to_string(), actor_id.clone());
        let Some(cell) = self.instances.write().await.remove(&key) else {
            debug!(actor_type, actor_id = %actor_id, "Deactivation for inactive actor");
            return Ok(false);
        };

        let mut guard = cell.lock().await;
        let was_active = guard.lifecycle == ActorLifecycle::Active;
        guard.lifecycle = ActorLifecycle::Deactivated;

        if was_active {
            match AssertUnwindSafe(guard.actor.on_deactivate()).catch_unwind().await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    warn!(actor_type, actor_id = %actor_id, error = %e, "on_deactivate failed")
                }
                Err(panic) => warn!(
                    actor_type,
                    actor_id = %actor_id,
                    panic = %panic_message(panic.as_ref()),
                    "on_deactivate panicked"
                ),
            }
        }

        info!(actor_type, actor_id = %actor_id, "Actor deactivated");
        Ok(was_active)
    }

    async fn factory(&self, actor_type: &str) -> Result<Factory, RoutingError> {
        self.factories
            .read()
            .await
            .get(actor_type)
            .cloned()
            .ok_or_else(|| RoutingError::ActorTypeNotFound(actor_type.to_string()))
    }

    async fn resolve(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        factory: &Factory,
    ) -> Result<SharedCell, ActorCallError> {
        let key = (actor_type.to_string(), actor_id.clone());
        if let Some(cell) = self.instances.read().await.get(&key) {
            return Ok(cell.clone());
        }

        // Built under the write lock so racing first calls share one instance.
        let mut instances = self.instances.write().await;
        if let Some(cell) = instances.get(&key) {
            return Ok(cell.clone());
        }

        let ctx = ActorContext::new(actor_type.to_string(), actor_id.clone(), self.client.clone());
        let actor = std::panic::catch_unwind(AssertUnwindSafe(|| factory(ctx))).map_err(|panic| {
            ActorCallError::Activation(anyhow::anyhow!(
                "actor factory panicked: {}",
                panic_message(panic.as_ref())
            ))
        })?;

        let cell = Arc::new(Mutex::new(ActorCell {
            lifecycle: ActorLifecycle::Unactivated,
            actor,
        }));
        instances.insert(key, cell.clone());
        Ok(cell)
    }

    /// Remove `cell` from the arena unless a newer cell already replaced it.
    async fn evict(&self, actor_type: &str, actor_id: &ActorId, cell: &SharedCell) {
        let key = (actor_type.to_string(), actor_id.clone());
        let mut instances = self.instances.write().await;
        if instances.get(&key).is_some_and(|current| Arc::ptr_eq(current, cell)) {
            instances.remove(&key);
        }
    }

    async fn call(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        call: ActorCall,
    ) -> Result<Value, ActorCallError> {
        let factory = self.factory(actor_type).await?;

        loop {
            let cell = self.resolve(actor_type, actor_id, &factory).await?;
            let mut guard = cell.lock().await;

            match guard.lifecycle {
                ActorLifecycle::Deactivated => continue,
                ActorLifecycle::Active => {}
                ActorLifecycle::Unactivated => {
                    let activation = AssertUnwindSafe(guard.actor.on_activate())
                        .catch_unwind()
                        .await;
                    let failure = match activation {
                        Ok(Ok(())) => None,
                        Ok(Err(e)) => Some(e),
                        Err(panic) => Some(anyhow::anyhow!(
                            "on_activate panicked: {}",
                            panic_message(panic.as_ref())
                        )),
                    };
                    if let Some(e) = failure {
                        warn!(
                            actor_type,
                            actor_id = %actor_id,
                            error = %e,
                            "Actor activation failed"
                        );
                        guard.lifecycle = ActorLifecycle::Deactivated;
                        self.evict(actor_type, actor_id, &cell).await;
                        return Err(ActorCallError::Activation(e));
                    }
                    guard.lifecycle = ActorLifecycle::Active;
                    info!(actor_type, actor_id = %actor_id, "Actor activated");
                }
            }

            let outcome = AssertUnwindSafe(dispatch(guard.actor.as_mut(), call))
                .catch_unwind()
                .await;

            return match outcome {
                Ok(result) => result.map_err(|e| ActorCallError::from_actor(actor_type, e)),
                Err(panic) => {
                    let message = panic_message(panic.as_ref());
                    warn!(
                        actor_type,
                        actor_id = %actor_id,
                        panic = %message,
                        "Actor call panicked, dropping instance"
                    );
                    guard.lifecycle = ActorLifecycle::Deactivated;
                    self.evict(actor_type, actor_id, &cell).await;
                    Err(ActorCallError::Panicked(message))
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::actor::{decode_args, encode_result};
    use crate::actors::test_support::RecordingClient;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct Counter {
        count: i64,
        reminders: Vec<String>,
        deactivations: Option<Arc<AtomicUsize>>,
    }

    #[async_trait]
    impl Actor for Counter {
        async fn on_deactivate(&mut self) -> anyhow::Result<()> {
            if let Some(counter) = &self.deactivations {
                counter.fetch_add(1, Ordering::SeqCst);
            }
            Ok(())
        }

        async fn invoke(&mut self, method: &str, args: Value) -> Result<Value, ActorError> {
            match method {
                "count" => {
                    self.count += 1;
                    Ok(Value::Null)
                }
                "countBy" => {
                    let by: i64 = decode_args(method, args)?;
                    self.count += by;
                    Ok(Value::Null)
                }
                "getCounter" => encode_result(self.count),
                "reminders" => encode_result(&self.reminders),
                "fail" => Err(anyhow::anyhow!("counter is broken").into()),
                "explode" => panic!("counter exploded"),
                other => Err(ActorError::MethodNotFound(other.to_string())),
            }
        }

        async fn on_reminder(&mut self, name: &str, _data: Value) -> anyhow::Result<()> {
            self.reminders.push(name.to_string());
            Ok(())
        }
    }

    async fn runtime() -> ActorRuntime {
        let runtime = ActorRuntime::new(
            ActorRuntimeConfig::default(),
            Arc::new(RecordingClient::returning(Value::Null)),
        );
        runtime
            .register(ActorRegistration::new("Counter", |_ctx| Counter::default()))
            .await
            .unwrap();
        runtime
    }

    async fn counter(runtime: &ActorRuntime, id: &ActorId) -> i64 {
        let value = runtime.invoke("Counter", id, "getCounter", Value::Null).await.unwrap();
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_count_three_times_then_by_five() {
        let runtime = runtime().await;
        let id = ActorId::from("a1");

        for _ in 0..3 {
            runtime.invoke("Counter", &id, "count", Value::Null).await.unwrap();
        }
        runtime.invoke("Counter", &id, "countBy", json!(5)).await.unwrap();

        assert_eq!(counter(&runtime, &id).await, 8);
        assert_eq!(runtime.lifecycle("Counter", &id).await, Some(ActorLifecycle::Active));
    }

    #[tokio::test]
    async fn test_identities_are_isolated() {
        let runtime = runtime().await;
        let a = ActorId::from("a");
        let b = ActorId::from("b");

        runtime.invoke("Counter", &a, "countBy", json!(2)).await.unwrap();
        runtime.invoke("Counter", &b, "count", Value::Null).await.unwrap();

        assert_eq!(counter(&runtime, &a).await, 2);
        assert_eq!(counter(&runtime, &b).await, 1);
        assert_eq!(runtime.active_count().await, 2);
    }

    #[tokio::test]
    async fn test_deactivation_resets_state() {
        let deactivations = Arc::new(AtomicUsize::new(0));
        let runtime = ActorRuntime::new(
            ActorRuntimeConfig::default(),
            Arc::new(RecordingClient::returning(Value::Null)),
        );
        let seen = deactivations.clone();
        runtime
            .register(ActorRegistration::new("Counter", move |_ctx| Counter {
                deactivations: Some(seen.clone()),
                ..Counter::default()
            }))
            .await
            .unwrap();

        let id = ActorId::from("a1");
        runtime.invoke("Counter", &id, "countBy", json!(8)).await.unwrap();

        assert!(runtime.deactivate("Counter", &id).await.unwrap());
        assert_eq!(deactivations.load(Ordering::SeqCst), 1);
        assert_eq!(runtime.lifecycle("Counter", &id).await, None);

        // Deactivating again is a no-op.
        assert!(!runtime.deactivate("Counter", &id).await.unwrap());
        assert_eq!(deactivations.load(Ordering::SeqCst), 1);

        assert_eq!(counter(&runtime, &id).await, 0);
    }

    #[tokio::test]
    async fn test_racing_first_calls_build_one_instance() {
        let built = Arc::new(AtomicUsize::new(0));
        let runtime = ActorRuntime::new(
            ActorRuntimeConfig::default(),
            Arc::new(RecordingClient::returning(Value::Null)),
        );
        let seen = built.clone();
        runtime
            .register(ActorRegistration::new("Counter", move |_ctx| {
                seen.fetch_add(1, Ordering::SeqCst);
                Counter::default()
            }))
            .await
            .unwrap();

        let id = ActorId::from("a1");
        let calls = (0..8).map(|_| runtime.invoke("Counter", &id, "count", Value::Null));
        for result in futures_util::future::join_all(calls).await {
            result.unwrap();
        }

        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert_eq!(counter(&runtime, &id).await, 8);
    }

    #[tokio::test]
    async fn test_unknown_type_and_method() {
        let runtime = runtime().await;
        let id = ActorId::from("a1");

        let err = runtime.invoke("Ghost", &id, "count", Value::Null).await.unwrap_err();
        assert!(matches!(err, ActorCallError::Routing(RoutingError::ActorTypeNotFound(_))));

        let err = runtime.invoke("Counter", &id, "nope", Value::Null).await.unwrap_err();
        assert_eq!(err.error_code(), "ERR_ACTOR_METHOD_NOT_FOUND");

        let err = runtime.deactivate("Ghost", &id).await.unwrap_err();
        assert!(matches!(err, ActorCallError::Routing(_)));
    }

    #[tokio::test]
    async fn test_invalid_arguments_and_application_errors() {
        let runtime = runtime().await;
        let id = ActorId::from("a1");

        let err = runtime.invoke("Counter", &id, "countBy", json!("x")).await.unwrap_err();
        assert!(matches!(err, ActorCallError::InvalidArguments(_)));

        let err = runtime.invoke("Counter", &id, "fail", Value::Null).await.unwrap_err();
        assert_eq!(err.to_string(), "counter is broken");

        // Errors do not discard the instance.
        runtime.invoke("Counter", &id, "count", Value::Null).await.unwrap();
        assert_eq!(counter(&runtime, &id).await, 1);
    }

    #[tokio::test]
    async fn test_panic_drops_instance() {
        let runtime = runtime().await;
        let id = ActorId::from("a1");

        runtime.invoke("Counter", &id, "countBy", json!(3)).await.unwrap();
        let err = runtime.invoke("Counter", &id, "explode", Value::Null).await.unwrap_err();
        assert!(matches!(err, ActorCallError::Panicked(ref m) if m == "counter exploded"));

        assert_eq!(counter(&runtime, &id).await, 0);
    }

    #[tokio::test]
    async fn test_timer_runs_named_method() {
        let runtime = runtime().await;
        let id = ActorId::from("a1");

        let timer = TimerCallback {
            callback: "countBy".to_string(),
            data: json!(4),
            ..TimerCallback::default()
        };
        runtime.fire_timer("Counter", &id, "tick", timer).await.unwrap();
        assert_eq!(counter(&runtime, &id).await, 4);

        let err = runtime
            .fire_timer("Counter", &id, "tick", TimerCallback::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ActorCallError::Routing(RoutingError::MethodNotFound { .. })));
    }

    #[tokio::test]
    async fn test_reminder_reaches_on_reminder() {
        let runtime = runtime().await;
        let id = ActorId::from("a1");

        runtime.fire_reminder("Counter", &id, "wake", Value::Null).await.unwrap();
        let reminders = runtime.invoke("Counter", &id, "reminders", Value::Null).await.unwrap();
        assert_eq!(reminders, json!(["wake"]));
    }

    #[tokio::test]
    async fn test_registration_rules() {
        let runtime = runtime().await;

        let err = runtime
            .register(ActorRegistration::new("Counter", |_ctx| Counter::default()))
            .await
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateActorType("Counter".to_string()));

        runtime.seal().await;
        assert!(runtime.is_sealed());
        let err = runtime
            .register(ActorRegistration::new("Other", |_ctx| Counter::default()))
            .await
            .unwrap_err();
        assert_eq!(err, ConfigError::RegistrationClosed("Other".to_string()));
    }

    #[tokio::test]
    async fn test_registered_actors_descriptor() {
        let runtime = runtime().await;
        let descriptor = runtime.registered_actors().await;
        assert_eq!(descriptor.entities, vec!["Counter".to_string()]);
        assert_eq!(descriptor.actor_idle_timeout, "1h");
        assert_eq!(descriptor.actor_scan_interval, "30s");
        assert_eq!(descriptor.drain_ongoing_call_timeout, "1m");
        assert!(descriptor.drain_rebalanced_actors);
    }

    #[tokio::test]
    async fn test_concurrent_calls_to_one_identity_are_serialized() {
        let runtime = Arc::new(runtime().await);
        let id = ActorId::from("hot");

        let mut tasks = Vec::new();
        for _ in 0..50 {
            let runtime = runtime.clone();
            let id = id.clone();
            tasks.push(tokio::spawn(async move {
                runtime.invoke("Counter", &id, "count", Value::Null).await.unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(counter(&runtime, &id).await, 50);
    }
}
