//! # dapr-demo-actor
//!
//! Demo application for the SDK:
//!
//! - `DemoActor`, a counter actor with a timer and a reminder
//! - a topic subscriber that logs orders
//! - an `echo` invocation listener
//!
//! [`configure`] wires all three onto a [`DaprServer`]; the binary and the
//! end-to-end tests share it.

pub mod config;

use std::time::Duration;

use async_trait::async_trait;
use dapr_sdk::actors::{
    decode_args, encode_result, Actor, ActorContext, ActorError, ActorId, ActorProxy,
    ActorProxyFactory, ActorRegistration, ActorReminder, ActorTimer,
};
use dapr_sdk::{DaprError, DaprServer, HttpMethod, InvokeHandler, TopicHandler};
use serde_json::Value;
use tracing::info;

use crate::config::Config;

pub const ACTOR_TYPE: &str = "DemoActor";

const TICK_TIMER: &str = "tick";
const WAKE_REMINDER: &str = "wake";

/// A counter actor.
///
/// Methods: `count`, `countBy(n)`, `getCounter`, `startTicking(seconds)`,
/// `stopTicking`, `remindMe(seconds)`. Each reminder delivery adds one.
pub struct DemoActor {
    ctx: ActorContext,
    counter: i64,
}

impl DemoActor {
    pub fn new(ctx: ActorContext) -> Self {
        Self { ctx, counter: 0 }
    }

    pub fn registration() -> ActorRegistration {
        ActorRegistration::new(ACTOR_TYPE, DemoActor::new)
    }
}

#[async_trait]
impl Actor for DemoActor {
    async fn on_activate(&mut self) -> anyhow::Result<()> {
        info!(actor_id = %self.ctx.actor_id(), "DemoActor activated");
        Ok(())
    }

    async fn on_deactivate(&mut self) -> anyhow::Result<()> {
        info!(actor_id = %self.ctx.actor_id(), counter = self.counter, "DemoActor deactivated");
        Ok(())
    }

    async fn invoke(&mut self, method: &str, args: Value) -> Result<Value, ActorError> {
        match method {
            "count" => {
                self.counter += 1;
                Ok(Value::Null)
            }
            "countBy" => {
                self.counter += decode_args::<i64>(method, args)?;
                Ok(Value::Null)
            }
            "getCounter" => encode_result(self.counter),
            "startTicking" => {
                let seconds = decode_args::<u64>(method, args)?;
                let timer = ActorTimer::new(TICK_TIMER, "count")
                    .due_in(Duration::from_secs(seconds))
                    .every(Duration::from_secs(seconds));
                self.ctx.register_timer(&timer).await.map_err(anyhow::Error::from)?;
                Ok(Value::Null)
            }
            "stopTicking" => {
                self.ctx
                    .unregister_timer(TICK_TIMER)
                    .await
                    .map_err(anyhow::Error::from)?;
                Ok(Value::Null)
            }
            "remindMe" => {
                let seconds = decode_args::<u64>(method, args)?;
                let reminder =
                    ActorReminder::new(WAKE_REMINDER).due_in(Duration::from_secs(seconds));
                self.ctx
                    .register_reminder(&reminder)
                    .await
                    .map_err(anyhow::Error::from)?;
                Ok(Value::Null)
            }
            other => Err(ActorError::MethodNotFound(other.to_string())),
        }
    }

    async fn on_reminder(&mut self, name: &str, _data: Value) -> anyhow::Result<()> {
        info!(actor_id = %self.ctx.actor_id(), reminder = name, "Reminder received");
        self.counter += 1;
        Ok(())
    }
}

/// Typed client for [`DemoActor`].
#[derive(Clone)]
pub struct DemoActorProxy(ActorProxy);

impl DemoActorProxy {
    pub fn new(factory: &ActorProxyFactory, actor_id: ActorId) -> Self {
        Self(factory.create(ACTOR_TYPE, actor_id))
    }

    pub fn actor_id(&self) -> &ActorId {
        self.0.actor_id()
    }

    pub async fn count(&self) -> Result<(), DaprError> {
        self.0.invoke("count", &()).await
    }

    pub async fn count_by(&self, by: i64) -> Result<(), DaprError> {
        self.0.invoke("countBy", &by).await
    }

    pub async fn get_counter(&self) -> Result<i64, DaprError> {
        self.0.invoke("getCounter", &()).await
    }

    pub async fn start_ticking(&self, every: Duration) -> Result<(), DaprError> {
        self.0.invoke("startTicking", &every.as_secs()).await
    }

    pub async fn stop_ticking(&self) -> Result<(), DaprError> {
        self.0.invoke("stopTicking", &()).await
    }
}

/// Register the actor, the topic subscription and the `echo` listener.
pub async fn configure(server: &DaprServer, config: &Config) -> Result<(), DaprError> {
    server.actor().register(DemoActor::registration()).await?;

    let route = server
        .pubsub()
        .subscribe(
            &config.pubsub_name,
            &config.topic,
            TopicHandler::new(|order: Value| async move {
                info!(%order, "Order received");
                Ok(())
            }),
            None,
        )
        .await?;

    server
        .invoker()
        .listen(
            "echo",
            InvokeHandler::new(|request| async move { Ok(request.body) }),
            HttpMethod::Post,
        )
        .await?;

    info!(
        actor_type = ACTOR_TYPE,
        pubsub = %config.pubsub_name,
        topic = %config.topic,
        route = %route,
        "Demo application configured"
    );
    Ok(())
}
