use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::id::ActorId;
use crate::capability::ClientActor;
use crate::error::DaprError;

/// Creates proxies bound to the client actor capability.
#[derive(Clone)]
pub struct ActorProxyFactory {
    client: Arc<dyn ClientActor>,
}

impl ActorProxyFactory {
    pub fn new(client: Arc<dyn ClientActor>) -> Self {
        Self { client }
    }

    pub fn create(&self, actor_type: impl Into<String>, actor_id: ActorId) -> ActorProxy {
        ActorProxy::new(self.client.clone(), actor_type.into(), actor_id)
    }
}

/// Client-side handle for one actor identity.
///
/// Typed wrappers are plain structs holding a proxy:
///
/// ```no_run
/// # use dapr_sdk::actors::ActorProxy;
/// # use dapr_sdk::DaprError;
/// struct Counter(ActorProxy);
///
/// impl Counter {
///     async fn count_by(&self, by: i64) -> Result<(), DaprError> {
///         self.0.invoke("countBy", &by).await
///     }
/// }
/// ```
#[derive(Clone)]
pub struct ActorProxy {
    client: Arc<dyn ClientActor>,
    actor_type: String,
    actor_id: ActorId,
}

impl ActorProxy {
    pub(crate) fn new(client: Arc<dyn ClientActor>, actor_type: String, actor_id: ActorId) -> Self {
        Self {
            client,
            actor_type,
            actor_id,
        }
    }

    pub fn actor_type(&self) -> &str {
        &self.actor_type
    }

    pub fn actor_id(&self) -> &ActorId {
        &self.actor_id
    }

    /// Call `method` with JSON-serialized `args` and decode the result.
    /// Arguments that serialize to `null` send an empty body.
    pub async fn invoke<A, R>(&self, method: &str, args: &A) -> Result<R, DaprError>
    where
        A: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let args = serde_json::to_value(args)?;
        let payload = (!args.is_null()).then_some(&args);
        let value = self.invoke_raw(method, payload).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn invoke_raw(&self, method: &str, args: Option<&Value>) -> Result<Value, DaprError> {
        debug!(
            actor_type = %self.actor_type,
            actor_id = %self.actor_id,
            method,
            "Invoking actor"
        );
        self.client
            .invoke(&self.actor_type, &self.actor_id, method, args)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::test_support::RecordingClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_proxy_builds_envelope() {
        let client = Arc::new(RecordingClient::returning(json!(8)));
        let factory = ActorProxyFactory::new(client.clone());
        let proxy = factory.create("DemoActor", ActorId::from("a1"));

        let count: i64 = proxy.invoke("getCounter", &()).await.unwrap();
        assert_eq!(count, 8);

        proxy.invoke::<_, Value>("countBy", &5).await.unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0],
            (
                "DemoActor".to_string(),
                "a1".to_string(),
                "getCounter".to_string(),
                None
            )
        );
        assert_eq!(calls[1].3, Some(json!(5)));
    }

    #[tokio::test]
    async fn test_result_type_mismatch_is_serialization_error() {
        let client = Arc::new(RecordingClient::returning(json!("not a number")));
        let proxy = ActorProxyFactory::new(client).create("DemoActor", ActorId::from("a1"));
        let err = proxy.invoke::<_, i64>("getCounter", &()).await.unwrap_err();
        assert!(matches!(err, DaprError::Serialization(_)));
    }
}
