//! Capabilities over gRPC: `AppCallback`/`ActorCallback` handlers on the
//! application side and `Dapr` service calls against the sidecar.

mod actor;
mod binding;
mod invoker;
mod pubsub;
mod secret;

pub use actor::{GrpcActorCallbacks, GrpcClientActor, GrpcServerActor};
pub use binding::{GrpcClientBinding, GrpcServerBinding};
pub use invoker::{GrpcClientInvoker, GrpcServerInvoker};
pub use pubsub::{GrpcClientPubSub, GrpcServerPubSub};
pub use secret::GrpcClientSecret;

use prost_types::Any;
use serde_json::Value;

use crate::types::{decode_payload, encode_payload};

const JSON_CONTENT_TYPE: &str = "application/json";

fn to_any(value: &Value) -> Any {
    Any {
        type_url: String::new(),
        value: encode_payload(value),
    }
}

fn from_any(any: Option<Any>) -> Value {
    any.map(|any| decode_payload(&any.value)).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use dapr_proto::runtime::v1::topic_event_response::TopicEventResponseStatus;
    use dapr_proto::runtime::v1::{
        ActorCallback, AppCallback, BindingEventRequest, DeactivateActorRequest,
        InvokeActorRequest, InvokeActorTimerRequest, TopicEventRequest,
    };
    use serde_json::json;
    use tonic::{Code, Request};

    use super::*;
    use crate::actors::test_support::RecordingClient;
    use crate::actors::{
        decode_args, encode_result, Actor, ActorError, ActorRegistration, ActorRuntime,
        ActorRuntimeConfig,
    };
    use crate::capability::{ServerActor, ServerBinding, ServerPubSub};
    use crate::error::{ConfigError, DaprError};
    use crate::handler::{BindingHandler, TopicHandler};
    use crate::transport::grpc::GrpcServer;

    fn topic_event(pubsub: &str, topic: &str, data: Value) -> Request<TopicEventRequest> {
        Request::new(TopicEventRequest {
            pubsub_name: pubsub.to_string(),
            topic: topic.to_string(),
            data: encode_payload(&data),
            ..TopicEventRequest::default()
        })
    }

    #[tokio::test]
    async fn test_resubscribe_replaces_handler() {
        let server = GrpcServer::new();
        let pubsub = GrpcServerPubSub::new(server.routes());
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let seen = first.clone();
        pubsub
            .subscribe(
                "pubsub",
                "orders",
                TopicHandler::new(move |_| {
                    seen.fetch_add(1, Ordering::SeqCst);
                    async { Ok(()) }
                }),
                None,
            )
            .await
            .unwrap();
        let seen = second.clone();
        pubsub
            .subscribe(
                "pubsub",
                "orders",
                TopicHandler::new(move |_| {
                    seen.fetch_add(1, Ordering::SeqCst);
                    async { Ok(()) }
                }),
                Some("orders-v2"),
            )
            .await
            .unwrap();

        let service = server.app_callback();
        let listed = service
            .list_topic_subscriptions(Request::new(()))
            .await
            .unwrap()
            .into_inner()
            .subscriptions;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].routes.as_ref().unwrap().default, "orders-v2");

        service
            .on_topic_event(topic_event("pubsub", "orders", json!({ "n": 1 })))
            .await
            .unwrap();
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_route_serves_one_topic() {
        let server = GrpcServer::new();
        let pubsub = GrpcServerPubSub::new(server.routes());
        let handler = || TopicHandler::new(|_| async { Ok(()) });

        pubsub
            .subscribe("pubsub", "a", handler(), Some("shared"))
            .await
            .unwrap();
        let err = pubsub
            .subscribe("pubsub", "b", handler(), Some("shared"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DaprError::Config(ConfigError::RouteInUse { ref topic, .. }) if topic == "a"
        ));

        // Moving `a` away frees the route.
        pubsub
            .subscribe("pubsub", "a", handler(), Some("a-v2"))
            .await
            .unwrap();
        pubsub
            .subscribe("pubsub", "b", handler(), Some("shared"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_failing_topic_handler_acks_success() {
        let server = GrpcServer::new();
        let pubsub = GrpcServerPubSub::new(server.routes());
        pubsub
            .subscribe(
                "pubsub",
                "orders",
                TopicHandler::new(|_| async {
                    if true {
                        panic!("handler blew up");
                    }
                    Ok(())
                }),
                None,
            )
            .await
            .unwrap();

        let response = server
            .app_callback()
            .on_topic_event(topic_event("pubsub", "orders", Value::Null))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.status, TopicEventResponseStatus::Success as i32);
    }

    #[tokio::test]
    async fn test_binding_event_round_trip_and_failure() {
        let server = GrpcServer::new();
        let binding = GrpcServerBinding::new(server.routes());
        binding
            .receive(
                "cron",
                BindingHandler::new(|data: Value| async move {
                    if data.is_null() {
                        anyhow::bail!("empty event");
                    }
                    Ok(json!({ "ok": true }))
                }),
            )
            .await
            .unwrap();
        let service = server.app_callback();

        let bindings = service
            .list_input_bindings(Request::new(()))
            .await
            .unwrap()
            .into_inner()
            .bindings;
        assert_eq!(bindings, vec!["cron".to_string()]);

        let response = service
            .on_binding_event(Request::new(BindingEventRequest {
                name: "cron".to_string(),
                data: b"{}".to_vec(),
                metadata: HashMap::new(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(decode_payload(&response.data), json!({ "ok": true }));

        let status = service
            .on_binding_event(Request::new(BindingEventRequest {
                name: "cron".to_string(),
                ..BindingEventRequest::default()
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::Internal);
    }

    #[derive(Default)]
    struct Counter {
        count: i64,
    }

    #[async_trait]
    impl Actor for Counter {
        async fn invoke(&mut self, method: &str, args: Value) -> Result<Value, ActorError> {
            match method {
                "count" => {
                    self.count += 1;
                    Ok(Value::Null)
                }
                "countBy" => {
                    self.count += decode_args::<i64>(method, args)?;
                    Ok(Value::Null)
                }
                "getCounter" => encode_result(self.count),
                other => Err(ActorError::MethodNotFound(other.to_string())),
            }
        }
    }

    fn actor_call(actor_type: &str, method: &str, data: Value) -> Request<InvokeActorRequest> {
        Request::new(InvokeActorRequest {
            actor_type: actor_type.to_string(),
            actor_id: "a1".to_string(),
            method: method.to_string(),
            data: encode_payload(&data),
            metadata: HashMap::new(),
        })
    }

    #[tokio::test]
    async fn test_actor_callbacks() {
        let server = GrpcServer::new();
        let runtime = Arc::new(ActorRuntime::new(
            ActorRuntimeConfig::default(),
            Arc::new(RecordingClient::returning(Value::Null)),
        ));
        let actor = GrpcServerActor::new(server.routes(), runtime);
        actor
            .register(ActorRegistration::new("Counter", |_ctx| Counter::default()))
            .await
            .unwrap();
        actor.init().await.unwrap();
        let service = server.actor_callback();

        let registered = service
            .get_registered_actors(Request::new(()))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(registered.entities, vec!["Counter".to_string()]);
        assert_eq!(registered.actor_idle_timeout, "1h");

        for _ in 0..3 {
            service
                .invoke_actor_method(actor_call("Counter", "count", Value::Null))
                .await
                .unwrap();
        }
        service
            .invoke_actor_timer(Request::new(InvokeActorTimerRequest {
                actor_type: "Counter".to_string(),
                actor_id: "a1".to_string(),
                name: "tick".to_string(),
                callback: "countBy".to_string(),
                data: b"5".to_vec(),
                ..InvokeActorTimerRequest::default()
            }))
            .await
            .unwrap();

        let response = service
            .invoke_actor_method(actor_call("Counter", "getCounter", Value::Null))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(decode_payload(&response.data), json!(8));

        service
            .deactivate_actor(Request::new(DeactivateActorRequest {
                actor_type: "Counter".to_string(),
                actor_id: "a1".to_string(),
            }))
            .await
            .unwrap();
        let response = service
            .invoke_actor_method(actor_call("Counter", "getCounter", Value::Null))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(decode_payload(&response.data), json!(0));

        let status = service
            .invoke_actor_method(actor_call("Ghost", "count", Value::Null))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);

        let status = service
            .invoke_actor_method(actor_call("Counter", "countBy", json!("x")))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
    }
}
