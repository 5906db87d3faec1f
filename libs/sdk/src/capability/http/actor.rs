use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::{delete, get, put},
    Json, Router,
};
use serde_json::Value;
use tracing::warn;

use crate::actors::{
    ActorCallError, ActorId, ActorRegistration, ActorReminder, ActorRuntime, ActorTimer,
    ReminderCallback, TimerCallback,
};
use crate::capability::{ClientActor, ServerActor};
use crate::error::DaprError;
use crate::transport::http::{json_response, ApiError, HttpClient, HttpServer};
use crate::types::{decode_payload, HttpMethod, RegisteredActors};

impl From<ActorCallError> for ApiError {
    fn from(err: ActorCallError) -> Self {
        match err {
            ActorCallError::Routing(err) => ApiError::from(err),
            err @ ActorCallError::InvalidArguments(_) => {
                ApiError::bad_request(err.error_code(), err.to_string())
            }
            err => ApiError::internal(err.error_code(), err.to_string()),
        }
    }
}

/// Routes the sidecar uses to drive actors hosted by this application.
pub fn actor_router(runtime: Arc<ActorRuntime>) -> Router {
    Router::new()
        .route("/dapr/config", get(registered_actors))
        .route("/actors/{actor_type}/{actor_id}", delete(deactivate))
        .route(
            "/actors/{actor_type}/{actor_id}/method/{method}",
            put(invoke_method).post(invoke_method),
        )
        .route(
            "/actors/{actor_type}/{actor_id}/method/timer/{name}",
            put(fire_timer).post(fire_timer),
        )
        .route(
            "/actors/{actor_type}/{actor_id}/method/remind/{name}",
            put(fire_reminder).post(fire_reminder),
        )
        .with_state(runtime)
}

async fn registered_actors(State(runtime): State<Arc<ActorRuntime>>) -> Json<RegisteredActors> {
    Json(runtime.registered_actors().await)
}

async fn invoke_method(
    State(runtime): State<Arc<ActorRuntime>>,
    Path((actor_type, actor_id, method)): Path<(String, String, String)>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let value = runtime
        .invoke(&actor_type, &ActorId::from(actor_id), &method, decode_payload(&body))
        .await?;
    Ok(json_response(StatusCode::OK, value))
}

async fn fire_timer(
    State(runtime): State<Arc<ActorRuntime>>,
    Path((actor_type, actor_id, name)): Path<(String, String, String)>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let timer: TimerCallback = parse_callback(&body)?;
    runtime
        .fire_timer(&actor_type, &ActorId::from(actor_id), &name, timer)
        .await?;
    Ok(StatusCode::OK)
}

async fn fire_reminder(
    State(runtime): State<Arc<ActorRuntime>>,
    Path((actor_type, actor_id, name)): Path<(String, String, String)>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let reminder: ReminderCallback = parse_callback(&body)?;
    runtime
        .fire_reminder(&actor_type, &ActorId::from(actor_id), &name, reminder.data)
        .await?;
    Ok(StatusCode::OK)
}

async fn deactivate(
    State(runtime): State<Arc<ActorRuntime>>,
    Path((actor_type, actor_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    runtime.deactivate(&actor_type, &ActorId::from(actor_id)).await?;
    Ok(StatusCode::OK)
}

fn parse_callback<T: serde::de::DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
    if body.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "Malformed actor callback body");
        ApiError::bad_request("ERR_MALFORMED_REQUEST", e.to_string())
    })
}

/// Server actor capability over HTTP.
pub struct HttpServerActor {
    server: Arc<HttpServer>,
    runtime: Arc<ActorRuntime>,
    mounted: AtomicBool,
}

impl HttpServerActor {
    pub fn new(server: Arc<HttpServer>, runtime: Arc<ActorRuntime>) -> Self {
        Self {
            server,
            runtime,
            mounted: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl ServerActor for HttpServerActor {
    async fn init(&self) -> Result<(), DaprError> {
        if !self.mounted.swap(true, Ordering::SeqCst) {
            self.server
                .merge_router(actor_router(self.runtime.clone()))
                .await;
        }
        Ok(())
    }

    async fn register(&self, registration: ActorRegistration) -> Result<(), DaprError> {
        Ok(self.runtime.register(registration).await?)
    }

    async fn registered_actors(&self) -> RegisteredActors {
        self.runtime.registered_actors().await
    }
}

/// Client actor capability over HTTP.
pub struct HttpClientActor {
    client: HttpClient,
}

impl HttpClientActor {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClientActor for HttpClientActor {
    async fn invoke(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        method: &str,
        data: Option<&Value>,
    ) -> Result<Value, DaprError> {
        let segments = ["actors", actor_type, actor_id.as_str(), "method", method];
        self.client
            .execute_json(HttpMethod::Put, &segments, data, &[])
            .await
    }

    async fn register_timer(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        timer: &ActorTimer,
    ) -> Result<(), DaprError> {
        let segments = ["actors", actor_type, actor_id.as_str(), "timers", timer.name.as_str()];
        self.client
            .execute(HttpMethod::Post, &segments, Some(&timer.http_body()), &[])
            .await?;
        Ok(())
    }

    async fn unregister_timer(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        name: &str,
    ) -> Result<(), DaprError> {
        let segments = ["actors", actor_type, actor_id.as_str(), "timers", name];
        self.client.execute(HttpMethod::Delete, &segments, None, &[]).await?;
        Ok(())
    }

    async fn register_reminder(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        reminder: &ActorReminder,
    ) -> Result<(), DaprError> {
        let segments = [
            "actors",
            actor_type,
            actor_id.as_str(),
            "reminders",
            reminder.name.as_str(),
        ];
        self.client
            .execute(HttpMethod::Post, &segments, Some(&reminder.http_body()), &[])
            .await?;
        Ok(())
    }

    async fn unregister_reminder(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        name: &str,
    ) -> Result<(), DaprError> {
        let segments = ["actors", actor_type, actor_id.as_str(), "reminders", name];
        self.client.execute(HttpMethod::Delete, &segments, None, &[]).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::{decode_args, encode_result, Actor, ActorError, ActorRuntimeConfig};
    use crate::actors::test_support::RecordingClient;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::json;
    use tower::ServiceExt;

    #[derive(Default)]
    struct Counter {
        count: i64,
    }

    #[async_trait]
    impl Actor for Counter {
        async fn invoke(&mut self, method: &str, args: Value) -> Result<Value, ActorError> {
            match method {
                "countBy" => {
                    self.count += decode_args::<i64>(method, args)?;
                    Ok(Value::Null)
                }
                "getCounter" => encode_result(self.count),
                other => Err(ActorError::MethodNotFound(other.to_string())),
            }
        }
    }

    async fn router() -> Router {
        let runtime = Arc::new(ActorRuntime::new(
            ActorRuntimeConfig::default(),
            Arc::new(RecordingClient::returning(Value::Null)),
        ));
        runtime
            .register(ActorRegistration::new("Counter", |_ctx| Counter::default()))
            .await
            .unwrap();
        actor_router(runtime)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, decode_payload(&bytes))
    }

    #[tokio::test]
    async fn test_method_timer_and_deactivation_routes() {
        let app = router().await;

        let (status, _) = send(&app, "PUT", "/actors/Counter/a1/method/countBy", "5").await;
        assert_eq!(status, StatusCode::OK);

        let timer = json!({ "callback": "countBy", "data": 2, "dueTime": "0s", "period": "1s" });
        let uri = "/actors/Counter/a1/method/timer/tick";
        let (status, _) = send(&app, "POST", uri, &timer.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let (status, value) = send(&app, "PUT", "/actors/Counter/a1/method/getCounter", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value, json!(7));

        let (status, _) = send(&app, "DELETE", "/actors/Counter/a1", "").await;
        assert_eq!(status, StatusCode::OK);

        let (_, value) = send(&app, "PUT", "/actors/Counter/a1/method/getCounter", "").await;
        assert_eq!(value, json!(0));
    }

    #[tokio::test]
    async fn test_error_mapping() {
        let app = router().await;

        let (status, body) = send(&app, "PUT", "/actors/Ghost/a1/method/count", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorCode"], "ERR_ACTOR_TYPE_NOT_FOUND");

        let (status, body) = send(&app, "PUT", "/actors/Counter/a1/method/nope", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorCode"], "ERR_ACTOR_METHOD_NOT_FOUND");

        let (status, _) = send(&app, "PUT", "/actors/Counter/a1/method/countBy", "\"five\"").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let uri = "/actors/Counter/a1/method/timer/tick";
        let (status, _) = send(&app, "POST", uri, "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_config_endpoint() {
        let app = router().await;
        let (status, body) = send(&app, "GET", "/dapr/config", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "entities": ["Counter"],
                "actorIdleTimeout": "1h",
                "actorScanInterval": "30s",
                "drainOngoingCallTimeout": "1m",
                "drainRebalancedActors": true,
            })
        );
    }
}
