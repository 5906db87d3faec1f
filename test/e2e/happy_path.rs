//! End-to-end happy path test.
//!
//! A fake sidecar (an axum server speaking the sidecar's HTTP API) sits
//! between an SDK client and the demo application, forwarding calls the way
//! the real sidecar would:
//!
//! 1. Actor calls: proxy → sidecar → app server → `DemoActor`
//! 2. Deactivation: sidecar → app server, then reactivation from scratch
//! 3. Timers: actor registers with the sidecar, sidecar fires them back
//! 4. Pub/sub: publish → sidecar → subscribed route on the app
//! 5. Service invocation: client → sidecar → `echo` listener
//!
//! ## Running
//!
//! ```bash
//! cargo test -p dapr-e2e --test happy_path
//! ```

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, post, put},
    Router,
};
use dapr_demo_actor::config::Config;
use dapr_demo_actor::{DemoActorProxy, ACTOR_TYPE};
use dapr_sdk::actors::ActorId;
use dapr_sdk::{
    ClientSettings, CommunicationProtocol, DaprClient, DaprServer, HttpMethod, ServerSettings,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// A registered timer as the sidecar stores it.
#[derive(Debug, Clone)]
struct StoredTimer {
    actor_type: String,
    actor_id: String,
    name: String,
    body: Value,
}

#[derive(Clone)]
struct Sidecar {
    app_url: Arc<Mutex<Option<String>>>,
    http: reqwest::Client,
    timers: Arc<Mutex<Vec<StoredTimer>>>,
    deliveries: Arc<Mutex<Vec<Value>>>,
}

type SidecarResult = Result<Response, (StatusCode, String)>;

impl Sidecar {
    fn new() -> Self {
        Self {
            app_url: Arc::new(Mutex::new(None)),
            http: reqwest::Client::new(),
            timers: Arc::new(Mutex::new(Vec::new())),
            deliveries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn app_url(&self, path: &str) -> Result<String, (StatusCode, String)> {
        let base = self.app_url.lock().unwrap().clone().ok_or((
            StatusCode::SERVICE_UNAVAILABLE,
            "app not attached".to_string(),
        ))?;
        Ok(format!("{base}/{}", path.trim_start_matches('/')))
    }

    /// Call the application and relay its answer.
    async fn forward(&self, method: Method, path: &str, body: Bytes) -> SidecarResult {
        let mut request = self.http.request(method, self.app_url(path)?);
        if !body.is_empty() {
            request = request
                .header("content-type", "application/json")
                .body(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;
        Ok((status, bytes).into_response())
    }

    /// Drive the app's deactivation endpoint, as the sidecar does for idle
    /// actors.
    async fn deactivate(&self, actor_type: &str, actor_id: &str) -> StatusCode {
        let response = self
            .forward(Method::DELETE, &format!("actors/{actor_type}/{actor_id}"), Bytes::new())
            .await
            .unwrap();
        response.status()
    }

    /// Fire every registered timer once.
    async fn fire_timers(&self) {
        let timers = self.timers.lock().unwrap().clone();
        for timer in timers {
            let path = format!(
                "actors/{}/{}/method/timer/{}",
                timer.actor_type, timer.actor_id, timer.name
            );
            let response = self
                .forward(Method::PUT, &path, Bytes::from(timer.body.to_string()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "timer {} failed", timer.name);
        }
    }

    fn router(&self) -> Router {
        Router::new()
            .route(
                "/v1.0/actors/{actor_type}/{actor_id}/method/{method}",
                put(invoke_actor),
            )
            .route(
                "/v1.0/actors/{actor_type}/{actor_id}/timers/{name}",
                post(register_timer).delete(unregister_timer),
            )
            .route("/v1.0/publish/{pubsub}/{topic}", post(publish))
            .route("/v1.0/invoke/{app_id}/method/{method}", any(invoke_app))
            .with_state(self.clone())
    }
}

async fn invoke_actor(
    State(sidecar): State<Sidecar>,
    Path((actor_type, actor_id, method)): Path<(String, String, String)>,
    body: Bytes,
) -> SidecarResult {
    sidecar
        .forward(
            Method::PUT,
            &format!("actors/{actor_type}/{actor_id}/method/{method}"),
            body,
        )
        .await
}

async fn register_timer(
    State(sidecar): State<Sidecar>,
    Path((actor_type, actor_id, name)): Path<(String, String, String)>,
    body: Bytes,
) -> StatusCode {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    sidecar.timers.lock().unwrap().push(StoredTimer {
        actor_type,
        actor_id,
        name,
        body,
    });
    StatusCode::NO_CONTENT
}

async fn unregister_timer(
    State(sidecar): State<Sidecar>,
    Path((actor_type, actor_id, name)): Path<(String, String, String)>,
) -> StatusCode {
    sidecar.timers.lock().unwrap().retain(|t| {
        !(t.actor_type == actor_type && t.actor_id == actor_id && t.name == name)
    });
    StatusCode::NO_CONTENT
}

async fn publish(
    State(sidecar): State<Sidecar>,
    Path((pubsub, topic)): Path<(String, String)>,
    body: Bytes,
) -> SidecarResult {
    let subscriptions: Vec<Value> = sidecar
        .http
        .get(sidecar.app_url("dapr/subscribe")?)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?
        .json()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    let route = subscriptions
        .iter()
        .find(|s| s["pubsubname"] == pubsub.as_str() && s["topic"] == topic.as_str())
        .and_then(|s| s["route"].as_str())
        .ok_or((StatusCode::NOT_FOUND, format!("no subscriber for {pubsub}/{topic}")))?
        .to_string();

    let data: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let event = json!({
        "specversion": "1.0",
        "id": "evt-1",
        "source": "e2e",
        "type": "com.dapr.event.sent",
        "pubsubname": pubsub,
        "topic": topic,
        "data": data,
    });

    let ack: Value = sidecar
        .http
        .post(sidecar.app_url(&route)?)
        .json(&event)
        .send()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?
        .json()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;
    sidecar.deliveries.lock().unwrap().push(ack);

    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn invoke_app(
    State(sidecar): State<Sidecar>,
    method: Method,
    Path((_app_id, app_method)): Path<(String, String)>,
    body: Bytes,
) -> SidecarResult {
    sidecar.forward(method, &app_method, body).await
}

async fn spawn_sidecar(sidecar: &Sidecar) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = sidecar.router();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn e2e_actor_pubsub_and_invocation_through_sidecar() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dapr_sdk=debug".into()),
        )
        .with_test_writer()
        .try_init();

    // Sidecar first: the app needs its port.
    let sidecar = Sidecar::new();
    let sidecar_addr = spawn_sidecar(&sidecar).await;
    let sidecar_port = sidecar_addr.port().to_string();

    // App server hosting the demo.
    let settings = ServerSettings::new(
        "127.0.0.1",
        "0",
        "127.0.0.1",
        &sidecar_port,
        CommunicationProtocol::Http,
    )
    .unwrap();
    let server = DaprServer::new(settings).unwrap();
    dapr_demo_actor::configure(&server, &Config::default())
        .await
        .unwrap();
    let app_addr = server.start().await.unwrap();
    *sidecar.app_url.lock().unwrap() = Some(format!("http://{app_addr}"));

    // Client talking to the sidecar.
    let client = DaprClient::new(
        ClientSettings::new("127.0.0.1", &sidecar_port, CommunicationProtocol::Http).unwrap(),
    )
    .unwrap();
    let actor = DemoActorProxy::new(&client.actor_proxy_factory(), ActorId::from("a1"));

    // 1. count x3 + countBy(5) = 8
    for _ in 0..3 {
        actor.count().await.unwrap();
    }
    actor.count_by(5).await.unwrap();
    assert_eq!(actor.get_counter().await.unwrap(), 8);

    // Another identity is independent.
    let other = DemoActorProxy::new(&client.actor_proxy_factory(), ActorId::from("a2"));
    assert_eq!(other.get_counter().await.unwrap(), 0);

    // 2. Deactivation resets state on the next activation.
    assert_eq!(sidecar.deactivate(ACTOR_TYPE, "a1").await, StatusCode::OK);
    assert_eq!(actor.get_counter().await.unwrap(), 0);

    // 3. Timers registered by the actor come back as method calls.
    actor.start_ticking(Duration::from_secs(1)).await.unwrap();
    assert_eq!(sidecar.timers.lock().unwrap().len(), 1);
    sidecar.fire_timers().await;
    sidecar.fire_timers().await;
    assert_eq!(actor.get_counter().await.unwrap(), 2);
    actor.stop_ticking().await.unwrap();
    assert!(sidecar.timers.lock().unwrap().is_empty());

    // 4. Publish reaches the subscribed route and is acknowledged.
    client
        .pubsub()
        .publish("pubsub", "orders", &json!({ "orderId": 42 }))
        .await
        .unwrap();
    assert_eq!(
        sidecar.deliveries.lock().unwrap().clone(),
        vec![json!({ "status": "SUCCESS" })]
    );

    // 5. Service invocation round trip.
    let echoed = client
        .invoker()
        .invoke("demo", "echo", HttpMethod::Post, Some(&json!({ "ping": true })))
        .await
        .unwrap();
    assert_eq!(echoed, json!({ "ping": true }));

    // Unknown actor types surface as remote errors.
    let ghost = client
        .actor_proxy_factory()
        .create("Ghost", ActorId::from("g1"));
    let err = ghost.invoke::<_, Value>("count", &()).await.unwrap_err();
    assert!(err.is_remote(), "unexpected error: {err:?}");

    server.stop().await;
}
