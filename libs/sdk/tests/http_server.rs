
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dapr_sdk::actors::{Actor, ActorError, ActorRegistration};
use dapr_sdk::{
    BindingHandler, ConfigError, DaprError, HttpMethod, InvokeHandler, TopicHandler, TopicStatus,
};
use harness::{app_server, AppHandle};
use reqwest::Method;
use serde_json::{json, Value};

struct Noop;

#[async_trait]
impl Actor for Noop {
    async fn invoke(&mut self, method: &str, _args: Value) -> Result<Value, ActorError> {
        Err(ActorError::MethodNotFound(method.to_string()))
    }
}

fn counting(counter: &Arc<AtomicUsize>) -> TopicHandler {
    let counter = counter.clone();
    TopicHandler::new(move |_| {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    })
}

#[tokio::test]
async fn resubscribing_replaces_handler_and_route() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let server = app_server();
    let pubsub = server.pubsub();
    let route = pubsub
        .subscribe("pubsub", "orders", counting(&first), None)
        .await
        .unwrap();
    assert_eq!(route, "route-pubsub-orders");
    let route = pubsub
        .subscribe("pubsub", "orders", counting(&second), Some("/orders-v2"))
        .await
        .unwrap();
    assert_eq!(route, "orders-v2");
    let app = AppHandle::start(server).await;

    let (status, subscriptions) = app.send(Method::GET, "/dapr/subscribe", None).await;
    assert_eq!(status, 200);
    assert_eq!(
        subscriptions,
        json!([{ "pubsubname": "pubsub", "topic": "orders", "route": "orders-v2" }])
    );

    let event = json!({ "specversion": "1.0", "id": "1", "data": { "orderId": 7 } });
    let (status, body) = app.send(Method::POST, "/orders-v2", Some(event.clone())).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "status": "SUCCESS" }));

    let (status, body) = app.send(Method::POST, "/route-pubsub-orders", Some(event)).await;
    assert_eq!(status, 404);
    assert_eq!(body["errorCode"], "ERR_ROUTE_NOT_FOUND");

    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);

    app.stop().await;
}

#[tokio::test]
async fn subscription_routes_belong_to_one_topic() {
    let a = Arc::new(AtomicUsize::new(0));
    let b = Arc::new(AtomicUsize::new(0));

    let server = app_server();
    let pubsub = server.pubsub();
    pubsub
        .subscribe("pubsub", "a", counting(&a), Some("shared"))
        .await
        .unwrap();
    let err = pubsub
        .subscribe("pubsub", "b", counting(&b), Some("/shared"))
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            DaprError::Config(ConfigError::RouteInUse { ref route, ref topic, .. })
                if route == "shared" && topic == "a"
        ),
        "unexpected error: {err:?}"
    );
    pubsub
        .subscribe("pubsub", "b", counting(&b), Some("b-in"))
        .await
        .unwrap();
    pubsub
        .subscribe("pubsub", "a", counting(&a), Some("a-v2"))
        .await
        .unwrap();
    let app = AppHandle::start(server).await;

    let (_, subscriptions) = app.send(Method::GET, "/dapr/subscribe", None).await;
    assert_eq!(
        subscriptions,
        json!([
            { "pubsubname": "pubsub", "topic": "a", "route": "a-v2" },
            { "pubsubname": "pubsub", "topic": "b", "route": "b-in" },
        ])
    );

    let event = json!({ "specversion": "1.0", "id": "1", "data": {} });
    for route in ["/a-v2", "/b-in"] {
        let (status, body) = app.send(Method::POST, route, Some(event.clone())).await;
        assert_eq!(status, 200, "route {route}");
        assert_eq!(body, json!({ "status": "SUCCESS" }));
    }
    let (status, _) = app.send(Method::POST, "/shared", Some(event)).await;
    assert_eq!(status, 404);

    assert_eq!(a.load(Ordering::SeqCst), 1);
    assert_eq!(b.load(Ordering::SeqCst), 1);

    app.stop().await;
}

#[tokio::test]
async fn failing_topic_handlers_are_acknowledged() {
    let server = app_server();
    let pubsub = server.pubsub();
    pubsub
        .subscribe(
            "pubsub",
            "errors",
            TopicHandler::new(|_| async { Err(anyhow::anyhow!("rejected")) }),
            Some("errors"),
        )
        .await
        .unwrap();
    pubsub
        .subscribe(
            "pubsub",
            "panics",
            TopicHandler::new(|data: Value| async move {
                if data["boom"] == json!(true) {
                    panic!("handler exploded");
                }
                Ok(())
            }),
            Some("panics"),
        )
        .await
        .unwrap();
    pubsub
        .subscribe(
            "pubsub",
            "retries",
            TopicHandler::with_status(|_| async { Ok(TopicStatus::Retry) }),
            Some("retries"),
        )
        .await
        .unwrap();
    let app = AppHandle::start(server).await;

    let (status, body) = app.send(Method::POST, "/errors", Some(json!({ "data": 1 }))).await;
    assert_eq!((status, body), (200, json!({ "status": "SUCCESS" })));

    let (status, body) = app
        .send(Method::POST, "/panics", Some(json!({ "data": { "boom": true } })))
        .await;
    assert_eq!((status, body), (200, json!({ "status": "SUCCESS" })));

    // The server keeps serving after a handler panic.
    let (status, body) = app
        .send(Method::POST, "/panics", Some(json!({ "data": { "boom": false } })))
        .await;
    assert_eq!((status, body), (200, json!({ "status": "SUCCESS" })));

    let (_, body) = app.send(Method::POST, "/retries", Some(json!({}))).await;
    assert_eq!(body, json!({ "status": "RETRY" }));

    app.stop().await;
}

#[tokio::test]
async fn invocation_and_binding_handlers_answer() {
    let server = app_server();
    server
        .invoker()
        .listen(
            "echo",
            InvokeHandler::new(|request| async move {
                Ok(json!({
                    "verb": request.method.as_str(),
                    "query": request.query.get("x").cloned(),
                    "body": request.body,
                }))
            }),
            HttpMethod::Post,
        )
        .await
        .unwrap();
    server
        .invoker()
        .listen(
            "broken",
            InvokeHandler::new(|_| async { Err::<Value, _>(anyhow::anyhow!("nope")) }),
            HttpMethod::Get,
        )
        .await
        .unwrap();
    server
        .binding()
        .receive(
            "queue",
            BindingHandler::new(|data: Value| async move { Ok(json!({ "seen": data })) }),
        )
        .await
        .unwrap();
    let app = AppHandle::start(server).await;

    let (status, body) = app.send(Method::POST, "/echo?x=1", Some(json!({ "n": 2 }))).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "verb": "POST", "query": "1", "body": { "n": 2 } }));

    let (status, _) = app.send(Method::GET, "/echo", None).await;
    assert_eq!(status, 404);

    let (status, body) = app.send(Method::GET, "/broken", None).await;
    assert_eq!(status, 500);
    assert_eq!(body["errorCode"], "ERR_INVOKE_HANDLER");

    let (status, _) = app.send(Method::OPTIONS, "/queue", None).await;
    assert_eq!(status, 200);

    let (status, body) = app.send(Method::POST, "/queue", Some(json!("hello"))).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "seen": "hello" }));

    app.stop().await;
}

#[tokio::test]
async fn actor_endpoints_and_registration_window() {
    let server = app_server();
    server
        .actor()
        .register(ActorRegistration::new("Noop", |_ctx| Noop))
        .await
        .unwrap();
    let app = AppHandle::start(server).await;

    let (status, config) = app.send(Method::GET, "/dapr/config", None).await;
    assert_eq!(status, 200);
    assert_eq!(config["entities"], json!(["Noop"]));
    assert_eq!(config["actorIdleTimeout"], "1h");

    let (status, body) = app
        .send(Method::PUT, "/actors/Ghost/1/method/count", None)
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["errorCode"], "ERR_ACTOR_TYPE_NOT_FOUND");

    let (status, body) = app.send(Method::PUT, "/actors/Noop/1/method/count", None).await;
    assert_eq!(status, 404);
    assert_eq!(body["errorCode"], "ERR_ACTOR_METHOD_NOT_FOUND");

    let err = app
        .server
        .actor()
        .register(ActorRegistration::new("Late", |_ctx| Noop))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DaprError::Config(ConfigError::RegistrationClosed(ref name)) if name == "Late"
    ));

    let (status, health) = app.send(Method::GET, "/healthz", None).await;
    assert_eq!(status, 200);
    assert_eq!(health["status"], "ok");

    app.stop().await;
}
