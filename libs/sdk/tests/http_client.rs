use std::collections::HashMap;

use dapr_sdk::actors::ActorId;
use dapr_sdk::{ClientSettings, CommunicationProtocol, DaprClient, DaprError, HttpMethod};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(sidecar: &MockServer) -> DaprClient {
    let addr = sidecar.address();
    let settings = ClientSettings::new(
        addr.ip().to_string(),
        &addr.port().to_string(),
        CommunicationProtocol::Http,
    )
    .unwrap();
    DaprClient::new(settings).unwrap()
}

#[tokio::test]
async fn invoke_round_trip() {
    let sidecar = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1.0/invoke/orders/method/create"))
        .and(body_json(json!({ "sku": "A-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orderId": 42 })))
        .expect(1)
        .mount(&sidecar)
        .await;

    let client = client_for(&sidecar);
    let result = client
        .invoker()
        .invoke("orders", "create", HttpMethod::Post, Some(&json!({ "sku": "A-1" })))
        .await
        .unwrap();

    assert_eq!(result, json!({ "orderId": 42 }));
}

#[tokio::test]
async fn sidecar_failures_are_remote_errors() {
    let sidecar = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/invoke/orders/method/missing"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errorCode": "ERR_DIRECT_INVOKE",
            "message": "app returned 404",
        })))
        .mount(&sidecar)
        .await;

    let client = client_for(&sidecar);
    let err = client
        .invoker()
        .invoke("orders", "missing", HttpMethod::Get, None)
        .await
        .unwrap_err();

    assert!(err.is_remote());
    assert!(!err.is_retryable());
    match err {
        DaprError::Remote { status, code, message } => {
            assert_eq!(status, Some(500));
            assert_eq!(code, "ERR_DIRECT_INVOKE");
            assert_eq!(message, "app returned 404");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn publish_binding_and_secrets() {
    let sidecar = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1.0/publish/pubsub/orders"))
        .and(body_json(json!({ "orderId": 7 })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&sidecar)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/bindings/queue"))
        .and(body_json(json!({
            "data": "hello",
            "metadata": { "ttl": "60" },
            "operation": "create",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accepted": true })))
        .mount(&sidecar)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/secrets/vault/db"))
        .and(query_param("metadata.version", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "password": "s3cret" })))
        .mount(&sidecar)
        .await;

    let client = client_for(&sidecar);

    client
        .pubsub()
        .publish("pubsub", "orders", &json!({ "orderId": 7 }))
        .await
        .unwrap();

    let metadata = HashMap::from([("ttl".to_string(), "60".to_string())]);
    let response = client
        .binding()
        .send("queue", "create", &json!("hello"), metadata)
        .await
        .unwrap();
    assert_eq!(response, json!({ "accepted": true }));

    let metadata = HashMap::from([("version".to_string(), "2".to_string())]);
    let secret = client.secret().get("vault", "db", metadata).await.unwrap();
    assert_eq!(secret.get("password").map(String::as_str), Some("s3cret"));
}

#[tokio::test]
async fn actor_proxy_calls_through_sidecar() {
    let sidecar = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1.0/actors/DemoActor/a1/method/countBy"))
        .and(body_json(json!(5)))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&sidecar)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1.0/actors/DemoActor/a1/method/getCounter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(8)))
        .mount(&sidecar)
        .await;

    let client = client_for(&sidecar);
    let proxy = client
        .actor_proxy_factory()
        .create("DemoActor", ActorId::from("a1"));

    proxy.invoke::<_, ()>("countBy", &5).await.unwrap();
    let count: i64 = proxy.invoke("getCounter", &()).await.unwrap();
    assert_eq!(count, 8);
}

#[tokio::test]
async fn actor_ids_stay_one_path_segment() {
    let sidecar = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1.0/actors/DemoActor/user%231/method/getCounter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(1)))
        .expect(1)
        .mount(&sidecar)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1.0/actors/DemoActor/tenant%2F7/method/getCounter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(7)))
        .expect(1)
        .mount(&sidecar)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/publish/pubsub/orders%3Feu"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&sidecar)
        .await;

    let client = client_for(&sidecar);
    let factory = client.actor_proxy_factory();

    let hashed = factory.create("DemoActor", ActorId::from("user#1"));
    let count: i64 = hashed.invoke("getCounter", &()).await.unwrap();
    assert_eq!(count, 1);

    let slashed = factory.create("DemoActor", ActorId::from("tenant/7"));
    let count: i64 = slashed.invoke("getCounter", &()).await.unwrap();
    assert_eq!(count, 7);

    client
        .pubsub()
        .publish("pubsub", "orders?eu", &json!({}))
        .await
        .unwrap();
}
