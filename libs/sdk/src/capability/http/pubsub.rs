use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use futures_util::FutureExt;
use serde_json::Value;
use tracing::{info, warn};

use crate::capability::{resolve_route, ClientPubSub, ServerPubSub};
use crate::error::DaprError;
use crate::handler::TopicHandler;
use crate::transport::http::{json_response, HttpClient, HttpHandler, HttpInbound, HttpRoutes};
use crate::types::{decode_payload, HttpMethod, TopicResponse, TopicStatus};

/// The payload of a CloudEvent delivery, or the whole body for raw
/// deliveries.
fn event_data(body: &[u8]) -> Value {
    match decode_payload(body) {
        Value::Object(mut event) if event.contains_key("data") => {
            event.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

pub struct HttpServerPubSub {
    routes: Arc<HttpRoutes>,
}

impl HttpServerPubSub {
    pub fn new(routes: Arc<HttpRoutes>) -> Self {
        Self { routes }
    }
}

#[async_trait]
impl ServerPubSub for HttpServerPubSub {
    async fn subscribe(
        &self,
        pubsub: &str,
        topic: &str,
        handler: TopicHandler,
        route: Option<&str>,
    ) -> Result<String, DaprError> {
        let route = resolve_route(pubsub, topic, route);

        if let Some(previous) = self
            .routes
            .register_subscription(pubsub, topic, &route)
            .await?
        {
            if previous != route {
                self.routes.unregister(HttpMethod::Post, &previous).await;
            }
        }

        let (pubsub_name, topic_name) = (pubsub.to_string(), topic.to_string());
        let delivery: HttpHandler = Arc::new(move |inbound: HttpInbound| {
            let handler = handler.clone();
            let (pubsub, topic) = (pubsub_name.clone(), topic_name.clone());
            async move {
                let status = match handler.call(event_data(&inbound.body)).await {
                    Ok(status) => status,
                    Err(failure) => {
                        warn!(
                            pubsub = %pubsub,
                            topic = %topic,
                            error = %failure,
                            "Topic handler failed, acknowledging"
                        );
                        TopicStatus::Success
                    }
                };
                json_response(StatusCode::OK, serde_json::json!(TopicResponse { status }))
            }
            .boxed()
        });

        self.routes.register(HttpMethod::Post, &route, delivery).await;
        info!(pubsub, topic, route = %route, "Subscribed");
        Ok(route)
    }
}

pub struct HttpClientPubSub {
    client: HttpClient,
}

impl HttpClientPubSub {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClientPubSub for HttpClientPubSub {
    async fn publish(&self, pubsub: &str, topic: &str, data: &Value) -> Result<(), DaprError> {
        self.client
            .execute(HttpMethod::Post, &["publish", pubsub, topic], Some(data), &[])
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_data_unwraps_cloud_events() {
        let body = json!({ "id": "1", "specversion": "1.0", "data": { "n": 1 } }).to_string();
        assert_eq!(event_data(body.as_bytes()), json!({ "n": 1 }));
        assert_eq!(event_data(br#"{"n":2}"#), json!({ "n": 2 }));
        assert_eq!(event_data(b""), Value::Null);
    }
}
