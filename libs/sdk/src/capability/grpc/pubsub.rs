use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dapr_proto::runtime::v1::{
    topic_event_response::TopicEventResponseStatus, PublishEventRequest, TopicEventRequest,
    TopicEventResponse,
};
use futures_util::FutureExt;
use serde_json::Value;
use tracing::{info, warn};

use super::JSON_CONTENT_TYPE;
use crate::capability::{resolve_route, ClientPubSub, ServerPubSub};
use crate::error::DaprError;
use crate::handler::TopicHandler;
use crate::transport::grpc::{GrpcClient, GrpcRoutes, TopicEventFn};
use crate::types::{decode_payload, encode_payload, TopicStatus};

fn to_proto(status: TopicStatus) -> TopicEventResponseStatus {
    match status {
        TopicStatus::Success => TopicEventResponseStatus::Success,
        TopicStatus::Retry => TopicEventResponseStatus::Retry,
        TopicStatus::Drop => TopicEventResponseStatus::Drop,
    }
}

pub struct GrpcServerPubSub {
    routes: Arc<GrpcRoutes>,
}

impl GrpcServerPubSub {
    pub fn new(routes: Arc<GrpcRoutes>) -> Self {
        Self { routes }
    }
}

#[async_trait]
impl ServerPubSub for GrpcServerPubSub {
    async fn subscribe(
        &self,
        pubsub: &str,
        topic: &str,
        handler: TopicHandler,
        route: Option<&str>,
    ) -> Result<String, DaprError> {
        let route = resolve_route(pubsub, topic, route);

        let delivery: TopicEventFn = Arc::new(move |req: TopicEventRequest| {
            let handler = handler.clone();
            async move {
                let status = match handler.call(decode_payload(&req.data)).await {
                    Ok(status) => status,
                    Err(failure) => {
                        warn!(
                            pubsub = %req.pubsub_name,
                            topic = %req.topic,
                            error = %failure,
                            "Topic handler failed, acknowledging"
                        );
                        TopicStatus::Success
                    }
                };
                Ok(TopicEventResponse {
                    status: to_proto(status) as i32,
                })
            }
            .boxed()
        });

        self.routes
            .register_topic(pubsub, topic, &route, delivery)
            .await?;
        info!(pubsub, topic, route = %route, "Subscribed");
        Ok(route)
    }
}

pub struct GrpcClientPubSub {
    client: GrpcClient,
}

impl GrpcClientPubSub {
    pub fn new(client: GrpcClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClientPubSub for GrpcClientPubSub {
    async fn publish(&self, pubsub: &str, topic: &str, data: &Value) -> Result<(), DaprError> {
        let request = PublishEventRequest {
            pubsub_name: pubsub.to_string(),
            topic: topic.to_string(),
            data: encode_payload(data),
            data_content_type: JSON_CONTENT_TYPE.to_string(),
            metadata: HashMap::new(),
        };
        self.client.client().publish_event(request).await?;
        Ok(())
    }
}
