use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dapr_proto::runtime::v1::{BindingEventRequest, BindingEventResponse, InvokeBindingRequest};
use futures_util::FutureExt;
use serde_json::Value;
use tonic::Status;
use tracing::{info, warn};

use crate::capability::{ClientBinding, ServerBinding};
use crate::error::DaprError;
use crate::handler::BindingHandler;
use crate::transport::grpc::{BindingEventFn, GrpcClient, GrpcRoutes};
use crate::types::{decode_payload, encode_payload};

pub struct GrpcServerBinding {
    routes: Arc<GrpcRoutes>,
}

impl GrpcServerBinding {
    pub fn new(routes: Arc<GrpcRoutes>) -> Self {
        Self { routes }
    }
}

#[async_trait]
impl ServerBinding for GrpcServerBinding {
    async fn receive(&self, binding: &str, handler: BindingHandler) -> Result<(), DaprError> {
        let event: BindingEventFn = Arc::new(move |req: BindingEventRequest| {
            let handler = handler.clone();
            async move {
                match handler.call(decode_payload(&req.data)).await {
                    Ok(value) => Ok(BindingEventResponse {
                        data: encode_payload(&value),
                        to: Vec::new(),
                    }),
                    Err(failure) => {
                        warn!(binding = %req.name, error = %failure, "Binding handler failed");
                        Err(Status::internal(failure.to_string()))
                    }
                }
            }
            .boxed()
        });

        self.routes.register_binding(binding, event).await;
        info!(binding, "Receiving input binding");
        Ok(())
    }
}

pub struct GrpcClientBinding {
    client: GrpcClient,
}

impl GrpcClientBinding {
    pub fn new(client: GrpcClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClientBinding for GrpcClientBinding {
    async fn send(
        &self,
        binding: &str,
        operation: &str,
        data: &Value,
        metadata: HashMap<String, String>,
    ) -> Result<Value, DaprError> {
        let request = InvokeBindingRequest {
            name: binding.to_string(),
            data: encode_payload(data),
            metadata,
            operation: operation.to_string(),
        };
        let response = self.client.client().invoke_binding(request).await?;
        Ok(decode_payload(&response.into_inner().data))
    }
}
