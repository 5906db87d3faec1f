use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use futures_util::FutureExt;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::capability::{ClientBinding, ServerBinding};
use crate::error::DaprError;
use crate::handler::BindingHandler;
use crate::transport::http::{
    json_response, ApiError, HttpClient, HttpHandler, HttpInbound, HttpRoutes,
};
use crate::types::{decode_payload, HttpMethod};

pub struct HttpServerBinding {
    routes: Arc<HttpRoutes>,
}

impl HttpServerBinding {
    pub fn new(routes: Arc<HttpRoutes>) -> Self {
        Self { routes }
    }
}

#[async_trait]
impl ServerBinding for HttpServerBinding {
    async fn receive(&self, binding: &str, handler: BindingHandler) -> Result<(), DaprError> {
        let name = binding.to_string();
        let event: HttpHandler = Arc::new(move |inbound: HttpInbound| {
            let handler = handler.clone();
            let name = name.clone();
            async move {
                match handler.call(decode_payload(&inbound.body)).await {
                    Ok(value) => json_response(StatusCode::OK, value),
                    Err(failure) => {
                        warn!(binding = %name, error = %failure, "Binding handler failed");
                        ApiError::internal("ERR_BINDING_HANDLER", failure.to_string())
                            .into_response()
                    }
                }
            }
            .boxed()
        });

        // The sidecar probes input bindings with OPTIONS before delivering.
        let probe: HttpHandler =
            Arc::new(|_inbound: HttpInbound| async { StatusCode::OK.into_response() }.boxed());

        self.routes.register(HttpMethod::Post, binding, event).await;
        self.routes.register(HttpMethod::Options, binding, probe).await;
        info!(binding, "Receiving input binding");
        Ok(())
    }
}

pub struct HttpClientBinding {
    client: HttpClient,
}

impl HttpClientBinding {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClientBinding for HttpClientBinding {
    async fn send(
        &self,
        binding: &str,
        operation: &str,
        data: &Value,
        metadata: HashMap<String, String>,
    ) -> Result<Value, DaprError> {
        let body = json!({
            "data": data,
            "metadata": metadata,
            "operation": operation,
        });
        self.client
            .execute_json(HttpMethod::Post, &["bindings", binding], Some(&body), &[])
            .await
    }
}
