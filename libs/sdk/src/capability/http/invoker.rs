use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use futures_util::FutureExt;
use serde_json::Value;
use tracing::{info, warn};

use crate::capability::{ClientInvoker, ServerInvoker};
use crate::error::DaprError;
use crate::handler::{InvocationRequest, InvokeHandler};
use crate::transport::http::{
    json_response, ApiError, HttpClient, HttpHandler, HttpInbound, HttpRoutes,
};
use crate::types::{decode_payload, HttpMethod};

pub struct HttpServerInvoker {
    routes: Arc<HttpRoutes>,
}

impl HttpServerInvoker {
    pub fn new(routes: Arc<HttpRoutes>) -> Self {
        Self { routes }
    }
}

#[async_trait]
impl ServerInvoker for HttpServerInvoker {
    async fn listen(
        &self,
        method: &str,
        handler: InvokeHandler,
        http_method: HttpMethod,
    ) -> Result<(), DaprError> {
        let name = method.to_string();
        let invocation: HttpHandler = Arc::new(move |inbound: HttpInbound| {
            let handler = handler.clone();
            let name = name.clone();
            async move {
                let request = InvocationRequest {
                    method: inbound.method,
                    query: inbound.query,
                    body: decode_payload(&inbound.body),
                };
                match handler.call(request).await {
                    Ok(value) => json_response(StatusCode::OK, value),
                    Err(failure) => {
                        warn!(method = %name, error = %failure, "Invocation handler failed");
                        ApiError::internal("ERR_INVOKE_HANDLER", failure.to_string())
                            .into_response()
                    }
                }
            }
            .boxed()
        });

        self.routes.register(http_method, method, invocation).await;
        info!(method, %http_method, "Listening for invocations");
        Ok(())
    }
}

pub struct HttpClientInvoker {
    client: HttpClient,
}

impl HttpClientInvoker {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClientInvoker for HttpClientInvoker {
    async fn invoke(
        &self,
        app_id: &str,
        method: &str,
        http_method: HttpMethod,
        data: Option<&Value>,
    ) -> Result<Value, DaprError> {
        self.client
            .execute_json(http_method, &["invoke", app_id, "method", method], data, &[])
            .await
    }
}
