use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dapr_proto::common::v1::{http_extension::Verb, HttpExtension, InvokeRequest, InvokeResponse};
use dapr_proto::runtime::v1::InvokeServiceRequest;
use futures_util::FutureExt;
use serde_json::Value;
use tonic::Status;
use tracing::{info, warn};

use super::{from_any, to_any, JSON_CONTENT_TYPE};
use crate::capability::{ClientInvoker, ServerInvoker};
use crate::error::DaprError;
use crate::handler::{InvocationRequest, InvokeHandler};
use crate::transport::grpc::{GrpcClient, GrpcRoutes, InvokeFn};
use crate::types::HttpMethod;

fn parse_query(querystring: &str) -> HashMap<String, String> {
    if querystring.is_empty() {
        return HashMap::new();
    }
    reqwest::Url::parse(&format!("http://localhost/?{}", querystring.trim_start_matches('?')))
        .map(|url| url.query_pairs().into_owned().collect())
        .unwrap_or_default()
}

pub struct GrpcServerInvoker {
    routes: Arc<GrpcRoutes>,
}

impl GrpcServerInvoker {
    pub fn new(routes: Arc<GrpcRoutes>) -> Self {
        Self { routes }
    }
}

#[async_trait]
impl ServerInvoker for GrpcServerInvoker {
    async fn listen(
        &self,
        method: &str,
        handler: InvokeHandler,
        http_method: HttpMethod,
    ) -> Result<(), DaprError> {
        let invocation: InvokeFn = Arc::new(move |req: InvokeRequest| {
            let handler = handler.clone();
            async move {
                let extension = req.http_extension.unwrap_or_default();
                let verb = Verb::try_from(extension.verb)
                    .ok()
                    .and_then(HttpMethod::from_verb)
                    .unwrap_or(http_method);
                let request = InvocationRequest {
                    method: verb,
                    query: parse_query(&extension.querystring),
                    body: from_any(req.data),
                };

                match handler.call(request).await {
                    Ok(value) => Ok(InvokeResponse {
                        data: Some(to_any(&value)),
                        content_type: JSON_CONTENT_TYPE.to_string(),
                    }),
                    Err(failure) => {
                        warn!(method = %req.method, error = %failure, "Invocation handler failed");
                        Err(Status::internal(failure.to_string()))
                    }
                }
            }
            .boxed()
        });

        self.routes.register_method(method, http_method, invocation).await;
        info!(method, %http_method, "Listening for invocations");
        Ok(())
    }
}

pub struct GrpcClientInvoker {
    client: GrpcClient,
}

impl GrpcClientInvoker {
    pub fn new(client: GrpcClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClientInvoker for GrpcClientInvoker {
    async fn invoke(
        &self,
        app_id: &str,
        method: &str,
        http_method: HttpMethod,
        data: Option<&Value>,
    ) -> Result<Value, DaprError> {
        let request = InvokeServiceRequest {
            id: app_id.to_string(),
            message: Some(InvokeRequest {
                method: method.to_string(),
                data: data.map(to_any),
                content_type: JSON_CONTENT_TYPE.to_string(),
                http_extension: Some(HttpExtension {
                    verb: http_method.to_verb() as i32,
                    querystring: String::new(),
                }),
            }),
        };
        let response = self.client.client().invoke_service(request).await?;
        Ok(from_any(response.into_inner().data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let query = parse_query("a=1&b=two%20words");
        assert_eq!(query.get("a").map(String::as_str), Some("1"));
        assert_eq!(query.get("b").map(String::as_str), Some("two words"));
        assert!(parse_query("").is_empty());
    }
}
