use std::collections::HashMap;

use async_trait::async_trait;
use dapr_proto::runtime::v1::{GetBulkSecretRequest, GetSecretRequest};

use crate::capability::ClientSecret;
use crate::error::DaprError;
use crate::transport::grpc::GrpcClient;

pub struct GrpcClientSecret {
    client: GrpcClient,
}

impl GrpcClientSecret {
    pub fn new(client: GrpcClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClientSecret for GrpcClientSecret {
    async fn get(
        &self,
        store: &str,
        key: &str,
        metadata: HashMap<String, String>,
    ) -> Result<HashMap<String, String>, DaprError> {
        let request = GetSecretRequest {
            store_name: store.to_string(),
            key: key.to_string(),
            metadata,
        };
        let response = self.client.client().get_secret(request).await?;
        Ok(response.into_inner().data)
    }

    async fn get_bulk(
        &self,
        store: &str,
    ) -> Result<HashMap<String, HashMap<String, String>>, DaprError> {
        let request = GetBulkSecretRequest {
            store_name: store.to_string(),
            metadata: HashMap::new(),
        };
        let response = self.client.client().get_bulk_secret(request).await?;
        Ok(response
            .into_inner()
            .data
            .into_iter()
            .map(|(name, secret)| (name, secret.secrets))
            .collect())
    }
}
