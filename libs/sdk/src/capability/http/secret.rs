use std::collections::HashMap;

use async_trait::async_trait;

use crate::capability::ClientSecret;
use crate::error::DaprError;
use crate::transport::http::HttpClient;
use crate::types::HttpMethod;

pub struct HttpClientSecret {
    client: HttpClient,
}

impl HttpClientSecret {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

/// Secret-store metadata travels as `metadata.<key>` query parameters.
fn metadata_query(metadata: HashMap<String, String>) -> Vec<(String, String)> {
    let mut query: Vec<(String, String)> = metadata
        .into_iter()
        .map(|(key, value)| (format!("metadata.{key}"), value))
        .collect();
    query.sort();
    query
}

#[async_trait]
impl ClientSecret for HttpClientSecret {
    async fn get(
        &self,
        store: &str,
        key: &str,
        metadata: HashMap<String, String>,
    ) -> Result<HashMap<String, String>, DaprError> {
        let body = self
            .client
            .execute(
                HttpMethod::Get,
                &["secrets", store, key],
                None,
                &metadata_query(metadata),
            )
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get_bulk(
        &self,
        store: &str,
    ) -> Result<HashMap<String, HashMap<String, String>>, DaprError> {
        let body = self
            .client
            .execute(HttpMethod::Get, &["secrets", store, "bulk"], None, &[])
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
