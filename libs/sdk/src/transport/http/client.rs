use std::time::Duration;

use bytes::Bytes;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientSettings;
use crate::error::DaprError;
use crate::types::{decode_payload, HttpMethod};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the sidecar's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteErrorBody {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl HttpClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, DaprError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DaprError::transport("failed to build HTTP client", e))?;

        let base_url = Url::parse(&format!("{}/v1.0", settings.sidecar_url()))
            .map_err(|e| DaprError::transport("invalid sidecar address", e))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// The API URL for `segments`. Each segment is percent-encoded, so names
    /// and ids containing `/`, `?` or `#` stay a single path segment.
    pub fn url(&self, segments: &[&str]) -> Result<Url, DaprError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DaprError::Transport {
                message: format!("sidecar address {} cannot carry a path", self.base_url),
                source: None,
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request to the API path made of `segments` and return the raw
    /// body of a 2xx response. Other statuses become [`DaprError::Remote`].
    pub async fn execute(
        &self,
        method: HttpMethod,
        segments: &[&str],
        body: Option<&Value>,
        query: &[(String, String)],
    ) -> Result<Bytes, DaprError> {
        let url = self.url(segments)?;
        debug!(%method, url = %url, "Calling sidecar");

        let mut request = self.client.request(method.to_method(), url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            Ok(bytes)
        } else {
            Err(remote_error(status.as_u16(), &bytes))
        }
    }

    /// Like [`HttpClient::execute`], decoding the body as JSON.
    pub async fn execute_json(
        &self,
        method: HttpMethod,
        segments: &[&str],
        body: Option<&Value>,
        query: &[(String, String)],
    ) -> Result<Value, DaprError> {
        let bytes = self.execute(method, segments, body, query).await?;
        Ok(decode_payload(&bytes))
    }
}

fn remote_error(status: u16, body: &[u8]) -> DaprError {
    match serde_json::from_slice::<RemoteErrorBody>(body) {
        Ok(parsed) => DaprError::remote(
            Some(status),
            parsed.error_code.unwrap_or_else(|| "ERR_UNKNOWN".to_string()),
            parsed.message.unwrap_or_default(),
        ),
        Err(_) => DaprError::remote(
            Some(status),
            "ERR_UNKNOWN",
            String::from_utf8_lossy(body).into_owned(),
        ),
    }
}
