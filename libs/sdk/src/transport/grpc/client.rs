use std::time::Duration;

use dapr_proto::runtime::v1::DaprClient;
use tonic::transport::{Channel, Endpoint};

use crate::config::ClientSettings;
use crate::error::ConfigError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the sidecar's gRPC API.
///
/// The channel connects on first use, so construction never touches the
/// network. Must be created inside a tokio runtime.
#[derive(Debug, Clone)]
pub struct GrpcClient {
    inner: DaprClient<Channel>,
}

impl GrpcClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ConfigError> {
        let address = settings.sidecar_url();
        let endpoint = Endpoint::from_shared(address.clone()).map_err(|e| {
            ConfigError::InvalidSidecarAddress {
                address,
                reason: e.to_string(),
            }
        })?;
        let channel = endpoint.timeout(REQUEST_TIMEOUT).connect_lazy();

        Ok(Self {
            inner: DaprClient::new(channel),
        })
    }

    /// A handle for one call. Clones share the underlying channel.
    pub fn client(&self) -> DaprClient<Channel> {
        self.inner.clone()
    }
}
