use std::sync::Arc;

use tracing::info;

use crate::actors::ActorProxyFactory;
use crate::capability::grpc::{
    GrpcClientActor, GrpcClientBinding, GrpcClientInvoker, GrpcClientPubSub, GrpcClientSecret,
};
use crate::capability::http::{
    HttpClientActor, HttpClientBinding, HttpClientInvoker, HttpClientPubSub, HttpClientSecret,
};
use crate::capability::{ClientActor, ClientBinding, ClientInvoker, ClientPubSub, ClientSecret};
use crate::config::{ClientSettings, CommunicationProtocol};
use crate::error::DaprError;
use crate::transport::grpc::GrpcClient;
use crate::transport::http::HttpClient;

/// Client-side composition root: one capability set bound to one protocol.
///
/// Cheap to clone; clones share the underlying connection.
#[derive(Clone)]
pub struct DaprClient {
    settings: Arc<ClientSettings>,
    pubsub: Arc<dyn ClientPubSub>,
    binding: Arc<dyn ClientBinding>,
    invoker: Arc<dyn ClientInvoker>,
    secret: Arc<dyn ClientSecret>,
    actor: Arc<dyn ClientActor>,
}

impl DaprClient {
    /// Build the capability set for `settings.protocol`. No network traffic
    /// happens here; gRPC channels connect on first use.
    pub fn new(settings: ClientSettings) -> Result<Self, DaprError> {
        let settings = Arc::new(settings);

        let client = match settings.protocol {
            CommunicationProtocol::Http => {
                let transport = HttpClient::new(&settings)?;
                Self {
                    pubsub: Arc::new(HttpClientPubSub::new(transport.clone())),
                    binding: Arc::new(HttpClientBinding::new(transport.clone())),
                    invoker: Arc::new(HttpClientInvoker::new(transport.clone())),
                    secret: Arc::new(HttpClientSecret::new(transport.clone())),
                    actor: Arc::new(HttpClientActor::new(transport)),
                    settings: settings.clone(),
                }
            }
            CommunicationProtocol::Grpc => {
                let transport = GrpcClient::new(&settings)?;
                Self {
                    pubsub: Arc::new(GrpcClientPubSub::new(transport.clone())),
                    binding: Arc::new(GrpcClientBinding::new(transport.clone())),
                    invoker: Arc::new(GrpcClientInvoker::new(transport.clone())),
                    secret: Arc::new(GrpcClientSecret::new(transport.clone())),
                    actor: Arc::new(GrpcClientActor::new(transport)),
                    settings: settings.clone(),
                }
            }
        };

        info!(
            protocol = %settings.protocol,
            sidecar = %settings.sidecar_url(),
            "Dapr client created"
        );
        Ok(client)
    }

    pub fn from_env() -> Result<Self, DaprError> {
        Self::new(ClientSettings::from_env()?)
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    pub fn pubsub(&self) -> Arc<dyn ClientPubSub> {
        self.pubsub.clone()
    }

    pub fn binding(&self) -> Arc<dyn ClientBinding> {
        self.binding.clone()
    }

    pub fn invoker(&self) -> Arc<dyn ClientInvoker> {
        self.invoker.clone()
    }

    pub fn secret(&self) -> Arc<dyn ClientSecret> {
        self.secret.clone()
    }

    pub fn actor(&self) -> Arc<dyn ClientActor> {
        self.actor.clone()
    }

    pub fn actor_proxy_factory(&self) -> ActorProxyFactory {
        ActorProxyFactory::new(self.actor.clone())
    }
}
