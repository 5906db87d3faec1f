use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::actors::{ActorRuntime, ActorRuntimeConfig};
use crate::capability::grpc::{
    GrpcServerActor, GrpcServerBinding, GrpcServerInvoker, GrpcServerPubSub,
};
use crate::capability::http::{
    HttpServerActor, HttpServerBinding, HttpServerInvoker, HttpServerPubSub,
};
use crate::capability::{ServerActor, ServerBinding, ServerInvoker, ServerPubSub};
use crate::client::DaprClient;
use crate::config::{CommunicationProtocol, ServerSettings};
use crate::error::DaprError;
use crate::transport::grpc::GrpcServer;
use crate::transport::http::HttpServer;
use crate::transport::TransportServer;

/// Server-side composition root.
///
/// Owns the application listener, the server capability set and a
/// [`DaprClient`] for outbound calls. Register subscriptions, listeners and
/// actor types first, then call [`DaprServer::start`].
pub struct DaprServer {
    settings: Arc<ServerSettings>,
    client: DaprClient,
    runtime: Arc<ActorRuntime>,
    transport: Arc<dyn TransportServer>,
    pubsub: Arc<dyn ServerPubSub>,
    binding: Arc<dyn ServerBinding>,
    invoker: Arc<dyn ServerInvoker>,
    actor: Arc<dyn ServerActor>,
}

impl DaprServer {
    pub fn new(settings: ServerSettings) -> Result<Self, DaprError> {
        Self::with_actor_config(settings, ActorRuntimeConfig::default())
    }

    pub fn from_env() -> Result<Self, DaprError> {
        Self::new(ServerSettings::from_env()?)
    }

    pub fn with_actor_config(
        settings: ServerSettings,
        actor_config: ActorRuntimeConfig,
    ) -> Result<Self, DaprError> {
        let settings = Arc::new(settings);
        let client = DaprClient::new(settings.client_settings())?;
        let runtime = Arc::new(ActorRuntime::new(actor_config, client.actor()));

        let server = match settings.protocol {
            CommunicationProtocol::Http => {
                let transport = Arc::new(HttpServer::new());
                let routes = transport.routes();
                Self {
                    pubsub: Arc::new(HttpServerPubSub::new(routes.clone())),
                    binding: Arc::new(HttpServerBinding::new(routes.clone())),
                    invoker: Arc::new(HttpServerInvoker::new(routes)),
                    actor: Arc::new(HttpServerActor::new(transport.clone(), runtime.clone())),
                    transport,
                    runtime,
                    client,
                    settings: settings.clone(),
                }
            }
            CommunicationProtocol::Grpc => {
                let transport = Arc::new(GrpcServer::new());
                let routes = transport.routes();
                Self {
                    pubsub: Arc::new(GrpcServerPubSub::new(routes.clone())),
                    binding: Arc::new(GrpcServerBinding::new(routes.clone())),
                    invoker: Arc::new(GrpcServerInvoker::new(routes.clone())),
                    actor: Arc::new(GrpcServerActor::new(routes, runtime.clone())),
                    transport,
                    runtime,
                    client,
                    settings: settings.clone(),
                }
            }
        };

        info!(
            protocol = %settings.protocol,
            host = %settings.server_host,
            port = settings.server_port,
            "Dapr server created"
        );
        Ok(server)
    }

    /// Mount the actor endpoints, close actor registration and bind the
    /// listener. Returns the bound address.
    pub async fn start(&self) -> Result<SocketAddr, DaprError> {
        self.actor.init().await?;
        self.runtime.seal().await;

        let addr = self
            .transport
            .start(&self.settings.server_host, self.settings.server_port)
            .await?;
        info!(addr = %addr, protocol = %self.transport.protocol(), "Dapr server started");
        Ok(addr)
    }

    pub async fn stop(&self) {
        self.transport.stop().await;
    }

    /// Bound address while running.
    pub async fn local_addr(&self) -> Option<SocketAddr> {
        self.transport.local_addr().await
    }

    pub fn settings(&self) -> &ServerSettings {
        &self.settings
    }

    pub fn client(&self) -> &DaprClient {
        &self.client
    }

    pub fn pubsub(&self) -> Arc<dyn ServerPubSub> {
        self.pubsub.clone()
    }

    pub fn binding(&self) -> Arc<dyn ServerBinding> {
        self.binding.clone()
    }

    pub fn invoker(&self) -> Arc<dyn ServerInvoker> {
        self.invoker.clone()
    }

    pub fn actor(&self) -> Arc<dyn ServerActor> {
        self.actor.clone()
    }

    pub fn actor_runtime(&self) -> Arc<ActorRuntime> {
        self.runtime.clone()
    }
}
