use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use dapr_proto::common::v1::{http_extension::Verb, InvokeRequest, InvokeResponse};
use dapr_proto::runtime::v1::{
    ActorCallback, ActorCallbackServer, AppCallback, AppCallbackServer, BindingEventRequest,
    BindingEventResponse, DeactivateActorRequest, GetRegisteredActorsResponse,
    InvokeActorReminderRequest, InvokeActorRequest, InvokeActorResponse, InvokeActorTimerRequest,
    ListInputBindingsResponse, ListTopicSubscriptionsResponse, TopicEventRequest,
    TopicEventResponse, TopicRoutes, TopicSubscription,
};
use futures_util::future::BoxFuture;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex, RwLock};
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Request, Response, Status};
use tracing::{debug, error, info};

use crate::config::CommunicationProtocol;
use crate::error::{ConfigError, DaprError, RoutingError};
use crate::transport::{wait_for_shutdown, ServerHandle, TransportServer};
use crate::types::HttpMethod;

pub type InvokeFn =
    Arc<dyn Fn(InvokeRequest) -> BoxFuture<'static, Result<InvokeResponse, Status>> + Send + Sync>;

pub type TopicEventFn = Arc<
    dyn Fn(TopicEventRequest) -> BoxFuture<'static, Result<TopicEventResponse, Status>>
        + Send
        + Sync,
>;

pub type BindingEventFn = Arc<
    dyn Fn(BindingEventRequest) -> BoxFuture<'static, Result<BindingEventResponse, Status>>
        + Send
        + Sync,
>;

pub(crate) fn routing_status(err: RoutingError) -> Status {
    Status::not_found(err.to_string())
}

struct TopicRoute {
    route: String,
    handler: TopicEventFn,
}

/// Callback tables filled in by the capability modules.
#[derive(Default)]
pub struct GrpcRoutes {
    methods: RwLock<HashMap<String, BTreeMap<HttpMethod, InvokeFn>>>,
    topics: RwLock<BTreeMap<(String, String), TopicRoute>>,
    bindings: RwLock<BTreeMap<String, BindingEventFn>>,
    actors: RwLock<Option<Arc<dyn ActorCallback>>>,
}

impl GrpcRoutes {
    pub async fn register_method(&self, method: &str, verb: HttpMethod, handler: InvokeFn) {
        debug!(method, %verb, "Registering gRPC invocation handler");
        self.methods
            .write()
            .await
            .entry(method.to_string())
            .or_default()
            .insert(verb, handler);
    }

    /// Bind a topic handler, replacing any previous one for the pair. Returns
    /// the route that was replaced. A route delivers exactly one pair.
    pub async fn register_topic(
        &self,
        pubsub: &str,
        topic: &str,
        route: &str,
        handler: TopicEventFn,
    ) -> Result<Option<String>, ConfigError> {
        let key = (pubsub.to_string(), topic.to_string());
        let mut topics = self.topics.write().await;

        if let Some(((owner_pubsub, owner_topic), _)) = topics
            .iter()
            .find(|(owner, existing)| **owner != key && existing.route == route)
        {
            return Err(ConfigError::RouteInUse {
                route: route.to_string(),
                pubsub: owner_pubsub.clone(),
                topic: owner_topic.clone(),
            });
        }

        let previous = topics.insert(
            key,
            TopicRoute {
                route: route.to_string(),
                handler,
            },
        );
        Ok(previous.map(|previous| previous.route))
    }

    pub async fn register_binding(&self, name: &str, handler: BindingEventFn) {
        self.bindings.write().await.insert(name.to_string(), handler);
    }

    pub async fn set_actor_callbacks(&self, callbacks: Arc<dyn ActorCallback>) {
        *self.actors.write().await = Some(callbacks);
    }

    /// Pick the handler for `method`. A request without a verb matches any
    /// handler bound to the name.
    async fn method(&self, method: &str, verb: Option<HttpMethod>) -> Option<InvokeFn> {
        let methods = self.methods.read().await;
        let by_verb = methods.get(method)?;
        match verb {
            Some(verb) => by_verb.get(&verb).cloned(),
            None => by_verb.values().next().cloned(),
        }
    }

    async fn actors(&self) -> Result<Arc<dyn ActorCallback>, Status> {
        self.actors
            .read()
            .await
            .clone()
            .ok_or_else(|| routing_status(RoutingError::ActorsNotInitialized))
    }
}

struct AppCallbackService {
    routes: Arc<GrpcRoutes>,
}

#[tonic::async_trait]
impl AppCallback for AppCallbackService {
    async fn on_invoke(
        &self,
        request: Request<InvokeRequest>,
    ) -> Result<Response<InvokeResponse>, Status> {
        let req = request.into_inner();
        let verb = req
            .http_extension
            .as_ref()
            .and_then(|ext| Verb::try_from(ext.verb).ok())
            .and_then(HttpMethod::from_verb);

        let handler = self.routes.method(&req.method, verb).await.ok_or_else(|| {
            routing_status(RoutingError::RouteNotFound(req.method.clone()))
        })?;
        handler(req).await.map(Response::new)
    }

    async fn list_topic_subscriptions(
        &self,
        _request: Request<()>,
    ) -> Result<Response<ListTopicSubscriptionsResponse>, Status> {
        let subscriptions = self
            .routes
            .topics
            .read()
            .await
            .iter()
            .map(|((pubsub, topic), route)| TopicSubscription {
                pubsub_name: pubsub.clone(),
                topic: topic.clone(),
                metadata: HashMap::new(),
                routes: Some(TopicRoutes {
                    default: route.route.clone(),
                }),
            })
            .collect();

        Ok(Response::new(ListTopicSubscriptionsResponse { subscriptions }))
    }

    async fn on_topic_event(
        &self,
        request: Request<TopicEventRequest>,
    ) -> Result<Response<TopicEventResponse>, Status> {
        let req = request.into_inner();
        let handler = {
            let topics = self.routes.topics.read().await;
            topics
                .get(&(req.pubsub_name.clone(), req.topic.clone()))
                .map(|route| route.handler.clone())
        };
        let handler = handler.ok_or_else(|| {
            routing_status(RoutingError::RouteNotFound(format!(
                "{}/{}",
                req.pubsub_name, req.topic
            )))
        })?;
        handler(req).await.map(Response::new)
    }

    async fn list_input_bindings(
        &self,
        _request: Request<()>,
    ) -> Result<Response<ListInputBindingsResponse>, Status> {
        let bindings = self.routes.bindings.read().await.keys().cloned().collect();
        Ok(Response::new(ListInputBindingsResponse { bindings }))
    }

    async fn on_binding_event(
        &self,
        request: Request<BindingEventRequest>,
    ) -> Result<Response<BindingEventResponse>, Status> {
        let req = request.into_inner();
        let handler = self
            .routes
            .bindings
            .read()
            .await
            .get(&req.name)
            .cloned()
            .ok_or_else(|| routing_status(RoutingError::RouteNotFound(req.name.clone())))?;
        handler(req).await.map(Response::new)
    }
}

/// Forwards to the actor callbacks installed by the actor capability.
struct ActorCallbackService {
    routes: Arc<GrpcRoutes>,
}

#[tonic::async_trait]
impl ActorCallback for ActorCallbackService {
    async fn get_registered_actors(
        &self,
        request: Request<()>,
    ) -> Result<Response<GetRegisteredActorsResponse>, Status> {
        self.routes.actors().await?.get_registered_actors(request).await
    }

    async fn invoke_actor_method(
        &self,
        request: Request<InvokeActorRequest>,
    ) -> Result<Response<InvokeActorResponse>, Status> {
        self.routes.actors().await?.invoke_actor_method(request).await
    }

    async fn deactivate_actor(
        &self,
        request: Request<DeactivateActorRequest>,
    ) -> Result<Response<()>, Status> {
        self.routes.actors().await?.deactivate_actor(request).await
    }

    async fn invoke_actor_timer(
        &self,
        request: Request<InvokeActorTimerRequest>,
    ) -> Result<Response<()>, Status> {
        self.routes.actors().await?.invoke_actor_timer(request).await
    }

    async fn invoke_actor_reminder(
        &self,
        request: Request<InvokeActorReminderRequest>,
    ) -> Result<Response<()>, Status> {
        self.routes.actors().await?.invoke_actor_reminder(request).await
    }
}

/// The tonic-based application server.
pub struct GrpcServer {
    routes: Arc<GrpcRoutes>,
    running: Mutex<Option<ServerHandle>>,
}

impl GrpcServer {
    pub fn new() -> Self {
        Self {
            routes: Arc::new(GrpcRoutes::default()),
            running: Mutex::new(None),
        }
    }

    pub fn routes(&self) -> Arc<GrpcRoutes> {
        self.routes.clone()
    }

    #[cfg(test)]
    pub(crate) fn app_callback(&self) -> impl AppCallback {
        AppCallbackService {
            routes: self.routes.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn actor_callback(&self) -> impl ActorCallback {
        ActorCallbackService {
            routes: self.routes.clone(),
        }
    }
}

impl Default for GrpcServer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransportServer for GrpcServer {
    fn protocol(&self) -> CommunicationProtocol {
        CommunicationProtocol::Grpc
    }

    async fn start(&self, host: &str, port: u16) -> Result<SocketAddr, DaprError> {
        let mut running = self.running.lock().await;
        if running.is_some() {
            return Err(DaprError::AlreadyStarted);
        }

        let listener = TcpListener::bind((host, port)).await?;
        let local_addr = listener.local_addr()?;
        info!(addr = %local_addr, "gRPC server listening");

        let app_callback = AppCallbackServer::new(AppCallbackService {
            routes: self.routes.clone(),
        });
        let actor_callback = ActorCallbackServer::new(ActorCallbackService {
            routes: self.routes.clone(),
        });

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            let result = Server::builder()
                .add_service(app_callback)
                .add_service(actor_callback)
                .serve_with_incoming_shutdown(
                    TcpListenerStream::new(listener),
                    wait_for_shutdown(shutdown_rx),
                )
                .await;
            if let Err(e) = result {
                error!(error = %e, "gRPC server error");
            }
        });

        *running = Some(ServerHandle::new(local_addr, shutdown_tx, task));
        Ok(local_addr)
    }

    async fn stop(&self) {
        if let Some(handle) = self.running.lock().await.take() {
            info!("gRPC server shutting down");
            handle.shutdown().await;
        }
    }

    async fn local_addr(&self) -> Option<SocketAddr> {
        self.running.lock().await.as_ref().map(|h| h.local_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dapr_proto::common::v1::HttpExtension;
    use futures_util::FutureExt;

    fn named(name: &'static str) -> InvokeFn {
        Arc::new(move |_req: InvokeRequest| {
            async move {
                Ok(InvokeResponse {
                    data: None,
                    content_type: name.to_string(),
                })
            }
            .boxed()
        })
    }

    fn invoke(method: &str, verb: Option<Verb>) -> Request<InvokeRequest> {
        Request::new(InvokeRequest {
            method: method.to_string(),
            data: None,
            content_type: String::new(),
            http_extension: verb.map(|verb| HttpExtension {
                verb: verb as i32,
                querystring: String::new(),
            }),
        })
    }

    #[tokio::test]
    async fn test_on_invoke_matches_verb() {
        let server = GrpcServer::new();
        let routes = server.routes();
        routes.register_method("orders", HttpMethod::Get, named("get")).await;
        routes.register_method("orders", HttpMethod::Post, named("post")).await;
        let service = server.app_callback();

        let response = service.on_invoke(invoke("orders", Some(Verb::Post))).await.unwrap();
        assert_eq!(response.into_inner().content_type, "post");

        let response = service.on_invoke(invoke("orders", None)).await.unwrap();
        assert_eq!(response.into_inner().content_type, "get");

        let status = service
            .on_invoke(invoke("orders", Some(Verb::Delete)))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::NotFound);
    }

    #[tokio::test]
    async fn test_actor_callbacks_before_init_are_not_found() {
        let server = GrpcServer::new();
        let status = server
            .actor_callback()
            .get_registered_actors(Request::new(()))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::NotFound);
    }

    #[tokio::test]
    async fn test_start_and_stop() {
        let server = GrpcServer::new();
        let addr = server.start("127.0.0.1", 0).await.unwrap();
        assert!(matches!(
            server.start("127.0.0.1", 0).await,
            Err(DaprError::AlreadyStarted)
        ));
        assert_eq!(server.local_addr().await, Some(addr));
        server.stop().await;
        assert_eq!(server.local_addr().await, None);
    }
}
