use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use futures_util::future::BoxFuture;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex, RwLock};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use super::error::ApiError;
use super::health;
use crate::config::CommunicationProtocol;
use crate::error::{ConfigError, DaprError, RoutingError};
use crate::transport::{wait_for_shutdown, ServerHandle, TransportServer};
use crate::types::{HttpMethod, Subscription};

/// A request routed to a registered path.
#[derive(Debug, Clone)]
pub struct HttpInbound {
    pub method: HttpMethod,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Bytes,
}

pub type HttpHandler = Arc<dyn Fn(HttpInbound) -> BoxFuture<'static, Response> + Send + Sync>;

/// JSON response with the given status. `Null` becomes an empty body.
pub fn json_response(status: StatusCode, value: Value) -> Response {
    if value.is_null() {
        return status.into_response();
    }
    (status, Json(value)).into_response()
}

fn normalize(path: &str) -> String {
    path.trim_matches('/').to_string()
}

/// Dynamic routes registered by the capability modules.
#[derive(Default)]
pub struct HttpRoutes {
    handlers: RwLock<HashMap<(HttpMethod, String), HttpHandler>>,
    subscriptions: RwLock<BTreeMap<(String, String), String>>,
}

impl HttpRoutes {
    /// Bind `handler` at `path`, replacing any previous binding.
    pub async fn register(&self, method: HttpMethod, path: &str, handler: HttpHandler) {
        let path = normalize(path);
        debug!(%method, path = %path, "Registering HTTP route");
        self.handlers.write().await.insert((method, path), handler);
    }

    pub async fn unregister(&self, method: HttpMethod, path: &str) -> bool {
        self.handlers
            .write()
            .await
            .remove(&(method, normalize(path)))
            .is_some()
    }

    /// Record the route for a (pubsub, topic) pair and return the route it
    /// replaced, if any. A route delivers exactly one pair.
    pub async fn register_subscription(
        &self,
        pubsub: &str,
        topic: &str,
        route: &str,
    ) -> Result<Option<String>, ConfigError> {
        let route = normalize(route);
        let key = (pubsub.to_string(), topic.to_string());
        let mut subscriptions = self.subscriptions.write().await;

        if let Some(((owner_pubsub, owner_topic), _)) = subscriptions
            .iter()
            .find(|(owner, existing)| **owner != key && **existing == route)
        {
            return Err(ConfigError::RouteInUse {
                route,
                pubsub: owner_pubsub.clone(),
                topic: owner_topic.clone(),
            });
        }

        Ok(subscriptions.insert(key, route))
    }

    pub async fn subscriptions(&self) -> Vec<Subscription> {
        self.subscriptions
            .read()
            .await
            .iter()
            .map(|((pubsub, topic), route)| Subscription {
                pubsubname: pubsub.clone(),
                topic: topic.clone(),
                route: route.clone(),
            })
            .collect()
    }

    async fn handler(&self, method: HttpMethod, path: &str) -> Option<HttpHandler> {
        self.handlers
            .read()
            .await
            .get(&(method, normalize(path)))
            .cloned()
    }
}

/// The axum-based application server.
pub struct HttpServer {
    routes: Arc<HttpRoutes>,
    extensions: Mutex<Vec<Router>>,
    running: Mutex<Option<ServerHandle>>,
}

impl HttpServer {
    pub fn new() -> Self {
        Self {
            routes: Arc::new(HttpRoutes::default()),
            extensions: Mutex::new(Vec::new()),
            running: Mutex::new(None),
        }
    }

    pub fn routes(&self) -> Arc<HttpRoutes> {
        self.routes.clone()
    }

    /// Add fixed routes (e.g. the actor endpoints) to the router built at
    /// start.
    pub async fn merge_router(&self, router: Router) {
        self.extensions.lock().await.push(router);
    }

    /// Build the full router. Fixed routes win over dynamic ones; anything
    /// else is dispatched through [`HttpRoutes`].
    pub async fn router(&self) -> Router {
        let mut app = Router::new()
            .route("/dapr/subscribe", get(list_subscriptions))
            .merge(health::routes())
            .fallback(dispatch)
            .with_state(self.routes.clone());

        for extension in self.extensions.lock().await.iter() {
            app = app.merge(extension.clone());
        }

        app.layer(TraceLayer::new_for_http())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransportServer for HttpServer {
    fn protocol(&self) -> CommunicationProtocol {
        CommunicationProtocol::Http
    }

    async fn start(&self, host: &str, port: u16) -> Result<SocketAddr, DaprError> {
        let mut running = self.running.lock().await;
        if running.is_some() {
            return Err(DaprError::AlreadyStarted);
        }

        let app = self.router().await;
        let listener = TcpListener::bind((host, port)).await?;
        let local_addr = listener.local_addr()?;
        info!(addr = %local_addr, "HTTP server listening");

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(wait_for_shutdown(shutdown_rx))
                .await;
            if let Err(e) = result {
                error!(error = %e, "HTTP server error");
            }
        });

        *running = Some(ServerHandle::new(local_addr, shutdown_tx, task));
        Ok(local_addr)
    }

    async fn stop(&self) {
        if let Some(handle) = self.running.lock().await.take() {
            info!("HTTP server shutting down");
            handle.shutdown().await;
        }
    }

    async fn local_addr(&self) -> Option<SocketAddr> {
        self.running.lock().await.as_ref().map(|h| h.local_addr)
    }
}

async fn list_subscriptions(State(routes): State<Arc<HttpRoutes>>) -> impl IntoResponse {
    Json(routes.subscriptions().await)
}

async fn dispatch(
    State(routes): State<Arc<HttpRoutes>>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let Some(http_method) = HttpMethod::from_method(&method) else {
        return ApiError::bad_request(
            "ERR_METHOD_NOT_SUPPORTED",
            format!("unsupported method {method}"),
        )
        .into_response();
    };

    match routes.handler(http_method, &path).await {
        Some(handler) => {
            handler(HttpInbound {
                method: http_method,
                path,
                query,
                body,
            })
            .await
        }
        None => {
            ApiError::from(RoutingError::RouteNotFound(format!("{method} {path}"))).into_response()
        }
    }
}
