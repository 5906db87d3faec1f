//! User-supplied callbacks and the boundary that isolates their failures.
//!
//! Every callback the SDK runs on behalf of the sidecar goes through
//! [`guarded`], which turns both `Err` returns and panics into a
//! [`HandlerFailure`]. One misbehaving handler never takes the server down.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::types::{HttpMethod, TopicStatus};

/// A callback that failed.
#[derive(Debug, Error)]
pub enum HandlerFailure {
    #[error("{0:#}")]
    Error(anyhow::Error),

    #[error("handler panicked: {0}")]
    Panicked(String),
}

/// Run a callback, catching errors and panics.
///
/// The future is created inside the guard so a panic raised while building it
/// is caught as well.
pub async fn guarded<T, F>(make: F) -> Result<T, HandlerFailure>
where
    F: FnOnce() -> BoxFuture<'static, anyhow::Result<T>>,
{
    let fut = async move { make().await };
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(HandlerFailure::Error(err)),
        Err(panic) => Err(HandlerFailure::Panicked(panic_message(panic.as_ref()))),
    }
}

pub(crate) fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn to_value<R: Serialize>(result: R) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(result)?)
}

type TopicFn = dyn Fn(Value) -> BoxFuture<'static, anyhow::Result<TopicStatus>> + Send + Sync;

/// Handler for pub/sub deliveries.
#[derive(Clone)]
pub struct TopicHandler(Arc<TopicFn>);

impl TopicHandler {
    /// A handler that acknowledges every delivery it completes as `SUCCESS`.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self(Arc::new(move |data| {
            let fut = f(data);
            async move { fut.await.map(|()| TopicStatus::Success) }.boxed()
        }))
    }

    /// A handler that chooses the acknowledgement itself (e.g. `Retry`).
    pub fn with_status<F, Fut>(f: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<TopicStatus>> + Send + 'static,
    {
        Self(Arc::new(move |data| f(data).boxed()))
    }

    pub async fn call(&self, data: Value) -> Result<TopicStatus, HandlerFailure> {
        guarded(|| (self.0)(data)).await
    }
}

type BindingFn = dyn Fn(Value) -> BoxFuture<'static, anyhow::Result<Value>> + Send + Sync;

/// Handler for input-binding events. The returned value is sent back to the
/// sidecar as the response body.
#[derive(Clone)]
pub struct BindingHandler(Arc<BindingFn>);

impl BindingHandler {
    pub fn new<F, Fut, R>(f: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<R>> + Send + 'static,
        R: Serialize,
    {
        Self(Arc::new(move |data| {
            let fut = f(data);
            async move { fut.await.and_then(to_value) }.boxed()
        }))
    }

    pub async fn call(&self, data: Value) -> Result<Value, HandlerFailure> {
        guarded(|| (self.0)(data)).await
    }
}

/// An inbound service invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvocationRequest {
    pub method: HttpMethod,
    pub query: HashMap<String, String>,
    pub body: Value,
}

type InvokeFn =
    dyn Fn(InvocationRequest) -> BoxFuture<'static, anyhow::Result<Value>> + Send + Sync;

/// Handler for service invocations addressed to this application.
#[derive(Clone)]
pub struct InvokeHandler(Arc<InvokeFn>);

impl InvokeHandler {
    pub fn new<F, Fut, R>(f: F) -> Self
    where
        F: Fn(InvocationRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<R>> + Send + 'static,
        R: Serialize,
    {
        Self(Arc::new(move |request| {
            let fut = f(request);
            async move { fut.await.and_then(to_value) }.boxed()
        }))
    }

    pub async fn call(&self, request: InvocationRequest) -> Result<Value, HandlerFailure> {
        guarded(|| (self.0)(request)).await
    }
}
