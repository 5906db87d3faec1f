use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dapr_proto::runtime::v1::{
    ActorCallback, DeactivateActorRequest, GetRegisteredActorsResponse,
    InvokeActorReminderRequest, InvokeActorRequest, InvokeActorResponse, InvokeActorTimerRequest,
    RegisterActorReminderRequest, RegisterActorTimerRequest, UnregisterActorReminderRequest,
    UnregisterActorTimerRequest,
};
use serde_json::Value;
use tonic::{Request, Response, Status};

use crate::actors::{
    format_duration, ActorCallError, ActorId, ActorRegistration, ActorReminder, ActorRuntime,
    ActorTimer, TimerCallback,
};
use crate::capability::{ClientActor, ServerActor};
use crate::error::DaprError;
use crate::transport::grpc::{routing_status, GrpcClient, GrpcRoutes};
use crate::types::{decode_payload, encode_payload, RegisteredActors};

fn call_status(err: ActorCallError) -> Status {
    match err {
        ActorCallError::Routing(err) => routing_status(err),
        err @ ActorCallError::InvalidArguments(_) => Status::invalid_argument(err.to_string()),
        err => Status::internal(err.to_string()),
    }
}

/// `ActorCallback` service backed by the actor runtime.
pub struct GrpcActorCallbacks {
    runtime: Arc<ActorRuntime>,
}

impl GrpcActorCallbacks {
    pub fn new(runtime: Arc<ActorRuntime>) -> Self {
        Self { runtime }
    }
}

#[tonic::async_trait]
impl ActorCallback for GrpcActorCallbacks {
    async fn get_registered_actors(
        &self,
        _request: Request<()>,
    ) -> Result<Response<GetRegisteredActorsResponse>, Status> {
        let actors = self.runtime.registered_actors().await;
        Ok(Response::new(GetRegisteredActorsResponse {
            entities: actors.entities,
            actor_idle_timeout: actors.actor_idle_timeout,
            actor_scan_interval: actors.actor_scan_interval,
            drain_ongoing_call_timeout: actors.drain_ongoing_call_timeout,
            drain_rebalanced_actors: actors.drain_rebalanced_actors,
        }))
    }

    async fn invoke_actor_method(
        &self,
        request: Request<InvokeActorRequest>,
    ) -> Result<Response<InvokeActorResponse>, Status> {
        let req = request.into_inner();
        let value = self
            .runtime
            .invoke(
                &req.actor_type,
                &ActorId::from(req.actor_id),
                &req.method,
                decode_payload(&req.data),
            )
            .await
            .map_err(call_status)?;

        Ok(Response::new(InvokeActorResponse {
            data: encode_payload(&value),
        }))
    }

    async fn deactivate_actor(
        &self,
        request: Request<DeactivateActorRequest>,
    ) -> Result<Response<()>, Status> {
        let req = request.into_inner();
        self.runtime
            .deactivate(&req.actor_type, &ActorId::from(req.actor_id))
            .await
            .map_err(call_status)?;
        Ok(Response::new(()))
    }

    async fn invoke_actor_timer(
        &self,
        request: Request<InvokeActorTimerRequest>,
    ) -> Result<Response<()>, Status> {
        let req = request.into_inner();
        let timer = TimerCallback {
            callback: req.callback,
            data: decode_payload(&req.data),
            due_time: req.due_time,
            period: req.period,
        };
        self.runtime
            .fire_timer(&req.actor_type, &ActorId::from(req.actor_id), &req.name, timer)
            .await
            .map_err(call_status)?;
        Ok(Response::new(()))
    }

    async fn invoke_actor_reminder(
        &self,
        request: Request<InvokeActorReminderRequest>,
    ) -> Result<Response<()>, Status> {
        let req = request.into_inner();
        self.runtime
            .fire_reminder(
                &req.actor_type,
                &ActorId::from(req.actor_id),
                &req.name,
                decode_payload(&req.data),
            )
            .await
            .map_err(call_status)?;
        Ok(Response::new(()))
    }
}

/// Server actor capability over gRPC.
pub struct GrpcServerActor {
    routes: Arc<GrpcRoutes>,
    runtime: Arc<ActorRuntime>,
    mounted: AtomicBool,
}

impl GrpcServerActor {
    pub fn new(routes: Arc<GrpcRoutes>, runtime: Arc<ActorRuntime>) -> Self {
        Self {
            routes,
            runtime,
            mounted: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl ServerActor for GrpcServerActor {
    async fn init(&self) -> Result<(), DaprError> {
        if !self.mounted.swap(true, Ordering::SeqCst) {
            let callbacks = GrpcActorCallbacks::new(self.runtime.clone());
            self.routes.set_actor_callbacks(Arc::new(callbacks)).await;
        }
        Ok(())
    }

    async fn register(&self, registration: ActorRegistration) -> Result<(), DaprError> {
        Ok(self.runtime.register(registration).await?)
    }

    async fn registered_actors(&self) -> RegisteredActors {
        self.runtime.registered_actors().await
    }
}

/// Client actor capability over gRPC.
pub struct GrpcClientActor {
    client: GrpcClient,
}

impl GrpcClientActor {
    pub fn new(client: GrpcClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClientActor for GrpcClientActor {
    async fn invoke(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        method: &str,
        data: Option<&Value>,
    ) -> Result<Value, DaprError> {
        let request = InvokeActorRequest {
            actor_type: actor_type.to_string(),
            actor_id: actor_id.to_string(),
            method: method.to_string(),
            data: data.map(encode_payload).unwrap_or_default(),
            metadata: HashMap::new(),
        };
        let response = self.client.client().invoke_actor(request).await?;
        Ok(decode_payload(&response.into_inner().data))
    }

    async fn register_timer(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        timer: &ActorTimer,
    ) -> Result<(), DaprError> {
        let request = RegisterActorTimerRequest {
            actor_type: actor_type.to_string(),
            actor_id: actor_id.to_string(),
            name: timer.name.clone(),
            due_time: format_duration(timer.due_time),
            period: format_duration(timer.period),
            callback: timer.callback.clone(),
            data: encode_payload(&timer.data),
            ttl: timer.ttl.map(format_duration).unwrap_or_default(),
        };
        self.client.client().register_actor_timer(request).await?;
        Ok(())
    }

    async fn unregister_timer(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        name: &str,
    ) -> Result<(), DaprError> {
        let request = UnregisterActorTimerRequest {
            actor_type: actor_type.to_string(),
            actor_id: actor_id.to_string(),
            name: name.to_string(),
        };
        self.client.client().unregister_actor_timer(request).await?;
        Ok(())
    }

    async fn register_reminder(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        reminder: &ActorReminder,
    ) -> Result<(), DaprError> {
        let request = RegisterActorReminderRequest {
            actor_type: actor_type.to_string(),
            actor_id: actor_id.to_string(),
            name: reminder.name.clone(),
            due_time: format_duration(reminder.due_time),
            period: format_duration(reminder.period),
            data: encode_payload(&reminder.data),
            ttl: reminder.ttl.map(format_duration).unwrap_or_default(),
        };
        self.client.client().register_actor_reminder(request).await?;
        Ok(())
    }

    async fn unregister_reminder(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        name: &str,
    ) -> Result<(), DaprError> {
        let request = UnregisterActorReminderRequest {
            actor_type: actor_type.to_string(),
            actor_id: actor_id.to_string(),
            name: name.to_string(),
        };
        self.client.client().unregister_actor_reminder(request).await?;
        Ok(())
    }
}
