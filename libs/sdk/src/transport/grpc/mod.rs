//! gRPC transport: a tonic server hosting `AppCallback` and `ActorCallback`,
//! and a lazily connected `Dapr` client.

mod client;
mod server;

pub use client::GrpcClient;
pub use server::{BindingEventFn, GrpcRoutes, GrpcServer, InvokeFn, TopicEventFn};
pub(crate) use server::routing_status;
