//! Protobuf messages and gRPC service stubs for the sidecar API.
//!
//! The sidecar exposes `dapr.proto.runtime.v1.Dapr`; applications serve
//! `AppCallback` (invocation, pub/sub, bindings) and `ActorCallback`
//! (actor methods, timers, reminders, deactivation).

pub mod common {
    pub mod v1 {
        include!("gen/dapr.proto.common.v1.rs");
    }
}

pub mod runtime {
    pub mod v1 {
        include!("gen/dapr.proto.runtime.v1.rs");

        pub use actor_callback_server::{ActorCallback, ActorCallbackServer};
        pub use app_callback_server::{AppCallback, AppCallbackServer};
        pub use dapr_client::DaprClient;
        pub use dapr_server::{Dapr, DaprServer};
    }
}
