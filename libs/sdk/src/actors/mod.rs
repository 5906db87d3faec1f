//! Virtual actors: the server-side runtime that hosts them and the client-side
//! proxy that calls them.

mod actor;
mod id;
mod proxy;
mod runtime;
mod timer;

#[cfg(test)]
pub(crate) mod test_support;

pub use actor::{decode_args, encode_result, Actor, ActorContext, ActorError};
pub use id::ActorId;
pub use proxy::{ActorProxy, ActorProxyFactory};
pub use runtime::{
    ActorCallError, ActorLifecycle, ActorRegistration, ActorRuntime, ActorRuntimeConfig,
};
pub use timer::{format_duration, ActorReminder, ActorTimer, ReminderCallback, TimerCallback};
