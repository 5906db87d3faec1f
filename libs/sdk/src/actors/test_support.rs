use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{ActorId, ActorReminder, ActorTimer};
use crate::capability::ClientActor;
use crate::error::DaprError;

pub(crate) type RecordedCall = (String, String, String, Option<Value>);

/// Client actor capability that records calls instead of sending them.
pub(crate) struct RecordingClient {
    response: Value,
    calls: Mutex<Vec<RecordedCall>>,
    timers: Mutex<Vec<String>>,
}

impl RecordingClient {
    pub(crate) fn returning(response: Value) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
            timers: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn timers(&self) -> Vec<String> {
        self.timers.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClientActor for RecordingClient {
    async fn invoke(
        &self,
        actor_type: &str,
        actor_id: &ActorId,
        method: &str,
        data: Option<&Value>,
    ) -> Result<Value, DaprError> {
        self.calls.lock().unwrap().push((
            actor_type.to_string(),
            actor_id.to_string(),
            method.to_string(),
            data.cloned(),
        ));
        Ok(self.response.clone())
    }

    async fn register_timer(
        &self,
        _actor_type: &str,
        _actor_id: &ActorId,
        timer: &ActorTimer,
    ) -> Result<(), DaprError> {
        self.timers.lock().unwrap().push(format!("+timer:{}", timer.name));
        Ok(())
    }

    async fn unregister_timer(
        &self,
        _actor_type: &str,
        _actor_id: &ActorId,
        name: &str,
    ) -> Result<(), DaprError> {
        self.timers.lock().unwrap().push(format!("-timer:{name}"));
        Ok(())
    }

    async fn register_reminder(
        &self,
        _actor_type: &str,
        _actor_id: &ActorId,
        reminder: &ActorReminder,
    ) -> Result<(), DaprError> {
        self.timers.lock().unwrap().push(format!("+reminder:{}", reminder.name));
        Ok(())
    }

    async fn unregister_reminder(
        &self,
        _actor_type: &str,
        _actor_id: &ActorId,
        name: &str,
    ) -> Result<(), DaprError> {
        self.timers.lock().unwrap().push(format!("-reminder:{name}"));
        Ok(())
    }
}
