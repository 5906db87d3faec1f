//! Timers and reminders.
//!
//! Both are scheduled by the sidecar. A timer fires a named actor method and
//! dies with the activation; a reminder survives deactivation and is
//! delivered to [`crate::actors::Actor::on_reminder`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Format a duration the way the sidecar parses it, e.g. `1h30m` or
/// `2s500ms`. Zero is `0s`.
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();
    if total_ms == 0 {
        return "0s".to_string();
    }

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = (total_ms / 1_000) % 60;
    let millis = total_ms % 1_000;

    let mut out = String::new();
    for (value, unit) in [(hours, "h"), (minutes, "m"), (seconds, "s"), (millis, "ms")] {
        if value > 0 {
            out.push_str(&value.to_string());
            out.push_str(unit);
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActorTimer {
    pub name: String,
    /// Actor method invoked when the timer fires.
    pub callback: String,
    pub data: Value,
    pub due_time: Duration,
    pub period: Duration,
    pub ttl: Option<Duration>,
}

impl ActorTimer {
    pub fn new(name: impl Into<String>, callback: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            callback: callback.into(),
            data: Value::Null,
            due_time: Duration::ZERO,
            period: Duration::ZERO,
            ttl: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    pub fn due_in(mut self, due_time: Duration) -> Self {
        self.due_time = due_time;
        self
    }

    pub fn every(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Body of `POST /actors/{type}/{id}/timers/{name}`.
    pub fn http_body(&self) -> Value {
        let mut body = json!({
            "callback": self.callback,
            "data": self.data,
            "dueTime": format_duration(self.due_time),
            "period": format_duration(self.period),
        });
        if let Some(ttl) = self.ttl {
            body["ttl"] = json!(format_duration(ttl));
        }
        body
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActorReminder {
    pub name: String,
    pub data: Value,
    pub due_time: Duration,
    pub period: Duration,
    pub ttl: Option<Duration>,
}

impl ActorReminder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: Value::Null,
            due_time: Duration::ZERO,
            period: Duration::ZERO,
            ttl: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    pub fn due_in(mut self, due_time: Duration) -> Self {
        self.due_time = due_time;
        self
    }

    pub fn every(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Body of `POST /actors/{type}/{id}/reminders/{name}`.
    pub fn http_body(&self) -> Value {
        let mut body = json!({
            "data": self.data,
            "dueTime": format_duration(self.due_time),
            "period": format_duration(self.period),
        });
        if let Some(ttl) = self.ttl {
            body["ttl"] = json!(format_duration(ttl));
        }
        body
    }
}

/// Timer delivery sent by the sidecar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimerCallback {
    pub callback: String,
    pub data: Value,
    pub due_time: String,
    pub period: String,
}

/// Reminder delivery sent by the sidecar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReminderCallback {
    pub data: Value,
    pub due_time: String,
    pub period: String,
}
