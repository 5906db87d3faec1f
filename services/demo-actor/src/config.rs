//! Configuration for the demo application.
//!
//! Listener and sidecar addresses come from [`dapr_sdk::ServerSettings::from_env`];
//! this only covers what the demo itself needs.

use anyhow::Result;

/// Demo application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pub/sub component the demo subscribes to.
    pub pubsub_name: String,

    /// Topic the demo subscribes to.
    pub topic: String,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let pubsub_name = lookup("DEMO_PUBSUB_NAME").unwrap_or_else(|| "pubsub".to_string());
        let topic = lookup("DEMO_TOPIC").unwrap_or_else(|| "orders".to_string());
        let log_level = lookup("DAPR_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        if pubsub_name.trim().is_empty() || topic.trim().is_empty() {
            anyhow::bail!("DEMO_PUBSUB_NAME and DEMO_TOPIC must not be empty");
        }

        Ok(Self {
            pubsub_name,
            topic,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pubsub_name: "pubsub".to_string(),
            topic: "orders".to_string(),
            log_level: "info".to_string(),
        }
    }
}
