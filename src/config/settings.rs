use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes tunables for the HTTP client and for the purge loop.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub client: ClientSettings,
    pub purge: PurgeSettings,
}

/// Tunables for the HTTP invoker and the reachability probe.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientSettings {
    /// Fixed delay between retry attempts, in milliseconds.
    pub retry_delay_ms: u64,
    /// Reachability probe timeout, in milliseconds. Deliberately short and
    /// separate from ordinary resource calls.
    pub probe_timeout_ms: u64,
}

impl ClientSettings {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

/// Bounds for the subscription purge loop.
#[derive(Debug, Deserialize, Clone)]
pub struct PurgeSettings {
    /// Messages requested per pull batch.
    pub batch_size: u32,
    /// Upper bound on purge iterations before giving up on draining.
    pub max_batches: u32,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Default, Deserialize)]
pub struct PartialSettings {
    pub client: Option<PartialClientSettings>,
    pub purge: Option<PartialPurgeSettings>,
}

/// Partial client settings.
#[derive(Debug, Default, Deserialize)]
pub struct PartialClientSettings {
    pub retry_delay_ms: Option<u64>,
    pub probe_timeout_ms: Option<u64>,
}

/// Partial purge settings.
#[derive(Debug, Default, Deserialize)]
pub struct PartialPurgeSettings {
    pub batch_size: Option<u32>,
    pub max_batches: Option<u32>,
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            client: ClientSettings {
                retry_delay_ms: 1000,
                probe_timeout_ms: 2000,
            },
            purge: PurgeSettings {
                batch_size: 100,
                max_batches: 1000,
            },
        }
    }
}
