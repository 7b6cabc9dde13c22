mod settings;

use config::{Config, ConfigError, Environment, File};

pub use settings::{ClientSettings, PartialSettings, PurgeSettings, Settings};

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
/// Returns a `Settings` struct containing the client and purge configurations
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    Ok(merge_with_defaults(partial))
}

/// Fills every missing field of a partially specified configuration with
/// its default value.
fn merge_with_defaults(partial: PartialSettings) -> Settings {
    let default = Settings::default();

    Settings {
        client: ClientSettings {
            retry_delay_ms: partial
                .client
                .as_ref()
                .and_then(|c| c.retry_delay_ms)
                .unwrap_or(default.client.retry_delay_ms),
            probe_timeout_ms: partial
                .client
                .as_ref()
                .and_then(|c| c.probe_timeout_ms)
                .unwrap_or(default.client.probe_timeout_ms),
        },
        purge: PurgeSettings {
            batch_size: partial
                .purge
                .as_ref()
                .and_then(|p| p.batch_size)
                .unwrap_or(default.purge.batch_size),
            max_batches: partial
                .purge
                .as_ref()
                .and_then(|p| p.max_batches)
                .unwrap_or(default.purge.max_batches),
        },
    }
}
