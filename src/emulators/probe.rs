//! Reachability probing.
//!
//! A probe is a lightweight GET used solely to decide whether something is
//! listening at the configured host/port; it performs no business logic.
//! Reachable means the HTTP exchange completed at all, whatever the status:
//! a 404 from the service root still proves a listener, which matches how
//! the settings screen validates endpoints.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::api::Endpoint;
use crate::utils::error::ApiError;

use super::kind::EmulatorKind;
use super::registry::{Emulator, EmulatorRegistry};

/// Probe timeout, deliberately short and distinct from the invoker's retry
/// delay.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Connection details submitted from the settings form, before any probe has
/// validated them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatorForm {
    pub kind: EmulatorKind,
    pub host: String,
    pub port: u16,
    pub project_id: String,
}

impl EmulatorForm {
    fn into_record(self) -> Emulator {
        Emulator {
            kind: self.kind,
            host: self.host,
            port: self.port,
            project_id: self.project_id,
            is_connected: false,
        }
    }
}

/// Type-specific health path, or the service root where no lightweight
/// listing endpoint is known.
pub fn health_endpoint(emulator: &Emulator) -> Result<String, ApiError> {
    match emulator.kind {
        EmulatorKind::BigQuery => Endpoint::bigquery(emulator).segment("datasets").build(),
        EmulatorKind::Firestore => Endpoint::firestore(emulator).segment("schemas").build(),
        _ => Endpoint::service_root(emulator).build(),
    }
}

/// Checks whether the backend answers at all within `timeout`.
pub async fn check_connection(emulator: &Emulator, timeout: Duration) -> bool {
    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(err) => {
            warn!(error = %err, "failed to build probe client");
            return false;
        }
    };

    let endpoint = match health_endpoint(emulator) {
        Ok(endpoint) => endpoint,
        Err(err) => {
            warn!(kind = %emulator.kind, error = %err, "failed to build health endpoint");
            return false;
        }
    };
    match client.get(&endpoint).send().await {
        Ok(response) => {
            debug!(
                kind = %emulator.kind,
                endpoint = %endpoint,
                status = response.status().as_u16(),
                "probe answered"
            );
            true
        }
        Err(err) => {
            warn!(kind = %emulator.kind, endpoint = %endpoint, error = %err, "probe failed");
            false
        }
    }
}

/// Probes the submitted settings and updates the registry accordingly.
///
/// On success the record is upserted with `is_connected = true`, replacing
/// any previous record for that kind. On failure an existing record for the
/// kind is marked disconnected; a failed probe never inserts a record.
/// Returns whether the backend was reachable.
pub async fn probe_and_register(
    registry: &mut EmulatorRegistry,
    form: EmulatorForm,
    timeout: Duration,
) -> bool {
    let kind = form.kind;
    let mut record = form.into_record();

    if check_connection(&record, timeout).await {
        record.is_connected = true;
        info!(kind = %kind, host = %record.host, port = record.port, "connected to emulator");
        registry.upsert(record);
        true
    } else {
        registry.mark_disconnected(kind);
        info!(kind = %kind, "emulator unreachable, connection not validated");
        false
    }
}
