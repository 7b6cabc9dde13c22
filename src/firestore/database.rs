//! Database listing client.

use serde::{Deserialize, Serialize};

use crate::api::{ApiRequest, Endpoint, Invoker};
use crate::emulators::Emulator;
use crate::utils::error::ApiError;

/// A Firestore database as listed by the emulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
struct DatabaseList {
    #[serde(default)]
    databases: Vec<Database>,
}

/// Lists the databases of the connected project. The emulator exposes the
/// listing under the project's `schemas` path.
pub async fn list_databases(
    invoker: &Invoker,
    emulator: &Emulator,
) -> Result<Vec<Database>, ApiError> {
    let endpoint = Endpoint::firestore(emulator).segment("schemas").build()?;
    let content: DatabaseList = invoker.call(ApiRequest::get(endpoint)).await?;
    Ok(content.databases)
}
