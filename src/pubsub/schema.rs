//! Schema resource client: list, get, create, delete.
//!
//! Schemas are immutable once created; the emulator offers no update verb
//! and neither does this client.

use serde::Deserialize;
use serde_json::json;

use crate::api::{ApiRequest, Endpoint, Invoker};
use crate::emulators::Emulator;
use crate::utils::error::ApiError;

use super::types::{Schema, SchemaForm, SchemaName};

#[derive(Debug, Default, Deserialize)]
struct SchemaList {
    #[serde(default)]
    schemas: Vec<Schema>,
}

/// Lists every schema in the connected project.
pub async fn list_schemas(invoker: &Invoker, emulator: &Emulator) -> Result<Vec<Schema>, ApiError> {
    let endpoint = Endpoint::pubsub(emulator).segment("schemas").build()?;
    let content: SchemaList = invoker.call(ApiRequest::get(endpoint)).await?;
    Ok(content.schemas)
}

/// Fetches one schema, addressed by its fully-qualified name.
pub async fn get_schema(
    invoker: &Invoker,
    emulator: &Emulator,
    name: &SchemaName,
) -> Result<Schema, ApiError> {
    let endpoint = Endpoint::pubsub_v1(emulator).path(name.as_str()).build()?;
    invoker.call(ApiRequest::get(endpoint)).await
}

/// Creates a schema. Unlike topics and subscriptions this endpoint is
/// POST-with-query rather than PUT-by-name.
pub async fn create_schema(
    invoker: &Invoker,
    emulator: &Emulator,
    form: &SchemaForm,
) -> Result<Schema, ApiError> {
    let endpoint = Endpoint::pubsub(emulator)
        .segment("schemas")
        .query("schemaId", &form.name)
        .build()?;

    let body = json!({
        "type": form.schema_type,
        "definition": form.definition,
    });

    invoker.call(ApiRequest::post(endpoint).body(body)).await
}

/// Deletes a schema. Success is the absence of an error.
pub async fn delete_schema(
    invoker: &Invoker,
    emulator: &Emulator,
    name: &SchemaName,
) -> Result<bool, ApiError> {
    let endpoint = Endpoint::pubsub_v1(emulator).path(name.as_str()).build()?;
    invoker.call_unit(ApiRequest::delete(endpoint)).await?;
    Ok(true)
}
