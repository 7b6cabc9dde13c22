//! Table resource client: list, create, delete.

use serde::Deserialize;
use serde_json::json;

use crate::api::{ApiRequest, Endpoint, Invoker};
use crate::emulators::Emulator;
use crate::utils::error::ApiError;

use super::types::{Table, TableForm};

#[derive(Debug, Default, Deserialize)]
struct TableList {
    #[serde(default)]
    tables: Vec<Table>,
}

/// Lists every table in one dataset.
pub async fn list_tables(
    invoker: &Invoker,
    emulator: &Emulator,
    dataset_id: &str,
) -> Result<Vec<Table>, ApiError> {
    let endpoint = Endpoint::bigquery(emulator)
        .segment("datasets")
        .segment(dataset_id)
        .segment("tables")
        .build()?;
    let content: TableList = invoker.call(ApiRequest::get(endpoint)).await?;
    Ok(content.tables)
}

/// Creates a table inside a dataset, forwarding the raw column schema
/// untouched when the form carries one.
pub async fn create_table(
    invoker: &Invoker,
    emulator: &Emulator,
    form: &TableForm,
) -> Result<Table, ApiError> {
    let endpoint = Endpoint::bigquery(emulator)
        .segment("datasets")
        .segment(&form.dataset_id)
        .segment("tables")
        .build()?;

    let mut body = serde_json::Map::new();
    body.insert(
        "tableReference".to_string(),
        json!({
            "tableId": form.table_id,
            "datasetId": form.dataset_id,
            "projectId": emulator.project_id,
        }),
    );
    if let Some(schema) = &form.schema {
        body.insert("schema".to_string(), schema.clone());
    }

    invoker
        .call(ApiRequest::post(endpoint).body(serde_json::Value::Object(body)))
        .await
}

/// Deletes a table. Success is the absence of an error.
pub async fn delete_table(
    invoker: &Invoker,
    emulator: &Emulator,
    dataset_id: &str,
    table_id: &str,
) -> Result<bool, ApiError> {
    let endpoint = Endpoint::bigquery(emulator)
        .segment("datasets")
        .segment(dataset_id)
        .segment("tables")
        .segment(table_id)
        .build()?;
    invoker.call_unit(ApiRequest::delete(endpoint)).await?;
    Ok(true)
}
