//! Dataset resource client: list, create, delete.

use serde::Deserialize;
use serde_json::json;

use crate::api::{ApiRequest, Endpoint, Invoker};
use crate::emulators::Emulator;
use crate::utils::error::ApiError;

use super::types::{Dataset, DatasetForm};

#[derive(Debug, Default, Deserialize)]
struct DatasetList {
    #[serde(default)]
    datasets: Vec<Dataset>,
}

/// Lists every dataset in the connected project.
pub async fn list_datasets(
    invoker: &Invoker,
    emulator: &Emulator,
) -> Result<Vec<Dataset>, ApiError> {
    let endpoint = Endpoint::bigquery(emulator).segment("datasets").build()?;
    let content: DatasetList = invoker.call(ApiRequest::get(endpoint)).await?;
    Ok(content.datasets)
}

/// Creates a dataset. BigQuery takes the identifier in the body rather than
/// the path.
pub async fn create_dataset(
    invoker: &Invoker,
    emulator: &Emulator,
    form: &DatasetForm,
) -> Result<Dataset, ApiError> {
    let endpoint = Endpoint::bigquery(emulator).segment("datasets").build()?;

    let body = json!({
        "datasetReference": {
            "datasetId": form.id,
            "projectId": emulator.project_id,
        }
    });

    invoker.call(ApiRequest::post(endpoint).body(body)).await
}

/// Deletes a dataset. Success is the absence of an error.
pub async fn delete_dataset(
    invoker: &Invoker,
    emulator: &Emulator,
    dataset_id: &str,
) -> Result<bool, ApiError> {
    let endpoint = Endpoint::bigquery(emulator)
        .segment("datasets")
        .segment(dataset_id)
        .build()?;
    invoker.call_unit(ApiRequest::delete(endpoint)).await?;
    Ok(true)
}
