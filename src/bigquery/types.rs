//! Wire types for the BigQuery emulator REST contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetReference {
    pub dataset_id: String,
    pub project_id: String,
}

/// A dataset as returned by the emulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub dataset_reference: DatasetReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableReference {
    pub table_id: String,
    pub dataset_id: String,
    pub project_id: String,
}

/// A table as returned by the emulator. The column schema is kept opaque;
/// this client never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub table_reference: TableReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

/// Dataset creation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetForm {
    pub id: String,
}

/// Table creation form. `schema` carries the raw column definition JSON the
/// UI collected, forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableForm {
    pub dataset_id: String,
    pub table_id: String,
    pub schema: Option<Value>,
}
