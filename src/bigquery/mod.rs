//! The `bigquery` module drives the BigQuery emulator REST API.
//!
//! Datasets and tables are plain list/create/delete resources with no
//! lifecycle logic; everything flows through the shared invoker.

pub mod dataset;
pub mod table;
pub mod types;
