//! # EmuHub
//!
//! `emuhub` is the connectivity and messaging core behind a Google Cloud
//! emulator admin front end. It tracks connection state for several
//! independent emulator backends (Pub/Sub, BigQuery, Firestore, ...),
//! validates reachability before any operation is allowed, and drives the
//! emulator REST APIs over plain, unauthenticated HTTP.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `api`: The generic, retrying HTTP invoker and the typed endpoint builder every call goes through.
//! - `emulators`: The connection registry (one record per backend kind) and the reachability probe.
//! - `pubsub`: Topic, subscription and schema resource clients plus the message lifecycle engine (pull, acknowledge, purge).
//! - `bigquery`: Dataset and table resource clients.
//! - `firestore`: Database listing client.
//! - `config`: Handles loading and merging crate configuration.
//! - `utils`: Contains shared utilities, such as error handling and logging setup.

pub mod api;
pub mod bigquery;
pub mod config;
pub mod emulators;
pub mod firestore;
pub mod pubsub;
pub mod utils;

#[cfg(test)]
mod tests;
