//! The `utils` module provides a collection of utility functions and common
//! definitions used across the `emuhub` application.
//!
//! This module centralizes the shared error type raised by every API call and
//! the tracing/logging initialisation helper.

pub mod error;
pub mod logging;

#[cfg(test)]
mod tests;
