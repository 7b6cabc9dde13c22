//! The `api` module is the single path every emulator call goes through.
//!
//! It provides the generic HTTP invoker with its bounded fixed-delay retry
//! loop, and the typed endpoint builders used to assemble emulator URLs
//! without ad hoc string interpolation.

pub mod endpoint;
pub mod invoke;

pub use endpoint::Endpoint;
pub use invoke::{ApiRequest, Invoker};
