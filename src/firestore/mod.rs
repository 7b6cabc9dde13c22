//! The `firestore` module drives the Firestore emulator REST API.
//!
//! Only database listing exists at this boundary; document-level browsing
//! is out of scope for the core.

pub mod database;

#[cfg(test)]
mod tests;
