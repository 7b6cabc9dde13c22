//! The `error` module defines the error type shared by every emulator API
//! call in `emuhub`.
//!
//! The taxonomy deliberately separates "the backend was unreachable" from
//! "the backend was reachable but rejected the request", so callers can
//! branch on the two without inspecting error strings.

use thiserror::Error;

/// Error raised by the HTTP invoker and propagated unchanged by every
/// resource client.
///
/// `Status` carries the HTTP status code and the endpoint that produced it,
/// which is the only semantic distinction the core offers; callers wanting to
/// tell "not found" from "conflict" must branch on the raw status themselves.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint could not be reached at all (connection refused, DNS
    /// failure, timeout). No HTTP status is available.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success HTTP status.
    #[error("HTTP error: {status} at {endpoint}")]
    Status { status: u16, endpoint: String },

    /// The backend answered successfully but the body did not decode into
    /// the caller's expected shape.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// A caller-supplied resource name contained a URL separator. The
    /// request was never sent; `endpoint` is the base the name would have
    /// been appended to.
    #[error("invalid resource name {name:?} for {endpoint}")]
    InvalidName { name: String, endpoint: String },
}

impl ApiError {
    /// The endpoint the failing request was sent to.
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Transport { endpoint, .. } => endpoint,
            ApiError::Status { endpoint, .. } => endpoint,
            ApiError::Decode { endpoint, .. } => endpoint,
            ApiError::InvalidName { endpoint, .. } => endpoint,
        }
    }

    /// The HTTP status code, when the backend was reachable enough to
    /// produce one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the failure was at the transport level, i.e. the backend
    /// never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }
}
