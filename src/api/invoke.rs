//! The generic, retrying HTTP invocation primitive.
//!
//! Every emulator operation funnels through [`Invoker::call`] (or
//! [`Invoker::call_unit`] for side-effect-only endpoints). Retry is opt-in:
//! the default budget is zero because most callers want fail-fast behaviour,
//! and the few bulk/background operations that can tolerate waiting opt in
//! explicitly. The retry delay is fixed, not exponential; callers needing
//! backoff supply a larger delay themselves.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::utils::error::ApiError;

/// Default inter-attempt delay when a caller enables retries.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// One HTTP request to an emulator endpoint, plus its retry budget.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    endpoint: String,
    method: Method,
    body: Option<Value>,
    retries: u32,
    delay: Duration,
}

impl ApiRequest {
    fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            body: None,
            retries: 0,
            delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    /// Attach a JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Number of retries after the first attempt. Zero means fail fast.
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Fixed delay between attempts.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Shared HTTP client wrapper that executes [`ApiRequest`]s.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct Invoker {
    http: reqwest::Client,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Perform the request and decode the response body into `T`.
    pub async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let raw = self.dispatch(&request).await?;
        serde_json::from_str(&raw).map_err(|source| ApiError::Decode {
            endpoint: request.endpoint,
            source,
        })
    }

    /// Perform the request and discard the response body. Used for
    /// delete/acknowledge endpoints whose success signal is simply the
    /// absence of an error.
    pub async fn call_unit(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.dispatch(&request).await.map(|_| ())
    }

    /// Run the retry loop. On any failure except the final attempt, wait
    /// the fixed delay and try again; the last error wins.
    async fn dispatch(&self, request: &ApiRequest) -> Result<String, ApiError> {
        let mut attempt: u32 = 0;
        loop {
            match self.attempt(request).await {
                Ok(raw) => return Ok(raw),
                Err(err) if attempt < request.retries => {
                    warn!(
                        endpoint = %request.endpoint,
                        attempt = attempt + 1,
                        delay_ms = request.delay.as_millis() as u64,
                        error = %err,
                        "request attempt failed, retrying"
                    );
                    tokio::time::sleep(request.delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn attempt(&self, request: &ApiRequest) -> Result<String, ApiError> {
        let mut builder = self.http.request(request.method.clone(), &request.endpoint);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: request.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                endpoint: request.endpoint.clone(),
            });
        }

        response.text().await.map_err(|source| ApiError::Transport {
            endpoint: request.endpoint.clone(),
            source,
        })
    }
}
