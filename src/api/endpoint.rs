//! Typed endpoint builders for the emulator REST surfaces.
//!
//! Every emulator URL has the shape
//! `http://{host}:{port}/{service_base}/{segments...}[:{verb}][?query]`.
//! The per-service constructors pin the base path so resource clients only
//! append segments, which keeps the path grammar in one place instead of
//! scattered format strings.

use crate::emulators::Emulator;
use crate::utils::error::ApiError;

/// Builder for one emulator endpoint URL.
///
/// Appending a segment that carries a separator poisons the builder; the
/// error surfaces from [`Endpoint::build`], so no request is ever sent to a
/// spliced path.
#[derive(Debug, Clone)]
pub struct Endpoint {
    url: String,
    has_query: bool,
    invalid: Option<String>,
}

impl Endpoint {
    fn with_base(url: String) -> Self {
        Self {
            url,
            has_query: false,
            invalid: None,
        }
    }

    /// Bare service root, `http://{host}:{port}`. Used by reachability
    /// probes that have no better health path.
    pub fn service_root(emulator: &Emulator) -> Self {
        Self::with_base(format!("http://{}:{}", emulator.host, emulator.port))
    }

    /// Pub/Sub project base, `http://{host}:{port}/v1/projects/{project}`.
    pub fn pubsub(emulator: &Emulator) -> Self {
        Self::with_base(format!(
            "http://{}:{}/v1/projects/{}",
            emulator.host, emulator.port, emulator.project_id
        ))
    }

    /// Pub/Sub API version base, `http://{host}:{port}/v1`. Used for calls
    /// addressed by a fully-qualified resource path rather than a project.
    pub fn pubsub_v1(emulator: &Emulator) -> Self {
        Self::with_base(format!("http://{}:{}/v1", emulator.host, emulator.port))
    }

    /// BigQuery project base, `http://{host}:{port}/bigquery/v2/projects/{project}`.
    pub fn bigquery(emulator: &Emulator) -> Self {
        Self::with_base(format!(
            "http://{}:{}/bigquery/v2/projects/{}",
            emulator.host, emulator.port, emulator.project_id
        ))
    }

    /// Firestore project base, `http://{host}:{port}/v1/{project}`.
    pub fn firestore(emulator: &Emulator) -> Self {
        Self::with_base(format!(
            "http://{}:{}/v1/{}",
            emulator.host, emulator.port, emulator.project_id
        ))
    }

    /// Append one path segment. Segments come straight from UI forms, so an
    /// empty name or one carrying `/`, `?`, `#` or `:` marks the builder
    /// invalid instead of silently addressing a different resource.
    pub fn segment(mut self, segment: &str) -> Self {
        if segment.is_empty() || segment.contains(['/', '?', '#', ':']) {
            self.invalid.get_or_insert_with(|| segment.to_string());
            return self;
        }
        self.url.push('/');
        self.url.push_str(segment);
        self
    }

    /// Append a fully-qualified resource path such as
    /// `projects/{p}/topics/{t}`, which legitimately contains separators.
    /// Qualified names are assembled by the name types, not typed by users,
    /// so no separator check applies here.
    pub fn path(mut self, path: &str) -> Self {
        self.url.push('/');
        self.url.push_str(path.trim_start_matches('/'));
        self
    }

    /// Append a Pub/Sub verb suffix (`:publish`, `:pull`, `:acknowledge`).
    /// The verb is given without the colon and obeys the same separator rule
    /// as segments.
    pub fn verb(mut self, verb: &str) -> Self {
        if verb.is_empty() || verb.contains(['/', '?', '#', ':']) {
            self.invalid.get_or_insert_with(|| verb.to_string());
            return self;
        }
        self.url.push(':');
        self.url.push_str(verb);
        self
    }

    /// Append a query parameter. The value is percent-encoded so reserved
    /// characters cannot terminate or extend the query string.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.url.push(if self.has_query { '&' } else { '?' });
        self.has_query = true;
        self.url.push_str(key);
        self.url.push('=');
        self.url.push_str(&urlencoding::encode(value));
        self
    }

    /// Final URL string, or [`ApiError::InvalidName`] when any appended
    /// piece carried a separator.
    pub fn build(self) -> Result<String, ApiError> {
        match self.invalid {
            Some(name) => Err(ApiError::InvalidName {
                name,
                endpoint: self.url,
            }),
            None => Ok(self.url),
        }
    }
}
