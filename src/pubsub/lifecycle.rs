//! Message lifecycle engine: pull, acknowledge, pull-and-ack, purge.
//!
//! Delivery is at-least-once on the emulator side. A pulled message stays
//! pending until its single-use ack identifier is acknowledged against the
//! subscription it was pulled from; everything here sequences pull before
//! ack for exactly that reason.

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::api::{ApiRequest, Endpoint, Invoker};
use crate::config::PurgeSettings;
use crate::emulators::Emulator;
use crate::utils::error::ApiError;

use super::types::{ReceivedMessage, SubscriptionName};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullResponse {
    #[serde(default)]
    received_messages: Vec<ReceivedMessage>,
}

/// Result of [`pull_and_ack`]. The messages were delivered either way; when
/// `ack_error` is set the acknowledgment batch failed and the emulator may
/// redeliver them later.
#[derive(Debug)]
pub struct PulledBatch {
    pub messages: Vec<ReceivedMessage>,
    pub ack_error: Option<ApiError>,
}

impl PulledBatch {
    /// True when every pulled message was acknowledged.
    pub fn fully_acked(&self) -> bool {
        self.ack_error.is_none()
    }
}

/// Bounds for the purge loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeOptions {
    /// Messages requested per pull.
    pub batch_size: u32,
    /// Upper bound on pull-and-ack iterations. Without it a concurrently
    /// refilled subscription would keep the loop alive forever.
    pub max_batches: u32,
}

impl Default for PurgeOptions {
    fn default() -> Self {
        Self {
            batch_size: 100,
            max_batches: 1000,
        }
    }
}

impl From<&PurgeSettings> for PurgeOptions {
    fn from(settings: &PurgeSettings) -> Self {
        Self {
            batch_size: settings.batch_size,
            max_batches: settings.max_batches,
        }
    }
}

/// Result of a [`purge`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeOutcome {
    /// Messages acknowledged over the whole run.
    pub acked: u64,
    /// True when the loop observed an empty pull; false when it stopped at
    /// the batch cap first.
    pub drained: bool,
}

/// Pulls up to `max_messages` from the subscription. Returns immediately,
/// possibly with an empty batch; nothing is acknowledged implicitly.
pub async fn pull(
    invoker: &Invoker,
    emulator: &Emulator,
    subscription: &SubscriptionName,
    max_messages: u32,
) -> Result<Vec<ReceivedMessage>, ApiError> {
    let endpoint = Endpoint::pubsub_v1(emulator)
        .path(subscription.as_str())
        .verb("pull")
        .build()?;

    let body = json!({
        "returnImmediately": true,
        "maxMessages": max_messages,
    });

    let content: PullResponse = invoker.call(ApiRequest::post(endpoint).body(body)).await?;
    Ok(content.received_messages)
}

/// Acknowledges a batch of ack identifiers in one request. Success is the
/// emulator answering without an error; no per-message ack status exists at
/// this granularity. An empty batch is a no-op.
pub async fn acknowledge(
    invoker: &Invoker,
    emulator: &Emulator,
    subscription: &SubscriptionName,
    ack_ids: &[String],
) -> Result<(), ApiError> {
    if ack_ids.is_empty() {
        return Ok(());
    }

    let endpoint = Endpoint::pubsub_v1(emulator)
        .path(subscription.as_str())
        .verb("acknowledge")
        .build()?;

    invoker
        .call_unit(ApiRequest::post(endpoint).body(json!({ "ackIds": ack_ids })))
        .await
}

/// Pulls once and immediately acknowledges everything that arrived.
///
/// A pull failure propagates. An ack failure does not fail the call - the
/// messages were delivered and are returned regardless - but it is reported
/// in [`PulledBatch::ack_error`] so callers can tell "acked" from "may be
/// redelivered" instead of mistaking redelivery for data loss.
pub async fn pull_and_ack(
    invoker: &Invoker,
    emulator: &Emulator,
    subscription: &SubscriptionName,
    max_messages: u32,
) -> Result<PulledBatch, ApiError> {
    let messages = pull(invoker, emulator, subscription, max_messages).await?;

    let mut ack_error = None;
    if !messages.is_empty() {
        let ack_ids: Vec<String> = messages.iter().map(|m| m.ack_id.clone()).collect();
        if let Err(err) = acknowledge(invoker, emulator, subscription, &ack_ids).await {
            warn!(
                subscription = %subscription,
                error = %err,
                "acknowledge after pull failed, messages may be redelivered"
            );
            ack_error = Some(err);
        }
    }

    Ok(PulledBatch {
        messages,
        ack_error,
    })
}

/// Drains the subscription: pulls batches and acknowledges each one until a
/// pull comes back empty or the batch cap is hit.
///
/// Any pull or ack failure aborts the run with that error. The cap exists
/// because another publisher racing the purge could refill the subscription
/// indefinitely.
pub async fn purge(
    invoker: &Invoker,
    emulator: &Emulator,
    subscription: &SubscriptionName,
    options: &PurgeOptions,
) -> Result<PurgeOutcome, ApiError> {
    let mut acked: u64 = 0;

    for batch in 0..options.max_batches {
        let messages = pull(invoker, emulator, subscription, options.batch_size).await?;
        if messages.is_empty() {
            debug!(subscription = %subscription, acked, batches = batch, "purge drained the subscription");
            return Ok(PurgeOutcome {
                acked,
                drained: true,
            });
        }

        let ack_ids: Vec<String> = messages.iter().map(|m| m.ack_id.clone()).collect();
        acknowledge(invoker, emulator, subscription, &ack_ids).await?;
        acked += ack_ids.len() as u64;
    }

    warn!(
        subscription = %subscription,
        acked,
        "purge stopped at the batch cap before the subscription drained"
    );
    Ok(PurgeOutcome {
        acked,
        drained: false,
    })
}
