//! Subscription resource client: list, get, create, delete.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::{ApiRequest, Endpoint, Invoker};
use crate::emulators::Emulator;
use crate::utils::error::ApiError;

use super::types::{Subscription, SubscriptionForm, SubscriptionName, TopicName};

#[derive(Debug, Default, Deserialize)]
struct SubscriptionList {
    #[serde(default)]
    subscriptions: Vec<Subscription>,
}

#[derive(Debug, Default, Deserialize)]
struct SubscriptionNameList {
    #[serde(default)]
    subscriptions: Vec<SubscriptionName>,
}

/// Lists every subscription in the connected project.
pub async fn list_subscriptions(
    invoker: &Invoker,
    emulator: &Emulator,
) -> Result<Vec<Subscription>, ApiError> {
    let endpoint = Endpoint::pubsub(emulator).segment("subscriptions").build()?;
    let content: SubscriptionList = invoker.call(ApiRequest::get(endpoint)).await?;
    Ok(content.subscriptions)
}

/// Lists the names of the subscriptions attached to one topic. The topic
/// listing endpoint is addressed by the fully-qualified topic path and
/// returns names only.
pub async fn list_topic_subscriptions(
    invoker: &Invoker,
    emulator: &Emulator,
    topic: &TopicName,
) -> Result<Vec<SubscriptionName>, ApiError> {
    let endpoint = Endpoint::pubsub_v1(emulator)
        .path(topic.as_str())
        .segment("subscriptions")
        .build()?;
    let content: SubscriptionNameList = invoker.call(ApiRequest::get(endpoint)).await?;
    Ok(content.subscriptions)
}

/// Fetches one subscription, addressed by its fully-qualified name.
pub async fn get_subscription(
    invoker: &Invoker,
    emulator: &Emulator,
    name: &SubscriptionName,
) -> Result<Subscription, ApiError> {
    let endpoint = Endpoint::pubsub_v1(emulator).path(name.as_str()).build()?;
    invoker.call(ApiRequest::get(endpoint)).await
}

/// Creates a subscription bound to an existing topic via PUT-by-name. A
/// `pushConfig` is sent only when the form selected push delivery.
pub async fn create_subscription(
    invoker: &Invoker,
    emulator: &Emulator,
    form: &SubscriptionForm,
) -> Result<Subscription, ApiError> {
    let endpoint = Endpoint::pubsub(emulator)
        .segment("subscriptions")
        .segment(&form.name)
        .build()?;

    let mut body = serde_json::Map::new();
    body.insert("topic".to_string(), json!(form.topic));
    if let Some(push_endpoint) = &form.push_endpoint {
        body.insert(
            "pushConfig".to_string(),
            json!({ "pushEndpoint": push_endpoint }),
        );
    }

    invoker
        .call(ApiRequest::put(endpoint).body(Value::Object(body)))
        .await
}

/// Deletes a subscription. Success is the absence of an error.
pub async fn delete_subscription(
    invoker: &Invoker,
    emulator: &Emulator,
    name: &SubscriptionName,
) -> Result<bool, ApiError> {
    let endpoint = Endpoint::pubsub_v1(emulator).path(name.as_str()).build()?;
    invoker.call_unit(ApiRequest::delete(endpoint)).await?;
    Ok(true)
}
