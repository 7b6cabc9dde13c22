//! Topic resource client: list, get, create, delete, publish.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::{ApiRequest, Endpoint, Invoker};
use crate::emulators::Emulator;
use crate::utils::error::ApiError;

use super::types::{MessageForm, PubsubMessage, Topic, TopicForm, TopicName};

#[derive(Debug, Default, Deserialize)]
struct TopicList {
    #[serde(default)]
    topics: Vec<Topic>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublishResponse {
    #[serde(default)]
    message_ids: Vec<String>,
}

/// Lists every topic in the connected project.
pub async fn list_topics(invoker: &Invoker, emulator: &Emulator) -> Result<Vec<Topic>, ApiError> {
    let endpoint = Endpoint::pubsub(emulator).segment("topics").build()?;
    let content: TopicList = invoker.call(ApiRequest::get(endpoint)).await?;
    Ok(content.topics)
}

/// Fetches one topic, addressed by its fully-qualified name.
pub async fn get_topic(
    invoker: &Invoker,
    emulator: &Emulator,
    name: &TopicName,
) -> Result<Topic, ApiError> {
    let endpoint = Endpoint::pubsub_v1(emulator).path(name.as_str()).build()?;
    invoker.call(ApiRequest::get(endpoint)).await
}

/// Creates a topic via PUT-by-name. A second create with the same name
/// surfaces the emulator's error unchanged; there is no double-create guard
/// here.
pub async fn create_topic(
    invoker: &Invoker,
    emulator: &Emulator,
    form: &TopicForm,
) -> Result<Topic, ApiError> {
    let endpoint = Endpoint::pubsub(emulator)
        .segment("topics")
        .segment(&form.name)
        .build()?;

    let mut body = serde_json::Map::new();
    if let Some(labels) = &form.labels {
        body.insert("labels".to_string(), json!(labels));
    }
    if let Some(duration) = &form.message_retention_duration {
        body.insert("messageRetentionDuration".to_string(), json!(duration));
    }
    if let Some(settings) = &form.schema_settings {
        body.insert("schemaSettings".to_string(), json!(settings));
    }

    invoker
        .call(ApiRequest::put(endpoint).body(Value::Object(body)))
        .await
}

/// Deletes a topic. Success is the absence of an error; the response body
/// carries nothing useful.
pub async fn delete_topic(
    invoker: &Invoker,
    emulator: &Emulator,
    name: &TopicName,
) -> Result<bool, ApiError> {
    let endpoint = Endpoint::pubsub_v1(emulator).path(name.as_str()).build()?;
    invoker.call_unit(ApiRequest::delete(endpoint)).await?;
    Ok(true)
}

/// Publishes one raw-text message, base64-encoding it into a one-element
/// batch. Returns the emulator-assigned message identifiers.
///
/// Topics carrying a schema association expect pre-encoded payloads; no
/// schema validation happens here, so the form boundary must refuse
/// incompatible input before calling this.
pub async fn publish_message(
    invoker: &Invoker,
    emulator: &Emulator,
    topic: &TopicName,
    message: &MessageForm,
) -> Result<Vec<String>, ApiError> {
    let endpoint = Endpoint::pubsub_v1(emulator)
        .path(topic.as_str())
        .verb("publish")
        .build()?;

    let envelope = PubsubMessage::from_text(&message.data, message.attributes.clone());
    let body = json!({ "messages": [envelope] });

    let content: PublishResponse = invoker.call(ApiRequest::post(endpoint).body(body)).await?;
    Ok(content.message_ids)
}
