//! Wire types for the Pub/Sub emulator REST contract.
//!
//! Resources are addressed by their fully-qualified name
//! (`projects/{p}/topics/{t}` and friends); the short name is a display
//! projection only and is never used for addressing. Message payloads travel
//! base64-encoded inside the JSON envelope.

use std::collections::HashMap;
use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! resource_name {
    ($name:ident, $plural:literal) => {
        /// Fully-qualified resource name.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Builds the fully-qualified name from a project and a short name.
            pub fn new(project_id: &str, short_name: &str) -> Self {
                Self(format!(concat!("projects/{}/", $plural, "/{}"), project_id, short_name))
            }

            /// Wraps an already fully-qualified name as returned by the emulator.
            pub fn from_full(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Display projection with the `projects/{p}/...` prefix stripped.
            pub fn short_name(&self) -> &str {
                self.0.rsplit('/').next().unwrap_or(&self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

resource_name!(TopicName, "topics");
resource_name!(SubscriptionName, "subscriptions");
resource_name!(SchemaName, "schemas");

/// A topic as returned by the emulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub name: TopicName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_retention_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_settings: Option<SchemaSettings>,
}

/// Schema association carried by a topic. Messages published to such a
/// topic must already satisfy the schema; this client does not validate
/// payload encodings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSettings {
    pub schema: SchemaName,
    pub encoding: SchemaEncoding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaEncoding {
    EncodingUnspecified,
    Json,
    Binary,
}

/// A subscription bound to one topic. Presence of `push_config`
/// distinguishes push delivery from pull delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub name: SubscriptionName,
    pub topic: TopicName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_config: Option<PushConfig>,
}

impl Subscription {
    pub fn is_push(&self) -> bool {
        self.push_config.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushConfig {
    pub push_endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
}

/// A schema. Never mutated after creation; there is no update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub name: SchemaName,
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_create_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    ProtocolBuffer,
    Avro,
}

/// Message envelope inside publish requests and pull responses. `data` is
/// base64 text; `message_id` and `publish_time` are assigned by the
/// emulator and absent on publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PubsubMessage {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<DateTime<Utc>>,
}

impl PubsubMessage {
    /// Wraps raw text into a publishable message, base64-encoding the
    /// payload.
    pub fn from_text(text: &str, attributes: Option<HashMap<String, String>>) -> Self {
        Self {
            data: BASE64.encode(text),
            attributes,
            message_id: None,
            publish_time: None,
        }
    }

    /// Decodes the payload back to text. `None` when the payload is not
    /// valid base64 or not UTF-8; the UI falls back to showing the raw
    /// envelope in that case.
    pub fn decoded_data(&self) -> Option<String> {
        let bytes = BASE64.decode(&self.data).ok()?;
        String::from_utf8(bytes).ok()
    }
}

/// One delivered message from a pull response. The ack identifier is an
/// opaque single-use token, valid for exactly one acknowledgment attempt
/// against the subscription it was pulled from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedMessage {
    pub ack_id: String,
    pub message: PubsubMessage,
}

/// Topic creation form, as filled in by the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicForm {
    /// Short name; the fully-qualified name is derived from the connection
    /// record's project.
    pub name: String,
    pub labels: Option<HashMap<String, String>>,
    pub message_retention_duration: Option<String>,
    pub schema_settings: Option<SchemaSettings>,
}

/// Subscription creation form. A push endpoint, when present, selects push
/// delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionForm {
    pub name: String,
    pub topic: TopicName,
    pub push_endpoint: Option<String>,
}

/// Schema creation form.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaForm {
    pub name: String,
    pub schema_type: SchemaType,
    pub definition: String,
}

/// Publish form: raw text plus optional attributes. The text is
/// base64-encoded on the way out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageForm {
    pub data: String,
    pub attributes: Option<HashMap<String, String>>,
}
