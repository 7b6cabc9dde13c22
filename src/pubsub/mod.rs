//! The `pubsub` module drives the Pub/Sub emulator REST API.
//!
//! Resource clients for topics, subscriptions and schemas live in their own
//! files; the message lifecycle engine (pull, acknowledge, pull-and-ack,
//! purge) composes them in `lifecycle`. Every operation takes the invoker
//! plus the active connection record and borrows both only for the duration
//! of the call.

pub mod lifecycle;
pub mod schema;
pub mod subscription;
pub mod topic;
pub mod types;
