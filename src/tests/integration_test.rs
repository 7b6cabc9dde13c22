use std::time::Duration;

use crate::api::Invoker;
use crate::emulators::probe::{self, EmulatorForm};
use crate::emulators::{EmulatorKind, EmulatorRegistry};
use crate::pubsub::lifecycle::{self, PurgeOptions};
use crate::pubsub::types::{
    MessageForm, SchemaForm, SchemaType, SubscriptionForm, TopicForm, TopicName,
};
use crate::pubsub::{schema, subscription, topic};

use super::emulator_stub;

fn topic_form(name: &str) -> TopicForm {
    TopicForm {
        name: name.to_string(),
        ..TopicForm::default()
    }
}

fn message(text: &str) -> MessageForm {
    MessageForm {
        data: text.to_string(),
        attributes: None,
    }
}

#[tokio::test]
async fn pubsub_end_to_end() {
    let emulator = emulator_stub::spawn("test-project").await;
    let invoker = Invoker::new();

    let created = topic::create_topic(&invoker, &emulator, &topic_form("t1"))
        .await
        .unwrap();
    assert_eq!(created.name.short_name(), "t1");

    let sub = subscription::create_subscription(
        &invoker,
        &emulator,
        &SubscriptionForm {
            name: "s1".to_string(),
            topic: created.name.clone(),
            push_endpoint: None,
        },
    )
    .await
    .unwrap();
    assert!(!sub.is_push());

    let ids = topic::publish_message(&invoker, &emulator, &created.name, &message("hello"))
        .await
        .unwrap();
    assert_eq!(ids.len(), 1);

    let pulled = lifecycle::pull(&invoker, &emulator, &sub.name, 1).await.unwrap();
    assert_eq!(pulled.len(), 1);
    assert_eq!(pulled[0].message.decoded_data().as_deref(), Some("hello"));
    assert!(pulled[0].message.message_id.is_some());
    assert!(pulled[0].message.publish_time.is_some());

    lifecycle::acknowledge(&invoker, &emulator, &sub.name, &[pulled[0].ack_id.clone()])
        .await
        .unwrap();

    let after_ack = lifecycle::pull(&invoker, &emulator, &sub.name, 1).await.unwrap();
    assert!(after_ack.is_empty());
}

#[tokio::test]
async fn listing_reflects_created_resources() {
    let emulator = emulator_stub::spawn("test-project").await;
    let invoker = Invoker::new();

    assert!(topic::list_topics(&invoker, &emulator).await.unwrap().is_empty());

    topic::create_topic(&invoker, &emulator, &topic_form("t1"))
        .await
        .unwrap();
    topic::create_topic(&invoker, &emulator, &topic_form("t2"))
        .await
        .unwrap();

    let topics = topic::list_topics(&invoker, &emulator).await.unwrap();
    assert_eq!(topics.len(), 2);

    let fetched = topic::get_topic(&invoker, &emulator, &topics[0].name)
        .await
        .unwrap();
    assert_eq!(fetched.name, topics[0].name);
}

#[tokio::test]
async fn pull_and_ack_observes_each_message_once() {
    let emulator = emulator_stub::spawn("test-project").await;
    let invoker = Invoker::new();

    let created = topic::create_topic(&invoker, &emulator, &topic_form("t1"))
        .await
        .unwrap();
    let sub = subscription::create_subscription(
        &invoker,
        &emulator,
        &SubscriptionForm {
            name: "s1".to_string(),
            topic: created.name.clone(),
            push_endpoint: None,
        },
    )
    .await
    .unwrap();

    topic::publish_message(&invoker, &emulator, &created.name, &message("only-once"))
        .await
        .unwrap();

    let batch = lifecycle::pull_and_ack(&invoker, &emulator, &sub.name, 10)
        .await
        .unwrap();
    assert_eq!(batch.messages.len(), 1);
    assert!(batch.fully_acked());

    let again = lifecycle::pull_and_ack(&invoker, &emulator, &sub.name, 10)
        .await
        .unwrap();
    assert!(again.messages.is_empty());
    assert!(again.fully_acked());
}

#[tokio::test]
async fn purge_drains_a_static_subscription() {
    let emulator = emulator_stub::spawn("test-project").await;
    let invoker = Invoker::new();

    let created = topic::create_topic(&invoker, &emulator, &topic_form("t1"))
        .await
        .unwrap();
    let sub = subscription::create_subscription(
        &invoker,
        &emulator,
        &SubscriptionForm {
            name: "s1".to_string(),
            topic: created.name.clone(),
            push_endpoint: None,
        },
    )
    .await
    .unwrap();

    for n in 0..5 {
        topic::publish_message(&invoker, &emulator, &created.name, &message(&format!("m{n}")))
            .await
            .unwrap();
    }

    let options = PurgeOptions {
        batch_size: 2,
        max_batches: 100,
    };
    let outcome = lifecycle::purge(&invoker, &emulator, &sub.name, &options)
        .await
        .unwrap();
    assert_eq!(outcome.acked, 5);
    assert!(outcome.drained);

    let after = lifecycle::pull(&invoker, &emulator, &sub.name, 10).await.unwrap();
    assert!(after.is_empty());
}

#[tokio::test]
async fn purge_stops_at_the_batch_cap() {
    let emulator = emulator_stub::spawn("test-project").await;
    let invoker = Invoker::new();

    let created = topic::create_topic(&invoker, &emulator, &topic_form("t1"))
        .await
        .unwrap();
    let sub = subscription::create_subscription(
        &invoker,
        &emulator,
        &SubscriptionForm {
            name: "s1".to_string(),
            topic: created.name.clone(),
            push_endpoint: None,
        },
    )
    .await
    .unwrap();

    for n in 0..5 {
        topic::publish_message(&invoker, &emulator, &created.name, &message(&format!("m{n}")))
            .await
            .unwrap();
    }

    let options = PurgeOptions {
        batch_size: 1,
        max_batches: 3,
    };
    let outcome = lifecycle::purge(&invoker, &emulator, &sub.name, &options)
        .await
        .unwrap();
    assert_eq!(outcome.acked, 3);
    assert!(!outcome.drained);
}

#[tokio::test]
async fn topic_names_with_separators_never_reach_the_wire() {
    let emulator = emulator_stub::spawn("test-project").await;
    let invoker = Invoker::new();

    let err = topic::create_topic(&invoker, &emulator, &topic_form("a/b"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), None);
    assert!(!err.is_transport());

    // Nothing was created under any spliced path.
    assert!(topic::list_topics(&invoker, &emulator).await.unwrap().is_empty());
}

#[tokio::test]
async fn operations_address_resources_by_their_full_name() {
    let emulator = emulator_stub::spawn("test-project").await;
    let invoker = Invoker::new();

    let created = topic::create_topic(&invoker, &emulator, &topic_form("t1"))
        .await
        .unwrap();
    let fetched = topic::get_topic(&invoker, &emulator, &created.name)
        .await
        .unwrap();
    assert_eq!(fetched.name, created.name);

    // A name qualified with another project addresses that project, not the
    // one the connection record happens to carry.
    let foreign = TopicName::new("other-project", "t1");
    let err = topic::get_topic(&invoker, &emulator, &foreign)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn deleting_twice_surfaces_the_emulator_not_found() {
    let emulator = emulator_stub::spawn("test-project").await;
    let invoker = Invoker::new();

    let created = topic::create_topic(&invoker, &emulator, &topic_form("t1"))
        .await
        .unwrap();
    let sub = subscription::create_subscription(
        &invoker,
        &emulator,
        &SubscriptionForm {
            name: "s1".to_string(),
            topic: created.name.clone(),
            push_endpoint: None,
        },
    )
    .await
    .unwrap();

    assert!(
        subscription::delete_subscription(&invoker, &emulator, &sub.name)
            .await
            .unwrap()
    );

    let err = subscription::delete_subscription(&invoker, &emulator, &sub.name)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn subscription_create_requires_an_existing_topic() {
    let emulator = emulator_stub::spawn("test-project").await;
    let invoker = Invoker::new();

    let err = subscription::create_subscription(
        &invoker,
        &emulator,
        &SubscriptionForm {
            name: "s1".to_string(),
            topic: crate::pubsub::types::TopicName::new("test-project", "missing"),
            push_endpoint: None,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn schema_create_is_rejected_by_a_backend_without_schemas() {
    // The stub implements no schema endpoints; the client must surface the
    // emulator's rejection unchanged rather than masking it.
    let emulator = emulator_stub::spawn("test-project").await;
    let invoker = Invoker::new();

    let err = schema::create_schema(
        &invoker,
        &emulator,
        &SchemaForm {
            name: "ord".to_string(),
            schema_type: SchemaType::Avro,
            definition: "{}".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn probing_nothing_listening_reports_disconnected() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mut registry = EmulatorRegistry::new();
    let connected = probe::probe_and_register(
        &mut registry,
        EmulatorForm {
            kind: EmulatorKind::PubSub,
            host: "127.0.0.1".to_string(),
            port,
            project_id: "test-project".to_string(),
        },
        Duration::from_millis(500),
    )
    .await;

    assert!(!connected);
    assert!(!registry.is_connected(EmulatorKind::PubSub));
}

#[tokio::test]
async fn probing_the_stub_connects_the_registry() {
    let emulator = emulator_stub::spawn("test-project").await;
    let mut registry = EmulatorRegistry::new();

    let connected = probe::probe_and_register(
        &mut registry,
        EmulatorForm {
            kind: EmulatorKind::PubSub,
            host: emulator.host.clone(),
            port: emulator.port,
            project_id: emulator.project_id.clone(),
        },
        Duration::from_secs(2),
    )
    .await;

    assert!(connected);
    assert!(registry.is_connected(EmulatorKind::PubSub));
    assert_eq!(registry.get(EmulatorKind::PubSub).unwrap().port, emulator.port);
}
