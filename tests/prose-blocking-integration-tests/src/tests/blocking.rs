// prose-core-client/prose-blocking-integration-tests
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use futures::future::join_all;
use pretty_assertions::assert_eq;
use xmpp_parsers::iq::IqType;
use xmpp_parsers::presence::{Presence, Show, Type};
use xmpp_parsers::stanza_error::{DefinedCondition, ErrorType};

use prose_blocking::domain::roster::models::SubscriptionState;
use prose_blocking::AppConfig;

use super::helpers::TestServer;

#[tokio::test]
async fn test_block_then_unblock_restores_list() -> Result<()> {
    let server = TestServer::new();
    let juliet = server.bind("juliet@capulet.lit/balcony");

    server.block(&juliet, &["nurse@capulet.lit"]).await?;
    server
        .block(
            &juliet,
            &["romeo@montague.lit", "iago@shakespeare.lit", "romeo@montague.lit"],
        )
        .await?;

    assert_eq!(
        server.block_list(&juliet).await?,
        vec![
            "iago@shakespeare.lit".to_string(),
            "nurse@capulet.lit".to_string(),
            "romeo@montague.lit".to_string(),
        ]
    );

    server
        .unblock(&juliet, &["romeo@montague.lit", "iago@shakespeare.lit"])
        .await?;
    assert_eq!(
        server.block_list(&juliet).await?,
        vec!["nurse@capulet.lit".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_block_retracts_presence_once() -> Result<()> {
    let server = TestServer::new();
    let balcony = server.bind("juliet@capulet.lit/balcony");
    server.bind("juliet@capulet.lit/chamber");
    server.set_subscription("juliet@capulet.lit", "romeo@montague.lit", SubscriptionState::Both);

    server.block(&balcony, &["romeo@montague.lit"]).await?;
    assert_eq!(
        server.take_presences(),
        vec![
            (
                "unavailable".to_string(),
                "juliet@capulet.lit/balcony".to_string(),
                "romeo@montague.lit".to_string()
            ),
            (
                "unavailable".to_string(),
                "juliet@capulet.lit/chamber".to_string(),
                "romeo@montague.lit".to_string()
            ),
        ]
    );

    // Blocking again leaves the list as is and sends nothing.
    server.block(&balcony, &["romeo@montague.lit"]).await?;
    assert!(server.take_presences().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_block_ignores_contacts_without_subscription() -> Result<()> {
    let server = TestServer::new();
    let juliet = server.bind("juliet@capulet.lit/balcony");

    server.block(&juliet, &["tybalt@capulet.lit"]).await?;
    assert!(server.take_presences().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unblock_probes_and_replays_presence() -> Result<()> {
    let server = TestServer::new();
    let balcony = server.bind("juliet@capulet.lit/balcony");
    let chamber = server.bind("juliet@capulet.lit/chamber");
    server.set_presence(&balcony, Presence::new(Type::None).with_show(Show::Chat));
    server.set_subscription(
        "juliet@capulet.lit",
        "romeo@montague.lit",
        SubscriptionState::From,
    );
    server.set_subscription("juliet@capulet.lit", "nurse@capulet.lit", SubscriptionState::To);

    server
        .block(&chamber, &["romeo@montague.lit", "nurse@capulet.lit"])
        .await?;
    server.take_outbound();

    server
        .unblock(&chamber, &["romeo@montague.lit", "nurse@capulet.lit"])
        .await?;
    assert_eq!(
        server.take_presences(),
        vec![
            (
                "".to_string(),
                "juliet@capulet.lit/balcony".to_string(),
                "nurse@capulet.lit".to_string()
            ),
            (
                "probe".to_string(),
                "juliet@capulet.lit".to_string(),
                "romeo@montague.lit".to_string()
            ),
        ]
    );

    // Unblocking a contact that is not blocked sends nothing.
    server.unblock(&chamber, &["romeo@montague.lit"]).await?;
    assert!(server.take_presences().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_clear_unblocks_everyone() -> Result<()> {
    let server = TestServer::new();
    let juliet = server.bind("juliet@capulet.lit/balcony");
    let contacts = ["romeo@montague.lit", "iago@shakespeare.lit", "nurse@capulet.lit"];
    for contact in contacts {
        server.set_subscription("juliet@capulet.lit", contact, SubscriptionState::From);
    }
    server
        .backend
        .privacy_list_store
        .set_default_list_name(&juliet.to_user_id(), "private");
    let mut updates = server.backend.change_notifier.subscribe();

    server.block(&juliet, &contacts).await?;
    server.take_outbound();
    server.unblock(&juliet, &[]).await?;

    assert_eq!(server.take_presences().len(), contacts.len());
    assert!(server.block_list(&juliet).await?.is_empty());

    let block_event = updates.recv().await?;
    let clear_event = updates.recv().await?;
    assert_eq!(block_event, clear_event);
    assert_eq!(clear_event.list_name, "private");
    assert_eq!(clear_event.resource_id, juliet);
    Ok(())
}

#[tokio::test]
async fn test_targeted_unblock_publishes_no_update() -> Result<()> {
    let server = TestServer::new();
    let juliet = server.bind("juliet@capulet.lit/balcony");
    let mut updates = server.backend.change_notifier.subscribe();

    server.block(&juliet, &["romeo@montague.lit"]).await?;
    server.unblock(&juliet, &["romeo@montague.lit"]).await?;

    assert_eq!(updates.recv().await?.list_name, "default");
    assert!(updates.try_recv().is_err());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_blocks_of_same_contact() -> Result<()> {
    let server = Arc::new(TestServer::new());
    let juliet = server.bind("juliet@capulet.lit/balcony");
    server.set_subscription("juliet@capulet.lit", "romeo@montague.lit", SubscriptionState::Both);

    let tasks = (0..16).map(|_| {
        let server = server.clone();
        let juliet = juliet.clone();
        tokio::spawn(async move { server.block(&juliet, &["romeo@montague.lit"]).await })
    });
    for result in join_all(tasks).await {
        result??;
    }

    assert_eq!(
        server.block_list(&juliet).await?,
        vec!["romeo@montague.lit".to_string()]
    );
    assert_eq!(server.take_presences().len(), 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_block_and_unblock_stay_consistent() -> Result<()> {
    let server = Arc::new(TestServer::new());
    let juliet = server.bind("juliet@capulet.lit/balcony");
    server.set_presence(&juliet, Presence::new(Type::None));
    server.set_subscription("juliet@capulet.lit", "romeo@montague.lit", SubscriptionState::To);

    let tasks = (0..32).map(|idx| {
        let server = server.clone();
        let juliet = juliet.clone();
        tokio::spawn(async move {
            if idx % 2 == 0 {
                server.block(&juliet, &["romeo@montague.lit"]).await
            } else {
                server.unblock(&juliet, &["romeo@montague.lit"]).await
            }
        })
    });
    for result in join_all(tasks).await {
        result??;
    }

    let presences = server.take_presences();
    let retractions = presences
        .iter()
        .filter(|(kind, _, _)| kind == "unavailable")
        .count();
    let replays = presences.len() - retractions;
    let is_blocked = !server.block_list(&juliet).await?.is_empty();

    // Retractions and replays alternate, starting with a retraction.
    assert_eq!(retractions - replays, usize::from(is_blocked));
    Ok(())
}

#[tokio::test]
async fn test_storage_failure_is_reported_as_database_error() -> Result<()> {
    let server = TestServer::with_config(AppConfig {
        store_timeout: Duration::from_millis(250),
        ..Default::default()
    });
    let juliet = server.bind("juliet@capulet.lit/balcony");
    server.backend.privacy_list_store.set_available(false);

    let response = server
        .send(
            &juliet,
            r#"<iq xmlns="jabber:client" type="set" id="block1">
                <block xmlns="urn:xmpp:blocking"><item jid="romeo@montague.lit"/></block>
            </iq>"#,
        )
        .await
        .expect("Expected a response");

    let IqType::Error(error) = response.payload else {
        panic!("Expected an error response");
    };
    assert_eq!(error.type_, ErrorType::Wait);
    assert_eq!(error.defined_condition, DefinedCondition::InternalServerError);
    assert_eq!(
        error.texts.values().cloned().collect::<Vec<_>>(),
        vec!["Database error".to_string()]
    );
    assert!(server.take_outbound().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_rejects_empty_block() -> Result<()> {
    let server = TestServer::new();
    let juliet = server.bind("juliet@capulet.lit/balcony");

    let response = server
        .send(
            &juliet,
            r#"<iq xmlns="jabber:client" type="set" id="block1">
                <block xmlns="urn:xmpp:blocking"/>
            </iq>"#,
        )
        .await
        .expect("Expected a response");

    let IqType::Error(error) = response.payload else {
        panic!("Expected an error response");
    };
    assert_eq!(error.defined_condition, DefinedCondition::BadRequest);
    Ok(())
}

#[tokio::test]
async fn test_unblock_with_foreign_children_keeps_list() -> Result<()> {
    let server = TestServer::new();
    let juliet = server.bind("juliet@capulet.lit/balcony");
    let mut updates = server.backend.change_notifier.subscribe();

    server
        .block(&juliet, &["romeo@montague.lit", "iago@shakespeare.lit"])
        .await?;
    updates.recv().await?;
    server.take_outbound();

    let response = server
        .send(
            &juliet,
            r#"<iq xmlns="jabber:client" type="set" id="unblock1">
                <unblock xmlns="urn:xmpp:blocking">
                    <item xmlns="urn:example:other" jid="romeo@montague.lit"/>
                </unblock>
            </iq>"#,
        )
        .await
        .expect("Expected a response");

    let IqType::Error(error) = response.payload else {
        panic!("Expected an error response");
    };
    assert_eq!(error.defined_condition, DefinedCondition::BadRequest);
    assert_eq!(
        server.block_list(&juliet).await?,
        vec![
            "iago@shakespeare.lit".to_string(),
            "romeo@montague.lit".to_string(),
        ]
    );
    assert!(updates.try_recv().is_err());
    assert!(server.take_outbound().is_empty());
    Ok(())
}
