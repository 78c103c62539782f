// prose-core-client/prose-blocking-integration-tests
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use prose_blocking_xmpp::{BlockingCommand, BlockingRequest};

use super::helpers::TestServer;

#[tokio::test]
async fn test_push_reaches_interested_connections_only() -> Result<()> {
    let server = TestServer::new();
    let balcony = server.bind("juliet@capulet.lit/balcony");
    let chamber = server.bind("juliet@capulet.lit/chamber");
    let garden = server.bind("juliet@capulet.lit/garden");

    server.block_list(&balcony).await?;
    server.block_list(&garden).await?;

    server.block(&chamber, &["romeo@montague.lit"]).await?;

    let mut pushes = server
        .take_outbound()
        .into_iter()
        .filter(|stanza| stanza.stanza.name() == "iq")
        .collect::<Vec<_>>();
    pushes.sort_by_key(|push| push.stanza.attr("to").unwrap_or_default().to_string());

    assert_eq!(
        pushes
            .iter()
            .map(|push| push.stanza.attr("to").unwrap_or_default())
            .collect::<Vec<_>>(),
        vec!["juliet@capulet.lit/balcony", "juliet@capulet.lit/garden"]
    );

    for push in pushes {
        assert!(push.connection_id.is_some());
        assert_eq!(push.stanza.attr("from"), None);

        let iq = xmpp_parsers::iq::Iq::try_from(push.stanza)?;
        assert_eq!(
            BlockingRequest::from_iq(&iq)?.map(|request| request.command),
            Some(BlockingCommand::Block {
                items: vec!["romeo@montague.lit".parse()?]
            })
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_issuing_connection_receives_its_own_push() -> Result<()> {
    let server = TestServer::new();
    let balcony = server.bind("juliet@capulet.lit/balcony");

    server.block_list(&balcony).await?;
    server.unblock(&balcony, &[]).await?;

    let pushes = server
        .take_outbound()
        .into_iter()
        .filter(|stanza| stanza.stanza.name() == "iq")
        .collect::<Vec<_>>();

    assert_eq!(pushes.len(), 1);
    assert_eq!(
        pushes[0].stanza.attr("to"),
        Some("juliet@capulet.lit/balcony")
    );
    Ok(())
}

#[tokio::test]
async fn test_interest_ends_with_the_connection() -> Result<()> {
    let server = TestServer::new();
    let balcony = server.bind("juliet@capulet.lit/balcony");
    let chamber = server.bind("juliet@capulet.lit/chamber");

    server.block_list(&balcony).await?;
    server.backend.session_registry.unbind(&balcony);
    server.bind("juliet@capulet.lit/balcony");

    server.block(&chamber, &["romeo@montague.lit"]).await?;

    assert!(server
        .take_outbound()
        .iter()
        .all(|stanza| stanza.stanza.name() != "iq"));
    Ok(())
}

#[tokio::test]
async fn test_other_users_do_not_receive_pushes() -> Result<()> {
    let server = TestServer::new();
    let juliet = server.bind("juliet@capulet.lit/balcony");
    let romeo = server.bind("romeo@montague.lit/orchard");

    server.block_list(&romeo).await?;
    server.block(&juliet, &["tybalt@capulet.lit"]).await?;

    assert!(server.take_outbound().is_empty());
    assert!(server.block_list(&romeo).await?.is_empty());
    Ok(())
}
