// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use futures::future::join_all;
use jid::Jid;
use tracing::{debug, trace};
use xmpp_parsers::iq::Iq;

use crate::app::deps::{DynSessionRegistry, DynStanzaDelivery};
use crate::domain::sessions::models::OutboundStanza;
use crate::domain::shared::models::{UserId, UserResourceId};

use super::super::SessionBroadcaster as SessionBroadcasterTrait;

pub struct SessionBroadcaster {
    session_registry: DynSessionRegistry,
    stanza_delivery: DynStanzaDelivery,
}

pub struct SessionBroadcasterDependencies {
    pub session_registry: DynSessionRegistry,
    pub stanza_delivery: DynStanzaDelivery,
}

impl From<SessionBroadcasterDependencies> for SessionBroadcaster {
    fn from(deps: SessionBroadcasterDependencies) -> Self {
        Self {
            session_registry: deps.session_registry,
            stanza_delivery: deps.stanza_delivery,
        }
    }
}

#[async_trait]
impl SessionBroadcasterTrait for SessionBroadcaster {
    async fn replay(&self, push: &Iq, user_id: &UserId) -> usize {
        let deliveries = self
            .session_registry
            .online_resources_of(user_id)
            .await
            .into_iter()
            .filter(|resource| resource.interested_in_blocklist_push)
            .filter_map(|resource| {
                let Some(connection_id) = resource.connection_id else {
                    trace!(
                        "Not sending block list push to {} since it has no connection id.",
                        resource.resource_id
                    );
                    return None;
                };

                let mut iq = push.clone();
                iq.from = None;
                iq.to = Some(Jid::from(resource.resource_id.clone()));

                Some(self.deliver(
                    resource.resource_id,
                    OutboundStanza::to_connection(connection_id, iq),
                ))
            })
            .collect::<Vec<_>>();

        join_all(deliveries)
            .await
            .into_iter()
            .filter(|delivered| *delivered)
            .count()
    }
}

impl SessionBroadcaster {
    async fn deliver(&self, resource_id: UserResourceId, stanza: OutboundStanza) -> bool {
        match self.stanza_delivery.deliver(stanza).await {
            Ok(()) => true,
            Err(err) => {
                debug!("Failed to send block list push to {resource_id}. {err}");
                false
            }
        }
    }
}
