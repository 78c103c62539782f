// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::domain::sessions::models::{DeliveryError, OutboundStanza};
use crate::domain::sessions::services::StanzaDelivery;
use crate::infra::sessions::InMemorySessionRegistry;

/// Hands outbound stanzas to a channel drained by the router. Stanzas addressed to a
/// connection which is not bound anymore are rejected.
pub struct ChannelStanzaDelivery {
    session_registry: Arc<InMemorySessionRegistry>,
    sender: UnboundedSender<OutboundStanza>,
}

impl ChannelStanzaDelivery {
    pub fn new(
        session_registry: Arc<InMemorySessionRegistry>,
    ) -> (Self, UnboundedReceiver<OutboundStanza>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                session_registry,
                sender,
            },
            receiver,
        )
    }
}

#[async_trait]
impl StanzaDelivery for ChannelStanzaDelivery {
    async fn deliver(&self, stanza: OutboundStanza) -> Result<(), DeliveryError> {
        if let Some(connection_id) = &stanza.connection_id {
            if !self.session_registry.is_connected(connection_id) {
                return Err(DeliveryError::ConnectionGone {
                    connection_id: connection_id.clone(),
                });
            }
        }

        self.sender
            .send(stanza)
            .map_err(|_| DeliveryError::TransportClosed)
    }
}
