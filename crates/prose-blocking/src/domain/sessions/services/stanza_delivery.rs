// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::sessions::models::{DeliveryError, OutboundStanza};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait StanzaDelivery: Send + Sync {
    async fn deliver(&self, stanza: OutboundStanza) -> Result<(), DeliveryError>;
}
