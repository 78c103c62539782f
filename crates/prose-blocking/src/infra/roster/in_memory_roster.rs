// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use async_trait::async_trait;
use jid::{BareJid, Jid};
use parking_lot::RwLock;

use crate::domain::blocking::models::StorageError;
use crate::domain::roster::models::SubscriptionState;
use crate::domain::roster::services::SubscriptionOracle;
use crate::domain::shared::models::UserId;

/// Roster items keyed by the owning user and the contact's bare JID.
#[derive(Debug, Default)]
pub struct InMemoryRoster {
    items: RwLock<HashMap<(UserId, BareJid), SubscriptionState>>,
}

impl InMemoryRoster {
    pub fn set_subscription(
        &self,
        user_id: &UserId,
        contact: &BareJid,
        subscription: SubscriptionState,
    ) {
        self.items
            .write()
            .insert((user_id.clone(), contact.clone()), subscription);
    }
}

#[async_trait]
impl SubscriptionOracle for InMemoryRoster {
    async fn subscription_of(
        &self,
        user_id: &UserId,
        contact: &Jid,
    ) -> Result<SubscriptionState, StorageError> {
        let key = (user_id.clone(), contact.to_bare());
        Ok(self.items.read().get(&key).copied().unwrap_or_default())
    }
}
