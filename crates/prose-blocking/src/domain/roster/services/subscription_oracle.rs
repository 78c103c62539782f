// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use jid::Jid;

use crate::domain::blocking::models::StorageError;
use crate::domain::roster::models::SubscriptionState;
use crate::domain::shared::models::UserId;

/// Read-only view on the roster subsystem.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait SubscriptionOracle: Send + Sync {
    /// Returns `SubscriptionState::None` for contacts that are not in the user's roster.
    async fn subscription_of(
        &self,
        user_id: &UserId,
        contact: &Jid,
    ) -> Result<SubscriptionState, StorageError>;
}
