// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use xmpp_parsers::iq::Iq;

use crate::domain::shared::models::UserId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait SessionBroadcaster: Send + Sync {
    /// Sends a copy of `push` to every resource of `user_id` that asked for the block list
    /// before. Returns the number of resources the push was handed to.
    async fn replay(&self, push: &Iq, user_id: &UserId) -> usize;
}
