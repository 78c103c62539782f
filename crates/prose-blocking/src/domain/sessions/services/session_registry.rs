// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::sessions::models::ResourceConnection;
use crate::domain::shared::models::{UserId, UserResourceId};

/// The parts of the session manager the blocking handler depends on. Connection lifecycle is
/// owned by the session manager, we only look up resources and flag their interest in pushes.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait SessionRegistry: Send + Sync {
    async fn online_resources_of(&self, user_id: &UserId) -> Vec<ResourceConnection>;

    /// Returns `false` if the resource is not bound (anymore).
    async fn mark_interested_in_blocklist_push(&self, resource_id: &UserResourceId) -> bool;
}
