// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;
use xmpp_parsers::presence::Presence;

use crate::domain::sessions::models::ResourceConnection;
use crate::domain::sessions::services::SessionRegistry;
use crate::domain::shared::models::{ConnectionId, UserId, UserResourceId};

/// Tracks the bound resources of all users.
#[derive(Debug, Default)]
pub struct InMemorySessionRegistry {
    resources: RwLock<HashMap<UserId, Vec<ResourceConnection>>>,
}

impl InMemorySessionRegistry {
    /// Binds `resource_id` to a new connection, replacing any previous binding of that resource.
    pub fn bind(&self, resource_id: UserResourceId) -> ConnectionId {
        let connection_id = ConnectionId::random();
        self.bind_resource(ResourceConnection::new(resource_id, connection_id.clone()));
        connection_id
    }

    pub fn bind_resource(&self, connection: ResourceConnection) {
        let mut resources = self.resources.write();
        let user_resources = resources
            .entry(connection.resource_id.to_user_id())
            .or_default();
        user_resources.retain(|r| r.resource_id != connection.resource_id);
        user_resources.push(connection);
    }

    /// Drops the resource together with its interest in block list pushes.
    pub fn unbind(&self, resource_id: &UserResourceId) {
        let user_id = resource_id.to_user_id();
        let mut resources = self.resources.write();
        let Some(user_resources) = resources.get_mut(&user_id) else {
            return;
        };
        user_resources.retain(|r| &r.resource_id != resource_id);
        if user_resources.is_empty() {
            resources.remove(&user_id);
        }
    }

    /// Replaces the last known presence of `resource_id`. Returns `false` if it is not bound.
    pub fn update_presence(&self, resource_id: &UserResourceId, presence: Presence) -> bool {
        self.update_resource(resource_id, |r| r.last_presence = Some(Arc::new(presence)))
    }

    pub fn is_connected(&self, connection_id: &ConnectionId) -> bool {
        self.resources
            .read()
            .values()
            .flatten()
            .any(|r| r.connection_id.as_ref() == Some(connection_id))
    }

    fn update_resource(
        &self,
        resource_id: &UserResourceId,
        update: impl FnOnce(&mut ResourceConnection),
    ) -> bool {
        let mut resources = self.resources.write();
        let Some(resource) = resources
            .get_mut(&resource_id.to_user_id())
            .and_then(|resources| resources.iter_mut().find(|r| &r.resource_id == resource_id))
        else {
            return false;
        };
        update(resource);
        true
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn online_resources_of(&self, user_id: &UserId) -> Vec<ResourceConnection> {
        self.resources
            .read()
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn mark_interested_in_blocklist_push(&self, resource_id: &UserResourceId) -> bool {
        let marked = self.update_resource(resource_id, |r| r.interested_in_blocklist_push = true);
        if marked {
            debug!("{resource_id} is now interested in block list pushes.");
        }
        marked
    }
}
