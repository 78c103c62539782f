// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use xmpp_parsers::presence::Presence;

use crate::domain::shared::models::{ConnectionId, UserResourceId};

/// A snapshot of one bound resource of a user as seen by the session registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceConnection {
    pub resource_id: UserResourceId,
    /// `None` as long as the resource is not attached to a stream.
    pub connection_id: Option<ConnectionId>,
    /// Set once the resource requested the block list. Lives and dies with the connection.
    pub interested_in_blocklist_push: bool,
    /// The last presence broadcast by this resource. Replaced as a whole on every update.
    pub last_presence: Option<Arc<Presence>>,
}

impl ResourceConnection {
    pub fn new(resource_id: UserResourceId, connection_id: ConnectionId) -> Self {
        Self {
            resource_id,
            connection_id: Some(connection_id),
            interested_in_blocklist_push: false,
            last_presence: None,
        }
    }
}
