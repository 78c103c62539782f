// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{UserId, UserResourceId};

/// Fired whenever a blocking command changed the privacy list of a user, so that other parts of
/// the server (e.g. the privacy list enforcement of other sessions) can reload it.
#[derive(Debug, Clone, PartialEq)]
pub struct PrivacyListUpdatedEvent {
    /// The resource that issued the command.
    pub resource_id: UserResourceId,
    pub user_id: UserId,
    pub list_name: String,
}
