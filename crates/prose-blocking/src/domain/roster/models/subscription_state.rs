// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumString};

/// The subscription state between a user and one of their contacts as reported by the roster
/// subsystem. `To` means the contact receives the user's presence, `From` means the user
/// receives the contact's presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SubscriptionState {
    #[default]
    None,
    To,
    From,
    Both,
}

impl SubscriptionState {
    /// Whether the contact is allowed to see the presence of the user, i.e. presence changes of
    /// the user must be retracted from or replayed to the contact when the block list changes.
    pub fn contact_sees_user(&self) -> bool {
        matches!(self, SubscriptionState::To | SubscriptionState::Both)
    }

    /// Whether the user is allowed to see the presence of the contact, i.e. the user needs to
    /// probe the contact after unblocking it.
    pub fn user_sees_contact(&self) -> bool {
        matches!(self, SubscriptionState::From | SubscriptionState::Both)
    }
}
