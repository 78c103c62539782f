// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use jid::Jid;
use xmpp_parsers::presence::{Presence, Type};

use crate::domain::shared::models::{UserId, UserResourceId};

/// A presence stanza that needs to be sent as a side effect of a block list change.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannedPresence {
    /// Retracts the presence of a resource from a blocked contact.
    Unavailable { from: UserResourceId, to: Jid },
    /// Asks an unblocked contact for its current presence.
    Probe { from: UserId, to: Jid },
    /// Sends the last known presence of a resource to an unblocked contact.
    Replay {
        from: UserResourceId,
        to: Jid,
        presence: Arc<Presence>,
    },
}

impl From<PlannedPresence> for Presence {
    fn from(value: PlannedPresence) -> Self {
        match value {
            PlannedPresence::Unavailable { from, to } => Presence::new(Type::Unavailable)
                .with_from(Jid::from(from))
                .with_to(to),
            PlannedPresence::Probe { from, to } => Presence::new(Type::Probe)
                .with_from(Jid::from(from))
                .with_to(to),
            PlannedPresence::Replay { from, to, presence } => {
                let mut presence = Presence::clone(&presence);
                presence.from = Some(Jid::from(from));
                presence.to = Some(to);
                presence
            }
        }
    }
}
