// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

//! Computes the presence stanzas a block list change entails. Everything in here is free of I/O
//! and works on snapshots taken after the block list was mutated.

use jid::Jid;

use crate::domain::blocking::models::PlannedPresence;
use crate::domain::roster::models::SubscriptionState;
use crate::domain::sessions::models::ResourceConnection;
use crate::domain::shared::models::UserId;

/// Plans the presences to send after `contact` was blocked: every online resource of the user
/// becomes unavailable for the contact if the contact could see it before.
pub fn plan_block(
    subscription: SubscriptionState,
    resources: &[ResourceConnection],
    contact: &Jid,
) -> Vec<PlannedPresence> {
    if !subscription.contact_sees_user() {
        return vec![];
    }

    resources
        .iter()
        .map(|resource| PlannedPresence::Unavailable {
            from: resource.resource_id.clone(),
            to: contact.clone(),
        })
        .collect()
}

/// Plans the presences to send after `contact` was unblocked: the user probes the contact if it
/// may see the contact's presence, and every online resource replays its last presence to the
/// contact if the contact may see the user's presence.
pub fn plan_unblock(
    subscription: SubscriptionState,
    user_id: &UserId,
    resources: &[ResourceConnection],
    contact: &Jid,
) -> Vec<PlannedPresence> {
    let mut plan = vec![];

    if subscription.user_sees_contact() {
        plan.push(PlannedPresence::Probe {
            from: user_id.clone(),
            to: contact.clone(),
        });
    }

    if subscription.contact_sees_user() {
        plan.extend(resources.iter().filter_map(|resource| {
            let presence = resource.last_presence.as_ref()?;
            Some(PlannedPresence::Replay {
                from: resource.resource_id.clone(),
                to: contact.clone(),
                presence: presence.clone(),
            })
        }));
    }

    plan
}
