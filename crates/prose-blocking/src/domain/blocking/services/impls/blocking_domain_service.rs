// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;
use std::future::Future;

use async_trait::async_trait;
use itertools::Itertools;
use jid::Jid;
use tracing::{debug, error, info, warn};
use xmpp_parsers::presence::Presence;

use prose_blocking_xmpp::{BlockingCommand, BlockingRequest};

use crate::app::deps::{
    DynAppContext, DynChangeNotifier, DynPrivacyListStore, DynSessionBroadcaster,
    DynSessionRegistry, DynStanzaDelivery, DynSubscriptionOracle, DynUserLocks,
};
use crate::domain::blocking::models::{
    BlockingError, CommandResponse, PlannedPresence, PrivacyListUpdatedEvent, StorageError,
};
use crate::domain::blocking::services::presence_transition_planner::{plan_block, plan_unblock};
use crate::domain::sessions::models::{OutboundStanza, ResourceConnection};
use crate::domain::shared::models::{UserId, UserResourceId};

use super::super::BlockingDomainService as BlockingDomainServiceTrait;

pub struct BlockingDomainService {
    ctx: DynAppContext,
    change_notifier: DynChangeNotifier,
    privacy_list_store: DynPrivacyListStore,
    session_broadcaster: DynSessionBroadcaster,
    session_registry: DynSessionRegistry,
    stanza_delivery: DynStanzaDelivery,
    subscription_oracle: DynSubscriptionOracle,
    user_locks: DynUserLocks,
}

pub struct BlockingDomainServiceDependencies {
    pub ctx: DynAppContext,
    pub change_notifier: DynChangeNotifier,
    pub privacy_list_store: DynPrivacyListStore,
    pub session_broadcaster: DynSessionBroadcaster,
    pub session_registry: DynSessionRegistry,
    pub stanza_delivery: DynStanzaDelivery,
    pub subscription_oracle: DynSubscriptionOracle,
    pub user_locks: DynUserLocks,
}

impl From<BlockingDomainServiceDependencies> for BlockingDomainService {
    fn from(deps: BlockingDomainServiceDependencies) -> Self {
        Self {
            ctx: deps.ctx,
            change_notifier: deps.change_notifier,
            privacy_list_store: deps.privacy_list_store,
            session_broadcaster: deps.session_broadcaster,
            session_registry: deps.session_registry,
            stanza_delivery: deps.stanza_delivery,
            subscription_oracle: deps.subscription_oracle,
            user_locks: deps.user_locks,
        }
    }
}

#[async_trait]
impl BlockingDomainServiceTrait for BlockingDomainService {
    #[tracing::instrument(skip(self, request), fields(id = %request.id))]
    async fn handle(
        &self,
        origin: &UserResourceId,
        request: &BlockingRequest,
    ) -> Result<CommandResponse, BlockingError> {
        let user_id = origin.to_user_id();

        match &request.command {
            BlockingCommand::GetBlocklist => {
                let block_list = self.load_block_list(origin, &user_id).await?;
                return Ok(CommandResponse::BlockList(block_list));
            }
            BlockingCommand::Block { items } => self.block(origin, &user_id, items).await?,
            BlockingCommand::Unblock { items } if items.is_empty() => {
                self.clear_block_list(origin, &user_id).await?
            }
            BlockingCommand::Unblock { items } => self.unblock(&user_id, items).await?,
        }

        // The mutation is committed at this point. Pushes are best effort.
        if let Some(push) = request.push_iq() {
            let delivered = self.session_broadcaster.replay(&push, &user_id).await;
            debug!("Sent block list push to {delivered} resource(s) of {user_id}.");
        }

        Ok(CommandResponse::Empty)
    }
}

impl BlockingDomainService {
    async fn load_block_list(
        &self,
        origin: &UserResourceId,
        user_id: &UserId,
    ) -> Result<Vec<Jid>, BlockingError> {
        let block_list = self
            .with_store_timeout(self.privacy_list_store.get(user_id))
            .await?;

        if !self
            .session_registry
            .mark_interested_in_blocklist_push(origin)
            .await
        {
            debug!("{origin} requested the block list but is not bound anymore.");
        }

        Ok(sorted(block_list))
    }

    async fn block(
        &self,
        origin: &UserResourceId,
        user_id: &UserId,
        contacts: &[Jid],
    ) -> Result<(), BlockingError> {
        if contacts.is_empty() {
            return Err(BlockingError::InvalidRequest {
                msg: "A block request must contain at least one item.".to_string(),
            });
        }
        let contacts = contacts.iter().unique().cloned().collect::<Vec<_>>();

        let _guard = self.user_locks.lock(user_id).await;

        let newly_blocked = self
            .with_store_timeout(self.privacy_list_store.add(user_id, &contacts))
            .await?;
        info!(
            "{user_id} blocked {} new contact(s) out of {}.",
            newly_blocked.len(),
            contacts.len()
        );

        let list_name = self.privacy_list_name(user_id).await?;
        let resources = self.session_registry.online_resources_of(user_id).await;

        let mut presences = vec![];
        for contact in contacts.iter().filter(|c| newly_blocked.contains(*c)) {
            let subscription = self
                .with_store_timeout(self.subscription_oracle.subscription_of(user_id, contact))
                .await?;
            presences.extend(plan_block(subscription, &resources, contact));
        }

        self.publish_change(origin, user_id, list_name).await;
        self.send_presences(presences).await;
        Ok(())
    }

    /// Unblocking individual contacts does not publish a privacy list update. Only blocking
    /// and clearing the whole list do.
    async fn unblock(&self, user_id: &UserId, contacts: &[Jid]) -> Result<(), BlockingError> {
        let contacts = contacts.iter().unique().cloned().collect::<Vec<_>>();

        let _guard = self.user_locks.lock(user_id).await;

        let unblocked = self
            .with_store_timeout(self.privacy_list_store.remove(user_id, &contacts))
            .await?;
        info!(
            "{user_id} unblocked {} contact(s) out of {}.",
            unblocked.len(),
            contacts.len()
        );

        let resources = self.session_registry.online_resources_of(user_id).await;
        let unblocked = contacts
            .into_iter()
            .filter(|c| unblocked.contains(c))
            .collect::<Vec<_>>();
        let presences = self
            .plan_unblock_presences(user_id, &resources, &unblocked)
            .await?;

        self.send_presences(presences).await;
        Ok(())
    }

    async fn clear_block_list(
        &self,
        origin: &UserResourceId,
        user_id: &UserId,
    ) -> Result<(), BlockingError> {
        let _guard = self.user_locks.lock(user_id).await;

        let unblocked = sorted(
            self.with_store_timeout(self.privacy_list_store.clear(user_id))
                .await?,
        );
        info!("{user_id} cleared their block list of {} contact(s).", unblocked.len());

        let list_name = self.privacy_list_name(user_id).await?;
        let resources = self.session_registry.online_resources_of(user_id).await;
        let presences = self
            .plan_unblock_presences(user_id, &resources, &unblocked)
            .await?;

        self.publish_change(origin, user_id, list_name).await;
        self.send_presences(presences).await;
        Ok(())
    }

    async fn plan_unblock_presences(
        &self,
        user_id: &UserId,
        resources: &[ResourceConnection],
        contacts: &[Jid],
    ) -> Result<Vec<PlannedPresence>, StorageError> {
        let mut presences = vec![];
        for contact in contacts {
            let subscription = self
                .with_store_timeout(self.subscription_oracle.subscription_of(user_id, contact))
                .await?;
            presences.extend(plan_unblock(subscription, user_id, resources, contact));
        }
        Ok(presences)
    }

    async fn privacy_list_name(&self, user_id: &UserId) -> Result<String, StorageError> {
        Ok(self
            .with_store_timeout(self.privacy_list_store.default_list_name(user_id))
            .await?
            .unwrap_or_else(|| self.ctx.config.default_privacy_list_name.clone()))
    }

    async fn publish_change(&self, origin: &UserResourceId, user_id: &UserId, list_name: String) {
        let event = PrivacyListUpdatedEvent {
            resource_id: origin.clone(),
            user_id: user_id.clone(),
            list_name,
        };

        if let Err(err) = self.change_notifier.publish(event).await {
            warn!("Failed to publish privacy list update for {user_id}. {err}");
        }
    }

    async fn send_presences(&self, presences: Vec<PlannedPresence>) {
        for presence in presences {
            let stanza = OutboundStanza::routed(Presence::from(presence));
            if let Err(err) = self.stanza_delivery.deliver(stanza).await {
                warn!("Failed to send presence. {err}");
            }
        }
    }

    async fn with_store_timeout<T>(
        &self,
        future: impl Future<Output = Result<T, StorageError>>,
    ) -> Result<T, StorageError> {
        match tokio::time::timeout(self.ctx.config.store_timeout, future).await {
            Ok(result) => result,
            Err(_) => {
                error!(
                    "Storage request did not complete within {:?}.",
                    self.ctx.config.store_timeout
                );
                Err(StorageError::TimedOut)
            }
        }
    }
}

fn sorted(contacts: HashSet<Jid>) -> Vec<Jid> {
    contacts
        .into_iter()
        .sorted_by_cached_key(|jid| jid.to_string())
        .collect()
}
