// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{AppConfig, AppContext};
use crate::domain::blocking::repos::PrivacyListStore;
use crate::domain::blocking::services::impls::{
    BlockingDomainService, BlockingDomainServiceDependencies,
};
use crate::domain::blocking::services::{
    BlockingDomainService as BlockingDomainServiceTrait, ChangeNotifier,
};
use crate::domain::roster::services::SubscriptionOracle;
use crate::domain::sessions::services::impls::{
    SessionBroadcaster, SessionBroadcasterDependencies,
};
use crate::domain::sessions::services::{
    SessionBroadcaster as SessionBroadcasterTrait, SessionRegistry, StanzaDelivery,
};
use crate::domain::shared::models::UserId;
use crate::util::KeyedMutex;

pub type DynAppContext = Arc<AppContext>;
pub type DynBlockingDomainService = Arc<dyn BlockingDomainServiceTrait>;
pub type DynChangeNotifier = Arc<dyn ChangeNotifier>;
pub type DynPrivacyListStore = Arc<dyn PrivacyListStore>;
pub type DynSessionBroadcaster = Arc<dyn SessionBroadcasterTrait>;
pub type DynSessionRegistry = Arc<dyn SessionRegistry>;
pub type DynStanzaDelivery = Arc<dyn StanzaDelivery>;
pub type DynSubscriptionOracle = Arc<dyn SubscriptionOracle>;
pub type DynUserLocks = Arc<KeyedMutex<UserId>>;

/// The collaborators the server provides to the blocking handler.
pub struct AppServiceDependencies {
    pub change_notifier: DynChangeNotifier,
    pub privacy_list_store: DynPrivacyListStore,
    pub session_registry: DynSessionRegistry,
    pub stanza_delivery: DynStanzaDelivery,
    pub subscription_oracle: DynSubscriptionOracle,
}

pub struct AppDependencies {
    pub blocking_domain_service: DynBlockingDomainService,
    pub change_notifier: DynChangeNotifier,
    pub ctx: DynAppContext,
    pub privacy_list_store: DynPrivacyListStore,
    pub session_broadcaster: DynSessionBroadcaster,
    pub session_registry: DynSessionRegistry,
    pub stanza_delivery: DynStanzaDelivery,
    pub subscription_oracle: DynSubscriptionOracle,
    pub user_locks: DynUserLocks,
}

impl AppDependencies {
    pub fn new(config: AppConfig, services: AppServiceDependencies) -> Self {
        let ctx = Arc::new(AppContext::new(config));
        let user_locks = DynUserLocks::default();

        let session_broadcaster: DynSessionBroadcaster = Arc::new(SessionBroadcaster::from(
            SessionBroadcasterDependencies {
                session_registry: services.session_registry.clone(),
                stanza_delivery: services.stanza_delivery.clone(),
            },
        ));

        let blocking_domain_service = Arc::new(BlockingDomainService::from(
            BlockingDomainServiceDependencies {
                ctx: ctx.clone(),
                change_notifier: services.change_notifier.clone(),
                privacy_list_store: services.privacy_list_store.clone(),
                session_broadcaster: session_broadcaster.clone(),
                session_registry: services.session_registry.clone(),
                stanza_delivery: services.stanza_delivery.clone(),
                subscription_oracle: services.subscription_oracle.clone(),
                user_locks: user_locks.clone(),
            },
        ));

        AppDependencies {
            blocking_domain_service,
            change_notifier: services.change_notifier,
            ctx,
            privacy_list_store: services.privacy_list_store,
            session_broadcaster,
            session_registry: services.session_registry,
            stanza_delivery: services.stanza_delivery,
            subscription_oracle: services.subscription_oracle,
            user_locks,
        }
    }
}
