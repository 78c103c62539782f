// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::deps::{AppConfig, AppDependencies, AppServiceDependencies};
use crate::domain::sessions::models::OutboundStanza;
use crate::infra::blocking::{BroadcastChangeNotifier, InMemoryPrivacyListStore};
use crate::infra::roster::InMemoryRoster;
use crate::infra::sessions::{ChannelStanzaDelivery, InMemorySessionRegistry};

/// All collaborators of the blocking handler, kept in memory.
pub struct InMemoryBackend {
    pub change_notifier: Arc<BroadcastChangeNotifier>,
    pub privacy_list_store: Arc<InMemoryPrivacyListStore>,
    pub roster: Arc<InMemoryRoster>,
    pub session_registry: Arc<InMemorySessionRegistry>,
    pub stanza_delivery: Arc<ChannelStanzaDelivery>,
}

impl InMemoryBackend {
    /// Returns the backend together with the receiving end of every stanza it delivers.
    pub fn new() -> (Self, UnboundedReceiver<OutboundStanza>) {
        let session_registry = Arc::new(InMemorySessionRegistry::default());
        let (stanza_delivery, outbound) = ChannelStanzaDelivery::new(session_registry.clone());

        let backend = Self {
            change_notifier: Arc::new(BroadcastChangeNotifier::default()),
            privacy_list_store: Arc::new(InMemoryPrivacyListStore::default()),
            roster: Arc::new(InMemoryRoster::default()),
            session_registry,
            stanza_delivery: Arc::new(stanza_delivery),
        };
        (backend, outbound)
    }

    pub fn app_dependencies(&self, config: AppConfig) -> AppDependencies {
        AppDependencies::new(
            config,
            AppServiceDependencies {
                change_notifier: self.change_notifier.clone(),
                privacy_list_store: self.privacy_list_store.clone(),
                session_registry: self.session_registry.clone(),
                stanza_delivery: self.stanza_delivery.clone(),
                subscription_oracle: self.roster.clone(),
            },
        )
    }
}
