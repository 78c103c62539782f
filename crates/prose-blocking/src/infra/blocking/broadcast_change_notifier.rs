// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::domain::blocking::models::{NotificationError, PrivacyListUpdatedEvent};
use crate::domain::blocking::services::ChangeNotifier;

/// Fans privacy list updates out to every other subsystem that subscribed.
pub struct BroadcastChangeNotifier {
    sender: broadcast::Sender<PrivacyListUpdatedEvent>,
}

impl BroadcastChangeNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PrivacyListUpdatedEvent> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastChangeNotifier {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait]
impl ChangeNotifier for BroadcastChangeNotifier {
    async fn publish(&self, event: PrivacyListUpdatedEvent) -> Result<(), NotificationError> {
        self.sender
            .send(event)
            .map(|_| ())
            .map_err(|_| NotificationError::NoSubscribers)
    }
}
