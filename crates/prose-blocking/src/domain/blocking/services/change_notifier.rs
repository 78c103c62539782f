// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::blocking::models::{NotificationError, PrivacyListUpdatedEvent};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ChangeNotifier: Send + Sync {
    async fn publish(&self, event: PrivacyListUpdatedEvent) -> Result<(), NotificationError>;
}
