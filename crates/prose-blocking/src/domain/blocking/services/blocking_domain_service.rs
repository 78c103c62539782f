// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use prose_blocking_xmpp::BlockingRequest;

use crate::domain::blocking::models::{BlockingError, CommandResponse};
use crate::domain::shared::models::UserResourceId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait BlockingDomainService: Send + Sync {
    /// Executes `request` on behalf of the resource `origin`.
    async fn handle(
        &self,
        origin: &UserResourceId,
        request: &BlockingRequest,
    ) -> Result<CommandResponse, BlockingError>;
}
