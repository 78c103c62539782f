// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::ConnectionId;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Connection {connection_id} is gone")]
    ConnectionGone { connection_id: ConnectionId },
    #[error("Outbound transport is closed")]
    TransportClosed,
}
