// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use delivery_error::DeliveryError;
pub use outbound_stanza::OutboundStanza;
pub use resource_connection::ResourceConnection;

mod delivery_error;
mod outbound_stanza;
mod resource_connection;
