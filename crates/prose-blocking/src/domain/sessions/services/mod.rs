// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use session_broadcaster::SessionBroadcaster;
pub use session_registry::SessionRegistry;
pub use stanza_delivery::StanzaDelivery;

pub mod impls;
mod session_broadcaster;
mod session_registry;
mod stanza_delivery;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::session_broadcaster::MockSessionBroadcaster;
    pub use super::session_registry::MockSessionRegistry;
    pub use super::stanza_delivery::MockStanzaDelivery;
}
