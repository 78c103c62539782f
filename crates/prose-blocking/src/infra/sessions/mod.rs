// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use channel_stanza_delivery::ChannelStanzaDelivery;
pub use in_memory_session_registry::InMemorySessionRegistry;

mod channel_stanza_delivery;
mod in_memory_session_registry;
