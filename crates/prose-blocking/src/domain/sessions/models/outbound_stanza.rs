// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;

use crate::domain::shared::models::ConnectionId;

/// A stanza leaving the blocking handler.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundStanza {
    /// When set, the stanza is handed to that connection directly. Otherwise it is routed by
    /// its `to` address.
    pub connection_id: Option<ConnectionId>,
    pub stanza: Element,
}

impl OutboundStanza {
    pub fn routed(stanza: impl Into<Element>) -> Self {
        Self {
            connection_id: None,
            stanza: stanza.into(),
        }
    }

    pub fn to_connection(connection_id: ConnectionId, stanza: impl Into<Element>) -> Self {
        Self {
            connection_id: Some(connection_id),
            stanza: stanza.into(),
        }
    }
}
