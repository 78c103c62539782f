// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use uuid::Uuid;

/// Identifies the stream a resource is bound to. Stanzas addressed to a connection are handed
/// to the transport of that stream directly instead of being routed by their `to` address.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn random() -> Self {
        ConnectionId(Uuid::new_v4().to_string())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<T> From<T> for ConnectionId
where
    T: Into<String>,
{
    fn from(s: T) -> ConnectionId {
        ConnectionId(s.into())
    }
}

impl AsRef<str> for ConnectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ConnectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
