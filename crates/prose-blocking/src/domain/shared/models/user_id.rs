// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use jid::{BareJid, Jid};

#[derive(Clone, PartialEq, Eq, Hash)]
/// Represents a local user of the server, i.e. a bare JID without resource.
pub struct UserId(BareJid);

impl UserId {
    pub fn into_inner(self) -> BareJid {
        self.0
    }

    pub fn as_bare(&self) -> &BareJid {
        &self.0
    }
}

impl From<BareJid> for UserId {
    fn from(value: BareJid) -> Self {
        UserId(value)
    }
}

impl From<UserId> for Jid {
    fn from(value: UserId) -> Self {
        Jid::from(value.0)
    }
}

impl Debug for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = jid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserId(s.parse::<BareJid>()?))
    }
}
