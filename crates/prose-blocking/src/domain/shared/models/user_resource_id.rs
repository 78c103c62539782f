// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use jid::{FullJid, Jid};

use super::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Identifies a single bound resource (device) of a local user.
pub struct UserResourceId(FullJid);

impl UserResourceId {
    pub fn into_inner(self) -> FullJid {
        self.0
    }

    pub fn to_user_id(&self) -> UserId {
        UserId::from(self.0.to_bare())
    }
}

impl From<FullJid> for UserResourceId {
    fn from(value: FullJid) -> Self {
        UserResourceId(value)
    }
}

impl From<UserResourceId> for Jid {
    fn from(value: UserResourceId) -> Self {
        Jid::from(value.0)
    }
}

impl Display for UserResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserResourceId {
    type Err = jid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserResourceId(s.parse::<FullJid>()?))
    }
}
