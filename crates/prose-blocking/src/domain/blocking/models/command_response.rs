// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::Jid;

#[derive(Debug, Clone, PartialEq)]
pub enum CommandResponse {
    /// The user's block list, sorted by address.
    BlockList(Vec<Jid>),
    Empty,
}
