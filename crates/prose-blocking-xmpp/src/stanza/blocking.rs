// prose-core-client/prose-blocking-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::Jid;
use minidom::Element;
use xmpp_parsers::blocking::{Block, BlocklistResult, Unblock};
use xmpp_parsers::iq::{Iq, IqType};

use crate::{ns, ElementExt, ParseError};

/// A decoded XEP-0191 request.
///
/// https://xmpp.org/extensions/xep-0191.html
#[derive(Debug, Clone, PartialEq)]
pub enum BlockingCommand {
    /// https://xmpp.org/extensions/xep-0191.html#manage
    GetBlocklist,
    /// https://xmpp.org/extensions/xep-0191.html#block
    Block { items: Vec<Jid> },
    /// An empty `items` list asks for the whole block list to be cleared.
    ///
    /// https://xmpp.org/extensions/xep-0191.html#unblock
    Unblock { items: Vec<Jid> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockingRequest {
    pub id: String,
    pub command: BlockingCommand,
}

impl BlockingRequest {
    /// Decodes a blocking command from `iq`.
    ///
    /// Returns `Ok(None)` for stanzas that are not addressed to the blocking handler, i.e.
    /// IQs of type `result` or `error` or IQs whose payload lives in another namespace.
    pub fn from_iq(iq: &Iq) -> Result<Option<Self>, ParseError> {
        let command = match &iq.payload {
            IqType::Get(payload) => {
                if !payload.has_ns(ns::BLOCKING) {
                    return Ok(None);
                }
                payload.expect_is("blocklist", ns::BLOCKING)?;
                BlockingCommand::GetBlocklist
            }
            IqType::Set(payload) => {
                if !payload.has_ns(ns::BLOCKING) {
                    return Ok(None);
                }
                match payload.name() {
                    "block" => BlockingCommand::Block {
                        items: parse_items(payload)?,
                    },
                    "unblock" => BlockingCommand::Unblock {
                        items: parse_items(payload)?,
                    },
                    name => {
                        return Err(ParseError::UnsupportedElement {
                            name: name.to_string(),
                            ns: payload.ns(),
                        })
                    }
                }
            }
            IqType::Result(_) | IqType::Error(_) => return Ok(None),
        };

        Ok(Some(BlockingRequest {
            id: iq.id.clone(),
            command,
        }))
    }

    /// Builds the `set` IQ that is replayed to the user's other connections after a mutation.
    /// Returns `None` for `GetBlocklist` which does not cause a push.
    pub fn push_iq(&self) -> Option<Iq> {
        let payload = match &self.command {
            BlockingCommand::GetBlocklist => return None,
            BlockingCommand::Block { items } => Element::from(Block {
                items: items.clone(),
            }),
            BlockingCommand::Unblock { items } => Element::from(Unblock {
                items: items.clone(),
            }),
        };

        Some(Iq {
            from: None,
            to: None,
            id: self.id.clone(),
            payload: IqType::Set(payload),
        })
    }
}

/// Builds the `result` IQ answering a `GetBlocklist` request.
pub fn blocklist_result(id: impl Into<String>, items: Vec<Jid>) -> Iq {
    Iq::from_result(id, Some(BlocklistResult { items }))
}

/// Builds an empty `result` IQ acknowledging a `Block` or `Unblock` request.
pub fn empty_result(id: impl Into<String>) -> Iq {
    Iq::from_result(id, None::<BlocklistResult>)
}

/// Only a childless `unblock` yields an empty list. Any child other than a blocking `item`
/// rejects the whole payload.
fn parse_items(payload: &Element) -> Result<Vec<Jid>, ParseError> {
    payload
        .children()
        .map(|child| {
            child.expect_is("item", ns::BLOCKING)?;
            child.attr_jid_req("jid")
        })
        .collect()
}
