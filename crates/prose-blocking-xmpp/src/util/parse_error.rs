// prose-core-client/prose-blocking-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Parse error: {msg}")]
    Generic { msg: String },
    #[error("Invalid JID: {jid}")]
    InvalidJid {
        jid: String,
        #[source]
        source: jid::Error,
    },
    #[error("Unsupported element {name} in namespace {ns}")]
    UnsupportedElement { name: String, ns: String },
}

impl ParseError {
    /// Returns true if the payload was well-formed but asked for something we don't handle.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ParseError::UnsupportedElement { .. })
    }
}
