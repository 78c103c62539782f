// prose-core-client/prose-blocking-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use xmpp_parsers::ns::*;

// See all at: https://xmpp.org/registrar/namespaces.html

/// XEP-0191: Blocking Command
pub const BLOCKING: &str = "urn:xmpp:blocking";
