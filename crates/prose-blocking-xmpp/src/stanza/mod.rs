// prose-core-client/prose-blocking-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use blocking::{BlockingCommand, BlockingRequest};

pub mod blocking;
pub mod ns;
