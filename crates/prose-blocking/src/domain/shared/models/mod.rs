// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_id::ConnectionId;
pub use user_id::UserId;
pub use user_resource_id::UserResourceId;

mod connection_id;
mod user_id;
mod user_resource_id;
