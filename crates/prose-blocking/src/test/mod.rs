// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use mock_app_dependencies::{
    MockAppDependencies, MockBlockingDomainServiceDependencies,
    MockSessionBroadcasterDependencies,
};


#[macro_export]
macro_rules! user_id {
    ($jid:expr) => {
        $crate::domain::shared::models::UserId::from($jid.parse::<jid::BareJid>().unwrap())
    };
}

#[macro_export]
macro_rules! user_resource_id {
    ($jid:expr) => {
        $crate::domain::shared::models::UserResourceId::from(
            $jid.parse::<jid::FullJid>().unwrap(),
        )
    };
}
