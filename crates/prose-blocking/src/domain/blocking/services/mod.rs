// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use blocking_domain_service::BlockingDomainService;
pub use change_notifier::ChangeNotifier;

mod blocking_domain_service;
mod change_notifier;
pub mod impls;
pub mod presence_transition_planner;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::blocking_domain_service::MockBlockingDomainService;
    pub use super::change_notifier::MockChangeNotifier;
}
