// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use blocking_domain_service::{BlockingDomainService, BlockingDomainServiceDependencies};

mod blocking_domain_service;
