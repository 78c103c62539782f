// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use subscription_oracle::SubscriptionOracle;

mod subscription_oracle;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::subscription_oracle::MockSubscriptionOracle;
}
