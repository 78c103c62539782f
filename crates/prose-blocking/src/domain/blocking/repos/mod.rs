// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use privacy_list_store::PrivacyListStore;

mod privacy_list_store;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::privacy_list_store::MockPrivacyListStore;
}
