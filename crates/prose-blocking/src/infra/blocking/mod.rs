// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use broadcast_change_notifier::BroadcastChangeNotifier;
pub use in_memory_privacy_list_store::InMemoryPrivacyListStore;

mod broadcast_change_notifier;
mod in_memory_privacy_list_store;
