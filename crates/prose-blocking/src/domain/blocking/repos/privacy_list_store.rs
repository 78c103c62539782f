// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use async_trait::async_trait;
use jid::Jid;

use crate::domain::blocking::models::StorageError;
use crate::domain::shared::models::UserId;

/// Persistent storage of the users' block lists. Every call is expected to be applied
/// atomically by the implementation, calls are serialized per user by the caller.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PrivacyListStore: Send + Sync {
    async fn get(&self, user_id: &UserId) -> Result<HashSet<Jid>, StorageError>;
    /// Returns the contacts which were not blocked before.
    async fn add(&self, user_id: &UserId, contacts: &[Jid])
        -> Result<HashSet<Jid>, StorageError>;
    /// Returns the contacts which were blocked before.
    async fn remove(
        &self,
        user_id: &UserId,
        contacts: &[Jid],
    ) -> Result<HashSet<Jid>, StorageError>;
    /// Removes and returns all blocked contacts.
    async fn clear(&self, user_id: &UserId) -> Result<HashSet<Jid>, StorageError>;

    async fn default_list_name(&self, user_id: &UserId) -> Result<Option<String>, StorageError>;
}
