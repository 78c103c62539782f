// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use jid::Jid;
use parking_lot::RwLock;

use crate::domain::blocking::models::StorageError;
use crate::domain::blocking::repos::PrivacyListStore;
use crate::domain::shared::models::UserId;

#[derive(Debug, Default)]
struct PrivacyList {
    default_list_name: Option<String>,
    blocked: HashSet<Jid>,
}

/// Keeps the block lists of all users in memory.
#[derive(Debug)]
pub struct InMemoryPrivacyListStore {
    lists: RwLock<HashMap<UserId, PrivacyList>>,
    available: AtomicBool,
}

impl Default for InMemoryPrivacyListStore {
    fn default() -> Self {
        Self {
            lists: Default::default(),
            available: AtomicBool::new(true),
        }
    }
}

impl InMemoryPrivacyListStore {
    pub fn set_default_list_name(&self, user_id: &UserId, name: impl Into<String>) {
        self.lists
            .write()
            .entry(user_id.clone())
            .or_default()
            .default_list_name = Some(name.into());
    }

    /// While unavailable every call fails with `StorageError::Unavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<(), StorageError> {
        if self.available.load(Ordering::SeqCst) {
            return Ok(());
        }
        Err(StorageError::Unavailable {
            msg: "In-memory store was switched off".to_string(),
        })
    }
}

#[async_trait]
impl PrivacyListStore for InMemoryPrivacyListStore {
    async fn get(&self, user_id: &UserId) -> Result<HashSet<Jid>, StorageError> {
        self.ensure_available()?;
        Ok(self
            .lists
            .read()
            .get(user_id)
            .map(|list| list.blocked.clone())
            .unwrap_or_default())
    }

    async fn add(
        &self,
        user_id: &UserId,
        contacts: &[Jid],
    ) -> Result<HashSet<Jid>, StorageError> {
        self.ensure_available()?;
        let mut lists = self.lists.write();
        let list = lists.entry(user_id.clone()).or_default();

        Ok(contacts
            .iter()
            .filter(|contact| list.blocked.insert((*contact).clone()))
            .cloned()
            .collect())
    }

    async fn remove(
        &self,
        user_id: &UserId,
        contacts: &[Jid],
    ) -> Result<HashSet<Jid>, StorageError> {
        self.ensure_available()?;
        let mut lists = self.lists.write();
        let Some(list) = lists.get_mut(user_id) else {
            return Ok(HashSet::new());
        };

        Ok(contacts
            .iter()
            .filter(|contact| list.blocked.remove(*contact))
            .cloned()
            .collect())
    }

    async fn clear(&self, user_id: &UserId) -> Result<HashSet<Jid>, StorageError> {
        self.ensure_available()?;
        Ok(self
            .lists
            .write()
            .get_mut(user_id)
            .map(|list| std::mem::take(&mut list.blocked))
            .unwrap_or_default())
    }

    async fn default_list_name(&self, user_id: &UserId) -> Result<Option<String>, StorageError> {
        self.ensure_available()?;
        Ok(self
            .lists
            .read()
            .get(user_id)
            .and_then(|list| list.default_list_name.clone()))
    }
}
