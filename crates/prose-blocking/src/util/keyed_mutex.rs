// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Hands out one async mutex per key. Mutexes are created on first use and dropped once no
/// guard for them is alive anymore, so that idle keys don't accumulate.
pub struct KeyedMutex<K> {
    mutexes: Mutex<HashMap<K, Weak<AsyncMutex<()>>>>,
}

impl<K> Default for KeyedMutex<K> {
    fn default() -> Self {
        Self {
            mutexes: Default::default(),
        }
    }
}

impl<K> KeyedMutex<K>
where
    K: Eq + Hash + Clone,
{
    pub async fn lock(&self, key: &K) -> OwnedMutexGuard<()> {
        let mutex = {
            let mut mutexes = self.mutexes.lock();

            match mutexes.get(key).and_then(Weak::upgrade) {
                Some(mutex) => mutex,
                None => {
                    mutexes.retain(|_, mutex| mutex.strong_count() > 0);
                    let mutex = Arc::new(AsyncMutex::new(()));
                    mutexes.insert(key.clone(), Arc::downgrade(&mutex));
                    mutex
                }
            }
        };

        mutex.lock_owned().await
    }

    /// The number of keys for which a guard is currently alive or awaited.
    pub fn active_keys(&self) -> usize {
        self.mutexes
            .lock()
            .values()
            .filter(|mutex| mutex.strong_count() > 0)
            .count()
    }
}
