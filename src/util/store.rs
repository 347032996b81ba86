use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::DashMap;
use log::debug;

use crate::BeanError;

/// Type alias for store operation results.
pub type StoreResult<T> = Result<T, BeanError>;

/// `ttl` answer for a key that exists without expiry.
pub const NO_EXPIRY: i64 = -1;

/// `ttl` answer for a missing key.
pub const MISSING_KEY: i64 = -2;

/// String key-value store with second-granularity expiry.
///
/// This is the interface a remote cache is used through. Implementations report
/// transport failures as [`BeanError::Store`].
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    fn set_with_ttl(&self, key: &str, value: &str, seconds: u64) -> StoreResult<()>;

    /// Remaining time to live in seconds, [`NO_EXPIRY`] or [`MISSING_KEY`].
    fn ttl(&self, key: &str) -> StoreResult<i64>;

    /// Sets the expiry of an existing key, `false` when the key is missing.
    fn expire(&self, key: &str, seconds: u64) -> StoreResult<bool>;

    fn has_key(&self, key: &str) -> StoreResult<bool>;

    fn delete(&self, key: &str) -> StoreResult<bool>;

    fn delete_many(&self, keys: &[String]) -> StoreResult<u64>;
}

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= now)
    }
}

/// In-process [`KeyValueStore`]; expired keys are dropped lazily on access.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, Entry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn purge(&self, key: &str) {
        let now = Instant::now();
        self.entries.remove_if(key, |_, entry| entry.is_expired(now));
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.purge(key);
        Ok(self.entries.get(key).map(|entry| entry.value.clone()))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: None,
            },
        );
        Ok(())
    }

    fn set_with_ttl(&self, key: &str, value: &str, seconds: u64) -> StoreResult<()> {
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Some(Instant::now() + Duration::from_secs(seconds)),
            },
        );
        Ok(())
    }

    fn ttl(&self, key: &str) -> StoreResult<i64> {
        self.purge(key);
        let ttl = match self.entries.get(key) {
            None => MISSING_KEY,
            Some(entry) => match entry.expires_at {
                None => NO_EXPIRY,
                Some(deadline) => {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    i64::try_from(remaining.as_secs()).unwrap_or(i64::MAX)
                }
            },
        };
        Ok(ttl)
    }

    fn expire(&self, key: &str, seconds: u64) -> StoreResult<bool> {
        self.purge(key);
        match self.entries.get_mut(key) {
            Some(mut entry) => {
                entry.expires_at = Some(Instant::now() + Duration::from_secs(seconds));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn has_key(&self, key: &str) -> StoreResult<bool> {
        self.purge(key);
        Ok(self.entries.contains_key(key))
    }

    fn delete(&self, key: &str) -> StoreResult<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .remove(key)
            .is_some_and(|(_, entry)| !entry.is_expired(now)))
    }

    fn delete_many(&self, keys: &[String]) -> StoreResult<u64> {
        let mut deleted = 0;
        for key in keys {
            if self.delete(key)? {
                deleted += 1;
            }
        }
        Ok(deleted)
    }
}

/// String cache facade over a [`KeyValueStore`].
///
/// ```
/// use std::sync::Arc;
/// use bean_copier_rs::util::store::{MemoryStore, StringStore};
///
/// let store = StringStore::new(Arc::new(MemoryStore::new()));
/// store.set_value("name", "van").unwrap();
/// assert_eq!(store.get_value("name").unwrap().as_deref(), Some("van"));
/// ```
#[derive(Clone)]
pub struct StringStore {
    store: Arc<dyn KeyValueStore>,
}

impl StringStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stores `value` under `key` without expiry.
    pub fn set_value(&self, key: &str, value: &str) -> StoreResult<()> {
        debug!("SET {}", key);
        self.store.set(key, value)
    }

    /// Stores `value` under `key` for `timeout` seconds.
    pub fn set_value_with_timeout(&self, key: &str, value: &str, timeout: u64) -> StoreResult<()> {
        debug!("SET {} EX {}", key, timeout);
        self.store.set_with_ttl(key, value, timeout)
    }

    pub fn get_value(&self, key: &str) -> StoreResult<Option<String>> {
        debug!("GET {}", key);
        self.store.get(key)
    }

    pub fn get_expire(&self, key: &str) -> StoreResult<i64> {
        self.store.ttl(key)
    }

    pub fn expire(&self, key: &str, timeout: u64) -> StoreResult<bool> {
        debug!("EXPIRE {} {}", key, timeout);
        self.store.expire(key, timeout)
    }

    pub fn has_key(&self, key: &str) -> StoreResult<bool> {
        self.store.has_key(key)
    }

    pub fn del_key(&self, key: &str) -> StoreResult<bool> {
        debug!("DEL {}", key);
        self.store.delete(key)
    }

    pub fn del_keys(&self, keys: &[String]) -> StoreResult<u64> {
        debug!("DEL {} keys", keys.len());
        self.store.delete_many(keys)
    }
}
