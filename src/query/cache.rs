//! Query Cache
//!
//! Last successful result per query key, shared through context.
//!
//! Contract:
//! - `put` stores a value, stamps it with the current time and clears any invalidation
//! - `get` returns the stored value whether or not it is stale
//! - `invalidate` marks an entry stale; its value stays readable until replaced
//! - an entry is fresh while it is not invalidated and younger than the stale time

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};

/// Key identifying one cached query
pub type QueryKey = &'static str;

/// A cached value with its bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    pub value: T,
    pub updated_at: DateTime<Utc>,
    pub invalidated: bool,
}

impl<T> CacheEntry<T> {
    pub fn is_fresh(&self, stale_time: Duration, now: DateTime<Utc>) -> bool {
        !self.invalidated && now - self.updated_at < stale_time
    }
}

/// Shared, clonable query cache
pub struct QueryCache<T> {
    entries: Arc<RwLock<HashMap<QueryKey, CacheEntry<T>>>>,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T: Clone> QueryCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last stored value, fresh or stale
    pub fn get(&self, key: QueryKey) -> Option<T> {
        self.read().get(key).map(|entry| entry.value.clone())
    }

    pub fn entry(&self, key: QueryKey) -> Option<CacheEntry<T>> {
        self.read().get(key).cloned()
    }

    /// Stored value, only if it is still fresh
    pub fn get_fresh(&self, key: QueryKey, stale_time: Duration) -> Option<T> {
        self.get_fresh_at(key, stale_time, Utc::now())
    }

    pub fn is_fresh(&self, key: QueryKey, stale_time: Duration) -> bool {
        self.get_fresh(key, stale_time).is_some()
    }

    pub fn put(&self, key: QueryKey, value: T) {
        self.put_at(key, value, Utc::now());
    }

    /// Mark an entry stale. Returns false if there was nothing cached.
    pub fn invalidate(&self, key: QueryKey) -> bool {
        match self.write().get_mut(key) {
            Some(entry) => {
                entry.invalidated = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, key: QueryKey) -> Option<T> {
        self.write().remove(key).map(|entry| entry.value)
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    fn get_fresh_at(&self, key: QueryKey, stale_time: Duration, now: DateTime<Utc>) -> Option<T> {
        self.read()
            .get(key)
            .filter(|entry| entry.is_fresh(stale_time, now))
            .map(|entry| entry.value.clone())
    }

    fn put_at(&self, key: QueryKey, value: T, now: DateTime<Utc>) {
        self.write().insert(
            key,
            CacheEntry {
                value,
                updated_at: now,
                invalidated: false,
            },
        );
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<QueryKey, CacheEntry<T>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<QueryKey, CacheEntry<T>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
