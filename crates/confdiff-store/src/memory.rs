use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

use crate::error::{StoreError, StoreResult};
use crate::permalink::{generate_id, Permalink};
use crate::traits::PermalinkStore;

/// Default entry lifetime: 30 days.
pub const DEFAULT_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Default capacity cap.
pub const DEFAULT_MAX_ENTRIES: usize = 4096;

/// Collision re-draw budget per save.
const MAX_ID_ATTEMPTS: usize = 16;

/// In-memory, HashMap-based permalink store.
///
/// Intended for single-process deployments and tests. Entries are held in
/// memory behind a `RwLock` and cloned on read. Expired entries read as
/// absent; their space is reclaimed on every save and on explicit
/// [`purge_expired`](InMemoryPermalinkStore::purge_expired) sweeps.
pub struct InMemoryPermalinkStore {
    entries: RwLock<HashMap<String, Permalink>>,
    ttl: Duration,
    max_entries: usize,
}

impl InMemoryPermalinkStore {
    /// Create an empty store with the default TTL and capacity.
    pub fn new() -> Self {
        Self::with_limits(Duration::seconds(DEFAULT_TTL_SECS), DEFAULT_MAX_ENTRIES)
    }

    /// Create an empty store with an explicit TTL and capacity cap.
    pub fn with_limits(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            max_entries,
        }
    }

    /// Entry lifetime applied by this store.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Capacity cap applied by this store.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Number of entries currently held, including expired ones not yet
    /// purged.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    /// Drop every expired entry and return how many were removed.
    pub fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().expect("lock poisoned");
        self.purge_locked(&mut entries, Utc::now())
    }

    fn purge_locked(&self, entries: &mut HashMap<String, Permalink>, now: DateTime<Utc>) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| now.signed_duration_since(entry.created_at) <= self.ttl);
        before - entries.len()
    }
}

impl Default for InMemoryPermalinkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PermalinkStore for InMemoryPermalinkStore {
    fn save(&self, text1: &str, text2: &str) -> StoreResult<String> {
        let mut entries = self.entries.write().expect("lock poisoned");
        self.purge_locked(&mut entries, Utc::now());

        if entries.len() >= self.max_entries {
            return Err(StoreError::CapacityExhausted {
                max_entries: self.max_entries,
            });
        }

        for _ in 0..MAX_ID_ATTEMPTS {
            let id = generate_id();
            if !entries.contains_key(&id) {
                entries.insert(id.clone(), Permalink::new(text1, text2));
                return Ok(id);
            }
        }
        Err(StoreError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    fn load(&self, id: &str) -> StoreResult<Option<Permalink>> {
        let entries = self.entries.read().expect("lock poisoned");
        let now = Utc::now();
        Ok(entries
            .get(id)
            .filter(|entry| now.signed_duration_since(entry.created_at) <= self.ttl)
            .cloned())
    }

    fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut entries = self.entries.write().expect("lock poisoned");
        Ok(entries.remove(id).is_some())
    }
}

impl std::fmt::Debug for InMemoryPermalinkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryPermalinkStore")
            .field("entry_count", &count)
            .field("max_entries", &self.max_entries)
            .finish()
    }
}
