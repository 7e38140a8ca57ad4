//! In-memory cache for resolved locations.
//!
//! The cache is an explicitly constructed instance owned by the
//! [`LocationResolver`](super::resolver::LocationResolver), not a process
//! global. Entries are immutable once written and are superseded, not
//! merged, on re-resolution; concurrent writers for the same key converge
//! on the same computed value, so last-write-wins is harmless.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::RwLock;

/// A location resolved to the upstream's canonical identifier pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub code: i64,
    /// Comma-hierarchical name, e.g. `"London,England,United Kingdom"`.
    pub name: String,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    resolved: ResolvedLocation,
    created_at: DateTime<Utc>,
}

/// TTL-bounded map from `(search_engine, normalized_input)` to a resolved
/// location. No persistence; entries vanish on process restart.
pub struct LocationCache {
    ttl: TimeDelta,
    entries: RwLock<HashMap<(String, String), CacheEntry>>,
}

impl LocationCache {
    /// Default entry lifetime.
    pub const DEFAULT_TTL_HOURS: i64 = 24;

    /// Create a cache with the default 24 hour TTL.
    pub fn new() -> Self {
        Self::with_ttl(TimeDelta::hours(Self::DEFAULT_TTL_HOURS))
    }

    /// Create a cache with a custom TTL.
    pub fn with_ttl(ttl: TimeDelta) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a non-expired entry. Expired entries are ignored, not
    /// removed; the next successful resolution overwrites them.
    pub fn get(&self, search_engine: &str, normalized_input: &str) -> Option<ResolvedLocation> {
        let entries = self.entries.read();
        let entry = entries.get(&(search_engine.to_string(), normalized_input.to_string()))?;
        if Utc::now() - entry.created_at < self.ttl {
            Some(entry.resolved.clone())
        } else {
            None
        }
    }

    /// Insert or overwrite an entry.
    pub fn insert(&self, search_engine: &str, normalized_input: &str, resolved: ResolvedLocation) {
        self.insert_at(search_engine, normalized_input, resolved, Utc::now());
    }

    fn insert_at(
        &self,
        search_engine: &str,
        normalized_input: &str,
        resolved: ResolvedLocation,
        created_at: DateTime<Utc>,
    ) {
        self.entries.write().insert(
            (search_engine.to_string(), normalized_input.to_string()),
            CacheEntry {
                resolved,
                created_at,
            },
        );
    }

    /// Insert an entry with a backdated timestamp, for TTL tests.
    #[cfg(test)]
    pub fn insert_aged(
        &self,
        search_engine: &str,
        normalized_input: &str,
        resolved: ResolvedLocation,
        age: TimeDelta,
    ) {
        self.insert_at(search_engine, normalized_input, resolved, Utc::now() - age);
    }

    /// Drop all entries. Intended for test isolation.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for LocationCache {
    fn default() -> Self {
        Self::new()
    }
}
