//! Optimistic entity cache.
//!
//! Holds the client's view of remote entities keyed by identity. Mutations
//! go through the optimistic-update protocol: apply a pure transform to the
//! cached value *before* the network round-trip completes, keep a snapshot,
//! and either discard it (server accepted) or roll back (server rejected).
//! The cache therefore never retains a mutation the server refused.
//!
//! # Protocol
//!
//! 1. `apply(key, transform)` snapshots the current value, writes the
//!    transformed value, and returns a [`Rollback`] handle.
//! 2. The caller performs the network operation.
//! 3. On success the handle is dropped, usually followed by
//!    [`Cache::invalidate`] to force an authoritative refetch.
//! 4. On failure the caller invokes [`Rollback::rollback`] *before*
//!    surfacing the error.
//!
//! A transform that fails leaves the cache untouched; a missing key is a
//! no-op update with an inert handle. The snapshot → transform → write
//! sequence runs inside one lock acquisition, so no interleaved write can
//! observe a half-applied update.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Shared cache of entities of one type, keyed by identity string.
#[derive(Debug)]
pub struct Cache<T> {
    entries: Arc<Mutex<HashMap<String, T>>>,
}

impl<T> Clone for Cache<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T> Default for Cache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Cache<T> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Drop the entry so the next read refetches from the server.
    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.lock().expect("cache lock").remove(key).is_some()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().expect("cache lock").contains_key(key)
    }
}

impl<T: Clone> Cache<T> {
    pub fn insert(&self, key: impl Into<String>, value: T) {
        self.entries
            .lock()
            .expect("cache lock")
            .insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<T> {
        self.entries.lock().expect("cache lock").get(key).cloned()
    }

    /// Apply a speculative transform to the cached value.
    ///
    /// The transform runs against a snapshot of the current value; its
    /// result replaces the entry and the pre-transform snapshot is captured
    /// in the returned [`Rollback`] handle. A transform error propagates
    /// with the cache untouched. A missing key is a no-op update: nothing
    /// is written and the handle rolls back nothing.
    pub fn apply<E>(
        &self,
        key: &str,
        transform: impl FnOnce(&T) -> Result<T, E>,
    ) -> Result<Rollback<T>, E> {
        let mut entries = self.entries.lock().expect("cache lock");
        let Some(current) = entries.get(key) else {
            tracing::debug!(key, "optimistic update against absent cache entry");
            return Ok(Rollback { restore: None });
        };

        let snapshot = current.clone();
        let next = transform(current)?;
        entries.insert(key.to_string(), next);

        Ok(Rollback {
            restore: Some(Restore {
                entries: Arc::clone(&self.entries),
                key: key.to_string(),
                snapshot,
            }),
        })
    }
}

struct Restore<T> {
    entries: Arc<Mutex<HashMap<String, T>>>,
    key: String,
    snapshot: T,
}

/// Undo handle for one optimistic update.
///
/// Dropping the handle commits the speculative value; calling
/// [`Rollback::rollback`] restores the pre-transform snapshot with a single
/// assignment.
#[must_use = "dropping a rollback handle commits the optimistic write"]
pub struct Rollback<T> {
    restore: Option<Restore<T>>,
}

impl<T> Rollback<T> {
    /// Restore the cached value captured before the transform ran.
    pub fn rollback(self) {
        if let Some(restore) = self.restore {
            restore
                .entries
                .lock()
                .expect("cache lock")
                .insert(restore.key, restore.snapshot);
        }
    }

    /// Whether this handle actually captured a snapshot.
    pub fn is_armed(&self) -> bool {
        self.restore.is_some()
    }
}
