// crates/cityloc-core/src/cache.rs

//! # Catalog Cache
//!
//! Keeps the most recently fetched [`CatalogSnapshot`] in memory with a
//! time-to-live and serializes refreshes so concurrent callers never trigger
//! duplicate fetches against the content service.

use crate::error::{LocError, Result};
use crate::model::CatalogSnapshot;
use crate::source::{CatalogSource, SourceError};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;
use tracing::warn;

/// Default time-to-live for a fetched snapshot.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// TTL cache around a [`CatalogSource`].
///
/// Readers of a still-valid snapshot only take a brief read lock on the
/// snapshot cell; they never touch the refresh path. When the snapshot is
/// stale or missing, exactly one caller holds the refresh mutex and runs the
/// fetch while everyone else queues behind it and reuses whatever the winner
/// installed. Snapshots are replaced by `Arc` swap, so a resolver holding an
/// old reference keeps a whole, consistent catalog.
///
/// Failure policy: a failed or empty fetch falls back to the stale snapshot
/// when one exists (logged, not surfaced); with no snapshot ever fetched the
/// failure propagates as [`LocError::CatalogUnavailable`]. The refresh guard
/// is released on every exit path, so an abandoned or panicked fetch never
/// wedges the next caller.
pub struct CatalogCache<S> {
    source: S,
    ttl: Duration,
    snapshot: RwLock<Option<Arc<CatalogSnapshot>>>,
    /// Serializes the decide-to-refresh-and-fetch step only.
    refresh: Mutex<()>,
}

impl<S: CatalogSource> CatalogCache<S> {
    pub fn new(source: S) -> Self {
        Self::with_ttl(source, DEFAULT_TTL)
    }

    pub fn with_ttl(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            snapshot: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the current snapshot, refreshing it first when stale.
    pub fn get(&self) -> Result<Arc<CatalogSnapshot>> {
        if let Some(snap) = self.current(false) {
            return Ok(snap);
        }

        // A poisoned lock means another caller panicked mid-refresh; the
        // cell still holds a whole snapshot (or none), so recover the guard.
        let _guard = self
            .refresh
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Re-check under the lock: a queued caller arrives here right after
        // the winner installed a fresh snapshot.
        if let Some(snap) = self.current(false) {
            return Ok(snap);
        }

        match self.fetch_snapshot() {
            Ok(snap) => {
                let snap = Arc::new(snap);
                let mut cell = self
                    .snapshot
                    .write()
                    .unwrap_or_else(PoisonError::into_inner);
                *cell = Some(Arc::clone(&snap));
                Ok(snap)
            }
            Err(err) => match self.current(true) {
                Some(stale) => {
                    warn!(
                        error = %err,
                        age_secs = stale.age().as_secs(),
                        "catalog refresh failed, serving stale snapshot"
                    );
                    Ok(stale)
                }
                None => Err(LocError::CatalogUnavailable(err)),
            },
        }
    }

    /// Snapshot currently in the cell, subject to freshness unless
    /// `allow_stale` is set.
    fn current(&self, allow_stale: bool) -> Option<Arc<CatalogSnapshot>> {
        let cell = self
            .snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let snap = cell.as_ref()?;
        if allow_stale || snap.age() < self.ttl {
            Some(Arc::clone(snap))
        } else {
            None
        }
    }

    fn fetch_snapshot(&self) -> std::result::Result<CatalogSnapshot, SourceError> {
        let records = self.source.fetch_all()?;
        // An unexpectedly empty set is a fetch failure, not a valid catalog.
        if records.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(CatalogSnapshot::new(records))
    }
}
