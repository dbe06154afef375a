// crates/cityloc-core/src/service.rs

use crate::cache::CatalogCache;
use crate::error::Result;
use crate::model::{CatalogStats, CityRecord};
use crate::source::CatalogSource;
use crate::traits::CatalogSearch;
use std::time::Duration;

/// The façade the surrounding site talks to.
///
/// Owns the cache lifecycle and dispatches to the snapshot's search
/// operations. The source is injected so tests (and alternative transports)
/// can substitute their own; there is no ambient global state.
pub struct ResolutionService<S> {
    cache: CatalogCache<S>,
}

impl<S: CatalogSource> ResolutionService<S> {
    /// Service with the standard one-hour snapshot TTL.
    pub fn new(source: S) -> Self {
        Self {
            cache: CatalogCache::new(source),
        }
    }

    pub fn with_ttl(source: S, ttl: Duration) -> Self {
        Self {
            cache: CatalogCache::with_ttl(source, ttl),
        }
    }

    /// Catalog entry nearest to the coordinate, with its distance in km.
    pub fn resolve_nearest(&self, latitude: f64, longitude: f64) -> Result<(CityRecord, f64)> {
        let snapshot = self.cache.get()?;
        let hit = snapshot.nearest(latitude, longitude)?;
        Ok((hit.record.clone(), hit.distance_km))
    }

    /// Up to ten suggestions for a partial query, in catalog order.
    ///
    /// Short or empty queries yield an empty list, never an error.
    pub fn autocomplete(&self, query: &str) -> Result<Vec<CityRecord>> {
        let snapshot = self.cache.get()?;
        Ok(snapshot.suggest(query).into_iter().cloned().collect())
    }

    pub fn stats(&self) -> Result<CatalogStats> {
        Ok(self.cache.get()?.stats())
    }
}
