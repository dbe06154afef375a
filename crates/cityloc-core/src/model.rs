// crates/cityloc-core/src/model.rs

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// One catalog entry as supplied by the upstream content service.
///
/// Wire names are camelCase to match both the upstream JSON feed and the
/// suggestion payloads consumed by the surrounding site.
///
/// `is_urban` / `is_popular` are informational flags passed through to
/// callers; they play no part in ranking or distance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRecord {
    pub id: u64,
    pub name: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub is_urban: bool,
    #[serde(default)]
    pub is_popular: bool,
}

/// One immutable fetched copy of the catalog.
///
/// Created only by a successful fetch. On refresh the cache replaces the
/// whole snapshot (`Arc` swap); a snapshot is never edited in place, so a
/// resolver holding an old reference keeps a consistent view. Resolvers
/// borrow a snapshot for the duration of a single request and must not
/// retain it.
#[derive(Clone, Debug)]
pub struct CatalogSnapshot {
    records: Vec<CityRecord>,
    fetched_at: Instant,
}

impl CatalogSnapshot {
    pub fn new(records: Vec<CityRecord>) -> Self {
        Self {
            records,
            fetched_at: Instant::now(),
        }
    }

    /// Records in catalog order. Iteration order is load-bearing: both the
    /// nearest tie-break and autocomplete de-duplication are first-seen-wins.
    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }

    pub fn fetched_at(&self) -> Instant {
        self.fetched_at
    }

    /// Time elapsed since this snapshot was fetched.
    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A nearest-city hit: the matched record plus its great-circle distance.
#[derive(Clone, Copy, Debug)]
pub struct NearestMatch<'a> {
    pub record: &'a CityRecord,
    /// Kilometres, rounded to 2 decimal places.
    pub distance_km: f64,
}

/// Simple aggregate statistics for one catalog snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CatalogStats {
    pub cities: usize,
    pub urban: usize,
    pub popular: usize,
}
