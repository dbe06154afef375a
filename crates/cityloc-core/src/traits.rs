// crates/cityloc-core/src/traits.rs

use crate::error::Result;
use crate::model::{CatalogStats, CityRecord, NearestMatch};

/// The search operations available on one catalog snapshot.
///
/// [`CatalogSnapshot`] implements this with plain linear scans, which are
/// all the expected catalog sizes need. The trait is the substitution seam:
/// a k-d tree for `nearest` or an inverted text index for `suggest` can
/// implement the same operations and slot in behind
/// [`ResolutionService`](crate::service::ResolutionService) without touching
/// the public contract.
///
/// All operations are read-only; no implementor may mutate the snapshot.
///
/// [`CatalogSnapshot`]: crate::model::CatalogSnapshot
pub trait CatalogSearch {
    fn stats(&self) -> CatalogStats;

    /// Returns the catalog entry with minimum great-circle distance to the
    /// given coordinate, plus that distance in kilometres.
    ///
    /// Fails with `InvalidCoordinates` on non-finite or out-of-range input
    /// and `NoCitiesAvailable` on an empty snapshot. When two entries are
    /// exactly equidistant the one appearing earlier in catalog order wins.
    fn nearest(&self, latitude: f64, longitude: f64) -> Result<NearestMatch<'_>>;

    /// Returns up to ten entries matching a partial text query.
    ///
    /// A query shorter than two characters after normalization yields an
    /// empty list (a UX threshold, not an error). Results keep catalog
    /// order and never repeat a `(name, region)` pair.
    fn suggest(&self, query: &str) -> Vec<&CityRecord>;
}
