// crates/cityloc-core/src/lib.rs

//! # cityloc-core
//!
//! In-process location resolution over a city catalog supplied by an
//! external content service. Two queries: the catalog entry nearest to a
//! coordinate (haversine great-circle distance) and ranked text
//! autocomplete. Both are served from a TTL-bounded snapshot cache that
//! never runs two upstream fetches at once.
//!
//! ```no_run
//! use cityloc_core::{JsonFileSource, ResolutionService};
//!
//! # fn main() -> cityloc_core::Result<()> {
//! let service = ResolutionService::new(JsonFileSource::new("cities.json"));
//!
//! let (city, km) = service.resolve_nearest(19.0, 72.9)?;
//! println!("{} ({km} km)", city.name);
//!
//! for hit in service.autocomplete("mum")? {
//!     println!("{}, {}", hit.name, hit.region);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api; // JSON views for the site-facing HTTP surface
pub mod cache;
pub mod error;
pub mod model;
pub mod search;
pub mod service;
pub mod source;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::cache::{CatalogCache, DEFAULT_TTL};
pub use crate::error::{LocError, Result};
pub use crate::model::{CatalogSnapshot, CatalogStats, CityRecord, NearestMatch};
pub use crate::search::{
    haversine_km, MatchTier, EARTH_RADIUS_KM, MAX_SUGGESTIONS, MIN_QUERY_LEN,
};
pub use crate::service::ResolutionService;
#[cfg(feature = "fetch")]
pub use crate::source::HttpCatalogSource;
pub use crate::source::{CatalogSource, JsonFileSource, SourceError};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::CatalogSearch;
