// crates/cityloc-core/src/error.rs

use crate::source::SourceError;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LocError>;

/// Errors surfaced by the resolution service.
///
/// Upstream fetch failures are absorbed by [`CatalogCache`] whenever a stale
/// snapshot can still be served; they reach the caller as
/// [`LocError::CatalogUnavailable`] only when no catalog was ever fetched
/// successfully. Input errors are always surfaced, never defaulted.
///
/// [`CatalogCache`]: crate::cache::CatalogCache
#[derive(Debug, Error)]
pub enum LocError {
    /// Coordinates non-finite or outside `[-90,90]` / `[-180,180]`.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// The catalog source failed and no usable snapshot exists.
    #[error("city catalog unavailable: {0}")]
    CatalogUnavailable(#[from] SourceError),

    /// A catalog snapshot exists but holds no entries.
    #[error("no cities available in the catalog")]
    NoCitiesAvailable,
}
