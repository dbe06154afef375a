// crates/cityloc-core/src/source.rs

//! # Catalog Sources
//!
//! Handles the transport layer: getting the raw city catalog into memory,
//! whether from the content service over HTTP or from a local JSON file.
//! Decoded records are validated here so a half-usable catalog never reaches
//! the cache.

use crate::model::CityRecord;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(feature = "fetch")]
use std::time::Duration;

/// Default timeout for HTTP catalog fetches.
#[cfg(feature = "fetch")]
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Upstream failures while fetching the city catalog.
#[derive(Debug, Error)]
pub enum SourceError {
    #[cfg(feature = "fetch")]
    #[error("catalog endpoint error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The source answered but the record set was empty. The cache treats
    /// this as a failed fetch rather than installing an empty snapshot.
    #[error("catalog source returned no records")]
    Empty,

    #[error("malformed catalog record: {0}")]
    Malformed(String),
}

/// Supplies the full city catalog in a single call.
///
/// The contract is deliberately small: return the complete set or fail; no
/// pagination. The cache layer decides whether a failure is surfaced or
/// absorbed, so implementors should just report what happened.
pub trait CatalogSource: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<CityRecord>, SourceError>;
}

impl CatalogSource for Box<dyn CatalogSource> {
    fn fetch_all(&self) -> Result<Vec<CityRecord>, SourceError> {
        (**self).fetch_all()
    }
}

impl<S: CatalogSource + ?Sized> CatalogSource for std::sync::Arc<S> {
    fn fetch_all(&self) -> Result<Vec<CityRecord>, SourceError> {
        (**self).fetch_all()
    }
}

/// Rejects records that would poison downstream scans: blank display fields
/// or coordinates outside the valid ranges. One bad record fails the whole
/// fetch.
pub(crate) fn validate_records(records: &[CityRecord]) -> Result<(), SourceError> {
    for rec in records {
        if rec.name.trim().is_empty() || rec.region.trim().is_empty() {
            return Err(SourceError::Malformed(format!(
                "record {}: blank name or region",
                rec.id
            )));
        }
        // NaN fails both range checks, so non-finite values land here too.
        if !(-90.0..=90.0).contains(&rec.latitude) || !(-180.0..=180.0).contains(&rec.longitude) {
            return Err(SourceError::Malformed(format!(
                "record {}: coordinates out of range ({}, {})",
                rec.id, rec.latitude, rec.longitude
            )));
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// FILE SOURCE
// -----------------------------------------------------------------------------

/// Reads a catalog from a JSON file holding an array of city records.
///
/// Used by the CLI and by tests; the shape matches what the content service
/// returns over HTTP.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn fetch_all(&self) -> Result<Vec<CityRecord>, SourceError> {
        let file = File::open(&self.path)?;
        let records: Vec<CityRecord> = serde_json::from_reader(BufReader::new(file))?;
        validate_records(&records)?;
        Ok(records)
    }
}

// -----------------------------------------------------------------------------
// HTTP SOURCE
// -----------------------------------------------------------------------------

/// Blocking HTTP source for the catalog endpoint of the content service.
///
/// Fetches honor a bounded timeout; a timed-out or failed request surfaces
/// as [`SourceError::Http`] and is handled by the cache's failure policy.
#[cfg(feature = "fetch")]
pub struct HttpCatalogSource {
    client: reqwest::blocking::Client,
    url: String,
}

#[cfg(feature = "fetch")]
impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Result<Self, SourceError> {
        Self::with_timeout(url, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "fetch")]
impl CatalogSource for HttpCatalogSource {
    fn fetch_all(&self) -> Result<Vec<CityRecord>, SourceError> {
        let records: Vec<CityRecord> = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .json()?;
        validate_records(&records)?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: u64, name: &str, region: &str, lat: f64, lon: f64) -> CityRecord {
        CityRecord {
            id,
            name: name.into(),
            region: region.into(),
            latitude: lat,
            longitude: lon,
            is_urban: false,
            is_popular: false,
        }
    }

    #[test]
    fn validation_accepts_a_clean_catalog() {
        let records = vec![
            rec(1, "Mumbai", "Maharashtra", 19.07, 72.87),
            rec(2, "Pune", "Maharashtra", 18.52, 73.85),
        ];
        assert!(validate_records(&records).is_ok());
    }

    #[test]
    fn validation_rejects_blank_name() {
        let records = vec![rec(7, "  ", "Maharashtra", 19.0, 72.0)];
        let err = validate_records(&records).unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
    }

    #[test]
    fn validation_rejects_out_of_range_and_nan_coordinates() {
        let out_of_range = vec![rec(8, "Nowhere", "Void", 91.0, 0.0)];
        assert!(matches!(
            validate_records(&out_of_range),
            Err(SourceError::Malformed(_))
        ));

        let nan = vec![rec(9, "Nowhere", "Void", f64::NAN, 0.0)];
        assert!(matches!(
            validate_records(&nan),
            Err(SourceError::Malformed(_))
        ));
    }

    #[test]
    fn json_file_source_round_trips_the_feed_shape() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("cityloc-source-test-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"id":1,"name":"Mumbai","region":"Maharashtra","latitude":19.07,"longitude":72.87,"isUrban":true,"isPopular":true},
               {"id":2,"name":"Pune","region":"Maharashtra","latitude":18.52,"longitude":73.85}]"#,
        )
        .unwrap();

        let source = JsonFileSource::new(&path);
        let records = source.fetch_all().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Mumbai");
        assert!(records[0].is_urban);
        // Flags default to false when the feed omits them.
        assert!(!records[1].is_popular);
    }

    #[test]
    fn json_file_source_reports_missing_file_as_io() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        assert!(matches!(source.fetch_all(), Err(SourceError::Io(_))));
    }
}
