//! Error-handling example for cityloc-rs
//!
//! Walks through the error taxonomy and the HTTP status each case maps to
//! at the site boundary.

use cityloc_rs::{CatalogSource, CityRecord, LocError, ResolutionService, SourceError};

struct FailingSource;

impl CatalogSource for FailingSource {
    fn fetch_all(&self) -> Result<Vec<CityRecord>, SourceError> {
        Err(SourceError::Malformed("upstream sent garbage".into()))
    }
}

struct OneCitySource;

impl CatalogSource for OneCitySource {
    fn fetch_all(&self) -> Result<Vec<CityRecord>, SourceError> {
        Ok(vec![CityRecord {
            id: 1,
            name: "Pune".into(),
            region: "Maharashtra".into(),
            latitude: 18.52,
            longitude: 73.85,
            is_urban: true,
            is_popular: true,
        }])
    }
}

fn main() {
    println!("=== cityloc-rs Error Handling Example ===\n");

    // Case 1: invalid coordinates always surface to the caller.
    let service = ResolutionService::new(OneCitySource);
    match service.resolve_nearest(123.0, 0.0) {
        Err(err @ LocError::InvalidCoordinates(_)) => {
            println!("invalid input -> HTTP {}: {err}", err.status_code());
        }
        other => println!("unexpected: {other:?}"),
    }

    // Case 2: a source failure with no snapshot ever fetched.
    let broken = ResolutionService::new(FailingSource);
    match broken.autocomplete("pune") {
        Err(err @ LocError::CatalogUnavailable(_)) => {
            println!("no catalog -> HTTP {}: {err}", err.status_code());
        }
        other => println!("unexpected: {other:?}"),
    }

    // Case 3: short queries are a UX threshold, not an error.
    match service.autocomplete("p") {
        Ok(hits) => println!("short query -> Ok with {} suggestions", hits.len()),
        Err(err) => println!("unexpected: {err}"),
    }

    println!("\n=== Example completed successfully ===");
}
