// crates/cityloc-core/src/api.rs

//! # JSON Views
//!
//! Response shapes for the HTTP surface the surrounding site exposes
//! (`GET /location/autocomplete`, `GET /location/detect`). The HTTP server
//! itself lives outside this crate; these types pin down the wire contract
//! so the site and this core cannot drift apart.

use crate::error::LocError;
use crate::model::{CityRecord, NearestMatch};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Payload of `GET /location/autocomplete?term=<string>`.
///
/// A short or empty term produces `{ "suggestions": [] }` rather than an
/// error body.
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<CityRecord>,
    /// Epoch milliseconds at response build time.
    pub timestamp: u64,
}

impl SuggestResponse {
    pub fn new(suggestions: Vec<CityRecord>) -> Self {
        Self {
            suggestions,
            timestamp: epoch_ms(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Payload of `GET /location/detect?latitude=..&longitude=..`.
///
/// The site contract calls the region field `state`.
#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub city: String,
    pub state: String,
    pub distance: f64,
    pub coordinates: Coordinates,
}

impl From<NearestMatch<'_>> for DetectResponse {
    fn from(hit: NearestMatch<'_>) -> Self {
        Self {
            city: hit.record.name.clone(),
            state: hit.record.region.clone(),
            distance: hit.distance_km,
            coordinates: Coordinates {
                latitude: hit.record.latitude,
                longitude: hit.record.longitude,
            },
        }
    }
}

impl LocError {
    /// HTTP status the site boundary maps this error to.
    pub fn status_code(&self) -> u16 {
        match self {
            LocError::InvalidCoordinates(_) => 400,
            LocError::NoCitiesAvailable => 404,
            LocError::CatalogUnavailable(_) => 500,
        }
    }
}

fn epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceError;

    #[test]
    fn error_status_mapping() {
        assert_eq!(LocError::InvalidCoordinates("x".into()).status_code(), 400);
        assert_eq!(LocError::NoCitiesAvailable.status_code(), 404);
        assert_eq!(
            LocError::CatalogUnavailable(SourceError::Empty).status_code(),
            500
        );
    }

    #[test]
    fn detect_response_uses_the_state_field_name() {
        let record = CityRecord {
            id: 1,
            name: "Pune".into(),
            region: "Maharashtra".into(),
            latitude: 18.52,
            longitude: 73.85,
            is_urban: true,
            is_popular: true,
        };
        let hit = NearestMatch {
            record: &record,
            distance_km: 3.25,
        };
        let json = serde_json::to_value(DetectResponse::from(hit)).unwrap();
        assert_eq!(json["city"], "Pune");
        assert_eq!(json["state"], "Maharashtra");
        assert_eq!(json["distance"], 3.25);
        assert_eq!(json["coordinates"]["latitude"], 18.52);
    }

    #[test]
    fn suggestions_serialize_with_camel_case_flags() {
        let record = CityRecord {
            id: 2,
            name: "Mumbai".into(),
            region: "Maharashtra".into(),
            latitude: 19.07,
            longitude: 72.87,
            is_urban: true,
            is_popular: false,
        };
        let resp = SuggestResponse::new(vec![record]);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["suggestions"][0]["isUrban"], true);
        assert_eq!(json["suggestions"][0]["isPopular"], false);
        // Plain u64 epoch-millis on the wire, stamped at build time.
        let ts = json["timestamp"].as_u64().unwrap();
        assert!(ts > 1_600_000_000_000, "timestamp {ts} not epoch millis");
    }
}
