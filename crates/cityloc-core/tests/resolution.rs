//! End-to-end tests for the resolution façade: cache discipline, nearest
//! lookup and autocomplete behavior through `ResolutionService`.

use cityloc_core::{
    CatalogSource, CityRecord, LocError, ResolutionService, SourceError, MAX_SUGGESTIONS,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

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

fn sample_catalog() -> Vec<CityRecord> {
    vec![
        rec(1, "Mumbai", "Maharashtra", 19.07, 72.87),
        rec(2, "Pune", "Maharashtra", 18.52, 73.85),
        rec(3, "Delhi", "Delhi", 28.6, 77.2),
    ]
}

/// Plays back a queue of fetch outcomes, repeating the last one, and counts
/// how often the service actually reached upstream.
struct ScriptedSource {
    calls: AtomicUsize,
    script: Mutex<Vec<Result<Vec<CityRecord>, SourceError>>>,
}

impl ScriptedSource {
    fn new(script: Vec<Result<Vec<CityRecord>, SourceError>>) -> Self {
        assert!(!script.is_empty());
        let mut script = script;
        script.reverse();
        Self {
            calls: AtomicUsize::new(0),
            script: Mutex::new(script),
        }
    }

    fn ok(records: Vec<CityRecord>) -> Self {
        Self::new(vec![Ok(records)])
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CatalogSource for ScriptedSource {
    fn fetch_all(&self) -> Result<Vec<CityRecord>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            script.pop().unwrap()
        } else {
            // Repeat the final outcome; errors are rebuilt since
            // SourceError is not Clone.
            match script.last().unwrap() {
                Ok(records) => Ok(records.clone()),
                Err(_) => Err(SourceError::Empty),
            }
        }
    }
}

#[test]
fn nearest_point_offshore_resolves_to_mumbai() {
    let service = ResolutionService::new(ScriptedSource::ok(sample_catalog()));
    let (city, km) = service.resolve_nearest(19.0, 72.9).unwrap();
    assert_eq!(city.name, "Mumbai");
    assert!((1.0..=10.0).contains(&km), "distance {km}");
}

#[test]
fn repeated_queries_reuse_one_fetch() {
    let source = std::sync::Arc::new(ScriptedSource::ok(sample_catalog()));
    let service = ResolutionService::new(std::sync::Arc::clone(&source));
    service.resolve_nearest(19.0, 72.9).unwrap();
    service.autocomplete("mum").unwrap();
    service.autocomplete("pune").unwrap();
    let stats = service.stats().unwrap();
    assert_eq!(stats.cities, 3);
    assert_eq!(source.calls(), 1);
}

#[test]
fn autocomplete_scenarios_from_the_site() {
    let service = ResolutionService::new(ScriptedSource::ok(sample_catalog()));

    let hits = service.autocomplete("mum").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Mumbai");

    let hits = service.autocomplete("maharashtra pune").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Pune");

    assert!(service.autocomplete("xz").unwrap().is_empty());
    assert!(service.autocomplete("m").unwrap().is_empty());
    assert!(service.autocomplete("").unwrap().is_empty());
}

#[test]
fn autocomplete_never_exceeds_the_cap_or_duplicates_pairs() {
    let mut catalog: Vec<CityRecord> = (0..40)
        .map(|i| rec(i, &format!("Newtown {i}"), "Region", 1.0, 1.0))
        .collect();
    // Duplicate (name, region) pair late in the catalog.
    catalog.push(rec(99, "Newtown 0", "Region", 2.0, 2.0));

    let service = ResolutionService::new(ScriptedSource::ok(catalog));
    let hits = service.autocomplete("newtown").unwrap();
    assert_eq!(hits.len(), MAX_SUGGESTIONS);

    let mut pairs: Vec<(String, String)> = hits
        .iter()
        .map(|r| (r.name.clone(), r.region.clone()))
        .collect();
    pairs.sort();
    pairs.dedup();
    assert_eq!(pairs.len(), MAX_SUGGESTIONS);
}

#[test]
fn invalid_coordinates_surface_as_client_errors() {
    let service = ResolutionService::new(ScriptedSource::ok(sample_catalog()));
    let err = service.resolve_nearest(200.0, 0.0).unwrap_err();
    assert!(matches!(err, LocError::InvalidCoordinates(_)));
    assert_eq!(err.status_code(), 400);
}

#[test]
fn refresh_failure_with_a_recent_snapshot_degrades_gracefully() {
    let source = ScriptedSource::new(vec![
        Ok(sample_catalog()),
        Err(SourceError::Malformed("upstream 500".into())),
    ]);
    let service = ResolutionService::with_ttl(source, Duration::from_millis(10));

    let (city, _) = service.resolve_nearest(19.0, 72.9).unwrap();
    assert_eq!(city.name, "Mumbai");

    std::thread::sleep(Duration::from_millis(20));

    // The refresh fails but the stale snapshot keeps answering.
    let (city, _) = service.resolve_nearest(19.0, 72.9).unwrap();
    assert_eq!(city.name, "Mumbai");
}

#[test]
fn failure_before_any_snapshot_is_unavailable() {
    let service = ResolutionService::new(ScriptedSource::new(vec![Err(SourceError::Empty)]));
    let err = service.autocomplete("mum").unwrap_err();
    assert!(matches!(err, LocError::CatalogUnavailable(_)));
    assert_eq!(err.status_code(), 500);
}

#[test]
fn autocomplete_results_clone_all_record_fields() {
    let mut catalog = sample_catalog();
    catalog[0].is_urban = true;
    catalog[0].is_popular = true;
    let service = ResolutionService::new(ScriptedSource::ok(catalog));

    let hits = service.autocomplete("mumbai").unwrap();
    assert_eq!(hits[0].id, 1);
    assert_eq!(hits[0].region, "Maharashtra");
    assert!(hits[0].is_urban);
    assert!(hits[0].is_popular);
    assert_eq!(hits[0].latitude, 19.07);
    assert_eq!(hits[0].longitude, 72.87);
}
