//! Basic usage example for cityloc-rs
//!
//! This example demonstrates how to:
//! - Wire a catalog source into the resolution service
//! - Resolve the nearest city to a coordinate
//! - Run autocomplete queries
//! - Reuse the cached snapshot across calls

use cityloc_rs::{CatalogSource, CityRecord, ResolutionService, Result, SourceError};

/// In-memory source standing in for the content service.
struct StaticSource(Vec<CityRecord>);

impl CatalogSource for StaticSource {
    fn fetch_all(&self) -> std::result::Result<Vec<CityRecord>, SourceError> {
        Ok(self.0.clone())
    }
}

fn record(id: u64, name: &str, region: &str, lat: f64, lon: f64) -> CityRecord {
    CityRecord {
        id,
        name: name.into(),
        region: region.into(),
        latitude: lat,
        longitude: lon,
        is_urban: true,
        is_popular: false,
    }
}

fn main() -> Result<()> {
    println!("=== cityloc-rs Basic Usage Example ===\n");

    let source = StaticSource(vec![
        record(1, "Mumbai", "Maharashtra", 19.07, 72.87),
        record(2, "Pune", "Maharashtra", 18.52, 73.85),
        record(3, "Delhi", "Delhi", 28.6, 77.2),
    ]);
    let service = ResolutionService::new(source);

    // Example 1: Nearest city to a coordinate
    println!("--- Example 1: Nearest city ---");
    let (city, km) = service.resolve_nearest(19.0, 72.9)?;
    println!("Nearest to (19.0, 72.9): {} ({} km)\n", city.name, km);

    // Example 2: Autocomplete by prefix
    println!("--- Example 2: Autocomplete, prefix ---");
    for hit in service.autocomplete("mum")? {
        println!("- {}, {}", hit.name, hit.region);
    }
    println!();

    // Example 3: Multi-token query spanning name and region
    println!("--- Example 3: Autocomplete, multi-token ---");
    for hit in service.autocomplete("maharashtra pune")? {
        println!("- {}, {}", hit.name, hit.region);
    }
    println!();

    // Example 4: Short queries return an empty list, not an error
    println!("--- Example 4: Short query ---");
    let hits = service.autocomplete("m")?;
    println!("Suggestions for \"m\": {}\n", hits.len());

    // Example 5: The snapshot is cached; repeat queries skip the source
    println!("--- Example 5: Cached snapshot ---");
    let start = std::time::Instant::now();
    let stats = service.stats()?;
    println!("{} cities served from cache in {:?}", stats.cities, start.elapsed());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
