//! cityloc-cli — Command-line interface for cityloc-core
//!
//! This binary provides a simple way to query a city catalog from your
//! terminal. It supports printing basic statistics, resolving the nearest
//! city to a coordinate, and listing autocomplete suggestions for a partial
//! term.
//!
//! Usage examples
//! --------------
//!
//! - Show catalog stats from a local JSON file
//!   $ cityloc-cli --input cities.json stats
//!
//! - Nearest city to a coordinate
//!   $ cityloc-cli --input cities.json nearest 19.0 72.9
//!
//! - Autocomplete suggestions
//!   $ cityloc-cli --input cities.json suggest mum
//!
//! - Query a live catalog endpoint (honors --timeout-secs)
//!   $ cityloc-cli --url https://example.com/api/cities suggest pune
//!
//! Data source
//! -----------
//!
//! The catalog is a JSON array of city records (`id`, `name`, `region`,
//! `latitude`, `longitude`, `isUrban`, `isPopular`), the same shape the
//! content service serves over HTTP. The catalog is fetched once and cached
//! in-process for the lifetime of the invocation.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use cityloc_core::{CatalogSource, JsonFileSource, ResolutionService};

fn main() -> anyhow::Result<()> {
    // Cache warnings (e.g. stale-snapshot fallbacks) go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let source: Box<dyn CatalogSource> = match (&args.input, &args.url) {
        (Some(path), _) => Box::new(JsonFileSource::new(path)),
        (None, Some(url)) => {
            #[cfg(feature = "fetch")]
            {
                Box::new(cityloc_core::HttpCatalogSource::with_timeout(
                    url,
                    std::time::Duration::from_secs(args.timeout_secs),
                )?)
            }
            #[cfg(not(feature = "fetch"))]
            {
                let _ = url;
                anyhow::bail!("this build has no HTTP support; rebuild with the 'fetch' feature")
            }
        }
        (None, None) => anyhow::bail!("provide --input <path> or --url <endpoint>"),
    };

    let service = ResolutionService::new(source);

    match args.command {
        Commands::Stats => {
            let stats = service.stats()?;
            println!("Catalog statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Urban: {}", stats.urban);
            println!("  Popular: {}", stats.popular);
        }

        Commands::Nearest {
            latitude,
            longitude,
        } => {
            let (city, km) = service.resolve_nearest(latitude, longitude)?;
            println!("Nearest city: {}", city.name);
            println!("Region: {}", city.region);
            println!("Distance: {km} km");
            println!("Coordinates: ({}, {})", city.latitude, city.longitude);
        }

        Commands::Suggest { term } => {
            let matches = service.autocomplete(&term)?;
            if matches.is_empty() {
                println!("No cities found matching: {term}");
            } else {
                for city in matches {
                    println!("{} — {}", city.name, city.region);
                }
            }
        }
    }

    Ok(())
}
