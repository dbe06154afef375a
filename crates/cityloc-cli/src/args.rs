use clap::{Parser, Subcommand};

/// CLI arguments for cityloc-cli
#[derive(Debug, Parser)]
#[command(
    name = "cityloc",
    version,
    about = "CLI for querying a city catalog: nearest-city lookup and autocomplete"
)]
pub struct CliArgs {
    /// Path to a catalog JSON file (array of city records)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// URL of a catalog endpoint returning the full record set in one call
    #[arg(short = 'u', long = "url", global = true, conflicts_with = "input")]
    pub url: Option<String>,

    /// Timeout in seconds for HTTP catalog fetches
    #[arg(long = "timeout-secs", global = true, default_value_t = 10)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// Find the catalog entry nearest to a coordinate
    Nearest {
        /// Degrees, -90 to 90
        latitude: f64,
        /// Degrees, -180 to 180
        longitude: f64,
    },

    /// List autocomplete suggestions for a partial term
    Suggest {
        /// Partial city or region name (case- and accent-insensitive)
        term: String,
    },
}
