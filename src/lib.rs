// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod utils;

// Re-export commonly used types
pub use analysis::{
    Bucket, Series, SeriesByLocation, aggregate, build_series, filter_by_date_range,
    filter_by_location, parse_location_selection,
};
pub use data::{load_records_from_file, unique_locations};
pub use domain::{BucketKey, DateArg, DateRange, Granularity, Record, RecordSet};
pub use error::LensError;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a saved invoice export (JSON)
    #[arg(long, default_value = config::DEFAULTS.invoices_path)]
    pub invoices: String,

    /// Store location to build series for (repeatable).
    /// Defaults to every location found in the data.
    #[arg(long = "location")]
    pub locations: Vec<String>,

    /// Range start date, YYYY-MM-DD
    #[arg(long, default_value = config::DEFAULTS.start_date)]
    pub start: String,

    /// Range end date, YYYY-MM-DD
    #[arg(long, default_value = config::DEFAULTS.end_date)]
    pub end: String,

    /// Granularity to aggregate by (repeatable): hour-of-day,
    /// day-of-month, iso-week or month-of-year. Defaults to all four.
    #[arg(long = "granularity")]
    pub granularities: Vec<String>,
}
