// Filtering and aggregation over a loaded record set
// These modules are pure business logic independent of data loading and rendering

pub mod aggregate;
pub mod filters;
pub mod series;

// Re-export key types for convenience
pub use aggregate::{Bucket, aggregate};
pub use filters::{filter_by_date_range, filter_by_location, parse_location_selection};
pub use series::{Series, SeriesByLocation, build_series};
