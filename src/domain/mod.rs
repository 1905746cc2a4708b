// Domain types and value objects
pub mod date_range;
pub mod granularity;
pub mod record;

// Re-export commonly used types
pub use date_range::{DateArg, DateRange};
pub use granularity::{BucketKey, Granularity};
pub use record::{Record, RecordSet};
