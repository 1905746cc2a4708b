use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the filtering and aggregation core.
///
/// Degraded individual records (missing location, date or price) are never
/// errors. They just drop out of every match and the batch continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LensError {
    // An empty location selection is a caller bug, not "match everything"
    #[error("no locations selected")]
    NoLocationsSelected,

    // A selection element that is not a string (bad callback payload)
    #[error("location selection must contain only strings, got: {value}")]
    LocationNotAString { value: String },

    // A start/end argument that did not parse as a date
    #[error("unparseable date: {value:?}")]
    DateParse { value: String },

    #[error("start date {start} is after end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },

    // A non-empty record set with no usable value at all in the named field.
    // Distinct from a merely-empty result, which aggregates to no buckets.
    #[error("record set has no usable {field} field")]
    Schema { field: &'static str },
}
