use std::collections::HashMap;

use serde::Serialize;

use crate::analysis::aggregate::{Bucket, bucketize, check_schema};
use crate::analysis::filters::{filter_by_location, records_in_range};
use crate::domain::{DateArg, DateRange, Granularity, Record};
use crate::error::LensError;

/// The aggregation result for one (location, granularity) pair, carrying
/// the labeling metadata a chart renderer needs to title itself.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Series {
    pub location: String,
    pub granularity: Granularity,
    pub range: DateRange,
    pub buckets: Vec<Bucket>,
}

impl Series {
    /// "Location (start to end)" title string for the chart renderer.
    pub fn chart_title(&self) -> String {
        format!(
            "{} ({} to {})",
            self.location, self.range.start, self.range.end
        )
    }
}

/// One inner map per requested location, keyed by granularity.
pub type SeriesByLocation = HashMap<String, HashMap<Granularity, Series>>;

/// The whole pipeline: date filter once, then per location, then per
/// granularity. Pure function of its inputs; any fetch or logging of the
/// underlying data happens before this is called.
///
/// Duplicate locations in the selection collapse to one entry. A
/// location absent from the data yields a Series with no buckets, not an
/// error.
///
/// The schema precondition is checked once against the inbound batch.
/// Per-location subsets are never checked again: a location whose
/// in-range records are all degraded aggregates to an empty bucket list
/// and the other locations keep their series.
pub fn build_series(
    records: &[Record],
    locations: &[String],
    start: impl Into<DateArg>,
    end: impl Into<DateArg>,
    granularities: &[Granularity],
) -> Result<SeriesByLocation, LensError> {
    if locations.is_empty() {
        return Err(LensError::NoLocationsSelected);
    }

    let range = DateRange::new(start, end)?;
    check_schema(records)?;
    let in_range = records_in_range(records, &range);

    let mut by_location: SeriesByLocation = HashMap::new();
    for location in locations {
        if by_location.contains_key(location) {
            continue;
        }

        let subset = filter_by_location(&in_range, std::slice::from_ref(location))?;

        let mut per_granularity = HashMap::new();
        for &granularity in granularities {
            let buckets = bucketize(&subset, granularity);
            per_granularity.insert(
                granularity,
                Series {
                    location: location.clone(),
                    granularity,
                    range,
                    buckets,
                },
            );
        }
        by_location.insert(location.clone(), per_granularity);
    }

    Ok(by_location)
}
