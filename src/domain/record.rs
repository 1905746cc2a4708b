use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::utils::time_utils;

/// One revenue-bearing line item from the till: which store sold it,
/// when, and for how much (net; negative for refunds).
///
/// Every field is optional. Upstream data quality is uneven and a record
/// with a missing or unparseable field is kept as-is instead of failing
/// the batch; filters and aggregators treat `None` as "never matches".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Record {
    pub location: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
    pub price: Option<f64>,
}

/// A flat batch of records. Loaded once per session and treated as
/// read-only from then on; every filter hands back a fresh subset.
pub type RecordSet = Vec<Record>;

impl Record {
    pub fn new(
        location: Option<String>,
        timestamp: Option<NaiveDateTime>,
        price: Option<f64>,
    ) -> Self {
        Record {
            location,
            timestamp,
            price,
        }
    }

    /// Build a Record from raw upstream fields.
    ///
    /// A date string that fails to parse degrades the record (timestamp
    /// becomes `None`) with a warning. Nothing here ever errors.
    pub fn from_raw(location: Option<String>, date: Option<&str>, price: Option<f64>) -> Self {
        let timestamp = date.and_then(|raw| {
            let parsed = time_utils::parse_naive_datetime(raw);
            if parsed.is_none() {
                log::warn!("Dropping unparseable article date: {:?}", raw);
            }
            parsed
        });

        Record {
            location,
            timestamp,
            price,
        }
    }

    /// Calendar date of the event, ignoring time of day.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date())
    }
}
