use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::LensError;
use crate::utils::time_utils;

/// A range boundary as handed over by the caller: the date picker sends
/// strings, programmatic callers usually have a parsed value already.
pub enum DateArg {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

impl DateArg {
    /// Resolve to the calendar date used for boundary comparison.
    /// Only the string form can fail; the error names the raw value.
    pub fn resolve(&self) -> Result<NaiveDate, LensError> {
        match self {
            DateArg::Date(date) => Ok(*date),
            DateArg::DateTime(dt) => Ok(dt.date()),
            DateArg::Text(raw) => {
                time_utils::parse_date_only(raw).ok_or_else(|| LensError::DateParse {
                    value: raw.clone(),
                })
            }
        }
    }
}

impl From<NaiveDate> for DateArg {
    fn from(date: NaiveDate) -> Self {
        DateArg::Date(date)
    }
}

impl From<NaiveDateTime> for DateArg {
    fn from(dt: NaiveDateTime) -> Self {
        DateArg::DateTime(dt)
    }
}

impl From<&str> for DateArg {
    fn from(raw: &str) -> Self {
        DateArg::Text(raw.to_string())
    }
}

impl From<String> for DateArg {
    fn from(raw: String) -> Self {
        DateArg::Text(raw)
    }
}

/// An inclusive calendar-date interval. Construction validates ordering,
/// so a held DateRange is always well-formed.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Parse both boundaries first, then validate ordering.
    pub fn new(start: impl Into<DateArg>, end: impl Into<DateArg>) -> Result<Self, LensError> {
        let start = start.into().resolve()?;
        let end = end.into().resolve()?;

        if start > end {
            return Err(LensError::StartAfterEnd { start, end });
        }

        Ok(DateRange { start, end })
    }

    /// Inclusive on both ends; time of day plays no part.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
