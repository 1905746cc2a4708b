use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse an upstream timestamp string into a naive local reading.
///
/// Offset-carrying strings (RFC 3339, which is what the invoice export
/// emits) keep their wall-clock time. No normalization to UTC: the till
/// at a store runs on store-local time and the buckets should too.
pub fn parse_naive_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    // Bare "YYYY-MM-DDTHH:MM:SS[.fff]" without an offset
    raw.parse::<NaiveDateTime>().ok()
}

/// Parse a range boundary: either a plain date or a date-time, in which
/// case only the calendar date portion is kept.
pub fn parse_date_only(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(date);
    }
    parse_naive_datetime(raw).map(|dt| dt.date())
}
