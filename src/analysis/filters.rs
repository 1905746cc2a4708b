use serde_json::Value;

use crate::domain::{DateArg, DateRange, Record, RecordSet};
use crate::error::LensError;

/// Vet a location selection arriving as loosely-typed JSON (the dropdown
/// callback hands over a JSON array, not a typed list).
///
/// Every element must be a string; the first non-string element fails the
/// whole selection.
pub fn parse_location_selection(selection: &[Value]) -> Result<Vec<String>, LensError> {
    selection
        .iter()
        .map(|value| match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(LensError::LocationNotAString {
                value: other.to_string(),
            }),
        })
        .collect()
}

/// Keep the records belonging to one of the requested locations.
///
/// Exact, case-sensitive match. Records without a known location never
/// match. An empty selection is rejected outright rather than treated as
/// "match nothing": it always means a caller bug upstream.
pub fn filter_by_location(records: &[Record], locations: &[String]) -> Result<RecordSet, LensError> {
    if locations.is_empty() {
        return Err(LensError::NoLocationsSelected);
    }

    let filtered = records
        .iter()
        .filter(|record| {
            record
                .location
                .as_deref()
                .is_some_and(|loc| locations.iter().any(|wanted| wanted == loc))
        })
        .cloned()
        .collect();

    Ok(filtered)
}

/// Keep the records whose calendar date falls inside [start, end].
///
/// Boundaries arrive as strings or pre-parsed values; both are resolved
/// and validated before any record is looked at, so start > end fails
/// even on an empty record set. Records without a timestamp never match.
pub fn filter_by_date_range(
    records: &[Record],
    start: impl Into<DateArg>,
    end: impl Into<DateArg>,
) -> Result<RecordSet, LensError> {
    let range = DateRange::new(start, end)?;
    Ok(records_in_range(records, &range))
}

/// Range filtering against an already-validated range.
pub(crate) fn records_in_range(records: &[Record], range: &DateRange) -> RecordSet {
    records
        .iter()
        .filter(|record| record.calendar_date().is_some_and(|date| range.contains(date)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(location: Option<&str>, date: Option<&str>, price: Option<f64>) -> Record {
        Record::from_raw(location.map(str::to_string), date, price)
    }

    fn sample_records() -> RecordSet {
        vec![
            record(Some("Bahnhof"), Some("2020-04-01T13:00:00"), Some(10.0)),
            record(Some("Bahnhof"), Some("2020-04-02T13:30:00"), Some(20.0)),
            record(Some("Marktplatz"), Some("2020-04-02T14:00:00"), Some(100.0)),
            // Degraded records: no location / no date
            record(None, Some("2020-04-01T09:00:00"), Some(5.0)),
            record(Some("Bahnhof"), None, Some(7.0)),
        ]
    }

    #[test]
    fn test_location_filter_cardinality() {
        let records = sample_records();
        let filtered =
            filter_by_location(&records, &["Bahnhof".to_string()]).unwrap();
        // Exactly the Bahnhof records, including the dateless one;
        // the null-location record never matches
        assert_eq!(filtered.len(), 3);
        assert!(
            filtered
                .iter()
                .all(|r| r.location.as_deref() == Some("Bahnhof"))
        );
    }

    #[test]
    fn test_location_filter_is_case_sensitive() {
        let records = sample_records();
        let filtered = filter_by_location(&records, &["bahnhof".to_string()]).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_empty_selection_rejected() {
        let err = filter_by_location(&sample_records(), &[]).unwrap_err();
        assert_eq!(err, LensError::NoLocationsSelected);
    }

    #[test]
    fn test_selection_with_non_string_element() {
        let selection = [json!("Bahnhof"), json!(42)];
        let err = parse_location_selection(&selection).unwrap_err();
        assert_eq!(
            err,
            LensError::LocationNotAString {
                value: "42".to_string()
            }
        );

        let selection = [json!("Bahnhof"), json!("Marktplatz")];
        let parsed = parse_location_selection(&selection).unwrap();
        assert_eq!(parsed, vec!["Bahnhof", "Marktplatz"]);
    }

    #[test]
    fn test_date_filter_single_day() {
        let records = sample_records();
        let filtered = filter_by_date_range(&records, "2020-04-02", "2020-04-02").unwrap();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| {
            r.calendar_date() == chrono::NaiveDate::from_ymd_opt(2020, 4, 2)
        }));
    }

    #[test]
    fn test_date_filter_ignores_time_of_day_at_boundaries() {
        // A 13:30 sale on the end date is still inside the range
        let records = sample_records();
        let filtered = filter_by_date_range(&records, "2020-04-01", "2020-04-02").unwrap();
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_start_after_end_fails_even_on_empty_set() {
        let empty: RecordSet = Vec::new();
        let err = filter_by_date_range(&empty, "2020-04-30", "2020-04-01").unwrap_err();
        assert!(matches!(err, LensError::StartAfterEnd { .. }));
    }

    #[test]
    fn test_filters_are_idempotent() {
        let records = sample_records();
        let once = filter_by_location(&records, &["Bahnhof".to_string()]).unwrap();
        let twice = filter_by_location(&once, &["Bahnhof".to_string()]).unwrap();
        assert_eq!(once, twice);

        let once = filter_by_date_range(&records, "2020-04-01", "2020-04-30").unwrap();
        let twice = filter_by_date_range(&once, "2020-04-01", "2020-04-30").unwrap();
        assert_eq!(once, twice);
    }
}
