use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// The temporal grouping resolution for revenue aggregation.
///
/// One enum instead of one near-duplicate grouping function per
/// resolution; the only thing that actually varies is key extraction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Granularity {
    /// 0-23, across every day in range
    HourOfDay,
    /// 1-31, across every month in range
    DayOfMonth,
    /// ISO calendar week, keyed with its ISO year
    IsoWeek,
    /// 1-12
    MonthOfYear,
}

/// The grouping key extracted from one record timestamp.
///
/// ISO weeks carry their ISO year so that week 1 of adjacent years never
/// collides. An earlier revision of this logic keyed by week number
/// alone, which silently merges buckets across year boundaries.
///
/// Derived ordering sorts `Week` by (year, week); within one aggregation
/// every key is the same variant, so cross-variant ordering never shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum BucketKey {
    Hour(u32),
    Day(u32),
    Week { year: i32, week: u32 },
    Month(u32),
}

impl BucketKey {
    /// Short x-axis label for the chart renderer.
    pub fn label(&self) -> String {
        match self {
            BucketKey::Hour(hour) => format!("{:02}:00", hour),
            BucketKey::Day(day) => day.to_string(),
            BucketKey::Week { year, week } => format!("{}-W{:02}", year, week),
            BucketKey::Month(month) => month.to_string(),
        }
    }
}

impl Granularity {
    /// Extract the grouping key for one timestamp.
    pub fn key_of(&self, ts: NaiveDateTime) -> BucketKey {
        match self {
            Granularity::HourOfDay => BucketKey::Hour(ts.hour()),
            Granularity::DayOfMonth => BucketKey::Day(ts.day()),
            Granularity::IsoWeek => BucketKey::Week {
                year: ts.iso_week().year(),
                week: ts.iso_week().week(),
            },
            Granularity::MonthOfYear => BucketKey::Month(ts.month()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_key_extraction_per_granularity() {
        let stamp = ts(2020, 4, 1, 13);
        assert_eq!(Granularity::HourOfDay.key_of(stamp), BucketKey::Hour(13));
        assert_eq!(Granularity::DayOfMonth.key_of(stamp), BucketKey::Day(1));
        assert_eq!(Granularity::MonthOfYear.key_of(stamp), BucketKey::Month(4));
        assert_eq!(
            Granularity::IsoWeek.key_of(stamp),
            BucketKey::Week {
                year: 2020,
                week: 14
            }
        );
    }

    #[test]
    fn test_iso_week_year_boundary() {
        // 2019-12-30 already belongs to ISO week 1 of 2020
        assert_eq!(
            Granularity::IsoWeek.key_of(ts(2019, 12, 30, 9)),
            BucketKey::Week {
                year: 2020,
                week: 1
            }
        );
        // 2021-01-01 still belongs to ISO week 53 of 2020
        assert_eq!(
            Granularity::IsoWeek.key_of(ts(2021, 1, 1, 9)),
            BucketKey::Week {
                year: 2020,
                week: 53
            }
        );
    }

    #[test]
    fn test_week_keys_order_by_year_then_week() {
        let late_2020 = BucketKey::Week {
            year: 2020,
            week: 53,
        };
        let early_2021 = BucketKey::Week {
            year: 2021,
            week: 1,
        };
        assert!(
            late_2020 < early_2021,
            "week 53/2020 must sort before week 1/2021"
        );
    }

    #[test]
    fn test_bucket_key_labels() {
        assert_eq!(BucketKey::Hour(9).label(), "09:00");
        assert_eq!(BucketKey::Day(31).label(), "31");
        assert_eq!(
            BucketKey::Week {
                year: 2020,
                week: 1
            }
            .label(),
            "2020-W01"
        );
        assert_eq!(BucketKey::Month(12).label(), "12");
    }

    #[test]
    fn test_granularity_parses_kebab_case() {
        assert_eq!(
            Granularity::from_str("hour-of-day").unwrap(),
            Granularity::HourOfDay
        );
        assert_eq!(
            Granularity::from_str("iso-week").unwrap(),
            Granularity::IsoWeek
        );
        assert_eq!(Granularity::MonthOfYear.to_string(), "month-of-year");
        assert!(Granularity::from_str("fortnight").is_err());
    }
}
