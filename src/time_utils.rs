// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling.

use chrono::{DateTime, Datelike, Duration, NaiveDate, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Calendar-week bucket for a timestamp: the most recent Sunday on or before
/// it, in UTC.
pub fn week_start_sunday(date: DateTime<Utc>) -> NaiveDate {
    let day = date.date_naive();
    day - Duration::days(i64::from(day.weekday().num_days_from_sunday()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sunday_is_its_own_week_start() {
        // 2024-01-07 was a Sunday
        let date = Utc.with_ymd_and_hms(2024, 1, 7, 9, 30, 0).unwrap();
        assert_eq!(
            week_start_sunday(date),
            NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
        );
    }

    #[test]
    fn test_saturday_maps_back_to_previous_sunday() {
        // 2024-01-13 was a Saturday
        let date = Utc.with_ymd_and_hms(2024, 1, 13, 23, 59, 59).unwrap();
        assert_eq!(
            week_start_sunday(date),
            NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
        );
    }

    #[test]
    fn test_format_utc_rfc3339() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2024-01-15T10:00:00Z");
    }
}
