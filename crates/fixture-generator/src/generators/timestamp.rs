//! Timestamp value generators.
//!
//! All windows are relative to a reference date that stands in for "now",
//! which keeps generated data reproducible across runs.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use rand::Rng;

/// Days of history for customer sign-up dates (five years).
pub const CUSTOMER_HISTORY_DAYS: i64 = 5 * 365;

/// Days of history for product creation dates (three years).
pub const PRODUCT_HISTORY_DAYS: i64 = 3 * 365;

/// Earliest offset of a future-dated customer row.
pub const FUTURE_MIN_DAYS: i64 = 1;

/// Latest offset of a future-dated customer row.
pub const FUTURE_MAX_DAYS: i64 = 30;

/// Generate a random timestamp in `[start, end]` with seconds precision.
pub fn datetime_between<R: Rng>(
    rng: &mut R,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> NaiveDateTime {
    let start_ts = start.and_utc().timestamp();
    let end_ts = end.and_utc().timestamp();

    if start_ts >= end_ts {
        return start;
    }

    let random_ts = rng.random_range(start_ts..=end_ts);
    DateTime::from_timestamp(random_ts, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or(start)
}

/// Random timestamp within the `days` before `reference`.
pub fn past_datetime<R: Rng>(rng: &mut R, reference: NaiveDateTime, days: i64) -> NaiveDateTime {
    datetime_between(rng, reference - Duration::days(days), reference)
}

/// Random timestamp between one and thirty days after `reference`.
pub fn future_datetime<R: Rng>(rng: &mut R, reference: NaiveDateTime) -> NaiveDateTime {
    datetime_between(
        rng,
        reference + Duration::days(FUTURE_MIN_DAYS),
        reference + Duration::days(FUTURE_MAX_DAYS),
    )
}

/// Parse a reference date given as RFC 3339 or `YYYY-MM-DD`.
///
/// RFC 3339 values are converted to UTC; dates become midnight.
pub fn parse_reference_date(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}
