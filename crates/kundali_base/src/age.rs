//! Approximate age for birth-chart display.
//!
//! This is calendar arithmetic with average year/month lengths
//! (365.25 and 30.44 days), not sidereal or astronomical time.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Average days per year.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Average days per month.
pub const DAYS_PER_MONTH: f64 = 30.44;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Whole years and remaining whole months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApproximateAge {
    pub years: u32,
    pub months: u32,
}

/// Age from a birth date (taken at local midnight) to `now`.
///
/// Returns `None` when `now` is before the birth date.
pub fn approximate_age(birth: NaiveDate, now: NaiveDateTime) -> Option<ApproximateAge> {
    let elapsed_ms = (now - birth.and_hms_opt(0, 0, 0)?).num_milliseconds();
    if elapsed_ms < 0 {
        return None;
    }
    let elapsed_ms = elapsed_ms as f64;
    let year_ms = DAYS_PER_YEAR * MS_PER_DAY;
    let month_ms = DAYS_PER_MONTH * MS_PER_DAY;
    Some(ApproximateAge {
        years: (elapsed_ms / year_ms).floor() as u32,
        months: ((elapsed_ms % year_ms) / month_ms).floor() as u32,
    })
}
