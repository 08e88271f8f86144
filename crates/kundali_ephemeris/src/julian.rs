//! Calendar date to Julian Day conversion.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Convert a calendar date to a Julian Day (Meeus, chapter 7).
///
/// `day` may carry a fractional part for the time of day. Dates from
/// 1582-10-15 onward use the Gregorian calendar, earlier dates the Julian.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };

    let gregorian = (year, month, day) >= (1582, 10, 15.0);
    let b = if gregorian {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian Day from a calendar date and a (possibly out-of-range) hour in UT.
///
/// Hours below 0 or above 24 spill into the neighbouring day, which is what
/// a timezone shift such as `hour - offset` produces.
pub fn julian_day_ut(year: i32, month: u32, day: u32, hour_ut: f64) -> f64 {
    calendar_to_jd(year, month, f64::from(day) + hour_ut / 24.0)
}
