//! Assembly inputs.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use kundali_ephemeris::{AyanamshaSystem, EphemerisProvider, HouseSystem};

/// Birth data: local civil date and time plus the place of birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthInput {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Hours east of UTC (5.5 for IST).
    pub timezone_offset_hours: f64,
    /// Geographic latitude, north positive.
    pub latitude: f64,
    /// Geographic longitude, east positive.
    pub longitude: f64,
    pub ayanamsha: AyanamshaSystem,
    pub house_system: HouseSystem,
}

impl BirthInput {
    /// Julian Day (UT): hour + minute/60 - timezone offset on the birth date.
    pub fn julian_day<P: EphemerisProvider + ?Sized>(&self, provider: &P) -> f64 {
        let hour_ut = decimal_hours(self.time) - self.timezone_offset_hours;
        provider.julian_day(self.date.year(), self.date.month(), self.date.day(), hour_ut)
    }
}

/// Transit instant in UT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitInput {
    pub at_ut: NaiveDateTime,
    pub ayanamsha: AyanamshaSystem,
}

impl TransitInput {
    pub fn julian_day<P: EphemerisProvider + ?Sized>(&self, provider: &P) -> f64 {
        let date = self.at_ut.date();
        provider.julian_day(date.year(), date.month(), date.day(), decimal_hours(self.at_ut.time()))
    }
}

fn decimal_hours(time: NaiveTime) -> f64 {
    f64::from(time.hour()) + f64::from(time.minute()) / 60.0 + f64::from(time.second()) / 3600.0
}
