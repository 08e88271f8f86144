//! The ephemeris collaborator interface.

use crate::error::ProviderError;
use crate::julian::julian_day_ut;
use crate::types::{AyanamshaSystem, BodyPosition, EphemerisBody, HouseCusps, HouseSystem, PositionFlags};

/// Source of planetary positions, house cusps and ayanamsha values.
///
/// Implementations must be shareable across threads: the chart assembler
/// issues independent calls concurrently against one `&provider`.
pub trait EphemerisProvider: Send + Sync {
    /// Whether the provider is initialized and can answer queries.
    fn ready(&self) -> Result<(), ProviderError>;

    /// Julian Day (UT) for a calendar date and hour in UT.
    ///
    /// The hour may fall outside 0..24 after a timezone shift.
    fn julian_day(&self, year: i32, month: u32, day: u32, hour_ut: f64) -> f64 {
        julian_day_ut(year, month, day, hour_ut)
    }

    /// Geocentric ecliptic position of `body`.
    fn body_position(
        &self,
        jd_ut: f64,
        body: EphemerisBody,
        flags: PositionFlags,
    ) -> Result<BodyPosition, ProviderError>;

    /// Tropical house cusps for a geographic location.
    fn house_cusps(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, ProviderError>;

    /// Ayanamsha in degrees at `jd_ut`.
    fn ayanamsha(&self, jd_ut: f64, system: AyanamshaSystem) -> Result<f64, ProviderError>;
}
