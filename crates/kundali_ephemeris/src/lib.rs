//! Ephemeris collaborator for kundali charts.
//!
//! This crate does no astronomy. It defines the [`EphemerisProvider`]
//! interface a chart assembler queries for positions, house cusps and
//! ayanamsha values, the value types those calls exchange, calendar to
//! Julian Day conversion, and [`SnapshotProvider`], which answers from one
//! recorded epoch.

pub mod error;
pub mod julian;
pub mod provider;
pub mod snapshot;
pub mod types;

pub use error::ProviderError;
pub use julian::{J2000_JD, calendar_to_jd, julian_day_ut};
pub use provider::EphemerisProvider;
pub use snapshot::{RecordedHouses, Snapshot, SnapshotProvider};
pub use types::{
    AyanamshaSystem, BodyPosition, EphemerisBody, HouseCusps, HouseSystem, PositionFlags,
};
