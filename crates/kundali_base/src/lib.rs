//! Pure Vedic chart math built on sidereal longitudes.
//!
//! This crate provides:
//! - Angle normalization
//! - Rashi (sign/degree/minute) and nakshatra/pada placement
//! - Whole-sign house numbering and graha drishti by sign offsets
//! - The fixed South Indian chart layout
//! - Dignity classification and injectable reference data
//!
//! Nothing here queries an ephemeris; inputs are sidereal longitudes.

pub mod age;
pub mod bhava;
pub mod dignity;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod layout;
pub mod nakshatra;
pub mod rashi;
pub mod reference;
pub mod util;

pub use age::{ApproximateAge, approximate_age};
pub use bhava::{HouseClass, KENDRA_HOUSES, TRIKONA_HOUSES, house_number, is_kendra, is_trikona, sign_in_house};
pub use dignity::{Dignity, DignityMark, DignityTable, parashari_dignity};
pub use drishti::{AspectOffsets, aspected_signs, default_aspect_offsets, is_aspected};
pub use error::ReferenceError;
pub use graha::{ALL_GRAHAS, Graha, nth_rashi_from, rashi_lord};
pub use layout::{CENTER_CELLS, GRID_SIZE, GridCell, LayoutCell, LayoutSlot, SOUTH_INDIAN_LAYOUT, cell_of_sign, slot_at};
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraPlacement, PADA_SPAN, nakshatra_placement};
pub use rashi::{ALL_RASHIS, Rashi, SignPlacement, sign_placement};
pub use reference::ReferenceData;
pub use util::normalize_360;
