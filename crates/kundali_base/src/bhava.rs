//! Whole-sign house (bhava) numbering relative to an anchor sign.
//!
//! The anchor is the ascendant's sign for birth charts and the Moon's sign
//! for transit charts. The anchor sign is always house 1.

use serde::Serialize;

/// Angular houses.
pub const KENDRA_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// Trine houses.
pub const TRIKONA_HOUSES: [u8; 3] = [1, 5, 9];

/// House number (1-12) of a sign counted from the anchor sign.
///
/// Both indices are 0-based rashi indices in 0..=11.
pub fn house_number(sign_index: u8, anchor_sign_index: u8) -> u8 {
    debug_assert!(sign_index < 12, "sign index out of range: {sign_index}");
    debug_assert!(anchor_sign_index < 12, "anchor index out of range: {anchor_sign_index}");
    (sign_index + 12 - anchor_sign_index) % 12 + 1
}

/// Sign index occupying a house, inverse of [`house_number`].
pub fn sign_in_house(house: u8, anchor_sign_index: u8) -> u8 {
    debug_assert!((1..=12).contains(&house), "house out of range: {house}");
    debug_assert!(anchor_sign_index < 12, "anchor index out of range: {anchor_sign_index}");
    (anchor_sign_index + house - 1) % 12
}

/// Whether a house is a kendra (1, 4, 7, 10).
pub fn is_kendra(house: u8) -> bool {
    debug_assert!((1..=12).contains(&house), "house out of range: {house}");
    KENDRA_HOUSES.contains(&house)
}

/// Whether a house is a trikona (1, 5, 9).
pub fn is_trikona(house: u8) -> bool {
    debug_assert!((1..=12).contains(&house), "house out of range: {house}");
    TRIKONA_HOUSES.contains(&house)
}

/// Structural categories of a house, for display decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HouseClass {
    pub kendra: bool,
    pub trikona: bool,
}

impl HouseClass {
    pub fn of(house: u8) -> Self {
        Self {
            kendra: is_kendra(house),
            trikona: is_trikona(house),
        }
    }
}
