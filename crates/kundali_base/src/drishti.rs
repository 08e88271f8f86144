//! Graha drishti (planetary aspect) by whole-sign offsets.
//!
//! A graha aspects the signs at fixed 1-based offsets counted from its own
//! sign (offset 1 is its own sign, 7 the opposite one). Which offsets a
//! graha has is reference data; this module only evaluates membership.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, nth_rashi_from};

/// Set of 1-based sign offsets a graha aspects.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<u8>", into = "Vec<u8>")]
pub struct AspectOffsets(Vec<u8>);

impl From<Vec<u8>> for AspectOffsets {
    fn from(v: Vec<u8>) -> Self {
        Self::new(v)
    }
}

impl From<AspectOffsets> for Vec<u8> {
    fn from(o: AspectOffsets) -> Self {
        o.0
    }
}

impl AspectOffsets {
    /// Build from offsets; duplicates are removed and order is normalized.
    pub fn new(offsets: impl IntoIterator<Item = u8>) -> Self {
        let mut v: Vec<u8> = offsets.into_iter().collect();
        v.sort_unstable();
        v.dedup();
        Self(v)
    }

    pub fn contains(&self, offset: u8) -> bool {
        self.0.contains(&offset)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First offset outside 1..=12, if any.
    pub fn first_invalid(&self) -> Option<u8> {
        self.0.iter().copied().find(|o| !(1..=12).contains(o))
    }
}

/// Default aspect offsets (Parashari): every graha aspects the 7th; Mars
/// adds 4th/8th, Jupiter 5th/9th, Saturn 3rd/10th, the nodes 5th/9th.
pub fn default_aspect_offsets(graha: Graha) -> AspectOffsets {
    match graha {
        Graha::Mangal => AspectOffsets::new([4, 7, 8]),
        Graha::Guru | Graha::Rahu | Graha::Ketu => AspectOffsets::new([5, 7, 9]),
        Graha::Shani => AspectOffsets::new([3, 7, 10]),
        Graha::Surya | Graha::Chandra | Graha::Buddh | Graha::Shukra => AspectOffsets::new([7]),
    }
}

/// Whether `target_sign_index` is aspected from `source_sign_index`.
///
/// True iff some offset `o` satisfies `(source + o - 1) % 12 == target`.
pub fn is_aspected(target_sign_index: u8, source_sign_index: u8, offsets: &AspectOffsets) -> bool {
    debug_assert!(target_sign_index < 12, "target index out of range: {target_sign_index}");
    offsets
        .as_slice()
        .iter()
        .any(|&o| nth_rashi_from(source_sign_index, o) == target_sign_index)
}

/// All sign indices aspected from `source_sign_index`, ascending.
pub fn aspected_signs(source_sign_index: u8, offsets: &AspectOffsets) -> Vec<u8> {
    (0..12u8)
        .filter(|&t| is_aspected(t, source_sign_index, offsets))
        .collect()
}
