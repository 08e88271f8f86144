//! Immutable reference data: sign and nakshatra names, dignity table and
//! per-graha aspect offsets.
//!
//! Loaded once (built-in defaults, optionally overlaid from a TOML file) and
//! passed by reference to whatever needs it.
//!
//! ```toml
//! localized_sign_names = ["Mesham", "Rishabam", ...]
//!
//! [aspects]
//! Rahu = [7]
//!
//! [dignities.Aries]
//! Sun = "Exalted"
//! Saturn = "Debilitated"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::dignity::{Dignity, DignityTable};
use crate::drishti::{AspectOffsets, default_aspect_offsets};
use crate::error::ReferenceError;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::nakshatra::ALL_NAKSHATRAS;
use crate::rashi::{ALL_RASHIS, Rashi};

/// Tamil sign names, Mesha first.
pub const TAMIL_SIGN_NAMES: [&str; 12] = [
    "Mesham",
    "Rishabam",
    "Mithunam",
    "Kadagam",
    "Simmam",
    "Kanni",
    "Thulam",
    "Viruchigam",
    "Dhanusu",
    "Magaram",
    "Kumbam",
    "Meenam",
];

/// Reference tables consumed by the chart engine and renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    sign_names: [String; 12],
    localized_sign_names: [String; 12],
    nakshatra_names: [String; 27],
    dignities: DignityTable,
    aspects: [AspectOffsets; 9],
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            sign_names: ALL_RASHIS.map(|r| r.western_name().to_string()),
            localized_sign_names: TAMIL_SIGN_NAMES.map(str::to_string),
            nakshatra_names: ALL_NAKSHATRAS.map(|n| n.name().to_string()),
            dignities: DignityTable::parashari(),
            aspects: ALL_GRAHAS.map(default_aspect_offsets),
        }
    }
}

/// On-disk shape. Every section is optional and overlays the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawReference {
    sign_names: Option<Vec<String>>,
    localized_sign_names: Option<Vec<String>>,
    nakshatra_names: Option<Vec<String>>,
    #[serde(default)]
    aspects: BTreeMap<String, AspectOffsets>,
    #[serde(default)]
    dignities: BTreeMap<String, BTreeMap<String, Dignity>>,
}

fn fixed_list<const N: usize>(
    field: &'static str,
    list: Vec<String>,
) -> Result<[String; N], ReferenceError> {
    let found = list.len();
    list.try_into().map_err(|_| ReferenceError::WrongLength {
        field,
        expected: N,
        found,
    })
}

fn parse_graha(section: &'static str, name: &str) -> Result<Graha, ReferenceError> {
    name.parse().map_err(|_| ReferenceError::UnknownName {
        section,
        name: name.to_string(),
    })
}

impl ReferenceData {
    /// Parse a TOML document and overlay it on the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ReferenceError> {
        let raw: RawReference = toml::from_str(content)?;
        let mut data = Self::default();

        if let Some(list) = raw.sign_names {
            data.sign_names = fixed_list("sign_names", list)?;
        }
        if let Some(list) = raw.localized_sign_names {
            data.localized_sign_names = fixed_list("localized_sign_names", list)?;
        }
        if let Some(list) = raw.nakshatra_names {
            data.nakshatra_names = fixed_list("nakshatra_names", list)?;
        }

        for (name, offsets) in raw.aspects {
            let graha = parse_graha("aspects", &name)?;
            if let Some(offset) = offsets.first_invalid() {
                return Err(ReferenceError::InvalidAspectOffset { graha, offset });
            }
            data.aspects[graha.index() as usize] = offsets;
        }

        for (sign, row) in raw.dignities {
            let rashi: Rashi = sign.parse().map_err(|_| ReferenceError::UnknownName {
                section: "dignities",
                name: sign.clone(),
            })?;
            for (name, dignity) in row {
                let graha = parse_graha("dignities", &name)?;
                data.dignities.set(rashi, graha, Some(dignity));
            }
        }

        Ok(data)
    }

    /// Load a TOML reference file.
    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        debug!("loading reference data from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Primary sign name for a 0-based sign index.
    pub fn sign_name(&self, sign_index: u8) -> &str {
        &self.sign_names[sign_index as usize]
    }

    /// Localized sign name for a 0-based sign index.
    pub fn localized_sign_name(&self, sign_index: u8) -> &str {
        &self.localized_sign_names[sign_index as usize]
    }

    /// Nakshatra name for a 1-based nakshatra number.
    pub fn nakshatra_name(&self, nakshatra_number: u8) -> &str {
        debug_assert!((1..=27).contains(&nakshatra_number));
        &self.nakshatra_names[nakshatra_number as usize - 1]
    }

    pub fn dignity(&self, rashi: Rashi, graha: Graha) -> Option<Dignity> {
        self.dignities.get(rashi, graha)
    }

    pub fn dignities(&self) -> &DignityTable {
        &self.dignities
    }

    pub fn aspect_offsets(&self, graha: Graha) -> &AspectOffsets {
        &self.aspects[graha.index() as usize]
    }
}
