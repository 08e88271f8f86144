//! Value types exchanged with an ephemeris provider.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use kundali_base::Graha;
use serde::{Deserialize, Serialize};

/// Bodies a provider is asked for.
///
/// Ketu is never queried; it is derived from [`EphemerisBody::TrueNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EphemerisBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    TrueNode,
}

impl EphemerisBody {
    /// Every queried body, in query order.
    pub const ALL: [EphemerisBody; 8] = [
        Self::Sun,
        Self::Moon,
        Self::Mars,
        Self::Mercury,
        Self::Jupiter,
        Self::Venus,
        Self::Saturn,
        Self::TrueNode,
    ];

    /// Swiss Ephemeris planet number.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::TrueNode => 11,
        }
    }

    /// Graha whose longitude this body supplies directly.
    pub const fn graha(self) -> Graha {
        match self {
            Self::Sun => Graha::Surya,
            Self::Moon => Graha::Chandra,
            Self::Mars => Graha::Mangal,
            Self::Mercury => Graha::Buddh,
            Self::Jupiter => Graha::Guru,
            Self::Venus => Graha::Shukra,
            Self::Saturn => Graha::Shani,
            Self::TrueNode => Graha::Rahu,
        }
    }

    /// Body to query for a graha (both nodes come from the true node).
    pub const fn for_graha(graha: Graha) -> Self {
        match graha {
            Graha::Surya => Self::Sun,
            Graha::Chandra => Self::Moon,
            Graha::Mangal => Self::Mars,
            Graha::Buddh => Self::Mercury,
            Graha::Guru => Self::Jupiter,
            Graha::Shukra => Self::Venus,
            Graha::Shani => Self::Saturn,
            Graha::Rahu | Graha::Ketu => Self::TrueNode,
        }
    }
}

impl Display for EphemerisBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::TrueNode => "True Node",
        };
        f.write_str(name)
    }
}

/// Sidereal zodiac reference systems offered for chart computation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha).
    Lahiri,
    /// B.V. Raman.
    Raman,
    /// Pushya Paksha: delta Cancri at 16 deg Cancer.
    PushyaPaksha,
    /// Krishnamurti Paddhati.
    #[default]
    Krishnamurti,
    /// True Chitra: Spica held at 0 deg Libra at the date.
    TrueChitra,
}

impl AyanamshaSystem {
    pub const ALL: [AyanamshaSystem; 5] = [
        Self::Lahiri,
        Self::Raman,
        Self::PushyaPaksha,
        Self::Krishnamurti,
        Self::TrueChitra,
    ];

    /// Swiss Ephemeris sidereal-mode identifier.
    pub const fn swiss_id(self) -> &'static str {
        match self {
            Self::Lahiri => "SE_SIDM_LAHIRI",
            Self::Raman => "SE_SIDM_RAMAN",
            Self::PushyaPaksha => "SE_SIDM_PUSHYA_PAKSHA",
            Self::Krishnamurti => "SE_SIDM_KRISHNAMURTI",
            Self::TrueChitra => "SE_SIDM_TRUE_CHITRA",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::Raman => "Raman",
            Self::PushyaPaksha => "Pushya Paksha",
            Self::Krishnamurti => "Krishnamurti",
            Self::TrueChitra => "True Chitra",
        }
    }
}

impl Display for AyanamshaSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AyanamshaSystem {
    type Err = String;

    /// Accepts `SE_SIDM_*` identifiers, labels, and labels without spaces,
    /// ignoring case. `kp` is an alias for Krishnamurti.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .trim_start_matches("SE_SIDM_")
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "lahiri" => Ok(Self::Lahiri),
            "raman" => Ok(Self::Raman),
            "pushyapaksha" => Ok(Self::PushyaPaksha),
            "krishnamurti" | "kp" => Ok(Self::Krishnamurti),
            "truechitra" => Ok(Self::TrueChitra),
            _ => Err(format!("unknown ayanamsha: {s}")),
        }
    }
}

/// House division systems.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum HouseSystem {
    #[default]
    Placidus,
    Koch,
    Equal,
    WholeSign,
    Porphyry,
}

impl HouseSystem {
    /// Single-letter Swiss Ephemeris house system code.
    pub const fn code(self) -> char {
        match self {
            Self::Placidus => 'P',
            Self::Koch => 'K',
            Self::Equal => 'E',
            Self::WholeSign => 'W',
            Self::Porphyry => 'O',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'P' => Some(Self::Placidus),
            'K' => Some(Self::Koch),
            'E' => Some(Self::Equal),
            'W' => Some(Self::WholeSign),
            'O' => Some(Self::Porphyry),
            _ => None,
        }
    }
}

impl FromStr for HouseSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_code(c.to_ascii_uppercase())
                .ok_or_else(|| format!("unknown house system: {s}"));
        }
        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "placidus" => Ok(Self::Placidus),
            "koch" => Ok(Self::Koch),
            "equal" => Ok(Self::Equal),
            "wholesign" => Ok(Self::WholeSign),
            "porphyry" => Ok(Self::Porphyry),
            _ => Err(format!("unknown house system: {s}")),
        }
    }
}

/// Per-call computation flags.
///
/// The sidereal mode travels with every request; providers keep no
/// zodiac state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionFlags {
    /// `Some` for sidereal longitudes in that system, `None` for tropical.
    pub sidereal: Option<AyanamshaSystem>,
}

impl PositionFlags {
    pub const TROPICAL: Self = Self { sidereal: None };

    pub const fn sidereal(system: AyanamshaSystem) -> Self {
        Self {
            sidereal: Some(system),
        }
    }
}

/// Geocentric ecliptic position and daily motion of one body.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Ecliptic longitude in degrees.
    pub longitude: f64,
    #[serde(default)]
    pub latitude: f64,
    /// Distance in AU.
    #[serde(default)]
    pub distance: f64,
    /// Longitude speed in degrees/day; negative means retrograde.
    #[serde(default)]
    pub speed_longitude: f64,
    #[serde(default)]
    pub speed_latitude: f64,
    #[serde(default)]
    pub speed_distance: f64,
}

/// Tropical house cusps plus the ascendant and MC the backend reported.
///
/// Charts take the lagna from [`HouseCusps::cusp`]`(1)`; `ascendant` and
/// `mc` are kept as recorded metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusps {
    cusps: [f64; 12],
    pub ascendant: f64,
    pub mc: f64,
}

impl HouseCusps {
    pub fn new(cusps: [f64; 12], ascendant: f64, mc: f64) -> Self {
        Self {
            cusps,
            ascendant,
            mc,
        }
    }

    /// Cusp of house `n` (1-based).
    pub fn cusp(&self, n: u8) -> f64 {
        debug_assert!((1..=12).contains(&n), "house out of range: {n}");
        self.cusps[n as usize - 1]
    }

    pub fn cusps(&self) -> &[f64; 12] {
        &self.cusps
    }
}
