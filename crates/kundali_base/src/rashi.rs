//! Rashi (zodiac sign) placement of a sidereal longitude.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. A longitude is expressed as the
//! sign it falls in plus whole degrees and whole arc-minutes inside that
//! sign. Sub-minute precision is truncated, never rounded.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
///
/// Serialized under the western name; the Sanskrit name is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    #[serde(rename = "Aries", alias = "Mesha")]
    Mesha,
    #[serde(rename = "Taurus", alias = "Vrishabha")]
    Vrishabha,
    #[serde(rename = "Gemini", alias = "Mithuna")]
    Mithuna,
    #[serde(rename = "Cancer", alias = "Karka")]
    Karka,
    #[serde(rename = "Leo", alias = "Simha")]
    Simha,
    #[serde(rename = "Virgo", alias = "Kanya")]
    Kanya,
    #[serde(rename = "Libra", alias = "Tula")]
    Tula,
    #[serde(rename = "Scorpio", alias = "Vrischika")]
    Vrischika,
    #[serde(rename = "Sagittarius", alias = "Dhanu")]
    Dhanu,
    #[serde(rename = "Capricorn", alias = "Makara")]
    Makara,
    #[serde(rename = "Aquarius", alias = "Kumbha")]
    Kumbha,
    #[serde(rename = "Pisces", alias = "Meena")]
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi at a 0-based index, `None` for 12 and above.
    pub const fn from_index(index: u8) -> Option<Rashi> {
        if index < 12 {
            Some(ALL_RASHIS[index as usize])
        } else {
            None
        }
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

impl FromStr for Rashi {
    type Err = &'static str;

    /// Accepts western or Sanskrit names (case-insensitive) and 0-based indices.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(idx) = s.parse::<u8>() {
            return Rashi::from_index(idx).ok_or("rashi index must be 0-11");
        }
        ALL_RASHIS
            .iter()
            .copied()
            .find(|r| r.western_name().eq_ignore_ascii_case(s) || r.name().eq_ignore_ascii_case(s))
            .ok_or("unknown rashi name")
    }
}

/// Sign position of a longitude: rashi, whole degrees and whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignPlacement {
    /// The rashi the longitude falls in.
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub sign_index: u8,
    /// Whole degrees within the rashi (0..=29).
    pub degree: u8,
    /// Whole arc-minutes within the degree (0..=59).
    pub minute: u8,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_sign: f64,
}

impl Display for SignPlacement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}° {}'", self.degree, self.minute)
    }
}

/// Determine the sign placement of a sidereal longitude.
///
/// Mesha = [0, 30), Vrishabha = [30, 60), etc. A longitude exactly on a
/// boundary belongs to the following sign.
pub fn sign_placement(sidereal_lon_deg: f64) -> SignPlacement {
    let lon = normalize_360(sidereal_lon_deg);
    // Clamp guards the float edge just below 360.0
    let sign_index = ((lon / RASHI_SPAN).floor() as u8).min(11);
    let degrees_in_sign = lon - f64::from(sign_index) * RASHI_SPAN;
    let whole = degrees_in_sign.floor();
    let degree = (whole as u8).min(29);
    let minute = (((degrees_in_sign - whole) * 60.0).floor() as u8).min(59);

    SignPlacement {
        rashi: ALL_RASHIS[sign_index as usize],
        sign_index,
        degree,
        minute,
        degrees_in_sign,
    }
}
