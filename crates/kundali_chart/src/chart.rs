//! The assembled chart value.

use std::collections::BTreeMap;

use kundali_base::{
    Graha, NakshatraPlacement, ReferenceData, SignPlacement, house_number, is_aspected,
    nakshatra_placement, normalize_360, sign_placement,
};
use kundali_ephemeris::AyanamshaSystem;
use serde::Serialize;

/// Birth (natal) or transit (current sky) chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartKind {
    /// Houses counted from the ascendant.
    Birth,
    /// Houses counted from the Moon.
    Transit,
}

/// A graha's sidereal placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPlacement {
    pub graha: Graha,
    /// Sidereal longitude in [0, 360).
    pub longitude: f64,
    pub sign: SignPlacement,
    pub nakshatra: NakshatraPlacement,
    /// Longitude speed in degrees/day.
    pub speed_longitude: f64,
    pub retrograde: bool,
}

impl PlanetPlacement {
    pub fn new(graha: Graha, longitude: f64, speed_longitude: f64) -> Self {
        let longitude = normalize_360(longitude);
        Self {
            graha,
            longitude,
            sign: sign_placement(longitude),
            nakshatra: nakshatra_placement(longitude),
            speed_longitude,
            retrograde: speed_longitude < 0.0,
        }
    }
}

/// Sidereal cusp of one house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HousePlacement {
    /// House number 1..=12.
    pub number: u8,
    pub longitude: f64,
    pub sign: SignPlacement,
}

impl HousePlacement {
    pub fn new(number: u8, longitude: f64) -> Self {
        let longitude = normalize_360(longitude);
        Self {
            number,
            longitude,
            sign: sign_placement(longitude),
        }
    }
}

/// Sidereal ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AscendantPlacement {
    pub longitude: f64,
    pub sign: SignPlacement,
    pub nakshatra: NakshatraPlacement,
}

impl AscendantPlacement {
    pub fn new(longitude: f64) -> Self {
        let longitude = normalize_360(longitude);
        Self {
            longitude,
            sign: sign_placement(longitude),
            nakshatra: nakshatra_placement(longitude),
        }
    }
}

/// An assembled chart. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    kind: ChartKind,
    jd_ut: f64,
    ayanamsha_system: AyanamshaSystem,
    /// Ayanamsha applied to the house cusps, when houses were computed.
    ayanamsha_deg: Option<f64>,
    planets: BTreeMap<Graha, PlanetPlacement>,
    houses: BTreeMap<u8, HousePlacement>,
    ascendant: Option<AscendantPlacement>,
}

impl Chart {
    pub(crate) fn new(kind: ChartKind, jd_ut: f64, ayanamsha_system: AyanamshaSystem) -> Self {
        Self {
            kind,
            jd_ut,
            ayanamsha_system,
            ayanamsha_deg: None,
            planets: BTreeMap::new(),
            houses: BTreeMap::new(),
            ascendant: None,
        }
    }

    pub(crate) fn insert_planet(&mut self, placement: PlanetPlacement) {
        self.planets.insert(placement.graha, placement);
    }

    pub(crate) fn set_houses(
        &mut self,
        ayanamsha_deg: f64,
        houses: impl IntoIterator<Item = HousePlacement>,
        ascendant: AscendantPlacement,
    ) {
        self.ayanamsha_deg = Some(ayanamsha_deg);
        self.houses = houses.into_iter().map(|h| (h.number, h)).collect();
        self.ascendant = Some(ascendant);
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn jd_ut(&self) -> f64 {
        self.jd_ut
    }

    pub fn ayanamsha_system(&self) -> AyanamshaSystem {
        self.ayanamsha_system
    }

    pub fn ayanamsha_deg(&self) -> Option<f64> {
        self.ayanamsha_deg
    }

    /// Placements in graha order (Sun first, Ketu last).
    pub fn planets(&self) -> impl Iterator<Item = &PlanetPlacement> {
        self.planets.values()
    }

    pub fn planet(&self, graha: Graha) -> Option<&PlanetPlacement> {
        self.planets.get(&graha)
    }

    /// House cusps in house order.
    pub fn houses(&self) -> impl Iterator<Item = &HousePlacement> {
        self.houses.values()
    }

    pub fn house(&self, number: u8) -> Option<&HousePlacement> {
        self.houses.get(&number)
    }

    pub fn ascendant(&self) -> Option<&AscendantPlacement> {
        self.ascendant.as_ref()
    }

    /// Sign that counts as house 1: the ascendant sign for birth charts, the
    /// Moon's sign for transit charts. `None` when that placement is missing.
    pub fn anchor_sign_index(&self) -> Option<u8> {
        match self.kind {
            ChartKind::Birth => self.ascendant.map(|a| a.sign.sign_index),
            ChartKind::Transit => self.planet(Graha::Chandra).map(|p| p.sign.sign_index),
        }
    }

    /// House number of a sign relative to the chart anchor.
    pub fn house_of(&self, sign_index: u8) -> Option<u8> {
        self.anchor_sign_index()
            .map(|anchor| house_number(sign_index, anchor))
    }

    /// Grahas occupying a sign, in graha order.
    pub fn planets_in_sign(&self, sign_index: u8) -> impl Iterator<Item = &PlanetPlacement> {
        self.planets
            .values()
            .filter(move |p| p.sign.sign_index == sign_index)
    }

    /// Whether the selected graha aspects `target_sign_index`.
    ///
    /// False when nothing is selected or the selected graha is absent.
    pub fn is_aspected(
        &self,
        target_sign_index: u8,
        selected: Option<Graha>,
        reference: &ReferenceData,
    ) -> bool {
        let Some(source) = selected.and_then(|g| self.planet(g)) else {
            return false;
        };
        is_aspected(
            target_sign_index,
            source.sign.sign_index,
            reference.aspect_offsets(source.graha),
        )
    }

    /// The Moon's nakshatra and pada.
    pub fn moon_nakshatra(&self) -> Option<&NakshatraPlacement> {
        self.planet(Graha::Chandra).map(|p| &p.nakshatra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_base::Nakshatra;

    fn birth(asc: f64) -> Chart {
        let mut chart = Chart::new(ChartKind::Birth, 2451545.0, AyanamshaSystem::Lahiri);
        let houses = (1..=12).map(|n| HousePlacement::new(n, asc + f64::from(n - 1) * 30.0));
        chart.set_houses(23.85, houses, AscendantPlacement::new(asc));
        chart
    }

    #[test]
    fn retrograde_follows_speed() {
        assert!(PlanetPlacement::new(Graha::Shani, 40.0, -0.02).retrograde);
        assert!(!PlanetPlacement::new(Graha::Shani, 40.0, 0.0).retrograde);
    }

    #[test]
    fn libra_ascendant_numbers_capricorn_fourth() {
        let chart = birth(185.0);
        assert_eq!(chart.anchor_sign_index(), Some(6));
        assert_eq!(chart.house_of(9), Some(4));
        assert_eq!(chart.house_of(6), Some(1));
    }

    #[test]
    fn transit_counts_from_moon() {
        let mut chart = Chart::new(ChartKind::Transit, 2451545.0, AyanamshaSystem::Lahiri);
        assert_eq!(chart.anchor_sign_index(), None);
        chart.insert_planet(PlanetPlacement::new(Graha::Chandra, 40.0, 13.0));
        assert_eq!(chart.anchor_sign_index(), Some(1));
        assert_eq!(chart.house_of(1), Some(1));
        assert_eq!(
            chart.moon_nakshatra().map(|n| n.nakshatra),
            Some(Nakshatra::Rohini)
        );
    }

    #[test]
    fn aspect_requires_present_selection() {
        let reference = ReferenceData::default();
        let mut chart = birth(0.0);
        chart.insert_planet(PlanetPlacement::new(Graha::Surya, 10.0, 1.0));
        assert!(chart.is_aspected(6, Some(Graha::Surya), &reference));
        assert!(!chart.is_aspected(5, Some(Graha::Surya), &reference));
        assert!(!chart.is_aspected(6, None, &reference));
        assert!(!chart.is_aspected(6, Some(Graha::Mangal), &reference));
    }

    #[test]
    fn occupants_by_sign() {
        let mut chart = birth(0.0);
        chart.insert_planet(PlanetPlacement::new(Graha::Surya, 10.0, 1.0));
        chart.insert_planet(PlanetPlacement::new(Graha::Buddh, 25.0, 1.2));
        chart.insert_planet(PlanetPlacement::new(Graha::Chandra, 100.0, 13.0));
        let in_aries: Vec<_> = chart.planets_in_sign(0).map(|p| p.graha).collect();
        assert_eq!(in_aries, vec![Graha::Surya, Graha::Buddh]);
        assert_eq!(chart.planets_in_sign(5).count(), 0);
    }
}
