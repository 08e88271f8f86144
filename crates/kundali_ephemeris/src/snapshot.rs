//! A provider that answers from one recorded epoch.
//!
//! A snapshot holds tropical positions, ayanamsha values and (optionally)
//! house cusps captured from a full ephemeris at a single Julian Day. Queries
//! within the snapshot tolerance of that epoch are answered from the record;
//! anything else is out of range. Sidereal longitudes are derived by
//! subtracting the recorded ayanamsha, the same way a live provider would.
//!
//! ```toml
//! jd_ut = 2451545.0
//! tolerance_days = 0.0007
//!
//! [ayanamsha]
//! Krishnamurti = 23.76
//!
//! [bodies.Sun]
//! longitude = 280.37
//! speed_longitude = 1.019
//!
//! [houses]
//! latitude = 13.08
//! longitude = 80.27
//! system = "P"
//! cusps = [95.9, 124.5, ...]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use kundali_base::normalize_360;
use log::debug;
use serde::Deserialize;

use crate::error::ProviderError;
use crate::provider::EphemerisProvider;
use crate::types::{
    AyanamshaSystem, BodyPosition, EphemerisBody, HouseCusps, HouseSystem, PositionFlags,
};

/// Default epoch tolerance: one minute of time.
pub const DEFAULT_TOLERANCE_DAYS: f64 = 1.0 / 1440.0;

/// Maximum difference, in degrees, between a requested and a recorded
/// geographic coordinate.
pub const LOCATION_TOLERANCE_DEG: f64 = 1e-4;

/// House cusps recorded for one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedHouses {
    pub latitude: f64,
    pub longitude: f64,
    pub system: HouseSystem,
    pub cusps: HouseCusps,
}

/// Everything recorded at one epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub jd_ut: f64,
    pub tolerance_days: f64,
    pub ayanamsha: BTreeMap<AyanamshaSystem, f64>,
    pub bodies: BTreeMap<EphemerisBody, BodyPosition>,
    pub houses: Option<RecordedHouses>,
}

impl Snapshot {
    /// Empty snapshot at `jd_ut` with the default tolerance.
    pub fn new(jd_ut: f64) -> Self {
        Self {
            jd_ut,
            tolerance_days: DEFAULT_TOLERANCE_DAYS,
            ayanamsha: BTreeMap::new(),
            bodies: BTreeMap::new(),
            houses: None,
        }
    }

    pub fn with_body(mut self, body: EphemerisBody, position: BodyPosition) -> Self {
        self.bodies.insert(body, position);
        self
    }

    pub fn with_ayanamsha(mut self, system: AyanamshaSystem, value: f64) -> Self {
        self.ayanamsha.insert(system, value);
        self
    }

    pub fn with_houses(mut self, houses: RecordedHouses) -> Self {
        self.houses = Some(houses);
        self
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSnapshot {
    jd_ut: f64,
    tolerance_days: Option<f64>,
    #[serde(default)]
    ayanamsha: BTreeMap<String, f64>,
    #[serde(default)]
    bodies: BTreeMap<String, BodyPosition>,
    houses: Option<RawHouses>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHouses {
    latitude: f64,
    longitude: f64,
    system: Option<String>,
    cusps: Vec<f64>,
    ascendant: Option<f64>,
    mc: Option<f64>,
}

fn parse_body(name: &str) -> Result<EphemerisBody, ProviderError> {
    let body = match name {
        "Sun" => EphemerisBody::Sun,
        "Moon" => EphemerisBody::Moon,
        "Mercury" => EphemerisBody::Mercury,
        "Venus" => EphemerisBody::Venus,
        "Mars" => EphemerisBody::Mars,
        "Jupiter" => EphemerisBody::Jupiter,
        "Saturn" => EphemerisBody::Saturn,
        "TrueNode" | "True Node" | "Rahu" => EphemerisBody::TrueNode,
        _ => return Err(ProviderError::Parse(format!("unknown body: {name}"))),
    };
    Ok(body)
}

fn recorded_houses(raw: RawHouses) -> Result<RecordedHouses, ProviderError> {
    let found = raw.cusps.len();
    let cusps: [f64; 12] = raw.cusps.try_into().map_err(|_| {
        ProviderError::Parse(format!("houses.cusps: expected 12 entries, found {found}"))
    })?;
    let system = match raw.system {
        Some(s) => s.parse().map_err(ProviderError::Parse)?,
        None => HouseSystem::default(),
    };
    let ascendant = raw.ascendant.unwrap_or(cusps[0]);
    let mc = raw.mc.unwrap_or(cusps[9]);
    Ok(RecordedHouses {
        latitude: raw.latitude,
        longitude: raw.longitude,
        system,
        cusps: HouseCusps::new(cusps, ascendant, mc),
    })
}

fn snapshot_from_raw(raw: RawSnapshot) -> Result<Snapshot, ProviderError> {
    let mut snapshot = Snapshot::new(raw.jd_ut);
    if let Some(t) = raw.tolerance_days {
        if !(t >= 0.0) {
            return Err(ProviderError::Parse(format!(
                "tolerance_days must be non-negative, got {t}"
            )));
        }
        snapshot.tolerance_days = t;
    }
    for (name, value) in raw.ayanamsha {
        let system: AyanamshaSystem = name.parse().map_err(ProviderError::Parse)?;
        snapshot.ayanamsha.insert(system, value);
    }
    for (name, position) in raw.bodies {
        snapshot.bodies.insert(parse_body(&name)?, position);
    }
    snapshot.houses = raw.houses.map(recorded_houses).transpose()?;
    Ok(snapshot)
}

/// Provider backed by a single [`Snapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotProvider {
    snapshot: Snapshot,
}

impl SnapshotProvider {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Parse a snapshot from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ProviderError> {
        let raw: RawSnapshot = toml::from_str(content)?;
        Ok(Self::new(snapshot_from_raw(raw)?))
    }

    /// Load a snapshot file. Any failure here means the provider is unavailable.
    pub fn open(path: &Path) -> Result<Self, ProviderError> {
        debug!("loading ephemeris snapshot from {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| ProviderError::Unavailable(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn check_epoch(&self, jd_ut: f64) -> Result<(), ProviderError> {
        if (jd_ut - self.snapshot.jd_ut).abs() > self.snapshot.tolerance_days {
            return Err(ProviderError::EpochOutOfRange { jd_ut });
        }
        Ok(())
    }
}

impl EphemerisProvider for SnapshotProvider {
    fn ready(&self) -> Result<(), ProviderError> {
        if self.snapshot.bodies.is_empty() {
            return Err(ProviderError::Unavailable(
                "snapshot records no bodies".to_string(),
            ));
        }
        Ok(())
    }

    fn body_position(
        &self,
        jd_ut: f64,
        body: EphemerisBody,
        flags: PositionFlags,
    ) -> Result<BodyPosition, ProviderError> {
        self.check_epoch(jd_ut)?;
        let mut position = self.snapshot.bodies.get(&body).copied().ok_or_else(|| {
            ProviderError::BodyUnavailable {
                body,
                reason: "not recorded in snapshot".to_string(),
            }
        })?;
        if let Some(system) = flags.sidereal {
            let ayanamsha = self.ayanamsha(jd_ut, system)?;
            position.longitude = normalize_360(position.longitude - ayanamsha);
        }
        debug!(
            "{body} (ipl {}) at JD {jd_ut}: {:.4}",
            body.code(),
            position.longitude
        );
        Ok(position)
    }

    fn house_cusps(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, ProviderError> {
        self.check_epoch(jd_ut)?;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ProviderError::HouseComputation(format!(
                "latitude out of range: {latitude}"
            )));
        }
        let houses = self.snapshot.houses.as_ref().ok_or_else(|| {
            ProviderError::HouseComputation("no houses recorded in snapshot".to_string())
        })?;
        if houses.system != system {
            return Err(ProviderError::HouseComputation(format!(
                "house system {} not recorded (snapshot has {})",
                system.code(),
                houses.system.code()
            )));
        }
        if (houses.latitude - latitude).abs() > LOCATION_TOLERANCE_DEG
            || (houses.longitude - longitude).abs() > LOCATION_TOLERANCE_DEG
        {
            return Err(ProviderError::HouseComputation(format!(
                "no houses recorded for {latitude}, {longitude}"
            )));
        }
        Ok(houses.cusps)
    }

    fn ayanamsha(&self, jd_ut: f64, system: AyanamshaSystem) -> Result<f64, ProviderError> {
        self.check_epoch(jd_ut)?;
        let value = self
            .snapshot
            .ayanamsha
            .get(&system)
            .copied()
            .ok_or(ProviderError::MissingAyanamsha(system))?;
        debug!("{} at JD {jd_ut}: {value:.4}", system.swiss_id());
        Ok(value)
    }
}
