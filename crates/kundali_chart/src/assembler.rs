//! Chart assembly from an ephemeris provider.
//!
//! Assembly checks provider readiness, derives the Julian Day, then issues
//! the eight body queries (seven planets plus the true node) and, for birth
//! charts, the house computation concurrently on scoped threads. Every call
//! carries the sidereal mode explicitly. A failed body or house computation
//! is recorded and left out; the rest of the chart is still built.

use std::thread;

use kundali_base::{Graha, normalize_360};
use kundali_ephemeris::{
    AyanamshaSystem, BodyPosition, EphemerisBody, EphemerisProvider, PositionFlags, ProviderError,
};
use log::{debug, warn};

use crate::chart::{AscendantPlacement, Chart, ChartKind, HousePlacement, PlanetPlacement};
use crate::error::{ChartError, ChartPart, ComputationFailure};
use crate::input::{BirthInput, TransitInput};

/// A chart and the parts that could not be computed for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartReport {
    pub chart: Chart,
    pub failures: Vec<ComputationFailure>,
}

impl ChartReport {
    /// True when every graha and (for birth charts) the houses were computed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Sidereal houses computed for a birth chart.
struct SiderealHouses {
    ayanamsha: f64,
    cusps: Vec<HousePlacement>,
    ascendant: AscendantPlacement,
}

/// Assemble a birth chart: planets plus houses counted from the ascendant.
pub fn assemble_birth_chart<P: EphemerisProvider + ?Sized>(
    provider: &P,
    input: &BirthInput,
) -> Result<ChartReport, ChartError> {
    provider.ready().map_err(ChartError::ProviderUnavailable)?;
    let jd_ut = input.julian_day(provider);
    debug!("assembling birth chart at JD {jd_ut} ({})", input.ayanamsha);

    let (bodies, houses) = thread::scope(|s| {
        let house_job = s.spawn(|| compute_houses(provider, jd_ut, input));
        let bodies = query_bodies(provider, jd_ut, input.ayanamsha);
        (bodies, join_or_panicked(house_job, || "house computation panicked".to_string()))
    });

    let mut chart = Chart::new(ChartKind::Birth, jd_ut, input.ayanamsha);
    let mut failures = place_bodies(&mut chart, bodies)?;
    match houses {
        Ok(h) => chart.set_houses(h.ayanamsha, h.cusps, h.ascendant),
        Err(error) => {
            warn!("houses omitted from birth chart: {error}");
            failures.push(ComputationFailure {
                part: ChartPart::Houses,
                error,
            });
        }
    }

    Ok(ChartReport { chart, failures })
}

/// Assemble a transit chart: planets only, houses counted from the Moon.
pub fn assemble_transit_chart<P: EphemerisProvider + ?Sized>(
    provider: &P,
    input: &TransitInput,
) -> Result<ChartReport, ChartError> {
    provider.ready().map_err(ChartError::ProviderUnavailable)?;
    let jd_ut = input.julian_day(provider);
    debug!("assembling transit chart at JD {jd_ut} ({})", input.ayanamsha);

    let bodies = query_bodies(provider, jd_ut, input.ayanamsha);
    let mut chart = Chart::new(ChartKind::Transit, jd_ut, input.ayanamsha);
    let failures = place_bodies(&mut chart, bodies)?;

    Ok(ChartReport { chart, failures })
}

/// Query every body concurrently, returning results in query order.
fn query_bodies<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_ut: f64,
    system: AyanamshaSystem,
) -> Vec<(EphemerisBody, Result<BodyPosition, ProviderError>)> {
    let flags = PositionFlags::sidereal(system);
    thread::scope(|s| {
        let jobs: Vec<_> = EphemerisBody::ALL
            .into_iter()
            .map(|body| (body, s.spawn(move || provider.body_position(jd_ut, body, flags))))
            .collect();
        jobs.into_iter()
            .map(|(body, job)| {
                let result = join_or_panicked(job, || format!("{body} query panicked"));
                (body, result)
            })
            .collect()
    })
}

fn join_or_panicked<T>(
    handle: thread::ScopedJoinHandle<'_, Result<T, ProviderError>>,
    message: impl FnOnce() -> String,
) -> Result<T, ProviderError> {
    handle
        .join()
        .unwrap_or_else(|_| Err(ProviderError::Unavailable(message())))
}

/// Insert successful positions into the chart and collect failures.
///
/// The true node yields both Rahu and Ketu; its failure removes both. When
/// every body failed because the epoch is not covered, the chart is useless
/// and assembly fails with [`ChartError::Epoch`].
fn place_bodies(
    chart: &mut Chart,
    bodies: Vec<(EphemerisBody, Result<BodyPosition, ProviderError>)>,
) -> Result<Vec<ComputationFailure>, ChartError> {
    let all_out_of_range = bodies
        .iter()
        .all(|(_, r)| matches!(r, Err(ProviderError::EpochOutOfRange { .. })));
    if all_out_of_range {
        if let Some((_, Err(error))) = bodies.into_iter().next() {
            return Err(ChartError::Epoch(error));
        }
        return Ok(Vec::new());
    }

    let mut failures = Vec::new();
    for (body, result) in bodies {
        let grahas: &[Graha] = match body {
            EphemerisBody::TrueNode => &[Graha::Rahu, Graha::Ketu],
            _ => &[body.graha()],
        };
        match result {
            Ok(pos) => {
                chart.insert_planet(PlanetPlacement::new(
                    body.graha(),
                    pos.longitude,
                    pos.speed_longitude,
                ));
                if body == EphemerisBody::TrueNode {
                    chart.insert_planet(PlanetPlacement::new(
                        Graha::Ketu,
                        normalize_360(pos.longitude + 180.0),
                        pos.speed_longitude,
                    ));
                }
            }
            Err(error) => {
                for &graha in grahas {
                    warn!("{graha} omitted from chart: {error}");
                    failures.push(ComputationFailure {
                        part: ChartPart::Graha(graha),
                        error: error.clone(),
                    });
                }
            }
        }
    }
    Ok(failures)
}

/// Cusps, then ayanamsha, then sidereal cusps and the ascendant from cusp 1.
fn compute_houses<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_ut: f64,
    input: &BirthInput,
) -> Result<SiderealHouses, ProviderError> {
    let cusps = provider.house_cusps(jd_ut, input.latitude, input.longitude, input.house_system)?;
    let ayanamsha = provider.ayanamsha(jd_ut, input.ayanamsha)?;
    debug!("houses at JD {jd_ut}: cusp 1 {:.4}, ayanamsha {ayanamsha:.4}", cusps.cusp(1));

    // The ascendant is the first cusp, so house 1 and the lagna always agree.
    Ok(SiderealHouses {
        ayanamsha,
        cusps: (1..=12)
            .map(|n| HousePlacement::new(n, cusps.cusp(n) - ayanamsha))
            .collect(),
        ascendant: AscendantPlacement::new(cusps.cusp(1) - ayanamsha),
    })
}
