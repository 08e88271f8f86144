//! Integration tests for the bundled ephemeris snapshot.

use std::path::PathBuf;

use kundali_ephemeris::{
    AyanamshaSystem, EphemerisBody, EphemerisProvider, HouseSystem, PositionFlags,
    ProviderError, SnapshotProvider,
};

const LAT: f64 = 13.0827;
const LON: f64 = 80.2707;

fn snapshot_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/j2000_chennai.toml")
}

fn load() -> SnapshotProvider {
    SnapshotProvider::open(&snapshot_path()).expect("bundled snapshot should load")
}

#[test]
fn bundled_snapshot_is_ready() {
    let p = load();
    assert!(p.ready().is_ok());
    assert_eq!(p.snapshot().bodies.len(), EphemerisBody::ALL.len());
    assert_eq!(p.snapshot().ayanamsha.len(), AyanamshaSystem::ALL.len());
}

#[test]
fn ist_birth_time_maps_to_snapshot_epoch() {
    let p = load();
    // 17:30 at UTC+5:30
    let jd = p.julian_day(2000, 1, 1, 17.0 + 30.0 / 60.0 - 5.5);
    assert!((jd - p.snapshot().jd_ut).abs() < 1e-9);
}

#[test]
fn every_body_answers_sidereal() {
    let p = load();
    let jd = p.snapshot().jd_ut;
    for system in AyanamshaSystem::ALL {
        let flags = PositionFlags::sidereal(system);
        for body in EphemerisBody::ALL {
            let pos = p.body_position(jd, body, flags).unwrap();
            assert!((0.0..360.0).contains(&pos.longitude), "{body} under {system}");
        }
    }
}

#[test]
fn saturn_is_retrograde() {
    let p = load();
    let pos = p
        .body_position(p.snapshot().jd_ut, EphemerisBody::Saturn, PositionFlags::TROPICAL)
        .unwrap();
    assert!(pos.speed_longitude < 0.0);
}

#[test]
fn placidus_cusps_for_recorded_location() {
    let p = load();
    let cusps = p
        .house_cusps(p.snapshot().jd_ut, LAT, LON, HouseSystem::Placidus)
        .unwrap();
    assert_eq!(cusps.cusp(1), 95.9);
    assert_eq!(cusps.ascendant, 95.9);
    assert_eq!(cusps.mc, 0.8);
}

#[test]
fn other_location_or_system_fails() {
    let p = load();
    let jd = p.snapshot().jd_ut;
    assert!(matches!(
        p.house_cusps(jd, 28.61, 77.21, HouseSystem::Placidus),
        Err(ProviderError::HouseComputation(_))
    ));
    assert!(matches!(
        p.house_cusps(jd, LAT, LON, HouseSystem::Koch),
        Err(ProviderError::HouseComputation(_))
    ));
}

#[test]
fn missing_file_is_unavailable() {
    let err = SnapshotProvider::open(&snapshot_path().with_file_name("missing.toml")).unwrap_err();
    assert!(matches!(err, ProviderError::Unavailable(_)));
}
