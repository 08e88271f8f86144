//! End-to-end birth chart from the bundled ephemeris snapshot.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use kundali_base::{Graha, Nakshatra, Rashi};
use kundali_chart::{BirthInput, ChartPart, assemble_birth_chart};
use kundali_ephemeris::{AyanamshaSystem, HouseSystem, SnapshotProvider};

fn provider() -> SnapshotProvider {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/j2000_chennai.toml");
    SnapshotProvider::open(&path).expect("bundled snapshot should load")
}

fn chennai(ayanamsha: AyanamshaSystem) -> BirthInput {
    BirthInput {
        date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        time: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
        timezone_offset_hours: 5.5,
        latitude: 13.0827,
        longitude: 80.2707,
        ayanamsha,
        house_system: HouseSystem::Placidus,
    }
}

#[test]
fn krishnamurti_birth_chart() {
    let report = assemble_birth_chart(&provider(), &chennai(AyanamshaSystem::Krishnamurti)).unwrap();
    assert!(report.is_complete(), "failures: {:?}", report.failures);
    let chart = &report.chart;

    // 95.90 - 23.76 = 72.14
    let asc = chart.ascendant().unwrap();
    assert_eq!(asc.sign.rashi, Rashi::Mithuna);
    assert_eq!(asc.sign.degree, 12);

    let sun = chart.planet(Graha::Surya).unwrap();
    assert_eq!(sun.sign.rashi, Rashi::Dhanu);
    assert_eq!(chart.house_of(sun.sign.sign_index), Some(7));

    let saturn = chart.planet(Graha::Shani).unwrap();
    assert!(saturn.retrograde);
    assert_eq!(saturn.sign.rashi, Rashi::Mesha);

    let moon = chart.moon_nakshatra().unwrap();
    assert_eq!(moon.nakshatra, Nakshatra::Swati);
    assert_eq!(moon.pada, 4);

    let rahu = chart.planet(Graha::Rahu).unwrap().longitude;
    let ketu = chart.planet(Graha::Ketu).unwrap().longitude;
    assert!(((ketu - rahu).rem_euclid(360.0) - 180.0).abs() < 1e-9);
}

#[test]
fn houses_fail_for_unrecorded_location() {
    let mut input = chennai(AyanamshaSystem::Krishnamurti);
    input.latitude = 28.61;
    input.longitude = 77.21;
    let report = assemble_birth_chart(&provider(), &input).unwrap();
    assert_eq!(report.chart.planets().count(), 9);
    assert!(report.chart.ascendant().is_none());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].part, ChartPart::Houses);
}

#[test]
fn different_ayanamsha_shifts_longitudes() {
    let kp = assemble_birth_chart(&provider(), &chennai(AyanamshaSystem::Krishnamurti)).unwrap();
    let raman = assemble_birth_chart(&provider(), &chennai(AyanamshaSystem::Raman)).unwrap();
    let a = kp.chart.planet(Graha::Surya).unwrap().longitude;
    let b = raman.chart.planet(Graha::Surya).unwrap().longitude;
    assert!((b - a - (23.760 - 22.410)).abs() < 1e-9);
}
