//! Integration tests for the sidereal transforms, house numbering and drishti.
//!
//! Pure-math tests (no ephemeris needed).

use kundali_base::{
    ALL_GRAHAS, Dignity, Graha, NAKSHATRA_SPAN, Nakshatra, Rashi, ReferenceData, house_number,
    is_aspected, nakshatra_placement, normalize_360, sign_in_house, sign_placement,
};

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn normalize_range_and_period() {
    let samples = [-1080.25, -720.0, -359.999, -0.5, 0.0, 12.5, 359.999, 360.0, 725.5];
    for x in samples {
        let n = normalize_360(x);
        assert!((0.0..360.0).contains(&n), "normalize({x}) = {n}");
        assert!(
            (normalize_360(x + 360.0) - n).abs() < 1e-9,
            "period broken at {x}"
        );
        assert_eq!(normalize_360(n), n, "not idempotent at {x}");
    }
}

// ---------------------------------------------------------------------------
// Signs
// ---------------------------------------------------------------------------

#[test]
fn sign_boundaries_belong_to_next_sign() {
    for k in 0..12u8 {
        let p = sign_placement(f64::from(k) * 30.0);
        assert_eq!(p.sign_index, k);
        assert_eq!(p.degree, 0);
        assert_eq!(p.minute, 0);
    }
}

#[test]
fn sign_sweep_ranges() {
    let mut lon = 0.0;
    while lon < 360.0 {
        let p = sign_placement(lon);
        assert!(p.sign_index < 12);
        assert!(p.degree < 30);
        assert!(p.minute < 60);
        assert_eq!(p.sign_index, (lon / 30.0).floor() as u8, "at {lon}");
        lon += 0.37;
    }
}

#[test]
fn cancer_five_thirty() {
    let p = sign_placement(95.5);
    assert_eq!(p.sign_index, 3);
    assert_eq!(p.rashi, Rashi::Karka);
    assert_eq!(p.degree, 5);
    assert_eq!(p.minute, 30);
    assert_eq!(p.to_string(), "5° 30'");
}

// ---------------------------------------------------------------------------
// Nakshatras
// ---------------------------------------------------------------------------

#[test]
fn nakshatra_sweep_ranges() {
    let mut lon = 0.0;
    while lon < 360.0 {
        let n = nakshatra_placement(lon);
        assert!((1..=27).contains(&n.nakshatra_number), "at {lon}");
        assert!((1..=4).contains(&n.pada), "at {lon}");
        assert!(n.degrees_in_nakshatra < NAKSHATRA_SPAN + 1e-9);
        lon += 0.41;
    }
}

#[test]
fn forty_degrees_is_rohini_first_pada() {
    let n = nakshatra_placement(40.0);
    assert_eq!(n.nakshatra_number, 4);
    assert_eq!(n.nakshatra, Nakshatra::Rohini);
    assert_eq!(n.pada, 1);
    assert!(n.degrees_in_nakshatra.abs() < 1e-9);
}

#[test]
fn last_pada_of_revati() {
    let n = nakshatra_placement(359.99);
    assert_eq!(n.nakshatra, Nakshatra::Revati);
    assert_eq!(n.nakshatra_number, 27);
    assert_eq!(n.pada, 4);
}

// ---------------------------------------------------------------------------
// Houses
// ---------------------------------------------------------------------------

#[test]
fn houses_are_a_bijection_for_every_anchor() {
    for anchor in 0..12u8 {
        let mut seen = [false; 12];
        for sign in 0..12u8 {
            let h = house_number(sign, anchor);
            assert!((1..=12).contains(&h));
            assert!(!seen[h as usize - 1], "house {h} repeated for anchor {anchor}");
            seen[h as usize - 1] = true;
            assert_eq!(sign_in_house(h, anchor), sign);
        }
        assert_eq!(house_number(anchor, anchor), 1);
    }
}

#[test]
fn libra_ascendant_capricorn_is_fourth() {
    assert_eq!(house_number(9, 6), 4);
}

// ---------------------------------------------------------------------------
// Nodes and drishti
// ---------------------------------------------------------------------------

#[test]
fn ketu_opposite_rahu_lands_in_libra() {
    let ketu = normalize_360(10.0 + 180.0);
    assert_eq!(ketu, 190.0);
    assert_eq!(sign_placement(ketu).rashi, Rashi::Tula);
}

#[test]
fn every_graha_aspects_its_seventh_with_defaults() {
    let reference = ReferenceData::default();
    for g in ALL_GRAHAS {
        let offsets = reference.aspect_offsets(g);
        for source in 0..12u8 {
            assert!(is_aspected((source + 6) % 12, source, offsets), "{g} from {source}");
        }
    }
}

#[test]
fn jupiter_trines_from_sagittarius() {
    let reference = ReferenceData::default();
    let offsets = reference.aspect_offsets(Graha::Guru);
    // Sagittarius (8): 5th = Aries (0), 7th = Gemini (2), 9th = Leo (4)
    assert!(is_aspected(0, 8, offsets));
    assert!(is_aspected(2, 8, offsets));
    assert!(is_aspected(4, 8, offsets));
    assert!(!is_aspected(8, 8, offsets));
}

#[test]
fn default_dignities_cover_exaltations() {
    let reference = ReferenceData::default();
    let cases = [
        (Rashi::Mesha, Graha::Surya),
        (Rashi::Vrishabha, Graha::Chandra),
        (Rashi::Makara, Graha::Mangal),
        (Rashi::Karka, Graha::Guru),
        (Rashi::Meena, Graha::Shukra),
        (Rashi::Tula, Graha::Shani),
    ];
    for (rashi, graha) in cases {
        let d = reference.dignity(rashi, graha).unwrap();
        assert!(
            matches!(d, Dignity::Exalted | Dignity::MooltrikonaExalted),
            "{graha} in {rashi}: {d:?}"
        );
    }
}
