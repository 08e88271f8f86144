//! Sign-level planetary dignity classification.
//!
//! A dignity table maps every (rashi, graha) pair to one [`Dignity`]. The
//! table is configuration data; [`DignityTable::parashari`] builds the
//! default one from BPHS exaltation, moolatrikona, own-sign and natural
//! friendship rules.

use serde::{Deserialize, Serialize};

use crate::graha::{ALL_GRAHAS, Graha, rashi_lord};
use crate::rashi::{ALL_RASHIS, Rashi};

/// Dignity of a graha in a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    Debilitated,
    Mooltrikona,
    /// Moolatrikona sign that is also the exaltation sign (Moon in Taurus,
    /// Mercury in Virgo).
    #[serde(rename = "Mooltrikona_Exalted", alias = "MooltrikonaExalted")]
    MooltrikonaExalted,
    Friendly,
    Enemy,
    Neutral,
}

/// A single display mark. A [`Dignity`] carries one or two of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DignityMark {
    Exalted,
    Debilitated,
    Mooltrikona,
    Friendly,
    Enemy,
    Neutral,
}

impl Dignity {
    /// Marks in display order. Combined states yield more than one.
    pub const fn marks(self) -> &'static [DignityMark] {
        match self {
            Self::Exalted => &[DignityMark::Exalted],
            Self::Debilitated => &[DignityMark::Debilitated],
            Self::Mooltrikona => &[DignityMark::Mooltrikona],
            Self::MooltrikonaExalted => &[DignityMark::Mooltrikona, DignityMark::Exalted],
            Self::Friendly => &[DignityMark::Friendly],
            Self::Enemy => &[DignityMark::Enemy],
            Self::Neutral => &[DignityMark::Neutral],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Debilitated => "Debilitated",
            Self::Mooltrikona => "Mooltrikona",
            Self::MooltrikonaExalted => "Mooltrikona+Exalted",
            Self::Friendly => "Friendly",
            Self::Enemy => "Enemy",
            Self::Neutral => "Neutral",
        }
    }
}

// ---------------------------------------------------------------------------
// BPHS rule data
// ---------------------------------------------------------------------------

/// Exaltation rashi index. Rahu in Vrishabha, Ketu in Vrischika.
pub const fn exaltation_sign(graha: Graha) -> u8 {
    match graha {
        Graha::Surya => 0,   // Mesha
        Graha::Chandra => 1, // Vrishabha
        Graha::Mangal => 9,  // Makara
        Graha::Buddh => 5,   // Kanya
        Graha::Guru => 3,    // Karka
        Graha::Shukra => 11, // Meena
        Graha::Shani => 6,   // Tula
        Graha::Rahu => 1,
        Graha::Ketu => 7,
    }
}

/// Debilitation rashi index: the sign opposite exaltation.
pub const fn debilitation_sign(graha: Graha) -> u8 {
    (exaltation_sign(graha) + 6) % 12
}

/// Moolatrikona rashi index. None for Rahu/Ketu.
pub const fn moolatrikona_sign(graha: Graha) -> Option<u8> {
    match graha {
        Graha::Surya => Some(4),   // Simha
        Graha::Chandra => Some(1), // Vrishabha
        Graha::Mangal => Some(0),  // Mesha
        Graha::Buddh => Some(5),   // Kanya
        Graha::Guru => Some(8),    // Dhanu
        Graha::Shukra => Some(6),  // Tula
        Graha::Shani => Some(10),  // Kumbha
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaisargikaMaitri {
    Friend,
    Enemy,
    Neutral,
}

/// Natural (naisargika) friendship between two sapta grahas (BPHS table).
/// Any pairing involving Rahu/Ketu is Neutral.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        (Chandra, Surya | Buddh) => Friend,

        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

/// Default dignity of a graha in a rashi.
///
/// Priority: exaltation (combined with moolatrikona when both fall in the
/// same sign) > debilitation > moolatrikona > own sign (Friendly) >
/// natural friendship with the rashi lord. The nodes only carry
/// exaltation/debilitation; elsewhere they are Neutral.
pub fn parashari_dignity(rashi: Rashi, graha: Graha) -> Dignity {
    let idx = rashi.index();
    let in_mt = moolatrikona_sign(graha) == Some(idx);

    if exaltation_sign(graha) == idx {
        return if in_mt {
            Dignity::MooltrikonaExalted
        } else {
            Dignity::Exalted
        };
    }
    if debilitation_sign(graha) == idx {
        return Dignity::Debilitated;
    }
    if graha.is_node() {
        return Dignity::Neutral;
    }
    if in_mt {
        return Dignity::Mooltrikona;
    }

    let lord = rashi_lord(rashi);
    if lord == graha {
        return Dignity::Friendly;
    }
    match naisargika_maitri(graha, lord) {
        NaisargikaMaitri::Friend => Dignity::Friendly,
        NaisargikaMaitri::Enemy => Dignity::Enemy,
        NaisargikaMaitri::Neutral => Dignity::Neutral,
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// (rashi, graha) → dignity lookup. Entries may be absent when loaded from
/// a sparse configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DignityTable {
    entries: [[Option<Dignity>; 9]; 12],
}

impl DignityTable {
    /// Table with no entries.
    pub const fn empty() -> Self {
        Self {
            entries: [[None; 9]; 12],
        }
    }

    /// Full table from [`parashari_dignity`].
    pub fn parashari() -> Self {
        let mut table = Self::empty();
        for rashi in ALL_RASHIS {
            for graha in ALL_GRAHAS {
                table.set(rashi, graha, Some(parashari_dignity(rashi, graha)));
            }
        }
        table
    }

    pub fn get(&self, rashi: Rashi, graha: Graha) -> Option<Dignity> {
        self.entries[rashi.index() as usize][graha.index() as usize]
    }

    pub fn set(&mut self, rashi: Rashi, graha: Graha, dignity: Option<Dignity>) {
        self.entries[rashi.index() as usize][graha.index() as usize] = dignity;
    }

    /// All classified grahas in a rashi, in graha order.
    pub fn relations_in(&self, rashi: Rashi) -> impl Iterator<Item = (Graha, Dignity)> + '_ {
        ALL_GRAHAS
            .iter()
            .filter_map(move |&g| self.get(rashi, g).map(|d| (g, d)))
    }
}

impl Default for DignityTable {
    fn default() -> Self {
        Self::parashari()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_marks() {
        assert_eq!(
            Dignity::MooltrikonaExalted.marks(),
            &[DignityMark::Mooltrikona, DignityMark::Exalted]
        );
        assert_eq!(Dignity::Enemy.marks(), &[DignityMark::Enemy]);
    }

    #[test]
    fn sun_exalted_in_aries_debilitated_in_libra() {
        assert_eq!(parashari_dignity(Rashi::Mesha, Graha::Surya), Dignity::Exalted);
        assert_eq!(parashari_dignity(Rashi::Tula, Graha::Surya), Dignity::Debilitated);
    }

    #[test]
    fn mercury_in_virgo_is_combined() {
        assert_eq!(
            parashari_dignity(Rashi::Kanya, Graha::Buddh),
            Dignity::MooltrikonaExalted
        );
        assert_eq!(parashari_dignity(Rashi::Meena, Graha::Buddh), Dignity::Debilitated);
        assert_eq!(
            parashari_dignity(Rashi::Vrishabha, Graha::Chandra),
            Dignity::MooltrikonaExalted
        );
    }

    #[test]
    fn moolatrikona_and_own_sign() {
        assert_eq!(parashari_dignity(Rashi::Simha, Graha::Surya), Dignity::Mooltrikona);
        assert_eq!(parashari_dignity(Rashi::Kumbha, Graha::Shani), Dignity::Mooltrikona);
        assert_eq!(parashari_dignity(Rashi::Makara, Graha::Shani), Dignity::Friendly);
        assert_eq!(parashari_dignity(Rashi::Vrischika, Graha::Mangal), Dignity::Friendly);
    }

    #[test]
    fn friendship_with_lord() {
        // Jupiter in Gemini: lord Mercury is Jupiter's enemy
        assert_eq!(parashari_dignity(Rashi::Mithuna, Graha::Guru), Dignity::Enemy);
        // Moon in Aquarius: lord Saturn is neutral to the Moon
        assert_eq!(parashari_dignity(Rashi::Kumbha, Graha::Chandra), Dignity::Neutral);
        // Mars in Leo: lord Sun is a friend
        assert_eq!(parashari_dignity(Rashi::Simha, Graha::Mangal), Dignity::Friendly);
    }

    #[test]
    fn nodes() {
        assert_eq!(parashari_dignity(Rashi::Vrishabha, Graha::Rahu), Dignity::Exalted);
        assert_eq!(parashari_dignity(Rashi::Vrischika, Graha::Rahu), Dignity::Debilitated);
        assert_eq!(parashari_dignity(Rashi::Vrischika, Graha::Ketu), Dignity::Exalted);
        assert_eq!(parashari_dignity(Rashi::Simha, Graha::Ketu), Dignity::Neutral);
    }

    #[test]
    fn default_table_is_full() {
        let t = DignityTable::default();
        for r in ALL_RASHIS {
            assert_eq!(t.relations_in(r).count(), 9);
        }
    }

    #[test]
    fn set_and_clear() {
        let mut t = DignityTable::empty();
        assert_eq!(t.get(Rashi::Mesha, Graha::Surya), None);
        t.set(Rashi::Mesha, Graha::Surya, Some(Dignity::Exalted));
        assert_eq!(t.get(Rashi::Mesha, Graha::Surya), Some(Dignity::Exalted));
        assert_eq!(t.relations_in(Rashi::Mesha).count(), 1);
    }
}
