//! Vedic planet (graha) enum and rashi lordship.
//!
//! The 9 grahas are the only bodies a chart can carry. Each rashi has a
//! planetary lord; Rahu and Ketu rule no rashi.
//!
//! Lordship follows BPHS Ch.3 (universal convention).

use serde::{Deserialize, Serialize};

use crate::rashi::{ALL_RASHIS, Rashi};

/// The 9 Vedic grahas.
///
/// Serialized with English names; Sanskrit names are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Graha {
    #[serde(rename = "Sun", alias = "Surya")]
    Surya,
    #[serde(rename = "Moon", alias = "Chandra")]
    Chandra,
    #[serde(rename = "Mars", alias = "Mangal")]
    Mangal,
    #[serde(rename = "Mercury", alias = "Buddh")]
    Buddh,
    #[serde(rename = "Jupiter", alias = "Guru")]
    Guru,
    #[serde(rename = "Venus", alias = "Shukra")]
    Shukra,
    #[serde(rename = "Saturn", alias = "Shani")]
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
/// Nabhasa and most lunar/solar yogas only consider these.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// The five tara grahas (Mars through Saturn): the planets that can form
/// Mahapurusha, Sunapha/Anapha and Vesi/Vasi yogas.
pub const TARA_GRAHAS: [Graha; 5] = [
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Rahu or Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Look up a graha by English or Sanskrit name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Graha> {
        let name = name.trim();
        ALL_GRAHAS.into_iter().find(|g| {
            g.english_name().eq_ignore_ascii_case(name) || g.name().eq_ignore_ascii_case(name)
        })
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal
/// - Vrishabha/Tula → Shukra
/// - Mithuna/Kanya → Buddh
/// - Karka → Chandra
/// - Simha → Surya
/// - Dhanu/Meena → Guru
/// - Makara/Kumbha → Shani
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Rashis ruled by a graha (empty for Rahu/Ketu).
pub fn rashis_ruled_by(graha: Graha) -> impl Iterator<Item = Rashi> {
    ALL_RASHIS.into_iter().filter(move |&r| !graha.is_node() && rashi_lord(r) == graha)
}
