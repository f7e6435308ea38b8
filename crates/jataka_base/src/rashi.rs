//! Rashi (zodiac sign) enum and sign classifications.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees each, starting
//! from Mesha (Aries). Charts address signs by number (1 = Mesha .. 12 = Meena);
//! internally the 0-based index is used for arithmetic.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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

/// Rashi modality. Drives the Ashraya group of Nabhasa yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RashiModality {
    /// Chara (movable): Mesha, Karka, Tula, Makara.
    Movable,
    /// Sthira (fixed): Vrishabha, Simha, Vrischika, Kumbha.
    Fixed,
    /// Dvisvabhava (dual): Mithuna, Kanya, Dhanu, Meena.
    Dual,
}

/// Rashi element classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

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
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi from a 1-based sign number. None outside [1, 12].
    pub fn from_number(number: u8) -> Option<Rashi> {
        if (1..=12).contains(&number) {
            Some(ALL_RASHIS[(number - 1) as usize])
        } else {
            None
        }
    }

    /// Rashi from a 0-based index, wrapping modulo 12.
    pub const fn from_index_wrapping(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// The n-th rashi counted from this one (1 = same sign, 12 = previous sign).
    pub const fn nth(self, offset: u8) -> Rashi {
        let idx = (self.index() as u16 + (offset as u16 % 12) + 11) % 12;
        ALL_RASHIS[idx as usize]
    }

    /// Modality of the rashi.
    pub const fn modality(self) -> RashiModality {
        match self.index() % 3 {
            0 => RashiModality::Movable,
            1 => RashiModality::Fixed,
            _ => RashiModality::Dual,
        }
    }

    /// Element of the rashi.
    pub const fn element(self) -> RashiElement {
        match self.index() % 4 {
            0 => RashiElement::Fire,
            1 => RashiElement::Earth,
            2 => RashiElement::Air,
            _ => RashiElement::Water,
        }
    }

    /// Ecliptic longitude of the start of this rashi.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * 30.0
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

/// Rashi containing a sidereal longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> Rashi {
    let lon = normalize_360(sidereal_lon_deg);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let idx = ((lon / 30.0).floor() as u8).min(11);
    ALL_RASHIS[idx as usize]
}

/// Count houses from one rashi to another, inclusive (same sign = 1).
pub const fn rashi_distance(from: Rashi, to: Rashi) -> u8 {
    ((to.index() as i16 - from.index() as i16).rem_euclid(12) + 1) as u8
}
