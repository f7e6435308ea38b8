//! Navamsha (D9) sign derivation.
//!
//! Each rashi is divided into 9 parts of 3°20'. The first navamsha of a fire
//! sign starts at Mesha, earth at Makara, air at Tula, water at Karka, and the
//! parts run consecutively from there (BPHS Ch.6).

use crate::rashi::{Rashi, RashiElement};

/// Span of one navamsha in degrees.
pub const NAVAMSHA_SPAN_DEG: f64 = 30.0 / 9.0;

const fn starting_rashi(element: RashiElement) -> Rashi {
    match element {
        RashiElement::Fire => Rashi::Mesha,
        RashiElement::Earth => Rashi::Makara,
        RashiElement::Air => Rashi::Tula,
        RashiElement::Water => Rashi::Karka,
    }
}

/// Navamsha rashi of a point at `degree_in_rashi` within `rashi`.
///
/// Degrees outside [0, 30) are clamped into the sign.
pub fn navamsha_rashi(rashi: Rashi, degree_in_rashi: f64) -> Rashi {
    let part = ((degree_in_rashi.max(0.0) / NAVAMSHA_SPAN_DEG).floor() as u8).min(8);
    let start = starting_rashi(rashi.element());
    Rashi::from_index_wrapping(start.index() + part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_sign_starts_at_mesha() {
        // 5° Mesha → 2nd navamsha → Vrishabha
        assert_eq!(navamsha_rashi(Rashi::Mesha, 5.0), Rashi::Vrishabha);
        assert_eq!(navamsha_rashi(Rashi::Mesha, 0.0), Rashi::Mesha);
    }

    #[test]
    fn earth_sign_starts_at_makara() {
        // 15.5° Vrishabha → 5th navamsha from Makara → Vrishabha (vargottama)
        assert_eq!(navamsha_rashi(Rashi::Vrishabha, 15.5), Rashi::Vrishabha);
    }

    #[test]
    fn air_sign_starts_at_tula() {
        assert_eq!(navamsha_rashi(Rashi::Mithuna, 0.0), Rashi::Tula);
    }

    #[test]
    fn water_sign_starts_at_karka() {
        assert_eq!(navamsha_rashi(Rashi::Karka, 0.0), Rashi::Karka);
        assert_eq!(navamsha_rashi(Rashi::Meena, 29.99), Rashi::Meena);
    }

    #[test]
    fn last_part_clamped() {
        assert_eq!(navamsha_rashi(Rashi::Mesha, 30.0), Rashi::Dhanu);
    }
}
