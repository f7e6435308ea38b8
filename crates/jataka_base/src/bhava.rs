//! Whole-sign houses (bhavas): classical house groupings and house lordship.
//!
//! House 1 is the ascendant's rashi; house h is the h-th rashi counted from
//! it. Lordship is the fixed rashi→lord table rotated by the ascendant.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;

/// Kendra (angular) houses.
pub const KENDRA: [u8; 4] = [1, 4, 7, 10];
/// Trikona (trinal) houses.
pub const TRIKONA: [u8; 3] = [1, 5, 9];
/// Upachaya (growth) houses.
pub const UPACHAYA: [u8; 4] = [3, 6, 10, 11];
/// Dusthana (difficult) houses.
pub const DUSTHANA: [u8; 3] = [6, 8, 12];
/// Panaphara (succedent) houses.
pub const PANAPHARA: [u8; 4] = [2, 5, 8, 11];
/// Apoklima (cadent) houses.
pub const APOKLIMA: [u8; 4] = [3, 6, 9, 12];

/// Classical house grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseGroup {
    Kendra,
    Trikona,
    Upachaya,
    Dusthana,
    Panaphara,
    Apoklima,
}

impl HouseGroup {
    pub const fn houses(self) -> &'static [u8] {
        match self {
            Self::Kendra => &KENDRA,
            Self::Trikona => &TRIKONA,
            Self::Upachaya => &UPACHAYA,
            Self::Dusthana => &DUSTHANA,
            Self::Panaphara => &PANAPHARA,
            Self::Apoklima => &APOKLIMA,
        }
    }

    pub fn contains(self, house: u8) -> bool {
        self.houses().contains(&house)
    }
}

/// House component of the numeric planet strength (0-100).
///
/// kendra 100, trikona 90, upachaya 70, dusthana 20; a house in several
/// groups takes the maximum. House 2 belongs to none of these and scores 50.
pub fn house_category_score(house: u8) -> f64 {
    const SCORES: [(HouseGroup, f64); 4] = [
        (HouseGroup::Kendra, 100.0),
        (HouseGroup::Trikona, 90.0),
        (HouseGroup::Upachaya, 70.0),
        (HouseGroup::Dusthana, 20.0),
    ];
    SCORES
        .iter()
        .filter(|(group, _)| group.contains(house))
        .map(|&(_, score)| score)
        .reduce(f64::max)
        .unwrap_or(50.0)
}

/// Rashi occupying house `house` (1-12) for the given ascendant.
pub const fn rashi_of_house(ascendant: Rashi, house: u8) -> Rashi {
    ascendant.nth(house)
}

/// House lords for a chart, derived once from the ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HouseLordship {
    ascendant: Rashi,
    /// `lords[h - 1]` = lord of house h.
    lords: [Graha; 12],
}

impl HouseLordship {
    /// Resolve lordship of all 12 houses for an ascendant rashi. Total.
    pub fn resolve(ascendant: Rashi) -> Self {
        let mut lords = [Graha::Surya; 12];
        for (i, lord) in lords.iter_mut().enumerate() {
            *lord = rashi_lord(rashi_of_house(ascendant, i as u8 + 1));
        }
        Self { ascendant, lords }
    }

    pub fn ascendant(&self) -> Rashi {
        self.ascendant
    }

    /// Lord of house `house` (1-12). Out-of-range input wraps modulo 12.
    pub fn lord_of(&self, house: u8) -> Graha {
        self.lords[(house as usize + 11) % 12]
    }

    /// Houses (1-12) ruled by `graha`, ascending. Empty for Rahu/Ketu.
    pub fn houses_ruled_by(&self, graha: Graha) -> Vec<u8> {
        (1..=12u8).filter(|&h| self.lord_of(h) == graha).collect()
    }

    /// All lords, index 0 = house 1.
    pub fn lords(&self) -> &[Graha; 12] {
        &self.lords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_scores() {
        assert_eq!(house_category_score(1), 100.0);
        assert_eq!(house_category_score(2), 50.0);
        assert_eq!(house_category_score(3), 70.0);
        assert_eq!(house_category_score(5), 90.0);
        assert_eq!(house_category_score(6), 70.0);
        assert_eq!(house_category_score(8), 20.0);
        assert_eq!(house_category_score(9), 90.0);
        assert_eq!(house_category_score(10), 100.0);
        assert_eq!(house_category_score(11), 70.0);
        assert_eq!(house_category_score(12), 20.0);
    }

    #[test]
    fn lordship_mesha_ascendant() {
        let l = HouseLordship::resolve(Rashi::Mesha);
        assert_eq!(l.lord_of(1), Graha::Mangal);
        assert_eq!(l.lord_of(2), Graha::Shukra);
        assert_eq!(l.lord_of(4), Graha::Chandra);
        assert_eq!(l.lord_of(5), Graha::Surya);
        assert_eq!(l.lord_of(9), Graha::Guru);
        assert_eq!(l.lord_of(10), Graha::Shani);
        assert_eq!(l.lord_of(12), Graha::Guru);
    }

    #[test]
    fn lordship_rotates_with_ascendant() {
        let l = HouseLordship::resolve(Rashi::Simha);
        assert_eq!(l.lord_of(1), Graha::Surya);
        assert_eq!(l.lord_of(4), Graha::Mangal);
        assert_eq!(l.lord_of(7), Graha::Shani);
        assert_eq!(l.lord_of(12), Graha::Chandra);
    }

    #[test]
    fn houses_ruled() {
        let l = HouseLordship::resolve(Rashi::Mesha);
        assert_eq!(l.houses_ruled_by(Graha::Mangal), vec![1, 8]);
        assert_eq!(l.houses_ruled_by(Graha::Surya), vec![5]);
        assert!(l.houses_ruled_by(Graha::Rahu).is_empty());
    }

    #[test]
    fn every_ascendant_yields_seven_lords() {
        for asc in crate::rashi::ALL_RASHIS {
            let l = HouseLordship::resolve(asc);
            let mut distinct: Vec<Graha> = l.lords().to_vec();
            distinct.sort();
            distinct.dedup();
            assert_eq!(distinct.len(), 7, "ascendant {asc}");
        }
    }
}
