//! Importance tiers.
//!
//! Classification reads only structured rule metadata (structure, category,
//! family) and the computed strength. The rendered name is never inspected.

use serde::{Deserialize, Serialize};

use jataka_yoga::{Strength, Structure, YogaRule};

/// Importance of a detection. Ordered least important first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Importance {
    Minor,
    Moderate,
    Major,
}

impl Importance {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minor => "Minor",
            Self::Moderate => "Moderate",
            Self::Major => "Major",
        }
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tier for a detection of `rule` at `strength`.
pub fn classify(rule: &YogaRule, strength: Strength) -> Importance {
    if rule.structure == Structure::PlacementEnumeration {
        return by_strength(strength);
    }
    if rule.category.is_major() {
        return Importance::Major;
    }
    if rule.family.is_some() {
        return Importance::Moderate;
    }
    by_strength(strength)
}

fn by_strength(strength: Strength) -> Importance {
    if strength.is_strong() {
        Importance::Moderate
    } else {
        Importance::Minor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_yoga::{BphsCategory, PatternFamily, find_rule};

    #[test]
    fn enumeration_ignores_category() {
        let rule = find_rule("bhava.lord_placement").unwrap();
        assert_eq!(classify(rule, Strength::VeryStrong), Importance::Moderate);
        assert_eq!(classify(rule, Strength::Strong), Importance::Moderate);
        assert_eq!(classify(rule, Strength::Medium), Importance::Minor);
        assert_eq!(classify(rule, Strength::Weak), Importance::Minor);

        // Even a major-category enumeration is graded by strength alone.
        let mut major = *rule;
        major.category = BphsCategory::MajorPositive;
        assert_eq!(classify(&major, Strength::Weak), Importance::Minor);
    }

    #[test]
    fn major_categories() {
        let gk = find_rule("chandra.gajakesari").unwrap();
        assert_eq!(classify(gk, Strength::Weak), Importance::Major);
        let kemadruma = find_rule("chandra.kemadruma").unwrap();
        assert_eq!(kemadruma.category, BphsCategory::MajorChallenge);
        assert_eq!(classify(kemadruma, Strength::Medium), Importance::Major);
    }

    #[test]
    fn family_then_strength() {
        let vesi = find_rule("surya.vesi").unwrap();
        assert_eq!(vesi.family, Some(PatternFamily::Surya));
        assert_eq!(classify(vesi, Strength::Weak), Importance::Moderate);

        let chamara = find_rule("misc.chamara").unwrap();
        assert!(chamara.family.is_none());
        assert_eq!(classify(chamara, Strength::Strong), Importance::Moderate);
        assert_eq!(classify(chamara, Strength::Medium), Importance::Minor);
    }

    #[test]
    fn ordering() {
        assert!(Importance::Major > Importance::Moderate);
        assert!(Importance::Moderate > Importance::Minor);
    }
}
