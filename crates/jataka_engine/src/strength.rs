//! Aggregate strength of a match and the effect of cancellation.

use jataka_base::ChartStrengths;
use jataka_yoga::{RawMatch, Strength, StrengthHint, YogaRule};

use crate::config::StrengthThresholds;

/// Score and bucket of one match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Graded {
    pub score: f64,
    pub strength: Strength,
}

/// Grade a match: the weakest relevant planet sets the score, the
/// thresholds set the bucket, and a cancelled yoga drops one bucket.
pub fn grade(
    rule: &YogaRule,
    raw: &RawMatch,
    strengths: &ChartStrengths,
    thresholds: &StrengthThresholds,
    cancelled: bool,
) -> Graded {
    let planets = match rule.strength {
        StrengthHint::KeyPlanets => raw.strength_planets(),
        StrengthHint::Dignity | StrengthHint::Fixed(_) => raw.involved.as_slice(),
    };
    let score = strengths.min_score(planets).unwrap_or(0.0);
    let base = match rule.strength {
        StrengthHint::Fixed(s) => s,
        StrengthHint::Dignity | StrengthHint::KeyPlanets => thresholds.bucket(score),
    };
    Graded {
        score,
        strength: if cancelled { base.weaker() } else { base },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_base::{ChartBuilder, Graha};
    use jataka_yoga::find_rule;

    fn strengths() -> ChartStrengths {
        let chart = ChartBuilder::new(5)
            .place(Graha::Surya, 1, 10.0)
            .place(Graha::Chandra, 8, 12.0)
            .place(Graha::Mangal, 3, 4.0)
            .place(Graha::Buddh, 1, 28.0)
            .place(Graha::Guru, 11, 15.0)
            .place(Graha::Shukra, 2, 2.0)
            .place(Graha::Shani, 6, 20.0)
            .place(Graha::Rahu, 9, 5.0)
            .place(Graha::Ketu, 3, 5.0)
            .build()
            .unwrap();
        ChartStrengths::compute(&chart)
    }

    #[test]
    fn key_planets_carry_the_score() {
        // Moon debilitated in the 4th scores 40, Jupiter in the 7th scores 76.
        let rule = find_rule("chandra.gajakesari").unwrap();
        let raw = RawMatch::new(rule.id, vec![Graha::Chandra, Graha::Guru])
            .with_key_planets(vec![Graha::Guru]);
        let g = grade(rule, &raw, &strengths(), &StrengthThresholds::default(), false);
        assert!((g.score - 76.0).abs() < 1e-9);
        assert_eq!(g.strength, Strength::Strong);
    }

    #[test]
    fn dignity_hint_takes_the_weakest() {
        let rule = find_rule("chandra.chandra_mangala").unwrap();
        let raw = RawMatch::new(rule.id, vec![Graha::Chandra, Graha::Guru]);
        let g = grade(rule, &raw, &strengths(), &StrengthThresholds::default(), false);
        assert!((g.score - 40.0).abs() < 1e-9);
        assert_eq!(g.strength, Strength::Medium);
    }

    #[test]
    fn cancellation_drops_one_bucket() {
        let rule = find_rule("chandra.gajakesari").unwrap();
        let raw = RawMatch::new(rule.id, vec![Graha::Guru]);
        let g = grade(rule, &raw, &strengths(), &StrengthThresholds::default(), true);
        assert_eq!(g.strength, Strength::Medium);
    }

    #[test]
    fn fixed_hint_ignores_scores() {
        let rule = find_rule("nabhasa.vallaki").unwrap();
        let raw = RawMatch::new(rule.id, vec![Graha::Chandra]);
        let g = grade(rule, &raw, &strengths(), &StrengthThresholds::default(), false);
        assert_eq!(g.strength, Strength::Medium);
        let g = grade(rule, &raw, &strengths(), &StrengthThresholds::default(), true);
        assert_eq!(g.strength, Strength::Weak);
    }

    #[test]
    fn custom_thresholds() {
        let rule = find_rule("chandra.gajakesari").unwrap();
        let raw = RawMatch::new(rule.id, vec![Graha::Guru]);
        let t = StrengthThresholds {
            very_strong: 75.0,
            strong: 50.0,
            medium: 25.0,
        };
        let g = grade(rule, &raw, &strengths(), &t, false);
        assert_eq!(g.strength, Strength::VeryStrong);
    }
}
