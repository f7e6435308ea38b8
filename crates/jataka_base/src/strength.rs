//! Numeric planet strength used to grade yoga formations.
//!
//! score = 0.6 × dignity + 0.4 × house category, then −30 when combust and
//! +10 when retrograde, clamped to [0, 100].

use serde::Serialize;

use crate::bhava::house_category_score;
use crate::chart::{Chart, Placement};
use crate::dignity::Dignity;
use crate::graha::{ALL_GRAHAS, Graha};

/// Weight of the dignity component.
pub const DIGNITY_WEIGHT: f64 = 0.6;
/// Weight of the house component.
pub const HOUSE_WEIGHT: f64 = 0.4;
/// Penalty for a combust planet.
pub const COMBUST_PENALTY: f64 = 30.0;
/// Bonus for a retrograde planet.
pub const RETROGRADE_BONUS: f64 = 10.0;

/// Breakdown of one planet's strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetStrength {
    pub graha: Graha,
    pub dignity: Dignity,
    pub dignity_score: f64,
    pub house_score: f64,
    pub combust: bool,
    pub retrograde: bool,
    /// Final score in [0, 100].
    pub score: f64,
}

/// Strength of a single validated placement.
pub fn planet_strength(p: &Placement) -> PlanetStrength {
    let dignity = effective_dignity(p);
    let dignity_score = dignity.score();
    let house_score = house_category_score(p.house);
    let mut score = DIGNITY_WEIGHT * dignity_score + HOUSE_WEIGHT * house_score;
    if p.combust {
        score -= COMBUST_PENALTY;
    }
    if p.retrograde {
        score += RETROGRADE_BONUS;
    }
    PlanetStrength {
        graha: p.graha,
        dignity,
        dignity_score,
        house_score,
        combust: p.combust,
        retrograde: p.retrograde,
        score: score.clamp(0.0, 100.0),
    }
}

/// Resolved flags take precedence over the table dignity.
fn effective_dignity(p: &Placement) -> Dignity {
    if p.exalted {
        Dignity::Exalted
    } else if p.debilitated {
        Dignity::Debilitated
    } else if p.own_sign && !p.dignity.is_dignified() {
        Dignity::OwnSign
    } else {
        p.dignity
    }
}

/// Strength of every planet in a chart, computed once per evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartStrengths {
    strengths: [PlanetStrength; 9],
}

impl ChartStrengths {
    pub fn compute(chart: &Chart) -> Self {
        Self {
            strengths: chart.placements().map(|p| planet_strength(&p)),
        }
    }

    pub fn get(&self, graha: Graha) -> &PlanetStrength {
        &self.strengths[graha.index() as usize]
    }

    pub fn score(&self, graha: Graha) -> f64 {
        self.get(graha).score
    }

    /// Minimum score over `grahas`; `None` when the slice is empty.
    pub fn min_score(&self, grahas: &[Graha]) -> Option<f64> {
        grahas.iter().map(|&g| self.score(g)).reduce(f64::min)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanetStrength> {
        ALL_GRAHAS.iter().map(|&g| self.get(g))
    }
}
