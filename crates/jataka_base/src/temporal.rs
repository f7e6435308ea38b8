//! Planetary period (dasha) data supplied alongside a chart.
//!
//! Period computation is external; the engine only consumes the resulting
//! intervals, expressed as ages in years from birth, to annotate when a
//! detected yoga is likely to become active.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Dasha depth of a supplied period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum DashaLevel {
    #[default]
    Mahadasha,
    Antardasha,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
        }
    }
}

/// A single planetary period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemporalPeriod {
    /// Graha ruling the period.
    pub lord: Graha,
    /// Age in years at period start, inclusive.
    pub start_age: f64,
    /// Age in years at period end, exclusive.
    pub end_age: f64,
    #[serde(default)]
    pub level: DashaLevel,
}

impl TemporalPeriod {
    pub fn duration_years(&self) -> f64 {
        self.end_age - self.start_age
    }

    /// Whether the period intersects the closed age range `[min_age, max_age]`.
    pub fn overlaps(&self, min_age: f64, max_age: f64) -> bool {
        self.start_age <= max_age && self.end_age > min_age
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        self.start_age.is_finite()
            && self.end_age.is_finite()
            && self.start_age >= 0.0
            && self.end_age > self.start_age
    }
}
