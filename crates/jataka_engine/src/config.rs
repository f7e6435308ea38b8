//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! parallel = true
//! merge_formation_planets = true
//! include_non_classical = false
//! min_importance = "Moderate"
//!
//! [thresholds]
//! very_strong = 80.0
//! strong = 60.0
//! medium = 35.0
//! ```
//!
//! Every key is optional; missing keys take the [`Default`] values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use jataka_yoga::Strength;

use crate::classify::Importance;
use crate::error::EngineError;

/// Score cut-offs for the strength buckets. A score at or above a cut-off
/// falls into that bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthThresholds {
    pub very_strong: f64,
    pub strong: f64,
    pub medium: f64,
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            very_strong: 80.0,
            strong: 60.0,
            medium: 35.0,
        }
    }
}

impl StrengthThresholds {
    /// Bucket for an aggregate score.
    pub fn bucket(&self, score: f64) -> Strength {
        if score >= self.very_strong {
            Strength::VeryStrong
        } else if score >= self.strong {
            Strength::Strong
        } else if score >= self.medium {
            Strength::Medium
        } else {
            Strength::Weak
        }
    }

    fn validate(&self) -> Result<(), EngineError> {
        let all = [self.very_strong, self.strong, self.medium];
        if all.iter().any(|t| !t.is_finite() || *t <= 0.0 || *t > 100.0) {
            return Err(EngineError::InvalidConfig(
                "thresholds must lie in (0, 100]",
            ));
        }
        if !(self.very_strong > self.strong && self.strong > self.medium) {
            return Err(EngineError::InvalidConfig(
                "thresholds must be strictly decreasing: very_strong > strong > medium",
            ));
        }
        Ok(())
    }
}

/// Detection run options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fan rule evaluation out over the rayon pool.
    pub parallel: bool,
    pub thresholds: StrengthThresholds,
    /// Union formation planets across merged duplicates.
    pub merge_formation_planets: bool,
    /// Evaluate rules of the `NonClassical` category.
    pub include_non_classical: bool,
    /// Drop detections below this importance after classification.
    pub min_importance: Option<Importance>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            thresholds: StrengthThresholds::default(),
            merge_formation_planets: true,
            include_non_classical: true,
            min_importance: None,
        }
    }
}

impl EngineConfig {
    /// Single-threaded evaluation with default thresholds.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        self.thresholds.validate()
    }
}
