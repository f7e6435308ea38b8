//! Report records emitted by a detection run.

use serde::Serialize;
use sha2::{Digest, Sha256};

use jataka_base::{Chart, Graha, TemporalPeriod};
use jataka_yoga::{AgeRange, BphsCategory, Fact, Impact, LifeArea, PatternFamily, Strength};

use crate::classify::Importance;

/// One detected yoga, after strength, classification and merging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaDetection {
    /// Catalog id of the representative rule.
    pub rule_id: &'static str,
    /// Rule name, or the per-instance name for enumerations such as
    /// "Lord of the 1st in the 9th".
    pub name: String,
    /// Instance label for rules that fire once per lord pair, planet and
    /// so on, e.g. `"9-10"` or `"Moon"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    pub category: BphsCategory,
    pub reference: Option<&'static str>,
    pub family: Option<PatternFamily>,
    pub strength: Strength,
    /// Aggregate planet score the bucket was derived from.
    pub strength_score: f64,
    pub importance: Importance,
    pub impact: Impact,
    pub formation_planets: Vec<Graha>,
    pub formation_description: String,
    pub formation_facts: Vec<Fact>,
    pub is_cancelled: bool,
    pub cancellation_reasons: Vec<&'static str>,
    pub life_areas: Vec<LifeArea>,
    pub activation_age_range: Option<AgeRange>,
    /// Supplied periods, ruled by a formation planet, that overlap the
    /// activation range.
    pub activation_windows: Vec<TemporalPeriod>,
    pub simplified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplified_note: Option<&'static str>,
    /// Ids of duplicate detections folded into this one.
    pub merged_rule_ids: Vec<&'static str>,
    /// Instance labels of folded detections other than this one's.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub merged_instances: Vec<String>,
}

impl YogaDetection {
    /// Value of the first formation fact with `key`.
    pub fn fact(&self, key: &str) -> Option<&str> {
        self.formation_facts
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }
}

/// A rule that failed to evaluate. The run continues without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDiagnostic {
    pub rule_id: &'static str,
    pub message: String,
}

/// Result of one detection run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaReport {
    pub catalog_version: &'static str,
    /// SHA-256 of the validated chart's canonical JSON, hex encoded.
    pub chart_fingerprint: String,
    pub detections: Vec<YogaDetection>,
    pub diagnostics: Vec<RuleDiagnostic>,
}

impl YogaReport {
    /// Detections with the given display name.
    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a YogaDetection> + 'a {
        self.detections.iter().filter(move |d| d.name == name)
    }

    /// Detections whose representative or merged ids include `rule_id`.
    pub fn from_rule<'a>(
        &'a self,
        rule_id: &'a str,
    ) -> impl Iterator<Item = &'a YogaDetection> + 'a {
        self.detections
            .iter()
            .filter(move |d| d.rule_id == rule_id || d.merged_rule_ids.contains(&rule_id))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.named(name).next().is_some()
    }
}

/// Hex SHA-256 over the chart's JSON form.
pub fn chart_fingerprint(chart: &Chart) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(chart)?;
    let digest = Sha256::digest(&bytes);
    Ok(hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_base::ChartBuilder;

    fn chart(moon_sign: u8) -> Chart {
        ChartBuilder::new(5)
            .place(Graha::Surya, 1, 10.0)
            .place(Graha::Chandra, moon_sign, 12.0)
            .place(Graha::Mangal, 3, 4.0)
            .place(Graha::Buddh, 1, 28.0)
            .place(Graha::Guru, 11, 15.0)
            .place(Graha::Shukra, 2, 2.0)
            .place(Graha::Shani, 6, 20.0)
            .place(Graha::Rahu, 9, 5.0)
            .place(Graha::Ketu, 3, 5.0)
            .build()
            .unwrap()
    }

    #[test]
    fn fingerprint_is_stable_and_sensitive() {
        let a = chart_fingerprint(&chart(8)).unwrap();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(a, chart_fingerprint(&chart(8)).unwrap());
        assert_ne!(a, chart_fingerprint(&chart(9)).unwrap());
    }
}
