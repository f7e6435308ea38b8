//! Yoga detection pipeline.
//!
//! [`YogaEngine::detect`] runs the full pipeline against one validated
//! chart:
//!
//! 1. evaluate every catalog rule ([`jataka_yoga::evaluate_rule`])
//! 2. grade each match from planet scores and apply cancellation
//! 3. classify importance
//! 4. fold duplicates that name the same yoga
//! 5. attach activation windows, filter and sort
//!
//! The engine is stateless and holds no caches. Identical input always
//! yields an identical [`YogaReport`].

pub mod assemble;
pub mod classify;
pub mod config;
pub mod dedup;
pub mod error;
mod evaluate;
pub mod report;
pub mod strength;

use std::sync::atomic::AtomicBool;

use tracing::{debug, info, info_span};

use jataka_base::{Chart, ChartInput, ChartStrengths};
use jataka_yoga::{BphsCategory, CATALOG_VERSION, EvalContext, YogaRule, catalog};

pub use classify::{Importance, classify};
pub use config::{EngineConfig, StrengthThresholds};
pub use dedup::normalize_name;
pub use error::EngineError;
pub use report::{RuleDiagnostic, YogaDetection, YogaReport, chart_fingerprint};

use crate::evaluate::{Hit, evaluate_rules};
use crate::strength::grade;

/// Detection engine over a rule catalog.
#[derive(Debug, Clone)]
pub struct YogaEngine {
    config: EngineConfig,
    rules: &'static [YogaRule],
}

impl Default for YogaEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            rules: catalog(),
        }
    }
}

impl YogaEngine {
    /// Engine over the built-in catalog.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_catalog(config, catalog())
    }

    /// Engine over a caller-supplied rule table.
    pub fn with_catalog(
        config: EngineConfig,
        rules: &'static [YogaRule],
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config, rules })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rules(&self) -> &'static [YogaRule] {
        self.rules
    }

    /// Validate a wire record, then detect.
    pub fn detect_input(&self, input: &ChartInput) -> Result<YogaReport, EngineError> {
        let chart = Chart::from_input(input)?;
        self.detect(&chart)
    }

    pub fn detect(&self, chart: &Chart) -> Result<YogaReport, EngineError> {
        self.run(chart, None)
    }

    /// Detect, polling `abort` between rules. A tripped flag yields
    /// [`EngineError::Aborted`].
    pub fn detect_with_abort(
        &self,
        chart: &Chart,
        abort: &AtomicBool,
    ) -> Result<YogaReport, EngineError> {
        self.run(chart, Some(abort))
    }

    fn run(&self, chart: &Chart, abort: Option<&AtomicBool>) -> Result<YogaReport, EngineError> {
        let _span = info_span!("detect_yogas", ascendant = %chart.ascendant()).entered();

        let rules: Vec<&YogaRule> = self
            .rules
            .iter()
            .filter(|r| self.config.include_non_classical || r.category != BphsCategory::NonClassical)
            .collect();
        let ctx = EvalContext::new(chart);
        let (hits, diagnostics) = evaluate_rules(&rules, &ctx, self.config.parallel, abort)?;

        let strengths = ChartStrengths::compute(chart);
        let detections: Vec<YogaDetection> = hits
            .into_iter()
            .map(|hit| self.detection(hit, chart, &strengths))
            .collect();
        let graded = detections.len();

        let mut detections = dedup::dedup(detections, self.config.merge_formation_planets);
        debug!(before = graded, after = detections.len(), "duplicates merged");

        if let Some(min) = self.config.min_importance {
            detections.retain(|d| d.importance >= min);
        }
        assemble::sort_detections(&mut detections);

        let report = YogaReport {
            catalog_version: CATALOG_VERSION,
            chart_fingerprint: chart_fingerprint(chart)?,
            detections,
            diagnostics,
        };
        info!(
            detections = report.detections.len(),
            diagnostics = report.diagnostics.len(),
            "detection complete"
        );
        Ok(report)
    }

    fn detection(&self, hit: Hit<'_>, chart: &Chart, strengths: &ChartStrengths) -> YogaDetection {
        let Hit {
            rule,
            raw,
            cancellations,
        } = hit;
        let cancelled = !cancellations.is_empty();
        let graded = grade(rule, &raw, strengths, &self.config.thresholds, cancelled);
        let activation_windows =
            assemble::activation_windows(&raw.involved, rule.activation_age, chart.periods());
        YogaDetection {
            rule_id: rule.id,
            name: rule.display_name(&raw),
            category: rule.category,
            reference: rule.reference,
            family: rule.family,
            strength: graded.strength,
            strength_score: graded.score,
            importance: classify(rule, graded.strength),
            impact: rule.impact,
            formation_description: rule.describe(&raw),
            is_cancelled: cancelled,
            cancellation_reasons: cancellations,
            life_areas: rule.life_areas.to_vec(),
            activation_age_range: rule.activation_age,
            activation_windows,
            simplified: rule.simplified(),
            simplified_note: rule.simplified_note,
            merged_rule_ids: Vec::new(),
            merged_instances: Vec::new(),
            instance: raw.instance,
            formation_planets: raw.involved,
            formation_facts: raw.facts,
        }
    }
}

/// Detect with the default configuration and the built-in catalog.
pub fn detect_yogas(chart: &Chart) -> Result<YogaReport, EngineError> {
    YogaEngine::default().detect(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_base::{ChartBuilder, Graha};

    fn leo_chart() -> Chart {
        ChartBuilder::new(5)
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
            .unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let mut config = EngineConfig::default();
        config.thresholds.medium = 90.0;
        assert!(matches!(
            YogaEngine::new(config),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn non_classical_can_be_excluded() {
        let config = EngineConfig {
            include_non_classical: false,
            ..EngineConfig::sequential()
        };
        let report = YogaEngine::new(config).unwrap().detect(&leo_chart()).unwrap();
        assert!(
            report
                .detections
                .iter()
                .all(|d| d.category != BphsCategory::NonClassical)
        );
    }

    #[test]
    fn min_importance_filters() {
        let config = EngineConfig {
            min_importance: Some(Importance::Major),
            ..EngineConfig::sequential()
        };
        let report = YogaEngine::new(config).unwrap().detect(&leo_chart()).unwrap();
        assert!(!report.detections.is_empty());
        assert!(report.detections.iter().all(|d| d.importance == Importance::Major));
    }

    #[test]
    fn tripped_flag_aborts() {
        let engine = YogaEngine::new(EngineConfig::sequential()).unwrap();
        let chart = leo_chart();
        let flag = AtomicBool::new(true);
        assert!(matches!(
            engine.detect_with_abort(&chart, &flag),
            Err(EngineError::Aborted)
        ));
        flag.store(false, std::sync::atomic::Ordering::Relaxed);
        let report = engine.detect_with_abort(&chart, &flag).unwrap();
        assert_eq!(report, engine.detect(&chart).unwrap());
    }

    #[test]
    fn report_carries_version_and_fingerprint() {
        let chart = leo_chart();
        let report = detect_yogas(&chart).unwrap();
        assert_eq!(report.catalog_version, CATALOG_VERSION);
        assert_eq!(report.chart_fingerprint, chart_fingerprint(&chart).unwrap());
        assert!(report.diagnostics.is_empty());
    }
}
