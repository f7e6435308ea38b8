//! End-to-end detection against fixture charts.

use std::collections::BTreeSet;

use jataka_base::{Chart, ChartBuilder, ChartInput, Graha, ValidationError};
use jataka_engine::{
    EngineConfig, EngineError, Importance, YogaEngine, YogaReport, detect_yogas, normalize_name,
};
use jataka_yoga::{BphsCategory, Strength, Structure, find_rule};

const LEO: &str = include_str!("fixtures/leo_gajakesari.json");
const ARIES: &str = include_str!("fixtures/aries_saraswati.json");

fn input(json: &str) -> ChartInput {
    serde_json::from_str(json).expect("fixture parses")
}

fn chart(json: &str) -> Chart {
    Chart::from_input(&input(json)).expect("fixture validates")
}

fn instances(report: &YogaReport) -> BTreeSet<(String, Option<String>)> {
    report
        .detections
        .iter()
        .map(|d| (d.rule_id.to_string(), d.instance.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn identical_input_identical_report() {
    let chart = chart(LEO);
    let parallel = YogaEngine::new(EngineConfig::default()).unwrap();
    let sequential = YogaEngine::new(EngineConfig::sequential()).unwrap();

    let a = serde_json::to_string(&parallel.detect(&chart).unwrap()).unwrap();
    let b = serde_json::to_string(&parallel.detect(&chart).unwrap()).unwrap();
    let c = serde_json::to_string(&sequential.detect(&chart).unwrap()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
}

// ---------------------------------------------------------------------------
// Gajakesari: Leo ascendant, Moon 4th, Jupiter 7th
// ---------------------------------------------------------------------------

#[test]
fn gajakesari_scenario() {
    let report = detect_yogas(&chart(LEO)).unwrap();
    let gk: Vec<_> = report.named("Gajakesari Yoga").collect();
    assert_eq!(gk.len(), 1);
    let gk = gk[0];
    assert!(matches!(gk.strength, Strength::Strong | Strength::VeryStrong));
    assert_eq!(gk.importance, Importance::Major);
    assert_eq!(gk.category, BphsCategory::MajorPositive);
    assert!(!gk.is_cancelled);
    assert_eq!(gk.formation_planets, vec![Graha::Chandra, Graha::Guru]);
    assert_eq!(gk.fact("Jupiter"), Some("Aquarius, 7th house"));
    assert!(gk.formation_description.contains("Aquarius, 7th house"));
    assert_eq!(gk.reference, Some("BPHS Ch.36"));
}

#[test]
fn activation_windows_follow_formation_lords() {
    let report = detect_yogas(&chart(LEO)).unwrap();
    let gk = report.named("Gajakesari Yoga").next().unwrap();
    let lords: Vec<_> = gk.activation_windows.iter().map(|p| p.lord).collect();
    assert_eq!(lords, vec![Graha::Chandra, Graha::Guru]);
}

// ---------------------------------------------------------------------------
// De-duplication
// ---------------------------------------------------------------------------

#[test]
fn no_two_detections_share_a_normalized_name() {
    for json in [LEO, ARIES] {
        let report = detect_yogas(&chart(json)).unwrap();
        let mut seen = BTreeSet::new();
        for d in &report.detections {
            let key = normalize_name(&d.name);
            assert!(seen.insert(key.clone()), "duplicate {key}");
        }
    }
}

#[test]
fn one_exchange_one_detection() {
    // Mars in Gemini and Mercury in Aries: lords of 4/9 and 2/11.
    let report = detect_yogas(&chart(LEO)).unwrap();
    let found: Vec<_> = report
        .detections
        .iter()
        .filter(|d| d.family == Some(jataka_yoga::PatternFamily::Parivartana))
        .collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Maha Parivartana Yoga");
    assert_eq!(found[0].instance.as_deref(), Some("9-11"));
    assert_eq!(found[0].formation_planets, vec![Graha::Mangal, Graha::Buddh]);
}

#[test]
fn budhaditya_and_nipuna_merge() {
    // Sun and Mercury share Mesha, 18 degrees apart.
    let report = detect_yogas(&chart(LEO)).unwrap();
    let merged: Vec<_> = report
        .detections
        .iter()
        .filter(|d| normalize_name(&d.name) == "budhaditya")
        .collect();
    assert_eq!(merged.len(), 1);
    let d = merged[0];
    let mut ids = vec![d.rule_id];
    ids.extend(d.merged_rule_ids.iter().copied());
    ids.sort_unstable();
    assert_eq!(ids, vec!["surya.budhaditya", "surya.nipuna"]);
    assert_eq!(report.from_rule("surya.nipuna").count(), 1);
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn placement_enumerations_graded_by_strength_only() {
    for json in [LEO, ARIES] {
        let report = detect_yogas(&chart(json)).unwrap();
        let lords: Vec<_> = report.from_rule("bhava.lord_placement").collect();
        assert_eq!(lords.len(), 12);
        let names: BTreeSet<_> = lords.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), 12);
        for d in lords {
            let rule = find_rule(d.rule_id).unwrap();
            assert_eq!(rule.structure, Structure::PlacementEnumeration);
            let expected = if d.strength.is_strong() {
                Importance::Moderate
            } else {
                Importance::Minor
            };
            assert_eq!(d.importance, expected, "{:?}", d.instance);
        }
    }
}

#[test]
fn report_is_sorted() {
    let report = detect_yogas(&chart(ARIES)).unwrap();
    for pair in report.detections.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.category <= b.category);
        if a.category == b.category {
            assert!(a.strength >= b.strength);
            if a.strength == b.strength {
                assert!(a.name <= b.name);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Reference-point correctness
// ---------------------------------------------------------------------------

#[test]
fn saraswati_counts_from_the_ascendant() {
    // Mercury and Venus in the 2nd, Jupiter in the 5th in a friend's sign.
    let report = detect_yogas(&chart(ARIES)).unwrap();
    let d = report.named("Saraswati Yoga").next().expect("Saraswati detected");
    assert_eq!(
        d.formation_planets,
        vec![Graha::Buddh, Graha::Guru, Graha::Shukra]
    );
    assert_eq!(d.importance, Importance::Major);
}

#[test]
fn saraswati_ignores_mutual_relations() {
    // Jupiter moved to Vrischika, the 8th: 7th from Mercury and Venus and in
    // a friend's sign, but outside the houses counted from the ascendant.
    let mut input = input(ARIES);
    let jupiter = input
        .placements
        .iter_mut()
        .find(|p| p.planet == Graha::Guru)
        .unwrap();
    jupiter.sign = 8;
    jupiter.house = 8;
    let report = YogaEngine::default().detect_input(&input).unwrap();
    assert!(!report.contains("Saraswati Yoga"));
}

#[test]
fn mahapurusha_in_aries_chart() {
    // Mars exalted in the 10th, Saturn exalted in the 7th.
    let report = detect_yogas(&chart(ARIES)).unwrap();
    assert!(report.contains("Ruchaka Yoga"));
    assert!(report.contains("Sasa Yoga"));
    assert!(!report.contains("Malavya Yoga"));
}

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

#[test]
fn cancelled_yogas_stay_visible() {
    // No tara graha beside the Moon, but Jupiter is in a kendra from it.
    let report = detect_yogas(&chart(LEO)).unwrap();
    let k = report.named("Kemadruma Yoga").next().expect("Kemadruma reported");
    assert!(k.is_cancelled);
    assert!(
        k.cancellation_reasons
            .contains(&"a planet occupies a kendra from the Moon")
    );
    assert_eq!(k.strength, Strength::Weak);
    assert_eq!(k.importance, Importance::Major);
}

#[test]
fn debilitated_jupiter_cancels_gajakesari() {
    // Moon in Tula (3rd), Jupiter debilitated in Makara (6th): 4th from Moon.
    let chart = ChartBuilder::new(5)
        .place(Graha::Surya, 1, 10.0)
        .place(Graha::Chandra, 7, 12.0)
        .place(Graha::Mangal, 3, 4.0)
        .place(Graha::Buddh, 1, 28.0)
        .place(Graha::Guru, 10, 15.0)
        .place(Graha::Shukra, 2, 2.0)
        .place(Graha::Shani, 6, 20.0)
        .place(Graha::Rahu, 9, 5.0)
        .place(Graha::Ketu, 3, 5.0)
        .build()
        .unwrap();
    let report = detect_yogas(&chart).unwrap();
    let gk = report.named("Gajakesari Yoga").next().unwrap();
    assert!(gk.is_cancelled);
    assert_eq!(gk.cancellation_reasons, vec!["Jupiter is debilitated"]);
    assert_eq!(gk.strength, Strength::Weak);
}

#[test]
fn afflicted_raja_pair_does_not_cancel_a_sound_one() {
    // Aries rising: Mars and the exalted Sun (1st and 5th lords) share the
    // ascendant; Venus, debilitated in Kanya, joins Jupiter (7th and 9th).
    let chart = ChartBuilder::new(1)
        .place(Graha::Surya, 1, 25.0)
        .place(Graha::Chandra, 4, 12.0)
        .place(Graha::Mangal, 1, 2.0)
        .place(Graha::Buddh, 2, 10.0)
        .place(Graha::Guru, 6, 14.0)
        .place(Graha::Shukra, 6, 20.0)
        .place(Graha::Shani, 10, 8.0)
        .place(Graha::Rahu, 3, 5.0)
        .place(Graha::Ketu, 9, 5.0)
        .build()
        .unwrap();
    let report = detect_yogas(&chart).unwrap();
    let raja: Vec<_> = report.named("Raja Yoga").collect();
    assert_eq!(raja.len(), 1);
    assert!(!raja[0].is_cancelled);
    assert!(raja[0].cancellation_reasons.is_empty());
    assert_eq!(raja[0].instance.as_deref(), Some("1-5"));
    assert_eq!(raja[0].merged_instances, vec!["7-9".to_string()]);
}

// ---------------------------------------------------------------------------
// Optional data
// ---------------------------------------------------------------------------

#[test]
fn missing_secondary_chart_drops_only_vargottama() {
    let without = chart(LEO);
    assert!(!without.has_secondary());
    let with = without.clone().with_derived_navamsha();
    // Jupiter at 15 Kumbha falls in the Kumbha navamsha.
    assert!(with.placement(Graha::Guru).vargottama);

    let a = detect_yogas(&without).unwrap();
    let b = detect_yogas(&with).unwrap();
    assert!(a.diagnostics.is_empty());
    assert!(b.diagnostics.is_empty());
    assert_eq!(a.from_rule("misc.vargottama").count(), 0);

    let varg: Vec<_> = b.from_rule("misc.vargottama").collect();
    assert_eq!(varg.len(), 1);
    assert_eq!(varg[0].instance.as_deref(), Some("Jupiter"));

    let mut expected = instances(&a);
    expected.insert(("misc.vargottama".into(), Some("Jupiter".into())));
    assert_eq!(instances(&b), expected);
}

#[test]
fn vargottama_flag_without_secondary_chart_is_rejected() {
    let mut input = input(LEO);
    let jupiter = input
        .placements
        .iter_mut()
        .find(|p| p.planet == Graha::Guru)
        .unwrap();
    jupiter.vargottama = Some(true);
    let err = YogaEngine::default().detect_input(&input).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Validation(ValidationError::VargottamaWithoutSecondary(Graha::Guru))
    ));

    // Against a navamsha that disagrees.
    input.secondary_placements = Some([(Graha::Guru, 1)].into_iter().collect());
    let err = YogaEngine::default().detect_input(&input).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Validation(ValidationError::DignityMismatch { .. })
    ));
}

#[test]
fn invalid_chart_fails_before_rules_run() {
    let mut input = input(LEO);
    input.placements[0].house = 1;
    let err = YogaEngine::default().detect_input(&input).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Validation(ValidationError::HouseSignMismatch { .. })
    ));
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn config_from_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/engine.toml");
    let config = EngineConfig::load(path).unwrap();
    assert!(!config.parallel);
    assert_eq!(config.thresholds.strong, 65.0);

    // Jupiter scores 76: Strong by default, still Strong at 65, not VeryStrong at 85.
    let report = YogaEngine::new(config).unwrap().detect(&chart(LEO)).unwrap();
    let gk = report.named("Gajakesari Yoga").next().unwrap();
    assert_eq!(gk.strength, Strength::Strong);
}

#[test]
fn json_shape() {
    let report = detect_yogas(&chart(LEO)).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["catalog_version"], jataka_yoga::CATALOG_VERSION);
    assert_eq!(value["chart_fingerprint"].as_str().unwrap().len(), 64);
    let first = &value["detections"][0];
    for key in [
        "rule_id",
        "name",
        "category",
        "strength",
        "importance",
        "formation_planets",
        "is_cancelled",
        "life_areas",
        "merged_rule_ids",
    ] {
        assert!(first.get(key).is_some(), "missing {key}");
    }
}
