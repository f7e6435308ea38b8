//! Catalog rules evaluated against hand-built charts.

use jataka_base::{Chart, ChartBuilder, Graha};
use jataka_yoga::{EvalContext, RawMatch, cancellation_reasons, evaluate_rule, find_rule};

/// Aries rising with Saturn in `saturn_sign`.
fn chart_with_saturn(saturn_sign: u8) -> Chart {
    ChartBuilder::new(1)
        .place(Graha::Surya, 2, 5.0)
        .place(Graha::Chandra, 3, 11.0)
        .place(Graha::Mangal, 1, 20.0)
        .place(Graha::Buddh, 2, 25.0)
        .place(Graha::Guru, 5, 11.0)
        .place(Graha::Shukra, 6, 28.0)
        .place(Graha::Shani, saturn_sign, 11.0)
        .place(Graha::Rahu, 1, 5.0)
        .place(Graha::Ketu, 7, 5.0)
        .build()
        .unwrap()
}

/// Every planet sits between Rahu (Mesha) and Ketu (Tula); Mercury and
/// Venus exchange signs across the 2nd and 6th.
fn hemmed_chart() -> Chart {
    chart_with_saturn(4)
}

fn run(id: &str, chart: &Chart) -> Vec<RawMatch> {
    let rule = find_rule(id).unwrap();
    evaluate_rule(rule, &EvalContext::new(chart)).unwrap()
}

/// Cancellation reasons for each match of a rule, in match order.
fn reasons(id: &str, chart: &Chart) -> Vec<Vec<&'static str>> {
    let rule = find_rule(id).unwrap();
    let ctx = EvalContext::new(chart);
    evaluate_rule(rule, &ctx)
        .unwrap()
        .iter()
        .map(|m| cancellation_reasons(rule, &ctx, m).unwrap())
        .collect()
}

/// Aries rising. Mars and the Sun join in the ascendant (lords of the 1st
/// and 5th); a debilitated Venus joins Jupiter in Virgo (lords of the 7th
/// and 9th).
fn two_raja_chart() -> Chart {
    ChartBuilder::new(1)
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
        .unwrap()
}

/// Aries rising with Mars exalted in the 10th, Jupiter exalted in the 4th
/// and Saturn exalted beside Venus in Libra.
fn exalted_kendras_chart() -> Chart {
    ChartBuilder::new(1)
        .place(Graha::Surya, 1, 10.0)
        .place(Graha::Chandra, 2, 5.0)
        .place(Graha::Mangal, 10, 20.0)
        .place(Graha::Buddh, 12, 15.0)
        .place(Graha::Guru, 4, 5.0)
        .place(Graha::Shukra, 7, 12.0)
        .place(Graha::Shani, 7, 20.0)
        .place(Graha::Rahu, 3, 5.0)
        .place(Graha::Ketu, 9, 5.0)
        .build()
        .unwrap()
}

#[test]
fn kala_sarpa_when_hemmed() {
    let chart = hemmed_chart();
    let found = run("arishta.kala_sarpa", &chart);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].involved, vec![Graha::Rahu, Graha::Ketu]);

    // Saturn steps outside the axis.
    let free = chart_with_saturn(10);
    assert!(run("arishta.kala_sarpa", &free).is_empty());
}

#[test]
fn manglik_cancelled_in_own_sign() {
    let chart = hemmed_chart();
    assert_eq!(run("arishta.manglik", &chart).len(), 1);
    assert_eq!(
        reasons("arishta.manglik", &chart),
        vec![vec!["Mars is in its own or exaltation sign"]]
    );
    assert_eq!(find_rule("arishta.manglik").unwrap().activation_age.map(|r| r.max), Some(40.0));
}

#[test]
fn node_conjunctions() {
    let chart = hemmed_chart();
    let angarak = run("arishta.angarak", &chart);
    assert_eq!(angarak.len(), 1);
    assert_eq!(angarak[0].involved, vec![Graha::Mangal, Graha::Rahu]);
    assert!(run("arishta.guru_chandala", &chart).is_empty());
    assert!(run("arishta.surya_grahan", &chart).is_empty());
}

#[test]
fn dainya_exchange_between_second_and_sixth() {
    let chart = hemmed_chart();
    let found = run("parivartana.dainya", &chart);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].instance.as_deref(), Some("2-6"));
    assert!(run("parivartana.maha", &chart).is_empty());
    assert!(run("parivartana.khala", &chart).is_empty());
}

#[test]
fn sankhya_counts_signs() {
    // Seven planets over Mesha..Kanya: six signs.
    let chart = hemmed_chart();
    assert_eq!(run("nabhasa.daama", &chart).len(), 1);
    for id in [
        "nabhasa.vallaki",
        "nabhasa.pasha",
        "nabhasa.kedara",
        "nabhasa.shoola",
        "nabhasa.yuga",
        "nabhasa.gola",
    ] {
        assert!(run(id, &chart).is_empty(), "{id}");
    }
}

#[test]
fn lord_placement_instances_cover_every_house() {
    let chart = hemmed_chart();
    let found = run("bhava.lord_placement", &chart);
    assert_eq!(found.len(), 12);
    // Lord of the 1st (Mars) sits in the 1st; lord of the 9th (Jupiter) in the 5th.
    assert_eq!(found[0].instance.as_deref(), Some("1-1"));
    assert_eq!(found[8].instance.as_deref(), Some("9-5"));
    assert_eq!(found[8].involved, vec![Graha::Guru]);
}

#[test]
fn vargottama_needs_secondary_chart() {
    let chart = hemmed_chart();
    assert!(!chart.has_secondary());
    assert!(run("misc.vargottama", &chart).is_empty());

    // Venus at 28 Kanya falls in the last navamsha, Kanya. Jupiter at 11
    // Simha falls in Karka.
    let derived = chart.with_derived_navamsha();
    let found = run("misc.vargottama", &derived);
    let planets: Vec<_> = found.iter().filter_map(|m| m.instance.as_deref()).collect();
    assert!(planets.contains(&"Venus"));
    assert!(!planets.contains(&"Jupiter"));
}

#[test]
fn raja_cancellation_judged_per_lord_pair() {
    let chart = two_raja_chart();
    let found = run("raja.kendra_trikona", &chart);
    let instances: Vec<_> = found.iter().filter_map(|m| m.instance.as_deref()).collect();
    assert_eq!(instances, vec!["1-5", "7-9"]);
    assert_eq!(found[1].involved, vec![Graha::Shukra, Graha::Guru]);

    // Venus afflicts only the pair it belongs to.
    assert_eq!(
        reasons("raja.kendra_trikona", &chart),
        vec![vec![], vec!["a linked lord is debilitated"]]
    );
}

#[test]
fn one_sided_luminary_yogas_by_nature() {
    // Moon in Gemini with only Mercury in the 12th from it; the Sun in
    // Taurus with only Mars in its 12th.
    let chart = chart_with_saturn(10);
    let anapha = run("chandra.shubha_anapha", &chart);
    assert_eq!(anapha.len(), 1);
    assert_eq!(anapha[0].involved, vec![Graha::Chandra, Graha::Buddh]);
    assert!(run("chandra.ashubha_anapha", &chart).is_empty());

    let vasi = run("surya.ashubha_vasi", &chart);
    assert_eq!(vasi.len(), 1);
    assert_eq!(vasi[0].involved, vec![Graha::Surya, Graha::Mangal]);
    assert!(run("surya.shubha_vasi", &chart).is_empty());

    // Saturn in Cancer puts planets on both sides of the Moon.
    let hemmed = hemmed_chart();
    assert!(run("chandra.shubha_sunapha", &hemmed).is_empty());
    assert!(run("chandra.ashubha_sunapha", &hemmed).is_empty());
}

#[test]
fn leo_lagna_dhana_needs_both_helpers() {
    let with_mars = |mars_sign: u8| {
        ChartBuilder::new(5)
            .place(Graha::Surya, 5, 10.0)
            .place(Graha::Chandra, 2, 3.0)
            .place(Graha::Mangal, mars_sign, 20.0)
            .place(Graha::Buddh, 4, 28.0)
            .place(Graha::Guru, 11, 15.0)
            .place(Graha::Shukra, 6, 2.0)
            .place(Graha::Shani, 8, 9.0)
            .place(Graha::Rahu, 1, 5.0)
            .place(Graha::Ketu, 7, 5.0)
            .build()
            .unwrap()
    };
    // Mars joins the Sun; Jupiter in Aquarius aspects it from the 7th.
    let found = run("dhana.surya_lagna", &with_mars(5));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].involved, vec![Graha::Surya, Graha::Mangal, Graha::Guru]);

    // From Virgo, Mars aspects Sagittarius, Pisces and Aries.
    assert!(run("dhana.surya_lagna", &with_mars(6)).is_empty());
    assert!(run("dhana.chandra_lagna", &with_mars(5)).is_empty());
}

#[test]
fn amsavatara_and_dispositor_chains() {
    let chart = exalted_kendras_chart();
    let found = run("named.amsavatara", &chart);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].involved, vec![Graha::Shukra, Graha::Guru, Graha::Shani]);

    // Mars is disposited by Saturn, Saturn by Venus in its own Libra.
    let parijata = run("named.parijata", &chart);
    assert_eq!(parijata.len(), 1);
    assert_eq!(parijata[0].involved, vec![Graha::Mangal, Graha::Shukra]);

    // Exalted Sun, Mars, Jupiter and Saturn all hold kendras.
    let mridanga = run("named.mridanga", &chart);
    assert_eq!(
        mridanga[0].involved,
        vec![Graha::Mangal, Graha::Surya, Graha::Guru, Graha::Shani]
    );
    assert!(run("named.kusuma", &chart).is_empty());
}
