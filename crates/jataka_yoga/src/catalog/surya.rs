//! Solar yogas (BPHS Ch.38) and the Sun-Mercury conjunction.

use super::{BUDDH, SURYA, TARA_PAPA};
use crate::predicate::{GrahaSet, Predicate, SUN};
use crate::rule::{CancelCondition, FormationPart, Pattern, YogaRule};
use crate::types::{BphsCategory, Impact, LifeArea, PatternFamily};

const TARA_IN_2ND: Predicate = Predicate::Occupies {
    set: GrahaSet::Tara,
    from: SUN,
    houses: &[2],
    min: 1,
};

const TARA_IN_12TH: Predicate = Predicate::Occupies {
    set: GrahaSet::Tara,
    from: SUN,
    houses: &[12],
    min: 1,
};

const AROUND_SUN: &[FormationPart] = &[
    FormationPart::Target(SURYA),
    FormationPart::Occupants {
        set: GrahaSet::Tara,
        from: SUN,
        houses: &[2, 12],
    },
];

const SUN_WITH_MERCURY: Pattern = Pattern::Single {
    when: Predicate::Conjunct { a: SURYA, b: BUDDH },
    formation: &[FormationPart::Target(SURYA), FormationPart::Target(BUDDH)],
    key: &[],
};

const MERCURY_COMBUST: &[CancelCondition] = &[CancelCondition {
    when: Predicate::Combust(BUDDH),
    reason: "Mercury is combust",
}];

pub(super) const RULES: &[YogaRule] = &[
    YogaRule::new(
        "surya.vesi",
        "Vesi Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[TARA_IN_2ND, Predicate::Not(&TARA_IN_12TH)]),
            formation: AROUND_SUN,
            key: &[],
        },
        "Planets other than the Moon in the 2nd from the Sun ({planets})",
    )
    .family(PatternFamily::Surya)
    .reference("BPHS Ch.38")
    .areas(&[LifeArea::Reputation]),
    YogaRule::new(
        "surya.vasi",
        "Vasi Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[TARA_IN_12TH, Predicate::Not(&TARA_IN_2ND)]),
            formation: AROUND_SUN,
            key: &[],
        },
        "Planets other than the Moon in the 12th from the Sun ({planets})",
    )
    .family(PatternFamily::Surya)
    .reference("BPHS Ch.38")
    .areas(&[LifeArea::Wealth]),
    one_sided!(
        "surya.shubha_vesi",
        "Shubha Vesi Yoga",
        BphsCategory::Standard,
        from: SUN,
        center: SURYA,
        side: 2,
        away: 12,
        occupant: GrahaSet::Shubha,
        excluded: TARA_PAPA,
        "Only natural benefics in the 2nd from the Sun ({planets})"
    )
    .family(PatternFamily::Surya)
    .reference("BPHS Ch.38")
    .areas(&[LifeArea::Reputation, LifeArea::Intellect]),
    one_sided!(
        "surya.ashubha_vesi",
        "Ashubha Vesi Yoga",
        BphsCategory::MinorSubtle,
        from: SUN,
        center: SURYA,
        side: 2,
        away: 12,
        occupant: TARA_PAPA,
        excluded: GrahaSet::Shubha,
        "Only Mars or Saturn in the 2nd from the Sun ({planets})"
    )
    .family(PatternFamily::Surya)
    .reference("BPHS Ch.38")
    .impact(Impact::Negative)
    .areas(&[LifeArea::Reputation]),
    one_sided!(
        "surya.shubha_vasi",
        "Shubha Vasi Yoga",
        BphsCategory::Standard,
        from: SUN,
        center: SURYA,
        side: 12,
        away: 2,
        occupant: GrahaSet::Shubha,
        excluded: TARA_PAPA,
        "Only natural benefics in the 12th from the Sun ({planets})"
    )
    .family(PatternFamily::Surya)
    .reference("BPHS Ch.38")
    .areas(&[LifeArea::Wealth, LifeArea::Fortune]),
    one_sided!(
        "surya.ashubha_vasi",
        "Ashubha Vasi Yoga",
        BphsCategory::MinorSubtle,
        from: SUN,
        center: SURYA,
        side: 12,
        away: 2,
        occupant: TARA_PAPA,
        excluded: GrahaSet::Shubha,
        "Only Mars or Saturn in the 12th from the Sun ({planets})"
    )
    .family(PatternFamily::Surya)
    .reference("BPHS Ch.38")
    .impact(Impact::Negative)
    .areas(&[LifeArea::Wealth]),
    YogaRule::new(
        "surya.ubhayachari",
        "Ubhayachari Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[TARA_IN_2ND, TARA_IN_12TH]),
            formation: AROUND_SUN,
            key: &[],
        },
        "Planets on both sides of the Sun ({planets})",
    )
    .family(PatternFamily::Surya)
    .reference("BPHS Ch.38")
    .areas(&[LifeArea::Status, LifeArea::Reputation]),
    YogaRule::new(
        "surya.budhaditya",
        "Budhaditya Yoga",
        BphsCategory::Standard,
        SUN_WITH_MERCURY,
        "Sun and Mercury together in {Sun}",
    )
    .family(PatternFamily::Surya)
    .reference("Jataka Parijata Ch.7")
    .cancelled_by(MERCURY_COMBUST)
    .areas(&[LifeArea::Intellect, LifeArea::Learning]),
    YogaRule::new(
        "surya.nipuna",
        "Nipuna Yoga",
        BphsCategory::Standard,
        SUN_WITH_MERCURY,
        "Sun conjoined with Mercury ({planets})",
    )
    .family(PatternFamily::Surya)
    .reference("Saravali Ch.15")
    .cancelled_by(MERCURY_COMBUST)
    .areas(&[LifeArea::Intellect, LifeArea::Career]),
];
