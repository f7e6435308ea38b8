//! Lunar yogas: planets around the Moon and Jupiter's relation to it.

use jataka_base::{KENDRA, UPACHAYA};

use super::{CHANDRA, GURU, LAGNA, MANGAL, TARA_PAPA};
use crate::predicate::{DignityTest, GrahaSet, MOON, Predicate};
use crate::rule::{CancelCondition, FormationPart, Pattern, YogaRule};
use crate::types::{BphsCategory, Impact, LifeArea, PatternFamily, StrengthHint};

const TARA_IN_2ND: Predicate = Predicate::Occupies {
    set: GrahaSet::Tara,
    from: MOON,
    houses: &[2],
    min: 1,
};

const TARA_IN_12TH: Predicate = Predicate::Occupies {
    set: GrahaSet::Tara,
    from: MOON,
    houses: &[12],
    min: 1,
};

const AROUND_MOON: &[FormationPart] = &[
    FormationPart::Target(CHANDRA),
    FormationPart::Occupants {
        set: GrahaSet::Tara,
        from: MOON,
        houses: &[2, 12],
    },
];

pub(super) const RULES: &[YogaRule] = &[
    YogaRule::new(
        "chandra.sunapha",
        "Sunapha Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[TARA_IN_2ND, Predicate::Not(&TARA_IN_12TH)]),
            formation: AROUND_MOON,
            key: &[],
        },
        "Planets other than the Sun in the 2nd from the Moon ({planets})",
    )
    .family(PatternFamily::Chandra)
    .reference("BPHS Ch.37")
    .areas(&[LifeArea::Wealth, LifeArea::Reputation]),
    YogaRule::new(
        "chandra.anapha",
        "Anapha Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[TARA_IN_12TH, Predicate::Not(&TARA_IN_2ND)]),
            formation: AROUND_MOON,
            key: &[],
        },
        "Planets other than the Sun in the 12th from the Moon ({planets})",
    )
    .family(PatternFamily::Chandra)
    .reference("BPHS Ch.37")
    .areas(&[LifeArea::Health, LifeArea::Reputation]),
    one_sided!(
        "chandra.shubha_sunapha",
        "Shubha Sunapha Yoga",
        BphsCategory::Standard,
        from: MOON,
        center: CHANDRA,
        side: 2,
        away: 12,
        occupant: GrahaSet::Shubha,
        excluded: TARA_PAPA,
        "Only natural benefics in the 2nd from the Moon ({planets})"
    )
    .family(PatternFamily::Chandra)
    .reference("BPHS Ch.37")
    .areas(&[LifeArea::Wealth, LifeArea::Intellect]),
    one_sided!(
        "chandra.ashubha_sunapha",
        "Ashubha Sunapha Yoga",
        BphsCategory::MinorSubtle,
        from: MOON,
        center: CHANDRA,
        side: 2,
        away: 12,
        occupant: TARA_PAPA,
        excluded: GrahaSet::Shubha,
        "Only Mars or Saturn in the 2nd from the Moon ({planets})"
    )
    .family(PatternFamily::Chandra)
    .reference("BPHS Ch.37")
    .impact(Impact::Negative)
    .areas(&[LifeArea::Wealth, LifeArea::Family]),
    one_sided!(
        "chandra.shubha_anapha",
        "Shubha Anapha Yoga",
        BphsCategory::Standard,
        from: MOON,
        center: CHANDRA,
        side: 12,
        away: 2,
        occupant: GrahaSet::Shubha,
        excluded: TARA_PAPA,
        "Only natural benefics in the 12th from the Moon ({planets})"
    )
    .family(PatternFamily::Chandra)
    .reference("BPHS Ch.37")
    .areas(&[LifeArea::Health, LifeArea::Spirituality]),
    one_sided!(
        "chandra.ashubha_anapha",
        "Ashubha Anapha Yoga",
        BphsCategory::MinorSubtle,
        from: MOON,
        center: CHANDRA,
        side: 12,
        away: 2,
        occupant: TARA_PAPA,
        excluded: GrahaSet::Shubha,
        "Only Mars or Saturn in the 12th from the Moon ({planets})"
    )
    .family(PatternFamily::Chandra)
    .reference("BPHS Ch.37")
    .impact(Impact::Negative)
    .areas(&[LifeArea::Health, LifeArea::Reputation]),
    YogaRule::new(
        "chandra.durudhara",
        "Durudhara Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[TARA_IN_2ND, TARA_IN_12TH]),
            formation: AROUND_MOON,
            key: &[],
        },
        "Planets on both sides of the Moon ({planets})",
    )
    .family(PatternFamily::Chandra)
    .reference("BPHS Ch.37")
    .areas(&[LifeArea::Wealth, LifeArea::Property]),
    YogaRule::new(
        "chandra.kemadruma",
        "Kemadruma Yoga",
        BphsCategory::MajorChallenge,
        Pattern::Single {
            when: Predicate::Not(&Predicate::Occupies {
                set: GrahaSet::Tara,
                from: MOON,
                houses: &[2, 12],
                min: 1,
            }),
            formation: &[FormationPart::Target(CHANDRA)],
            key: &[],
        },
        "No planet other than the Sun on either side of the Moon",
    )
    .family(PatternFamily::Chandra)
    .reference("BPHS Ch.37")
    .cancelled_by(&[
        CancelCondition {
            when: Predicate::Occupies {
                set: GrahaSet::Sapta,
                from: MOON,
                houses: &KENDRA,
                min: 1,
            },
            reason: "a planet occupies a kendra from the Moon",
        },
        CancelCondition {
            when: Predicate::Occupies {
                set: GrahaSet::Sapta,
                from: LAGNA,
                houses: &KENDRA,
                min: 1,
            },
            reason: "a planet occupies a kendra from the ascendant",
        },
        CancelCondition {
            when: Predicate::Aspects {
                by: GURU,
                on: CHANDRA,
            },
            reason: "Jupiter aspects the Moon",
        },
    ])
    .areas(&[LifeArea::Wealth, LifeArea::Family]),
    YogaRule::new(
        "chandra.gajakesari",
        "Gajakesari Yoga",
        BphsCategory::MajorPositive,
        Pattern::Single {
            when: Predicate::Placed {
                target: GURU,
                from: MOON,
                houses: &KENDRA,
            },
            formation: &[FormationPart::Target(CHANDRA), FormationPart::Target(GURU)],
            key: &[GURU],
        },
        "Jupiter in a kendra from the Moon (Moon: {Moon}; Jupiter: {Jupiter})",
    )
    .family(PatternFamily::Chandra)
    .reference("BPHS Ch.36")
    .strength(StrengthHint::KeyPlanets)
    .cancelled_by(&[
        CancelCondition {
            when: Predicate::Dignity {
                target: GURU,
                test: DignityTest::Debilitated,
            },
            reason: "Jupiter is debilitated",
        },
        CancelCondition {
            when: Predicate::Combust(GURU),
            reason: "Jupiter is combust",
        },
    ])
    .areas(&[LifeArea::Reputation, LifeArea::Wealth, LifeArea::Intellect]),
    YogaRule::new(
        "chandra.adhi",
        "Adhi Yoga",
        BphsCategory::MajorPositive,
        Pattern::Single {
            when: Predicate::AllIn {
                set: GrahaSet::Shubha,
                from: MOON,
                houses: &[6, 7, 8],
            },
            formation: &[
                FormationPart::Target(CHANDRA),
                FormationPart::Occupants {
                    set: GrahaSet::Shubha,
                    from: MOON,
                    houses: &[6, 7, 8],
                },
            ],
            key: &[],
        },
        "Natural benefics in the 6th, 7th and 8th from the Moon ({planets})",
    )
    .family(PatternFamily::Chandra)
    .reference("BPHS Ch.37")
    .simplified_as("requires all of Mercury, Jupiter and Venus in the 6th-8th from the Moon")
    .areas(&[LifeArea::Status, LifeArea::Career])
    .ages(30.0, 60.0),
    YogaRule::new(
        "chandra.chandra_mangala",
        "Chandra-Mangala Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::Conjunct {
                a: CHANDRA,
                b: MANGAL,
            },
            formation: &[FormationPart::Target(CHANDRA), FormationPart::Target(MANGAL)],
            key: &[],
        },
        "Moon and Mars together in {Moon}",
    )
    .family(PatternFamily::Chandra)
    .reference("Phaladeepika Ch.6")
    .impact(Impact::Mixed)
    .areas(&[LifeArea::Wealth]),
    YogaRule::new(
        "chandra.sakata",
        "Sakata Yoga",
        BphsCategory::MinorSubtle,
        Pattern::Single {
            when: Predicate::Placed {
                target: GURU,
                from: MOON,
                houses: &[6, 8, 12],
            },
            formation: &[FormationPart::Target(CHANDRA), FormationPart::Target(GURU)],
            key: &[],
        },
        "Jupiter in a dusthana from the Moon (Jupiter: {Jupiter})",
    )
    .family(PatternFamily::Chandra)
    .reference("Phaladeepika Ch.6")
    .impact(Impact::Negative)
    .cancelled_by(&[CancelCondition {
        when: Predicate::Placed {
            target: GURU,
            from: LAGNA,
            houses: &KENDRA,
        },
        reason: "Jupiter occupies a kendra from the ascendant",
    }])
    .areas(&[LifeArea::Fortune, LifeArea::Wealth]),
    YogaRule::new(
        "chandra.vasumati",
        "Vasumati Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::AllIn {
                set: GrahaSet::Shubha,
                from: MOON,
                houses: &UPACHAYA,
            },
            formation: &[FormationPart::Occupants {
                set: GrahaSet::Shubha,
                from: MOON,
                houses: &UPACHAYA,
            }],
            key: &[],
        },
        "Natural benefics in upachayas from the Moon ({planets})",
    )
    .family(PatternFamily::Chandra)
    .reference("Phaladeepika Ch.6")
    .areas(&[LifeArea::Wealth, LifeArea::Property]),
    YogaRule::new(
        "chandra.amala",
        "Amala Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Occupies {
                    set: GrahaSet::Shubha,
                    from: MOON,
                    houses: &[10],
                    min: 1,
                },
                Predicate::Not(&Predicate::Occupies {
                    set: GrahaSet::PapaWithNodes,
                    from: MOON,
                    houses: &[10],
                    min: 1,
                }),
            ]),
            formation: &[FormationPart::Occupants {
                set: GrahaSet::Shubha,
                from: MOON,
                houses: &[10],
            }],
            key: &[],
        },
        "Only natural benefics in the 10th from the Moon ({planets})",
    )
    .family(PatternFamily::Chandra)
    .reference("Phaladeepika Ch.6")
    .areas(&[LifeArea::Reputation, LifeArea::Career]),
];
