//! Affliction yogas: Daridra from the classics and the popular node and
//! malefic conjunctions that later practice added.

use jataka_base::DUSTHANA;

use super::{CHANDRA, GURU, KETU, LAGNA, MANGAL, NODES, RAHU, SHANI, SURYA};
use crate::predicate::{DignityTest, GrahaSet, Predicate, Reference, Target};
use crate::rule::{CancelCondition, FormationPart, Pattern, YogaRule};
use crate::types::{BphsCategory, Impact, LifeArea, PatternFamily, Strength};

/// A planet sharing a sign with either node.
macro_rules! node_conjunction {
    ($id:literal, $name:literal, $graha:expr, $areas:expr, $desc:literal) => {
        YogaRule::new(
            $id,
            $name,
            BphsCategory::NonClassical,
            Pattern::Single {
                when: Predicate::Occupies {
                    set: GrahaSet::Only(&NODES),
                    from: Reference::Of($graha),
                    houses: &[1],
                    min: 1,
                },
                formation: &[
                    FormationPart::Target($graha),
                    FormationPart::Occupants {
                        set: GrahaSet::Only(&NODES),
                        from: Reference::Of($graha),
                        houses: &[1],
                    },
                ],
                key: &[],
            },
            $desc,
        )
        .family(PatternFamily::Arishta)
        .impact(Impact::Negative)
        .areas($areas)
    };
}

pub(super) const RULES: &[YogaRule] = &[
    YogaRule::new(
        "arishta.daridra",
        "Daridra Yoga",
        BphsCategory::MajorChallenge,
        Pattern::Single {
            when: Predicate::Placed {
                target: Target::LordOf(11),
                from: LAGNA,
                houses: &DUSTHANA,
            },
            formation: &[FormationPart::Target(Target::LordOf(11))],
            key: &[],
        },
        "Lord of the 11th ({planets}) in a dusthana",
    )
    .family(PatternFamily::Arishta)
    .reference("BPHS Ch.42")
    .cancelled_by(&[CancelCondition {
        when: Predicate::Dignity {
            target: Target::LordOf(11),
            test: DignityTest::ExaltedOrOwn,
        },
        reason: "lord of the 11th is in its own or exaltation sign",
    }])
    .areas(&[LifeArea::Wealth]),
    YogaRule::new(
        "arishta.kala_sarpa",
        "Kala Sarpa Yoga",
        BphsCategory::NonClassical,
        Pattern::Single {
            when: Predicate::Or(&[
                Predicate::AllIn {
                    set: GrahaSet::Sapta,
                    from: Reference::Of(RAHU),
                    houses: &[1, 2, 3, 4, 5, 6, 7],
                },
                Predicate::AllIn {
                    set: GrahaSet::Sapta,
                    from: Reference::Of(KETU),
                    houses: &[1, 2, 3, 4, 5, 6, 7],
                },
            ]),
            formation: &[FormationPart::Target(RAHU), FormationPart::Target(KETU)],
            key: &[],
        },
        "All seven planets hemmed between Rahu and Ketu",
    )
    .family(PatternFamily::Arishta)
    .impact(Impact::Negative)
    .fixed(Strength::Medium)
    .areas(&[LifeArea::Health, LifeArea::Fortune]),
    YogaRule::new(
        "arishta.manglik",
        "Manglik Dosha",
        BphsCategory::NonClassical,
        Pattern::Single {
            when: Predicate::Placed {
                target: MANGAL,
                from: LAGNA,
                houses: &[1, 2, 4, 7, 8, 12],
            },
            formation: &[FormationPart::Target(MANGAL)],
            key: &[],
        },
        "Mars in a marriage-sensitive house ({Mars})",
    )
    .family(PatternFamily::Arishta)
    .impact(Impact::Negative)
    .cancelled_by(&[CancelCondition {
        when: Predicate::Dignity {
            target: MANGAL,
            test: DignityTest::ExaltedOrOwn,
        },
        reason: "Mars is in its own or exaltation sign",
    }])
    .areas(&[LifeArea::Relationships])
    .ages(18.0, 40.0),
    node_conjunction!(
        "arishta.surya_grahan",
        "Surya Grahan Yoga",
        SURYA,
        &[LifeArea::Health, LifeArea::Status],
        "Sun eclipsed by a node ({planets})"
    ),
    node_conjunction!(
        "arishta.chandra_grahan",
        "Chandra Grahan Yoga",
        CHANDRA,
        &[LifeArea::Health, LifeArea::Family],
        "Moon eclipsed by a node ({planets})"
    ),
    node_conjunction!(
        "arishta.guru_chandala",
        "Guru Chandala Yoga",
        GURU,
        &[LifeArea::Learning, LifeArea::Spirituality],
        "Jupiter joined by a node ({planets})"
    ),
    node_conjunction!(
        "arishta.angarak",
        "Angarak Yoga",
        MANGAL,
        &[LifeArea::Courage, LifeArea::Health],
        "Mars joined by a node ({planets})"
    ),
    YogaRule::new(
        "arishta.shrapit",
        "Shrapit Yoga",
        BphsCategory::NonClassical,
        Pattern::Single {
            when: Predicate::Conjunct { a: SHANI, b: RAHU },
            formation: &[FormationPart::Target(SHANI), FormationPart::Target(RAHU)],
            key: &[],
        },
        "Saturn and Rahu together in {Saturn}",
    )
    .family(PatternFamily::Arishta)
    .impact(Impact::Negative)
    .areas(&[LifeArea::Fortune]),
    YogaRule::new(
        "arishta.vish",
        "Vish Yoga",
        BphsCategory::NonClassical,
        Pattern::Single {
            when: Predicate::Conjunct {
                a: SHANI,
                b: CHANDRA,
            },
            formation: &[FormationPart::Target(SHANI), FormationPart::Target(CHANDRA)],
            key: &[],
        },
        "Saturn and the Moon together in {Moon}",
    )
    .family(PatternFamily::Arishta)
    .impact(Impact::Negative)
    .areas(&[LifeArea::Health, LifeArea::Family]),
];
