//! Named combinations from the general yoga chapters (BPHS Ch.36 and
//! Phaladeepika Ch.6) that belong to no larger family, plus Vargottama.

use jataka_base::{KENDRA, SAPTA_GRAHAS};

use super::{GURU, KENDRA_TRIKONA, LAGNA, SHUKRA};
use crate::predicate::{DignityTest, GrahaSet, Predicate, Reference, Target};
use crate::rule::{FormationPart, GrahaCondition, Pattern, YogaRule};
use crate::types::{BphsCategory, Impact, LifeArea, PatternFamily, Strength, StrengthHint};

const LAGNA_LORD_NOT_DEBILITATED: Predicate = Predicate::Dignity {
    target: Target::LordOf(1),
    test: DignityTest::NotDebilitated,
};

pub(super) const RULES: &[YogaRule] = &[
    YogaRule::new(
        "misc.parvata",
        "Parvata Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Occupies {
                    set: GrahaSet::Shubha,
                    from: LAGNA,
                    houses: &KENDRA,
                    min: 1,
                },
                Predicate::Not(&Predicate::Occupies {
                    set: GrahaSet::PapaWithNodes,
                    from: LAGNA,
                    houses: &KENDRA,
                    min: 1,
                }),
                Predicate::Not(&Predicate::Occupies {
                    set: GrahaSet::PapaWithNodes,
                    from: LAGNA,
                    houses: &[6, 8],
                    min: 1,
                }),
            ]),
            formation: &[FormationPart::Occupants {
                set: GrahaSet::Shubha,
                from: LAGNA,
                houses: &KENDRA,
            }],
            key: &[],
        },
        "Benefics in kendras ({planets}) with the 6th and 8th free of malefics",
    )
    .reference("BPHS Ch.36")
    .simplified_as("benefic occupancy only; the lord placement variant is not checked")
    .areas(&[LifeArea::Reputation, LifeArea::Fortune]),
    YogaRule::new(
        "misc.kahala",
        "Kahala Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Placed {
                    target: Target::LordOf(4),
                    from: Reference::Of(Target::LordOf(9)),
                    houses: &KENDRA,
                },
                LAGNA_LORD_NOT_DEBILITATED,
            ]),
            formation: &[
                FormationPart::Target(Target::LordOf(4)),
                FormationPart::Target(Target::LordOf(9)),
            ],
            key: &[],
        },
        "Lords of the 4th and 9th in mutual kendras ({planets})",
    )
    .reference("BPHS Ch.36")
    .simplified_as("ascendant lord strength reduced to not being debilitated")
    .areas(&[LifeArea::Courage, LifeArea::Status]),
    YogaRule::new(
        "misc.chamara",
        "Chamara Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Dignity {
                    target: Target::LordOf(1),
                    test: DignityTest::Exalted,
                },
                Predicate::Placed {
                    target: Target::LordOf(1),
                    from: LAGNA,
                    houses: &KENDRA,
                },
                Predicate::Aspects {
                    by: GURU,
                    on: Target::LordOf(1),
                },
            ]),
            formation: &[
                FormationPart::Target(Target::LordOf(1)),
                FormationPart::Target(GURU),
            ],
            key: &[],
        },
        "Exalted ascendant lord in a kendra aspected by Jupiter ({planets})",
    )
    .reference("BPHS Ch.36")
    .areas(&[LifeArea::Reputation, LifeArea::Learning]),
    YogaRule::new(
        "misc.shankha",
        "Shankha Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Placed {
                    target: Target::LordOf(5),
                    from: Reference::Of(Target::LordOf(6)),
                    houses: &KENDRA,
                },
                LAGNA_LORD_NOT_DEBILITATED,
            ]),
            formation: &[
                FormationPart::Target(Target::LordOf(5)),
                FormationPart::Target(Target::LordOf(6)),
            ],
            key: &[],
        },
        "Lords of the 5th and 6th in mutual kendras ({planets})",
    )
    .reference("BPHS Ch.36")
    .simplified_as("ascendant lord strength reduced to not being debilitated")
    .areas(&[LifeArea::Children, LifeArea::Longevity]),
    YogaRule::new(
        "misc.bheri",
        "Bheri Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Placed {
                    target: SHUKRA,
                    from: LAGNA,
                    houses: &KENDRA,
                },
                Predicate::Placed {
                    target: GURU,
                    from: LAGNA,
                    houses: &KENDRA,
                },
                Predicate::Placed {
                    target: Target::LordOf(1),
                    from: LAGNA,
                    houses: &KENDRA,
                },
                Predicate::Dignity {
                    target: Target::LordOf(9),
                    test: DignityTest::StrongSign,
                },
            ]),
            formation: &[
                FormationPart::Target(SHUKRA),
                FormationPart::Target(GURU),
                FormationPart::Target(Target::LordOf(1)),
                FormationPart::Target(Target::LordOf(9)),
            ],
            key: &[],
        },
        "Venus, Jupiter and the ascendant lord in kendras with a strong 9th lord ({planets})",
    )
    .reference("BPHS Ch.36")
    .areas(&[LifeArea::Wealth, LifeArea::Family]),
    YogaRule::new(
        "misc.sreenatha",
        "Sreenatha Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Placed {
                    target: Target::LordOf(7),
                    from: LAGNA,
                    houses: &[10],
                },
                Predicate::Dignity {
                    target: Target::LordOf(7),
                    test: DignityTest::Exalted,
                },
                Predicate::Conjunct {
                    a: Target::LordOf(10),
                    b: Target::LordOf(9),
                },
            ]),
            formation: &[
                FormationPart::Target(Target::LordOf(7)),
                FormationPart::Target(Target::LordOf(10)),
                FormationPart::Target(Target::LordOf(9)),
            ],
            key: &[],
        },
        "Exalted 7th lord in the 10th with the 9th and 10th lords together ({planets})",
    )
    .reference("BPHS Ch.36")
    .areas(&[LifeArea::Wealth, LifeArea::Status]),
    YogaRule::new(
        "misc.khadga",
        "Khadga Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Exchange { a: 2, b: 9 },
                Predicate::Placed {
                    target: Target::LordOf(1),
                    from: LAGNA,
                    houses: &KENDRA_TRIKONA,
                },
            ]),
            formation: &[
                FormationPart::Target(Target::LordOf(2)),
                FormationPart::Target(Target::LordOf(9)),
                FormationPart::Target(Target::LordOf(1)),
            ],
            key: &[],
        },
        "Lords of the 2nd and 9th exchange signs with the ascendant lord well placed ({planets})",
    )
    .reference("BPHS Ch.36")
    .areas(&[LifeArea::Wealth, LifeArea::Fortune]),
    YogaRule::new(
        "misc.lagnadhi",
        "Lagnadhi Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Occupies {
                    set: GrahaSet::Shubha,
                    from: LAGNA,
                    houses: &[6, 7, 8],
                    min: 1,
                },
                Predicate::Not(&Predicate::Occupies {
                    set: GrahaSet::PapaWithNodes,
                    from: LAGNA,
                    houses: &[6, 7, 8],
                    min: 1,
                }),
            ]),
            formation: &[FormationPart::Occupants {
                set: GrahaSet::Shubha,
                from: LAGNA,
                houses: &[6, 7, 8],
            }],
            key: &[],
        },
        "Benefics alone in the 6th to 8th from the ascendant ({planets})",
    )
    .reference("Phaladeepika Ch.6")
    .areas(&[LifeArea::Status, LifeArea::Learning]),
    YogaRule::new(
        "misc.chatussagara",
        "Chatussagara Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::Occupies {
                set: GrahaSet::All,
                from: LAGNA,
                houses: &KENDRA,
                min: 4,
            },
            formation: &[FormationPart::Occupants {
                set: GrahaSet::All,
                from: LAGNA,
                houses: &KENDRA,
            }],
            key: &[],
        },
        "All four kendras occupied ({planets})",
    )
    .reference("BPHS Ch.36")
    .fixed(Strength::Medium)
    .areas(&[LifeArea::Reputation, LifeArea::Property]),
    YogaRule::new(
        "misc.shubha_kartari",
        "Shubha Kartari Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Occupies {
                    set: GrahaSet::Shubha,
                    from: LAGNA,
                    houses: &[2, 12],
                    min: 2,
                },
                Predicate::Not(&Predicate::Occupies {
                    set: GrahaSet::PapaWithNodes,
                    from: LAGNA,
                    houses: &[2, 12],
                    min: 1,
                }),
            ]),
            formation: &[FormationPart::Occupants {
                set: GrahaSet::Shubha,
                from: LAGNA,
                houses: &[2, 12],
            }],
            key: &[],
        },
        "Ascendant hemmed by benefics in the 2nd and 12th ({planets})",
    )
    .reference("Phaladeepika Ch.6")
    .areas(&[LifeArea::Health, LifeArea::Reputation]),
    YogaRule::new(
        "misc.papa_kartari",
        "Papa Kartari Yoga",
        BphsCategory::MinorSubtle,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Occupies {
                    set: GrahaSet::PapaWithNodes,
                    from: LAGNA,
                    houses: &[2, 12],
                    min: 2,
                },
                Predicate::Not(&Predicate::Occupies {
                    set: GrahaSet::Shubha,
                    from: LAGNA,
                    houses: &[2, 12],
                    min: 1,
                }),
            ]),
            formation: &[FormationPart::Occupants {
                set: GrahaSet::PapaWithNodes,
                from: LAGNA,
                houses: &[2, 12],
            }],
            key: &[],
        },
        "Ascendant hemmed by malefics in the 2nd and 12th ({planets})",
    )
    .reference("Phaladeepika Ch.6")
    .impact(Impact::Negative)
    .areas(&[LifeArea::Health]),
    YogaRule::new(
        "misc.kalpadruma",
        "Kalpadruma Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Placed {
                    target: Target::LordOf(1),
                    from: LAGNA,
                    houses: &KENDRA_TRIKONA,
                },
                Predicate::Placed {
                    target: Target::DispositorOfLord(1),
                    from: LAGNA,
                    houses: &KENDRA_TRIKONA,
                },
                Predicate::Dignity {
                    target: Target::DispositorOfLord(1),
                    test: DignityTest::StrongSign,
                },
            ]),
            formation: &[
                FormationPart::Target(Target::LordOf(1)),
                FormationPart::Target(Target::DispositorOfLord(1)),
            ],
            key: &[],
        },
        "Ascendant lord and its dispositor strong in kendras or trikonas ({planets})",
    )
    .reference("BPHS Ch.36")
    .simplified_as("navamsha dispositor chain is not traced")
    .areas(&[LifeArea::Wealth, LifeArea::Status]),
    YogaRule::new(
        "misc.vargottama",
        "Vargottama",
        BphsCategory::MinorSubtle,
        Pattern::PerGraha {
            grahas: &SAPTA_GRAHAS,
            condition: GrahaCondition::Vargottama,
        },
        "{instance} occupies the same sign in rashi and navamsha",
    )
    .family(PatternFamily::Vargottama)
    .reference("Saravali Ch.3")
    .strength(StrengthHint::KeyPlanets)
    .areas(&[LifeArea::Fortune]),
];
