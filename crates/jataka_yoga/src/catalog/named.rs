//! Named yogas of BPHS Ch.36 judged from lagna, luminaries and chains of
//! dispositors.
//!
//! Several of these are defined classically through navamsha lords or
//! shadbala. Where the chart record cannot carry that, the rashi dispositor
//! or sign dignity stands in and the rule says so through `simplified_as`.

use jataka_base::KENDRA;

use super::{
    CHANDRA, EVEN_SIGNS, FIXED_SIGNS, GURU, KENDRA_TRIKONA, LAGNA, MOVABLE_SIGNS, ODD_SIGNS,
    SHANI, SHUKRA, SURYA,
};
use crate::predicate::{DignityTest, GrahaSet, Predicate, Target};
use crate::rule::{FormationPart, Pattern, YogaRule};
use crate::types::{BphsCategory, LifeArea, StrengthHint};

/// Sun above the horizon, taken as a day birth.
const SUN_ABOVE_HORIZON: Predicate = Predicate::Placed {
    target: SURYA,
    from: LAGNA,
    houses: &[7, 8, 9, 10, 11, 12],
};

/// Lord of the sign held by the lagna lord's dispositor.
const PARIJATA_LORD: Target = Target::DispositorOf(&Target::DispositorOfLord(1));

/// Rashi stand-in for the navamsha lord of the 10th lord.
const GAURI_LORD: Target = Target::DispositorOfLord(10);

const EXALTED_WITH_NINTH_LORD: Predicate = Predicate::And(&[
    Predicate::Dignity {
        target: Target::Each,
        test: DignityTest::Exalted,
    },
    Predicate::Conjunct {
        a: Target::Each,
        b: Target::LordOf(9),
    },
]);

const EXALTED_IN_KENDRA_TRIKONA: Predicate = Predicate::And(&[
    Predicate::Dignity {
        target: Target::Each,
        test: DignityTest::Exalted,
    },
    Predicate::Placed {
        target: Target::Each,
        from: LAGNA,
        houses: &KENDRA_TRIKONA,
    },
]);

/// Exalted and joined with the 9th lord, for the dispositor of house `h`'s lord.
macro_rules! bharati_link {
    ($h:literal) => {
        Predicate::And(&[
            Predicate::Dignity {
                target: Target::DispositorOfLord($h),
                test: DignityTest::Exalted,
            },
            Predicate::Conjunct {
                a: Target::DispositorOfLord($h),
                b: Target::LordOf(9),
            },
        ])
    };
}

pub(super) const RULES: &[YogaRule] = &[
    YogaRule::new(
        "named.maha_bhagya",
        "Maha Bhagya Yoga",
        BphsCategory::MajorPositive,
        Pattern::Single {
            when: Predicate::Or(&[
                Predicate::And(&[
                    SUN_ABOVE_HORIZON,
                    Predicate::AscendantIn(&ODD_SIGNS),
                    Predicate::InSigns {
                        target: SURYA,
                        signs: &ODD_SIGNS,
                    },
                    Predicate::InSigns {
                        target: CHANDRA,
                        signs: &ODD_SIGNS,
                    },
                ]),
                Predicate::And(&[
                    Predicate::Not(&SUN_ABOVE_HORIZON),
                    Predicate::AscendantIn(&EVEN_SIGNS),
                    Predicate::InSigns {
                        target: SURYA,
                        signs: &EVEN_SIGNS,
                    },
                    Predicate::InSigns {
                        target: CHANDRA,
                        signs: &EVEN_SIGNS,
                    },
                ]),
            ]),
            formation: &[FormationPart::Target(SURYA), FormationPart::Target(CHANDRA)],
            key: &[],
        },
        "Ascendant, Sun and Moon all in odd signs by day or all in even signs by night (Sun: {Sun}; Moon: {Moon})",
    )
    .reference("BPHS Ch.36")
    .simplified_as("day or night read from the Sun's house; the male and female forms are not told apart")
    .areas(&[LifeArea::Fortune, LifeArea::Reputation]),
    YogaRule::new(
        "named.amsavatara",
        "Amsavatara Yoga",
        BphsCategory::MajorPositive,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::AscendantIn(&MOVABLE_SIGNS),
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
                Predicate::Dignity {
                    target: SHANI,
                    test: DignityTest::Exalted,
                },
            ]),
            formation: &[
                FormationPart::Target(SHUKRA),
                FormationPart::Target(GURU),
                FormationPart::Target(SHANI),
            ],
            key: &[],
        },
        "Movable ascendant, Venus and Jupiter in kendras, Saturn exalted ({planets})",
    )
    .reference("BPHS Ch.36")
    .areas(&[LifeArea::Reputation, LifeArea::Spirituality, LifeArea::Status]),
    YogaRule::new(
        "named.pushkala",
        "Pushkala Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Conjunct {
                    a: Target::LordOf(1),
                    b: Target::DispositorOf(&CHANDRA),
                },
                Predicate::Placed {
                    target: Target::LordOf(1),
                    from: LAGNA,
                    houses: &KENDRA,
                },
                Predicate::Occupies {
                    set: GrahaSet::Sapta,
                    from: LAGNA,
                    houses: &[1],
                    min: 1,
                },
            ]),
            formation: &[
                FormationPart::Target(Target::LordOf(1)),
                FormationPart::Target(Target::DispositorOf(&CHANDRA)),
            ],
            key: &[Target::LordOf(1)],
        },
        "Ascendant lord with the Moon's dispositor in a kendra, the ascendant occupied ({planets})",
    )
    .reference("BPHS Ch.36")
    .strength(StrengthHint::KeyPlanets)
    .simplified_as("the aspect on the ascendant and the strength of its occupant are not checked")
    .areas(&[LifeArea::Wealth, LifeArea::Reputation]),
    YogaRule::new(
        "named.kusuma",
        "Kusuma Yoga",
        BphsCategory::MajorPositive,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::AscendantIn(&FIXED_SIGNS),
                Predicate::Placed {
                    target: SHUKRA,
                    from: LAGNA,
                    houses: &KENDRA,
                },
                Predicate::Placed {
                    target: CHANDRA,
                    from: LAGNA,
                    houses: &[1, 5, 9],
                },
                Predicate::AnyOf {
                    set: GrahaSet::Shubha,
                    when: &Predicate::Conjunct {
                        a: Target::Each,
                        b: CHANDRA,
                    },
                },
                Predicate::Placed {
                    target: SHANI,
                    from: LAGNA,
                    houses: &[10],
                },
            ]),
            formation: &[
                FormationPart::Target(SHUKRA),
                FormationPart::Target(CHANDRA),
                FormationPart::Target(SHANI),
            ],
            key: &[],
        },
        "Fixed ascendant, Venus in a kendra, Moon in a trikona with a benefic, Saturn in the 10th ({planets})",
    )
    .reference("BPHS Ch.36")
    .areas(&[LifeArea::Status, LifeArea::Fortune]),
    YogaRule::new(
        "named.parijata",
        "Parijata Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Placed {
                    target: PARIJATA_LORD,
                    from: LAGNA,
                    houses: &KENDRA_TRIKONA,
                },
                Predicate::Dignity {
                    target: PARIJATA_LORD,
                    test: DignityTest::ExaltedOrOwn,
                },
            ]),
            formation: &[
                FormationPart::Target(Target::LordOf(1)),
                FormationPart::Target(PARIJATA_LORD),
            ],
            key: &[PARIJATA_LORD],
        },
        "Dispositor of the ascendant lord's dispositor dignified in a kendra or trikona ({planets})",
    )
    .reference("BPHS Ch.36")
    .strength(StrengthHint::KeyPlanets)
    .simplified_as("the navamsha dispositor alternative is not checked")
    .areas(&[LifeArea::Status, LifeArea::Fortune])
    .ages(30.0, 50.0),
    YogaRule::new(
        "named.gauri",
        "Gauri Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Placed {
                    target: GAURI_LORD,
                    from: LAGNA,
                    houses: &[10],
                },
                Predicate::Dignity {
                    target: GAURI_LORD,
                    test: DignityTest::Exalted,
                },
                Predicate::Conjunct {
                    a: GAURI_LORD,
                    b: Target::LordOf(1),
                },
            ]),
            formation: &[
                FormationPart::Target(Target::LordOf(10)),
                FormationPart::Target(GAURI_LORD),
                FormationPart::Target(Target::LordOf(1)),
            ],
            key: &[GAURI_LORD],
        },
        "Dispositor of the 10th lord exalted in the 10th with the ascendant lord ({planets})",
    )
    .reference("BPHS Ch.36")
    .strength(StrengthHint::KeyPlanets)
    .simplified_as("the rashi dispositor of the 10th lord stands in for its navamsha lord")
    .areas(&[LifeArea::Family, LifeArea::Reputation]),
    YogaRule::new(
        "named.bharati",
        "Bharati Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::Or(&[bharati_link!(2), bharati_link!(5), bharati_link!(11)]),
            formation: &[
                FormationPart::Target(Target::LordOf(9)),
                FormationPart::Matching {
                    set: GrahaSet::Sapta,
                    when: &EXALTED_WITH_NINTH_LORD,
                },
            ],
            key: &[],
        },
        "Dispositor of the 2nd, 5th or 11th lord exalted with the 9th lord ({planets})",
    )
    .reference("BPHS Ch.36")
    .simplified_as("rashi dispositors stand in for navamsha lords")
    .areas(&[LifeArea::Learning, LifeArea::Reputation]),
    YogaRule::new(
        "named.mridanga",
        "Mridanga Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::AnyOf {
                    set: GrahaSet::Sapta,
                    when: &EXALTED_IN_KENDRA_TRIKONA,
                },
                Predicate::Dignity {
                    target: Target::LordOf(1),
                    test: DignityTest::StrongSign,
                },
            ]),
            formation: &[
                FormationPart::Target(Target::LordOf(1)),
                FormationPart::Matching {
                    set: GrahaSet::Sapta,
                    when: &EXALTED_IN_KENDRA_TRIKONA,
                },
            ],
            key: &[Target::LordOf(1)],
        },
        "An exalted planet in a kendra or trikona with a strong ascendant lord ({planets})",
    )
    .reference("BPHS Ch.36")
    .strength(StrengthHint::KeyPlanets)
    .simplified_as("the navamsha lord of the exalted planet is not traced; ascendant lord strength is sign dignity")
    .areas(&[LifeArea::Status, LifeArea::Wealth]),
    YogaRule::new(
        "named.matsya",
        "Matsya Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Occupies {
                    set: GrahaSet::PapaWithNodes,
                    from: LAGNA,
                    houses: &[1],
                    min: 1,
                },
                Predicate::Occupies {
                    set: GrahaSet::PapaWithNodes,
                    from: LAGNA,
                    houses: &[9],
                    min: 1,
                },
                Predicate::Occupies {
                    set: GrahaSet::PapaWithNodes,
                    from: LAGNA,
                    houses: &[4],
                    min: 1,
                },
                Predicate::Occupies {
                    set: GrahaSet::PapaWithNodes,
                    from: LAGNA,
                    houses: &[8],
                    min: 1,
                },
                Predicate::Occupies {
                    set: GrahaSet::PapaWithNodes,
                    from: LAGNA,
                    houses: &[5],
                    min: 1,
                },
                Predicate::Occupies {
                    set: GrahaSet::Shubha,
                    from: LAGNA,
                    houses: &[5],
                    min: 1,
                },
            ]),
            formation: &[
                FormationPart::Occupants {
                    set: GrahaSet::PapaWithNodes,
                    from: LAGNA,
                    houses: &[1, 4, 5, 8, 9],
                },
                FormationPart::Occupants {
                    set: GrahaSet::Shubha,
                    from: LAGNA,
                    houses: &[5],
                },
            ],
            key: &[],
        },
        "Malefics in the 1st, 4th, 8th and 9th, benefics and malefics together in the 5th ({planets})",
    )
    .reference("BPHS Ch.36")
    .areas(&[LifeArea::Spirituality, LifeArea::Learning]),
    YogaRule::new(
        "named.kurma",
        "Kurma Yoga",
        BphsCategory::Standard,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::AllIn {
                    set: GrahaSet::Shubha,
                    from: LAGNA,
                    houses: &[5, 6, 7],
                },
                Predicate::AllOf {
                    set: GrahaSet::Shubha,
                    when: &Predicate::Dignity {
                        target: Target::Each,
                        test: DignityTest::StrongSign,
                    },
                },
                Predicate::AllIn {
                    set: GrahaSet::Papa,
                    from: LAGNA,
                    houses: &[1, 3, 11],
                },
                Predicate::AllOf {
                    set: GrahaSet::Papa,
                    when: &Predicate::Dignity {
                        target: Target::Each,
                        test: DignityTest::ExaltedOrOwn,
                    },
                },
            ]),
            formation: &[
                FormationPart::Occupants {
                    set: GrahaSet::Shubha,
                    from: LAGNA,
                    houses: &[5, 6, 7],
                },
                FormationPart::Occupants {
                    set: GrahaSet::Papa,
                    from: LAGNA,
                    houses: &[1, 3, 11],
                },
            ],
            key: &[],
        },
        "Dignified benefics in the 5th to 7th, dignified malefics in the 1st, 3rd and 11th ({planets})",
    )
    .reference("BPHS Ch.36")
    .simplified_as("every natural benefic and every natural malefic must take part")
    .areas(&[LifeArea::Reputation, LifeArea::Status]),
];
