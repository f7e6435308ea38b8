//! Wealth and learning yogas, including the lagna-specific Dhana yogas of
//! BPHS Ch.41.

use super::{BUDDH, CHANDRA, GURU, KENDRA_TRIKONA, LAGNA, MANGAL, SHANI, SHUKRA, SURYA};
use crate::predicate::{DignityTest, Predicate, Target};
use crate::rule::{ANY_RELATION, FormationPart, Pattern, YogaRule};
use crate::types::{BphsCategory, LifeArea, PatternFamily, StrengthHint};

/// Houses from the ascendant in which Saraswati's planets must sit.
const SARASWATI_HOUSES: [u8; 7] = [1, 2, 4, 5, 7, 9, 10];

/// A planet in the ascendant in its own sign, joined or aspected by each
/// helper.
macro_rules! lagna_dhana {
    ($id:literal, $name:literal, $lord:expr, $signs:expr, [$($helper:expr),+], $desc:literal) => {
        YogaRule::new(
            $id,
            $name,
            BphsCategory::Standard,
            Pattern::Single {
                when: Predicate::And(&[
                    Predicate::AscendantIn(&$signs),
                    Predicate::Placed {
                        target: $lord,
                        from: LAGNA,
                        houses: &[1],
                    },
                    $(Predicate::Or(&[
                        Predicate::Conjunct { a: $lord, b: $helper },
                        Predicate::Aspects { by: $helper, on: $lord },
                    ]),)+
                ]),
                formation: &[FormationPart::Target($lord), $(FormationPart::Target($helper),)+],
                key: &[$lord],
            },
            $desc,
        )
        .family(PatternFamily::Dhana)
        .reference("BPHS Ch.41")
        .strength(StrengthHint::KeyPlanets)
        .areas(&[LifeArea::Wealth])
    };
}

/// A planet in the 5th in its own sign with every helper in the 11th.
macro_rules! panchama_dhana {
    ($id:literal, $name:literal, $lord:expr, $signs:expr, [$($helper:expr),+], $desc:literal) => {
        YogaRule::new(
            $id,
            $name,
            BphsCategory::Standard,
            Pattern::Single {
                when: Predicate::And(&[
                    Predicate::InSigns {
                        target: $lord,
                        signs: &$signs,
                    },
                    Predicate::Placed {
                        target: $lord,
                        from: LAGNA,
                        houses: &[5],
                    },
                    $(Predicate::Placed {
                        target: $helper,
                        from: LAGNA,
                        houses: &[11],
                    },)+
                ]),
                formation: &[FormationPart::Target($lord), $(FormationPart::Target($helper),)+],
                key: &[$lord],
            },
            $desc,
        )
        .family(PatternFamily::Dhana)
        .reference("BPHS Ch.41")
        .strength(StrengthHint::KeyPlanets)
        .areas(&[LifeArea::Wealth, LifeArea::Children])
    };
}

pub(super) const RULES: &[YogaRule] = &[
    YogaRule::new(
        "dhana.lord_link",
        "Dhana Yoga",
        BphsCategory::Standard,
        Pattern::LordPairs {
            from: LAGNA,
            first: &[2, 11],
            second: &[1, 2, 5, 9, 11],
            relations: ANY_RELATION,
        },
        "Wealth lords of the {houses} houses ({planets}) linked by {relation}",
    )
    .family(PatternFamily::Dhana)
    .reference("BPHS Ch.41")
    .areas(&[LifeArea::Wealth]),
    YogaRule::new(
        "dhana.lakshmi",
        "Lakshmi Yoga",
        BphsCategory::MajorPositive,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Placed {
                    target: Target::LordOf(9),
                    from: LAGNA,
                    houses: &KENDRA_TRIKONA,
                },
                Predicate::Dignity {
                    target: Target::LordOf(9),
                    test: DignityTest::ExaltedOrOwn,
                },
                Predicate::Dignity {
                    target: Target::LordOf(1),
                    test: DignityTest::NotDebilitated,
                },
            ]),
            formation: &[
                FormationPart::Target(Target::LordOf(9)),
                FormationPart::Target(Target::LordOf(1)),
            ],
            key: &[Target::LordOf(9)],
        },
        "Lord of the 9th ({planets}) dignified in a kendra or trikona",
    )
    .family(PatternFamily::Dhana)
    .reference("Phaladeepika Ch.6")
    .strength(StrengthHint::KeyPlanets)
    .simplified_as("ascendant lord strength reduced to not being debilitated")
    .areas(&[LifeArea::Wealth, LifeArea::Fortune]),
    YogaRule::new(
        "dhana.saraswati",
        "Saraswati Yoga",
        BphsCategory::MajorPositive,
        Pattern::Single {
            when: Predicate::And(&[
                Predicate::Placed {
                    target: BUDDH,
                    from: LAGNA,
                    houses: &SARASWATI_HOUSES,
                },
                Predicate::Placed {
                    target: GURU,
                    from: LAGNA,
                    houses: &SARASWATI_HOUSES,
                },
                Predicate::Placed {
                    target: SHUKRA,
                    from: LAGNA,
                    houses: &SARASWATI_HOUSES,
                },
                Predicate::Dignity {
                    target: GURU,
                    test: DignityTest::StrongSign,
                },
            ]),
            formation: &[
                FormationPart::Target(BUDDH),
                FormationPart::Target(GURU),
                FormationPart::Target(SHUKRA),
            ],
            key: &[],
        },
        "Mercury, Jupiter and Venus in kendras, trikonas or the 2nd with Jupiter strong ({Jupiter})",
    )
    .reference("Phaladeepika Ch.6")
    .areas(&[LifeArea::Learning, LifeArea::Intellect])
    .ages(6.0, 35.0),
    lagna_dhana!(
        "dhana.surya_lagna",
        "Surya Lagna Dhana Yoga",
        SURYA,
        [5],
        [MANGAL, GURU],
        "Sun in a Leo ascendant with Mars and Jupiter ({planets})"
    ),
    lagna_dhana!(
        "dhana.chandra_lagna",
        "Chandra Lagna Dhana Yoga",
        CHANDRA,
        [4],
        [BUDDH, GURU],
        "Moon in a Cancer ascendant with Mercury and Jupiter ({planets})"
    ),
    lagna_dhana!(
        "dhana.mangal_lagna",
        "Mangal Lagna Dhana Yoga",
        MANGAL,
        [1, 8],
        [BUDDH, SHUKRA, SHANI],
        "Mars in its own ascendant with Mercury, Venus and Saturn ({planets})"
    ),
    lagna_dhana!(
        "dhana.buddh_lagna",
        "Buddh Lagna Dhana Yoga",
        BUDDH,
        [3, 6],
        [SHANI, SHUKRA],
        "Mercury in its own ascendant with Saturn and Venus ({planets})"
    ),
    lagna_dhana!(
        "dhana.guru_lagna",
        "Guru Lagna Dhana Yoga",
        GURU,
        [9, 12],
        [BUDDH, MANGAL],
        "Jupiter in its own ascendant with Mercury and Mars ({planets})"
    ),
    lagna_dhana!(
        "dhana.shukra_lagna",
        "Shukra Lagna Dhana Yoga",
        SHUKRA,
        [2, 7],
        [SHANI, BUDDH],
        "Venus in its own ascendant with Saturn and Mercury ({planets})"
    ),
    lagna_dhana!(
        "dhana.shani_lagna",
        "Shani Lagna Dhana Yoga",
        SHANI,
        [10, 11],
        [MANGAL, GURU],
        "Saturn in its own ascendant with Mars and Jupiter ({planets})"
    ),
    panchama_dhana!(
        "dhana.surya_panchama",
        "Surya Panchama Dhana Yoga",
        SURYA,
        [5],
        [SHANI, CHANDRA, GURU],
        "Sun in Leo in the 5th; Saturn, Moon and Jupiter in the 11th ({planets})"
    ),
    panchama_dhana!(
        "dhana.chandra_panchama",
        "Chandra Panchama Dhana Yoga",
        CHANDRA,
        [4],
        [SHANI],
        "Moon in Cancer in the 5th; Saturn in the 11th ({planets})"
    ),
    panchama_dhana!(
        "dhana.mangal_panchama",
        "Mangal Panchama Dhana Yoga",
        MANGAL,
        [1, 8],
        [SHUKRA],
        "Mars in its own sign in the 5th; Venus in the 11th ({planets})"
    ),
    panchama_dhana!(
        "dhana.buddh_panchama",
        "Buddh Panchama Dhana Yoga",
        BUDDH,
        [3, 6],
        [CHANDRA, MANGAL, GURU],
        "Mercury in its own sign in the 5th; Moon, Mars and Jupiter in the 11th ({planets})"
    ),
    panchama_dhana!(
        "dhana.guru_panchama",
        "Guru Panchama Dhana Yoga",
        GURU,
        [9, 12],
        [BUDDH],
        "Jupiter in its own sign in the 5th; Mercury in the 11th ({planets})"
    ),
    panchama_dhana!(
        "dhana.shukra_panchama",
        "Shukra Panchama Dhana Yoga",
        SHUKRA,
        [2, 7],
        [MANGAL],
        "Venus in its own sign in the 5th; Mars in the 11th ({planets})"
    ),
    panchama_dhana!(
        "dhana.shani_panchama",
        "Shani Panchama Dhana Yoga",
        SHANI,
        [10, 11],
        [SURYA, CHANDRA],
        "Saturn in its own sign in the 5th; Sun and Moon in the 11th ({planets})"
    ),
];
