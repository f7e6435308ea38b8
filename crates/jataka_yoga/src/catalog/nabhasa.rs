//! The 32 Nabhasa yogas (BPHS Ch.35): shapes traced by the seven planets.
//!
//! Ashraya (3) and Dala (2) look at sign modality and kendra occupancy,
//! Akriti (20) at the houses the planets fill, Sankhya (7) at how many signs
//! they spread over. Each is reported on its own; no precedence between
//! groups is applied.

use jataka_base::{APOKLIMA, KENDRA, PANAPHARA, RashiModality};

use super::{ALL_HOUSES, LAGNA};
use crate::predicate::{GrahaSet, Predicate};
use crate::rule::{FormationPart, Pattern, YogaRule};
use crate::types::{BphsCategory, LifeArea, PatternFamily, Strength};

macro_rules! nabhasa {
    ($id:literal, $name:literal, $when:expr, $desc:expr) => {
        nabhasa!($id, $name, $when, $desc, &[])
    };
    ($id:literal, $name:literal, $when:expr, $desc:expr, $areas:expr) => {
        YogaRule::new(
            $id,
            $name,
            BphsCategory::MinorSubtle,
            Pattern::Single {
                when: $when,
                formation: &[FormationPart::Occupants {
                    set: GrahaSet::Sapta,
                    from: LAGNA,
                    houses: &ALL_HOUSES,
                }],
                key: &[],
            },
            $desc,
        )
        .family(PatternFamily::Nabhasa)
        .reference("BPHS Ch.35")
        .fixed(Strength::Medium)
        .areas($areas)
    };
}

macro_rules! fills {
    ($($h:literal),+) => {
        Predicate::Fills {
            set: GrahaSet::Sapta,
            from: LAGNA,
            houses: &[$($h),+],
        }
    };
}

macro_rules! sankhya {
    ($id:literal, $name:literal, $count:literal) => {
        nabhasa!(
            $id,
            $name,
            Predicate::SignCount {
                set: GrahaSet::Sapta,
                count: $count,
            },
            concat!("The seven planets occupy exactly ", stringify!($count), " signs")
        )
    };
}

pub(super) const RULES: &[YogaRule] = &[
    // Ashraya
    nabhasa!(
        "nabhasa.rajju",
        "Rajju Yoga",
        Predicate::AllInModality {
            set: GrahaSet::Sapta,
            modality: RashiModality::Movable,
        },
        "All planets in movable signs",
        &[LifeArea::Career]
    ),
    nabhasa!(
        "nabhasa.musala",
        "Musala Yoga",
        Predicate::AllInModality {
            set: GrahaSet::Sapta,
            modality: RashiModality::Fixed,
        },
        "All planets in fixed signs",
        &[LifeArea::Status, LifeArea::Wealth]
    ),
    nabhasa!(
        "nabhasa.nala",
        "Nala Yoga",
        Predicate::AllInModality {
            set: GrahaSet::Sapta,
            modality: RashiModality::Dual,
        },
        "All planets in dual signs",
        &[LifeArea::Wealth]
    ),
    // Dala
    nabhasa!(
        "nabhasa.mala",
        "Mala Yoga",
        Predicate::Occupies {
            set: GrahaSet::Shubha,
            from: LAGNA,
            houses: &KENDRA,
            min: 3,
        },
        "Natural benefics occupy three kendras",
        &[LifeArea::Fortune]
    ),
    nabhasa!(
        "nabhasa.sarpa",
        "Sarpa Yoga",
        Predicate::Occupies {
            set: GrahaSet::Papa,
            from: LAGNA,
            houses: &KENDRA,
            min: 3,
        },
        "Natural malefics occupy three kendras",
        &[LifeArea::Health]
    ),
    // Akriti
    nabhasa!(
        "nabhasa.gada",
        "Gada Yoga",
        Predicate::Or(&[fills!(1, 4), fills!(4, 7), fills!(7, 10), fills!(10, 1)]),
        "All planets in two adjacent kendras"
    ),
    nabhasa!(
        "nabhasa.sakata",
        "Sakata (Akriti) Yoga",
        fills!(1, 7),
        "All planets in the 1st and 7th"
    ),
    nabhasa!(
        "nabhasa.vihaga",
        "Vihaga Yoga",
        fills!(4, 10),
        "All planets in the 4th and 10th"
    ),
    nabhasa!(
        "nabhasa.shringataka",
        "Shringataka Yoga",
        fills!(1, 5, 9),
        "All planets in the trikonas"
    ),
    nabhasa!(
        "nabhasa.hala",
        "Hala Yoga",
        Predicate::Or(&[fills!(2, 6, 10), fills!(3, 7, 11), fills!(4, 8, 12)]),
        "All planets in a trine of houses other than the ascendant's"
    ),
    nabhasa!(
        "nabhasa.vajra",
        "Vajra Yoga",
        Predicate::And(&[
            Predicate::Fills {
                set: GrahaSet::Shubha,
                from: LAGNA,
                houses: &[1, 7],
            },
            Predicate::Fills {
                set: GrahaSet::Papa,
                from: LAGNA,
                houses: &[4, 10],
            },
        ]),
        "Benefics in the 1st and 7th, malefics in the 4th and 10th"
    ),
    nabhasa!(
        "nabhasa.yava",
        "Yava Yoga",
        Predicate::And(&[
            Predicate::Fills {
                set: GrahaSet::Papa,
                from: LAGNA,
                houses: &[1, 7],
            },
            Predicate::Fills {
                set: GrahaSet::Shubha,
                from: LAGNA,
                houses: &[4, 10],
            },
        ]),
        "Malefics in the 1st and 7th, benefics in the 4th and 10th"
    ),
    nabhasa!(
        "nabhasa.kamala",
        "Kamala Yoga",
        Predicate::Fills {
            set: GrahaSet::Sapta,
            from: LAGNA,
            houses: &KENDRA,
        },
        "All planets spread over the four kendras",
        &[LifeArea::Reputation]
    ),
    nabhasa!(
        "nabhasa.vapi",
        "Vapi Yoga",
        Predicate::Or(&[
            Predicate::AllIn {
                set: GrahaSet::Sapta,
                from: LAGNA,
                houses: &PANAPHARA,
            },
            Predicate::AllIn {
                set: GrahaSet::Sapta,
                from: LAGNA,
                houses: &APOKLIMA,
            },
        ]),
        "All planets in panapharas or in apoklimas",
        &[LifeArea::Wealth]
    ),
    nabhasa!(
        "nabhasa.yupa",
        "Yupa Yoga",
        fills!(1, 2, 3, 4),
        "All planets in the 1st to 4th"
    ),
    nabhasa!(
        "nabhasa.shara",
        "Shara Yoga",
        fills!(4, 5, 6, 7),
        "All planets in the 4th to 7th"
    ),
    nabhasa!(
        "nabhasa.shakti",
        "Shakti Yoga",
        fills!(7, 8, 9, 10),
        "All planets in the 7th to 10th"
    ),
    nabhasa!(
        "nabhasa.danda",
        "Danda Yoga",
        fills!(10, 11, 12, 1),
        "All planets in the 10th to 1st"
    ),
    nabhasa!(
        "nabhasa.nauka",
        "Nauka Yoga",
        fills!(1, 2, 3, 4, 5, 6, 7),
        "All planets in the seven houses from the 1st"
    ),
    nabhasa!(
        "nabhasa.koota",
        "Koota Yoga",
        fills!(4, 5, 6, 7, 8, 9, 10),
        "All planets in the seven houses from the 4th"
    ),
    nabhasa!(
        "nabhasa.chhatra",
        "Chhatra Yoga",
        fills!(7, 8, 9, 10, 11, 12, 1),
        "All planets in the seven houses from the 7th"
    ),
    nabhasa!(
        "nabhasa.chapa",
        "Chapa Yoga",
        fills!(10, 11, 12, 1, 2, 3, 4),
        "All planets in the seven houses from the 10th"
    ),
    nabhasa!(
        "nabhasa.ardha_chandra",
        "Ardha Chandra Yoga",
        Predicate::Or(&[
            fills!(2, 3, 4, 5, 6, 7, 8),
            fills!(3, 4, 5, 6, 7, 8, 9),
            fills!(5, 6, 7, 8, 9, 10, 11),
            fills!(6, 7, 8, 9, 10, 11, 12),
            fills!(8, 9, 10, 11, 12, 1, 2),
            fills!(9, 10, 11, 12, 1, 2, 3),
            fills!(11, 12, 1, 2, 3, 4, 5),
            fills!(12, 1, 2, 3, 4, 5, 6),
        ]),
        "All planets in seven houses starting outside a kendra"
    ),
    nabhasa!(
        "nabhasa.chakra",
        "Chakra Yoga",
        fills!(1, 3, 5, 7, 9, 11),
        "All planets in the six odd houses",
        &[LifeArea::Status]
    ),
    nabhasa!(
        "nabhasa.samudra",
        "Samudra Yoga",
        fills!(2, 4, 6, 8, 10, 12),
        "All planets in the six even houses",
        &[LifeArea::Wealth]
    ),
    // Sankhya
    sankhya!("nabhasa.vallaki", "Vallaki Yoga", 7),
    sankhya!("nabhasa.daama", "Daama Yoga", 6),
    sankhya!("nabhasa.pasha", "Pasha Yoga", 5),
    sankhya!("nabhasa.kedara", "Kedara Yoga", 4),
    sankhya!("nabhasa.shoola", "Shoola Yoga", 3),
    sankhya!("nabhasa.yuga", "Yuga Yoga", 2),
    sankhya!("nabhasa.gola", "Gola Yoga", 1),
];
