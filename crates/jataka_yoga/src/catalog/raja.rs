//! Raja yogas: kendra-trikona lord links counted from the ascendant, the
//! Moon and the 10th lord, Viparita Raja and Neecha Bhanga.

use jataka_base::{DUSTHANA, KENDRA, SAPTA_GRAHAS, TRIKONA};

use super::LAGNA;
use crate::predicate::{DignityTest, MOON, Predicate, Reference, Target};
use crate::rule::{
    ANY_RELATION, CancelCondition, FormationPart, GrahaCondition, LordRelation, Pattern, YogaRule,
};
use crate::types::{BphsCategory, Impact, LifeArea, PatternFamily, StrengthHint};

macro_rules! viparita {
    ($id:literal, $name:literal, $house:literal, $desc:literal) => {
        YogaRule::new(
            $id,
            $name,
            BphsCategory::Standard,
            Pattern::Single {
                when: Predicate::Placed {
                    target: Target::LordOf($house),
                    from: LAGNA,
                    houses: &DUSTHANA,
                },
                formation: &[FormationPart::Target(Target::LordOf($house))],
                key: &[],
            },
            $desc,
        )
        .family(PatternFamily::Viparita)
        .reference("Phaladeepika Ch.6")
        .impact(Impact::Mixed)
        .areas(&[LifeArea::Status, LifeArea::Health])
    };
}

/// Conditions under which one linked pair of lords fails to deliver.
const LINKED_LORD_AFFLICTED: &[CancelCondition] = &[
    CancelCondition {
        when: Predicate::AnyInvolved(&Predicate::Dignity {
            target: Target::Each,
            test: DignityTest::Debilitated,
        }),
        reason: "a linked lord is debilitated",
    },
    CancelCondition {
        when: Predicate::AnyInvolved(&Predicate::Combust(Target::Each)),
        reason: "a linked lord is combust",
    },
];

pub(super) const RULES: &[YogaRule] = &[
    YogaRule::new(
        "raja.kendra_trikona",
        "Raja Yoga",
        BphsCategory::MajorPositive,
        Pattern::LordPairs {
            from: LAGNA,
            first: &KENDRA,
            second: &TRIKONA,
            relations: ANY_RELATION,
        },
        "Lords of the {houses} houses ({planets}) linked by {relation}",
    )
    .family(PatternFamily::Raja)
    .reference("BPHS Ch.39")
    .cancelled_by(LINKED_LORD_AFFLICTED)
    .areas(&[LifeArea::Status, LifeArea::Career]),
    YogaRule::new(
        "raja.from_moon",
        "Raja Yoga from the Moon",
        BphsCategory::Standard,
        Pattern::LordPairs {
            from: MOON,
            first: &KENDRA,
            second: &TRIKONA,
            relations: ANY_RELATION,
        },
        "Lords of the {houses} houses from the Moon ({planets}) linked by {relation}",
    )
    .family(PatternFamily::Raja)
    .reference("BPHS Ch.39")
    .cancelled_by(LINKED_LORD_AFFLICTED)
    .areas(&[LifeArea::Status, LifeArea::Reputation]),
    YogaRule::new(
        "raja.from_tenth_lord",
        "Raja Yoga from the 10th Lord",
        BphsCategory::Standard,
        Pattern::LordPairs {
            from: Reference::Of(Target::LordOf(10)),
            first: &KENDRA,
            second: &TRIKONA,
            relations: ANY_RELATION,
        },
        "Lords of the {houses} houses from the 10th lord ({planets}) linked by {relation}",
    )
    .family(PatternFamily::Raja)
    .reference("BPHS Ch.39")
    .cancelled_by(LINKED_LORD_AFFLICTED)
    .areas(&[LifeArea::Career, LifeArea::Status]),
    YogaRule::new(
        "raja.dharma_karmadhipati",
        "Dharma-Karmadhipati Yoga",
        BphsCategory::MajorPositive,
        Pattern::LordPairs {
            from: LAGNA,
            first: &[9],
            second: &[10],
            relations: ANY_RELATION,
        },
        "Lords of the 9th and 10th ({planets}) linked by {relation}",
    )
    .family(PatternFamily::Raja)
    .reference("BPHS Ch.39")
    .cancelled_by(LINKED_LORD_AFFLICTED)
    .areas(&[LifeArea::Career, LifeArea::Fortune]),
    viparita!(
        "viparita.harsha",
        "Harsha Yoga",
        6,
        "Lord of the 6th ({planets}) in a dusthana"
    ),
    viparita!(
        "viparita.sarala",
        "Sarala Yoga",
        8,
        "Lord of the 8th ({planets}) in a dusthana"
    ),
    viparita!(
        "viparita.vimala",
        "Vimala Yoga",
        12,
        "Lord of the 12th ({planets}) in a dusthana"
    ),
    YogaRule::new(
        "viparita.dusthana_lords",
        "Viparita Raja Yoga",
        BphsCategory::Standard,
        Pattern::LordPairs {
            from: LAGNA,
            first: &[6, 8],
            second: &[8, 12],
            relations: &[LordRelation::Exchange, LordRelation::Conjunct],
        },
        "Lords of the {houses} houses ({planets}) linked by {relation}",
    )
    .family(PatternFamily::Viparita)
    .reference("Phaladeepika Ch.6")
    .impact(Impact::Mixed)
    .areas(&[LifeArea::Status, LifeArea::Health]),
    YogaRule::new(
        "raja.neecha_bhanga",
        "Neecha Bhanga Raja Yoga",
        BphsCategory::Standard,
        Pattern::PerGraha {
            grahas: &SAPTA_GRAHAS,
            condition: GrahaCondition::NeechaBhanga,
        },
        "Debilitation of {instance} cancelled: {conditions}",
    )
    .family(PatternFamily::NeechaBhanga)
    .reference("Phaladeepika Ch.7")
    .strength(StrengthHint::KeyPlanets)
    .areas(&[LifeArea::Status, LifeArea::Fortune]),
];
