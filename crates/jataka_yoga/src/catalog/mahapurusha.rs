//! Pancha Mahapurusha yogas: a tara graha in its own or exaltation sign in a
//! kendra from the ascendant (BPHS Ch.75).

use jataka_base::KENDRA;

use super::{BUDDH, GURU, LAGNA, MANGAL, SHANI, SHUKRA};
use crate::predicate::{DignityTest, Predicate};
use crate::rule::{CancelCondition, FormationPart, Pattern, YogaRule};
use crate::types::{BphsCategory, LifeArea, PatternFamily, StrengthHint};

macro_rules! mahapurusha {
    ($id:literal, $name:literal, $graha:expr, $areas:expr, $desc:literal) => {
        YogaRule::new(
            $id,
            $name,
            BphsCategory::MajorPositive,
            Pattern::Single {
                when: Predicate::And(&[
                    Predicate::Placed {
                        target: $graha,
                        from: LAGNA,
                        houses: &KENDRA,
                    },
                    Predicate::Dignity {
                        target: $graha,
                        test: DignityTest::ExaltedOrOwn,
                    },
                ]),
                formation: &[FormationPart::Target($graha)],
                key: &[$graha],
            },
            $desc,
        )
        .family(PatternFamily::Mahapurusha)
        .reference("BPHS Ch.75")
        .strength(StrengthHint::KeyPlanets)
        .cancelled_by(&[CancelCondition {
            when: Predicate::Combust($graha),
            reason: "ruling planet is combust",
        }])
        .areas($areas)
    };
}

pub(super) const RULES: &[YogaRule] = &[
    mahapurusha!(
        "mahapurusha.ruchaka",
        "Ruchaka Yoga",
        MANGAL,
        &[LifeArea::Courage, LifeArea::Status],
        "{planets} in own or exaltation sign in a kendra ({Mars})"
    ),
    mahapurusha!(
        "mahapurusha.bhadra",
        "Bhadra Yoga",
        BUDDH,
        &[LifeArea::Intellect, LifeArea::Learning],
        "{planets} in own or exaltation sign in a kendra ({Mercury})"
    ),
    mahapurusha!(
        "mahapurusha.hamsa",
        "Hamsa Yoga",
        GURU,
        &[LifeArea::Spirituality, LifeArea::Reputation],
        "{planets} in own or exaltation sign in a kendra ({Jupiter})"
    ),
    mahapurusha!(
        "mahapurusha.malavya",
        "Malavya Yoga",
        SHUKRA,
        &[LifeArea::Relationships, LifeArea::Wealth],
        "{planets} in own or exaltation sign in a kendra ({Venus})"
    ),
    mahapurusha!(
        "mahapurusha.sasa",
        "Sasa Yoga",
        SHANI,
        &[LifeArea::Status, LifeArea::Career],
        "{planets} in own or exaltation sign in a kendra ({Saturn})"
    ),
];
