//! Parivartana (sign exchange) yogas, graded by the houses exchanged.

use crate::rule::{ExchangeKind, Pattern, YogaRule};
use crate::types::{BphsCategory, Impact, LifeArea, PatternFamily};

pub(super) const RULES: &[YogaRule] = &[
    YogaRule::new(
        "parivartana.maha",
        "Maha Parivartana Yoga",
        BphsCategory::Standard,
        Pattern::Exchanges(ExchangeKind::Maha),
        "Lords of the {houses} houses ({planets}) exchange signs",
    )
    .family(PatternFamily::Parivartana)
    .reference("Phaladeepika Ch.6")
    .areas(&[LifeArea::Fortune, LifeArea::Status]),
    YogaRule::new(
        "parivartana.khala",
        "Khala Parivartana Yoga",
        BphsCategory::MinorSubtle,
        Pattern::Exchanges(ExchangeKind::Khala),
        "Lords of the {houses} houses ({planets}) exchange signs",
    )
    .family(PatternFamily::Parivartana)
    .reference("Phaladeepika Ch.6")
    .impact(Impact::Mixed)
    .areas(&[LifeArea::Courage]),
    YogaRule::new(
        "parivartana.dainya",
        "Dainya Parivartana Yoga",
        BphsCategory::MinorSubtle,
        Pattern::Exchanges(ExchangeKind::Dainya),
        "Lords of the {houses} houses ({planets}) exchange signs",
    )
    .family(PatternFamily::Parivartana)
    .reference("Phaladeepika Ch.6")
    .impact(Impact::Negative)
    .areas(&[LifeArea::Health, LifeArea::Wealth]),
];
