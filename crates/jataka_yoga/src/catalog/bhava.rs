//! Bhava lord placements (BPHS Ch.24): one entry per house lord.

use crate::rule::{Pattern, YogaRule};
use crate::types::{BphsCategory, LifeArea};

pub(super) const RULES: &[YogaRule] = &[YogaRule::new(
    "bhava.lord_placement",
    "Bhava Lord Placement",
    BphsCategory::Standard,
    Pattern::PerHouseLord,
    "Lord of the {lord_of} house ({planets}) placed in the {placed_in} house",
)
.reference("BPHS Ch.24")
.named_per_instance("Lord of the {lord_of} in the {placed_in}")
.enumeration()
.areas(&[LifeArea::Fortune])];
