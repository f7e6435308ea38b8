//! Report ordering and activation windows.

use std::cmp::Ordering;

use jataka_base::{Graha, TemporalPeriod};
use jataka_yoga::AgeRange;

use crate::report::YogaDetection;

/// Periods ruled by a formation planet that overlap `range`, in supplied
/// order. With no range every period of a formation planet qualifies.
pub fn activation_windows(
    planets: &[Graha],
    range: Option<AgeRange>,
    periods: Option<&[TemporalPeriod]>,
) -> Vec<TemporalPeriod> {
    let Some(periods) = periods else {
        return Vec::new();
    };
    periods
        .iter()
        .filter(|p| planets.contains(&p.lord))
        .filter(|p| range.is_none_or(|r| p.overlaps(r.min, r.max)))
        .copied()
        .collect()
}

fn report_order(a: &YogaDetection, b: &YogaDetection) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| b.strength.cmp(&a.strength))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.instance.cmp(&b.instance))
        .then_with(|| a.rule_id.cmp(b.rule_id))
}

/// Category in declaration order, then strength descending, then name.
pub fn sort_detections(detections: &mut [YogaDetection]) {
    detections.sort_by(report_order);
}
