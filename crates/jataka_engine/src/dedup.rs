//! Folding of duplicate detections that name the same yoga.
//!
//! Names are normalized (lower case, whitespace and hyphens removed, a
//! trailing "yoga" dropped) and mapped through a table of classical spelling
//! variants. Detections sharing a normalized name form one group and one
//! representative survives per group, so instances of one combination
//! (several lord pairs forming the same Raja yoga, say) fold together.
//! Enumerations whose instances are distinct yogas carry distinct names.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::report::YogaDetection;

/// Spelling variants and synonyms, keyed by normalized form.
const ALIASES: &[(&str, &str)] = &[
    ("nipuna", "budhaditya"),
    ("budhadityanipuna", "budhaditya"),
    ("gajakesri", "gajakesari"),
    ("gajakeshari", "gajakesari"),
    ("shasha", "sasa"),
    ("shasa", "sasa"),
    ("sarasvati", "saraswati"),
    ("chandramangal", "chandramangala"),
    ("chandramangalya", "chandramangala"),
    ("laxmi", "lakshmi"),
    ("kemdrum", "kemadruma"),
    ("raj", "raja"),
    ("dhan", "dhana"),
    ("papkartari", "papakartari"),
    ("shubhkartari", "shubhakartari"),
    ("vipreetraj", "viparitaraja"),
    ("vipreetraja", "viparitaraja"),
    ("viparitraj", "viparitaraja"),
    ("neechabhangaraj", "neechabhangaraja"),
];

/// Canonical grouping key for a display name.
pub fn normalize_name(name: &str) -> String {
    let mut key: String = name
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect();
    if key.len() > "yoga".len() && key.ends_with("yoga") {
        key.truncate(key.len() - "yoga".len());
    }
    match ALIASES.iter().find(|(from, _)| *from == key) {
        Some((_, to)) => (*to).to_string(),
        None => key,
    }
}

/// Count of optional metadata present on a detection.
fn completeness(d: &YogaDetection) -> usize {
    usize::from(!d.cancellation_reasons.is_empty())
        + usize::from(d.reference.is_some())
        + usize::from(d.activation_age_range.is_some())
}

/// `Greater` when `a` is the better representative.
fn prefer(a: &YogaDetection, b: &YogaDetection) -> Ordering {
    a.strength
        .cmp(&b.strength)
        .then_with(|| completeness(a).cmp(&completeness(b)))
        .then_with(|| {
            a.formation_description
                .len()
                .cmp(&b.formation_description.len())
        })
        .then_with(|| b.rule_id.cmp(a.rule_id))
}

/// Merge duplicates, keeping first-seen group order.
pub fn dedup(detections: Vec<YogaDetection>, merge_planets: bool) -> Vec<YogaDetection> {
    let mut groups: Vec<Vec<YogaDetection>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for d in detections {
        let key = normalize_name(&d.name);
        match index.get(&key) {
            Some(&i) => groups[i].push(d),
            None => {
                index.insert(key, groups.len());
                groups.push(vec![d]);
            }
        }
    }
    groups
        .into_iter()
        .filter_map(|group| merge_group(group, merge_planets))
        .collect()
}

fn merge_group(group: Vec<YogaDetection>, merge_planets: bool) -> Option<YogaDetection> {
    let best = group
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| prefer(a, b))
        .map(|(i, _)| i)?;
    let mut others = group;
    let mut rep = others.swap_remove(best);
    others.sort_by(|a, b| a.rule_id.cmp(b.rule_id));
    for other in &others {
        if !rep.merged_rule_ids.contains(&other.rule_id) && other.rule_id != rep.rule_id {
            rep.merged_rule_ids.push(other.rule_id);
        }
        if let Some(instance) = &other.instance {
            if rep.instance.as_ref() != Some(instance) && !rep.merged_instances.contains(instance) {
                rep.merged_instances.push(instance.clone());
            }
        }
        if merge_planets {
            for &g in &other.formation_planets {
                if !rep.formation_planets.contains(&g) {
                    rep.formation_planets.push(g);
                }
            }
        }
    }
    Some(rep)
}
