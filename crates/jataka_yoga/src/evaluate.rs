//! Turns one rule plus one chart into zero or more raw matches.

use std::collections::BTreeSet;

use jataka_base::{
    DUSTHANA, Graha, KENDRA, SAPTA_GRAHAS, exaltation_rashi, house_from, ordinal, rashi_lord,
};

use crate::error::RuleError;
use crate::predicate::{EvalContext, Reference, check_house, check_set};
use crate::rule::{ExchangeKind, FormationPart, GrahaCondition, LordRelation, Pattern, YogaRule};
use crate::types::RawMatch;

/// Evaluate a single rule against a prepared chart.
///
/// Pure and total for well-formed rules; malformed rules return
/// [`RuleError`] instead of panicking.
pub fn evaluate_rule(rule: &YogaRule, ctx: &EvalContext<'_>) -> Result<Vec<RawMatch>, RuleError> {
    match rule.pattern {
        Pattern::Single {
            when,
            formation,
            key,
        } => {
            if !ctx.holds(&when)? {
                return Ok(Vec::new());
            }
            let involved = resolve_formation(ctx, formation)?;
            if involved.is_empty() {
                return Err(RuleError::EmptyFormation);
            }
            let mut key_planets = Vec::with_capacity(key.len());
            for &t in key {
                push_unique(&mut key_planets, ctx.resolve(t)?);
            }
            let mut m = RawMatch::new(rule.id, involved).with_key_planets(key_planets);
            push_placement_facts(ctx, &mut m);
            Ok(vec![m])
        }
        Pattern::LordPairs {
            from,
            first,
            second,
            relations,
        } => lord_pairs(rule, ctx, from, first, second, relations),
        Pattern::Exchanges(kind) => Ok(exchanges(rule, ctx, kind)),
        Pattern::PerGraha { grahas, condition } => {
            let mut out = Vec::new();
            for &g in grahas {
                let found = match condition {
                    GrahaCondition::Vargottama => vargottama(rule, ctx, g),
                    GrahaCondition::NeechaBhanga => neecha_bhanga(rule, ctx, g)?,
                };
                out.extend(found);
            }
            Ok(out)
        }
        Pattern::PerHouseLord => Ok((1..=12u8)
            .map(|h| {
                let lord = ctx.lords().lord_of(h);
                let placed = ctx.chart().house_of(lord);
                let mut m = RawMatch::new(rule.id, vec![lord]).with_instance(format!("{h}-{placed}"));
                m.push_fact("lord_of", ordinal(h));
                m.push_fact("placed_in", ordinal(placed));
                push_placement_facts(ctx, &mut m);
                m
            })
            .collect()),
    }
}

/// Reasons for which one formed match is cancelled; empty when it stands.
///
/// Conditions are judged against the match, so [`Target::Involved`] and
/// [`Predicate::AnyInvolved`](crate::Predicate::AnyInvolved) see its
/// formation planets.
///
/// [`Target::Involved`]: crate::Target::Involved
pub fn cancellation_reasons(
    rule: &YogaRule,
    ctx: &EvalContext<'_>,
    m: &RawMatch,
) -> Result<Vec<&'static str>, RuleError> {
    let scoped = ctx.for_match(&m.involved);
    let mut reasons = Vec::new();
    for c in rule.cancellation {
        if scoped.holds(&c.when)? {
            reasons.push(c.reason);
        }
    }
    Ok(reasons)
}

fn push_unique(v: &mut Vec<Graha>, g: Graha) {
    if !v.contains(&g) {
        v.push(g);
    }
}

fn resolve_formation(
    ctx: &EvalContext<'_>,
    parts: &[FormationPart],
) -> Result<Vec<Graha>, RuleError> {
    let mut out = Vec::new();
    for part in parts {
        match *part {
            FormationPart::Target(t) => push_unique(&mut out, ctx.resolve(t)?),
            FormationPart::Occupants { set, from, houses } => {
                for g in ctx.occupants(set, from, houses)? {
                    push_unique(&mut out, g);
                }
            }
            FormationPart::Matching { set, when } => {
                for &g in check_set(set)? {
                    if ctx.binding(g).holds(when)? {
                        push_unique(&mut out, g);
                    }
                }
            }
        }
    }
    Ok(out)
}

fn push_placement_facts(ctx: &EvalContext<'_>, m: &mut RawMatch) {
    for i in 0..m.involved.len() {
        let p = ctx.placement(m.involved[i]);
        m.push_fact(
            p.graha.english_name(),
            format!("{}, {} house", p.rashi, ordinal(p.house)),
        );
    }
}

fn relation_between(
    ctx: &EvalContext<'_>,
    la: Graha,
    lb: Graha,
    relations: &[LordRelation],
) -> Option<LordRelation> {
    let chart = ctx.chart();
    for &rel in relations {
        let holds = match rel {
            LordRelation::SameLord => la == lb,
            LordRelation::Conjunct => la != lb && chart.rashi_of(la) == chart.rashi_of(lb),
            LordRelation::Exchange => {
                la != lb
                    && rashi_lord(chart.rashi_of(la)) == lb
                    && rashi_lord(chart.rashi_of(lb)) == la
            }
            LordRelation::MutualAspect => {
                la != lb && house_from(chart.house_of(la), chart.house_of(lb)) == 7
            }
        };
        if holds {
            return Some(rel);
        }
    }
    None
}

fn lord_pairs(
    rule: &YogaRule,
    ctx: &EvalContext<'_>,
    from: Reference,
    first: &[u8],
    second: &[u8],
    relations: &[LordRelation],
) -> Result<Vec<RawMatch>, RuleError> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for &a in first {
        for &b in second {
            let (a, b) = (check_house(a)?, check_house(b)?);
            let pair = (a.min(b), a.max(b));
            if a == b || !seen.insert(pair) {
                continue;
            }
            let (la, lb) = (ctx.lord_from(from, pair.0)?, ctx.lord_from(from, pair.1)?);
            let Some(rel) = relation_between(ctx, la, lb, relations) else {
                continue;
            };
            let mut involved = vec![la];
            push_unique(&mut involved, lb);
            let mut m = RawMatch::new(rule.id, involved)
                .with_instance(format!("{}-{}", pair.0, pair.1));
            m.push_fact("houses", format!("{} and {}", ordinal(pair.0), ordinal(pair.1)));
            m.push_fact("relation", rel.name());
            push_placement_facts(ctx, &mut m);
            out.push(m);
        }
    }
    Ok(out)
}

/// Grade of an exchange from every house its two planets rule.
fn exchange_kind(ruled: &[u8]) -> ExchangeKind {
    if ruled.iter().any(|h| DUSTHANA.contains(h)) {
        ExchangeKind::Dainya
    } else if ruled.contains(&3) {
        ExchangeKind::Khala
    } else {
        ExchangeKind::Maha
    }
}

fn ordinals(houses: &[u8]) -> String {
    houses
        .iter()
        .map(|&h| ordinal(h))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One match per pair of planets occupying each other's signs, graded once
/// by all the houses the pair rules.
fn exchanges(rule: &YogaRule, ctx: &EvalContext<'_>, kind: ExchangeKind) -> Vec<RawMatch> {
    let chart = ctx.chart();
    let mut out = Vec::new();
    for (i, &a) in SAPTA_GRAHAS.iter().enumerate() {
        for &b in &SAPTA_GRAHAS[i + 1..] {
            if rashi_lord(chart.rashi_of(a)) != b || rashi_lord(chart.rashi_of(b)) != a {
                continue;
            }
            let (ruled_a, ruled_b) = (ctx.lords().houses_ruled_by(a), ctx.lords().houses_ruled_by(b));
            let ruled: Vec<u8> = ruled_a.iter().chain(&ruled_b).copied().collect();
            if exchange_kind(&ruled) != kind {
                continue;
            }
            // `b` sits in the house `a` rules and the other way round.
            let (house_a, house_b) = (chart.house_of(b), chart.house_of(a));
            let (lo, hi) = (house_a.min(house_b), house_a.max(house_b));
            let involved = if house_a <= house_b { vec![a, b] } else { vec![b, a] };
            let mut m = RawMatch::new(rule.id, involved).with_instance(format!("{lo}-{hi}"));
            m.push_fact("houses", format!("{} and {}", ordinal(lo), ordinal(hi)));
            m.push_fact(
                "lordships",
                format!("{a} rules {}; {b} rules {}", ordinals(&ruled_a), ordinals(&ruled_b)),
            );
            push_placement_facts(ctx, &mut m);
            out.push(m);
        }
    }
    out
}

fn vargottama(rule: &YogaRule, ctx: &EvalContext<'_>, g: Graha) -> Option<RawMatch> {
    let p = ctx.placement(g);
    if !p.vargottama {
        return None;
    }
    let mut m = RawMatch::new(rule.id, vec![g])
        .with_key_planets(vec![g])
        .with_instance(g.english_name());
    m.push_fact(g.english_name(), format!("{} in rashi and navamsha", p.rashi));
    Some(m)
}

fn in_kendra_from_lagna_or_moon(ctx: &EvalContext<'_>, g: Graha) -> Option<&'static str> {
    let chart = ctx.chart();
    if KENDRA.contains(&chart.house_of(g)) {
        Some("ascendant")
    } else if g != Graha::Chandra && KENDRA.contains(&chart.house_from_graha(Graha::Chandra, g)) {
        Some("Moon")
    } else {
        None
    }
}

/// Classical cancellations of debilitation, one match per debilitated planet
/// with at least one condition met.
fn neecha_bhanga(
    rule: &YogaRule,
    ctx: &EvalContext<'_>,
    g: Graha,
) -> Result<Option<RawMatch>, RuleError> {
    let p = ctx.placement(g);
    if !p.debilitated {
        return Ok(None);
    }
    let chart = ctx.chart();
    let mut helpers = Vec::new();
    let mut facts = Vec::new();

    let dispositor = rashi_lord(p.rashi);
    if let Some(from) = in_kendra_from_lagna_or_moon(ctx, dispositor) {
        push_unique(&mut helpers, dispositor);
        facts.push(("dispositor", format!("{dispositor} in a kendra from the {from}")));
    }

    if let Some(exalt) = exaltation_rashi(g) {
        let exalt_lord = rashi_lord(exalt);
        if let Some(from) = in_kendra_from_lagna_or_moon(ctx, exalt_lord) {
            push_unique(&mut helpers, exalt_lord);
            facts.push(("exaltation_lord", format!("{exalt_lord} in a kendra from the {from}")));
        }
    }

    // A planet exalted in the sign of this debilitation.
    if let Some(&exalted_here) = jataka_base::SAPTA_GRAHAS
        .iter()
        .find(|&&o| exaltation_rashi(o) == Some(p.rashi))
    {
        if let Some(from) = in_kendra_from_lagna_or_moon(ctx, exalted_here) {
            push_unique(&mut helpers, exalted_here);
            facts.push(("exalted_in_sign", format!("{exalted_here} in a kendra from the {from}")));
        }
    }

    let with_dispositor = chart.rashi_of(dispositor) == p.rashi;
    let aspected = jataka_base::aspects_house(
        dispositor,
        chart.house_of(dispositor),
        p.house,
    );
    if with_dispositor || aspected {
        push_unique(&mut helpers, dispositor);
        let how = if with_dispositor { "conjoins" } else { "aspects" };
        facts.push(("dispositor_contact", format!("{dispositor} {how} {g}")));
    }

    if p.vargottama {
        facts.push(("vargottama", format!("{g} vargottama")));
    }

    if facts.is_empty() {
        return Ok(None);
    }
    let mut involved = vec![g];
    for &h in &helpers {
        push_unique(&mut involved, h);
    }
    let key = if helpers.is_empty() { vec![g] } else { helpers };
    let mut m = RawMatch::new(rule.id, involved)
        .with_key_planets(key)
        .with_instance(g.english_name());
    let conditions = facts
        .iter()
        .map(|(_, v)| v.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    for (k, v) in facts {
        m.push_fact(k, v);
    }
    m.push_fact("conditions", conditions);
    push_placement_facts(ctx, &mut m);
    Ok(Some(m))
}
