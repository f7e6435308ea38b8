//! The versioned, read-only yoga catalog.
//!
//! Entries are grouped by family, one module per group, and concatenated
//! once on first use. Identifiers are stable across versions and never
//! reused; removing a rule retires its id.

use std::sync::LazyLock;

use jataka_base::Graha;

use crate::predicate::{GrahaSet, Reference, Target};
use crate::rule::YogaRule;
use crate::types::BphsCategory;

/// Planets on one side of a luminary, all of one nature, with the other
/// side empty. `$occupant` must be present in house `$side` and
/// `$excluded` absent from it.
macro_rules! one_sided {
    (
        $id:literal,
        $name:literal,
        $category:expr,
        from: $from:expr,
        center: $center:expr,
        side: $side:literal,
        away: $away:literal,
        occupant: $occupant:expr,
        excluded: $excluded:expr,
        $desc:literal
    ) => {
        YogaRule::new(
            $id,
            $name,
            $category,
            Pattern::Single {
                when: Predicate::And(&[
                    Predicate::Occupies {
                        set: $occupant,
                        from: $from,
                        houses: &[$side],
                        min: 1,
                    },
                    Predicate::Not(&Predicate::Occupies {
                        set: $excluded,
                        from: $from,
                        houses: &[$side],
                        min: 1,
                    }),
                    Predicate::Not(&Predicate::Occupies {
                        set: GrahaSet::Tara,
                        from: $from,
                        houses: &[$away],
                        min: 1,
                    }),
                ]),
                formation: &[
                    FormationPart::Target($center),
                    FormationPart::Occupants {
                        set: GrahaSet::Tara,
                        from: $from,
                        houses: &[$side],
                    },
                ],
                key: &[],
            },
            $desc,
        )
    };
}

mod arishta;
mod bhava;
mod chandra;
mod dhana;
mod mahapurusha;
mod misc;
mod nabhasa;
mod named;
mod parivartana;
mod raja;
mod surya;

/// Version of the rule catalog. Bumped whenever a rule is added, retired or
/// changes meaning.
pub const CATALOG_VERSION: &str = "1.1.0";

static CATALOG: LazyLock<Vec<YogaRule>> = LazyLock::new(|| {
    [
        mahapurusha::RULES,
        chandra::RULES,
        surya::RULES,
        raja::RULES,
        dhana::RULES,
        parivartana::RULES,
        misc::RULES,
        named::RULES,
        arishta::RULES,
        nabhasa::RULES,
        bhava::RULES,
    ]
    .concat()
});

/// Every rule, in catalog order.
pub fn catalog() -> &'static [YogaRule] {
    &CATALOG
}

/// Look up a rule by its stable id.
pub fn find_rule(id: &str) -> Option<&'static YogaRule> {
    catalog().iter().find(|r| r.id == id)
}

/// Rules of one category, in catalog order.
pub fn rules_in(category: BphsCategory) -> impl Iterator<Item = &'static YogaRule> {
    catalog().iter().filter(move |r| r.category == category)
}

// ---------------------------------------------------------------------------
// Authoring shorthands shared by the family modules
// ---------------------------------------------------------------------------

const SURYA: Target = Target::Graha(Graha::Surya);
const CHANDRA: Target = Target::Graha(Graha::Chandra);
const MANGAL: Target = Target::Graha(Graha::Mangal);
const BUDDH: Target = Target::Graha(Graha::Buddh);
const GURU: Target = Target::Graha(Graha::Guru);
const SHUKRA: Target = Target::Graha(Graha::Shukra);
const SHANI: Target = Target::Graha(Graha::Shani);
const RAHU: Target = Target::Graha(Graha::Rahu);
const KETU: Target = Target::Graha(Graha::Ketu);

const LAGNA: Reference = Reference::Ascendant;

/// Kendras and trikonas together.
const KENDRA_TRIKONA: [u8; 6] = [1, 4, 5, 7, 9, 10];
const ALL_HOUSES: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
const NODES: [Graha; 2] = [Graha::Rahu, Graha::Ketu];

/// Mars and Saturn: the natural malefics among the five tara grahas.
const TARA_PAPA: GrahaSet = GrahaSet::Only(&[Graha::Mangal, Graha::Shani]);

const ODD_SIGNS: [u8; 6] = [1, 3, 5, 7, 9, 11];
const EVEN_SIGNS: [u8; 6] = [2, 4, 6, 8, 10, 12];
const MOVABLE_SIGNS: [u8; 4] = [1, 4, 7, 10];
const FIXED_SIGNS: [u8; 4] = [2, 5, 8, 11];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::evaluate::evaluate_rule;
    use crate::predicate::EvalContext;
    use crate::rule::Pattern;
    use crate::types::{PatternFamily, Structure};
    use jataka_base::{ALL_RASHIS, Chart, ChartBuilder};

    #[test]
    fn ids_are_unique() {
        let mut seen = HashSet::new();
        for rule in catalog() {
            assert!(seen.insert(rule.id), "duplicate id {}", rule.id);
        }
    }

    #[test]
    fn ids_are_namespaced() {
        for rule in catalog() {
            assert!(rule.id.contains('.'), "{}", rule.id);
            assert!(
                rule.id.chars().all(|c| c.is_ascii_lowercase() || c == '.' || c == '_'),
                "{}",
                rule.id
            );
        }
    }

    #[test]
    fn classical_rules_cite_a_reference() {
        for rule in catalog() {
            if rule.category.is_classical() {
                assert!(
                    rule.reference.is_some_and(|r| !r.is_empty()),
                    "{} has no reference",
                    rule.id
                );
            }
        }
    }

    #[test]
    fn simplified_rules_carry_a_note() {
        for rule in catalog() {
            if let Some(note) = rule.simplified_note {
                assert!(note.len() > 10, "{} note too short", rule.id);
            }
        }
        assert!(catalog().iter().any(|r| r.simplified()));
    }

    #[test]
    fn names_and_descriptions_present() {
        for rule in catalog() {
            assert!(!rule.name.is_empty(), "{}", rule.id);
            assert!(!rule.description.is_empty(), "{}", rule.id);
        }
    }

    #[test]
    fn activation_ranges_are_ordered() {
        for rule in catalog() {
            if let Some(r) = rule.activation_age {
                assert!(r.min >= 0.0 && r.min <= r.max, "{}", rule.id);
            }
        }
    }

    #[test]
    fn nabhasa_family_has_thirty_two_rules() {
        let n = catalog()
            .iter()
            .filter(|r| r.family == Some(PatternFamily::Nabhasa))
            .count();
        assert_eq!(n, 32);
    }

    #[test]
    fn placement_enumerations_use_per_lord_pattern() {
        for rule in catalog() {
            if rule.structure == Structure::PlacementEnumeration {
                assert_eq!(rule.pattern, Pattern::PerHouseLord, "{}", rule.id);
                assert!(rule.instance_name.is_some(), "{} needs per-instance names", rule.id);
            }
        }
    }

    #[test]
    fn find_by_id() {
        let rule = find_rule("chandra.gajakesari").unwrap();
        assert_eq!(rule.name, "Gajakesari Yoga");
        assert!(find_rule("no.such_rule").is_none());
        assert!(rules_in(BphsCategory::NonClassical).count() > 0);
    }

    /// A chart for every ascendant with planets spread over the signs; every
    /// rule must evaluate without a structural error.
    #[test]
    fn every_rule_evaluates_on_every_ascendant() {
        for asc in ALL_RASHIS {
            let n = asc.number();
            let chart: Chart = ChartBuilder::new(n)
                .place(Graha::Surya, n, 5.0)
                .place(Graha::Chandra, (n + 3) % 12 + 1, 12.0)
                .place(Graha::Mangal, (n + 6) % 12 + 1, 20.0)
                .place(Graha::Buddh, n % 12 + 1, 2.0)
                .place(Graha::Guru, (n + 8) % 12 + 1, 9.0)
                .place(Graha::Shukra, (n + 10) % 12 + 1, 17.0)
                .place(Graha::Shani, (n + 4) % 12 + 1, 25.0)
                .place(Graha::Rahu, (n + 1) % 12 + 1, 8.0)
                .place(Graha::Ketu, (n + 7) % 12 + 1, 8.0)
                .secondary(Graha::Guru, (n + 8) % 12 + 1)
                .build()
                .unwrap();
            let ctx = EvalContext::new(&chart);
            for rule in catalog() {
                let found = evaluate_rule(rule, &ctx)
                    .unwrap_or_else(|e| panic!("{} on {asc}: {e}", rule.id));
                for m in &found {
                    assert_eq!(m.rule_id, rule.id);
                    assert!(!m.involved.is_empty(), "{}", rule.id);
                }
            }
        }
    }
}
