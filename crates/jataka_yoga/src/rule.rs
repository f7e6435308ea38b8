//! Rule definitions: the declarative shape of one catalog entry.

use jataka_base::Graha;

use crate::predicate::{GrahaSet, Predicate, Reference, Target};
use crate::types::{
    AgeRange, BphsCategory, Impact, LifeArea, PatternFamily, RawMatch, Strength, StrengthHint,
    Structure,
};

/// A planet, or the planets found by an occupancy query, that make up a
/// formation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormationPart {
    Target(Target),
    Occupants {
        set: GrahaSet,
        from: Reference,
        houses: &'static [u8],
    },
    /// Members of `set` for which `when` holds, with
    /// [`Target::Each`] bound to the member.
    Matching {
        set: GrahaSet,
        when: &'static Predicate,
    },
}

/// How two house lords may be linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LordRelation {
    /// One planet rules both houses.
    SameLord,
    /// Both lords share a sign.
    Conjunct,
    /// Each lord occupies the other's sign.
    Exchange,
    /// Lords stand 7th from each other.
    MutualAspect,
}

impl LordRelation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SameLord => "single lord",
            Self::Conjunct => "conjunction",
            Self::Exchange => "sign exchange",
            Self::MutualAspect => "mutual aspect",
        }
    }
}

/// All four lord relations, strongest first.
pub const ANY_RELATION: &[LordRelation] = &[
    LordRelation::SameLord,
    LordRelation::Exchange,
    LordRelation::Conjunct,
    LordRelation::MutualAspect,
];

/// Parivartana grading by the houses exchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeKind {
    /// Neither house is the 3rd or a dusthana.
    Maha,
    /// One house is the 3rd, none a dusthana.
    Khala,
    /// One house is a dusthana.
    Dainya,
}

/// Per-planet conditions that each planet satisfies independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrahaCondition {
    Vargottama,
    NeechaBhanga,
}

/// Shape of a rule and how its matches are enumerated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pattern {
    /// At most one match: when `when` holds, `formation` names the planets.
    Single {
        when: Predicate,
        formation: &'static [FormationPart],
        /// Strength-bearing planets for [`StrengthHint::KeyPlanets`].
        key: &'static [Target],
    },
    /// One match per unordered pair of houses whose lords are linked.
    /// Houses and their lords are counted from `from`.
    LordPairs {
        from: Reference,
        first: &'static [u8],
        second: &'static [u8],
        relations: &'static [LordRelation],
    },
    /// One match per exchange of the given kind.
    Exchanges(ExchangeKind),
    /// One match per listed planet meeting the condition.
    PerGraha {
        grahas: &'static [Graha],
        condition: GrahaCondition,
    },
    /// One match per house lord, naming the house it occupies.
    PerHouseLord,
}

/// A condition that, when it holds, cancels a formed yoga.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CancelCondition {
    pub when: Predicate,
    pub reason: &'static str,
}

/// One catalog entry.
///
/// Entries are authored with the `const` builder methods so every field has
/// a sensible default:
///
/// ```
/// use jataka_yoga::{BphsCategory, Pattern, Predicate, Target, YogaRule};
/// use jataka_base::Graha;
///
/// const SUN_MERCURY: YogaRule = YogaRule::new(
///     "demo.sun_mercury",
///     "Demo Yoga",
///     BphsCategory::Standard,
///     Pattern::Single {
///         when: Predicate::Conjunct {
///             a: Target::Graha(Graha::Surya),
///             b: Target::Graha(Graha::Buddh),
///         },
///         formation: &[],
///         key: &[],
///     },
///     "Sun with Mercury",
/// );
/// assert!(!SUN_MERCURY.simplified());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaRule {
    /// Stable identifier, never reused.
    pub id: &'static str,
    pub name: &'static str,
    /// Template naming each match on its own, for enumerations whose
    /// instances are distinct yogas rather than repeats of one.
    pub instance_name: Option<&'static str>,
    pub category: BphsCategory,
    pub family: Option<PatternFamily>,
    pub reference: Option<&'static str>,
    pub pattern: Pattern,
    pub strength: StrengthHint,
    pub cancellation: &'static [CancelCondition],
    pub impact: Impact,
    pub structure: Structure,
    pub life_areas: &'static [LifeArea],
    pub activation_age: Option<AgeRange>,
    /// Present when the rule is a simplified proxy of the classical one.
    pub simplified_note: Option<&'static str>,
    /// Template with `{planets}`, `{instance}` and fact-key placeholders.
    pub description: &'static str,
}

impl YogaRule {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        category: BphsCategory,
        pattern: Pattern,
        description: &'static str,
    ) -> Self {
        let impact = match category {
            BphsCategory::MajorChallenge => Impact::Negative,
            _ => Impact::Positive,
        };
        Self {
            id,
            name,
            instance_name: None,
            category,
            family: None,
            reference: None,
            pattern,
            strength: StrengthHint::Dignity,
            cancellation: &[],
            impact,
            structure: Structure::Combination,
            life_areas: &[],
            activation_age: None,
            simplified_note: None,
            description,
        }
    }

    pub const fn family(mut self, family: PatternFamily) -> Self {
        self.family = Some(family);
        self
    }

    pub const fn reference(mut self, reference: &'static str) -> Self {
        self.reference = Some(reference);
        self
    }

    pub const fn strength(mut self, hint: StrengthHint) -> Self {
        self.strength = hint;
        self
    }

    pub const fn fixed(self, strength: Strength) -> Self {
        self.strength(StrengthHint::Fixed(strength))
    }

    pub const fn cancelled_by(mut self, conditions: &'static [CancelCondition]) -> Self {
        self.cancellation = conditions;
        self
    }

    pub const fn impact(mut self, impact: Impact) -> Self {
        self.impact = impact;
        self
    }

    pub const fn enumeration(mut self) -> Self {
        self.structure = Structure::PlacementEnumeration;
        self
    }

    pub const fn areas(mut self, areas: &'static [LifeArea]) -> Self {
        self.life_areas = areas;
        self
    }

    pub const fn ages(mut self, min: f64, max: f64) -> Self {
        self.activation_age = Some(AgeRange::new(min, max));
        self
    }

    pub const fn named_per_instance(mut self, template: &'static str) -> Self {
        self.instance_name = Some(template);
        self
    }

    pub const fn simplified_as(mut self, note: &'static str) -> Self {
        self.simplified_note = Some(note);
        self
    }

    pub const fn simplified(&self) -> bool {
        self.simplified_note.is_some()
    }

    /// Render the description template for one match.
    ///
    /// Unknown placeholders are left as written.
    pub fn describe(&self, m: &RawMatch) -> String {
        render(self.description, m)
    }

    /// Display name of one match: the per-instance template when the rule
    /// has one, else the rule name.
    pub fn display_name(&self, m: &RawMatch) -> String {
        match self.instance_name {
            Some(template) => render(template, m),
            None => self.name.to_string(),
        }
    }
}

fn render(template: &str, m: &RawMatch) -> String {
    let planets = m
        .involved
        .iter()
        .map(|g| g.english_name())
        .collect::<Vec<_>>()
        .join(", ");
    let mut out = template
        .replace("{planets}", &planets)
        .replace("{instance}", m.instance.as_deref().unwrap_or(""));
    for fact in &m.facts {
        out = out.replace(&format!("{{{}}}", fact.key), &fact.value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{DignityTest, MOON};

    const RULE: YogaRule = YogaRule::new(
        "test.rule",
        "Test Yoga",
        BphsCategory::MajorChallenge,
        Pattern::Single {
            when: Predicate::Dignity {
                target: Target::Graha(Graha::Chandra),
                test: DignityTest::Debilitated,
            },
            formation: &[FormationPart::Occupants {
                set: GrahaSet::Tara,
                from: MOON,
                houses: &[2, 12],
            }],
            key: &[],
        },
        "{planets} around the Moon ({side})",
    )
    .ages(20.0, 40.0)
    .simplified_as("occupancy only");

    #[test]
    fn builder_defaults() {
        assert_eq!(RULE.impact, Impact::Negative);
        assert_eq!(RULE.structure, Structure::Combination);
        assert_eq!(RULE.strength, StrengthHint::Dignity);
        assert!(RULE.simplified());
        assert_eq!(RULE.activation_age, Some(AgeRange::new(20.0, 40.0)));
    }

    #[test]
    fn describe_fills_placeholders() {
        let mut m = RawMatch::new("test.rule", vec![Graha::Mangal, Graha::Shani]);
        m.push_fact("side", "both sides");
        assert_eq!(RULE.describe(&m), "Mars, Saturn around the Moon (both sides)");
        assert_eq!(RULE.display_name(&m), "Test Yoga");
    }

    #[test]
    fn per_instance_names() {
        let rule = RULE.named_per_instance("Lord of the {lord_of} in the {placed_in}");
        let mut m = RawMatch::new("test.rule", vec![Graha::Surya]).with_instance("1-9");
        m.push_fact("lord_of", "1st");
        m.push_fact("placed_in", "9th");
        assert_eq!(rule.display_name(&m), "Lord of the 1st in the 9th");
    }
}
