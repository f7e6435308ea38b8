//! Tagged-variant chart predicates and their evaluator.
//!
//! Every catalog condition is a [`Predicate`] tree built from a handful of
//! primitive chart queries. [`EvalContext::holds`] interprets the tree
//! against one validated chart. Evaluation is pure: the same chart always
//! yields the same answer.

use jataka_base::{
    Chart, Graha, HouseLordship, Placement, Rashi, RashiModality, SAPTA_GRAHAS, TARA_GRAHAS,
    aspects_house, house_from, rashi_lord, rashi_of_house,
};

use crate::error::RuleError;

// ---------------------------------------------------------------------------
// Operands
// ---------------------------------------------------------------------------

/// A planet named directly or through lordship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Graha(Graha),
    /// Lord of a house (1-12) counted from the ascendant.
    LordOf(u8),
    /// Lord of the sign occupied by the lord of a house.
    DispositorOfLord(u8),
    /// Lord of the sign occupied by another target.
    DispositorOf(&'static Target),
    /// The n-th formation planet of the match being judged (0-based).
    /// Only meaningful in cancellation conditions.
    Involved(u8),
    /// The planet bound by a quantifier such as [`Predicate::AnyInvolved`]
    /// or [`Predicate::AllOf`].
    Each,
}

/// Point from which houses are counted (house 1 = the reference's sign).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Ascendant,
    Of(Target),
}

/// Shorthand for counting from the Moon.
pub const MOON: Reference = Reference::Of(Target::Graha(Graha::Chandra));
/// Shorthand for counting from the Sun.
pub const SUN: Reference = Reference::Of(Target::Graha(Graha::Surya));

/// Set of planets a predicate ranges over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrahaSet {
    /// All nine grahas.
    All,
    /// Sun through Saturn.
    Sapta,
    /// Mars through Saturn (neither luminary nor node).
    Tara,
    /// Mercury, Jupiter, Venus.
    Shubha,
    /// Sun, Mars, Saturn.
    Papa,
    /// Sun, Mars, Saturn, Rahu, Ketu.
    PapaWithNodes,
    Only(&'static [Graha]),
}

impl GrahaSet {
    pub fn members(self) -> &'static [Graha] {
        match self {
            Self::All => &jataka_base::ALL_GRAHAS,
            Self::Sapta => &SAPTA_GRAHAS,
            Self::Tara => &TARA_GRAHAS,
            Self::Shubha => &[Graha::Buddh, Graha::Guru, Graha::Shukra],
            Self::Papa => &[Graha::Surya, Graha::Mangal, Graha::Shani],
            Self::PapaWithNodes => &[
                Graha::Surya,
                Graha::Mangal,
                Graha::Shani,
                Graha::Rahu,
                Graha::Ketu,
            ],
            Self::Only(grahas) => grahas,
        }
    }
}

/// Sign-dignity condition on one planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DignityTest {
    Exalted,
    Debilitated,
    /// Exalted, moolatrikona or own sign.
    ExaltedOrOwn,
    /// Exalted, own sign or a friend's sign.
    StrongSign,
    NotDebilitated,
    OwnSign,
}

// ---------------------------------------------------------------------------
// Predicate tree
// ---------------------------------------------------------------------------

/// A condition on a chart.
///
/// Occupancy queries counted from a planet ignore that planet itself, so
/// "a planet in the 2nd from the Moon" never counts the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate {
    /// Target occupies one of `houses` counted from `from`.
    Placed {
        target: Target,
        from: Reference,
        houses: &'static [u8],
    },
    Dignity {
        target: Target,
        test: DignityTest,
    },
    /// Both targets share a sign. The same planet reached twice holds.
    Conjunct { a: Target, b: Target },
    /// `by` casts a sign aspect on `on`.
    Aspects { by: Target, on: Target },
    /// Lords of two houses occupy each other's signs.
    Exchange { a: u8, b: u8 },
    Combust(Target),
    Retrograde(Target),
    /// Target occupies one of the given sign numbers (1-12).
    InSigns {
        target: Target,
        signs: &'static [u8],
    },
    /// The ascendant is one of the given sign numbers (1-12).
    AscendantIn(&'static [u8]),
    /// Same sign in the rashi and navamsha charts.
    Vargottama(Target),
    /// At least `min` of `houses` (from `from`) hold a member of `set`.
    Occupies {
        set: GrahaSet,
        from: Reference,
        houses: &'static [u8],
        min: u8,
    },
    /// Every member of `set` lies in `houses` (from `from`).
    AllIn {
        set: GrahaSet,
        from: Reference,
        houses: &'static [u8],
    },
    /// Every member of `set` lies in `houses` and each of `houses` holds at
    /// least one member.
    Fills {
        set: GrahaSet,
        from: Reference,
        houses: &'static [u8],
    },
    /// Every member of `set` lies in signs of one modality.
    AllInModality {
        set: GrahaSet,
        modality: RashiModality,
    },
    /// Members of `set` occupy exactly `count` distinct signs.
    SignCount { set: GrahaSet, count: u8 },
    /// Holds for some formation planet of the match being judged, with
    /// [`Target::Each`] bound to it.
    AnyInvolved(&'static Predicate),
    /// Holds for some member of `set`, with [`Target::Each`] bound to it.
    AnyOf {
        set: GrahaSet,
        when: &'static Predicate,
    },
    /// Holds for every member of `set`, with [`Target::Each`] bound to it.
    AllOf {
        set: GrahaSet,
        when: &'static Predicate,
    },
    And(&'static [Predicate]),
    Or(&'static [Predicate]),
    Not(&'static Predicate),
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

/// One chart prepared for rule evaluation.
///
/// A context scoped to a match ([`EvalContext::for_match`]) also resolves
/// the match-relative targets used by cancellation conditions.
#[derive(Debug, Clone)]
pub struct EvalContext<'a> {
    chart: &'a Chart,
    lords: HouseLordship,
    involved: &'a [Graha],
    each: Option<Graha>,
}

impl<'a> EvalContext<'a> {
    pub fn new(chart: &'a Chart) -> Self {
        Self {
            chart,
            lords: HouseLordship::resolve(chart.ascendant()),
            involved: &[],
            each: None,
        }
    }

    /// The same chart, judged relative to one match's formation planets.
    pub fn for_match<'m>(&self, involved: &'m [Graha]) -> EvalContext<'m>
    where
        'a: 'm,
    {
        EvalContext {
            chart: self.chart,
            lords: self.lords,
            involved,
            each: None,
        }
    }

    pub fn chart(&self) -> &'a Chart {
        self.chart
    }

    pub fn lords(&self) -> &HouseLordship {
        &self.lords
    }

    /// The same context with [`Target::Each`] bound to `graha`.
    pub fn binding(&self, graha: Graha) -> Self {
        Self {
            each: Some(graha),
            ..self.clone()
        }
    }

    /// Sign that acts as house 1 for `reference`.
    pub fn origin_rashi(&self, reference: Reference) -> Result<Rashi, RuleError> {
        match reference {
            Reference::Ascendant => Ok(self.chart.ascendant()),
            Reference::Of(t) => Ok(self.chart.rashi_of(self.resolve(t)?)),
        }
    }

    /// Lord of house `h` counted from `reference`.
    pub fn lord_from(&self, reference: Reference, h: u8) -> Result<Graha, RuleError> {
        let h = check_house(h)?;
        match reference {
            Reference::Ascendant => Ok(self.lords.lord_of(h)),
            Reference::Of(_) => Ok(rashi_lord(rashi_of_house(self.origin_rashi(reference)?, h))),
        }
    }

    pub fn placement(&self, graha: Graha) -> &'a Placement {
        self.chart.placement(graha)
    }

    /// Resolve a target to a planet.
    pub fn resolve(&self, target: Target) -> Result<Graha, RuleError> {
        match target {
            Target::Graha(g) => Ok(g),
            Target::LordOf(h) => Ok(self.lords.lord_of(check_house(h)?)),
            Target::DispositorOfLord(h) => {
                let lord = self.lords.lord_of(check_house(h)?);
                Ok(rashi_lord(self.chart.rashi_of(lord)))
            }
            Target::DispositorOf(inner) => {
                let g = self.resolve(*inner)?;
                Ok(rashi_lord(self.chart.rashi_of(g)))
            }
            Target::Involved(i) => self
                .involved
                .get(i as usize)
                .copied()
                .ok_or(RuleError::NoInvolvedPlanet(i)),
            Target::Each => self.each.ok_or(RuleError::UnboundEach),
        }
    }

    /// House (from the ascendant) that acts as house 1 for `reference`.
    pub fn origin(&self, reference: Reference) -> Result<u8, RuleError> {
        match reference {
            Reference::Ascendant => Ok(1),
            Reference::Of(t) => Ok(self.chart.house_of(self.resolve(t)?)),
        }
    }

    /// Planet counted from, when the reference is a planet.
    fn reference_graha(&self, reference: Reference) -> Result<Option<Graha>, RuleError> {
        match reference {
            Reference::Ascendant => Ok(None),
            Reference::Of(t) => self.resolve(t).map(Some),
        }
    }

    /// House of `graha` counted from `reference`.
    pub fn house_from(&self, reference: Reference, graha: Graha) -> Result<u8, RuleError> {
        Ok(house_from(self.origin(reference)?, self.chart.house_of(graha)))
    }

    /// Members of `set` in `houses` from `reference`, excluding the
    /// reference planet, in set order.
    pub fn occupants(
        &self,
        set: GrahaSet,
        reference: Reference,
        houses: &[u8],
    ) -> Result<Vec<Graha>, RuleError> {
        check_houses(houses)?;
        let skip = self.reference_graha(reference)?;
        let origin = self.origin(reference)?;
        Ok(set
            .members()
            .iter()
            .copied()
            .filter(|&g| Some(g) != skip)
            .filter(|&g| houses.contains(&house_from(origin, self.chart.house_of(g))))
            .collect())
    }

    /// Whether the predicate holds for this chart.
    pub fn holds(&self, predicate: &Predicate) -> Result<bool, RuleError> {
        match *predicate {
            Predicate::Placed {
                target,
                from,
                houses,
            } => {
                check_houses(houses)?;
                let g = self.resolve(target)?;
                Ok(houses.contains(&self.house_from(from, g)?))
            }
            Predicate::Dignity { target, test } => {
                let p = self.placement(self.resolve(target)?);
                Ok(dignity_test(p, test))
            }
            Predicate::Conjunct { a, b } => {
                let (a, b) = (self.resolve(a)?, self.resolve(b)?);
                Ok(self.chart.rashi_of(a) == self.chart.rashi_of(b))
            }
            Predicate::Aspects { by, on } => {
                let (by, on) = (self.resolve(by)?, self.resolve(on)?);
                Ok(by != on
                    && aspects_house(by, self.chart.house_of(by), self.chart.house_of(on)))
            }
            Predicate::Exchange { a, b } => self.lords_exchanged(a, b),
            Predicate::Combust(t) => Ok(self.placement(self.resolve(t)?).combust),
            Predicate::Retrograde(t) => Ok(self.placement(self.resolve(t)?).retrograde),
            Predicate::InSigns { target, signs } => {
                check_signs(signs)?;
                let number = self.chart.rashi_of(self.resolve(target)?).number();
                Ok(signs.contains(&number))
            }
            Predicate::AscendantIn(signs) => {
                check_signs(signs)?;
                Ok(signs.contains(&self.chart.ascendant().number()))
            }
            Predicate::Vargottama(t) => Ok(self.placement(self.resolve(t)?).vargottama),
            Predicate::Occupies {
                set,
                from,
                houses,
                min,
            } => {
                if min == 0 || min as usize > houses.len() {
                    return Err(RuleError::InvalidCount {
                        count: min,
                        available: houses.len(),
                    });
                }
                check_houses(houses)?;
                let skip = self.reference_graha(from)?;
                let origin = self.origin(from)?;
                let occupied = houses
                    .iter()
                    .filter(|&&h| {
                        set.members().iter().any(|&g| {
                            Some(g) != skip && house_from(origin, self.chart.house_of(g)) == h
                        })
                    })
                    .count();
                Ok(occupied >= min as usize)
            }
            Predicate::AllIn { set, from, houses } => {
                check_set(set)?;
                let skip = self.reference_graha(from)?;
                let inside = self.occupants(set, from, houses)?.len();
                let expected = set.members().iter().filter(|&&g| Some(g) != skip).count();
                Ok(inside == expected)
            }
            Predicate::Fills { set, from, houses } => {
                let all_in = self.holds(&Predicate::AllIn { set, from, houses })?;
                if !all_in {
                    return Ok(false);
                }
                let min = u8::try_from(houses.len()).map_err(|_| RuleError::InvalidCount {
                    count: u8::MAX,
                    available: houses.len(),
                })?;
                self.holds(&Predicate::Occupies {
                    set,
                    from,
                    houses,
                    min,
                })
            }
            Predicate::AllInModality { set, modality } => {
                check_set(set)?;
                Ok(set
                    .members()
                    .iter()
                    .all(|&g| self.chart.rashi_of(g).modality() == modality))
            }
            Predicate::SignCount { set, count } => {
                let members = check_set(set)?;
                if count == 0 || count as usize > members.len() {
                    return Err(RuleError::InvalidCount {
                        count,
                        available: members.len(),
                    });
                }
                let mut signs: Vec<u8> = members
                    .iter()
                    .map(|&g| self.chart.rashi_of(g).index())
                    .collect();
                signs.sort_unstable();
                signs.dedup();
                Ok(signs.len() == count as usize)
            }
            Predicate::AnyInvolved(inner) => {
                if self.involved.is_empty() {
                    return Err(RuleError::NoInvolvedPlanet(0));
                }
                for &g in self.involved {
                    if self.binding(g).holds(inner)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Predicate::AnyOf { set, when } => {
                for &g in check_set(set)? {
                    if self.binding(g).holds(when)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Predicate::AllOf { set, when } => {
                for &g in check_set(set)? {
                    if !self.binding(g).holds(when)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Predicate::And(parts) => {
                for p in parts {
                    if !self.holds(p)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Predicate::Or(parts) => {
                for p in parts {
                    if self.holds(p)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Predicate::Not(inner) => Ok(!self.holds(inner)?),
        }
    }

    /// Lords of houses `a` and `b` sit in each other's signs.
    pub fn lords_exchanged(&self, a: u8, b: u8) -> Result<bool, RuleError> {
        let (a, b) = (check_house(a)?, check_house(b)?);
        let (la, lb) = (self.lords.lord_of(a), self.lords.lord_of(b));
        if la == lb {
            return Ok(false);
        }
        Ok(rashi_lord(self.chart.rashi_of(la)) == lb && rashi_lord(self.chart.rashi_of(lb)) == la)
    }
}

fn dignity_test(p: &Placement, test: DignityTest) -> bool {
    match test {
        DignityTest::Exalted => p.exalted,
        DignityTest::Debilitated => p.debilitated,
        DignityTest::ExaltedOrOwn => p.exalted || p.own_sign || p.dignity.is_dignified(),
        DignityTest::StrongSign => jataka_base::is_strong_sign(p.graha, p.rashi),
        DignityTest::NotDebilitated => !p.debilitated,
        DignityTest::OwnSign => p.own_sign,
    }
}

pub(crate) fn check_house(h: u8) -> Result<u8, RuleError> {
    if (1..=12).contains(&h) {
        Ok(h)
    } else {
        Err(RuleError::InvalidHouse(h))
    }
}

pub(crate) fn check_houses(houses: &[u8]) -> Result<(), RuleError> {
    if houses.is_empty() {
        return Err(RuleError::EmptyHouses);
    }
    houses.iter().try_for_each(|&h| check_house(h).map(|_| ()))
}

fn check_signs(signs: &[u8]) -> Result<(), RuleError> {
    if signs.is_empty() {
        return Err(RuleError::EmptySigns);
    }
    match signs.iter().find(|s| !(1..=12).contains(*s)) {
        Some(&bad) => Err(RuleError::InvalidSign(bad)),
        None => Ok(()),
    }
}

pub(crate) fn check_set(set: GrahaSet) -> Result<&'static [Graha], RuleError> {
    let members = set.members();
    if members.is_empty() {
        Err(RuleError::EmptySet)
    } else {
        Ok(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_base::{ChartBuilder, KENDRA};

    /// Leo ascendant: Moon 4th in Scorpio, Jupiter 7th in Aquarius.
    fn leo_chart() -> Chart {
        ChartBuilder::new(5)
            .place(Graha::Surya, 1, 10.0)
            .place(Graha::Chandra, 8, 12.0)
            .place(Graha::Mangal, 3, 4.0)
            .place(Graha::Buddh, 1, 28.0)
            .place(Graha::Guru, 11, 15.0)
            .place(Graha::Shukra, 2, 2.0)
            .place(Graha::Shani, 6, 20.0)
            .place(Graha::Rahu, 9, 5.0)
            .place(Graha::Ketu, 3, 5.0)
            .build()
            .unwrap()
    }

    #[test]
    fn placed_from_moon() {
        let chart = leo_chart();
        let ctx = EvalContext::new(&chart);
        let jupiter_kendra_from_moon = Predicate::Placed {
            target: Target::Graha(Graha::Guru),
            from: MOON,
            houses: &KENDRA,
        };
        assert!(ctx.holds(&jupiter_kendra_from_moon).unwrap());
    }

    #[test]
    fn lord_targets() {
        let chart = leo_chart();
        let ctx = EvalContext::new(&chart);
        assert_eq!(ctx.resolve(Target::LordOf(1)).unwrap(), Graha::Surya);
        assert_eq!(ctx.resolve(Target::LordOf(7)).unwrap(), Graha::Shani);
        // Sun (lagna lord) sits in Aries, ruled by Mars
        assert_eq!(ctx.resolve(Target::DispositorOfLord(1)).unwrap(), Graha::Mangal);
        assert_eq!(
            ctx.resolve(Target::LordOf(0)).unwrap_err(),
            RuleError::InvalidHouse(0)
        );
    }

    #[test]
    fn occupancy_excludes_reference_planet() {
        let chart = leo_chart();
        let ctx = EvalContext::new(&chart);
        // Sun and Mercury share Aries; from the Sun only Mercury is in the 1st
        let occ = ctx.occupants(GrahaSet::Sapta, SUN, &[1]).unwrap();
        assert_eq!(occ, vec![Graha::Buddh]);
    }

    #[test]
    fn conjunction_and_aspect() {
        let chart = leo_chart();
        let ctx = EvalContext::new(&chart);
        let sun_mercury = Predicate::Conjunct {
            a: Target::Graha(Graha::Surya),
            b: Target::Graha(Graha::Buddh),
        };
        assert!(ctx.holds(&sun_mercury).unwrap());
        // Jupiter (7th) aspects the 1st (7th from itself)
        let ju_on_sat = Predicate::Aspects {
            by: Target::Graha(Graha::Guru),
            on: Target::Graha(Graha::Shani),
        };
        // Saturn in 2nd is 8th from Jupiter: no aspect
        assert!(!ctx.holds(&ju_on_sat).unwrap());
    }

    #[test]
    fn sign_count_and_errors() {
        let chart = leo_chart();
        let ctx = EvalContext::new(&chart);
        // Sapta grahas in Aries, Scorpio, Gemini, Aquarius, Taurus, Virgo
        let six = Predicate::SignCount {
            set: GrahaSet::Sapta,
            count: 6,
        };
        assert!(ctx.holds(&six).unwrap());
        let bad = Predicate::SignCount {
            set: GrahaSet::Sapta,
            count: 8,
        };
        assert!(matches!(
            ctx.holds(&bad).unwrap_err(),
            RuleError::InvalidCount { count: 8, .. }
        ));
    }

    #[test]
    fn invalid_house_is_an_error_not_a_panic() {
        let chart = leo_chart();
        let ctx = EvalContext::new(&chart);
        let p = Predicate::Placed {
            target: Target::Graha(Graha::Guru),
            from: Reference::Ascendant,
            houses: &[13],
        };
        assert_eq!(ctx.holds(&p).unwrap_err(), RuleError::InvalidHouse(13));
    }

    #[test]
    fn combinators() {
        let chart = leo_chart();
        let ctx = EvalContext::new(&chart);
        const TRUE: Predicate = Predicate::Dignity {
            target: Target::Graha(Graha::Surya),
            test: DignityTest::Exalted,
        };
        const FALSE: Predicate = Predicate::Dignity {
            target: Target::Graha(Graha::Surya),
            test: DignityTest::Debilitated,
        };
        assert!(ctx.holds(&Predicate::And(&[TRUE, TRUE])).unwrap());
        assert!(!ctx.holds(&Predicate::And(&[TRUE, FALSE])).unwrap());
        assert!(ctx.holds(&Predicate::Or(&[FALSE, TRUE])).unwrap());
        assert!(ctx.holds(&Predicate::Not(&FALSE)).unwrap());
    }

    #[test]
    fn fills_requires_every_house() {
        let chart = ChartBuilder::new(1)
            .place(Graha::Surya, 1, 1.0)
            .place(Graha::Chandra, 1, 20.0)
            .place(Graha::Mangal, 4, 4.0)
            .place(Graha::Buddh, 4, 28.0)
            .place(Graha::Guru, 4, 15.0)
            .place(Graha::Shukra, 1, 28.0)
            .place(Graha::Shani, 1, 20.0)
            .place(Graha::Rahu, 9, 5.0)
            .place(Graha::Ketu, 3, 5.0)
            .build()
            .unwrap();
        let ctx = EvalContext::new(&chart);
        let gada = Predicate::Fills {
            set: GrahaSet::Sapta,
            from: Reference::Ascendant,
            houses: &[1, 4],
        };
        assert!(ctx.holds(&gada).unwrap());
        let kamala = Predicate::Fills {
            set: GrahaSet::Sapta,
            from: Reference::Ascendant,
            houses: &KENDRA,
        };
        assert!(!ctx.holds(&kamala).unwrap());
    }

    #[test]
    fn match_relative_targets() {
        let chart = leo_chart();
        let ctx = EvalContext::new(&chart);
        let first_debilitated = Predicate::Dignity {
            target: Target::Involved(0),
            test: DignityTest::Debilitated,
        };
        assert_eq!(
            ctx.holds(&first_debilitated).unwrap_err(),
            RuleError::NoInvolvedPlanet(0)
        );

        // Moon debilitated in Scorpio, Sun exalted in Aries.
        let moon_first = [Graha::Chandra, Graha::Surya];
        let scoped = ctx.for_match(&moon_first);
        assert!(scoped.holds(&first_debilitated).unwrap());
        assert_eq!(scoped.resolve(Target::Involved(1)).unwrap(), Graha::Surya);
        assert_eq!(
            scoped.resolve(Target::Involved(2)).unwrap_err(),
            RuleError::NoInvolvedPlanet(2)
        );
        let sun_only = [Graha::Surya];
        assert!(!ctx.for_match(&sun_only).holds(&first_debilitated).unwrap());
    }

    #[test]
    fn any_involved_binds_each_planet() {
        let chart = leo_chart();
        let ctx = EvalContext::new(&chart);
        const ANY_DEBILITATED: Predicate = Predicate::AnyInvolved(&Predicate::Dignity {
            target: Target::Each,
            test: DignityTest::Debilitated,
        });
        let with_moon = [Graha::Surya, Graha::Chandra];
        let without = [Graha::Surya, Graha::Guru];
        assert!(ctx.for_match(&with_moon).holds(&ANY_DEBILITATED).unwrap());
        assert!(!ctx.for_match(&without).holds(&ANY_DEBILITATED).unwrap());
        assert_eq!(
            ctx.resolve(Target::Each).unwrap_err(),
            RuleError::UnboundEach
        );
    }

    #[test]
    fn quantifiers_over_sets() {
        let chart = leo_chart();
        let ctx = EvalContext::new(&chart);
        const EXALTED: Predicate = Predicate::Dignity {
            target: Target::Each,
            test: DignityTest::Exalted,
        };
        // Only the Sun is exalted.
        assert!(ctx.holds(&Predicate::AnyOf { set: GrahaSet::Sapta, when: &EXALTED }).unwrap());
        assert!(!ctx.holds(&Predicate::AllOf { set: GrahaSet::Sapta, when: &EXALTED }).unwrap());
        let sun_only = Predicate::AllOf {
            set: GrahaSet::Only(&[Graha::Surya]),
            when: &EXALTED,
        };
        assert!(ctx.holds(&sun_only).unwrap());
    }

    #[test]
    fn signs_and_dispositors() {
        let chart = leo_chart();
        let ctx = EvalContext::new(&chart);
        // Moon in Scorpio: dispositor Mars, in Gemini, disposited by Mercury.
        const MOON_DISPOSITOR: Target = Target::DispositorOf(&Target::Graha(Graha::Chandra));
        assert_eq!(ctx.resolve(MOON_DISPOSITOR).unwrap(), Graha::Mangal);
        assert_eq!(
            ctx.resolve(Target::DispositorOf(&MOON_DISPOSITOR)).unwrap(),
            Graha::Buddh
        );
        assert!(ctx.holds(&Predicate::AscendantIn(&[1, 5, 9])).unwrap());
        let moon_in_water = Predicate::InSigns {
            target: Target::Graha(Graha::Chandra),
            signs: &[4, 8, 12],
        };
        assert!(ctx.holds(&moon_in_water).unwrap());
        assert_eq!(
            ctx.holds(&Predicate::AscendantIn(&[0])).unwrap_err(),
            RuleError::InvalidSign(0)
        );
    }

    #[test]
    fn lords_counted_from_the_moon() {
        let chart = leo_chart();
        let ctx = EvalContext::new(&chart);
        // Moon in Scorpio: 1st Mars, 5th Jupiter (Pisces), 10th Sun (Leo).
        assert_eq!(ctx.lord_from(MOON, 1).unwrap(), Graha::Mangal);
        assert_eq!(ctx.lord_from(MOON, 5).unwrap(), Graha::Guru);
        assert_eq!(ctx.lord_from(MOON, 10).unwrap(), Graha::Surya);
        assert_eq!(ctx.lord_from(Reference::Ascendant, 10).unwrap(), Graha::Shukra);
    }

    #[test]
    fn all_in_modality() {
        let chart = leo_chart();
        let ctx = EvalContext::new(&chart);
        let rajju = Predicate::AllInModality {
            set: GrahaSet::Sapta,
            modality: RashiModality::Movable,
        };
        assert!(!ctx.holds(&rajju).unwrap());
    }
}
