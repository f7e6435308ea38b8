//! Validated natal chart: the immutable input to yoga evaluation.
//!
//! A [`ChartInput`] is the wire record produced by an external chart
//! computation. [`Chart::from_input`] validates it (ranges, whole-sign
//! consistency, dignity flag invariants) and derives any dignity, combustion
//! and vargottama flags the producer left out. Once built, a `Chart` is never
//! mutated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::combustion::{can_be_combust, combustion_status};
use crate::dignity::{Dignity, dignity_in_rashi, is_debilitated_in, is_exalted_in, is_own_sign};
use crate::error::ValidationError;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::navamsha::navamsha_rashi;
use crate::rashi::Rashi;
use crate::temporal::TemporalPeriod;
use crate::util::house_from;

// ---------------------------------------------------------------------------
// Wire records
// ---------------------------------------------------------------------------

/// One planet's placement as supplied by the chart producer.
///
/// Dignity, combustion and vargottama flags are optional: absent flags are
/// derived, present flags are validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementInput {
    pub planet: Graha,
    /// Sign number, 1-12.
    pub sign: u8,
    /// Whole-sign house from the ascendant, 1-12.
    pub house: u8,
    /// Degrees within the sign, [0, 30).
    pub degree: f64,
    pub retrograde: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combust: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combustion_distance_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exalted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debilitated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub own_sign: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vargottama: Option<bool>,
}

impl PlacementInput {
    /// Bare placement with every optional flag left for derivation.
    pub fn new(planet: Graha, sign: u8, house: u8, degree: f64, retrograde: bool) -> Self {
        Self {
            planet,
            sign,
            house,
            degree,
            retrograde,
            combust: None,
            combustion_distance_deg: None,
            exalted: None,
            debilitated: None,
            own_sign: None,
            vargottama: None,
        }
    }
}

/// A chart as supplied by the chart producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    /// Ascendant sign number, 1-12.
    pub ascendant_sign: u8,
    pub placements: Vec<PlacementInput>,
    /// Navamsha (D9) sign numbers, used for vargottama checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_placements: Option<BTreeMap<Graha, u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_periods: Option<Vec<TemporalPeriod>>,
}

impl ChartInput {
    /// Fill in the secondary chart from each placement's sign and degree,
    /// unless one was supplied. Placements with out-of-range signs are skipped
    /// here and rejected later by validation.
    pub fn derive_navamsha(&mut self) {
        if self.secondary_placements.is_some() {
            return;
        }
        let derived = self
            .placements
            .iter()
            .filter_map(|p| {
                let rashi = Rashi::from_number(p.sign)?;
                Some((p.planet, navamsha_rashi(rashi, p.degree).number()))
            })
            .collect();
        self.secondary_placements = Some(derived);
    }
}

// ---------------------------------------------------------------------------
// Validated chart
// ---------------------------------------------------------------------------

/// A validated placement with all flags resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub graha: Graha,
    pub rashi: Rashi,
    /// Whole-sign house from the ascendant, 1-12.
    pub house: u8,
    /// Degrees within the rashi, [0, 30).
    pub degree: f64,
    pub retrograde: bool,
    pub combust: bool,
    /// Distance from the Sun, when known.
    pub combustion_distance_deg: Option<f64>,
    pub exalted: bool,
    pub debilitated: bool,
    pub own_sign: bool,
    pub vargottama: bool,
    /// Sign dignity from the static tables.
    pub dignity: Dignity,
}

impl Placement {
    /// Sidereal longitude reconstructed from sign and degree.
    pub fn longitude(&self) -> f64 {
        self.rashi.start_longitude() + self.degree
    }
}

/// An immutable, validated natal chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    ascendant: Rashi,
    /// Indexed by `Graha::index()`.
    placements: [Placement; 9],
    /// Navamsha rashis indexed by `Graha::index()`, when supplied. Planets
    /// a partial secondary chart leaves out have no entry.
    secondary: Option<[Option<Rashi>; 9]>,
    periods: Option<Vec<TemporalPeriod>>,
}

impl Chart {
    /// Validate a chart record and resolve every placement flag.
    pub fn from_input(input: &ChartInput) -> Result<Self, ValidationError> {
        let ascendant = Rashi::from_number(input.ascendant_sign)
            .ok_or(ValidationError::AscendantOutOfRange(input.ascendant_sign))?;

        let mut slots: [Option<&PlacementInput>; 9] = [None; 9];
        for p in &input.placements {
            validate_ranges(p)?;
            let expected = house_from(ascendant.number(), p.sign);
            if p.house != expected {
                return Err(ValidationError::HouseSignMismatch {
                    graha: p.planet,
                    sign: p.sign,
                    house: p.house,
                    expected,
                });
            }
            let slot = &mut slots[p.planet.index() as usize];
            if slot.is_some() {
                return Err(ValidationError::DuplicatePlanet(p.planet));
            }
            *slot = Some(p);
        }
        let mut inputs = Vec::with_capacity(9);
        for g in ALL_GRAHAS {
            inputs.push(slots[g.index() as usize].ok_or(ValidationError::MissingPlanet(g))?);
        }

        let secondary = match &input.secondary_placements {
            Some(map) => Some(resolve_secondary(map)?),
            None => None,
        };

        let sun = inputs[Graha::Surya.index() as usize];
        let sun_lon = sun_longitude(sun);

        let mut placements = [placeholder(); 9];
        for g in ALL_GRAHAS {
            let i = g.index() as usize;
            let d9 = secondary.and_then(|s| s[i]);
            placements[i] = resolve_placement(inputs[i], sun_lon, d9)?;
        }

        if let Some(periods) = &input.temporal_periods {
            if let Some(bad) = periods.iter().find(|p| !p.is_well_formed()) {
                return Err(ValidationError::InvalidPeriod {
                    lord: bad.lord,
                    start_age: bad.start_age,
                    end_age: bad.end_age,
                });
            }
        }

        Ok(Self {
            ascendant,
            placements,
            secondary,
            periods: input.temporal_periods.clone(),
        })
    }

    pub fn ascendant(&self) -> Rashi {
        self.ascendant
    }

    pub fn placements(&self) -> &[Placement; 9] {
        &self.placements
    }

    pub fn placement(&self, graha: Graha) -> &Placement {
        &self.placements[graha.index() as usize]
    }

    pub fn rashi_of(&self, graha: Graha) -> Rashi {
        self.placement(graha).rashi
    }

    /// House of a graha counted from the ascendant.
    pub fn house_of(&self, graha: Graha) -> u8 {
        self.placement(graha).house
    }

    /// House of `target` counted from `reference`'s house (reference = 1).
    pub fn house_from_graha(&self, reference: Graha, target: Graha) -> u8 {
        house_from(self.house_of(reference), self.house_of(target))
    }

    /// Grahas occupying house `house` (from the ascendant), in graha order.
    pub fn occupants(&self, house: u8) -> impl Iterator<Item = Graha> + '_ {
        self.placements.iter().filter(move |p| p.house == house).map(|p| p.graha)
    }

    pub fn is_occupied(&self, house: u8) -> bool {
        self.occupants(house).next().is_some()
    }

    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }

    /// Navamsha rashi of a graha, when the secondary chart lists it.
    pub fn secondary_rashi(&self, graha: Graha) -> Option<Rashi> {
        self.secondary.and_then(|s| s[graha.index() as usize])
    }

    pub fn periods(&self) -> Option<&[TemporalPeriod]> {
        self.periods.as_deref()
    }

    /// Attach a navamsha chart computed from each placement's degree, when
    /// none was supplied, and refresh the vargottama flags from it.
    pub fn with_derived_navamsha(mut self) -> Self {
        if self.secondary.is_some() {
            return self;
        }
        let mut d9 = [None; 9];
        for p in &mut self.placements {
            let rashi = navamsha_rashi(p.rashi, p.degree);
            d9[p.graha.index() as usize] = Some(rashi);
            p.vargottama = rashi == p.rashi;
        }
        self.secondary = Some(d9);
        self
    }
}

fn validate_ranges(p: &PlacementInput) -> Result<(), ValidationError> {
    if !(1..=12).contains(&p.sign) {
        return Err(ValidationError::SignOutOfRange {
            graha: p.planet,
            value: p.sign,
        });
    }
    if !(1..=12).contains(&p.house) {
        return Err(ValidationError::HouseOutOfRange {
            graha: p.planet,
            value: p.house,
        });
    }
    if !p.degree.is_finite() || !(0.0..30.0).contains(&p.degree) {
        return Err(ValidationError::DegreeOutOfRange {
            graha: p.planet,
            value: p.degree,
        });
    }
    Ok(())
}

fn resolve_secondary(map: &BTreeMap<Graha, u8>) -> Result<[Option<Rashi>; 9], ValidationError> {
    let mut out = [None; 9];
    for (&graha, &value) in map {
        let rashi = Rashi::from_number(value)
            .ok_or(ValidationError::SecondarySignOutOfRange { graha, value })?;
        out[graha.index() as usize] = Some(rashi);
    }
    Ok(out)
}

fn sun_longitude(sun: &PlacementInput) -> f64 {
    let rashi = Rashi::from_number(sun.sign).unwrap_or(Rashi::Mesha);
    rashi.start_longitude() + sun.degree
}

fn check_flag(
    graha: Graha,
    supplied: Option<bool>,
    derived: bool,
    flag: &'static str,
) -> Result<bool, ValidationError> {
    match supplied {
        Some(v) if v != derived => Err(ValidationError::DignityMismatch { graha, flag }),
        _ => Ok(derived),
    }
}

fn resolve_placement(
    p: &PlacementInput,
    sun_lon: f64,
    d9: Option<Rashi>,
) -> Result<Placement, ValidationError> {
    let graha = p.planet;
    let rashi = Rashi::from_number(p.sign).ok_or(ValidationError::SignOutOfRange {
        graha,
        value: p.sign,
    })?;

    if p.exalted == Some(true) && p.debilitated == Some(true) {
        return Err(ValidationError::ExaltedAndDebilitated(graha));
    }
    let exalted = check_flag(graha, p.exalted, is_exalted_in(graha, rashi), "exalted")?;
    let debilitated = check_flag(graha, p.debilitated, is_debilitated_in(graha, rashi), "debilitated")?;
    let own_sign = check_flag(graha, p.own_sign, is_own_sign(graha, rashi), "own_sign")?;

    if p.combust == Some(true) && !can_be_combust(graha) {
        return Err(ValidationError::CombustNotApplicable(graha));
    }
    let longitude = rashi.start_longitude() + p.degree;
    let status = combustion_status(graha, longitude, sun_lon, p.retrograde);
    let combust = p
        .combust
        .unwrap_or_else(|| status.is_some_and(|s| s.is_combust));
    let combustion_distance_deg = p
        .combustion_distance_deg
        .or_else(|| status.map(|s| s.distance_deg));

    let vargottama = match d9 {
        Some(d9) => check_flag(graha, p.vargottama, d9 == rashi, "vargottama")?,
        None if p.vargottama == Some(true) => {
            return Err(ValidationError::VargottamaWithoutSecondary(graha));
        }
        None => false,
    };

    Ok(Placement {
        graha,
        rashi,
        house: p.house,
        degree: p.degree,
        retrograde: p.retrograde,
        combust,
        combustion_distance_deg,
        exalted,
        debilitated,
        own_sign,
        vargottama,
        dignity: dignity_in_rashi(graha, rashi, p.degree),
    })
}

const fn placeholder() -> Placement {
    Placement {
        graha: Graha::Surya,
        rashi: Rashi::Mesha,
        house: 1,
        degree: 0.0,
        retrograde: false,
        combust: false,
        combustion_distance_deg: None,
        exalted: false,
        debilitated: false,
        own_sign: false,
        vargottama: false,
        dignity: Dignity::Neutral,
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Convenience builder that fills in whole-sign houses from the ascendant.
///
/// ```
/// use jataka_base::{ChartBuilder, Graha};
///
/// let chart = ChartBuilder::new(5)
///     .place(Graha::Surya, 1, 10.0)
///     .place(Graha::Chandra, 8, 12.0)
///     .place(Graha::Mangal, 3, 4.0)
///     .place(Graha::Buddh, 1, 28.0)
///     .place(Graha::Guru, 11, 15.0)
///     .place(Graha::Shukra, 2, 2.0)
///     .place(Graha::Shani, 6, 20.0)
///     .place(Graha::Rahu, 9, 5.0)
///     .place(Graha::Ketu, 3, 5.0)
///     .build()
///     .unwrap();
/// assert_eq!(chart.house_of(Graha::Guru), 7);
/// ```
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    input: ChartInput,
}

impl ChartBuilder {
    /// Start a chart with a 1-based ascendant sign.
    pub fn new(ascendant_sign: u8) -> Self {
        Self {
            input: ChartInput {
                ascendant_sign,
                placements: Vec::with_capacity(9),
                secondary_placements: None,
                temporal_periods: None,
            },
        }
    }

    /// Place a graha in a sign (1-12); the house is derived.
    pub fn place(mut self, graha: Graha, sign: u8, degree: f64) -> Self {
        let house = house_from(self.input.ascendant_sign, sign);
        self.input
            .placements
            .push(PlacementInput::new(graha, sign, house, degree, false));
        self
    }

    /// Place a graha by house from the ascendant; the sign is derived.
    pub fn place_in_house(self, graha: Graha, house: u8, degree: f64) -> Self {
        let sign = (self.input.ascendant_sign as u16 + house as u16 + 10) % 12 + 1;
        self.place(graha, sign as u8, degree)
    }

    /// Mark an already placed graha retrograde.
    pub fn retrograde(mut self, graha: Graha) -> Self {
        self.placements_of(graha).for_each(|p| p.retrograde = true);
        self
    }

    /// Override the combustion flag of an already placed graha.
    pub fn combust(mut self, graha: Graha, combust: bool) -> Self {
        self.placements_of(graha).for_each(|p| p.combust = Some(combust));
        self
    }

    /// Set a navamsha sign (1-12) for a graha.
    pub fn secondary(mut self, graha: Graha, sign: u8) -> Self {
        self.input
            .secondary_placements
            .get_or_insert_with(BTreeMap::new)
            .insert(graha, sign);
        self
    }

    /// Add a planetary period.
    pub fn period(mut self, period: TemporalPeriod) -> Self {
        self.input
            .temporal_periods
            .get_or_insert_with(Vec::new)
            .push(period);
        self
    }

    pub fn input(&self) -> &ChartInput {
        &self.input
    }

    pub fn into_input(self) -> ChartInput {
        self.input
    }

    pub fn build(self) -> Result<Chart, ValidationError> {
        Chart::from_input(&self.input)
    }

    fn placements_of(&mut self, graha: Graha) -> impl Iterator<Item = &mut PlacementInput> {
        self.input
            .placements
            .iter_mut()
            .filter(move |p| p.planet == graha)
    }
}
