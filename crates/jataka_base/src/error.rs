//! Error types for chart validation.

use thiserror::Error;

use crate::graha::Graha;

/// A chart that cannot be evaluated. Raised at construction, before any
/// rule runs.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("ascendant sign {0} outside 1..=12")]
    AscendantOutOfRange(u8),
    #[error("{graha}: sign {value} outside 1..=12")]
    SignOutOfRange { graha: Graha, value: u8 },
    #[error("{graha}: house {value} outside 1..=12")]
    HouseOutOfRange { graha: Graha, value: u8 },
    #[error("{graha}: degree {value} outside [0, 30)")]
    DegreeOutOfRange { graha: Graha, value: f64 },
    #[error("missing placement for {0}")]
    MissingPlanet(Graha),
    #[error("duplicate placement for {0}")]
    DuplicatePlanet(Graha),
    #[error("{graha}: house {house} inconsistent with sign {sign} (whole-sign house from ascendant is {expected})")]
    HouseSignMismatch {
        graha: Graha,
        sign: u8,
        house: u8,
        expected: u8,
    },
    #[error("{0}: flagged both exalted and debilitated")]
    ExaltedAndDebilitated(Graha),
    #[error("{0} cannot be combust")]
    CombustNotApplicable(Graha),
    #[error("{graha}: supplied '{flag}' flag contradicts the chart")]
    DignityMismatch { graha: Graha, flag: &'static str },
    #[error("{0}: flagged vargottama without a secondary chart sign")]
    VargottamaWithoutSecondary(Graha),
    #[error("{graha}: secondary chart sign {value} outside 1..=12")]
    SecondarySignOutOfRange { graha: Graha, value: u8 },
    #[error("{lord} period [{start_age}, {end_age}) is not a valid age interval")]
    InvalidPeriod {
        lord: Graha,
        start_age: f64,
        end_age: f64,
    },
}
