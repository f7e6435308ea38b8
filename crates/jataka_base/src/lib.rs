//! Chart model and classical lookup tables for yoga detection.
//!
//! This crate provides:
//! - The nine grahas and twelve rashis with their fixed relationships
//! - Validated natal charts built from a serde wire record
//! - Whole-sign house lordship and house groupings
//! - Dignity, combustion and numeric planet strength
//! - Graha drishti, navamsha derivation and supplied dasha periods
//!
//! Nothing here computes positions; charts come from an external producer.

pub mod bhava;
pub mod chart;
pub mod combustion;
pub mod dignity;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod navamsha;
pub mod rashi;
pub mod strength;
pub mod temporal;
pub mod util;

pub use bhava::{
    APOKLIMA, DUSTHANA, HouseGroup, HouseLordship, KENDRA, PANAPHARA, TRIKONA, UPACHAYA,
    house_category_score, rashi_of_house,
};
pub use chart::{Chart, ChartBuilder, ChartInput, Placement, PlacementInput};
pub use combustion::{CombustionStatus, can_be_combust, combustion_status, combustion_threshold};
pub use dignity::{
    BeneficNature, Dignity, NaisargikaMaitri, debilitation_rashi, dignity_in_rashi,
    exaltation_rashi, is_debilitated_in, is_exalted_in, is_natural_benefic, is_own_sign,
    is_strong_sign, naisargika_maitri, natural_nature, own_signs,
};
pub use drishti::{aspect_offsets, aspects_house};
pub use error::ValidationError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, TARA_GRAHAS, rashi_lord, rashis_ruled_by};
pub use navamsha::navamsha_rashi;
pub use rashi::{ALL_RASHIS, Rashi, RashiElement, RashiModality, rashi_distance};
pub use strength::{ChartStrengths, PlanetStrength, planet_strength};
pub use temporal::{DashaLevel, TemporalPeriod};
pub use util::{house_from, ordinal};
