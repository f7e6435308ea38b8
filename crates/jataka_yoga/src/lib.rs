//! Declarative Vedic yoga rules and their evaluator.
//!
//! A [`YogaRule`] names a pattern over a validated [`jataka_base::Chart`]:
//! a [`Predicate`] tree for one-off combinations, or a generator pattern
//! for families with many instances (lord pairs, exchanges, per-planet
//! conditions). [`evaluate_rule`] turns a rule and a chart into zero or more
//! [`RawMatch`]es. Strength, de-duplication and ordering happen downstream
//! in the engine.
//!
//! The built-in [`catalog`] is read-only and versioned by
//! [`CATALOG_VERSION`].

pub mod catalog;
pub mod error;
pub mod evaluate;
pub mod predicate;
pub mod rule;
pub mod types;

pub use catalog::{CATALOG_VERSION, catalog, find_rule, rules_in};
pub use error::RuleError;
pub use evaluate::{cancellation_reasons, evaluate_rule};
pub use predicate::{
    DignityTest, EvalContext, GrahaSet, MOON, Predicate, Reference, SUN, Target,
};
pub use rule::{
    ANY_RELATION, CancelCondition, ExchangeKind, FormationPart, GrahaCondition, LordRelation,
    Pattern, YogaRule,
};
pub use types::{
    ALL_CATEGORIES, AgeRange, BphsCategory, Fact, Impact, LifeArea, PatternFamily, RawMatch,
    Strength, StrengthHint, Structure,
};
