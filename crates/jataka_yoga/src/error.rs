//! Structural failures of a single rule.

use thiserror::Error;

/// A rule that cannot be evaluated as authored.
///
/// Raised by the evaluator for malformed catalog entries. The engine records
/// it as a diagnostic for that rule and keeps evaluating the rest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RuleError {
    #[error("house {0} outside 1..=12")]
    InvalidHouse(u8),
    #[error("house list is empty")]
    EmptyHouses,
    #[error("sign {0} outside 1..=12")]
    InvalidSign(u8),
    #[error("sign list is empty")]
    EmptySigns,
    #[error("planet set is empty")]
    EmptySet,
    #[error("count {count} not satisfiable by {available} candidates")]
    InvalidCount { count: u8, available: usize },
    #[error("match has no formation planets")]
    EmptyFormation,
    #[error("no formation planet at position {0}")]
    NoInvolvedPlanet(u8),
    #[error("'each' target used outside a quantifier")]
    UnboundEach,
}
