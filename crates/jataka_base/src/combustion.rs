//! Combustion (Asta/Moudhya) detection for grahas.
//!
//! A graha is combust when it is too close to the Sun, with thresholds
//! varying by planet and retrograde status per BPHS.

use crate::graha::Graha;
use crate::util::angular_separation;

/// BPHS combustion threshold (degrees from Sun) for a graha.
///
/// Returns `None` for Sun, Rahu, and Ketu (not applicable).
/// For Mercury and Venus, retrograde thresholds are tighter.
pub fn combustion_threshold(graha: Graha, is_retrograde: bool) -> Option<f64> {
    match graha {
        Graha::Surya | Graha::Rahu | Graha::Ketu => None,
        Graha::Chandra => Some(12.0),
        Graha::Mangal => Some(17.0),
        Graha::Buddh => Some(if is_retrograde { 12.0 } else { 14.0 }),
        Graha::Guru => Some(11.0),
        Graha::Shukra => Some(if is_retrograde { 8.0 } else { 10.0 }),
        Graha::Shani => Some(15.0),
    }
}

/// Whether a graha can be combust at all.
pub const fn can_be_combust(graha: Graha) -> bool {
    !matches!(graha, Graha::Surya | Graha::Rahu | Graha::Ketu)
}

/// Combustion status of one graha against the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustionStatus {
    /// Shortest-path distance from the Sun in degrees.
    pub distance_deg: f64,
    /// Strictly inside the orb.
    pub is_combust: bool,
}

/// Combustion status for a graha at `graha_lon` with the Sun at `sun_lon`.
///
/// A graha at exactly the threshold distance is **not** combust.
/// Returns `None` for Sun, Rahu, and Ketu.
pub fn combustion_status(
    graha: Graha,
    graha_lon: f64,
    sun_lon: f64,
    is_retrograde: bool,
) -> Option<CombustionStatus> {
    let threshold = combustion_threshold(graha, is_retrograde)?;
    let distance_deg = angular_separation(graha_lon, sun_lon);
    Some(CombustionStatus {
        distance_deg,
        is_combust: distance_deg < threshold,
    })
}

/// Check if a single graha is combust. `false` for Sun, Rahu, and Ketu.
pub fn is_combust(graha: Graha, graha_lon: f64, sun_lon: f64, is_retrograde: bool) -> bool {
    combustion_status(graha, graha_lon, sun_lon, is_retrograde).is_some_and(|s| s.is_combust)
}
