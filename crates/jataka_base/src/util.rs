//! Shared utility functions for chart arithmetic.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Shortest-path angular separation between two longitudes, in [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let diff = (normalize_360(a) - normalize_360(b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// House number (1-12) of `target` counted from `reference`, both 1-based.
///
/// `house_from(4, 4)` = 1, `house_from(4, 7)` = 4, `house_from(7, 4)` = 10.
pub const fn house_from(reference: u8, target: u8) -> u8 {
    ((target as i16 - reference as i16).rem_euclid(12) + 1) as u8
}

/// Ordinal suffix for a house number ("1st", "2nd", "11th").
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
