//! Graha dignity tables and classification.
//!
//! Exaltation/debilitation signs, moolatrikona ranges, own signs, natural
//! (naisargika) friendship, sign dignity, and benefic/malefic nature.
//!
//! Tables follow BPHS Ch.3.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;

// ---------------------------------------------------------------------------
// Exaltation & Debilitation
// ---------------------------------------------------------------------------

/// Exaltation rashi for sapta grahas. None for Rahu/Ketu.
///
/// Sun Mesha, Moon Vrishabha, Mars Makara, Mercury Kanya,
/// Jupiter Karka, Venus Meena, Saturn Tula.
pub const fn exaltation_rashi(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Surya => Some(Rashi::Mesha),
        Graha::Chandra => Some(Rashi::Vrishabha),
        Graha::Mangal => Some(Rashi::Makara),
        Graha::Buddh => Some(Rashi::Kanya),
        Graha::Guru => Some(Rashi::Karka),
        Graha::Shukra => Some(Rashi::Meena),
        Graha::Shani => Some(Rashi::Tula),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation rashi = 7th from exaltation. None for Rahu/Ketu.
pub const fn debilitation_rashi(graha: Graha) -> Option<Rashi> {
    match exaltation_rashi(graha) {
        Some(r) => Some(r.nth(7)),
        None => None,
    }
}

// ---------------------------------------------------------------------------
// Moolatrikona & own signs
// ---------------------------------------------------------------------------

/// Moolatrikona range: (rashi, start_deg_in_rashi, end_deg_in_rashi).
///
/// Sun 0-20 Leo, Moon 4-20 Tau, Mars 0-12 Ari, Mercury 16-20 Vir,
/// Jupiter 0-10 Sag, Venus 0-15 Lib, Saturn 0-20 Aqu.
pub const fn moolatrikona_range(graha: Graha) -> Option<(Rashi, f64, f64)> {
    match graha {
        Graha::Surya => Some((Rashi::Simha, 0.0, 20.0)),
        Graha::Chandra => Some((Rashi::Vrishabha, 4.0, 20.0)),
        Graha::Mangal => Some((Rashi::Mesha, 0.0, 12.0)),
        Graha::Buddh => Some((Rashi::Kanya, 16.0, 20.0)),
        Graha::Guru => Some((Rashi::Dhanu, 0.0, 10.0)),
        Graha::Shukra => Some((Rashi::Tula, 0.0, 15.0)),
        Graha::Shani => Some((Rashi::Kumbha, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Own-sign rashis. Empty for Rahu/Ketu.
pub fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

pub fn is_exalted_in(graha: Graha, rashi: Rashi) -> bool {
    exaltation_rashi(graha) == Some(rashi)
}

pub fn is_debilitated_in(graha: Graha, rashi: Rashi) -> bool {
    debilitation_rashi(graha) == Some(rashi)
}

pub fn is_own_sign(graha: Graha, rashi: Rashi) -> bool {
    own_signs(graha).contains(&rashi)
}

fn is_in_moolatrikona(graha: Graha, rashi: Rashi, degree_in_rashi: f64) -> bool {
    match moolatrikona_range(graha) {
        Some((mt, start, end)) => mt == rashi && degree_in_rashi >= start && degree_in_rashi < end,
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Natural friendship (naisargika maitri)
// ---------------------------------------------------------------------------

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaisargikaMaitri {
    Friend,
    Enemy,
    Neutral,
}

/// Natural friendship of `graha` towards `other` (BPHS table).
/// Neutral for any pairing involving Rahu/Ketu.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        (Chandra, Surya | Buddh) => Friend,

        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

// ---------------------------------------------------------------------------
// Sign dignity
// ---------------------------------------------------------------------------

/// Dignity of a graha in a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    Friendly,
    Neutral,
    Enemy,
    Debilitated,
}

impl Dignity {
    /// Dignity component of the numeric planet strength (0-100).
    pub const fn score(self) -> f64 {
        match self {
            Self::Exalted => 100.0,
            Self::Moolatrikona | Self::OwnSign => 80.0,
            Self::Friendly | Self::Neutral => 60.0,
            Self::Enemy => 20.0,
            Self::Debilitated => 0.0,
        }
    }

    /// Exalted, moolatrikona or own sign.
    pub const fn is_dignified(self) -> bool {
        matches!(self, Self::Exalted | Self::Moolatrikona | Self::OwnSign)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "exalted",
            Self::Moolatrikona => "moolatrikona",
            Self::OwnSign => "own sign",
            Self::Friendly => "friendly sign",
            Self::Neutral => "neutral sign",
            Self::Enemy => "enemy sign",
            Self::Debilitated => "debilitated",
        }
    }
}

/// Naisargika dignity of a graha at `degree_in_rashi` within `rashi`.
///
/// Priority: exaltation > debilitation > moolatrikona > own sign > natural
/// friendship with the rashi lord. Rahu/Ketu are always Neutral.
pub fn dignity_in_rashi(graha: Graha, rashi: Rashi, degree_in_rashi: f64) -> Dignity {
    if graha.is_node() {
        return Dignity::Neutral;
    }
    if is_exalted_in(graha, rashi) {
        return Dignity::Exalted;
    }
    if is_debilitated_in(graha, rashi) {
        return Dignity::Debilitated;
    }
    if is_in_moolatrikona(graha, rashi, degree_in_rashi) {
        return Dignity::Moolatrikona;
    }
    if is_own_sign(graha, rashi) {
        return Dignity::OwnSign;
    }
    match naisargika_maitri(graha, rashi_lord(rashi)) {
        NaisargikaMaitri::Friend => Dignity::Friendly,
        NaisargikaMaitri::Enemy => Dignity::Enemy,
        NaisargikaMaitri::Neutral => Dignity::Neutral,
    }
}

/// Exalted, own sign or a friend's sign: the "strong sign" test several
/// yogas (Saraswati, Lakshmi) place on their key planet.
pub fn is_strong_sign(graha: Graha, rashi: Rashi) -> bool {
    !graha.is_node()
        && (is_exalted_in(graha, rashi)
            || is_own_sign(graha, rashi)
            || naisargika_maitri(graha, rashi_lord(rashi)) == NaisargikaMaitri::Friend)
}

// ---------------------------------------------------------------------------
// Benefic/Malefic
// ---------------------------------------------------------------------------

/// Natural benefic/malefic classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeneficNature {
    Benefic,
    Malefic,
}

/// Natural benefic/malefic for each graha. Moon and Mercury count as benefic
/// without phase or association adjustments.
pub const fn natural_nature(graha: Graha) -> BeneficNature {
    match graha {
        Graha::Chandra | Graha::Buddh | Graha::Guru | Graha::Shukra => BeneficNature::Benefic,
        Graha::Surya | Graha::Mangal | Graha::Shani | Graha::Rahu | Graha::Ketu => {
            BeneficNature::Malefic
        }
    }
}

pub const fn is_natural_benefic(graha: Graha) -> bool {
    matches!(natural_nature(graha), BeneficNature::Benefic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::{ALL_GRAHAS, SAPTA_GRAHAS};

    #[test]
    fn debilitation_is_seventh_from_exaltation() {
        assert_eq!(debilitation_rashi(Graha::Surya), Some(Rashi::Tula));
        assert_eq!(debilitation_rashi(Graha::Chandra), Some(Rashi::Vrischika));
        assert_eq!(debilitation_rashi(Graha::Guru), Some(Rashi::Makara));
        assert_eq!(debilitation_rashi(Graha::Shukra), Some(Rashi::Kanya));
        assert_eq!(debilitation_rashi(Graha::Rahu), None);
    }

    #[test]
    fn exaltation_and_debilitation_never_coincide() {
        for g in SAPTA_GRAHAS {
            assert_ne!(exaltation_rashi(g), debilitation_rashi(g));
        }
    }

    #[test]
    fn own_sign_counts() {
        assert_eq!(own_signs(Graha::Surya).len(), 1);
        assert_eq!(own_signs(Graha::Guru).len(), 2);
        assert!(own_signs(Graha::Ketu).is_empty());
    }

    #[test]
    fn friendship_table_spot_checks() {
        assert_eq!(naisargika_maitri(Graha::Surya, Graha::Guru), NaisargikaMaitri::Friend);
        assert_eq!(naisargika_maitri(Graha::Surya, Graha::Shani), NaisargikaMaitri::Enemy);
        assert_eq!(naisargika_maitri(Graha::Surya, Graha::Buddh), NaisargikaMaitri::Neutral);
        assert_eq!(naisargika_maitri(Graha::Chandra, Graha::Shani), NaisargikaMaitri::Neutral);
        assert_eq!(naisargika_maitri(Graha::Guru, Graha::Shukra), NaisargikaMaitri::Enemy);
        assert_eq!(naisargika_maitri(Graha::Rahu, Graha::Surya), NaisargikaMaitri::Neutral);
    }

    #[test]
    fn dignity_priority() {
        assert_eq!(dignity_in_rashi(Graha::Guru, Rashi::Karka, 5.0), Dignity::Exalted);
        assert_eq!(dignity_in_rashi(Graha::Guru, Rashi::Makara, 5.0), Dignity::Debilitated);
        assert_eq!(dignity_in_rashi(Graha::Guru, Rashi::Dhanu, 5.0), Dignity::Moolatrikona);
        assert_eq!(dignity_in_rashi(Graha::Guru, Rashi::Dhanu, 15.0), Dignity::OwnSign);
        assert_eq!(dignity_in_rashi(Graha::Guru, Rashi::Simha, 15.0), Dignity::Friendly);
        assert_eq!(dignity_in_rashi(Graha::Guru, Rashi::Kumbha, 15.0), Dignity::Neutral);
        assert_eq!(dignity_in_rashi(Graha::Guru, Rashi::Tula, 15.0), Dignity::Enemy);
    }

    #[test]
    fn nodes_are_neutral() {
        for r in crate::rashi::ALL_RASHIS {
            assert_eq!(dignity_in_rashi(Graha::Rahu, r, 10.0), Dignity::Neutral);
        }
    }

    #[test]
    fn scores_ordered() {
        assert!(Dignity::Exalted.score() > Dignity::OwnSign.score());
        assert!(Dignity::OwnSign.score() > Dignity::Neutral.score());
        assert!(Dignity::Neutral.score() > Dignity::Enemy.score());
        assert!(Dignity::Enemy.score() > Dignity::Debilitated.score());
    }

    #[test]
    fn strong_sign_for_jupiter() {
        assert!(is_strong_sign(Graha::Guru, Rashi::Karka));
        assert!(is_strong_sign(Graha::Guru, Rashi::Meena));
        assert!(is_strong_sign(Graha::Guru, Rashi::Simha));
        assert!(!is_strong_sign(Graha::Guru, Rashi::Makara));
        assert!(!is_strong_sign(Graha::Guru, Rashi::Mithuna));
    }

    #[test]
    fn benefics() {
        let benefics: Vec<_> = ALL_GRAHAS.into_iter().filter(|&g| is_natural_benefic(g)).collect();
        assert_eq!(benefics, vec![Graha::Chandra, Graha::Buddh, Graha::Guru, Graha::Shukra]);
    }
}
