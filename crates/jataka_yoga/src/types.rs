//! Classification enums and the raw match record.

use serde::{Deserialize, Serialize};

use jataka_base::Graha;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Classical weight of a yoga. Declaration order is report order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum BphsCategory {
    MajorPositive,
    Standard,
    MajorChallenge,
    MinorSubtle,
    NonClassical,
}

pub const ALL_CATEGORIES: [BphsCategory; 5] = [
    BphsCategory::MajorPositive,
    BphsCategory::Standard,
    BphsCategory::MajorChallenge,
    BphsCategory::MinorSubtle,
    BphsCategory::NonClassical,
];

impl BphsCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::MajorPositive => "MajorPositive",
            Self::Standard => "Standard",
            Self::MajorChallenge => "MajorChallenge",
            Self::MinorSubtle => "MinorSubtle",
            Self::NonClassical => "NonClassical",
        }
    }

    /// Case-insensitive parse of [`name`](Self::name).
    pub fn from_name(s: &str) -> Option<Self> {
        ALL_CATEGORIES
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
    }

    /// Categories that must carry a textual reference.
    pub const fn is_classical(self) -> bool {
        !matches!(self, Self::NonClassical)
    }

    pub const fn is_major(self) -> bool {
        matches!(self, Self::MajorPositive | Self::MajorChallenge)
    }
}

impl std::fmt::Display for BphsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Overall effect of a yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    Positive,
    Negative,
    Mixed,
}

/// Rule shape, used by importance classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Structure {
    /// A named combination of planets.
    Combination,
    /// A generic enumeration such as "lord of house X in house Y".
    PlacementEnumeration,
}

/// Recognized classical pattern families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternFamily {
    Mahapurusha,
    Chandra,
    Surya,
    Nabhasa,
    Raja,
    Dhana,
    Viparita,
    Parivartana,
    NeechaBhanga,
    Arishta,
    Vargottama,
}

impl PatternFamily {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahapurusha => "Pancha Mahapurusha",
            Self::Chandra => "Chandra",
            Self::Surya => "Surya",
            Self::Nabhasa => "Nabhasa",
            Self::Raja => "Raja",
            Self::Dhana => "Dhana",
            Self::Viparita => "Viparita Raja",
            Self::Parivartana => "Parivartana",
            Self::NeechaBhanga => "Neecha Bhanga",
            Self::Arishta => "Arishta",
            Self::Vargottama => "Vargottama",
        }
    }
}

/// Area of life a yoga speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifeArea {
    Wealth,
    Career,
    Status,
    Intellect,
    Learning,
    Relationships,
    Family,
    Children,
    Health,
    Longevity,
    Courage,
    Property,
    Fortune,
    Spirituality,
    Reputation,
}

// ---------------------------------------------------------------------------
// Strength
// ---------------------------------------------------------------------------

/// Strength bucket. Ordered weakest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    /// One bucket down; `Weak` stays `Weak`.
    pub const fn weaker(self) -> Self {
        match self {
            Self::VeryStrong => Self::Strong,
            Self::Strong => Self::Medium,
            Self::Medium | Self::Weak => Self::Weak,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "VeryStrong",
        }
    }

    pub const fn is_strong(self) -> bool {
        matches!(self, Self::Strong | Self::VeryStrong)
    }
}

/// How a rule's strength is derived from planet scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthHint {
    /// Minimum score over every involved planet.
    Dignity,
    /// Minimum score over the match's key planets.
    KeyPlanets,
    /// Authored bucket, for patterns that depend only on occupancy.
    Fixed(Strength),
}

/// Age range in years, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: f64,
    pub max: f64,
}

impl AgeRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

// ---------------------------------------------------------------------------
// Raw match
// ---------------------------------------------------------------------------

/// One formation fact, e.g. `("Jupiter", "Aquarius, 7th house")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub key: String,
    pub value: String,
}

impl Fact {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A rule that fired, before strength and classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawMatch {
    pub rule_id: &'static str,
    /// Formation planets in formation order, no repeats.
    pub involved: Vec<Graha>,
    /// Planets that carry the strength under [`StrengthHint::KeyPlanets`].
    /// Empty means "use `involved`".
    pub key_planets: Vec<Graha>,
    /// Label distinguishing independent instances of one rule, e.g. "9-10".
    pub instance: Option<String>,
    /// Ordered formation facts.
    pub facts: Vec<Fact>,
}

impl RawMatch {
    pub fn new(rule_id: &'static str, involved: Vec<Graha>) -> Self {
        Self {
            rule_id,
            involved,
            key_planets: Vec::new(),
            instance: None,
            facts: Vec::new(),
        }
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    pub fn with_key_planets(mut self, key_planets: Vec<Graha>) -> Self {
        self.key_planets = key_planets;
        self
    }

    pub fn push_fact(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.facts.push(Fact::new(key, value));
    }

    /// Value of the first fact with `key`.
    pub fn fact(&self, key: &str) -> Option<&str> {
        self.facts
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }

    /// Key planets, falling back to every involved planet.
    pub fn strength_planets(&self) -> &[Graha] {
        if self.key_planets.is_empty() {
            &self.involved
        } else {
            &self.key_planets
        }
    }
}
