/// Damage element.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    #[default]
    Neutral,
    Fire,
    Ice,
    Shadow,
    Light,
    Nature,
    Arcane,
    Physical,
    Divine,
}

impl Element {
    pub const ALL: [Element; 9] = [
        Element::Neutral,
        Element::Fire,
        Element::Ice,
        Element::Shadow,
        Element::Light,
        Element::Nature,
        Element::Arcane,
        Element::Physical,
        Element::Divine,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Neutral => "A neutral element with no special strengths or weaknesses.",
            Self::Fire => "Burning element that scorches foes and melts ice.",
            Self::Ice => "Freezing element that slows targets and douses fire.",
            Self::Shadow => "Element of darkness, especially strong against light.",
            Self::Light => "Holy element that banishes shadows.",
            Self::Nature => "Natural element that shrugs off physical blows.",
            Self::Arcane => "Pure magic that transcends physical limits.",
            Self::Physical => "Brute force that breaks through natural magic.",
            Self::Divine => "Celestial power, devastating against shadow.",
        }
    }

    /// Chance (0.0..=1.0) and flavor text of this element's secondary effect.
    pub(crate) fn secondary_effect(self) -> Option<(f64, &'static str)> {
        match self {
            Self::Fire => Some((0.30, "The target starts to burn!")),
            Self::Ice => Some((0.25, "The target slows down!")),
            Self::Shadow => Some((0.20, "The target is wrapped in shadows!")),
            Self::Light => Some((0.20, "The target is purified!")),
            Self::Nature => Some((0.15, "Thorns sprout around the target!")),
            Self::Arcane => Some((0.25, "Arcane energy disrupts the target's magic!")),
            Self::Divine => Some((0.30, "Divine power blesses the attack!")),
            Self::Neutral | Self::Physical => None,
        }
    }
}

/// How strongly a defender reacts to an element.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Affinity {
    #[strum(serialize = "immunity", serialize = "immune")]
    Immunity,
    StrongResist,
    Resist,
    #[default]
    Neutral,
    Weak,
    VeryWeak,
}

impl Affinity {
    /// Damage multiplier applied for this affinity.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Immunity => 0.0,
            Self::StrongResist => 0.25,
            Self::Resist => 0.5,
            Self::Neutral => 1.0,
            Self::Weak => 1.5,
            Self::VeryWeak => 2.0,
        }
    }

    pub const fn is_weakness(self) -> bool {
        matches!(self, Self::Weak | Self::VeryWeak)
    }
}

/// A defender's affinity toward one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resistance {
    pub element: Element,
    pub affinity: Affinity,
}

impl Resistance {
    pub const fn new(element: Element, affinity: Affinity) -> Self {
        Self { element, affinity }
    }
}
