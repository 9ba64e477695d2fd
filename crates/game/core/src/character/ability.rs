//! Abilities a character can learn and use in combat.

use crate::elemental::Element;

/// Kind of effect an ability produces.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum AbilityKind {
    /// Direct damage to the target.
    Attack,
    /// Restores the user's HP.
    Heal,
    /// Raises the user's defense for a few turns.
    DefenseBuff,
    /// Raises the user's attack. Catalogued but not resolvable in combat.
    AttackBuff,
    /// Weakens the target. Catalogued but not resolvable in combat.
    Debuff,
    /// Raises attack and lowers defense for a few turns.
    Fury,
    /// Heals a fixed amount at the end of each turn for a few turns.
    Regen,
}

impl AbilityKind {
    /// Returns true if the combat manager knows how to resolve this kind.
    pub const fn is_resolvable(&self) -> bool {
        !matches!(self, Self::AttackBuff | Self::Debuff)
    }
}

/// A learnable skill or spell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub mp_cost: u32,
    pub kind: AbilityKind,
    /// Damage for attacks, HP for heals; unused by timed buffs.
    pub effect_value: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_min_level"))]
    pub min_level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub element: Element,
}

#[cfg(feature = "serde")]
fn default_min_level() -> u32 {
    1
}

impl Ability {
    pub fn new(name: impl Into<String>, kind: AbilityKind, mp_cost: u32, effect_value: u32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            mp_cost,
            kind,
            effect_value,
            min_level: 1,
            element: Element::Neutral,
        }
    }

    pub fn with_min_level(mut self, min_level: u32) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
