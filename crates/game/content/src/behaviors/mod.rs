//! Enemy behavior presets.
//!
//! Behavior profiles are authored as string-keyed specs and registered under a
//! preset name. Enemy definitions reference a preset instead of repeating the
//! whole profile; an enemy without a preset gets the built-in default.

use std::collections::HashMap;

use combat_core::{BehaviorProfile, Pattern, SpecialTrigger};

use crate::names::{
    NameError, parse_action, parse_condition, parse_personality, parse_trigger,
};

/// Authored form of a behavior pattern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternSpec {
    pub condition: String,
    pub actions: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default = "default_weight"))]
    pub weight: f64,
}

/// Authored form of a one-shot special trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialSpec {
    pub trigger: String,
    pub action: String,
    pub text: String,
}

/// Authored form of a [`BehaviorProfile`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorSpec {
    pub personality: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub patterns: Vec<PatternSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_triggers: Vec<SpecialSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistances: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weaknesses: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default = "default_range"))]
    pub preferred_range: String,
    #[cfg_attr(feature = "serde", serde(default = "default_level"))]
    pub aggression_level: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_level"))]
    pub intelligence_level: f64,
}

#[cfg(feature = "serde")]
fn default_weight() -> f64 {
    1.0
}

#[cfg(feature = "serde")]
fn default_range() -> String {
    "close".to_string()
}

#[cfg(feature = "serde")]
fn default_level() -> f64 {
    0.5
}

impl BehaviorSpec {
    /// Resolves every string into core vocabulary.
    ///
    /// # Errors
    ///
    /// Returns the first [`NameError`] encountered.
    pub fn resolve(&self) -> Result<BehaviorProfile, NameError> {
        let mut profile = BehaviorProfile::new(parse_personality(&self.personality)?);

        for pattern in &self.patterns {
            let actions = pattern
                .actions
                .iter()
                .map(|a| parse_action(a))
                .collect::<Result<Vec<_>, _>>()?;
            profile = profile.with_pattern(Pattern::new(
                parse_condition(&pattern.condition)?,
                actions,
                pattern.weight,
            ));
        }
        for special in &self.special_triggers {
            profile = profile.with_special(SpecialTrigger::new(
                parse_trigger(&special.trigger)?,
                parse_action(&special.action)?,
                special.text.clone(),
            ));
        }

        profile.resistances = self.resistances.clone();
        profile.weaknesses = self.weaknesses.clone();
        profile.preferred_range = self.preferred_range.clone();
        profile.aggression_level = self.aggression_level;
        profile.intelligence_level = self.intelligence_level;
        Ok(profile)
    }
}

/// Registry of named behavior presets.
#[derive(Clone, Debug, Default)]
pub struct BehaviorRegistry {
    presets: HashMap<String, BehaviorProfile>,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, profile: BehaviorProfile) {
        self.presets.insert(name.into(), profile);
    }

    pub fn get(&self, name: &str) -> Option<&BehaviorProfile> {
        self.presets.get(name)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Looks up `preset`, or returns the default profile for `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if a named preset is not registered.
    pub fn resolve(&self, preset: Option<&str>) -> Result<BehaviorProfile, String> {
        match preset {
            None => Ok(BehaviorProfile::default()),
            Some(name) => self
                .presets
                .get(name)
                .cloned()
                .ok_or_else(|| format!("Behavior preset '{}' not found", name)),
        }
    }
}
