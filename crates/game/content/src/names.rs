//! String compatibility layer.
//!
//! Data files name elements, affinities, ability kinds and AI vocabulary as
//! strings. Everything is resolved into the closed enums of `combat-core`
//! here, once, at load time.

use std::str::FromStr;

use combat_core::{
    AbilityKind, ActionName, Affinity, Condition, Element, EquipmentSlot, Personality, Trigger,
};

/// A name in a data file that maps to nothing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("unknown {kind} '{name}'")]
    Unknown { kind: &'static str, name: String },

    #[error("'{0}' is not an element (water was folded into ice and nature)")]
    Water(String),
}

impl NameError {
    fn unknown(kind: &'static str, name: &str) -> Self {
        Self::Unknown {
            kind,
            name: name.to_string(),
        }
    }
}

/// Legacy element spellings still found in older content.
const ELEMENT_ALIASES: &[(&str, Element)] = &[
    ("neutro", Element::Neutral),
    ("fogo", Element::Fire),
    ("gelo", Element::Ice),
    ("sombra", Element::Shadow),
    ("luz", Element::Light),
    ("natureza", Element::Nature),
    ("arcano", Element::Arcane),
    ("fisico", Element::Physical),
    ("físico", Element::Physical),
    ("divino", Element::Divine),
];

const WATER_NAMES: &[&str] = &["water", "agua", "água"];

pub fn parse_element(name: &str) -> Result<Element, NameError> {
    let trimmed = name.trim();
    if let Ok(element) = Element::from_str(trimmed) {
        return Ok(element);
    }
    let lowered = trimmed.to_lowercase();
    if WATER_NAMES.contains(&lowered.as_str()) {
        return Err(NameError::Water(trimmed.to_string()));
    }
    ELEMENT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, element)| *element)
        .ok_or_else(|| NameError::unknown("element", trimmed))
}

pub fn parse_affinity(name: &str) -> Result<Affinity, NameError> {
    parse_named("affinity", name)
}

pub fn parse_ability_kind(name: &str) -> Result<AbilityKind, NameError> {
    parse_named("ability kind", name)
}

pub fn parse_equipment_slot(name: &str) -> Result<EquipmentSlot, NameError> {
    parse_named("equipment slot", name)
}

pub fn parse_personality(name: &str) -> Result<Personality, NameError> {
    parse_named("personality", name)
}

pub fn parse_condition(name: &str) -> Result<Condition, NameError> {
    parse_named("condition", name)
}

pub fn parse_action(name: &str) -> Result<ActionName, NameError> {
    parse_named("action", name)
}

pub fn parse_trigger(name: &str) -> Result<Trigger, NameError> {
    parse_named("trigger", name)
}

fn parse_named<T: FromStr>(kind: &'static str, name: &str) -> Result<T, NameError> {
    let trimmed = name.trim();
    T::from_str(trimmed).map_err(|_| NameError::unknown(kind, trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_parse_case_insensitively() {
        assert_eq!(parse_element("Fire"), Ok(Element::Fire));
        assert_eq!(parse_element(" divine "), Ok(Element::Divine));
    }

    #[test]
    fn legacy_element_aliases_resolve() {
        assert_eq!(parse_element("físico"), Ok(Element::Physical));
        assert_eq!(parse_element("Gelo"), Ok(Element::Ice));
    }

    #[test]
    fn water_is_rejected_explicitly() {
        assert_eq!(parse_element("water"), Err(NameError::Water("water".into())));
        assert_eq!(parse_element("Agua"), Err(NameError::Water("Agua".into())));
    }

    #[test]
    fn unknown_names_report_their_kind() {
        let err = parse_condition("hp_above_90").unwrap_err();
        assert_eq!(err.to_string(), "unknown condition 'hp_above_90'");
    }

    #[test]
    fn ai_vocabulary_parses() {
        assert_eq!(parse_condition("hp_below_25"), Ok(Condition::HpBelow25));
        assert_eq!(parse_action("charge_attack"), Ok(ActionName::ChargeAttack));
        assert_eq!(parse_trigger("player_low_hp"), Ok(Trigger::PlayerLowHp));
        assert_eq!(parse_personality("berserker"), Ok(Personality::Berserker));
        assert_eq!(parse_affinity("immune"), Ok(Affinity::Immunity));
    }
}
