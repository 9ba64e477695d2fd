//! Elemental damage resolution against a defender's resistances.

use super::{Element, Resistance};
use crate::env::RollSource;

/// Multiplier applied to elemental hits flagged as critical.
pub const ELEMENTAL_CRIT_MULTIPLIER: f64 = 1.5;

/// Lower bound of the random damage variance.
pub const VARIANCE_MIN: f64 = 0.9;
/// Upper bound (exclusive) of the random damage variance.
pub const VARIANCE_MAX: f64 = 1.1;

/// Outcome of an elemental damage calculation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementalDamage {
    pub damage: u32,
    pub messages: Vec<String>,
}

/// Computes the final damage of an elemental hit.
///
/// Steps, each truncating toward zero:
/// 1. the defender's affinity for `element` scales the damage (no entry means neutral)
/// 2. a uniform variance in `[0.9, 1.1)` is applied
/// 3. a critical hit multiplies by 1.5
/// 4. the element's secondary effect may trigger (flavor only)
///
/// The result is never below 1.
///
/// # Arguments
///
/// * `base_damage` - Damage before elemental modifiers
/// * `element` - Element of the attack
/// * `resistances` - Defender's affinities; the first matching entry wins
/// * `_attacker_level` - Accepted for level-scaled effects; currently unused
/// * `critical` - Whether the hit was already rolled as critical
/// * `rolls` - Source of the variance and secondary-effect draws
pub fn calculate_elemental_damage(
    base_damage: u32,
    element: Element,
    resistances: &[Resistance],
    _attacker_level: u32,
    critical: bool,
    rolls: &mut dyn RollSource,
) -> ElementalDamage {
    let mut messages = Vec::new();
    let mut damage = f64::from(base_damage);

    if let Some(resistance) = resistances.iter().find(|r| r.element == element) {
        let modifier = resistance.affinity.multiplier();
        damage = (damage * modifier).trunc();

        if modifier == 0.0 {
            messages.push(format!("Immune to {element}!"));
        } else if modifier < 0.6 {
            messages.push(format!("Resistant to {element}!"));
        } else if modifier > 1.4 {
            messages.push(format!("Weak to {element}!"));
        }
    }

    let variance = rolls.uniform(VARIANCE_MIN, VARIANCE_MAX);
    damage = (damage * variance).trunc();

    if critical {
        damage = (damage * ELEMENTAL_CRIT_MULTIPLIER).trunc();
        messages.push("Elemental critical hit!".to_string());
    }

    if let Some((chance, text)) = element.secondary_effect() {
        if rolls.chance(chance) {
            messages.push(text.to_string());
        }
    }

    ElementalDamage {
        damage: (damage as u32).max(1),
        messages,
    }
}

/// Elements the defender is weak or very weak to.
///
/// Falls back to `[Physical, Arcane]` when no weakness is known.
pub fn recommended_elements(resistances: &[Resistance]) -> Vec<Element> {
    let weaknesses: Vec<Element> = resistances
        .iter()
        .filter(|r| r.affinity.is_weakness())
        .map(|r| r.element)
        .collect();

    if weaknesses.is_empty() {
        vec![Element::Physical, Element::Arcane]
    } else {
        weaknesses
    }
}

/// Adds an elemental bonus of `power_percent`% (truncated) to a weapon's damage.
pub fn enchant_weapon(weapon_damage: u32, element: Element, power_percent: u32) -> (u32, Element) {
    let bonus = u64::from(weapon_damage) * u64::from(power_percent) / 100;
    let total = u64::from(weapon_damage) + bonus;
    (u32::try_from(total).unwrap_or(u32::MAX), element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elemental::Affinity;
    use crate::env::ScriptedRolls;

    /// Draw that maps to a unit value of exactly 0.5 (variance 1.0, no proc
    /// below 50%).
    const MID: u32 = 1 << 31;

    #[test]
    fn no_resistance_only_applies_variance() {
        let mut rolls = ScriptedRolls::new([MID]);
        let result = calculate_elemental_damage(20, Element::Physical, &[], 1, false, &mut rolls);
        assert_eq!(result.damage, 20);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn weakness_scales_and_announces() {
        let mut rolls = ScriptedRolls::new([MID]);
        let resistances = [Resistance::new(Element::Fire, Affinity::VeryWeak)];
        let result = calculate_elemental_damage(10, Element::Fire, &resistances, 1, false, &mut rolls);
        assert_eq!(result.damage, 20);
        assert_eq!(result.messages, ["Weak to fire!"]);
    }

    #[test]
    fn immunity_still_deals_minimum_damage() {
        let mut rolls = ScriptedRolls::new([MID]);
        let resistances = [Resistance::new(Element::Shadow, Affinity::Immunity)];
        let result =
            calculate_elemental_damage(50, Element::Shadow, &resistances, 1, false, &mut rolls);
        assert_eq!(result.damage, 1);
        assert_eq!(result.messages[0], "Immune to shadow!");
    }

    #[test]
    fn critical_multiplies_after_variance() {
        let mut rolls = ScriptedRolls::new([MID]);
        let result = calculate_elemental_damage(11, Element::Neutral, &[], 1, true, &mut rolls);
        assert_eq!(result.damage, 16);
        assert_eq!(result.messages, ["Elemental critical hit!"]);
    }

    #[test]
    fn secondary_effect_triggers_on_low_roll() {
        let mut rolls = ScriptedRolls::new([MID, 0]);
        let result = calculate_elemental_damage(10, Element::Fire, &[], 1, false, &mut rolls);
        assert_eq!(result.messages, ["The target starts to burn!"]);
    }

    #[test]
    fn variance_stays_within_ten_percent() {
        let mut rolls = crate::env::SeededRolls::pcg(3);
        for _ in 0..500 {
            let result = calculate_elemental_damage(100, Element::Neutral, &[], 1, false, &mut rolls);
            assert!((90..=110).contains(&result.damage));
        }
    }

    #[test]
    fn recommends_weaknesses_or_fallback() {
        let resistances = [
            Resistance::new(Element::Fire, Affinity::Resist),
            Resistance::new(Element::Light, Affinity::Weak),
        ];
        assert_eq!(recommended_elements(&resistances), [Element::Light]);
        assert_eq!(
            recommended_elements(&[]),
            [Element::Physical, Element::Arcane]
        );
    }

    #[test]
    fn enchantment_adds_percentage() {
        assert_eq!(enchant_weapon(15, Element::Ice, 20), (18, Element::Ice));
        assert_eq!(enchant_weapon(7, Element::Fire, 50), (10, Element::Fire));
    }
}
