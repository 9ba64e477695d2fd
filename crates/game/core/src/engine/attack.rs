//! Basic attacks and escape attempts.

use crate::character::Character;
use crate::config::CombatConfig;
use crate::env::RollSource;

/// Largest random bonus added to a basic attack.
pub const ATTACK_VARIANCE_MAX: u32 = 6;

/// Result of a basic attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackOutcome {
    pub damage: u32,
    pub critical: bool,
    pub messages: Vec<String>,
}

/// Resolves a basic attack from `attacker` on `defender`.
///
/// `scale` multiplies the rolled base damage before defense applies (1.0 for a
/// plain attack, the charge multiplier for a charged one). Damage is never
/// below 1.
pub fn basic_attack(
    attacker: &Character,
    defender: &mut Character,
    scale: f64,
    config: &CombatConfig,
    rolls: &mut dyn RollSource,
) -> AttackOutcome {
    let crit_chance = config.crit_chance(attacker.level);
    let critical = rolls.roll_d100() <= crit_chance;

    let rolled = attacker.attack_total() + rolls.range(0, ATTACK_VARIANCE_MAX);
    let base = (f64::from(rolled) * scale).trunc();
    let defense = f64::from(defender.defense_total());

    let raw = if critical {
        (base * config.crit_multiplier - defense * 0.5).round()
    } else {
        base - defense
    };
    let damage = raw.max(1.0) as u32;
    let dealt = defender.take_damage(damage);

    let mut messages = Vec::new();
    if critical {
        messages.push("CRITICAL HIT!".to_string());
    }
    messages.push(format!(
        "{} attacks {} for {} damage!",
        attacker.name, defender.name, dealt
    ));

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        damage = dealt,
        critical,
        "basic attack"
    );

    AttackOutcome {
        damage: dealt,
        critical,
        messages,
    }
}

/// Rolls an escape attempt. Returns whether it succeeded and the message.
pub fn attempt_escape(
    player: &Character,
    enemy: &Character,
    config: &CombatConfig,
    rolls: &mut dyn RollSource,
) -> (bool, String) {
    let chance = config.escape_chance(player.level, enemy.level);
    let roll = rolls.roll_d100();
    let escaped = i64::from(roll) <= i64::from(chance);

    tracing::debug!(player = %player.name, chance, roll, escaped, "escape attempt");

    let message = if escaped {
        "You escaped from combat!".to_string()
    } else {
        "You tried to flee but could not escape!".to_string()
    };
    (escaped, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRolls;

    fn config() -> CombatConfig {
        CombatConfig::default()
    }

    #[test]
    fn normal_hit_subtracts_defense() {
        let attacker = Character::new("Hero", 50, 20, 7, 2);
        let mut defender = Character::new("Wolf", 20, 0, 6, 2);
        // d100 = 100 (no crit), variance = 3
        let mut rolls = ScriptedRolls::new([99, 3]);

        let outcome = basic_attack(&attacker, &mut defender, 1.0, &config(), &mut rolls);

        assert!(!outcome.critical);
        assert_eq!(outcome.damage, 8);
        assert_eq!(defender.hp, 12);
        assert_eq!(outcome.messages, ["Hero attacks Wolf for 8 damage!"]);
    }

    #[test]
    fn critical_hit_rounds() {
        let attacker = Character::new("Hero", 50, 20, 7, 2);
        let mut defender = Character::new("Wolf", 20, 0, 6, 3);
        // d100 = 1 (crit), variance = 0: 7 * 1.75 - 1.5 = 10.75 -> 11
        let mut rolls = ScriptedRolls::new([0, 0]);

        let outcome = basic_attack(&attacker, &mut defender, 1.0, &config(), &mut rolls);

        assert!(outcome.critical);
        assert_eq!(outcome.damage, 11);
        assert_eq!(outcome.messages[0], "CRITICAL HIT!");
    }

    #[test]
    fn damage_is_at_least_one() {
        let attacker = Character::new("Rat", 5, 0, 1, 0);
        let mut defender = Character::new("Golem", 80, 0, 5, 40);
        let mut rolls = ScriptedRolls::new([99, 0]);

        let outcome = basic_attack(&attacker, &mut defender, 1.0, &config(), &mut rolls);

        assert_eq!(outcome.damage, 1);
        assert_eq!(defender.hp, 79);
    }

    #[test]
    fn charge_scales_base_damage() {
        let attacker = Character::new("Boar", 30, 0, 10, 0);
        let mut defender = Character::new("Hero", 50, 0, 7, 2);
        let mut rolls = ScriptedRolls::new([99, 0]);

        let outcome = basic_attack(&attacker, &mut defender, 1.5, &config(), &mut rolls);

        assert_eq!(outcome.damage, 13);
    }

    #[test]
    fn damage_reported_is_capped_by_remaining_hp() {
        let attacker = Character::new("Ogre", 60, 0, 30, 0);
        let mut defender = Character::new("Hero", 50, 0, 7, 0);
        defender.hp = 4;
        let mut rolls = ScriptedRolls::new([99, 0]);

        let outcome = basic_attack(&attacker, &mut defender, 1.0, &config(), &mut rolls);

        assert_eq!(outcome.damage, 4);
        assert_eq!(defender.hp, 0);
    }

    #[test]
    fn escape_succeeds_on_low_roll() {
        let player = Character::new("Hero", 50, 20, 7, 2);
        let enemy = Character::new("Wolf", 20, 0, 6, 2);
        let (escaped, _) = attempt_escape(&player, &enemy, &config(), &mut ScriptedRolls::new([59]));
        assert!(escaped);
        let (escaped, message) =
            attempt_escape(&player, &enemy, &config(), &mut ScriptedRolls::new([60]));
        assert!(!escaped);
        assert!(message.contains("could not escape"));
    }
}
