//! Resolution of AI decisions into combat effects.

use crate::ai::{AiAction, AiDecision};
use crate::character::{AbilityKind, Character};
use crate::config::CombatConfig;
use crate::env::RollSource;

use super::attack::basic_attack;
use super::skill::{SkillOutcome, use_skill};

/// What the enemy's action produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnemyActionOutcome {
    pub messages: Vec<String>,
    /// Set when an ability actually resolved.
    pub skill: Option<SkillOutcome>,
}

/// Applies `decision` taken by `enemy` against `player`.
///
/// Ability failures never surface: the enemy falls back to a basic attack.
pub fn resolve_enemy_action(
    enemy: &mut Character,
    player: &mut Character,
    decision: &AiDecision,
    config: &CombatConfig,
    rolls: &mut dyn RollSource,
) -> EnemyActionOutcome {
    let mut outcome = EnemyActionOutcome::default();
    if let Some(text) = &decision.text {
        outcome.messages.push(text.clone());
    }

    match &decision.action {
        AiAction::Attack | AiAction::Special => {
            attack(enemy, player, 1.0, config, rolls, &mut outcome);
        }
        AiAction::ChargeAttack => {
            outcome
                .messages
                .push(format!("{} charges a powerful attack!", enemy.name));
            attack(enemy, player, config.charge_multiplier, config, rolls, &mut outcome);
        }
        AiAction::UseAbility(Some(name)) => {
            cast_or_attack(enemy, player, name, config, rolls, &mut outcome);
        }
        AiAction::UseAbility(None) => {
            attack(enemy, player, 1.0, config, rolls, &mut outcome);
        }
        AiAction::Defend => {
            let turns = enemy.status.defense_buff_turns.max(CombatConfig::DEFEND_TURNS);
            match enemy.apply_defense_buff(turns) {
                Ok(()) => outcome
                    .messages
                    .push(format!("{} takes a defensive stance!", enemy.name)),
                Err(error) => tracing::warn!(%error, "enemy could not defend"),
            }
        }
        AiAction::Heal => {
            let heal = enemy
                .abilities
                .iter()
                .find(|a| a.kind == AbilityKind::Heal && enemy.can_use_skill(a))
                .map(|a| a.name.clone());
            match heal {
                Some(name) => cast_or_attack(enemy, player, &name, config, rolls, &mut outcome),
                None => attack(enemy, player, 1.0, config, rolls, &mut outcome),
            }
        }
        AiAction::Taunt | AiAction::Intimidate | AiAction::Flee => {}
    }

    outcome
}

/// Rolls the enemy's venom against the player.
///
/// Only a venomous enemy can poison, only a living player who is not already
/// poisoned can be poisoned. Returns the announcement on success.
pub fn apply_venom(
    enemy: &Character,
    player: &mut Character,
    config: &CombatConfig,
    rolls: &mut dyn RollSource,
) -> Option<String> {
    if enemy.venom_damage == 0 || player.is_dead() || player.is_poisoned() {
        return None;
    }
    if rolls.roll_d100() > config.venom_chance {
        return None;
    }
    let turns = config.clamp_poison_turns(config.venom_turns);
    player.apply_poison(turns, enemy.venom_damage).ok()?;
    tracing::debug!(player = %player.name, turns, damage = enemy.venom_damage, "player poisoned");
    Some(format!("{} has been poisoned!", player.name))
}

fn attack(
    enemy: &Character,
    player: &mut Character,
    scale: f64,
    config: &CombatConfig,
    rolls: &mut dyn RollSource,
    outcome: &mut EnemyActionOutcome,
) {
    let hit = basic_attack(enemy, player, scale, config, rolls);
    outcome.messages.extend(hit.messages);
}

fn cast_or_attack(
    enemy: &mut Character,
    player: &mut Character,
    name: &str,
    config: &CombatConfig,
    rolls: &mut dyn RollSource,
    outcome: &mut EnemyActionOutcome,
) {
    match use_skill(enemy, player, name, config) {
        Ok(skill) => {
            outcome.messages.extend(skill.messages.iter().cloned());
            outcome.skill = Some(skill);
        }
        Err(error) => {
            tracing::warn!(enemy = %enemy.name, skill = name, %error, "ability failed, attacking instead");
            attack(enemy, player, 1.0, config, rolls, outcome);
        }
    }
}
