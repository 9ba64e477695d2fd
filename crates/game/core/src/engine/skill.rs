//! Ability resolution.

use crate::character::{Ability, AbilityKind, Character};
use crate::config::CombatConfig;

use super::{
    CombatError, InsufficientResourcesError, InvalidActionError, ResourceNotFoundError, TurnError,
};

/// Result of a successfully resolved ability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillOutcome {
    pub skill: String,
    pub mp_cost: u32,
    pub messages: Vec<String>,
}

/// Looks up `name` on `user` and verifies it can be used right now.
///
/// Checks run in order: known, affordable, level, resolvable kind.
///
/// # Errors
///
/// - [`ResourceNotFoundError::UnknownAbility`] if the ability is not known
/// - [`InsufficientResourcesError::Mp`] if MP is short
/// - [`InvalidActionError::LevelTooLow`] if the level requirement is unmet
/// - [`InvalidActionError::UnsupportedAbility`] for kinds combat cannot resolve
pub fn validate_skill<'a>(user: &'a Character, name: &str) -> Result<&'a Ability, TurnError> {
    let ability = user
        .find_ability(name)
        .ok_or_else(|| ResourceNotFoundError::unknown_ability(&user.name, name))?;

    if user.mp < ability.mp_cost {
        return Err(InsufficientResourcesError::Mp {
            skill: ability.name.clone(),
            required: ability.mp_cost,
            available: user.mp,
        }
        .into());
    }
    if user.level < ability.min_level {
        return Err(InvalidActionError::LevelTooLow {
            skill: ability.name.clone(),
            required: ability.min_level,
            current: user.level,
        }
        .into());
    }
    if !ability.kind.is_resolvable() {
        return Err(InvalidActionError::UnsupportedAbility {
            skill: ability.name.clone(),
            kind: ability.kind,
        }
        .into());
    }
    Ok(ability)
}

/// Uses ability `name` from `user` against `target`.
///
/// Nothing is mutated unless every check in [`validate_skill`] passes.
///
/// # Errors
///
/// [`CombatError::ParticipantDead`] if `user` is dead, otherwise any error
/// from [`validate_skill`].
pub fn use_skill(
    user: &mut Character,
    target: &mut Character,
    name: &str,
    config: &CombatConfig,
) -> Result<SkillOutcome, TurnError> {
    if user.is_dead() {
        return Err(CombatError::participant_dead(&user.name).into());
    }
    let ability = validate_skill(user, name)?.clone();

    user.spend_mp(ability.mp_cost);
    let mut messages = vec![format!("{} uses {}!", user.name, ability.name)];

    match ability.kind {
        AbilityKind::Attack => {
            let raw = i64::from(ability.effect_value) + i64::from(user.attack_base)
                - i64::from(target.defense_total());
            let damage = u32::try_from(raw.max(1)).unwrap_or(u32::MAX);
            let dealt = target.take_damage(damage);
            messages.push(format!("{} takes {} magic damage!", target.name, dealt));
        }
        AbilityKind::Heal => {
            let healed = user.heal(ability.effect_value)?;
            if healed > 0 {
                messages.push(format!("{} recovers {} HP.", user.name, healed));
            } else {
                messages.push(format!("{} is already at full health.", user.name));
            }
        }
        AbilityKind::DefenseBuff => {
            let turns = config.clamp_buff_turns(CombatConfig::DEFENSE_BUFF_TURNS);
            user.apply_defense_buff(turns)?;
            messages.push(format!(
                "{}'s defense rises for {} turns!",
                user.name, turns
            ));
        }
        AbilityKind::Fury => {
            let turns = config.clamp_buff_turns(CombatConfig::FURY_TURNS);
            user.apply_fury(turns)?;
            messages.push(format!(
                "{} flies into a fury! Attack rises and defense drops for {} turns!",
                user.name, turns
            ));
        }
        AbilityKind::Regen => {
            let turns = config.clamp_buff_turns(CombatConfig::REGEN_TURNS);
            user.apply_regen(turns)?;
            messages.push(format!(
                "{} starts regenerating HP for {} turns!",
                user.name, turns
            ));
        }
        AbilityKind::AttackBuff | AbilityKind::Debuff => {
            unreachable!("validate_skill rejects unresolvable ability kinds")
        }
    }

    tracing::debug!(
        user = %user.name,
        skill = %ability.name,
        target = %target.name,
        mp_cost = ability.mp_cost,
        "skill used"
    );

    Ok(SkillOutcome {
        skill: ability.name,
        mp_cost: ability.mp_cost,
        messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    fn caster() -> Character {
        Character::new("Mage", 30, 10, 4, 1)
            .with_ability(Ability::new("Fire Bolt", AbilityKind::Attack, 6, 12))
            .with_ability(Ability::new("Mend", AbilityKind::Heal, 3, 15))
            .with_ability(Ability::new("Bulwark", AbilityKind::DefenseBuff, 2, 0))
            .with_ability(Ability::new("Rage", AbilityKind::Fury, 2, 0))
            .with_ability(Ability::new("Renew", AbilityKind::Regen, 2, 0))
            .with_ability(Ability::new("Weaken", AbilityKind::Debuff, 1, 3))
            .with_ability(Ability::new("Meteor", AbilityKind::Attack, 1, 40).with_min_level(5))
    }

    fn wolf() -> Character {
        Character::new("Wolf", 20, 0, 6, 2)
    }

    #[test]
    fn attack_skill_uses_base_attack_and_spends_mp() {
        let mut mage = caster();
        let mut wolf = wolf();

        let outcome = use_skill(&mut mage, &mut wolf, "Fire Bolt", &CombatConfig::default()).unwrap();

        assert_eq!(mage.mp, 4);
        assert_eq!(wolf.hp, 6);
        assert_eq!(outcome.mp_cost, 6);
        assert_eq!(outcome.messages[1], "Wolf takes 14 magic damage!");
    }

    #[test]
    fn insufficient_mp_mutates_nothing() {
        let mut mage = caster();
        mage.mp = 5;
        let mut wolf = wolf();

        let err = use_skill(&mut mage, &mut wolf, "Fire Bolt", &CombatConfig::default()).unwrap_err();

        assert!(matches!(
            err,
            TurnError::InsufficientResources(InsufficientResourcesError::Mp {
                required: 6,
                available: 5,
                ..
            })
        ));
        assert_eq!(err.error_code(), "INSUFFICIENT_MP");
        assert_eq!(mage.mp, 5);
        assert_eq!(wolf.hp, 20);
    }

    #[test]
    fn unknown_skill_is_resource_not_found() {
        let mut mage = caster();
        let err = use_skill(&mut mage, &mut wolf(), "Blizzard", &CombatConfig::default()).unwrap_err();
        assert_eq!(
            err,
            TurnError::ResourceNotFound(ResourceNotFoundError::unknown_ability("Mage", "Blizzard"))
        );
    }

    #[test]
    fn level_requirement_is_enforced() {
        let mut mage = caster();
        let err = use_skill(&mut mage, &mut wolf(), "Meteor", &CombatConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            TurnError::InvalidAction(InvalidActionError::LevelTooLow { required: 5, .. })
        ));
        assert_eq!(mage.mp, 10);
    }

    #[test]
    fn unresolvable_kind_is_rejected_before_spending() {
        let mut mage = caster();
        let err = use_skill(&mut mage, &mut wolf(), "Weaken", &CombatConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            TurnError::InvalidAction(InvalidActionError::UnsupportedAbility { .. })
        ));
        assert_eq!(mage.mp, 10);
    }

    #[test]
    fn heal_at_full_hp_is_informational() {
        let mut mage = caster();
        let outcome = use_skill(&mut mage, &mut wolf(), "Mend", &CombatConfig::default()).unwrap();
        assert_eq!(outcome.messages[1], "Mage is already at full health.");
        assert_eq!(mage.mp, 7);
    }

    #[test]
    fn heal_is_capped_at_missing_hp() {
        let mut mage = caster();
        mage.hp = 20;
        let outcome = use_skill(&mut mage, &mut wolf(), "Mend", &CombatConfig::default()).unwrap();
        assert_eq!(mage.hp, 30);
        assert_eq!(outcome.messages[1], "Mage recovers 10 HP.");
    }

    #[test]
    fn timed_buffs_set_their_durations() {
        let config = CombatConfig::default();
        let mut mage = caster();
        let mut wolf = wolf();
        use_skill(&mut mage, &mut wolf, "Bulwark", &config).unwrap();
        use_skill(&mut mage, &mut wolf, "Rage", &config).unwrap();
        use_skill(&mut mage, &mut wolf, "Renew", &config).unwrap();
        assert_eq!(mage.status.defense_buff_turns, 3);
        assert_eq!(mage.status.fury_turns, 4);
        assert_eq!(mage.status.regen_turns, 5);
    }
}
