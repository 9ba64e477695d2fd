//! Timed status effects and their per-turn lifecycle.

use super::{Character, CharacterStateError};

/// Flat defense bonus while a defense buff is active.
pub const DEFENSE_BUFF_BONUS: u32 = 5;
/// Flat attack bonus while fury is active.
pub const FURY_ATTACK_BONUS: u32 = 5;
/// Defense lost while fury is active.
pub const FURY_DEFENSE_PENALTY: u32 = 3;
/// HP restored per turn while regenerating.
pub const REGEN_PER_TURN: u32 = 5;

/// Timed status effect a character can carry.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusEffect {
    Poison,
    DefenseBuff,
    Fury,
    Regen,
}

/// Remaining turns for each timed effect. Zero means inactive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusCounters {
    pub poison_turns: u32,
    pub poison_damage_per_turn: u32,
    pub defense_buff_turns: u32,
    pub fury_turns: u32,
    pub regen_turns: u32,
}

impl StatusCounters {
    pub fn is_active(&self, effect: StatusEffect) -> bool {
        self.turns(effect) > 0
    }

    pub fn turns(&self, effect: StatusEffect) -> u32 {
        match effect {
            StatusEffect::Poison => self.poison_turns,
            StatusEffect::DefenseBuff => self.defense_buff_turns,
            StatusEffect::Fury => self.fury_turns,
            StatusEffect::Regen => self.regen_turns,
        }
    }

    /// Returns true if the poison counter and per-turn damage agree.
    ///
    /// An expired poison must not leave a pending damage value behind.
    pub fn poison_is_consistent(&self) -> bool {
        self.poison_turns > 0 || self.poison_damage_per_turn == 0
    }
}

impl Character {
    pub fn is_poisoned(&self) -> bool {
        self.status.poison_turns > 0
    }

    pub fn has_defense_buff(&self) -> bool {
        self.status.defense_buff_turns > 0
    }

    pub fn has_fury(&self) -> bool {
        self.status.fury_turns > 0
    }

    pub fn is_regenerating(&self) -> bool {
        self.status.regen_turns > 0
    }

    /// Sets the defense buff to last exactly `turns` turns.
    ///
    /// # Errors
    ///
    /// Returns [`CharacterStateError::EffectOnDead`] if the character is dead.
    pub fn apply_defense_buff(&mut self, turns: u32) -> Result<(), CharacterStateError> {
        self.ensure_alive_for(StatusEffect::DefenseBuff)?;
        self.status.defense_buff_turns = turns;
        Ok(())
    }

    /// Sets fury to last exactly `turns` turns.
    ///
    /// # Errors
    ///
    /// Returns [`CharacterStateError::EffectOnDead`] if the character is dead.
    pub fn apply_fury(&mut self, turns: u32) -> Result<(), CharacterStateError> {
        self.ensure_alive_for(StatusEffect::Fury)?;
        self.status.fury_turns = turns;
        Ok(())
    }

    /// Sets regeneration to last exactly `turns` turns.
    ///
    /// # Errors
    ///
    /// Returns [`CharacterStateError::EffectOnDead`] if the character is dead.
    pub fn apply_regen(&mut self, turns: u32) -> Result<(), CharacterStateError> {
        self.ensure_alive_for(StatusEffect::Regen)?;
        self.status.regen_turns = turns;
        Ok(())
    }

    /// Poisons the character, replacing any poison already running.
    ///
    /// # Errors
    ///
    /// Returns [`CharacterStateError::EffectOnDead`] if the character is dead.
    pub fn apply_poison(&mut self, turns: u32, damage_per_turn: u32) -> Result<(), CharacterStateError> {
        self.ensure_alive_for(StatusEffect::Poison)?;
        self.status.poison_turns = turns;
        self.status.poison_damage_per_turn = if turns > 0 { damage_per_turn } else { 0 };
        Ok(())
    }

    /// Removes poison. Returns true if the character was poisoned.
    pub fn cure_poison(&mut self) -> bool {
        let was_poisoned = self.is_poisoned();
        self.status.poison_turns = 0;
        self.status.poison_damage_per_turn = 0;
        was_poisoned
    }

    /// Advances every timed effect by one turn.
    ///
    /// Effects are evaluated independently in a fixed order: poison, defense
    /// buff, fury, regeneration. Regeneration does not heal a dead character
    /// but its counter still runs down.
    pub fn process_status_effects(&mut self) -> Vec<String> {
        let mut messages = Vec::new();

        if self.status.poison_turns > 0 {
            let damage = self.take_damage(self.status.poison_damage_per_turn);
            messages.push(format!("{} takes {} poison damage!", self.name, damage));
            self.status.poison_turns -= 1;
            if self.status.poison_turns == 0 {
                self.status.poison_damage_per_turn = 0;
                messages.push(format!("{} recovers from the poison.", self.name));
            }
        }

        if self.status.defense_buff_turns > 0 {
            self.status.defense_buff_turns -= 1;
            if self.status.defense_buff_turns == 0 {
                messages.push(format!("{}'s defense buff wears off.", self.name));
            }
        }

        if self.status.fury_turns > 0 {
            self.status.fury_turns -= 1;
            if self.status.fury_turns == 0 {
                messages.push(format!("{}'s fury subsides.", self.name));
            }
        }

        if self.status.regen_turns > 0 {
            if self.is_alive() {
                let amount = REGEN_PER_TURN.min(self.hp_max.saturating_sub(self.hp));
                if amount > 0 {
                    self.hp += amount;
                    messages.push(format!("{} regenerates {} HP.", self.name, amount));
                }
            }
            self.status.regen_turns -= 1;
            if self.status.regen_turns == 0 {
                messages.push(format!("{}'s regeneration ends.", self.name));
            }
        }

        messages
    }

    fn ensure_alive_for(&self, effect: StatusEffect) -> Result<(), CharacterStateError> {
        if self.is_alive() {
            Ok(())
        } else {
            Err(CharacterStateError::effect_on_dead(&self.name, effect))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Character {
        Character::new("Hero", 50, 20, 7, 2)
    }

    #[test]
    fn poison_last_turn_damages_and_cures() {
        let mut hero = hero();
        hero.hp = 10;
        hero.apply_poison(1, 5).unwrap();

        let messages = hero.process_status_effects();

        assert_eq!(hero.hp, 5);
        assert_eq!(hero.status.poison_turns, 0);
        assert_eq!(hero.status.poison_damage_per_turn, 0);
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("5 poison damage"));
        assert!(messages[1].contains("recovers"));
    }

    #[test]
    fn poison_damage_is_capped_at_current_hp() {
        let mut hero = hero();
        hero.hp = 3;
        hero.apply_poison(2, 5).unwrap();

        let messages = hero.process_status_effects();

        assert_eq!(hero.hp, 0);
        assert!(messages[0].contains("3 poison damage"));
        assert_eq!(hero.status.poison_turns, 1);
    }

    #[test]
    fn regen_heals_and_expires() {
        let mut hero = hero();
        hero.hp = 40;
        hero.apply_regen(1).unwrap();

        let messages = hero.process_status_effects();

        assert_eq!(hero.hp, 45);
        assert_eq!(hero.status.regen_turns, 0);
        assert_eq!(messages, ["Hero regenerates 5 HP.", "Hero's regeneration ends."]);
    }

    #[test]
    fn regen_is_capped_and_silent_at_full_hp() {
        let mut hero = hero();
        hero.hp = 48;
        hero.apply_regen(3).unwrap();
        assert_eq!(hero.process_status_effects(), ["Hero regenerates 2 HP."]);
        assert!(hero.process_status_effects().is_empty());
        assert_eq!(hero.hp, 50);
    }

    #[test]
    fn regen_leaves_over_max_hp_alone() {
        let mut hero = hero();
        hero.apply_regen(2).unwrap();
        hero.hp = 80;

        assert!(hero.process_status_effects().is_empty());
        assert_eq!(hero.hp, 80);
        assert_eq!(hero.status.regen_turns, 1);
    }

    #[test]
    fn regen_skips_dead_but_counts_down() {
        let mut hero = hero();
        hero.apply_regen(2).unwrap();
        hero.take_damage(100);

        let messages = hero.process_status_effects();

        assert_eq!(hero.hp, 0);
        assert!(messages.is_empty());
        assert_eq!(hero.status.regen_turns, 1);
    }

    #[test]
    fn buffs_expire_in_order() {
        let mut hero = hero();
        hero.apply_defense_buff(1).unwrap();
        hero.apply_fury(1).unwrap();

        let messages = hero.process_status_effects();

        assert_eq!(
            messages,
            ["Hero's defense buff wears off.", "Hero's fury subsides."]
        );
        assert!(!hero.has_defense_buff());
        assert!(!hero.has_fury());
    }

    #[test]
    fn dead_character_rejects_new_buffs() {
        let mut hero = hero();
        hero.take_damage(50);
        assert_eq!(
            hero.apply_fury(4),
            Err(CharacterStateError::effect_on_dead("Hero", StatusEffect::Fury))
        );
        assert!(hero.apply_defense_buff(3).is_err());
        assert_eq!(hero.status, StatusCounters::default());
    }

    #[test]
    fn cure_poison_reports_previous_state() {
        let mut hero = hero();
        assert!(!hero.cure_poison());
        hero.apply_poison(3, 4).unwrap();
        assert!(hero.cure_poison());
        assert!(hero.status.poison_is_consistent());
    }
}
