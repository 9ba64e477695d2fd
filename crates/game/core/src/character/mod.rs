//! Combat participants: vitals, gear, status effects, inventory and abilities.
//!
//! A [`Character`] is a plain mutable record. Every combat operation mutates
//! it in place; the only terminal state is `hp == 0`, after which it may not
//! act, be healed or receive new effects.
mod ability;
mod equipment;
mod error;
mod inventory;
mod status;

pub use ability::{Ability, AbilityKind};
pub use equipment::{Equipment, EquipmentSlot, Loadout};
pub use error::CharacterStateError;
pub use inventory::{Inventory, InventorySortKey, Item, ItemStack};
pub use status::{
    DEFENSE_BUFF_BONUS, FURY_ATTACK_BONUS, FURY_DEFENSE_PENALTY, REGEN_PER_TURN, StatusCounters,
    StatusEffect,
};

use crate::elemental::Resistance;

/// A player or enemy taking part in combat.
///
/// Fields are public so scripted collaborators can adjust state directly;
/// the combat manager re-validates participants after every turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub hp_max: u32,
    pub mp: u32,
    pub mp_max: u32,
    pub attack_base: u32,
    pub defense_base: u32,
    pub equipment: Loadout,
    pub status: StatusCounters,
    /// Poison damage per turn this character inflicts when it lands a venomous hit.
    pub venom_damage: u32,
    pub xp_reward: u32,
    pub gold_reward: u32,
    pub resistances: Vec<Resistance>,
    pub abilities: Vec<Ability>,
    pub inventory: Inventory,
}

impl Character {
    /// Creates a level 1 character at full HP and MP.
    pub fn new(
        name: impl Into<String>,
        hp_max: u32,
        mp_max: u32,
        attack_base: u32,
        defense_base: u32,
    ) -> Self {
        Self {
            name: name.into(),
            level: 1,
            hp: hp_max,
            hp_max,
            mp: mp_max,
            mp_max,
            attack_base,
            defense_base,
            equipment: Loadout::default(),
            status: StatusCounters::default(),
            venom_damage: 0,
            xp_reward: 0,
            gold_reward: 0,
            resistances: Vec::new(),
            abilities: Vec::new(),
            inventory: Inventory::new(),
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_venom(mut self, damage_per_turn: u32) -> Self {
        self.venom_damage = damage_per_turn;
        self
    }

    pub fn with_rewards(mut self, xp: u32, gold: u32) -> Self {
        self.xp_reward = xp;
        self.gold_reward = gold;
        self
    }

    pub fn with_resistances(mut self, resistances: Vec<Resistance>) -> Self {
        self.resistances = resistances;
        self
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.learn_ability(ability);
        self
    }

    pub fn with_item(mut self, item: Item, quantity: u32) -> Self {
        self.add_item(item, quantity);
        self
    }

    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equip(equipment);
        self
    }

    // ========================================================================
    // Derived stats
    // ========================================================================

    /// Base attack plus weapon bonus plus fury bonus.
    pub fn attack_total(&self) -> u32 {
        let fury = if self.has_fury() { FURY_ATTACK_BONUS } else { 0 };
        self.attack_base + self.equipment.attack_bonus() + fury
    }

    /// Base defense plus armor, shield and buff bonuses, minus the fury
    /// penalty. Never below zero.
    pub fn defense_total(&self) -> u32 {
        let buff = if self.has_defense_buff() {
            DEFENSE_BUFF_BONUS
        } else {
            0
        };
        let penalty = if self.has_fury() {
            FURY_DEFENSE_PENALTY
        } else {
            0
        };
        (self.defense_base + self.equipment.defense_bonus() + buff).saturating_sub(penalty)
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    /// Current HP as a percentage of the maximum.
    pub fn hp_percentage(&self) -> f64 {
        if self.hp_max == 0 {
            return 0.0;
        }
        f64::from(self.hp) / f64::from(self.hp_max) * 100.0
    }

    /// Current MP as a percentage of the maximum.
    ///
    /// A character without an MP pool reports 100%.
    pub fn mp_percentage(&self) -> f64 {
        if self.mp_max == 0 {
            return 100.0;
        }
        f64::from(self.mp) / f64::from(self.mp_max) * 100.0
    }

    // ========================================================================
    // Vitals
    // ========================================================================

    /// Restores up to `amount` HP and returns how much was actually restored.
    ///
    /// # Errors
    ///
    /// Returns [`CharacterStateError::HealDead`] if the character is dead.
    pub fn heal(&mut self, amount: u32) -> Result<u32, CharacterStateError> {
        if self.is_dead() {
            return Err(CharacterStateError::heal_dead(&self.name));
        }
        let restored = amount.min(self.hp_max.saturating_sub(self.hp));
        self.hp += restored;
        Ok(restored)
    }

    /// Restores up to `amount` MP and returns how much was actually restored.
    pub fn restore_mp(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.mp_max.saturating_sub(self.mp));
        self.mp += restored;
        restored
    }

    /// Applies damage and returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.hp);
        self.hp -= dealt;
        dealt
    }

    /// Spends `cost` MP. Returns false and leaves MP untouched if short.
    pub fn spend_mp(&mut self, cost: u32) -> bool {
        if self.mp < cost {
            return false;
        }
        self.mp -= cost;
        true
    }

    // ========================================================================
    // Abilities
    // ========================================================================

    pub fn knows_skill(&self, name: &str) -> bool {
        self.abilities.iter().any(|a| a.name == name)
    }

    pub fn find_ability(&self, name: &str) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.name == name)
    }

    /// Learns an ability. Returns false if one with the same name is known.
    pub fn learn_ability(&mut self, ability: Ability) -> bool {
        if self.knows_skill(&ability.name) {
            return false;
        }
        self.abilities.push(ability);
        true
    }

    /// Returns true if the ability is known and both MP and level suffice.
    pub fn can_use_skill(&self, ability: &Ability) -> bool {
        self.mp >= ability.mp_cost && self.level >= ability.min_level && self.knows_skill(&ability.name)
    }

    /// Known abilities the character can currently pay for.
    pub fn affordable_abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter().filter(|a| a.mp_cost <= self.mp)
    }

    // ========================================================================
    // Equipment and inventory
    // ========================================================================

    /// Equips gear in its slot, returning the piece it replaced.
    pub fn equip(&mut self, equipment: Equipment) -> Option<Equipment> {
        self.equipment.equip(equipment)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Equipment> {
        self.equipment.unequip(slot)
    }

    pub fn add_item(&mut self, item: Item, quantity: u32) -> bool {
        self.inventory.add(item, quantity)
    }

    pub fn remove_item(&mut self, name: &str, quantity: u32) -> bool {
        self.inventory.remove(name, quantity)
    }

    pub fn has_item(&self, name: &str, quantity: u32) -> bool {
        self.inventory.has(name, quantity)
    }
}
