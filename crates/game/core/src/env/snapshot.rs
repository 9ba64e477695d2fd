//! In-memory catalog backing every catalog oracle.

use std::collections::BTreeMap;

use super::{AbilityOracle, EnemyOracle, EnemyTemplate, EquipmentOracle, ItemOracle};
use crate::ai::BehaviorProfile;
use crate::character::{Ability, Character, Equipment, Item};
use crate::engine::ResourceNotFoundError;

/// Owned snapshot of all catalog data, keyed by name.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogSnapshot {
    pub abilities: BTreeMap<String, Ability>,
    pub items: BTreeMap<String, Item>,
    pub equipment: BTreeMap<String, Equipment>,
    pub enemies: BTreeMap<String, EnemyTemplate>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_ability(&mut self, ability: Ability) {
        self.abilities.insert(ability.name.clone(), ability);
    }

    pub fn insert_item(&mut self, item: Item) {
        self.items.insert(item.name.clone(), item);
    }

    pub fn insert_equipment(&mut self, equipment: Equipment) {
        self.equipment.insert(equipment.name.clone(), equipment);
    }

    pub fn insert_enemy(&mut self, enemy: EnemyTemplate) {
        self.enemies.insert(enemy.name.clone(), enemy);
    }

    /// Builds a fresh enemy and its behavior profile from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceNotFoundError`] if the enemy or one of its abilities
    /// is not catalogued.
    pub fn spawn_enemy(&self, name: &str) -> Result<(Character, BehaviorProfile), ResourceNotFoundError> {
        spawn_enemy(self, self, name)
    }
}

/// Builds an enemy [`Character`] at full HP/MP plus its behavior profile.
///
/// # Errors
///
/// Returns [`ResourceNotFoundError::UnknownEnemy`] if `name` is not in
/// `enemies`, or [`ResourceNotFoundError::UnknownAbility`] if the template
/// references an ability missing from `abilities`.
pub fn spawn_enemy(
    enemies: &dyn EnemyOracle,
    abilities: &dyn AbilityOracle,
    name: &str,
) -> Result<(Character, BehaviorProfile), ResourceNotFoundError> {
    let template = enemies
        .enemy(name)
        .ok_or_else(|| ResourceNotFoundError::unknown_enemy(name))?;

    let mut enemy = Character::new(
        template.name.clone(),
        template.hp_max,
        template.mp_max,
        template.attack,
        template.defense,
    )
    .with_level(template.level)
    .with_venom(template.venom_damage)
    .with_rewards(template.xp_reward, template.gold_reward)
    .with_resistances(template.resistances.clone());

    for ability_name in &template.abilities {
        let ability = abilities
            .ability(ability_name)
            .ok_or_else(|| ResourceNotFoundError::unknown_ability(&template.name, ability_name))?;
        enemy.learn_ability(ability);
    }

    Ok((enemy, template.behavior))
}

impl AbilityOracle for CatalogSnapshot {
    fn ability(&self, name: &str) -> Option<Ability> {
        self.abilities.get(name).cloned()
    }

    fn ability_names(&self) -> Vec<String> {
        self.abilities.keys().cloned().collect()
    }
}

impl ItemOracle for CatalogSnapshot {
    fn item(&self, name: &str) -> Option<Item> {
        self.items.get(name).cloned()
    }

    fn item_names(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }
}

impl EquipmentOracle for CatalogSnapshot {
    fn equipment(&self, name: &str) -> Option<Equipment> {
        self.equipment.get(name).cloned()
    }

    fn equipment_names(&self) -> Vec<String> {
        self.equipment.keys().cloned().collect()
    }
}

impl EnemyOracle for CatalogSnapshot {
    fn enemy(&self, name: &str) -> Option<EnemyTemplate> {
        self.enemies.get(name).cloned()
    }

    fn enemy_names(&self) -> Vec<String> {
        self.enemies.keys().cloned().collect()
    }
}
