use crate::ai::BehaviorProfile;
use crate::character::{Ability, Equipment, Item};
use crate::elemental::Resistance;

/// Read-only ability definitions keyed by name.
pub trait AbilityOracle: Send + Sync {
    fn ability(&self, name: &str) -> Option<Ability>;

    fn ability_names(&self) -> Vec<String>;
}

/// Read-only consumable item definitions keyed by name.
pub trait ItemOracle: Send + Sync {
    fn item(&self, name: &str) -> Option<Item>;

    fn item_names(&self) -> Vec<String>;
}

/// Read-only equipment definitions keyed by name.
pub trait EquipmentOracle: Send + Sync {
    fn equipment(&self, name: &str) -> Option<Equipment>;

    fn equipment_names(&self) -> Vec<String>;
}

/// Read-only enemy templates keyed by name.
pub trait EnemyOracle: Send + Sync {
    fn enemy(&self, name: &str) -> Option<EnemyTemplate>;

    fn enemy_names(&self) -> Vec<String>;
}

/// Blueprint for spawning an enemy [`Character`](crate::Character).
///
/// Abilities are referenced by name and resolved against an
/// [`AbilityOracle`] at spawn time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub level: u32,
    pub hp_max: u32,
    pub mp_max: u32,
    pub attack: u32,
    pub defense: u32,
    pub venom_damage: u32,
    pub xp_reward: u32,
    pub gold_reward: u32,
    pub abilities: Vec<String>,
    pub resistances: Vec<Resistance>,
    pub behavior: BehaviorProfile,
}

impl EnemyTemplate {
    pub fn new(name: impl Into<String>, hp_max: u32, mp_max: u32, attack: u32, defense: u32) -> Self {
        Self {
            name: name.into(),
            level: 1,
            hp_max,
            mp_max,
            attack,
            defense,
            venom_damage: 0,
            xp_reward: 0,
            gold_reward: 0,
            abilities: Vec::new(),
            resistances: Vec::new(),
            behavior: BehaviorProfile::default(),
        }
    }
}
