//! Enemy catalog loader.

use std::path::Path;

use combat_core::{EnemyTemplate, Resistance};
use serde::{Deserialize, Serialize};

use crate::behaviors::BehaviorRegistry;
use crate::loaders::{LoadResult, read_file};
use crate::names::{parse_affinity, parse_element};

/// Authored elemental resistance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResistanceSpec {
    pub element: String,
    pub affinity: String,
}

/// Authored form of an [`EnemyTemplate`].
///
/// `behavior` names a preset in the [`BehaviorRegistry`]; `None` uses the
/// default profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpec {
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    pub hp_max: u32,
    #[serde(default)]
    pub mp_max: u32,
    pub attack: u32,
    pub defense: u32,
    #[serde(default)]
    pub venom_damage: u32,
    #[serde(default)]
    pub xp_reward: u32,
    #[serde(default)]
    pub gold_reward: u32,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub resistances: Vec<ResistanceSpec>,
    #[serde(default)]
    pub behavior: Option<String>,
}

fn default_level() -> u32 {
    1
}

impl EnemySpec {
    /// Resolves names and the behavior preset into an [`EnemyTemplate`].
    pub fn resolve(&self, behaviors: &BehaviorRegistry) -> LoadResult<EnemyTemplate> {
        let context = |e: &dyn std::fmt::Display| anyhow::anyhow!("Enemy '{}': {}", self.name, e);

        if self.hp_max == 0 {
            return Err(context(&"hp_max must be positive"));
        }
        if self.level == 0 {
            return Err(context(&"level must be at least 1"));
        }

        let resistances = self
            .resistances
            .iter()
            .map(|r| {
                let element = parse_element(&r.element).map_err(|e| context(&e))?;
                let affinity = parse_affinity(&r.affinity).map_err(|e| context(&e))?;
                Ok(Resistance::new(element, affinity))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        let behavior = behaviors
            .resolve(self.behavior.as_deref())
            .map_err(|e| context(&e))?;

        let mut template =
            EnemyTemplate::new(&self.name, self.hp_max, self.mp_max, self.attack, self.defense);
        template.level = self.level;
        template.venom_damage = self.venom_damage;
        template.xp_reward = self.xp_reward;
        template.gold_reward = self.gold_reward;
        template.abilities = self.abilities.clone();
        template.resistances = resistances;
        template.behavior = behavior;
        Ok(template)
    }
}

/// Enemy catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemySpec>,
}

/// Loader for enemy catalog from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load enemy catalog from a RON file, resolving behavior presets.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing EnemyCatalog
    /// * `behaviors` - Registry of behavior presets (load via `BehaviorLoader`)
    pub fn load(path: &Path, behaviors: &BehaviorRegistry) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content, behaviors)
    }

    pub fn parse(content: &str, behaviors: &BehaviorRegistry) -> LoadResult<Vec<EnemyTemplate>> {
        let catalog: EnemyCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        let enemies = catalog
            .enemies
            .iter()
            .map(|spec| spec.resolve(behaviors))
            .collect::<LoadResult<Vec<_>>>()?;
        tracing::debug!(count = enemies.len(), "enemies loaded");
        Ok(enemies)
    }
}
