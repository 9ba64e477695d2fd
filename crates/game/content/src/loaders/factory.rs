//! Content factory for building catalogs from data files.

use std::path::{Path, PathBuf};

use combat_core::{Ability, CatalogSnapshot, CombatConfig, EnemyTemplate, Equipment, Item};

use crate::behaviors::BehaviorRegistry;
use crate::loaders::{
    AbilityLoader, BehaviorLoader, ConfigLoader, EnemyLoader, EquipmentLoader, ItemLoader,
    LoadResult,
};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── abilities.ron
/// ├── items.ron
/// ├── equipment.ron
/// ├── behaviors.ron
/// └── enemies.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load ability catalog from `abilities.ron`.
    pub fn load_abilities(&self) -> LoadResult<Vec<Ability>> {
        AbilityLoader::load(&self.data_dir.join("abilities.ron"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<Item>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load equipment catalog from `equipment.ron`.
    pub fn load_equipment(&self) -> LoadResult<Vec<Equipment>> {
        EquipmentLoader::load(&self.data_dir.join("equipment.ron"))
    }

    /// Load behavior presets from `behaviors.ron`.
    pub fn load_behaviors(&self) -> LoadResult<BehaviorRegistry> {
        BehaviorLoader::load(&self.data_dir.join("behaviors.ron"))
    }

    /// Load enemy catalog from `enemies.ron`.
    ///
    /// # Arguments
    ///
    /// * `behaviors` - Registry of behavior presets (load via `load_behaviors()`)
    pub fn load_enemies(&self, behaviors: &BehaviorRegistry) -> LoadResult<Vec<EnemyTemplate>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"), behaviors)
    }

    /// Loads every catalog into one [`CatalogSnapshot`].
    ///
    /// Fails if an enemy references an ability missing from the catalog, so a
    /// snapshot that loads can always spawn every enemy it lists.
    pub fn load_catalog(&self) -> LoadResult<CatalogSnapshot> {
        let mut catalog = CatalogSnapshot::new();

        for ability in self.load_abilities()? {
            catalog.insert_ability(ability);
        }
        for item in self.load_items()? {
            catalog.insert_item(item);
        }
        for equipment in self.load_equipment()? {
            catalog.insert_equipment(equipment);
        }

        let behaviors = self.load_behaviors()?;
        for enemy in self.load_enemies(&behaviors)? {
            if let Some(missing) = enemy
                .abilities
                .iter()
                .find(|name| !catalog.abilities.contains_key(name.as_str()))
            {
                anyhow::bail!(
                    "Enemy '{}' references unknown ability '{}'",
                    enemy.name,
                    missing
                );
            }
            catalog.insert_enemy(enemy);
        }

        tracing::info!(
            data_dir = %self.data_dir.display(),
            abilities = catalog.abilities.len(),
            items = catalog.items.len(),
            equipment = catalog.equipment.len(),
            enemies = catalog.enemies.len(),
            "content loaded"
        );
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
