//! Ability catalog loader.

use std::path::Path;

use combat_core::Ability;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::names::{parse_ability_kind, parse_element};

/// Authored form of an [`Ability`]; `kind` and `element` are names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilitySpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: String,
    pub mp_cost: u32,
    #[serde(default)]
    pub effect_value: u32,
    #[serde(default = "default_min_level")]
    pub min_level: u32,
    #[serde(default)]
    pub element: Option<String>,
}

fn default_min_level() -> u32 {
    1
}

impl AbilitySpec {
    /// Resolves the string fields into an [`Ability`].
    pub fn resolve(&self) -> LoadResult<Ability> {
        let kind = parse_ability_kind(&self.kind)
            .map_err(|e| anyhow::anyhow!("Ability '{}': {}", self.name, e))?;
        let mut ability = Ability::new(&self.name, kind, self.mp_cost, self.effect_value)
            .with_min_level(self.min_level)
            .with_description(&self.description);
        if let Some(element) = &self.element {
            let element = parse_element(element)
                .map_err(|e| anyhow::anyhow!("Ability '{}': {}", self.name, e))?;
            ability = ability.with_element(element);
        }
        Ok(ability)
    }
}

/// Ability catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityCatalog {
    pub abilities: Vec<AbilitySpec>,
}

/// Loader for ability catalog from RON files.
pub struct AbilityLoader;

impl AbilityLoader {
    /// Load ability catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing AbilityCatalog
    pub fn load(path: &Path) -> LoadResult<Vec<Ability>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an ability catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Ability>> {
        let catalog: AbilityCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability catalog RON: {}", e))?;

        let abilities = catalog
            .abilities
            .iter()
            .map(AbilitySpec::resolve)
            .collect::<LoadResult<Vec<_>>>()?;
        tracing::debug!(count = abilities.len(), "abilities loaded");
        Ok(abilities)
    }
}
