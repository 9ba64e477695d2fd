//! Equipment catalog loader.

use std::path::Path;

use combat_core::Equipment;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Equipment catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentCatalog {
    pub equipment: Vec<Equipment>,
}

/// Loader for equipment catalog from RON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load equipment catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Equipment>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an equipment catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Equipment>> {
        let catalog: EquipmentCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment catalog RON: {}", e))?;
        tracing::debug!(count = catalog.equipment.len(), "equipment loaded");
        Ok(catalog.equipment)
    }
}
