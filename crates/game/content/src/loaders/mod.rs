//! Content loaders for reading combat data from files.
//!
//! Each loader turns one RON/TOML file into `combat-core` types. String
//! fields are resolved through [`crate::names`] so a typo fails the load
//! instead of surfacing mid-combat.

pub mod ability;
pub mod behavior;
pub mod config;
pub mod enemy;
pub mod equipment;
pub mod factory;
pub mod item;

pub use ability::{AbilityLoader, AbilitySpec};
pub use behavior::BehaviorLoader;
pub use config::ConfigLoader;
pub use enemy::{EnemyLoader, EnemySpec, ResistanceSpec};
pub use equipment::EquipmentLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
