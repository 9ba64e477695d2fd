//! Behavior preset loader.

use std::collections::HashMap;
use std::path::Path;

use crate::behaviors::{BehaviorRegistry, BehaviorSpec};
use crate::loaders::{LoadResult, read_file};

/// Loader for behavior presets from RON files.
///
/// File format: `HashMap<String, BehaviorSpec>`
///
/// Example:
/// ```ron
/// {
///     "pack_hunter": (
///         personality: "cunning",
///         patterns: [(condition: "always", actions: ["basic_attack"], weight: 1.0)],
///     ),
/// }
/// ```
pub struct BehaviorLoader;

impl BehaviorLoader {
    pub fn load(path: &Path) -> LoadResult<BehaviorRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load behaviors from {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<BehaviorRegistry> {
        let raw: HashMap<String, BehaviorSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse behavior RON: {}", e))?;

        let mut registry = BehaviorRegistry::new();
        for (name, spec) in raw {
            let profile = spec
                .resolve()
                .map_err(|e| anyhow::anyhow!("Behavior preset '{}': {}", name, e))?;
            registry.insert(name, profile);
        }
        tracing::debug!(count = registry.len(), "behavior presets loaded");
        Ok(registry)
    }
}
