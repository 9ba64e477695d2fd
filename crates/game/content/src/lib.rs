//! Data-driven combat content and loaders.
//!
//! This crate houses the string-facing side of the combat rules and provides
//! loaders for RON/TOML data files:
//! - Ability catalogs (data-driven via RON)
//! - Item and equipment catalogs (data-driven via RON)
//! - Enemy behavior presets (data-driven via RON)
//! - Enemy templates (data-driven via RON)
//! - Combat configuration (data-driven via TOML)
//!
//! Everything loaded here is resolved into `combat-core` types and served
//! through a [`combat_core::CatalogSnapshot`].

pub mod behaviors;
pub mod names;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use behaviors::{BehaviorRegistry, BehaviorSpec, PatternSpec, SpecialSpec};
pub use names::{
    NameError, parse_ability_kind, parse_action, parse_affinity, parse_condition, parse_element,
    parse_equipment_slot, parse_personality, parse_trigger,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    AbilityLoader, AbilitySpec, BehaviorLoader, ConfigLoader, ContentFactory, EnemyLoader,
    EnemySpec, EquipmentLoader, ItemLoader, ResistanceSpec,
};
