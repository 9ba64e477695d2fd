//! Traits describing everything the combat engine consumes from outside.
//!
//! Oracles expose read-only catalog data and deterministic randomness; sinks
//! receive domain events. The engine depends only on these traits so hosts
//! and tests can swap implementations freely.
mod catalog;
mod events;
mod rng;
mod snapshot;

pub use catalog::{AbilityOracle, EnemyOracle, EnemyTemplate, EquipmentOracle, ItemOracle};
pub use events::{CombatEvent, EventSink, NullSink, RecordingSink, TracingSink};
pub use rng::{PcgRng, RngOracle, RollSource, ScriptedRolls, SeededRolls, compute_seed};
pub use snapshot::{CatalogSnapshot, spawn_enemy};
