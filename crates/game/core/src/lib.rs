//! Deterministic turn-based combat rules.
//!
//! `combat-core` defines the canonical combat rules (characters, elemental
//! damage, enemy AI, session management) and exposes pure APIs that content
//! loaders and front ends build on. All session mutation flows through
//! [`engine::CombatManager`], and every random draw comes from an injected
//! [`env::RollSource`].
pub mod ai;
pub mod character;
pub mod config;
pub mod elemental;
pub mod engine;
pub mod env;
pub mod error;

pub use ai::{
    ActionName, AiAction, AiDecision, AiTarget, BehaviorProfile, Condition, EnemyAi, Pattern,
    Personality, Situation, SpecialTrigger, Trigger,
};
pub use character::{
    Ability, AbilityKind, Character, CharacterStateError, Equipment, EquipmentSlot, Inventory,
    InventorySortKey, Item, ItemStack, Loadout, StatusCounters, StatusEffect,
};
pub use config::CombatConfig;
pub use elemental::{
    Affinity, Element, ElementalDamage, Resistance, calculate_elemental_damage, effectiveness,
    effectiveness_description, enchant_weapon, recommended_elements,
};
pub use engine::{
    CombatError, CombatManager, CombatManagerBuilder, CombatResult, InsufficientResourcesError,
    IntegrityViolation, InvalidActionError, PlayerAction, ResourceNotFoundError, SessionSnapshot,
    TurnError,
};
pub use env::{
    AbilityOracle, CatalogSnapshot, CombatEvent, EnemyOracle, EnemyTemplate, EquipmentOracle,
    EventSink, ItemOracle, NullSink, PcgRng, RecordingSink, RngOracle, RollSource, ScriptedRolls,
    SeededRolls, TracingSink,
};
pub use error::{ErrorSeverity, GameError};
