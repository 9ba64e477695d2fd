//! Elemental damage system.
//!
//! A static effectiveness chart between elements, per-defender affinities,
//! and the damage pipeline that combines them with variance and crits.
mod chart;
mod damage;
mod element;

pub use chart::{effectiveness, effectiveness_description};
pub use damage::{
    ELEMENTAL_CRIT_MULTIPLIER, ElementalDamage, VARIANCE_MAX, VARIANCE_MIN,
    calculate_elemental_damage, enchant_weapon, recommended_elements,
};
pub use element::{Affinity, Element, Resistance};
