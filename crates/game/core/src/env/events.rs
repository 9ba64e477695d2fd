//! Domain events published by the combat manager.
//!
//! Delivery is fire-and-forget: the manager never inspects what a sink does
//! with an event, and a sink must not fail the turn that emitted it.

use std::sync::{Mutex, PoisonError};

/// Notable combat occurrences for external subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    CombatStart {
        player_name: String,
        enemy_name: String,
        player_level: u32,
        enemy_hp_max: u32,
    },
    CombatEnd {
        winner: String,
        loser: String,
        turn_count: u32,
    },
    PlayerDeath {
        player_name: String,
        enemy_name: String,
        turn_count: u32,
    },
    SkillUsed {
        user: String,
        skill: String,
        target: String,
        mp_cost: u32,
    },
    ItemUsed {
        user: String,
        item: String,
        effects_applied: Vec<String>,
    },
    CombatError {
        reason: String,
        turn_count: u32,
    },
}

impl CombatEvent {
    /// Routing key for event buses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CombatStart { .. } => "combat_start",
            Self::CombatEnd { .. } => "combat_end",
            Self::PlayerDeath { .. } => "player_death",
            Self::SkillUsed { .. } => "skill_used",
            Self::ItemUsed { .. } => "item_used",
            Self::CombatError { .. } => "combat_error",
        }
    }
}

/// Receiver of combat events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: CombatEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: CombatEvent) {}
}

/// Logs every event at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: CombatEvent) {
        tracing::debug!(kind = event.kind(), ?event, "combat event");
    }
}

/// Collects events in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<CombatEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every event received so far, in emission order.
    pub fn events(&self) -> Vec<CombatEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.events().iter().map(CombatEvent::kind).collect()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: CombatEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
