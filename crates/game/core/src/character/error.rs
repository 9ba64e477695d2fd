use crate::error::{ErrorSeverity, GameError};

use super::StatusEffect;

/// Errors raised when an operation is invalid for the character's current state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterStateError {
    #[error("{name} is dead and cannot be healed")]
    HealDead { name: String },

    #[error("{name} is dead and cannot receive {effect}")]
    EffectOnDead { name: String, effect: StatusEffect },
}

impl CharacterStateError {
    pub fn heal_dead(name: impl Into<String>) -> Self {
        Self::HealDead { name: name.into() }
    }

    pub fn effect_on_dead(name: impl Into<String>, effect: StatusEffect) -> Self {
        Self::EffectOnDead {
            name: name.into(),
            effect,
        }
    }
}

impl GameError for CharacterStateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::HealDead { .. } => "CHARACTER_HEAL_DEAD",
            Self::EffectOnDead { .. } => "CHARACTER_EFFECT_ON_DEAD",
        }
    }
}
