//! Error types surfaced by combat operations.

use crate::character::{AbilityKind, CharacterStateError};
use crate::error::{ErrorSeverity, GameError};

use super::CombatResult;

/// Session lifecycle violations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error("no combat is active")]
    NoSession,

    #[error("combat already finished ({result})")]
    AlreadyFinished { result: CombatResult },

    #[error("a combat is already in progress")]
    SessionInProgress,

    #[error("{name} cannot fight while dead")]
    ParticipantDead { name: String },
}

impl CombatError {
    pub fn participant_dead(name: impl Into<String>) -> Self {
        Self::ParticipantDead { name: name.into() }
    }
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoSession | Self::AlreadyFinished { .. } | Self::SessionInProgress => {
                ErrorSeverity::Validation
            }
            Self::ParticipantDead { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoSession => "COMBAT_NO_SESSION",
            Self::AlreadyFinished { .. } => "COMBAT_ALREADY_FINISHED",
            Self::SessionInProgress => "COMBAT_SESSION_IN_PROGRESS",
            Self::ParticipantDead { .. } => "COMBAT_PARTICIPANT_DEAD",
        }
    }
}

/// Malformed or disallowed requests.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidActionError {
    #[error("unknown combat action '{0}'")]
    UnknownAction(String),

    #[error("unknown ability kind '{0}'")]
    UnknownAbilityKind(String),

    #[error("unknown inventory sort key '{0}'")]
    UnknownSortKey(String),

    #[error("{action} requires a name")]
    MissingArgument { action: String },

    #[error("{skill} requires level {required} (current level {current})")]
    LevelTooLow {
        skill: String,
        required: u32,
        current: u32,
    },

    #[error("{skill} is a {kind} ability and cannot be used in combat")]
    UnsupportedAbility { skill: String, kind: AbilityKind },
}

impl InvalidActionError {
    pub fn missing_argument(action: impl Into<String>) -> Self {
        Self::MissingArgument {
            action: action.into(),
        }
    }
}

impl GameError for InvalidActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LevelTooLow { .. } => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAction(_) => "INVALID_ACTION_UNKNOWN_ACTION",
            Self::UnknownAbilityKind(_) => "INVALID_ACTION_UNKNOWN_ABILITY_KIND",
            Self::UnknownSortKey(_) => "INVALID_ACTION_UNKNOWN_SORT_KEY",
            Self::MissingArgument { .. } => "INVALID_ACTION_MISSING_ARGUMENT",
            Self::LevelTooLow { .. } => "INVALID_ACTION_LEVEL_TOO_LOW",
            Self::UnsupportedAbility { .. } => "INVALID_ACTION_UNSUPPORTED_ABILITY",
        }
    }
}

/// Not enough of a spendable resource.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsufficientResourcesError {
    #[error("not enough MP for {skill}: need {required}, have {available}")]
    Mp {
        skill: String,
        required: u32,
        available: u32,
    },
}

impl GameError for InsufficientResourcesError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Mp { .. } => "INSUFFICIENT_MP",
        }
    }
}

/// A referenced ability, item or enemy does not exist where it was looked up.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceNotFoundError {
    #[error("{owner} does not know ability '{ability}'")]
    UnknownAbility { owner: String, ability: String },

    #[error("{owner} has no '{item}' in the inventory")]
    MissingItem { owner: String, item: String },

    #[error("no enemy named '{0}' in the catalog")]
    UnknownEnemy(String),
}

impl ResourceNotFoundError {
    pub fn unknown_ability(owner: impl Into<String>, ability: impl Into<String>) -> Self {
        Self::UnknownAbility {
            owner: owner.into(),
            ability: ability.into(),
        }
    }

    pub fn missing_item(owner: impl Into<String>, item: impl Into<String>) -> Self {
        Self::MissingItem {
            owner: owner.into(),
            item: item.into(),
        }
    }

    pub fn unknown_enemy(name: impl Into<String>) -> Self {
        Self::UnknownEnemy(name.into())
    }
}

impl GameError for ResourceNotFoundError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAbility { .. } => "RESOURCE_UNKNOWN_ABILITY",
            Self::MissingItem { .. } => "RESOURCE_MISSING_ITEM",
            Self::UnknownEnemy(_) => "RESOURCE_UNKNOWN_ENEMY",
        }
    }
}

/// Any failure a turn entry point can report.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error(transparent)]
    InvalidAction(#[from] InvalidActionError),

    #[error(transparent)]
    InsufficientResources(#[from] InsufficientResourcesError),

    #[error(transparent)]
    ResourceNotFound(#[from] ResourceNotFoundError),

    #[error(transparent)]
    CharacterState(#[from] CharacterStateError),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Combat(e) => e.severity(),
            Self::InvalidAction(e) => e.severity(),
            Self::InsufficientResources(e) => e.severity(),
            Self::ResourceNotFound(e) => e.severity(),
            Self::CharacterState(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Combat(e) => e.error_code(),
            Self::InvalidAction(e) => e.error_code(),
            Self::InsufficientResources(e) => e.error_code(),
            Self::ResourceNotFound(e) => e.error_code(),
            Self::CharacterState(e) => e.error_code(),
        }
    }
}
