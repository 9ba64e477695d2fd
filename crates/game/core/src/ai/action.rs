use super::ActionName;

/// Who an AI action is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AiTarget {
    Player,
    Myself,
}

/// Resolved enemy action handed to the combat manager.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AiAction {
    Attack,
    /// Use a known ability; `None` when nothing was affordable.
    UseAbility(Option<String>),
    Defend,
    Heal,
    Taunt,
    Intimidate,
    Flee,
    ChargeAttack,
    Special,
}

impl AiAction {
    pub fn target(&self) -> AiTarget {
        match self {
            Self::Defend | Self::Heal | Self::Flee => AiTarget::Myself,
            _ => AiTarget::Player,
        }
    }

    /// Flavor line shown when no trigger text overrides it.
    pub fn default_text(&self) -> Option<&'static str> {
        match self {
            Self::Taunt => Some("The enemy taunts you!"),
            Self::Intimidate => Some("The enemy tries to intimidate you!"),
            Self::Flee => Some("The enemy tries to flee!"),
            _ => None,
        }
    }
}

/// An [`AiAction`] plus the text to announce before resolving it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiDecision {
    pub action: AiAction,
    pub text: Option<String>,
}

impl AiDecision {
    pub fn new(action: AiAction) -> Self {
        let text = action.default_text().map(str::to_string);
        Self { action, text }
    }

    pub fn basic_attack() -> Self {
        Self::new(AiAction::Attack)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn target(&self) -> AiTarget {
        self.action.target()
    }
}

impl ActionName {
    /// Maps a name to its action; `UseAbility` carries the chosen ability.
    pub fn to_action(self, ability: Option<String>) -> AiAction {
        match self {
            Self::BasicAttack => AiAction::Attack,
            Self::UseAbility => AiAction::UseAbility(ability),
            Self::Defend => AiAction::Defend,
            Self::Heal => AiAction::Heal,
            Self::Taunt => AiAction::Taunt,
            Self::Intimidate => AiAction::Intimidate,
            Self::FleeAttempt => AiAction::Flee,
            Self::ChargeAttack => AiAction::ChargeAttack,
            Self::SpecialMove => AiAction::Special,
        }
    }
}
