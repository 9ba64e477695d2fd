use std::str::FromStr;

use crate::ai::EnemyAi;
use crate::character::Character;

use super::InvalidActionError;

/// Outcome tag of a combat session.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum CombatResult {
    #[default]
    Ongoing,
    PlayerWin,
    PlayerDead,
    Escaped,
}

impl CombatResult {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Action kinds accepted from string-driven callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
enum PlayerActionKind {
    Attack,
    Skill,
    Item,
    Escape,
}

/// What the player does on their turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    Attack,
    Skill(String),
    Item(String),
    Escape,
}

impl PlayerAction {
    /// Builds an action from a kind string and an optional name argument.
    ///
    /// `kind` is one of `attack`, `skill`, `item`, `escape`; skills and items
    /// need a non-empty `arg`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidActionError::UnknownAction`] for any other kind and
    /// [`InvalidActionError::MissingArgument`] when a name is required but
    /// absent or empty.
    pub fn parse(kind: &str, arg: Option<&str>) -> Result<Self, InvalidActionError> {
        let kind = PlayerActionKind::from_str(kind.trim())
            .map_err(|_| InvalidActionError::UnknownAction(kind.to_string()))?;

        let named = |label: &str| {
            arg.map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .ok_or_else(|| InvalidActionError::missing_argument(label))
        };

        match kind {
            PlayerActionKind::Attack => Ok(Self::Attack),
            PlayerActionKind::Skill => named("skill").map(Self::Skill),
            PlayerActionKind::Item => named("item").map(Self::Item),
            PlayerActionKind::Escape => Ok(Self::Escape),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Skill(_) => "skill",
            Self::Item(_) => "item",
            Self::Escape => "escape",
        }
    }
}

/// The single live encounter owned by the combat manager.
#[derive(Debug)]
pub(crate) struct CombatSession {
    pub player: Character,
    pub enemy: Character,
    pub ai: EnemyAi,
    pub turn_count: u32,
    pub log: Vec<String>,
    pub result: CombatResult,
}

impl CombatSession {
    pub fn new(player: Character, enemy: Character, ai: EnemyAi) -> Self {
        Self {
            player,
            enemy,
            ai,
            turn_count: 0,
            log: Vec::new(),
            result: CombatResult::Ongoing,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        self.result == CombatResult::Ongoing
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            active: true,
            player: Some(self.player.clone()),
            enemy: Some(self.enemy.clone()),
            turn_count: self.turn_count,
            log: self.log.clone(),
            result: self.result,
        }
    }

    pub fn into_snapshot(self) -> SessionSnapshot {
        SessionSnapshot {
            active: true,
            player: Some(self.player),
            enemy: Some(self.enemy),
            turn_count: self.turn_count,
            log: self.log,
            result: self.result,
        }
    }
}

/// Point-in-time view of the combat session.
///
/// `active` is false and the participants are absent when no session exists.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub active: bool,
    pub player: Option<Character>,
    pub enemy: Option<Character>,
    pub turn_count: u32,
    pub log: Vec<String>,
    pub result: CombatResult,
}

impl SessionSnapshot {
    pub fn inactive() -> Self {
        Self::default()
    }

    pub fn is_over(&self) -> bool {
        self.result.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_kinds() {
        assert_eq!(PlayerAction::parse("attack", None), Ok(PlayerAction::Attack));
        assert_eq!(PlayerAction::parse("Escape", Some("ignored")), Ok(PlayerAction::Escape));
        assert_eq!(
            PlayerAction::parse("skill", Some("Fire Bolt")),
            Ok(PlayerAction::Skill("Fire Bolt".into()))
        );
        assert_eq!(
            PlayerAction::parse("item", Some("Potion")),
            Ok(PlayerAction::Item("Potion".into()))
        );
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        assert_eq!(
            PlayerAction::parse("dance", None),
            Err(InvalidActionError::UnknownAction("dance".into()))
        );
    }

    #[test]
    fn parse_requires_names() {
        assert_eq!(
            PlayerAction::parse("skill", None),
            Err(InvalidActionError::missing_argument("skill"))
        );
        assert_eq!(
            PlayerAction::parse("item", Some("  ")),
            Err(InvalidActionError::missing_argument("item"))
        );
    }

    #[test]
    fn result_display_is_snake_case() {
        assert_eq!(CombatResult::PlayerWin.to_string(), "player_win");
        assert!(!CombatResult::Ongoing.is_terminal());
        assert!(CombatResult::Escaped.is_terminal());
    }
}
