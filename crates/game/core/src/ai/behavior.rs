//! Behavior profiles: the data that drives an enemy's decisions.

/// Broad temperament that biases which action is picked from a pattern.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Personality {
    #[default]
    Aggressive,
    Defensive,
    Cunning,
    Berserker,
    Tactical,
    Cowardly,
}

impl Personality {
    pub fn description(self) -> &'static str {
        match self {
            Self::Aggressive => "This enemy is extremely aggressive and attacks without hesitation.",
            Self::Defensive => "This enemy prefers to defend and wait for an opening.",
            Self::Cunning => "This enemy is clever and adapts its strategy.",
            Self::Berserker => "This enemy fights with uncontrolled fury.",
            Self::Tactical => "This enemy plans its moves carefully.",
            Self::Cowardly => "This enemy prefers to avoid direct confrontation.",
        }
    }
}

/// Situation test gating a pattern.
///
/// HP and MP thresholds refer to the enemy; `above` is strict, `below` is
/// inclusive.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Condition {
    #[strum(serialize = "hp_above_75")]
    HpAbove75,
    #[strum(serialize = "hp_above_50")]
    HpAbove50,
    #[strum(serialize = "hp_above_25")]
    HpAbove25,
    #[strum(serialize = "hp_below_75")]
    HpBelow75,
    #[strum(serialize = "hp_below_50")]
    HpBelow50,
    #[strum(serialize = "hp_below_25")]
    HpBelow25,
    #[strum(serialize = "mp_above_50")]
    MpAbove50,
    #[strum(serialize = "mp_below_50")]
    MpBelow50,
    #[strum(serialize = "first_turn")]
    FirstTurn,
    #[strum(serialize = "player_hp_low")]
    PlayerHpLow,
    #[strum(serialize = "player_hp_high")]
    PlayerHpHigh,
    #[strum(serialize = "always")]
    Always,
}

/// Named action an enemy can choose.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionName {
    BasicAttack,
    UseAbility,
    Defend,
    Heal,
    Taunt,
    Intimidate,
    FleeAttempt,
    ChargeAttack,
    SpecialMove,
}

impl ActionName {
    /// Actions whose name marks them as attacks.
    pub const fn is_attack(self) -> bool {
        matches!(self, Self::BasicAttack | Self::ChargeAttack)
    }

    pub const fn is_defensive(self) -> bool {
        matches!(self, Self::Defend | Self::Heal)
    }
}

/// One-shot trigger checked before any pattern.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Trigger {
    /// The enemy's first decision of the encounter.
    FirstTurn,
    /// Enemy HP under 25%.
    LowHp,
    /// Player HP under 30%.
    PlayerLowHp,
}

/// Candidate actions available while `condition` holds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    pub condition: Condition,
    pub actions: Vec<ActionName>,
    #[cfg_attr(feature = "serde", serde(default = "default_weight"))]
    pub weight: f64,
}

#[cfg(feature = "serde")]
fn default_weight() -> f64 {
    1.0
}

impl Pattern {
    pub fn new(condition: Condition, actions: impl Into<Vec<ActionName>>, weight: f64) -> Self {
        Self {
            condition,
            actions: actions.into(),
            weight,
        }
    }
}

/// Scripted action fired at most once per encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialTrigger {
    pub trigger: Trigger,
    pub action: ActionName,
    pub text: String,
}

impl SpecialTrigger {
    pub fn new(trigger: Trigger, action: ActionName, text: impl Into<String>) -> Self {
        Self {
            trigger,
            action,
            text: text.into(),
        }
    }
}

/// Complete decision profile of an enemy.
///
/// `aggression_level` and `intelligence_level` are descriptive metadata and do
/// not influence selection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorProfile {
    pub personality: Personality,
    pub patterns: Vec<Pattern>,
    pub special_triggers: Vec<SpecialTrigger>,
    pub resistances: Vec<String>,
    pub weaknesses: Vec<String>,
    pub preferred_range: String,
    pub aggression_level: f64,
    pub intelligence_level: f64,
}

impl Default for BehaviorProfile {
    /// Aggressive brawler: attacks while healthy, may defend when hurt.
    fn default() -> Self {
        Self {
            personality: Personality::Aggressive,
            patterns: vec![
                Pattern::new(Condition::HpAbove50, [ActionName::BasicAttack], 1.0),
                Pattern::new(
                    Condition::HpBelow50,
                    [ActionName::BasicAttack, ActionName::Defend],
                    1.0,
                ),
            ],
            special_triggers: Vec::new(),
            resistances: Vec::new(),
            weaknesses: Vec::new(),
            preferred_range: "close".to_string(),
            aggression_level: 0.5,
            intelligence_level: 0.5,
        }
    }
}

impl BehaviorProfile {
    pub fn new(personality: Personality) -> Self {
        Self {
            personality,
            patterns: Vec::new(),
            ..Self::default()
        }
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn with_special(mut self, special: SpecialTrigger) -> Self {
        self.special_triggers.push(special);
        self
    }

    /// Damage multiplier for a damage tag: halved if resisted, +50% if a
    /// weakness, unchanged otherwise.
    pub fn damage_modifier(&self, tag: &str) -> f64 {
        if self.resistances.iter().any(|r| r == tag) {
            0.5
        } else if self.weaknesses.iter().any(|w| w == tag) {
            1.5
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn condition_names_parse() {
        assert_eq!(Condition::from_str("hp_below_50"), Ok(Condition::HpBelow50));
        assert_eq!(Condition::from_str("ALWAYS"), Ok(Condition::Always));
        assert_eq!(Condition::MpAbove50.to_string(), "mp_above_50");
        assert!(Condition::from_str("hp_below_10").is_err());
    }

    #[test]
    fn action_names_round_trip_snake_case() {
        assert_eq!(ActionName::from_str("charge_attack"), Ok(ActionName::ChargeAttack));
        assert_eq!(ActionName::FleeAttempt.as_ref(), "flee_attempt");
    }

    #[test]
    fn default_profile_is_aggressive_brawler() {
        let profile = BehaviorProfile::default();
        assert_eq!(profile.personality, Personality::Aggressive);
        assert_eq!(profile.patterns.len(), 2);
        assert_eq!(
            profile.patterns[1].actions,
            [ActionName::BasicAttack, ActionName::Defend]
        );
    }

    #[test]
    fn damage_modifier_by_tag() {
        let mut profile = BehaviorProfile::default();
        profile.resistances.push("fire".into());
        profile.weaknesses.push("holy".into());
        assert_eq!(profile.damage_modifier("fire"), 0.5);
        assert_eq!(profile.damage_modifier("holy"), 1.5);
        assert_eq!(profile.damage_modifier("ice"), 1.0);
    }
}
