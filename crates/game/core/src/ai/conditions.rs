use super::{Condition, Trigger};
use crate::character::Character;

/// Fractions (0.0..=1.0) and turn number a decision is based on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Situation {
    pub turn: u32,
    pub enemy_hp: f64,
    pub enemy_mp: f64,
    pub player_hp: f64,
}

impl Situation {
    pub fn observe(turn: u32, enemy: &Character, player: &Character) -> Self {
        Self {
            turn,
            enemy_hp: hp_fraction(enemy),
            enemy_mp: mp_fraction(enemy),
            player_hp: hp_fraction(player),
        }
    }
}

/// HP fraction; a character with no HP pool counts as healthy.
fn hp_fraction(character: &Character) -> f64 {
    if character.hp_max == 0 {
        return 1.0;
    }
    f64::from(character.hp) / f64::from(character.hp_max)
}

fn mp_fraction(character: &Character) -> f64 {
    character.mp_percentage() / 100.0
}

impl Condition {
    pub fn holds(self, situation: &Situation) -> bool {
        match self {
            Self::HpAbove75 => situation.enemy_hp > 0.75,
            Self::HpAbove50 => situation.enemy_hp > 0.50,
            Self::HpAbove25 => situation.enemy_hp > 0.25,
            Self::HpBelow75 => situation.enemy_hp <= 0.75,
            Self::HpBelow50 => situation.enemy_hp <= 0.50,
            Self::HpBelow25 => situation.enemy_hp <= 0.25,
            Self::MpAbove50 => situation.enemy_mp > 0.50,
            Self::MpBelow50 => situation.enemy_mp <= 0.50,
            Self::FirstTurn => situation.turn == 1,
            Self::PlayerHpLow => situation.player_hp < 0.3,
            Self::PlayerHpHigh => situation.player_hp > 0.7,
            Self::Always => true,
        }
    }
}

impl Trigger {
    pub fn fires(self, situation: &Situation) -> bool {
        match self {
            Self::FirstTurn => situation.turn == 1,
            Self::LowHp => situation.enemy_hp < 0.25,
            Self::PlayerLowHp => situation.player_hp < 0.3,
        }
    }
}
