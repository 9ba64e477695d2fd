//! Consistency checks run on the participants at every end-of-turn evaluation.

use crate::character::Character;

/// First broken invariant found on a participant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityViolation {
    #[error("a participant has an empty name")]
    EmptyName,

    #[error("{name} has no HP pool")]
    ZeroHpMax { name: String },

    #[error("{name} has {hp} HP, above its maximum of {hp_max}")]
    HpAboveMax { name: String, hp: u32, hp_max: u32 },

    #[error("{name} has {mp} MP, above its maximum of {mp_max}")]
    MpAboveMax { name: String, mp: u32, mp_max: u32 },

    #[error("{name} has level 0")]
    ZeroLevel { name: String },

    #[error("{name} holds {quantity} '{item}' (stack limit {stack_max})")]
    BadStack {
        name: String,
        item: String,
        quantity: u32,
        stack_max: u32,
    },

    #[error("{name} has leftover poison damage without poison turns")]
    StalePoison { name: String },
}

/// Checks both participants, player first.
///
/// # Errors
///
/// Returns the first [`IntegrityViolation`] found.
pub fn check_integrity(player: &Character, enemy: &Character) -> Result<(), IntegrityViolation> {
    check_character(player)?;
    check_character(enemy)
}

fn check_character(character: &Character) -> Result<(), IntegrityViolation> {
    let name = || character.name.clone();

    if character.name.trim().is_empty() {
        return Err(IntegrityViolation::EmptyName);
    }
    if character.hp_max == 0 {
        return Err(IntegrityViolation::ZeroHpMax { name: name() });
    }
    if character.hp > character.hp_max {
        return Err(IntegrityViolation::HpAboveMax {
            name: name(),
            hp: character.hp,
            hp_max: character.hp_max,
        });
    }
    if character.mp > character.mp_max {
        return Err(IntegrityViolation::MpAboveMax {
            name: name(),
            mp: character.mp,
            mp_max: character.mp_max,
        });
    }
    if character.level == 0 {
        return Err(IntegrityViolation::ZeroLevel { name: name() });
    }
    if let Some(stack) = character
        .inventory
        .iter()
        .find(|s| s.quantity == 0 || s.quantity > s.item.stack_max)
    {
        return Err(IntegrityViolation::BadStack {
            name: name(),
            item: stack.item.name.clone(),
            quantity: stack.quantity,
            stack_max: stack.item.stack_max,
        });
    }
    if !character.status.poison_is_consistent() {
        return Err(IntegrityViolation::StalePoison { name: name() });
    }
    Ok(())
}
