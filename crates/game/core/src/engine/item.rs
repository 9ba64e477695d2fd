//! Consumable item use.

use crate::character::Character;

use super::{CombatError, ResourceNotFoundError, TurnError};

/// Result of using an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemOutcome {
    pub item: String,
    /// Effects that changed something: `"heal_hp"`, `"heal_mp"`, `"cure_poison"`.
    pub effects_applied: Vec<String>,
    pub messages: Vec<String>,
}

/// Uses one unit of `name` from `user`'s inventory.
///
/// Each effect of the item is applied independently and counts only if it
/// changed something. The unit is consumed even when nothing happens.
///
/// # Errors
///
/// Returns [`ResourceNotFoundError::MissingItem`] (no mutation) if the item is
/// not held, or [`CombatError::ParticipantDead`] if `user` is dead.
pub fn use_item(user: &mut Character, name: &str) -> Result<ItemOutcome, TurnError> {
    if user.is_dead() {
        return Err(CombatError::participant_dead(&user.name).into());
    }
    let item = user
        .inventory
        .find(name)
        .cloned()
        .ok_or_else(|| ResourceNotFoundError::missing_item(&user.name, name))?;

    let mut effects_applied = Vec::new();
    let mut messages = Vec::new();

    if item.heal_hp > 0 {
        let healed = user.heal(item.heal_hp)?;
        if healed > 0 {
            messages.push(format!("{} uses {} and recovers {} HP!", user.name, item.name, healed));
            effects_applied.push("heal_hp".to_string());
        }
    }

    if item.heal_mp > 0 {
        let restored = user.restore_mp(item.heal_mp);
        if restored > 0 {
            messages.push(format!("{} uses {} and recovers {} MP!", user.name, item.name, restored));
            effects_applied.push("heal_mp".to_string());
        }
    }

    if item.cure_poison && user.cure_poison() {
        messages.push(format!("{} uses {} and is cured of poison!", user.name, item.name));
        effects_applied.push("cure_poison".to_string());
    }

    if effects_applied.is_empty() {
        messages.push(format!("{} uses {}, but nothing happens.", user.name, item.name));
    }

    user.remove_item(&item.name, 1);

    tracing::debug!(
        user = %user.name,
        item = %item.name,
        effects = ?effects_applied,
        "item used"
    );

    Ok(ItemOutcome {
        item: item.name,
        effects_applied,
        messages,
    })
}
