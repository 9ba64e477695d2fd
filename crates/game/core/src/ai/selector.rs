//! Randomized choice among patterns and actions.

use super::{ActionName, Pattern, Personality, Situation};
use crate::env::RollSource;

/// Chance an aggressive enemy narrows its pick to attacks.
const AGGRESSIVE_BIAS: f64 = 0.7;
/// Chance a hurt defensive enemy narrows its pick to defend/heal.
const DEFENSIVE_BIAS: f64 = 0.6;
/// Enemy HP fraction under which defensive and berserker biases kick in.
const HURT_THRESHOLD: f64 = 0.5;
/// How many recent distinct actions a cunning enemy avoids repeating.
const CUNNING_MEMORY: usize = 2;

/// Picks a pattern proportionally to its weight.
///
/// A single candidate is returned without drawing. When the weights sum to
/// zero or less the pick is uniform.
pub fn choose_weighted<'a>(patterns: &[&'a Pattern], rolls: &mut dyn RollSource) -> Option<&'a Pattern> {
    match patterns {
        [] => return None,
        [only] => return Some(*only),
        _ => {}
    }

    let total: f64 = patterns.iter().map(|p| p.weight).sum();
    if total <= 0.0 {
        return rolls.pick_index(patterns.len()).map(|i| patterns[i]);
    }

    let target = rolls.uniform(0.0, total);
    let mut cumulative = 0.0;
    for pattern in patterns {
        cumulative += pattern.weight;
        if target <= cumulative {
            return Some(*pattern);
        }
    }
    patterns.last().copied()
}

/// Picks one action from `actions`, biased by `personality`.
///
/// `history` holds the enemy's previous pattern-chosen actions, oldest first.
/// Returns `BasicAttack` for an empty list.
pub fn choose_action(
    personality: Personality,
    actions: &[ActionName],
    situation: &Situation,
    history: &[ActionName],
    rolls: &mut dyn RollSource,
) -> ActionName {
    if actions.is_empty() {
        return ActionName::BasicAttack;
    }

    let narrowed: Option<Vec<ActionName>> = match personality {
        Personality::Aggressive => {
            let attacks = filter(actions, |a| a.is_attack());
            (!attacks.is_empty() && rolls.chance(AGGRESSIVE_BIAS)).then_some(attacks)
        }
        Personality::Defensive if situation.enemy_hp < HURT_THRESHOLD => {
            let guards = filter(actions, |a| a.is_defensive());
            (!guards.is_empty() && rolls.chance(DEFENSIVE_BIAS)).then_some(guards)
        }
        Personality::Cunning if !history.is_empty() => {
            let recent = recent_distinct(history, CUNNING_MEMORY);
            let fresh = filter(actions, |a| !recent.contains(&a));
            (!fresh.is_empty()).then_some(fresh)
        }
        Personality::Berserker if situation.enemy_hp < HURT_THRESHOLD => {
            let attacks = filter(actions, |a| a.is_attack());
            (!attacks.is_empty()).then_some(attacks)
        }
        _ => None,
    };

    let pool = narrowed.as_deref().unwrap_or(actions);
    rolls
        .pick_index(pool.len())
        .map_or(ActionName::BasicAttack, |i| pool[i])
}

/// Up to `count` distinct actions, most recent first.
fn recent_distinct(history: &[ActionName], count: usize) -> Vec<ActionName> {
    let mut recent = Vec::with_capacity(count);
    for action in history.iter().rev() {
        if recent.len() == count {
            break;
        }
        if !recent.contains(action) {
            recent.push(*action);
        }
    }
    recent
}

fn filter(actions: &[ActionName], keep: impl Fn(ActionName) -> bool) -> Vec<ActionName> {
    actions.iter().copied().filter(|a| keep(*a)).collect()
}
