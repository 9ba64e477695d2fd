//! Automatic player policy for headless runs.

use combat_core::{AbilityKind, Character, PlayerAction};

const HEALING_POTION: &str = "Healing Potion";
const ANTIDOTE: &str = "Antidote";
const LOW_HP_PERCENT: f64 = 30.0;

/// Picks the player's next action from the current snapshot.
///
/// Heals below 30% HP, cures poison, then spends MP on the strongest
/// usable attack skill before falling back to a basic attack.
pub fn choose_action(player: &Character) -> PlayerAction {
    if player.hp_percentage() < LOW_HP_PERCENT && player.has_item(HEALING_POTION, 1) {
        return PlayerAction::Item(HEALING_POTION.to_string());
    }
    if player.is_poisoned() && player.has_item(ANTIDOTE, 1) {
        return PlayerAction::Item(ANTIDOTE.to_string());
    }

    player
        .abilities
        .iter()
        .filter(|ability| ability.kind == AbilityKind::Attack && player.can_use_skill(ability))
        .max_by_key(|ability| ability.effect_value)
        .map(|ability| PlayerAction::Skill(ability.name.clone()))
        .unwrap_or(PlayerAction::Attack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{Ability, Item};

    fn hero() -> Character {
        Character::new("Hero", 100, 20, 10, 4)
            .with_item(Item::new(HEALING_POTION).with_heal_hp(50), 1)
            .with_item(Item::new(ANTIDOTE).with_cure_poison(), 1)
    }

    #[test]
    fn low_hp_drinks_a_potion() {
        let mut hero = hero();
        hero.hp = 20;
        assert_eq!(choose_action(&hero), PlayerAction::Item(HEALING_POTION.into()));
    }

    #[test]
    fn poison_is_cured() {
        let mut hero = hero();
        hero.apply_poison(3, 2).unwrap();
        assert_eq!(choose_action(&hero), PlayerAction::Item(ANTIDOTE.into()));
    }

    #[test]
    fn strongest_affordable_skill_wins() {
        let mut hero = hero()
            .with_ability(Ability::new("Jab", AbilityKind::Attack, 2, 5))
            .with_ability(Ability::new("Smite", AbilityKind::Attack, 8, 20))
            .with_ability(Ability::new("Meteor", AbilityKind::Attack, 30, 60));
        assert_eq!(choose_action(&hero), PlayerAction::Skill("Smite".into()));

        hero.mp = 1;
        assert_eq!(choose_action(&hero), PlayerAction::Attack);
    }
}
