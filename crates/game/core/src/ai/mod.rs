//! Enemy decision engine.
//!
//! Each turn [`EnemyAi::next_action`] runs a fixed pipeline:
//!
//! 1. fire the first unused special trigger whose situation holds
//! 2. otherwise filter patterns by condition and draw one by weight
//! 3. let the personality bias the pick among the pattern's actions
//! 4. map the chosen name to an [`AiAction`] the combat manager can resolve
mod action;
mod behavior;
mod conditions;
mod selector;

pub use action::{AiAction, AiDecision, AiTarget};
pub use behavior::{
    ActionName, BehaviorProfile, Condition, Pattern, Personality, SpecialTrigger, Trigger,
};
pub use conditions::Situation;
pub use selector::{choose_action, choose_weighted};

use crate::character::Character;
use crate::env::RollSource;

/// Stateful AI driving one enemy through one encounter.
#[derive(Clone, Debug)]
pub struct EnemyAi {
    profile: BehaviorProfile,
    turn_count: u32,
    used_triggers: Vec<bool>,
    history: Vec<ActionName>,
}

impl EnemyAi {
    pub fn new(profile: BehaviorProfile) -> Self {
        let used_triggers = vec![false; profile.special_triggers.len()];
        Self {
            profile,
            turn_count: 0,
            used_triggers,
            history: Vec::new(),
        }
    }

    pub fn profile(&self) -> &BehaviorProfile {
        &self.profile
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Actions picked from patterns so far, oldest first.
    pub fn history(&self) -> &[ActionName] {
        &self.history
    }

    pub fn personality_description(&self) -> &'static str {
        self.profile.personality.description()
    }

    pub fn damage_modifier(&self, tag: &str) -> f64 {
        self.profile.damage_modifier(tag)
    }

    /// Decides the enemy's action for this turn.
    pub fn next_action(
        &mut self,
        enemy: &Character,
        player: &Character,
        rolls: &mut dyn RollSource,
    ) -> AiDecision {
        self.turn_count += 1;
        let situation = Situation::observe(self.turn_count, enemy, player);

        if let Some(decision) = self.fire_special(&situation, enemy, rolls) {
            tracing::debug!(
                enemy = %enemy.name,
                turn = self.turn_count,
                action = ?decision.action,
                "special trigger fired"
            );
            return decision;
        }

        let applicable: Vec<&Pattern> = self
            .profile
            .patterns
            .iter()
            .filter(|p| p.condition.holds(&situation))
            .collect();

        let Some(pattern) = choose_weighted(&applicable, rolls) else {
            tracing::debug!(enemy = %enemy.name, "no applicable pattern, attacking");
            return AiDecision::basic_attack();
        };

        let name = choose_action(
            self.profile.personality,
            &pattern.actions,
            &situation,
            &self.history,
            rolls,
        );
        self.history.push(name);

        let decision = AiDecision::new(self.materialize(name, enemy, rolls));
        tracing::debug!(
            enemy = %enemy.name,
            turn = self.turn_count,
            condition = %pattern.condition,
            action = ?decision.action,
            "enemy decided"
        );
        decision
    }

    fn fire_special(
        &mut self,
        situation: &Situation,
        enemy: &Character,
        rolls: &mut dyn RollSource,
    ) -> Option<AiDecision> {
        let index = self
            .profile
            .special_triggers
            .iter()
            .enumerate()
            .position(|(i, special)| !self.used_triggers[i] && special.trigger.fires(situation))?;

        self.used_triggers[index] = true;
        let special = &self.profile.special_triggers[index];
        let (name, text) = (special.action, special.text.clone());
        Some(AiDecision::new(self.materialize(name, enemy, rolls)).with_text(text))
    }

    fn materialize(&self, name: ActionName, enemy: &Character, rolls: &mut dyn RollSource) -> AiAction {
        let ability = match name {
            ActionName::UseAbility => choose_ability(enemy, rolls),
            _ => None,
        };
        name.to_action(ability)
    }
}

/// Uniform pick among known abilities the enemy can pay for right now.
fn choose_ability(enemy: &Character, rolls: &mut dyn RollSource) -> Option<String> {
    let affordable: Vec<&str> = enemy
        .affordable_abilities()
        .map(|a| a.name.as_str())
        .collect();
    rolls
        .pick_index(affordable.len())
        .map(|i| affordable[i].to_string())
}
