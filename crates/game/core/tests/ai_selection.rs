use combat_core::{
    ActionName, AiAction, BehaviorProfile, Character, Condition, EnemyAi, Pattern, Personality,
    SeededRolls,
};

const TRIALS: usize = 10_000;

fn wolf() -> Character {
    Character::new("Wolf", 20, 0, 6, 2)
}

fn hero() -> Character {
    Character::new("Hero", 50, 20, 7, 2)
}

#[test]
fn pattern_weights_drive_selection_frequency() {
    let profile = BehaviorProfile::new(Personality::Tactical)
        .with_pattern(Pattern::new(Condition::Always, [ActionName::Taunt], 1.0))
        .with_pattern(Pattern::new(Condition::Always, [ActionName::Defend], 3.0));
    let mut ai = EnemyAi::new(profile);
    let mut rolls = SeededRolls::pcg(42);
    let (enemy, player) = (wolf(), hero());

    let heavy = (0..TRIALS)
        .filter(|_| ai.next_action(&enemy, &player, &mut rolls).action == AiAction::Defend)
        .count();

    let share = heavy as f64 / TRIALS as f64;
    assert!((0.72..0.78).contains(&share), "heavy pattern share {share}");
}

#[test]
fn aggressive_enemies_favor_attacks() {
    let profile = BehaviorProfile::new(Personality::Aggressive).with_pattern(Pattern::new(
        Condition::Always,
        [ActionName::BasicAttack, ActionName::Taunt],
        1.0,
    ));
    let mut ai = EnemyAi::new(profile);
    let mut rolls = SeededRolls::pcg(5);
    let (enemy, player) = (wolf(), hero());

    let attacks = (0..TRIALS)
        .filter(|_| ai.next_action(&enemy, &player, &mut rolls).action == AiAction::Attack)
        .count();

    // 0.7 + 0.3 * 0.5
    let share = attacks as f64 / TRIALS as f64;
    assert!((0.82..0.88).contains(&share), "attack share {share}");
}

#[test]
fn unmatched_conditions_fall_back_to_basic_attack() {
    let profile = BehaviorProfile::new(Personality::Cowardly).with_pattern(Pattern::new(
        Condition::HpBelow25,
        [ActionName::FleeAttempt],
        1.0,
    ));
    let mut ai = EnemyAi::new(profile);
    let mut rolls = SeededRolls::pcg(1);

    let decision = ai.next_action(&wolf(), &hero(), &mut rolls);

    assert_eq!(decision.action, AiAction::Attack);
    assert!(ai.history().is_empty());
}

#[test]
fn defensive_enemies_guard_only_when_hurt() {
    let defend_share = |hp, seed| {
        let profile = BehaviorProfile::new(Personality::Defensive).with_pattern(Pattern::new(
            Condition::Always,
            [ActionName::Defend, ActionName::Taunt],
            1.0,
        ));
        let mut ai = EnemyAi::new(profile);
        let mut rolls = SeededRolls::pcg(seed);
        let mut enemy = wolf();
        enemy.hp = hp;
        let player = hero();

        let guards = (0..TRIALS)
            .filter(|_| ai.next_action(&enemy, &player, &mut rolls).action == AiAction::Defend)
            .count();
        guards as f64 / TRIALS as f64
    };

    // 0.6 + 0.4 * 0.5 at 40% HP
    let hurt = defend_share(8, 3);
    assert!((0.77..0.83).contains(&hurt), "hurt defend share {hurt}");

    let healthy = defend_share(12, 3);
    assert!((0.47..0.53).contains(&healthy), "healthy defend share {healthy}");
}
