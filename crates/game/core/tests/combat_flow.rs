use std::sync::Arc;

use combat_core::engine::INTEGRITY_ABORT_MESSAGE;
use combat_core::{
    Ability, AbilityKind, Character, CombatConfig, CombatEvent, CombatManager, CombatResult,
    InsufficientResourcesError, PlayerAction, RecordingSink, ScriptedRolls, TurnError,
};

fn hero() -> Character {
    Character::new("Hero", 50, 20, 7, 2)
}

fn goblin() -> Character {
    Character::new("Goblin", 20, 0, 6, 2)
}

/// Draw pairs of (no crit, no variance) for both sides.
fn plain_rolls() -> ScriptedRolls {
    ScriptedRolls::new([99, 0])
}

#[test]
fn player_attacking_every_turn_wins() {
    let sink = Arc::new(RecordingSink::new());
    let mut manager = CombatManager::builder()
        .rolls(plain_rolls())
        .sink(sink.clone())
        .build();

    manager.start_combat(hero(), goblin()).unwrap();

    let mut state = manager.get_combat_state();
    while state.result == CombatResult::Ongoing {
        state = manager.process_player_turn(PlayerAction::Attack).unwrap();
        let enemy = state.enemy.as_ref().unwrap();
        assert!(enemy.hp <= enemy.hp_max);
        if state.result == CombatResult::Ongoing {
            state = manager.process_enemy_turn().unwrap();
        }
    }

    assert_eq!(state.result, CombatResult::PlayerWin);
    assert_eq!(state.turn_count, 4);
    assert_eq!(state.player.as_ref().map(|p| p.hp), Some(38));
    assert_eq!(state.enemy.as_ref().map(|e| e.hp), Some(0));
    assert_eq!(
        sink.events().last(),
        Some(&CombatEvent::CombatEnd {
            winner: "Hero".into(),
            loser: "Goblin".into(),
            turn_count: 4,
        })
    );
}

#[test]
fn seeded_encounters_always_terminate_within_bounds() {
    for seed in 0..32 {
        let mut manager = CombatManager::builder().seed(seed).build();
        manager.start_combat(hero(), goblin()).unwrap();

        let mut state = manager.get_combat_state();
        for _ in 0..100 {
            if state.is_over() {
                break;
            }
            state = manager.process_player_turn(PlayerAction::Attack).unwrap();
            if !state.is_over() {
                state = manager.process_enemy_turn().unwrap();
            }
            for who in [state.player.as_ref(), state.enemy.as_ref()].into_iter().flatten() {
                assert!(who.hp <= who.hp_max, "seed {seed}: {} over max", who.name);
                assert!(who.mp <= who.mp_max);
            }
        }
        assert!(state.is_over(), "seed {seed} did not finish");
        assert_ne!(state.result, CombatResult::Escaped);
    }
}

#[test]
fn same_seed_replays_the_same_log() {
    let run = |seed| {
        let mut manager = CombatManager::builder().seed(seed).build();
        manager.start_combat(hero(), goblin()).unwrap();
        while manager.is_combat_active() {
            manager.process_player_turn(PlayerAction::Attack).unwrap();
            manager.process_enemy_turn().unwrap();
        }
        manager.end_combat().log
    };
    assert_eq!(run(7), run(7));
}

#[test]
fn shutdown_rewinds_randomness() {
    let mut manager = CombatManager::builder().seed(11).build();

    manager.start_combat(hero(), goblin()).unwrap();
    let first = manager.process_player_turn(PlayerAction::Attack).unwrap().log;
    manager.shutdown();

    manager.start_combat(hero(), goblin()).unwrap();
    let second = manager.process_player_turn(PlayerAction::Attack).unwrap().log;

    assert_eq!(first, second);
}

#[test]
fn corrupted_participant_force_ends_session() {
    let sink = Arc::new(RecordingSink::new());
    let mut manager = CombatManager::builder()
        .rolls(plain_rolls())
        .sink(sink.clone())
        .build();
    manager.start_combat(hero(), goblin()).unwrap();

    let (_, enemy) = manager.participants_mut().unwrap();
    enemy.hp = 999;

    let state = manager.process_player_turn(PlayerAction::Attack).unwrap();

    assert_eq!(state.result, CombatResult::PlayerWin);
    assert_eq!(state.log.last().map(String::as_str), Some(INTEGRITY_ABORT_MESSAGE));
    assert_eq!(sink.kinds(), ["combat_start", "combat_error"]);
    assert!(!manager.is_combat_active());
}

#[test]
fn over_max_hp_with_regen_is_caught_after_enemy_turn() {
    let sink = Arc::new(RecordingSink::new());
    let mut manager = CombatManager::builder()
        .rolls(plain_rolls())
        .sink(sink.clone())
        .build();
    manager.start_combat(hero(), goblin()).unwrap();

    let (player, _) = manager.participants_mut().unwrap();
    player.status.regen_turns = 3;
    player.hp = 80;

    let state = manager.process_enemy_turn().unwrap();

    assert_eq!(state.result, CombatResult::PlayerWin);
    assert_eq!(state.log.last().map(String::as_str), Some(INTEGRITY_ABORT_MESSAGE));
    assert_eq!(sink.kinds(), ["combat_start", "combat_error"]);
}

#[test]
fn escape_chance_caps_at_ninety() {
    let attempt = |draw| {
        let mut manager = CombatManager::builder()
            .rolls(ScriptedRolls::new([draw]))
            .build();
        manager
            .start_combat(hero().with_level(60), goblin())
            .unwrap();
        manager
            .process_player_turn(PlayerAction::Escape)
            .unwrap()
            .result
    };

    // d100 = 90
    assert_eq!(attempt(89), CombatResult::Escaped);
    // d100 = 91
    assert_eq!(attempt(90), CombatResult::Ongoing);
}

#[test]
fn insufficient_mp_leaves_session_untouched() {
    let mut caster = hero().with_ability(Ability::new("Fire Bolt", AbilityKind::Attack, 6, 12));
    caster.mp = 5;
    let mut manager = CombatManager::builder().rolls(plain_rolls()).build();
    let before = manager.start_combat(caster, goblin()).unwrap();

    let err = manager
        .process_player_turn(PlayerAction::Skill("Fire Bolt".into()))
        .unwrap_err();

    assert_eq!(
        err,
        TurnError::InsufficientResources(InsufficientResourcesError::Mp {
            skill: "Fire Bolt".into(),
            required: 6,
            available: 5,
        })
    );
    assert_eq!(manager.get_combat_state(), before);
}

#[test]
fn venomous_enemy_poisons_and_poison_ticks_same_turn() {
    let mut manager = CombatManager::builder()
        .config(CombatConfig::default().with_venom_chance(100))
        .rolls(ScriptedRolls::new([0]))
        .build();
    manager
        .start_combat(hero(), goblin().with_venom(2))
        .unwrap();

    let state = manager.process_enemy_turn().unwrap();
    let player = state.player.unwrap();

    // critical hit for 10, then two points of poison
    assert_eq!(player.hp, 38);
    assert_eq!(player.status.poison_turns, 2);
    assert!(state.log.contains(&"Hero has been poisoned!".to_string()));
    assert!(state.log.contains(&"Hero takes 2 poison damage!".to_string()));
}

#[test]
fn player_death_is_reported() {
    let sink = Arc::new(RecordingSink::new());
    let mut manager = CombatManager::builder()
        .rolls(plain_rolls())
        .sink(sink.clone())
        .build();
    let mut frail = hero();
    frail.hp = 3;
    manager.start_combat(frail, goblin()).unwrap();

    let state = manager.process_enemy_turn().unwrap();

    assert_eq!(state.result, CombatResult::PlayerDead);
    assert_eq!(
        sink.events().last(),
        Some(&CombatEvent::PlayerDeath {
            player_name: "Hero".into(),
            enemy_name: "Goblin".into(),
            turn_count: 0,
        })
    );
}
