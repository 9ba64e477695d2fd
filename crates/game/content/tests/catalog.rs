use std::fs;
use std::path::{Path, PathBuf};

use combat_content::ContentFactory;
use combat_core::{
    Character, CombatConfig, CombatManager, CombatResult, Element, Personality, PlayerAction,
};

fn shipped_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn shipped_content_loads() {
    let factory = ContentFactory::new(shipped_data());

    let catalog = factory.load_catalog().unwrap();
    let config = factory.load_config().unwrap();

    assert_eq!(config, CombatConfig::default());
    assert!(catalog.abilities.contains_key("Ice Lance"));
    assert_eq!(catalog.abilities["Ice Lance"].element, Element::Ice);
    assert!(catalog.items.contains_key("Antidote"));
    assert_eq!(catalog.enemies.len(), 6);
}

#[test]
fn spawned_enemy_fights_with_its_preset() {
    let catalog = ContentFactory::new(shipped_data()).load_catalog().unwrap();
    let (shaman, profile) = catalog.spawn_enemy("Lizardfolk Shaman").unwrap();

    assert_eq!(profile.personality, Personality::Defensive);
    assert_eq!(shaman.abilities.len(), 2);
    assert_eq!(shaman.venom_damage, 6);

    let hero = Character::new("Hero", 200, 40, 25, 8)
        .with_level(5)
        .with_item(catalog.items["Healing Potion"].clone(), 3);
    let mut manager = CombatManager::builder().seed(2024).build();
    manager
        .start_combat_with_behavior(hero, shaman, profile)
        .unwrap();

    let mut state = manager.get_combat_state();
    for _ in 0..200 {
        if state.is_over() {
            break;
        }
        let low = state.player.as_ref().is_some_and(|p| p.hp_percentage() < 40.0);
        let has_potion = state
            .player
            .as_ref()
            .is_some_and(|p| p.has_item("Healing Potion", 1));
        let action = if low && has_potion {
            PlayerAction::Item("Healing Potion".into())
        } else {
            PlayerAction::Attack
        };
        state = manager.process_player_turn(action).unwrap();
        state = manager.process_enemy_turn().unwrap();
    }

    assert!(matches!(
        state.result,
        CombatResult::PlayerWin | CombatResult::PlayerDead
    ));
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn minimal_dir(enemies: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "abilities.ron", r#"(abilities: [(name: "Bite", kind: "attack", mp_cost: 2, effect_value: 4)])"#);
    write(dir.path(), "items.ron", "(items: [])");
    write(dir.path(), "equipment.ron", "(equipment: [])");
    write(dir.path(), "behaviors.ron", "{}");
    write(dir.path(), "enemies.ron", enemies);
    dir
}

#[test]
fn enemy_with_unknown_ability_fails_the_catalog() {
    let dir = minimal_dir(
        r#"(enemies: [(name: "Rat", hp_max: 8, attack: 3, defense: 0, abilities: ["Gnaw"])])"#,
    );

    let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();

    assert_eq!(err.to_string(), "Enemy 'Rat' references unknown ability 'Gnaw'");
}

#[test]
fn minimal_catalog_spawns_default_behavior() {
    let dir = minimal_dir(
        r#"(enemies: [(name: "Rat", hp_max: 8, mp_max: 4, attack: 3, defense: 0, abilities: ["Bite"])])"#,
    );

    let catalog = ContentFactory::new(dir.path()).load_catalog().unwrap();
    let (rat, profile) = catalog.spawn_enemy("Rat").unwrap();

    assert_eq!(profile.personality, Personality::Aggressive);
    assert!(rat.knows_skill("Bite"));
    assert!(catalog.spawn_enemy("Dragon").is_err());
    assert!(catalog.items.is_empty());
}
