//! Headless combat simulator.
//!
//! Loads the content catalog, spawns an enemy and plays an encounter with an
//! automatic player policy, printing the combat log as it goes.
//! Run with: `cargo run -p combat-sim -- --enemy "Cave Troll" --seed 7`

mod policy;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use combat_content::ContentFactory;
use combat_core::{CatalogSnapshot, Character, CombatManager, CombatResult, SessionSnapshot};

const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data");

/// Play one encounter against a catalogued enemy
#[derive(Parser, Debug)]
#[command(name = "combat-sim")]
#[command(about = "Headless combat simulator", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding config.toml and the RON catalogs
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Enemy to fight
    #[arg(short, long, default_value = "Green Goblin")]
    enemy: String,

    /// Seed for the combat roll stream
    #[arg(short, long, default_value = "1")]
    seed: u64,

    /// Give up after this many rounds
    #[arg(long, default_value = "200")]
    max_turns: u32,

    /// Player level
    #[arg(long, default_value = "5")]
    level: u32,

    /// List catalogued enemies and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let factory = ContentFactory::new(&cli.data_dir);
    let config = factory.load_config().context("Failed to load combat config")?;
    let catalog = factory.load_catalog().context("Failed to load content catalog")?;

    if cli.list {
        for template in catalog.enemies.values() {
            println!(
                "{:<24} lvl {:>2}  hp {:>3}  atk {:>2}  def {:>2}",
                template.name, template.level, template.hp_max, template.attack, template.defense
            );
        }
        return Ok(());
    }

    let (enemy, behavior) = catalog
        .spawn_enemy(&cli.enemy)
        .with_context(|| format!("Cannot spawn '{}'", cli.enemy))?;
    let player = build_player(&catalog, cli.level);

    let mut manager = CombatManager::builder().config(config).seed(cli.seed).build();
    let mut state = manager.start_combat_with_behavior(player, enemy, behavior)?;
    let mut printed = print_new_lines(&state, 0);

    for _ in 0..cli.max_turns {
        if state.is_over() {
            break;
        }
        let Some(player) = state.player.as_ref() else {
            break;
        };
        let action = policy::choose_action(player);
        tracing::debug!(action = action.label(), "player action chosen");

        state = manager.process_player_turn(action)?;
        printed = print_new_lines(&state, printed);
        if state.is_over() {
            break;
        }
        state = manager.process_enemy_turn()?;
        printed = print_new_lines(&state, printed);
    }

    let state = manager.end_combat();
    println!();
    match state.result {
        CombatResult::Ongoing => println!("Stopped after {} turns.", cli.max_turns),
        result => println!("Result: {} after {} turns.", result, state.turn_count),
    }
    if let (Some(player), Some(enemy)) = (&state.player, &state.enemy) {
        println!(
            "{}: {}/{} HP   {}: {}/{} HP",
            player.name, player.hp, player.hp_max, enemy.name, enemy.hp, enemy.hp_max
        );
    }
    Ok(())
}

/// Prints log lines past `from` and returns the new high-water mark.
fn print_new_lines(state: &SessionSnapshot, from: usize) -> usize {
    for line in state.log.iter().skip(from) {
        println!("{line}");
    }
    state.log.len().max(from)
}

/// Builds a player scaled to `level` who knows every catalogued ability
/// usable at that level and carries a few consumables.
fn build_player(catalog: &CatalogSnapshot, level: u32) -> Character {
    let hp = 80 + level * 10;
    let mp = 20 + level * 4;
    let mut player = Character::new("Hero", hp, mp, 8 + level * 2, 3 + level);
    player.level = level;

    for ability in catalog.abilities.values() {
        if ability.min_level <= level {
            player.learn_ability(ability.clone());
        }
    }
    for (name, quantity) in [("Healing Potion", 3), ("Antidote", 2), ("Mana Potion", 1)] {
        if let Some(item) = catalog.items.get(name) {
            player.add_item(item.clone(), quantity);
        }
    }
    for name in ["Iron Sword", "Leather Armor"] {
        if let Some(gear) = catalog.equipment.get(name) {
            player.equip(gear.clone());
        }
    }
    player
}
