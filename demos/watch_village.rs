//! Headless Village Run
//!
//! Drives the simulation with no renderer attached. The world comes from
//! the usual config lookup, falling back to the built-in starter village,
//! and the player can be walked in a fixed direction while the agents go
//! about their routines. Useful for eyeballing behavior changes without
//! wiring up a front end.
//!
//! # Example Usage
//! ```bash
//! # Let the village idle for 300 ticks
//! cargo run --example watch_village
//!
//! # Walk the player west into the hostile guard, tracing as it goes
//! cargo run --example watch_village -- --ticks 600 --walk west --verbose
//! ```

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use clap::Parser;
use coinquest::components::{Npc, Player};
use coinquest::game_logic::errors::{CoinQuestError, CoinQuestResult};
use coinquest::map::WorldLayout;
use coinquest::plugins::{PlayerCaught, PlayerPlugin, SimulationPlugin, WorldPlugin};
use coinquest::resources::{GameConfig, PlayerIntent, SimulationTick};

#[derive(Parser)]
#[command(name = "watch_village")]
#[command(about = "Run the simulation headless and print the outcome")]
struct Args {
    /// Number of simulation ticks to run
    #[arg(long, default_value = "300")]
    ticks: u64,

    /// RNG seed, so wandering agents take the same strolls every run
    #[arg(long, default_value = "7")]
    seed: u64,

    /// Walk the player the whole run: north, south, east, or west
    #[arg(long)]
    walk: Option<String>,

    /// Print agent positions every 60 ticks
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

/// Screen coordinates: y grows downward, so north is negative y.
fn walk_direction(name: &str) -> CoinQuestResult<Vec2> {
    match name {
        "north" => Ok(Vec2::NEG_Y),
        "south" => Ok(Vec2::Y),
        "east" => Ok(Vec2::X),
        "west" => Ok(Vec2::NEG_X),
        other => Err(CoinQuestError::InvalidLayoutData {
            reason: format!(
                "Unknown direction '{other}'. Valid directions: north, south, east, west"
            ),
        }),
    }
}

fn main() -> CoinQuestResult<()> {
    let args = Args::parse();
    let intent = match &args.walk {
        Some(direction) => walk_direction(direction)?,
        None => Vec2::ZERO,
    };

    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    let mut config = GameConfig::default();
    config.settings.rng_seed = Some(args.seed);
    app.insert_resource(config);
    app.add_plugins((SimulationPlugin, WorldPlugin, PlayerPlugin));

    // The first update spawns the world.
    app.update();
    app.world_mut().resource_mut::<PlayerIntent>().direction = intent;

    let layout_name = app.world().resource::<WorldLayout>().name.clone();
    println!(
        "Running '{layout_name}' for {} ticks with seed {}",
        args.ticks, args.seed
    );

    let mut agents = app.world_mut().query::<(&Transform, &Npc)>();
    let mut players = app.world_mut().query_filtered::<&Transform, With<Player>>();
    let mut captures = app.world().resource::<Events<PlayerCaught>>().get_cursor();

    let mut caught: Option<(String, u64)> = None;
    for _ in 0..args.ticks {
        app.update();
        let tick = app.world().resource::<SimulationTick>().count;

        let events = app.world().resource::<Events<PlayerCaught>>();
        if let Some(capture) = captures.read(events).next() {
            caught = Some((capture.npc_name.clone(), tick));
            break;
        }

        if args.verbose && tick % 60 == 0 {
            if let Ok(transform) = players.single(app.world()) {
                println!(
                    "tick {tick}: player at ({:.1}, {:.1})",
                    transform.translation.x, transform.translation.y
                );
            }
            for (transform, npc) in agents.iter(app.world()) {
                println!(
                    "  {}: ({:.1}, {:.1})",
                    npc.name, transform.translation.x, transform.translation.y
                );
            }
        }
    }

    println!();
    match &caught {
        Some((name, tick)) => println!("{name} caught the player on tick {tick}"),
        None => println!(
            "Nobody caught the player in {} ticks",
            app.world().resource::<SimulationTick>().count
        ),
    }

    println!("\n=== Final positions ===");
    if let Ok(transform) = players.single(app.world()) {
        println!(
            "Player: ({:.1}, {:.1})",
            transform.translation.x, transform.translation.y
        );
    }
    for (transform, npc) in agents.iter(app.world()) {
        println!(
            "{} [{}]: ({:.1}, {:.1})",
            npc.name,
            npc.behavior.label(),
            transform.translation.x,
            transform.translation.y
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_direction_uses_screen_coordinates() {
        assert_eq!(walk_direction("north").unwrap(), Vec2::new(0.0, -1.0));
        assert_eq!(walk_direction("south").unwrap(), Vec2::new(0.0, 1.0));
        assert_eq!(walk_direction("east").unwrap(), Vec2::new(1.0, 0.0));
        assert_eq!(walk_direction("west").unwrap(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_walk_direction_rejects_unknown_names() {
        assert!(walk_direction("up").is_err());
        assert!(walk_direction("").is_err());
    }
}
