use crate::config::range_types::*;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default)]
pub struct GameConfig {
    pub settings: GameSettings,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GameSettings {
    // Player settings
    pub player_movement_speed: MovementSpeed,
    pub push_strength: PushStrength,

    // Agent settings
    pub npc_detection_range: DetectionRange,
    pub chase_replan_cooldown: ReplanCooldown,
    pub patrol_replan_cooldown: ReplanCooldown,
    pub waypoint_tolerance: ArrivalTolerance,
    pub target_tolerance: ArrivalTolerance,
    pub catch_radius: CatchRadius,

    // Wander settings
    pub wander_speed_factor: SpeedFactor,
    pub wander_pause_min: PauseTicks,
    pub wander_pause_max: PauseTicks,
    pub wander_margin: BoundsMargin,

    // Grid settings
    pub goal_search_radius: SearchRadius,
    pub grid_rebuild_interval: RebuildInterval,

    // World settings
    pub layout_file_path: String, // Path to layout file relative to maps directory
    pub rng_seed: Option<u64>,    // None seeds from entropy
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            // Player settings
            player_movement_speed: MovementSpeed::new(2.0),
            push_strength: PushStrength::new(8.0),

            // Agent settings
            npc_detection_range: DetectionRange::new(150.0),
            chase_replan_cooldown: ReplanCooldown::new(30),
            patrol_replan_cooldown: ReplanCooldown::new(45),
            waypoint_tolerance: ArrivalTolerance::new(5.0),
            target_tolerance: ArrivalTolerance::new(10.0),
            catch_radius: CatchRadius::new(30.0),

            // Wander settings
            wander_speed_factor: SpeedFactor::new(0.5),
            wander_pause_min: PauseTicks::new(120),
            wander_pause_max: PauseTicks::new(300),
            wander_margin: BoundsMargin::new(50.0),

            // Grid settings
            goal_search_radius: SearchRadius::new(4),
            grid_rebuild_interval: RebuildInterval::new(60),

            // World settings
            layout_file_path: "starter_village.bin".to_string(),
            rng_seed: None,
        }
    }
}

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Playing,
    Defeat,
}

/// Counts completed simulation ticks since the world was spawned.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct SimulationTick {
    pub count: u64,
}

/// Set when world topology changes between scheduled grid rebuilds,
/// e.g. a block was pushed or a container opened.
#[derive(Resource, Default)]
pub struct GridDirty {
    pub pending: bool,
}

/// Unit-axis movement direction for the player, written by whatever
/// input layer sits on top of the simulation. Zero means no movement.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PlayerIntent {
    pub direction: Vec2,
}

/// Deterministic RNG for agent decisions. Seeding it from the config
/// makes wander behavior reproducible across runs.
#[derive(Resource)]
pub struct SimRng(pub Pcg64);

impl SimRng {
    pub fn from_settings(settings: &GameSettings) -> Self {
        let rng = match settings.rng_seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_entropy(),
        };
        Self(rng)
    }
}
