use crate::components::{Behavior, Distance, Npc, PropKind, Speed};
use crate::game_logic::errors::{CoinQuestError, CoinQuestResult};
use crate::pathfinding::TILE_SIZE;
use crate::resources::GameSettings;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

/// World rectangle the whole simulation happens inside.
///
/// The origin sits at the top-left corner with y growing downward, matching
/// screen coordinates. Positions name the top-left corner of a tile.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

/// Complete layout of one world: dimensions, placed props, and agent spawns
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Resource)]
pub struct WorldLayout {
    pub name: String,
    #[validate(range(min = 64.0, max = 8192.0))]
    pub width: f32,
    #[validate(range(min = 64.0, max = 8192.0))]
    pub height: f32,
    pub player_spawn: Vec2,
    pub props: Vec<PropPlacement>,
    pub npcs: Vec<NpcSpawn>,
}

/// One placed prop at a world position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropPlacement {
    pub kind: PropKind,
    pub position: Vec2,
}

/// Agent spawn entry with its behavior in serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcSpawn {
    pub name: String,
    pub position: Vec2,
    pub speed: f32,
    pub mode: SpawnMode,
    pub hostile: bool,
}

/// Behavior selection as stored in layout files; runtime state (paths,
/// cooldowns, wander targets) is seeded at spawn time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpawnMode {
    Static,
    Chase,
    Patrol { points: Vec<Vec2> },
    Wander,
}

impl WorldLayout {
    /// Create a new layout with validation
    pub fn new(
        name: String,
        width: f32,
        height: f32,
        player_spawn: Vec2,
        props: Vec<PropPlacement>,
        npcs: Vec<NpcSpawn>,
    ) -> CoinQuestResult<Self> {
        let layout = Self {
            name,
            width,
            height,
            player_spawn,
            props,
            npcs,
        };

        layout
            .validate()
            .map_err(|_| CoinQuestError::InvalidLayoutData {
                reason: "Layout validation failed".to_string(),
            })?;
        layout.ensure_spawns_in_bounds()?;

        Ok(layout)
    }

    pub fn bounds(&self) -> WorldBounds {
        WorldBounds {
            width: self.width,
            height: self.height,
        }
    }

    /// Get the layouts directory path
    pub fn get_layouts_dir() -> CoinQuestResult<PathBuf> {
        std::env::current_dir()
            .map_err(CoinQuestError::ConfigDirCreationFailed)
            .map(|dir| dir.join("maps"))
    }

    /// Load a layout from the layouts directory
    pub fn load_from_file<P: AsRef<Path>>(filename: P) -> CoinQuestResult<Self> {
        let layouts_dir = Self::get_layouts_dir()?;
        let file_path = layouts_dir.join(filename);

        if !file_path.exists() {
            return Err(CoinQuestError::LayoutFileNotFound { path: file_path });
        }

        let data = std::fs::read(&file_path).map_err(CoinQuestError::ConfigDirCreationFailed)?;

        let (layout, _): (WorldLayout, usize) =
            bincode::serde::decode_from_slice(&data, bincode::config::standard()).map_err(|e| {
                CoinQuestError::CorruptedLayoutFile {
                    reason: format!("Failed to deserialize layout data: {e}"),
                }
            })?;

        // Validate the loaded layout with detailed error reporting
        layout.validate().map_err(|validation_errors| {
            let error_details = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                    format!("{field}: {}", error_msgs.join(", "))
                })
                .collect::<Vec<String>>()
                .join("; ");

            CoinQuestError::LayoutValidationFailed {
                reason: error_details,
            }
        })?;
        layout.ensure_spawns_in_bounds()?;

        Ok(layout)
    }

    /// Save the layout to the layouts directory
    pub fn save_to_file<P: AsRef<Path>>(&self, filename: P) -> CoinQuestResult<()> {
        // Validate before saving
        self.validate()
            .map_err(|_| CoinQuestError::InvalidLayoutData {
                reason: "Layout validation failed before save".to_string(),
            })?;

        let layouts_dir = Self::get_layouts_dir()?;
        let file_path = layouts_dir.join(filename);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).map_err(CoinQuestError::ConfigDirCreationFailed)?;
        }

        let data = bincode::serde::encode_to_vec(self, bincode::config::standard()).map_err(
            |e| CoinQuestError::InvalidLayoutData {
                reason: format!("Failed to serialize layout: {e}"),
            },
        )?;

        std::fs::write(&file_path, data).map_err(CoinQuestError::ConfigDirCreationFailed)?;

        Ok(())
    }

    fn ensure_spawns_in_bounds(&self) -> CoinQuestResult<()> {
        let fits = |p: Vec2| {
            p.x >= 0.0
                && p.y >= 0.0
                && p.x <= self.width - TILE_SIZE
                && p.y <= self.height - TILE_SIZE
        };

        if !fits(self.player_spawn) {
            return Err(CoinQuestError::LayoutValidationFailed {
                reason: format!("Player spawn {} is outside the world", self.player_spawn),
            });
        }
        for npc in &self.npcs {
            if !fits(npc.position) {
                return Err(CoinQuestError::LayoutValidationFailed {
                    reason: format!("Spawn point for {} is outside the world", npc.name),
                });
            }
        }

        Ok(())
    }

    /// The hand-authored village every new game starts in.
    pub fn starter_village() -> Self {
        let tree_positions = [
            (120.0, 80.0),
            (160.0, 80.0),
            (280.0, 120.0),
            (520.0, 180.0),
            (180.0, 420.0),
            (620.0, 320.0),
            (140.0, 520.0),
            (720.0, 460.0),
            (60.0, 240.0),
            (740.0, 120.0),
            (380.0, 480.0),
            (560.0, 80.0),
        ];

        let mut props: Vec<PropPlacement> = tree_positions
            .iter()
            .map(|&(x, y)| prop(PropKind::Tree, x, y))
            .collect();
        props.push(prop(PropKind::House, 220.0, 160.0));
        props.push(prop(PropKind::House, 520.0, 360.0));
        props.push(prop(PropKind::Block, 400.0, 200.0));
        props.push(prop(PropKind::Block, 432.0, 200.0));
        props.push(prop(PropKind::Chest, 650.0, 450.0));
        props.push(prop(PropKind::ShopSign, 200.0, 130.0));

        Self {
            name: "starter_village".to_string(),
            width: 800.0,
            height: 600.0,
            player_spawn: Vec2::new(400.0, 300.0),
            props,
            npcs: vec![
                NpcSpawn {
                    name: "OLD MAN TOM".to_string(),
                    position: Vec2::new(360.0, 260.0),
                    speed: 0.8,
                    mode: SpawnMode::Static,
                    hostile: false,
                },
                NpcSpawn {
                    name: "LITTLE SUSIE".to_string(),
                    position: Vec2::new(460.0, 420.0),
                    speed: 0.8,
                    mode: SpawnMode::Wander,
                    hostile: false,
                },
                NpcSpawn {
                    name: "SHOPKEEPER JOE".to_string(),
                    position: Vec2::new(240.0, 140.0),
                    speed: 0.8,
                    mode: SpawnMode::Static,
                    hostile: false,
                },
                NpcSpawn {
                    name: "GUARD PATROL".to_string(),
                    position: Vec2::new(600.0, 100.0),
                    speed: 1.5,
                    mode: SpawnMode::Patrol {
                        points: vec![
                            Vec2::new(600.0, 100.0),
                            Vec2::new(700.0, 100.0),
                            Vec2::new(700.0, 250.0),
                            Vec2::new(600.0, 250.0),
                        ],
                    },
                    hostile: false,
                },
                NpcSpawn {
                    name: "FRIENDLY GUARD".to_string(),
                    position: Vec2::new(100.0, 300.0),
                    speed: 2.0,
                    mode: SpawnMode::Chase,
                    hostile: true,
                },
            ],
        }
    }
}

impl SpawnMode {
    /// Seed the runtime behavior for an agent spawning at `position`.
    ///
    /// Chasers take the detection radius from the tuning settings, as all
    /// of them share it. Wanderers start targeting their own spawn point
    /// with an expired countdown, so they pick a fresh destination on
    /// their first update.
    pub fn to_behavior(&self, position: Vec2, settings: &GameSettings) -> Behavior {
        match self {
            SpawnMode::Static => Behavior::Static,
            SpawnMode::Chase => Behavior::Chase {
                detection_range: Distance::new(settings.npc_detection_range.get()),
            },
            SpawnMode::Patrol { points } => Behavior::Patrol {
                points: points.clone(),
                current: 0,
            },
            SpawnMode::Wander => Behavior::Wander {
                target: position,
                countdown: 0,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpawnMode::Static => "static",
            SpawnMode::Chase => "chase",
            SpawnMode::Patrol { .. } => "patrol",
            SpawnMode::Wander => "wander",
        }
    }
}

impl NpcSpawn {
    /// Build the runtime agent component for this spawn entry.
    pub fn to_npc(&self, settings: &GameSettings) -> Npc {
        let mut npc = Npc::new(
            &self.name,
            Speed::new(self.speed),
            self.mode.to_behavior(self.position, settings),
        );
        npc.hostile = self.hostile;
        npc
    }
}

fn prop(kind: PropKind, x: f32, y: f32) -> PropPlacement {
    PropPlacement {
        kind,
        position: Vec2::new(x, y),
    }
}
