pub mod components;
pub mod config;
pub mod game_logic;
pub mod map;
pub mod pathfinding;
pub mod plugins;
pub mod resources;

// Selective re-exports for external consumers

// Plugins - main.rs needs all plugins
pub use plugins::*;

// Game logic - the layout tool needs errors and some core types
pub use game_logic::errors::{CoinQuestError, CoinQuestResult};

// Map - embedders and the layout tool need core layout types
pub use map::{NpcSpawn, PropPlacement, SpawnMode, WorldBounds, WorldLayout};
