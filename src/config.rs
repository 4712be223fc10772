pub mod range_types;

use crate::game_logic::{CoinQuestError, CoinQuestResult};
use crate::resources::GameConfig;
use std::fs;
use std::path::PathBuf;

pub fn get_config_path() -> CoinQuestResult<PathBuf> {
    let mut path = dirs::config_dir().ok_or(CoinQuestError::ConfigDirNotFound)?;
    path.push("coinquest");
    fs::create_dir_all(&path)?;
    path.push("config.toml");
    Ok(path)
}

/// Loads the config from the user config directory, falling back to
/// defaults when the file is missing or unreadable.
pub fn load_config() -> GameConfig {
    if let Ok(config_path) = get_config_path() {
        if let Ok(contents) = fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<GameConfig>(&contents) {
                return config;
            }
        }
    }
    GameConfig::default()
}

pub fn save_config(config: &GameConfig) -> CoinQuestResult<()> {
    let config_path = get_config_path()?;
    let contents = toml::to_string_pretty(config)?;
    fs::write(config_path, contents)?;
    Ok(())
}
