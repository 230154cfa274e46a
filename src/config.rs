/// Application configuration
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Override for the database file location.
    #[serde(default)]
    pub database: Option<PathBuf>,
}

/// Config file path.
/// Windows: %APPDATA%\tudu\config.toml
/// macOS: ~/Library/Application Support/tudu/config.toml
/// Linux: ~/.config/tudu/config.toml
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("could not determine the user config directory"))?;
    Ok(config_dir.join("tudu").join("config.toml"))
}

/// Load the config file. A missing file means defaults; nothing is written
/// back.
pub fn load_config() -> Result<Config> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;

    Ok(config)
}

/// Where the task database lives: the configured override, or
/// `<data_dir>/tudu/todo.db`.
pub fn db_path(config: &Config) -> Result<PathBuf> {
    if let Some(path) = &config.database {
        return Ok(path.clone());
    }

    let data_dir = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("could not determine the user data directory"))?;
    Ok(data_dir.join("tudu").join("todo.db"))
}
