use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.width < 240.0 || self.height < 280.0 {
            return Err("Window must be at least 240x280".to_string());
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 560.0,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub bot_delay_ms: u64,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > 10_000 {
            return Err("bot_delay_ms must not exceed 10000".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        // The delay is pure pacing so the opponent appears to think.
        Self { bot_delay_ms: 500 }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub game: GameConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.game.validate()?;
        Ok(())
    }
}

pub fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

/// Missing file falls back to defaults; a present but broken file is an error.
pub fn load_config(file_path: &str) -> Result<Config, String> {
    let content = match std::fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(err) => {
            return match err.kind() {
                ErrorKind::NotFound => Ok(Config::default()),
                _ => Err(format!("Failed to read config file: {}", err)),
            };
        }
    };

    let config: Config = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path(tag: &str) -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", tag));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let default_config = Config::default();
        let serialized = serde_yaml_ng::to_string(&default_config).unwrap();
        let deserialized: Config = serde_yaml_ng::from_str(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let loaded = load_config("this_file_does_not_exist.yaml").unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let file_path = get_temp_file_path("overrides");
        std::fs::write(
            &file_path,
            "window:\n  width: 640.0\n  height: 720.0\ngame:\n  bot_delay_ms: 250\n",
        )
        .unwrap();

        let loaded = load_config(&file_path).unwrap();
        assert_eq!(loaded.window.width, 640.0);
        assert_eq!(loaded.window.height, 720.0);
        assert_eq!(loaded.game.bot_delay_ms, 250);

        std::fs::remove_file(&file_path).unwrap();
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let file_path = get_temp_file_path("invalid");
        std::fs::write(
            &file_path,
            "window:\n  width: 10.0\n  height: 10.0\ngame:\n  bot_delay_ms: 500\n",
        )
        .unwrap();

        assert!(load_config(&file_path).is_err());

        std::fs::remove_file(&file_path).unwrap();
    }

    #[test]
    fn test_partial_config_fills_missing_sections() {
        let file_path = get_temp_file_path("partial");
        std::fs::write(&file_path, "game:\n  bot_delay_ms: 0\n").unwrap();

        let loaded = load_config(&file_path).unwrap();
        assert_eq!(loaded.game.bot_delay_ms, 0);
        assert_eq!(loaded.window, WindowConfig::default());

        std::fs::remove_file(&file_path).unwrap();
    }
}
