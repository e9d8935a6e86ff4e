use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::session::{WidthBounds, DEFAULT_RIGHT_WIDTH, MAX_WIDTH, MIN_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_right_width")]
    pub initial_right_width: f32,
    #[serde(default = "default_min_width")]
    pub min_width: f32,
    #[serde(default = "default_max_width")]
    pub max_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            initial_right_width: DEFAULT_RIGHT_WIDTH,
            min_width: MIN_WIDTH,
            max_width: MAX_WIDTH,
        }
    }
}

fn default_right_width() -> f32 {
    DEFAULT_RIGHT_WIDTH
}

fn default_min_width() -> f32 {
    MIN_WIDTH
}

fn default_max_width() -> f32 {
    MAX_WIDTH
}

impl LayoutConfig {
    /// Width bounds for the resizable pane, falling back to defaults if invalid
    pub fn bounds(&self) -> WidthBounds {
        match WidthBounds::new(self.min_width, self.max_width) {
            Ok(bounds) => bounds,
            Err(e) => {
                warn!("Invalid width bounds in config, using defaults: {}", e);
                WidthBounds::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            title: "Split Pane".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Get the config file path (~/.config/split-pane/config.yaml)
    pub fn config_path() -> Option<PathBuf> {
        if let Some(home) = std::env::var_os("HOME") {
            let mut path = PathBuf::from(home);
            path.push(".config");
            path.push("split-pane");
            path.push("config.yaml");
            Some(path)
        } else {
            None
        }
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => return config,
                    Err(e) => warn!("{}", e),
                }
            } else {
                info!("Config file not found at {:?}, using defaults", path);
            }
        }

        Self::default()
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {:?}: {}", path, e))?;
        let config = Self::from_yaml_str(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<PathBuf, String> {
        let path = Self::config_path().ok_or("Could not determine config path")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(&path, yaml).map_err(|e| format!("Failed to write config file: {}", e))?;

        info!("Saved config to {:?}", path);
        Ok(path)
    }

    /// Write an example config file with every option spelled out
    pub fn create_example() -> Result<PathBuf, String> {
        let example = Config {
            layout: LayoutConfig {
                initial_right_width: 360.0,
                ..LayoutConfig::default()
            },
            window: WindowConfig::default(),
        };

        example.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_yaml_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.layout.initial_right_width, 304.0);
        assert_eq!(config.layout.bounds(), WidthBounds::default());
    }

    #[test]
    fn test_partial_layout_section() {
        let yaml = r#"
layout:
  initial_right_width: 420
window:
  width: 900
  height: 700
  title: "Editor"
"#;

        let config = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(config.layout.initial_right_width, 420.0);
        assert_eq!(config.layout.min_width, 200.0);
        assert_eq!(config.layout.max_width, 600.0);
        assert_eq!(config.window.title, "Editor");
    }

    #[test]
    fn test_inverted_bounds_fall_back_to_defaults() {
        let yaml = r#"
layout:
  min_width: 500
  max_width: 100
"#;

        let config = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(config.layout.bounds(), WidthBounds::default());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let err = Config::from_yaml_str("layout: [1, 2").unwrap_err();
        assert!(err.starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/split-pane.yaml")).unwrap_err();
        assert!(err.contains("Failed to read config file"));
    }
}
