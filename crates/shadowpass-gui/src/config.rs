//! Configuration file handling.
//!
//! Reads from `~/.config/shadowpass/shadowpass.toml` when it exists.

use anyhow::{Context, Result};
use serde::Deserialize;
use shadowpass_core::{generator, session, SessionSettings};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Initial contents of the length field.
    #[serde(default = "default_length")]
    pub default_length: usize,
    /// Initial contents of the tag field.
    #[serde(default = "default_tag")]
    pub default_tag: String,
    /// Whether to show the strength progress bar under the label.
    #[serde(default = "default_show_strength_bar")]
    pub show_strength_bar: bool,
    #[serde(default = "default_window_width")]
    pub window_width: i32,
    #[serde(default = "default_window_height")]
    pub window_height: i32,
}

fn default_length() -> usize {
    generator::DEFAULT_LENGTH
}

fn default_tag() -> String {
    session::DEFAULT_TAG.to_string()
}

fn default_show_strength_bar() -> bool {
    true
}

fn default_window_width() -> i32 {
    720
}

fn default_window_height() -> i32 {
    480
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_length: default_length(),
            default_tag: default_tag(),
            show_strength_bar: default_show_strength_bar(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// If `custom_path` is provided it must exist. Otherwise the default XDG
    /// location is tried and defaults are used when there is no file there.
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self> {
        let config_path = match custom_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                path
            }
            None => match Self::config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::info!("No config file, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        tracing::info!("Loaded config from {}: {:?}", config_path.display(), config);
        Ok(config)
    }

    /// Initial field contents for the session.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            length_input: self.default_length.to_string(),
            tag: self.default_tag.clone(),
        }
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shadowpass").join("shadowpass.toml"))
    }
}
