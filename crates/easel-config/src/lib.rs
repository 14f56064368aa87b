//! Easel configuration system
//!
//! This crate provides centralized configuration for the Easel toolkit and
//! editor, loading settings from `easel.toml` with environment variable
//! overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure for Easel
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EaselConfig {
    /// Main window settings
    pub window: WindowConfig,
    /// Colors shared by controls
    pub theme: ThemeConfig,
    /// Scrollbar geometry and scroll increments
    pub scrollbar: ScrollbarConfig,
    /// Paint canvas settings
    pub canvas: CanvasConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

/// Control colors as sRGBA arrays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: [u8; 4],
    pub hover: [u8; 4],
    pub press: [u8; 4],
    pub outline: [u8; 4],
    pub text: [u8; 4],
    /// Negative values draw the outline inward and pad the hit region.
    pub outline_thickness: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollbarConfig {
    /// Side of the square step buttons
    pub button_size: u32,
    /// Cross-axis extent of the bar
    pub thickness: u32,
    /// Slider travel for a single up/down step
    pub step: i32,
    /// Slider travel for a page-up/page-down step
    pub page: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub brush_radius: u32,
    pub foreground: [u8; 4],
    pub background: [u8; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Easel".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: [0, 0, 0, 0],
            hover: [100, 100, 100, 255],
            press: [255, 255, 255, 255],
            outline: [255, 255, 255, 255],
            text: [230, 230, 230, 255],
            outline_thickness: -1.0,
        }
    }
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            button_size: 20,
            thickness: 20,
            step: 10,
            page: 30,
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 700,
            height: 500,
            brush_radius: 0,
            foreground: [0, 0, 0, 255],
            background: [255, 255, 255, 255],
        }
    }
}

fn env_flag<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse::<T>().ok())
}

impl EaselConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from the default location (easel.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("easel.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Values that fail to parse are ignored.
    pub fn merge_with_env(&mut self) {
        if let Some(width) = env_flag("EASEL_WIDTH") {
            self.window.width = width;
        }
        if let Some(height) = env_flag("EASEL_HEIGHT") {
            self.window.height = height;
        }
        if let Ok(title) = std::env::var("EASEL_TITLE") {
            self.window.title = title;
        }

        if let Some(step) = env_flag("EASEL_SCROLL_STEP") {
            self.scrollbar.step = step;
        }
        if let Some(page) = env_flag("EASEL_SCROLL_PAGE") {
            self.scrollbar.page = page;
        }

        if let Some(radius) = env_flag("EASEL_BRUSH_RADIUS") {
            self.canvas.brush_radius = radius;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from easel.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
