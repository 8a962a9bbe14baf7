//! Tunable thresholds for the viewport and the editing disciplines.
//!
//! Loaded from an optional TOML file in the per-user config directory;
//! every field falls back to its default when absent.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub edit: EditConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Display pixels per image pixel restored by the fit command.
    #[serde(default = "default_base_scale")]
    pub base_scale: f64,
    /// Minimum image-pixel area a drag must cover to trigger a zoom.
    #[serde(default = "default_zoom_min_area")]
    pub zoom_min_area: i64,
    /// Scale floor applied after a zoom-by-rectangle.
    #[serde(default = "default_zoom_scale_floor")]
    pub zoom_scale_floor: f64,
    /// Wheel step while zoomed out below the base scale.
    #[serde(default = "default_wheel_step_coarse")]
    pub wheel_step_coarse: f64,
    /// Wheel step at or above the base scale.
    #[serde(default = "default_wheel_step_fine")]
    pub wheel_step_fine: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditConfig {
    /// Minimum image-pixel area below which a placed region is discarded.
    #[serde(default = "default_min_region_area")]
    pub min_region_area: i64,
    /// Squared image-space distance within which a click selects an
    /// existing point instead of adding a duplicate.
    #[serde(default = "default_point_hit_dist_sq")]
    pub point_hit_dist_sq: i64,
}

// Default value functions
fn default_base_scale() -> f64 {
    1.0
}

fn default_zoom_min_area() -> i64 {
    2500
}

fn default_zoom_scale_floor() -> f64 {
    1.2
}

fn default_wheel_step_coarse() -> f64 {
    0.02
}

fn default_wheel_step_fine() -> f64 {
    0.01
}

fn default_min_region_area() -> i64 {
    400
}

fn default_point_hit_dist_sq() -> i64 {
    1600
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            base_scale: default_base_scale(),
            zoom_min_area: default_zoom_min_area(),
            zoom_scale_floor: default_zoom_scale_floor(),
            wheel_step_coarse: default_wheel_step_coarse(),
            wheel_step_fine: default_wheel_step_fine(),
        }
    }
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            min_region_area: default_min_region_area(),
            point_hit_dist_sq: default_point_hit_dist_sq(),
        }
    }
}

/// Path of the config file, if a config directory can be determined.
pub fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "labeler")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration from file, or return defaults if absent or broken.
pub fn load_config() -> AppConfig {
    let Some(path) = config_path() else {
        return AppConfig::default();
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to parse config file: {e}. Using defaults.");
                AppConfig::default()
            }
        },
        Err(e) => {
            log::warn!("Failed to read config file: {e}. Using defaults.");
            AppConfig::default()
        }
    }
}

/// Save configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), String> {
    let path = config_path().ok_or_else(|| "No config directory available".to_string())?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {e}"))?;
    }

    let toml = toml::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {e}"))?;

    std::fs::write(&path, toml).map_err(|e| format!("Failed to write config file: {e}"))?;

    Ok(())
}
