use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Returns the path to the settings file: `~/.config/pinch-rs/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("pinch-rs");
    path.push("settings.json");
    path
}

/// Tunable parameters for the gesture-to-volume pipeline.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Gesture
    /// Thumb/index distance (normalized units) below which a pinch is active.
    pub pinch_threshold: f32,

    // Mapping
    /// Dead zone at the top of the frame; fingertip y at or below this maps to 100%.
    pub top_margin: f32,
    /// Dead zone at the bottom of the frame; fingertip y at or above this maps to 0%.
    pub bottom_margin: f32,

    // Conditioning
    /// Exponential smoothing weight in (0, 1]. Lower = smoother, higher = more responsive.
    pub alpha: f32,
    /// Maximum volume change per frame, in percent.
    pub max_step: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pinch_threshold: 0.04,

            top_margin: 0.1,
            bottom_margin: 0.9,

            alpha: 0.3,
            max_step: 5,
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }
}
