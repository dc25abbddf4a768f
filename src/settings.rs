//! Game settings and preferences
//!
//! Persisted in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_HEIGHT, CAMERA_WIDTH};
use crate::tracking::HandsConfig;

/// HUD language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

impl Locale {
    pub fn score_label(&self) -> &'static str {
        match self {
            Locale::English => "Score",
            Locale::Spanish => "Puntaje",
        }
    }

    /// The other language
    pub fn toggled(self) -> Self {
        match self {
            Locale::English => Locale::Spanish,
            Locale::Spanish => Locale::English,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Some(Locale::English),
            "es" | "spanish" | "español" => Some(Locale::Spanish),
            _ => None,
        }
    }
}

/// Requested capture size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: CAMERA_WIDTH,
            height: CAMERA_HEIGHT,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub camera: CameraConfig,
    /// Hand tracker options
    #[serde(default)]
    pub hands: HandsConfig,
    #[serde(default)]
    pub locale: Locale,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            hands: HandsConfig::default(),
            locale: Locale::English,

            show_fps: false,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    const STORAGE_KEY: &'static str = "hand_catch_settings";

    /// Parse stored JSON, falling back to defaults
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json_or_default(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };
        match serde_json::to_string(self) {
            Ok(json) => {
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::warn!("Failed to write settings");
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tracker_setup() {
        let settings = Settings::default();
        assert_eq!(settings.camera, CameraConfig { width: 640, height: 480 });
        assert_eq!(settings.hands.max_num_hands, 1);
        assert_eq!(settings.hands.min_detection_confidence, 0.8);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json_or_default(
            r#"{"show_fps":true,"master_volume":0.5,"sfx_volume":1.0,"muted":false,"locale":"Spanish"}"#,
        );
        assert!(settings.show_fps);
        assert_eq!(settings.locale, Locale::Spanish);
        assert_eq!(settings.camera, CameraConfig::default());
    }

    #[test]
    fn test_corrupt_json_falls_back() {
        assert_eq!(Settings::from_json_or_default("{oops"), Settings::default());
    }

    #[test]
    fn test_locale_toggle_round_trips_through_storage_json() {
        let mut settings = Settings::default();
        settings.locale = settings.locale.toggled();
        assert_eq!(settings.locale, Locale::Spanish);

        let json = serde_json::to_string(&settings).unwrap();
        let restored = Settings::from_json_or_default(&json);
        assert_eq!(restored.locale, Locale::Spanish);
        assert_eq!(restored.locale.toggled(), Locale::English);
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!(Locale::from_str("ES"), Some(Locale::Spanish));
        assert_eq!(Locale::from_str("english"), Some(Locale::English));
        assert_eq!(Locale::from_str("fr"), None);
    }
}
