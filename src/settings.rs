//! Player preferences
//!
//! Persisted in LocalStorage. Puzzle progress itself is never saved.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::sim::FlagPolicy;
use crate::vocab::JlptLevel;
use crate::word_count_for_grid_size;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Vocabulary level
    pub level: JlptLevel,
    /// Grid side length (4-10)
    pub grid_size: usize,

    // === Presentation ===
    /// Dark color scheme
    #[serde(default)]
    pub dark_mode: bool,
    /// Sound effects on selection and matches
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
    /// Vibration on matches (mobile)
    #[serde(default = "default_true")]
    pub haptics_enabled: bool,

    /// Which cells light up when a word is found
    #[serde(default)]
    pub flag_policy: FlagPolicy,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: JlptLevel::N5,
            grid_size: DEFAULT_GRID_SIZE,
            dark_mode: false,
            sound_enabled: true,
            haptics_enabled: true,
            flag_policy: FlagPolicy::ExactPath,
        }
    }
}

impl Settings {
    /// Set the grid size, clamped to the supported range
    pub fn set_grid_size(&mut self, size: usize) {
        self.grid_size = size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
    }

    /// Target word count for the current grid size
    pub fn word_count(&self) -> usize {
        word_count_for_grid_size(self.grid_size)
    }

    /// Clamp values that may come from an older or hand-edited save
    fn sanitized(mut self) -> Self {
        self.set_grid_size(self.grid_size);
        self
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "kotoba_hunters_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(err) => log::warn!("Ignoring unreadable settings: {}", err),
                }
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

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }

    /// Parse settings JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }
}
