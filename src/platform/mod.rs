//! Browser bindings
//!
//! A `WebGame` handle for the JS rendering layer. The page maps pointer
//! positions to (row, col) cells and calls the pointer methods; state comes
//! back as JSON snapshots.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::settings::Settings;
use crate::sim::{Coord, GameConfig, GameEvent, GamePhase, GameState, Grid};
use crate::vocab::{self, JlptLevel, Word};

/// What the page needs to render one frame
#[derive(Serialize)]
struct Snapshot<'a> {
    grid: &'a Grid,
    words: &'a [Word],
    found_ids: &'a [String],
    highlighted: &'a [Coord],
    phase: GamePhase,
    found: usize,
    total: usize,
}

/// Module start hook: logging and panic messages in the browser console
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Kotoba Hunters starting...");
}

fn to_js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Fetch a level's words; resolves to a JSON array for `WebGame::set_words`
#[wasm_bindgen]
pub async fn fetch_level_words(base_url: String, level: String) -> Result<String, JsValue> {
    let level = JlptLevel::from_str(&level)
        .ok_or_else(|| to_js_err(format!("unknown JLPT level: {level}")))?;
    let words = vocab::fetch_words_for_level(&base_url, level)
        .await
        .map_err(to_js_err)?;
    serde_json::to_string(&words).map_err(to_js_err)
}

#[wasm_bindgen]
pub struct WebGame {
    settings: Settings,
    pool: Vec<Word>,
    state: GameState,
}

#[wasm_bindgen]
impl WebGame {
    /// Start with saved settings and the built-in word list
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let settings = Settings::load();
        let pool = vocab::builtin_words();
        let state = GameState::new(&pool, GameConfig::from(&settings), crate::time_seed());
        WebGame {
            settings,
            pool,
            state,
        }
    }

    /// Replace the word pool (JSON array of words) and start a new game
    pub fn set_words(&mut self, words_json: &str) -> Result<(), JsValue> {
        let words: Vec<Word> = serde_json::from_str(words_json).map_err(to_js_err)?;
        let words: Vec<Word> = words.into_iter().filter(|w| !w.is_empty()).collect();
        if words.is_empty() {
            return Err(to_js_err(vocab::VocabError::Empty(self.settings.level)));
        }
        self.pool = words;
        self.new_game();
        Ok(())
    }

    pub fn new_game(&mut self) {
        self.state = GameState::new(
            &self.pool,
            GameConfig::from(&self.settings),
            crate::time_seed(),
        );
    }

    pub fn settings_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.settings).map_err(to_js_err)
    }

    /// Apply and save settings; a new game starts if the grid changes
    pub fn set_settings(&mut self, json: &str) -> Result<(), JsValue> {
        let settings = Settings::from_json(json).map_err(to_js_err)?;
        let regenerate = settings.grid_size != self.settings.grid_size
            || settings.flag_policy != self.settings.flag_policy;
        self.settings = settings;
        self.settings.save();
        if regenerate {
            self.new_game();
        }
        Ok(())
    }

    pub fn pointer_down(&mut self, row: usize, col: usize) -> bool {
        self.state.begin_selection(Coord::new(row, col))
    }

    pub fn pointer_move(&mut self, row: usize, col: usize) {
        self.state.update_selection(Coord::new(row, col));
    }

    pub fn pointer_cancel(&mut self) {
        self.state.cancel_selection();
    }

    /// Finish the drag; returns the found word as JSON, if any
    pub fn pointer_up(&mut self) -> Option<String> {
        let word = self.state.end_selection()?;
        if self.settings.haptics_enabled {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().vibrate_with_duration(50);
            }
        }
        serde_json::to_string(&word).ok()
    }

    pub fn snapshot(&self) -> Result<String, JsValue> {
        let snapshot = Snapshot {
            grid: &self.state.grid,
            words: &self.state.words,
            found_ids: &self.state.found_ids,
            highlighted: self.state.highlighted(),
            phase: self.state.phase,
            found: self.state.found_count(),
            total: self.state.total_words(),
        };
        serde_json::to_string(&snapshot).map_err(to_js_err)
    }

    /// Queued feedback events as a JSON array
    pub fn drain_events(&mut self) -> Result<String, JsValue> {
        let events: Vec<GameEvent> = self.state.drain_events();
        serde_json::to_string(&events).map_err(to_js_err)
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
