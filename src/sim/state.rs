//! Game session state
//!
//! Owns the grid for one puzzle together with the placed words, the found
//! set and the drag in progress. The grid is only ever mutated through
//! `&mut GameState`, so the displayed grid and the generator never alias.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::generator::{Generator, Placement};
use super::grid::{Coord, Grid};
use super::selection::{DragSelection, word_from_path};
use crate::consts::DEFAULT_GRID_SIZE;
use crate::settings::Settings;
use crate::vocab::{JlptLevel, Word};
use crate::word_count_for_grid_size;

/// Current phase of the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Words left to find
    Playing,
    /// Every placed word found
    Complete,
}

/// Which cells get flagged when a word is found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FlagPolicy {
    /// Only the cells the player dragged over
    #[default]
    ExactPath,
    /// Every occurrence of the word along the placement directions
    AllOccurrences,
}

/// Feedback events for the presentation layer (sound, haptics, modals)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    NewGame { word_count: usize },
    SelectionStarted,
    /// Highlighted path grew or changed; `len` is its new length
    CellAdvanced { len: usize },
    WordFound { word_id: String },
    SelectionRejected,
    GameComplete,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Per-game configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub level: JlptLevel,
    pub grid_size: usize,
    /// Overrides the size-derived word count when set
    pub word_count: Option<usize>,
    pub flag_policy: FlagPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level: JlptLevel::default(),
            grid_size: DEFAULT_GRID_SIZE,
            word_count: None,
            flag_policy: FlagPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Number of words the generator is asked to place
    pub fn target_count(&self) -> usize {
        self.word_count
            .unwrap_or_else(|| word_count_for_grid_size(self.grid_size))
    }
}

impl From<&Settings> for GameConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            level: settings.level,
            grid_size: settings.grid_size,
            word_count: None,
            flag_policy: settings.flag_policy,
        }
    }
}

/// Complete puzzle state (serializable snapshot, never persisted)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub config: GameConfig,
    pub grid: Grid,
    /// Placed words, in placement order
    pub words: Vec<Word>,
    pub placements: Vec<Placement>,
    /// Found word ids, in the order they were found
    pub found_ids: Vec<String>,
    pub phase: GamePhase,
    /// Drag in progress
    pub selection: Option<DragSelection>,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Generate a new puzzle from `pool`
    pub fn new(pool: &[Word], config: GameConfig, seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            grid: Grid::empty(config.grid_size),
            config,
            words: Vec::new(),
            placements: Vec::new(),
            found_ids: Vec::new(),
            phase: GamePhase::Playing,
            selection: None,
            events: Vec::new(),
        };
        state.generate(pool);
        state
    }

    /// Replace the puzzle entirely with a freshly generated one
    pub fn restart(&mut self, pool: &[Word], seed: u64) {
        self.seed = seed;
        self.rng_state = RngState::new(seed);
        self.found_ids.clear();
        self.selection = None;
        self.phase = GamePhase::Playing;
        self.generate(pool);
    }

    fn generate(&mut self, pool: &[Word]) {
        let mut rng = self.rng_state.to_rng();
        let generated = Generator::default().generate(
            pool,
            self.config.target_count(),
            self.config.grid_size,
            &mut rng,
        );
        self.grid = generated.grid;
        self.words = generated.placed_words;
        self.placements = generated.placements;

        log::info!(
            "New {} game: {}x{} grid, {} words (seed {})",
            self.config.level,
            self.config.grid_size,
            self.config.grid_size,
            self.words.len(),
            self.seed
        );
        self.events.push(GameEvent::NewGame {
            word_count: self.words.len(),
        });
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    pub fn found_count(&self) -> usize {
        self.found_ids.len()
    }

    pub fn is_found(&self, word_id: &str) -> bool {
        self.found_ids.iter().any(|id| id == word_id)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == GamePhase::Complete
    }

    /// Placed words not found yet, in placement order
    pub fn remaining_words(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| !self.is_found(&w.id))
    }

    /// Cells currently highlighted by the drag
    pub fn highlighted(&self) -> &[Coord] {
        self.selection.as_ref().map(|s| s.path.as_slice()).unwrap_or(&[])
    }

    /// Take queued events (oldest first)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a drag; ignored outside the grid or once the puzzle is done
    pub fn begin_selection(&mut self, coord: Coord) -> bool {
        if self.is_complete() || !self.grid.contains(coord) {
            return false;
        }
        self.selection = Some(DragSelection::new(coord));
        self.events.push(GameEvent::SelectionStarted);
        true
    }

    /// Move the drag end to `coord`
    pub fn update_selection(&mut self, coord: Coord) {
        let size = self.size();
        let Some(selection) = self.selection.as_mut() else {
            return;
        };
        let before = selection.path.len();
        // Only a growing path counts as an advance; backing up is silent
        if selection.update(coord, size) && selection.path.len() > before {
            self.events.push(GameEvent::CellAdvanced {
                len: selection.path.len(),
            });
        }
    }

    /// Drop the drag without checking it
    pub fn cancel_selection(&mut self) {
        self.selection = None;
    }

    /// Finish the drag and check it against the remaining words
    pub fn end_selection(&mut self) -> Option<Word> {
        let selection = self.selection.take()?;
        self.confirm_selection(&selection.path)
    }

    /// Check a path forward, then reversed, against unfound words
    ///
    /// On a match the word is marked found and its cells are flagged per
    /// the session's [`FlagPolicy`]. Path coordinates must be inside the
    /// grid.
    pub fn confirm_selection(&mut self, path: &[Coord]) -> Option<Word> {
        if self.is_complete() || path.is_empty() {
            return None;
        }

        let forward = word_from_path(&self.grid, path);
        let (word, matched_path) = match self.find_unfound(&forward) {
            Some(word) => (word, path.to_vec()),
            None => {
                let reversed: Vec<Coord> = path.iter().rev().copied().collect();
                let backward = word_from_path(&self.grid, &reversed);
                match self.find_unfound(&backward) {
                    Some(word) => (word, reversed),
                    None => {
                        log::debug!("No match for {} / {}", forward, backward);
                        self.events.push(GameEvent::SelectionRejected);
                        return None;
                    }
                }
            }
        };

        self.mark_found(&word, &matched_path);
        Some(word)
    }

    fn find_unfound(&self, reading: &str) -> Option<Word> {
        self.remaining_words().find(|w| w.hiragana == reading).cloned()
    }

    fn mark_found(&mut self, word: &Word, path: &[Coord]) {
        match self.config.flag_policy {
            FlagPolicy::ExactPath => self.grid.mark_found(path),
            FlagPolicy::AllOccurrences => {
                for occurrence in self.grid.find_all(&word.hiragana) {
                    self.grid.mark_found(&occurrence);
                }
                // A reversed match is not found by the forward scan
                self.grid.mark_found(path);
            }
        }

        self.found_ids.push(word.id.clone());
        self.events.push(GameEvent::WordFound {
            word_id: word.id.clone(),
        });
        log::info!(
            "Found {} ({}/{})",
            word.hiragana,
            self.found_count(),
            self.total_words()
        );

        if self.found_count() == self.total_words() {
            self.phase = GamePhase::Complete;
            self.events.push(GameEvent::GameComplete);
            log::info!("All {} words found", self.total_words());
        }
    }
}
