//! Kotoba Hunters - A JLPT vocabulary word-search puzzle
//!
//! Core modules:
//! - `sim`: Grid generation, selection geometry and the game session
//! - `vocab`: Word records, JLPT levels and CSV vocabulary loading
//! - `settings`: Persisted player preferences
//! - `platform`: Browser bindings (wasm32 only)

pub mod settings;
pub mod sim;
pub mod vocab;

#[cfg(target_arch = "wasm32")]
pub mod platform;

pub use settings::Settings;
pub use vocab::{JlptLevel, VocabError, Word};

/// Game configuration constants
pub mod consts {
    /// Placement attempts per word before it is skipped
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 50;

    /// Grid size limits offered to the player
    pub const MIN_GRID_SIZE: usize = 4;
    pub const MAX_GRID_SIZE: usize = 10;
    pub const DEFAULT_GRID_SIZE: usize = 7;

    /// Common hiragana used to fill cells no word occupies
    pub const FILLER_CHARS: [char; 46] = [
        'あ', 'い', 'う', 'え', 'お', //
        'か', 'き', 'く', 'け', 'こ', //
        'さ', 'し', 'す', 'せ', 'そ', //
        'た', 'ち', 'つ', 'て', 'と', //
        'な', 'に', 'ぬ', 'ね', 'の', //
        'は', 'ひ', 'ふ', 'へ', 'ほ', //
        'ま', 'み', 'む', 'め', 'も', //
        'や', 'ゆ', 'よ', //
        'ら', 'り', 'る', 'れ', 'ろ', //
        'わ', 'を', 'ん',
    ];
}

/// Number of target words for a grid of the given size
#[inline]
pub fn word_count_for_grid_size(size: usize) -> usize {
    match size {
        s if s >= 10 => 24,
        9 => 20,
        8 => 16,
        7 => 12,
        6 => 10,
        5 => 8,
        _ => 6,
    }
}

/// Seed derived from wall-clock time (used for new games)
pub fn time_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_table() {
        assert_eq!(word_count_for_grid_size(4), 6);
        assert_eq!(word_count_for_grid_size(5), 8);
        assert_eq!(word_count_for_grid_size(6), 10);
        assert_eq!(word_count_for_grid_size(7), 12);
        assert_eq!(word_count_for_grid_size(8), 16);
        assert_eq!(word_count_for_grid_size(9), 20);
        assert_eq!(word_count_for_grid_size(10), 24);
        assert_eq!(word_count_for_grid_size(15), 24);
        assert_eq!(word_count_for_grid_size(1), 6);
    }

    #[test]
    fn test_filler_chars_are_unique_hiragana() {
        let mut chars = consts::FILLER_CHARS.to_vec();
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(chars.len(), consts::FILLER_CHARS.len());
        assert!(chars.iter().all(|c| ('\u{3041}'..='\u{3096}').contains(c)));
    }
}
