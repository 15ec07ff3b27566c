//! Word placement and grid filling
//!
//! Greedy, bounded-retry placement: each candidate gets a fixed number of
//! random (direction, start) attempts and is skipped if none fits. There is
//! no backtracking, so dense grids may end up with fewer words than asked.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use super::grid::{Coord, Grid, PlacementDirection};
use crate::consts::{FILLER_CHARS, MAX_PLACEMENT_ATTEMPTS};
use crate::vocab::Word;

/// Where a placed word sits in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word_id: String,
    pub start: Coord,
    pub direction: PlacementDirection,
    pub len: usize,
}

impl Placement {
    /// Cells covered by the word, first character first
    pub fn path(&self) -> Vec<Coord> {
        let (dr, dc) = self.direction.delta();
        (0..self.len)
            .map(|i| {
                let i = i as isize;
                Coord::new(
                    (self.start.row as isize + dr * i) as usize,
                    (self.start.col as isize + dc * i) as usize,
                )
            })
            .collect()
    }
}

/// Result of one generator run
#[derive(Debug, Clone)]
pub struct Generated {
    pub grid: Grid,
    /// Placed words, in placement order
    pub placed_words: Vec<Word>,
    /// One entry per placed word, same order
    pub placements: Vec<Placement>,
}

/// Generator tunables
#[derive(Debug, Clone)]
pub struct Generator {
    pub max_attempts: u32,
    pub filler: &'static [char],
    pub directions: &'static [PlacementDirection],
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            filler: &FILLER_CHARS,
            directions: &PlacementDirection::ALL,
        }
    }
}

impl Generator {
    /// Build a grid of `size` holding up to `target_count` words from `pool`
    pub fn generate<R: Rng + ?Sized>(
        &self,
        pool: &[Word],
        target_count: usize,
        size: usize,
        rng: &mut R,
    ) -> Generated {
        let mut grid = Grid::empty(size);
        let mut placed_words = Vec::new();
        let mut placements = Vec::new();

        let mut shuffled: Vec<&Word> = pool.iter().collect();
        shuffled.shuffle(rng);

        for word in shuffled {
            if placed_words.len() >= target_count {
                break;
            }
            let chars: Vec<char> = word.hiragana.chars().collect();
            if chars.is_empty() {
                log::debug!("Skipping word {} with empty reading", word.id);
                continue;
            }

            match self.try_place(&mut grid, &chars, rng) {
                Some((start, direction)) => {
                    placements.push(Placement {
                        word_id: word.id.clone(),
                        start,
                        direction,
                        len: chars.len(),
                    });
                    placed_words.push(word.clone());
                }
                None => log::debug!(
                    "No room for {} after {} attempts, skipping",
                    word.hiragana,
                    self.max_attempts
                ),
            }
        }

        self.fill(&mut grid, rng);

        if placed_words.len() < target_count.min(pool.len()) {
            log::warn!(
                "Placed {} of {} requested words on a {}x{} grid",
                placed_words.len(),
                target_count,
                size,
                size
            );
        }

        Generated {
            grid,
            placed_words,
            placements,
        }
    }

    /// Random attempts for one word; commits the first valid placement
    fn try_place<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        word: &[char],
        rng: &mut R,
    ) -> Option<(Coord, PlacementDirection)> {
        let size = grid.size();
        if size == 0 {
            return None;
        }
        for _ in 0..self.max_attempts {
            let Some(&direction) = self.directions.choose(rng) else {
                return None;
            };
            let start = Coord::new(rng.random_range(0..size), rng.random_range(0..size));

            if can_place(grid, word, start, direction) {
                place(grid, word, start, direction);
                return Some((start, direction));
            }
        }
        None
    }

    /// Give every unset cell a random filler character
    fn fill<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) {
        for cell in grid.cells_mut().iter_mut().filter(|c| c.ch.is_none()) {
            cell.ch = Some(self.filler.choose(rng).copied().unwrap_or('・'));
        }
    }
}

/// Every target cell is in bounds and either unset or already holds the
/// required character (crossing words may share a letter)
pub fn can_place(grid: &Grid, word: &[char], start: Coord, direction: PlacementDirection) -> bool {
    let (dr, dc) = direction.delta();
    word.iter().enumerate().all(|(i, &ch)| {
        start
            .offset(dr, dc, i, grid.size())
            .is_some_and(|coord| grid[coord].ch.is_none_or(|c| c == ch))
    })
}

fn place(grid: &mut Grid, word: &[char], start: Coord, direction: PlacementDirection) {
    let (dr, dc) = direction.delta();
    for (i, &ch) in word.iter().enumerate() {
        if let Some(coord) = start.offset(dr, dc, i, grid.size()) {
            grid.set_char(coord, ch);
        }
    }
}

/// Generate with the default tunables
pub fn generate<R: Rng + ?Sized>(
    pool: &[Word],
    target_count: usize,
    size: usize,
    rng: &mut R,
) -> Generated {
    Generator::default().generate(pool, target_count, size, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn sample_words() -> Vec<Word> {
        vec![
            Word::new("w1", "たぶん", "多分", "probably"),
            Word::new("w2", "そうじ", "そうじ", "cleaning"),
            Word::new("w3", "がつ", "月", "month (counter)"),
        ]
    }

    fn assert_placed_words_findable(generated: &Generated) {
        for word in &generated.placed_words {
            assert!(
                generated.grid.find_word(&word.hiragana).is_some(),
                "{} should be findable",
                word.hiragana
            );
        }
    }

    #[test]
    fn test_generate_fills_all_cells() {
        let mut rng = Pcg32::seed_from_u64(7);
        let generated = generate(&sample_words(), 3, 7, &mut rng);

        assert!(generated.grid.is_filled());
        assert_eq!(generated.grid.size(), 7);
        let pool = sample_words();
        for word in &generated.placed_words {
            assert!(pool.contains(word));
        }
        assert_placed_words_findable(&generated);
    }

    #[test]
    fn test_empty_pool_gives_filler_grid() {
        let mut rng = Pcg32::seed_from_u64(1);
        let generated = generate(&[], 5, 4, &mut rng);
        assert!(generated.placed_words.is_empty());
        assert!(generated.grid.is_filled());
        for cell in generated.grid.cells() {
            assert!(FILLER_CHARS.contains(&cell.ch.unwrap()));
        }
    }

    #[test]
    fn test_respects_target_count() {
        let mut rng = Pcg32::seed_from_u64(3);
        let pool = crate::vocab::builtin_words();
        let generated = generate(&pool, 4, 8, &mut rng);
        assert_eq!(generated.placed_words.len(), 4);

        let generated = generate(&pool, 0, 8, &mut rng);
        assert!(generated.placed_words.is_empty());
    }

    #[test]
    fn test_typical_configuration_places_all() {
        let pool = crate::vocab::builtin_words();
        let mut rng = Pcg32::seed_from_u64(2024);
        let generated = generate(&pool, 12, 7, &mut rng);
        assert_eq!(generated.placed_words.len(), 12);
        assert_placed_words_findable(&generated);
    }

    #[test]
    fn test_placements_match_grid() {
        let pool = crate::vocab::builtin_words();
        let mut rng = Pcg32::seed_from_u64(11);
        let generated = generate(&pool, 10, 6, &mut rng);

        assert_eq!(generated.placements.len(), generated.placed_words.len());
        for (word, placement) in generated.placed_words.iter().zip(&generated.placements) {
            assert_eq!(word.id, placement.word_id);
            let spelled: String = placement
                .path()
                .into_iter()
                .map(|c| generated.grid[c].ch.unwrap())
                .collect();
            assert_eq!(spelled, word.hiragana);
        }
    }

    #[test]
    fn test_oversized_word_is_skipped() {
        let pool = vec![
            Word::new("long", "ながいことば", "長い言葉", "long word"),
            Word::new("short", "ねこ", "猫", "cat"),
        ];
        let mut rng = Pcg32::seed_from_u64(5);
        let generated = generate(&pool, 2, 4, &mut rng);
        assert_eq!(generated.placed_words.len(), 1);
        assert_eq!(generated.placed_words[0].id, "short");
    }

    #[test]
    fn test_empty_reading_is_skipped() {
        let pool = vec![Word::new("empty", "", "", "")];
        let mut rng = Pcg32::seed_from_u64(5);
        let generated = generate(&pool, 1, 4, &mut rng);
        assert!(generated.placed_words.is_empty());
        assert!(generated.grid.is_filled());
    }

    #[test]
    fn test_can_place_allows_matching_crossing() {
        let mut grid = Grid::empty(4);
        grid.set_char(Coord::new(0, 1), 'こ');
        let word: Vec<char> = "ねこ".chars().collect();
        assert!(can_place(&grid, &word, Coord::new(0, 0), PlacementDirection::Horizontal));
        assert!(!can_place(&grid, &word, Coord::new(0, 1), PlacementDirection::Horizontal));
        assert!(!can_place(&grid, &word, Coord::new(3, 3), PlacementDirection::Vertical));
    }

    #[test]
    fn test_same_seed_same_grid() {
        let pool = crate::vocab::builtin_words();
        let a = generate(&pool, 12, 7, &mut Pcg32::seed_from_u64(42));
        let b = generate(&pool, 12, 7, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.placed_words, b.placed_words);
    }
}
