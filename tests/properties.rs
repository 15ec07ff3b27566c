// Property tests for grid generation and selection geometry.
// Pure logic only, so they run under `cargo test` on the host.

use kotoba_hunters::consts::FILLER_CHARS;
use kotoba_hunters::sim::{Coord, GameConfig, GameState, Grid, generate, selected_path, word_from_path};
use kotoba_hunters::vocab::builtin_words;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

proptest! {
    #[test]
    fn generated_grid_has_no_unset_cells(seed in any::<u64>(), size in 1usize..=10, count in 0usize..30) {
        let pool = builtin_words();
        let generated = generate(&pool, count, size, &mut Pcg32::seed_from_u64(seed));

        prop_assert_eq!(generated.grid.size(), size);
        prop_assert!(generated.grid.is_filled());
        prop_assert!(generated.placed_words.len() <= count);
    }

    #[test]
    fn placed_words_are_findable(seed in any::<u64>(), size in 4usize..=10) {
        let pool = builtin_words();
        let count = kotoba_hunters::word_count_for_grid_size(size);
        let generated = generate(&pool, count, size, &mut Pcg32::seed_from_u64(seed));

        for word in &generated.placed_words {
            prop_assert!(pool.contains(word));
            prop_assert!(generated.grid.find_word(&word.hiragana).is_some(), "{} missing", word.hiragana);
        }
    }

    #[test]
    fn placed_words_are_unique(seed in any::<u64>()) {
        let pool = builtin_words();
        let generated = generate(&pool, 12, 7, &mut Pcg32::seed_from_u64(seed));
        let mut ids: Vec<&str> = generated.placed_words.iter().map(|w| w.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), generated.placed_words.len());
    }

    #[test]
    fn selected_path_is_straight_bounded_and_deterministic(
        size in 1usize..=10,
        sr in 0usize..10, sc in 0usize..10,
        er in 0usize..14, ec in 0usize..14,
    ) {
        prop_assume!(sr < size && sc < size);
        let start = Coord::new(sr, sc);
        let end = Coord::new(er, ec);
        let path = selected_path(start, end, size);

        prop_assert_eq!(&path, &selected_path(start, end, size));
        prop_assert_eq!(path[0], start);

        let steps = sr.abs_diff(er).max(sc.abs_diff(ec));
        prop_assert!(path.len() <= steps + 1);
        prop_assert!(path.iter().all(|c| c.row < size && c.col < size));

        // Constant unit step between consecutive cells
        if path.len() > 1 {
            let step = |a: Coord, b: Coord| (b.row as isize - a.row as isize, b.col as isize - a.col as isize);
            let first = step(path[0], path[1]);
            prop_assert!(first.0.abs() <= 1 && first.1.abs() <= 1 && first != (0, 0));
            for pair in path.windows(2) {
                prop_assert_eq!(step(pair[0], pair[1]), first);
            }
        }
    }

    #[test]
    fn selected_path_reaches_end_on_exact_lines(
        sr in 0usize..8, sc in 0usize..8, dir in 0usize..8, len in 0usize..8,
    ) {
        let deltas: [(isize, isize); 8] = [(0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1)];
        let (dr, dc) = deltas[dir];
        let er = sr as isize + dr * len as isize;
        let ec = sc as isize + dc * len as isize;
        prop_assume!((0..8).contains(&er) && (0..8).contains(&ec));

        let path = selected_path(Coord::new(sr, sc), Coord::new(er as usize, ec as usize), 8);
        prop_assert_eq!(path.len(), len + 1);
        prop_assert_eq!(path[len], Coord::new(er as usize, ec as usize));
    }
}

#[test]
fn word_from_path_reads_selected_cells() {
    let mut grid = Grid::empty(5);
    grid.set_char(Coord::new(2, 1), 'A');
    grid.set_char(Coord::new(2, 2), 'B');
    grid.set_char(Coord::new(2, 3), 'C');

    let path = selected_path(Coord::new(2, 1), Coord::new(2, 3), 5);
    assert_eq!(word_from_path(&grid, &path), "ABC");
}

#[test]
fn empty_pool_grid_is_all_filler() {
    let generated = generate(&[], 6, 5, &mut Pcg32::seed_from_u64(3));
    assert!(generated.placed_words.is_empty());
    assert!(
        generated
            .grid
            .cells()
            .iter()
            .all(|c| c.ch.is_some_and(|ch| FILLER_CHARS.contains(&ch)))
    );
}

#[test]
fn two_generations_are_independently_valid() {
    let pool = builtin_words();
    for seed in [1, 2] {
        let generated = generate(&pool, 12, 7, &mut Pcg32::seed_from_u64(seed));
        assert!(generated.grid.is_filled());
        for word in &generated.placed_words {
            assert!(generated.grid.find_word(&word.hiragana).is_some());
        }
    }
}

#[test]
fn full_game_can_be_completed_by_dragging_placements() {
    let pool = builtin_words();
    let mut state = GameState::new(&pool, GameConfig::default(), 2024);
    let placements = state.placements.clone();
    assert!(!placements.is_empty());

    for placement in placements.iter().rev() {
        let path = placement.path();
        // Drag from the last letter back to the first
        let (first, last) = (path[0], path[path.len() - 1]);
        assert!(state.begin_selection(last));
        state.update_selection(first);
        let found = state.end_selection();
        assert_eq!(found.map(|w| w.id), Some(placement.word_id.clone()));
    }

    assert!(state.is_complete());
    assert_eq!(state.found_count(), state.total_words());
    for placement in &placements {
        for coord in placement.path() {
            assert!(state.grid[coord].found);
        }
    }
}
