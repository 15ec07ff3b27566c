//! Grid model: cells, coordinates and directions
//!
//! The grid is square and stored row-major. A cell's character is `None`
//! only while the generator is still placing words.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// A (row, col) position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move `steps` times by `(dr, dc)`, or `None` if that leaves `[0, size)`
    pub fn offset(self, dr: isize, dc: isize, steps: usize, size: usize) -> Option<Coord> {
        let steps = steps as isize;
        let row = self.row as isize + dr * steps;
        let col = self.col as isize + dc * steps;
        let size = size as isize;
        if row < 0 || row >= size || col < 0 || col >= size {
            return None;
        }
        Some(Coord::new(row as usize, col as usize))
    }
}

/// Axes a word can be placed along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementDirection {
    Horizontal,
    Vertical,
    DiagonalDownRight,
}

impl PlacementDirection {
    pub const ALL: [PlacementDirection; 3] = [
        PlacementDirection::Horizontal,
        PlacementDirection::Vertical,
        PlacementDirection::DiagonalDownRight,
    ];

    /// Unit step as (row delta, col delta)
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            PlacementDirection::Horizontal => (0, 1),
            PlacementDirection::Vertical => (1, 0),
            PlacementDirection::DiagonalDownRight => (1, 1),
        }
    }
}

/// Eight compass directions a selection can snap to (rows grow downwards)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

impl Direction {
    /// Indexed by octant, starting at angle 0 and turning clockwise on screen
    pub const BY_OCTANT: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    pub fn from_octant(octant: usize) -> Self {
        Self::BY_OCTANT[octant % 8]
    }

    /// Unit step as (row delta, col delta)
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
        }
    }
}

/// A single grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    /// Display character (`None` = unset, only during generation)
    pub ch: Option<char>,
    /// Stable identifier for the rendering layer ("row-col")
    pub id: String,
    /// Part of a word the player has found
    #[serde(default)]
    pub found: bool,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            ch: None,
            id: format!("{row}-{col}"),
            found: false,
        }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

/// Square letter grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `size` x `size` grid with every cell unset
    pub fn empty(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Cell::new(row, col)))
            .collect();
        Self { size, cells }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        if self.contains(coord) {
            Some(&self.cells[coord.row * self.size + coord.col])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        if self.contains(coord) {
            let size = self.size;
            Some(&mut self.cells[coord.row * size + coord.col])
        } else {
            None
        }
    }

    /// Set a cell's character (test and fixture helper)
    pub fn set_char(&mut self, coord: Coord, ch: char) {
        self[coord].ch = Some(ch);
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics, an empty grid has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// True once every cell holds a character
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|c| c.ch.is_some())
    }

    pub fn found_count(&self) -> usize {
        self.cells.iter().filter(|c| c.found).count()
    }

    /// Flag the given cells as part of a found word
    pub fn mark_found(&mut self, path: &[Coord]) {
        for &coord in path {
            if let Some(cell) = self.get_mut(coord) {
                cell.found = true;
            }
        }
    }

    /// Path of `word` starting at `start` along `dir`, if the grid spells it there
    pub fn match_at(&self, word: &[char], start: Coord, dir: PlacementDirection) -> Option<Vec<Coord>> {
        if word.is_empty() {
            return None;
        }
        let (dr, dc) = dir.delta();
        let mut path = Vec::with_capacity(word.len());
        for (i, &expected) in word.iter().enumerate() {
            let coord = start.offset(dr, dc, i, self.size)?;
            if self[coord].ch != Some(expected) {
                return None;
            }
            path.push(coord);
        }
        Some(path)
    }

    /// Every occurrence of `word` along the three placement directions
    pub fn find_all(&self, word: &str) -> Vec<Vec<Coord>> {
        let chars: Vec<char> = word.chars().collect();
        let mut found = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                for dir in PlacementDirection::ALL {
                    if let Some(path) = self.match_at(&chars, Coord::new(row, col), dir) {
                        found.push(path);
                    }
                }
            }
        }
        found
    }

    /// First occurrence of `word` (row-major scan, directions in placement order)
    pub fn find_word(&self, word: &str) -> Option<Vec<Coord>> {
        let chars: Vec<char> = word.chars().collect();
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| Coord::new(row, col)))
            .find_map(|start| {
                PlacementDirection::ALL
                    .iter()
                    .find_map(|&dir| self.match_at(&chars, start, dir))
            })
    }

    /// Render as text, one row per line (unset cells shown as '・')
    pub fn to_text(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|c| c.ch.unwrap_or('・')).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Cell {
        assert!(self.contains(coord), "coordinate {coord:?} outside {0}x{0} grid", self.size);
        &self.cells[coord.row * self.size + coord.col]
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut Cell {
        assert!(self.contains(coord), "coordinate {coord:?} outside {0}x{0} grid", self.size);
        let size = self.size;
        &mut self.cells[coord.row * size + coord.col]
    }
}
