//! Selection geometry
//!
//! Turns a drag from one cell to another into a straight run of cells,
//! snapped to the nearest of eight compass directions.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::grid::{Coord, Direction, Grid};

/// Snap the vector from `start` to `end` to one of eight directions
///
/// Returns `None` when the two coordinates are equal.
pub fn snap_direction(start: Coord, end: Coord) -> Option<Direction> {
    let d_row = end.row as f64 - start.row as f64;
    let d_col = end.col as f64 - start.col as f64;
    if d_row == 0.0 && d_col == 0.0 {
        return None;
    }

    let angle = d_row.atan2(d_col);
    // angle is in [-π, π], so the shifted value is always positive
    let octant = (8.0 * angle / TAU + 8.0).round() as usize % 8;
    Some(Direction::from_octant(octant))
}

/// Cells from `start` toward `end`, snapped to a straight line
///
/// The run is `max(|Δrow|, |Δcol|) + 1` cells long, cut short at the first
/// cell that falls outside a `size` x `size` grid.
pub fn selected_path(start: Coord, end: Coord, size: usize) -> Vec<Coord> {
    let Some(direction) = snap_direction(start, end) else {
        return vec![start];
    };
    let (dr, dc) = direction.delta();
    let steps = start.row.abs_diff(end.row).max(start.col.abs_diff(end.col));

    (0..=steps)
        .map_while(|i| start.offset(dr, dc, i, size))
        .collect()
}

/// Characters along `path`, in path order; one char per cell, unset
/// cells read as `・`
///
/// Coordinates must lie inside the grid; paths from [`selected_path`]
/// always do.
pub fn word_from_path(grid: &Grid, path: &[Coord]) -> String {
    path.iter()
        .map(|&coord| grid[coord].ch.unwrap_or('・'))
        .collect()
}

/// An in-progress drag over the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSelection {
    pub start: Coord,
    pub end: Coord,
    /// Current snapped path (start first)
    pub path: Vec<Coord>,
}

impl DragSelection {
    pub fn new(start: Coord) -> Self {
        Self {
            start,
            end: start,
            path: vec![start],
        }
    }

    /// Move the drag end; returns true if the highlighted path changed
    pub fn update(&mut self, end: Coord, size: usize) -> bool {
        self.end = end;
        let path = selected_path(self.start, end, size);
        if path == self.path {
            return false;
        }
        self.path = path;
        true
    }

    /// The same cells, end first
    pub fn reversed_path(&self) -> Vec<Coord> {
        self.path.iter().rev().copied().collect()
    }
}
