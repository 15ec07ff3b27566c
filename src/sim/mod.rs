//! Puzzle core
//!
//! Grid generation, selection geometry and the game session. Everything
//! here is pure logic:
//! - Randomness only through an injected (seeded) RNG
//! - No rendering, I/O or platform dependencies

pub mod generator;
pub mod grid;
pub mod selection;
pub mod state;

pub use generator::{Generated, Generator, Placement, can_place, generate};
pub use grid::{Cell, Coord, Direction, Grid, PlacementDirection};
pub use selection::{DragSelection, selected_path, snap_direction, word_from_path};
pub use state::{FlagPolicy, GameConfig, GameEvent, GamePhase, GameState, RngState};
