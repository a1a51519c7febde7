//! Game of Life core functionality

pub mod cell;
pub mod grid;
pub mod io;
pub mod rules;

pub use cell::{Cell, CellState};
pub use grid::{Grid, GridError};
pub use io::{create_example_patterns, load_pattern, save_pattern};
