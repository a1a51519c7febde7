//! Toroidal grid representation and generation advance

use super::cell::{Cell, CellState};
use super::rules;
use itertools::iproduct;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors produced by grid construction and bulk operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    InvalidDimension { rows: usize, columns: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A fixed-size toroidal Game of Life grid
///
/// Cells are stored in a flat row-major vector of length rows*columns.
/// Row and column indices wrap around, so the last row is adjacent to the
/// first and every cell has a full set of 8 neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimension { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::new(); rows * columns],
        })
    }

    /// Create a grid from a 2D boolean array, true meaning alive
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let row_count = rows.len();
        let column_count = rows.first().map_or(0, |row| row.len());

        let mut grid = Self::new(row_count, column_count)?;

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != column_count {
                return Err(GridError::InvalidArgument(format!(
                    "row {} has length {}, expected {}",
                    row_index,
                    row.len(),
                    column_count
                )));
            }
            for (column_index, &alive) in row.iter().enumerate() {
                if alive {
                    let index = grid.index(row_index, column_index);
                    grid.cells[index].set_state(CellState::Alive);
                }
            }
        }

        Ok(grid)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Convert in-range 2D coordinates to the flat index
    #[inline]
    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Normalize arbitrary coordinates onto the torus.
    ///
    /// This is the single normalization point; every coordinate-based
    /// lookup routes through here, so no out-of-bounds access is possible
    /// for any integer input.
    #[inline]
    fn wrap(&self, row: isize, column: isize) -> (usize, usize) {
        let wrapped_row = row.rem_euclid(self.rows as isize) as usize;
        let wrapped_column = column.rem_euclid(self.columns as isize) as usize;
        (wrapped_row, wrapped_column)
    }

    /// Get the cell at the given coordinates, wrapping around the edges.
    ///
    /// Accepts any integer index: row -1 resolves to the last row and row
    /// `rows` resolves back to row 0, and likewise for columns.
    pub fn cell(&self, row: isize, column: isize) -> &Cell {
        let (row, column) = self.wrap(row, column);
        &self.cells[self.index(row, column)]
    }

    /// Mutable access to the cell at the given coordinates, wrapping around
    pub fn cell_mut(&mut self, row: isize, column: isize) -> &mut Cell {
        let (row, column) = self.wrap(row, column);
        let index = self.index(row, column);
        &mut self.cells[index]
    }

    /// Set the state of the cell at the given (wrapping) coordinates
    pub fn set_state(&mut self, row: isize, column: isize, state: CellState) {
        self.cell_mut(row, column).set_state(state);
    }

    /// The 8 neighbors of a cell in row-major offset order.
    ///
    /// Offsets run over (row-1, row, row+1) and within each over
    /// (column-1, column, column+1), skipping the cell itself. Every
    /// offset resolves through the wraparound lookup, so the result always
    /// has exactly 8 entries, corners and edges included.
    pub fn neighbors(&self, row: isize, column: isize) -> Vec<&Cell> {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(row_offset, column_offset)| (row_offset, column_offset) != (0, 0))
            .map(|(row_offset, column_offset)| self.cell(row + row_offset, column + column_offset))
            .collect()
    }

    /// Count the alive neighbors of a cell, in 0..=8
    pub fn count_alive_neighbors(&self, row: isize, column: isize) -> u8 {
        self.neighbors(row, column)
            .iter()
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next state of a single cell from the current board.
    ///
    /// Pure with respect to the grid: nothing is mutated.
    pub fn next_state_at(&self, row: isize, column: isize) -> CellState {
        let alive = self.cell(row, column).is_alive();
        let alive_neighbors = self.count_alive_neighbors(row, column);
        rules::next_state(alive, alive_neighbors)
    }

    /// Compute the next state of every cell from the current generation.
    ///
    /// Returns a freshly allocated row-major snapshot of rows*columns
    /// states; the grid itself is untouched. Computing the full snapshot
    /// before applying it is what makes the update simultaneous: no cell's
    /// next state ever sees an already-updated neighbor.
    pub fn next_states(&self) -> Vec<CellState> {
        iproduct!(0..self.rows, 0..self.columns)
            .map(|(row, column)| self.next_state_at(row as isize, column as isize))
            .collect()
    }

    /// Apply a precomputed row-major snapshot onto the grid
    pub fn apply_states(&mut self, next_states: &[CellState]) -> Result<(), GridError> {
        if next_states.len() != self.cells.len() {
            return Err(GridError::InvalidArgument(format!(
                "snapshot has {} states, expected {} for a {}x{} grid",
                next_states.len(),
                self.cells.len(),
                self.rows,
                self.columns
            )));
        }
        for (cell, &state) in self.cells.iter_mut().zip(next_states) {
            cell.set_state(state);
        }
        Ok(())
    }

    /// Advance the whole grid one generation.
    ///
    /// Snapshot first, then apply, as one logical atomic step.
    pub fn step(&mut self) {
        let next_states = self.next_states();
        for (cell, state) in self.cells.iter_mut().zip(next_states) {
            cell.set_state(state);
        }
    }

    /// Advance the grid by the given number of generations
    pub fn step_generations(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Set every cell to dead
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.set_state(CellState::Dead);
        }
    }

    /// Randomize the grid, each cell independently alive with probability `density`
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) -> Result<(), GridError> {
        if !density.is_finite() || !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidArgument(format!(
                "density must be within 0.0..=1.0, got {density}"
            )));
        }
        for cell in &mut self.cells {
            let state = if rng.random_bool(density) {
                CellState::Alive
            } else {
                CellState::Dead
            };
            cell.set_state(state);
        }
        Ok(())
    }

    /// Iterate over all cells in row-major order, left-to-right then top-to-bottom
    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate over all cell states in row-major order
    pub fn iter_states(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().map(Cell::state)
    }

    /// Coordinates of all living cells in row-major order
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.rows, 0..self.columns)
            .filter(|&(row, column)| self.cells[self.index(row, column)].is_alive())
            .collect()
    }

    /// Count the living cells
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check whether the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let alive = self.cells[self.index(row, column)].is_alive();
                write!(f, "{}", if alive { '█' } else { '·' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
