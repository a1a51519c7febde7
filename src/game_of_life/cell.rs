//! Cell state representation

use serde::{Deserialize, Serialize};

/// The two possible states of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Alive,
    Dead,
}

/// A single cell in the grid
///
/// Cells hold exactly one bit of simulation state. All transitions are
/// driven by the owning grid; the cell itself only stores and exposes
/// its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    state: CellState,
}

impl Cell {
    /// Create a new dead cell
    pub fn new() -> Self {
        Self {
            state: CellState::Dead,
        }
    }

    /// Check whether the cell is currently alive
    pub fn is_alive(&self) -> bool {
        self.state == CellState::Alive
    }

    /// Get the current state
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Set the state
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_dead() {
        let cell = Cell::new();
        assert!(!cell.is_alive());
        assert_eq!(cell.state(), CellState::Dead);
    }

    #[test]
    fn test_set_state() {
        let mut cell = Cell::default();
        cell.set_state(CellState::Alive);
        assert!(cell.is_alive());
        assert_eq!(cell.state(), CellState::Alive);

        cell.set_state(CellState::Dead);
        assert!(!cell.is_alive());
    }
}
