//! Game of Life transition rules

use super::CellState;

/// Maximum possible alive-neighbor count in a Moore neighborhood
pub const MAX_NEIGHBORS: u8 = 8;

/// Compute a cell's next state from its current state and alive-neighbor count.
///
/// The standard rules:
/// - Any live cell with fewer than two live neighbors dies (underpopulation).
/// - Any live cell with two or three live neighbors lives on.
/// - Any live cell with more than three live neighbors dies (overpopulation).
/// - Any dead cell with exactly three live neighbors becomes alive (reproduction).
pub fn next_state(alive: bool, alive_neighbors: u8) -> CellState {
    match (alive, alive_neighbors) {
        (true, 2) | (true, 3) | (false, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Neighbor counts that keep a live cell alive
pub fn survival_counts() -> Vec<u8> {
    vec![2, 3]
}

/// Neighbor counts that bring a dead cell to life
pub fn birth_counts() -> Vec<u8> {
    vec![3]
}
