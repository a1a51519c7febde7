//! Toroidal Game of Life Simulator
//!
//! This library simulates Conway's Game of Life on a toroidal (wraparound)
//! grid: every cell has a full set of 8 neighbors and the whole grid
//! advances synchronously from one generation to the next.

pub mod config;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Cell, CellState, Grid, GridError};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seed a grid according to the settings: from a pattern file when one is
/// configured, otherwise randomized with the configured seed and density.
pub fn seed_grid(settings: &Settings) -> Result<Grid> {
    match settings.input.pattern_file {
        Some(ref path) => game_of_life::load_pattern(path),
        None => {
            let mut grid = Grid::new(settings.simulation.rows, settings.simulation.columns)?;
            let mut rng = match settings.input.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            grid.randomize(&mut rng, settings.input.density)?;
            Ok(grid)
        }
    }
}

/// Run a simulation per the settings and return the generation history,
/// initial state first
pub fn run_simulation(settings: &Settings) -> Result<Vec<Grid>> {
    settings.validate().context("Invalid settings")?;

    let mut grid = seed_grid(settings)?;
    let mut history = Vec::with_capacity(settings.simulation.generations + 1);
    history.push(grid.clone());

    for _ in 0..settings.simulation.generations {
        grid.step();
        history.push(grid.clone());
    }

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_simulation_with_seed() {
        let mut settings = Settings::default();
        settings.simulation.rows = 10;
        settings.simulation.columns = 10;
        settings.simulation.generations = 4;
        settings.input.seed = Some(7);

        let history = run_simulation(&settings).unwrap();
        assert_eq!(history.len(), 5);
        assert_eq!(history[0].rows(), 10);

        // Same seed gives the same run
        let again = run_simulation(&settings).unwrap();
        assert_eq!(history, again);
    }

    #[test]
    fn test_run_simulation_from_pattern() {
        let temp_dir = tempfile::tempdir().unwrap();
        let pattern_path = temp_dir.path().join("blinker.txt");
        std::fs::write(&pattern_path, "00000\n00000\n01110\n00000\n00000\n").unwrap();

        let mut settings = Settings::default();
        settings.simulation.generations = 2;
        settings.input.pattern_file = Some(pattern_path);

        let history = run_simulation(&settings).unwrap();
        assert_eq!(history.len(), 3);
        // Period-2 oscillator returns to its start
        assert_eq!(history[0], history[2]);
        assert_ne!(history[0], history[1]);
    }

    #[test]
    fn test_run_simulation_rejects_invalid_settings() {
        let mut settings = Settings::default();
        settings.simulation.rows = 0;
        assert!(run_simulation(&settings).is_err());
    }
}
