//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::Grid;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable summary of a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub rows: usize,
    pub columns: usize,
    pub generations: usize,
    pub alive_per_generation: Vec<usize>,
    pub initial: Grid,
    pub r#final: Grid,
}

impl RunReport {
    /// Build a report from a generation history (initial state first)
    pub fn from_history(history: &[Grid]) -> Result<Self> {
        let initial = history
            .first()
            .context("Run history is empty")?
            .clone();
        let last = history
            .last()
            .context("Run history is empty")?
            .clone();

        Ok(Self {
            rows: initial.rows(),
            columns: initial.columns(),
            generations: history.len() - 1,
            alive_per_generation: history.iter().map(Grid::alive_count).collect(),
            initial,
            r#final: last,
        })
    }
}

/// Format simulation runs for display
pub struct RunFormatter;

impl RunFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        grid.to_string()
    }

    /// Format a grid with row and column coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for column in 0..grid.columns() {
            output.push_str(&format!("{:2}", column % 10));
        }
        output.push('\n');

        for row in 0..grid.rows() {
            output.push_str(&format!("{:2} ", row));
            for column in 0..grid.columns() {
                let alive = grid.cell(row as isize, column as isize).is_alive();
                output.push_str(if alive { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Format a full run for console output
    pub fn format_run(history: &[Grid], show_each_generation: bool) -> String {
        let mut output = String::new();

        if history.is_empty() {
            return output;
        }

        if show_each_generation {
            for (generation, grid) in history.iter().enumerate() {
                output.push_str(&format!(
                    "Generation {} (Living: {}):\n",
                    generation,
                    grid.alive_count()
                ));
                output.push_str(&Self::format_grid_compact(grid));
                output.push('\n');
            }
        } else {
            let first = &history[0];
            let last = &history[history.len() - 1];

            output.push_str(&format!("Initial State (Living: {}):\n", first.alive_count()));
            output.push_str(&Self::format_grid_compact(first));
            output.push('\n');
            output.push_str(&format!(
                "Final State after {} generation(s) (Living: {}):\n",
                history.len() - 1,
                last.alive_count()
            ));
            output.push_str(&Self::format_grid_compact(last));
        }

        output
    }

    /// Render a run in the requested output format
    pub fn render_run(history: &[Grid], format: OutputFormat, show_each_generation: bool) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::format_run(history, show_each_generation)),
            OutputFormat::Json => {
                let report = RunReport::from_history(history)?;
                serde_json::to_string_pretty(&report).context("Failed to serialize run report")
            }
        }
    }

    /// Save a run report to a file, creating parent directories as needed
    pub fn save_run<P: AsRef<Path>>(
        history: &[Grid],
        path: P,
        format: OutputFormat,
        show_each_generation: bool,
    ) -> Result<()> {
        let content = Self::render_run(history, format, show_each_generation)?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write run report: {}", path.as_ref().display()))?;

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if the terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::CellState;

    fn blinker_history() -> Vec<Grid> {
        let mut grid = Grid::new(5, 5).unwrap();
        for column in 1..=3 {
            grid.set_state(2, column, CellState::Alive);
        }
        let mut history = vec![grid.clone()];
        grid.step();
        history.push(grid);
        history
    }

    #[test]
    fn test_grid_formatting() {
        let history = blinker_history();

        let compact = RunFormatter::format_grid_compact(&history[0]);
        assert!(compact.contains('█'));
        assert!(compact.contains('·'));

        let with_coords = RunFormatter::format_grid_with_coords(&history[0]);
        assert!(with_coords.contains(" 0 1 2"));
        assert!(with_coords.contains("██"));
    }

    #[test]
    fn test_format_run() {
        let history = blinker_history();

        let summary = RunFormatter::format_run(&history, false);
        assert!(summary.contains("Initial State (Living: 3)"));
        assert!(summary.contains("Final State after 1 generation(s) (Living: 3)"));

        let full = RunFormatter::format_run(&history, true);
        assert!(full.contains("Generation 0"));
        assert!(full.contains("Generation 1"));
    }

    #[test]
    fn test_json_report() {
        let history = blinker_history();

        let json = RunFormatter::render_run(&history, OutputFormat::Json, false).unwrap();
        let report: RunReport = serde_json::from_str(&json).unwrap();

        assert_eq!(report.rows, 5);
        assert_eq!(report.columns, 5);
        assert_eq!(report.generations, 1);
        assert_eq!(report.alive_per_generation, vec![3, 3]);
        assert_eq!(report.initial, history[0]);
        assert_eq!(report.r#final, history[1]);
    }

    #[test]
    fn test_save_run() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("reports/run.json");

        let history = blinker_history();
        RunFormatter::save_run(&history, &path, OutputFormat::Json, false).unwrap();

        assert!(path.exists());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<RunReport>(&content).is_ok());
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
