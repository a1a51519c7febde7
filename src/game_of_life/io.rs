//! Pattern file I/O
//!
//! Patterns are plain text: one line per row, '1' for alive cells and '0'
//! for dead cells. All rows must have the same length.

use super::Grid;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a pattern from a text file
pub fn load_pattern<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Parse a pattern from its string representation
pub fn parse_pattern(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let width = lines[0].len();
    let mut rows = Vec::with_capacity(lines.len());

    for (row_index, line) in lines.iter().enumerate() {
        if line.len() != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                row_index,
                line.len(),
                width
            );
        }

        let mut row = Vec::with_capacity(width);
        for (column_index, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_index,
                    column_index
                ),
            }
        }
        rows.push(row);
    }

    Grid::from_rows(rows).map_err(Into::into)
}

/// Save a pattern to a text file, creating parent directories as needed
pub fn save_pattern<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = pattern_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to the pattern string representation
pub fn pattern_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.rows() * (grid.columns() + 1));

    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let alive = grid.cell(row as isize, column as isize).is_alive();
            result.push(if alive { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Create example pattern files
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Glider (moving pattern)
    let glider_content = "00100\n10100\n01100\n00000\n00000\n";
    std::fs::write(dir.join("glider.txt"), glider_content)
        .context("Failed to write glider.txt")?;

    // Blinker (period-2 oscillator)
    let blinker_content = "00000\n00000\n01110\n00000\n00000\n";
    std::fs::write(dir.join("blinker.txt"), blinker_content)
        .context("Failed to write blinker.txt")?;

    // Block (still life)
    let block_content = "0000\n0110\n0110\n0000\n";
    std::fs::write(dir.join("block.txt"), block_content)
        .context("Failed to write block.txt")?;

    // Beacon (period-2 oscillator)
    let beacon_content = "110000\n110000\n001100\n001100\n";
    std::fs::write(dir.join("beacon.txt"), beacon_content)
        .context("Failed to write beacon.txt")?;

    Ok(())
}
