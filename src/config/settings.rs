//! Configuration settings for the simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub rows: usize,
    pub columns: usize,
    pub generations: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Pattern file to seed the grid from; when absent the grid is randomized
    pub pattern_file: Option<PathBuf>,
    /// Seed for the random generator; when absent, OS entropy is used
    pub seed: Option<u64>,
    /// Probability that a randomized cell starts alive
    pub density: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print every generation instead of just the first and last
    pub show_each_generation: bool,
    /// Write the run report here in addition to printing it
    pub output_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                rows: 20,
                columns: 40,
                generations: 10,
            },
            input: InputConfig {
                pattern_file: None,
                seed: None,
                density: 0.3,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_each_generation: false,
                output_file: None,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.rows == 0 {
            anyhow::bail!("Number of rows must be positive");
        }

        if self.simulation.columns == 0 {
            anyhow::bail!("Number of columns must be positive");
        }

        if !self.input.density.is_finite() || !(0.0..=1.0).contains(&self.input.density) {
            anyhow::bail!(
                "Density must be within 0.0..=1.0, got {}",
                self.input.density
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.simulation.rows = rows;
        }
        if let Some(columns) = cli_overrides.columns {
            self.simulation.columns = columns;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
        }
        if let Some(seed) = cli_overrides.seed {
            self.input.seed = Some(seed);
        }
        if let Some(density) = cli_overrides.density {
            self.input.density = density;
        }
        if let Some(ref output_file) = cli_overrides.output_file {
            self.output.output_file = Some(output_file.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub generations: Option<usize>,
    pub pattern_file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub density: Option<f64>,
    pub output_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.simulation.rows, 20);
        assert_eq!(settings.simulation.columns, 40);
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.simulation.rows = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.columns = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.input.density = 1.5;
        assert!(settings.validate().is_err());

        settings.input.density = f64::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/settings.yaml");

        let mut settings = Settings::default();
        settings.simulation.generations = 42;
        settings.input.seed = Some(99);
        settings.output.format = OutputFormat::Json;

        settings.to_file(&path).unwrap();
        let loaded = Settings::from_file(&path).unwrap();

        assert_eq!(loaded.simulation.generations, 42);
        assert_eq!(loaded.input.seed, Some(99));
        assert_eq!(loaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            rows: Some(8),
            generations: Some(3),
            density: Some(0.7),
            ..Default::default()
        };

        settings.merge_with_cli(&overrides);
        assert_eq!(settings.simulation.rows, 8);
        assert_eq!(settings.simulation.columns, 40); // untouched
        assert_eq!(settings.simulation.generations, 3);
        assert_eq!(settings.input.density, 0.7);
    }
}
