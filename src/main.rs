//! CLI for the toroidal Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_torus::{
    config::{CliOverrides, Settings},
    game_of_life::{create_example_patterns, load_pattern},
    run_simulation,
    utils::{ColorOutput, RunFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life_torus")]
#[command(about = "Toroidal Game of Life Simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of rows (overrides config)
        #[arg(short, long)]
        rows: Option<usize>,

        /// Number of columns (overrides config)
        #[arg(long)]
        columns: Option<usize>,

        /// Number of generations to advance (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Pattern file to seed the grid from (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Random seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Probability that a randomized cell starts alive (overrides config)
        #[arg(short, long)]
        density: Option<f64>,

        /// File to write the run report to (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print every generation instead of just the first and last
        #[arg(long)]
        show_each_generation: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Display a pattern file with statistics
    Show {
        /// Pattern file path
        #[arg(short, long)]
        pattern: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            rows,
            columns,
            generations,
            pattern,
            seed,
            density,
            output,
            show_each_generation,
        } => {
            let overrides = CliOverrides {
                rows,
                columns,
                generations,
                pattern_file: pattern,
                seed,
                density,
                output_file: output,
            };
            run_command(config, overrides, show_each_generation)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Show { pattern } => show_command(pattern),
    }
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    show_each_generation: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&overrides);
    if show_each_generation {
        settings.output.show_each_generation = true;
    }

    settings
        .validate()
        .context("Configuration validation failed")?;

    let history = run_simulation(&settings).context("Simulation failed")?;

    println!(
        "{}",
        RunFormatter::format_run(&history, settings.output.show_each_generation)
    );

    if let Some(ref output_file) = settings.output.output_file {
        RunFormatter::save_run(
            &history,
            output_file,
            settings.output.format,
            settings.output.show_each_generation,
        )
        .context("Failed to save run report")?;

        println!(
            "{}",
            ColorOutput::success(&format!("Run report saved to {}", output_file.display()))
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit the configuration in {}", config_path.display());
    println!("2. Run: cargo run -- run --pattern patterns/blinker.txt --generations 2");

    Ok(())
}

fn show_command(pattern_path: PathBuf) -> Result<()> {
    let grid = load_pattern(&pattern_path)
        .with_context(|| format!("Failed to load pattern from {}", pattern_path.display()))?;

    println!("Pattern ({}x{}):", grid.rows(), grid.columns());
    println!("{}", RunFormatter::format_grid_with_coords(&grid));

    let total = grid.rows() * grid.columns();
    println!("Statistics:");
    println!("  Living cells: {}", grid.alive_count());
    println!(
        "  Density: {:.1}%",
        (grid.alive_count() as f64 / total as f64) * 100.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_torus",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--seed",
            "42",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/blinker.txt").exists());
    }

    #[test]
    fn test_run_command_with_pattern() {
        let temp_dir = tempdir().unwrap();
        let pattern_path = temp_dir.path().join("blinker.txt");
        std::fs::write(&pattern_path, "00000\n00000\n01110\n00000\n00000\n").unwrap();

        let overrides = CliOverrides {
            generations: Some(2),
            pattern_file: Some(pattern_path),
            output_file: Some(temp_dir.path().join("out/report.txt")),
            ..Default::default()
        };

        let result = run_command(temp_dir.path().join("missing.yaml"), overrides, false);
        assert!(result.is_ok());
        assert!(temp_dir.path().join("out/report.txt").exists());
    }
}
