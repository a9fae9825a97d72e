//! Cascadia CLI - Command-line interface
//!
//! Commands:
//! - simulate: Build seeded boards with random legal play and score them
//! - tables: Print the salmon run tables
//! - init-config: Write a default configuration file

mod simulate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cascadia_core::{GameConfig, SalmonOption};

#[derive(Parser)]
#[command(name = "cascadia")]
#[command(about = "Cascadia board model and scoring engine")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate boards for several players and score them
    Simulate(simulate::SimulateArgs),
    /// Print run length -> points for every salmon option
    Tables,
    /// Write the default configuration as JSON
    InitConfig {
        #[arg(long, value_name = "FILE", default_value = "cascadia.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Simulate(args) => simulate::run(args),
        Commands::Tables => {
            print_tables();
            Ok(())
        }
        Commands::InitConfig { output } => {
            GameConfig::default()
                .save(&output)
                .with_context(|| format!("Failed to write config: {}", output.display()))?;
            tracing::info!("Wrote default config to {}", output.display());
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_tables() {
    println!("Salmon run scoring (run length: points)");
    for option in SalmonOption::ALL {
        let entries = option.table().entries();
        let row: Vec<String> = entries
            .iter()
            .enumerate()
            .map(|(i, points)| {
                if i + 1 == entries.len() {
                    format!("{}+: {}", i + 1, points)
                } else {
                    format!("{}: {}", i + 1, points)
                }
            })
            .collect();
        println!("  {}  {}", option, row.join(", "));
    }
}
