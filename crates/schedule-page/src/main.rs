//! schedule-page CLI - searchable records-retention schedule page generator.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "schedule-page")]
#[command(about = "Build a searchable records-retention schedule page from CSV exports")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to schedules.toml config file
    #[arg(short, long, default_value = "schedules.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default schedules.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate the schedule page
    Build {
        /// K-State schedule CSV
        #[arg(long)]
        kstate: Option<PathBuf>,

        /// State general schedule CSV
        #[arg(long)]
        state: Option<PathBuf>,

        /// Regents schedule CSV
        #[arg(long)]
        regents: Option<PathBuf>,

        /// Output HTML file, overwritten if it exists
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the page in a full HTML document
        #[arg(long)]
        standalone: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Build {
            kstate,
            state,
            regents,
            output,
            standalone,
        } => {
            let overrides = commands::build::Overrides {
                kstate,
                state,
                regents,
                output,
                standalone: standalone.then_some(true),
            };
            let status = commands::build::run(&cli.config, overrides)?;
            Ok(ExitCode::from(status.code as u8))
        }
    }
}
