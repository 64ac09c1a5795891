//! ecpass - deterministic strong passwords from memorable ones
//!
//! # Commands
//!
//! - `ecpass generate -m <memorable> -l <length>` - Print the strong password
//! - `ecpass inspect -m <memorable> -l <length>` - Dump every pipeline stream
//! - `ecpass noise` - Write the noise CSV used to evolve the recurrence
//!
//! Logs go to stderr; stdout carries only command output.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser, Subcommand};
use ecpass_cli::commands::inspect::{InspectFormat, SeedSource};
use ecpass_cli::commands::{generate, inspect, noise};
use ecpass_cli::config::{build_config, CliArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Deterministic strong password generator
#[derive(Parser, Debug)]
#[command(name = "ecpass")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a strong password from a memorable one
    Generate {
        /// Memorable password
        #[arg(short, long)]
        memorable: String,

        /// Strong password length
        #[arg(short, long)]
        length: usize,

        /// Write the password record to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Numeric policy (strict, propagate)
        #[arg(long)]
        policy: Option<String>,
    },

    /// Show the raw, uniform and character streams of one run
    #[command(group(ArgGroup::new("source").required(true).args(["memorable", "seed"])))]
    Inspect {
        /// Memorable password
        #[arg(short, long)]
        memorable: Option<String>,

        /// Explicit stream seed
        #[arg(short, long, allow_negative_numbers = true)]
        seed: Option<f64>,

        /// Stream length
        #[arg(short, long)]
        length: usize,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Numeric policy (strict, propagate)
        #[arg(long)]
        policy: Option<String>,
    },

    /// Write the symbolic-regression noise CSV
    Noise {
        /// Number of rows
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Output CSV path
        #[arg(short, long, value_name = "FILE")]
        path: Option<PathBuf>,

        /// Seed for a reproducible file
        #[arg(long)]
        rng_seed: Option<u64>,
    },
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let (output_file, numeric_policy) = match &self.command {
            Commands::Generate { output, policy, .. } => (output.clone(), policy.clone()),
            Commands::Inspect { policy, .. } => (None, policy.clone()),
            Commands::Noise { .. } => (None, None),
        };
        CliArgs {
            config_file: self.config.clone(),
            verbose: self.verbose,
            log_level: self.log_level.clone(),
            output_file,
            numeric_policy,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args()).context("failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());
    tracing::debug!(
        version = ecpass_cli::VERSION,
        log_level = %config.log_level,
        policy = %config.numeric_policy,
        min_length = config.min_length,
        max_length = config.max_length,
        "configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Generate {
            memorable, length, ..
        } => {
            generate::run(&config, &memorable, length, &mut out)?;
        }
        Commands::Inspect {
            memorable,
            seed,
            length,
            format,
            ..
        } => {
            let source = match (memorable, seed) {
                (Some(memorable), _) => SeedSource::Memorable(memorable),
                (None, Some(seed)) => SeedSource::Seed(seed),
                (None, None) => anyhow::bail!("either --memorable or --seed is required"),
            };
            let format: InspectFormat = format.parse()?;
            inspect::run(&config, &source, length, format, &mut out)?;
        }
        Commands::Noise {
            count,
            path,
            rng_seed,
        } => {
            let count = count.unwrap_or(config.noise_count);
            let path = path.unwrap_or_else(|| config.noise_path.clone());
            noise::run(count, &path, rng_seed)?;
            writeln!(out, "Created {} with {} x,y rows", path.display(), count)?;
        }
    }

    Ok(())
}
